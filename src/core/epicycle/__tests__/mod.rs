mod tracer_test;
