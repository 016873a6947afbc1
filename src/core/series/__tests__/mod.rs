mod path_test;
