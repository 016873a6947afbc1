use anyhow::{bail, Context, Result};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use fourier_transform::core::image::{mean_squared_error, psnr, unquantized_mean_squared_error};
use fourier_transform::core::series::signals::{circle_points, demo_signal, regular_polygon};
use fourier_transform::{
    dft_forward, fft_forward, planned_forward, planned_forward_real, ClosedPathSeries, ComplexExt,
    ComplexNumber, EpicycleTracer, FourierConfig, FourierSeries, GrayscaleImage, ImageDct,
    PeriodicSeries, TracerOptions,
};
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use std::time::Instant;

fn cli() -> Command {
    Command::new("fourier")
        .version("0.1.0")
        .about("푸리에 급수 에피사이클 / 이미지 DCT 실험 도구")
        .subcommand_required(true)
        .arg(
            Arg::new("threads")
                .long("threads")
                .short('t')
                .global(true)
                .value_name("COUNT")
                .value_parser(value_parser!(usize))
                .help("rayon 스레드 수 (기본: CPU 코어 수)"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .value_name("FILE")
                .help("JSON 설정 파일"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("결과를 JSON 으로 출력"),
        )
        .subcommand(
            Command::new("series1d")
                .about("데모 파형의 1D 푸리에 급수")
                .arg(
                    Arg::new("samples")
                        .long("samples")
                        .short('n')
                        .value_parser(value_parser!(usize))
                        .default_value("512")
                        .help("샘플 개수"),
                )
                .arg(
                    Arg::new("amplitude")
                        .long("amplitude")
                        .value_parser(value_parser!(f64))
                        .default_value("60")
                        .help("파형 진폭"),
                )
                .arg(
                    Arg::new("limit")
                        .long("limit")
                        .short('l')
                        .value_parser(value_parser!(usize))
                        .help("주파수 제한 (기본: 샘플 개수)"),
                )
                .arg(
                    Arg::new("time")
                        .long("time")
                        .value_parser(value_parser!(f64))
                        .default_value("0")
                        .help("재구성 시각"),
                )
                .arg(
                    Arg::new("top")
                        .long("top")
                        .value_parser(value_parser!(usize))
                        .default_value("10")
                        .help("출력할 상위 성분 개수"),
                ),
        )
        .subcommand(
            Command::new("series2d")
                .about("닫힌 경로의 2D 푸리에 급수와 에피사이클 궤적")
                .arg(
                    Arg::new("shape")
                        .long("shape")
                        .value_parser(["circle", "polygon"])
                        .default_value("polygon")
                        .help("경로 모양"),
                )
                .arg(
                    Arg::new("points")
                        .long("points")
                        .value_parser(value_parser!(usize))
                        .default_value("256")
                        .help("원 샘플 개수"),
                )
                .arg(
                    Arg::new("sides")
                        .long("sides")
                        .value_parser(value_parser!(usize))
                        .default_value("5")
                        .help("정다각형 변 개수"),
                )
                .arg(
                    Arg::new("radius")
                        .long("radius")
                        .value_parser(value_parser!(f64))
                        .default_value("100")
                        .help("경로 반지름"),
                )
                .arg(
                    Arg::new("max-frequency")
                        .long("max-frequency")
                        .short('m')
                        .value_parser(value_parser!(usize))
                        .help("최대 주파수 (기본: 설정값)"),
                )
                .arg(
                    Arg::new("limit")
                        .long("limit")
                        .short('l')
                        .value_parser(value_parser!(usize))
                        .help("주파수 제한 (기본: 최대 주파수)"),
                )
                .arg(
                    Arg::new("frames")
                        .long("frames")
                        .value_parser(value_parser!(usize))
                        .default_value("200")
                        .help("한 주기 프레임 수"),
                ),
        )
        .subcommand(
            Command::new("dct")
                .about("합성 이미지 DCT 압축 실험")
                .arg(
                    Arg::new("size")
                        .long("size")
                        .value_parser(value_parser!(usize))
                        .help("이미지 한 변 크기 (기본: 설정값)"),
                )
                .arg(
                    Arg::new("compression")
                        .long("compression")
                        .short('c')
                        .value_parser(value_parser!(f32))
                        .help("버릴 계수 비율 0~1 (기본: 설정값)"),
                )
                .arg(
                    Arg::new("sweep")
                        .long("sweep")
                        .action(ArgAction::SetTrue)
                        .help("0.0 ~ 1.0 비율 전체를 측정"),
                ),
        )
        .subcommand(
            Command::new("bench")
                .about("DFT / FFT / 플래너 FFT 속도 비교")
                .arg(
                    Arg::new("size")
                        .long("size")
                        .value_parser(value_parser!(usize))
                        .default_value("1024")
                        .help("신호 길이 (2의 거듭제곱)"),
                )
                .arg(
                    Arg::new("iterations")
                        .long("iterations")
                        .value_parser(value_parser!(usize))
                        .default_value("5")
                        .help("반복 횟수"),
                ),
        )
}

fn main() -> Result<()> {
    env_logger::init();

    let matches = cli().get_matches();

    let mut config = match matches.get_one::<String>("config") {
        Some(path) => FourierConfig::from_json_file(path)
            .with_context(|| format!("설정 파일을 읽을 수 없음: {}", path))?,
        None => FourierConfig::default(),
    };
    if let Some(&threads) = matches.get_one::<usize>("threads") {
        config.threads = Some(threads);
    }

    let threads = config.threads.unwrap_or_else(num_cpus::get);
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global()
        .context("rayon 스레드 풀 초기화 실패")?;
    log::info!("threads={} engine={}", threads, config.engine.name());

    let json = matches.get_flag("json");
    match matches.subcommand() {
        Some(("series1d", sub)) => run_series1d(sub, &config, json),
        Some(("series2d", sub)) => run_series2d(sub, &config, json),
        Some(("dct", sub)) => run_dct(sub, &config, json),
        Some(("bench", sub)) => run_bench(sub),
        Some((name, _)) => bail!("알 수 없는 명령: {}", name),
        None => bail!("명령이 필요합니다"),
    }
}

#[derive(Serialize)]
struct ComponentRow {
    frequency: isize,
    re: f64,
    im: f64,
    radius: f64,
}

#[derive(Serialize)]
struct Series1dReport {
    samples: usize,
    limit: usize,
    time: f64,
    position: (f64, f64),
    components: Vec<ComponentRow>,
}

fn run_series1d(matches: &ArgMatches, config: &FourierConfig, json: bool) -> Result<()> {
    let n = *matches.get_one::<usize>("samples").context("samples")?;
    let amplitude = *matches.get_one::<f64>("amplitude").context("amplitude")?;
    let time = *matches.get_one::<f64>("time").context("time")?;
    let top = *matches.get_one::<usize>("top").context("top")?;
    let limit = matches.get_one::<usize>("limit").copied().unwrap_or(n);

    let series = PeriodicSeries::with_engine(&demo_signal(n, amplitude), config.engine)?;
    let mut tracer = EpicycleTracer::new(TracerOptions::periodic());
    let frame = tracer.draw(&series, time, limit);

    let mut components: Vec<ComponentRow> = series
        .enumerate(time, limit)
        .into_iter()
        .map(|c| ComponentRow {
            frequency: c.frequency,
            re: c.value.re,
            im: c.value.im,
            radius: c.radius(),
        })
        .collect();
    components.sort_by(|a, b| b.radius.total_cmp(&a.radius));
    components.truncate(top);

    let report = Series1dReport {
        samples: n,
        limit,
        time,
        position: frame.position.to_point(),
        components,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("1D 급수: 샘플 {}개, 주파수 제한 {}, t = {}", n, limit, time);
    println!("주파수 |     반지름 |        실수 |        허수");
    println!("-------|------------|-------------|------------");
    for row in &report.components {
        println!("{:6} | {:10.4} | {:11.4} | {:11.4}", row.frequency, row.radius, row.re, row.im);
    }
    println!("재구성 위치: ({:.4}, {:.4})", report.position.0, report.position.1);
    Ok(())
}

#[derive(Serialize)]
struct Series2dReport {
    samples: usize,
    maximum_frequency: usize,
    limit: usize,
    frames: usize,
    mean_radius: f64,
    max_deviation: f64,
    trace_segments: usize,
}

fn run_series2d(matches: &ArgMatches, config: &FourierConfig, json: bool) -> Result<()> {
    let radius = *matches.get_one::<f64>("radius").context("radius")?;
    let frames = *matches.get_one::<usize>("frames").context("frames")?;
    if frames == 0 {
        bail!("frames 는 1 이상이어야 합니다");
    }
    let maximum_frequency = matches
        .get_one::<usize>("max-frequency")
        .copied()
        .unwrap_or(config.maximum_frequency);
    let limit = matches.get_one::<usize>("limit").copied().unwrap_or(maximum_frequency);

    let series = match matches.get_one::<String>("shape").map(String::as_str) {
        Some("circle") => {
            let points = *matches.get_one::<usize>("points").context("points")?;
            ClosedPathSeries::new(&circle_points(points, radius), maximum_frequency)?
        }
        _ => {
            let sides = *matches.get_one::<usize>("sides").context("sides")?;
            ClosedPathSeries::from_polyline(&regular_polygon(sides, radius)?, maximum_frequency)?
        }
    };

    let mut tracer = EpicycleTracer::new(config.tracer.clone());
    let progress = ProgressBar::new(frames as u64);
    progress.set_style(
        ProgressStyle::with_template("{spinner} [{bar:40}] {pos}/{len} frames")?.progress_chars("=> "),
    );

    // 각 프레임 위치와 가장 가까운 샘플 사이 거리의 최댓값
    let samples = series.samples();
    let mut max_deviation = 0.0f64;
    let mut radius_sum = 0.0;
    for frame_index in 0..frames {
        let time = frame_index as f64 / frames as f64;
        let frame = tracer.draw(&series, time, limit);
        let position: ComplexNumber = frame.position - tracer.origin();
        radius_sum += position.length();

        let nearest = samples
            .iter()
            .map(|s| (s - position).norm())
            .fold(f64::INFINITY, f64::min);
        max_deviation = max_deviation.max(nearest);
        progress.inc(1);
    }
    progress.finish_and_clear();

    let report = Series2dReport {
        samples: samples.len(),
        maximum_frequency,
        limit,
        frames,
        mean_radius: radius_sum / frames as f64,
        max_deviation,
        trace_segments: tracer.trace().len(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("2D 급수: 샘플 {}개, 최대 주파수 {}, 제한 {}", report.samples, maximum_frequency, limit);
        println!("  - 프레임: {}", frames);
        println!("  - 평균 반지름: {:.4}", report.mean_radius);
        println!("  - 경로 최대 이탈: {:.4}", report.max_deviation);
        println!("  - 궤적 조각: {}", report.trace_segments);
    }
    Ok(())
}

#[derive(Serialize)]
struct DctRow {
    compression: f32,
    kept: usize,
    mse: f64,
    unquantized_mse: f64,
    psnr: f64,
}

/// 그라디언트 배경 위 원형 무늬
fn synthetic_image(size: usize) -> Result<GrayscaleImage> {
    let center = size as f64 / 2.0;
    let image = GrayscaleImage::from_fn(size, size, |x, y| {
        let dx = x as f64 - center;
        let dy = y as f64 - center;
        let ring = if (dx * dx + dy * dy).sqrt() < center * 0.6 { 80.0 } else { 0.0 };
        let gradient = (x + y) as f64 / (2 * size) as f64 * 150.0;
        (gradient + ring).min(255.0) as u8
    })?;
    Ok(image)
}

fn run_dct(matches: &ArgMatches, config: &FourierConfig, json: bool) -> Result<()> {
    let size = matches.get_one::<usize>("size").copied().unwrap_or(config.image.image_size);
    let image = synthetic_image(size)?;
    let frequency = ImageDct::forward(&image);

    let ratios: Vec<f32> = if matches.get_flag("sweep") {
        (0..=10).map(|step| step as f32 / 10.0).collect()
    } else {
        vec![matches
            .get_one::<f32>("compression")
            .copied()
            .unwrap_or(config.image.compression)]
    };

    let mut rows = Vec::with_capacity(ratios.len());
    for compression in ratios {
        let compressed = frequency.compress(compression)?;
        let restored = ImageDct::inverse(&compressed);
        rows.push(DctRow {
            compression,
            kept: compressed.nonzero_count(),
            mse: mean_squared_error(&image, &restored)?,
            unquantized_mse: unquantized_mean_squared_error(&image, &ImageDct::inverse_unquantized(&compressed))?,
            psnr: psnr(&image, &restored)?,
        });
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    println!("이미지 DCT: {}x{}", size, size);
    println!("압축률 | 유지 계수 |        MSE |  실수 MSE |   PSNR(dB)");
    println!("-------|-----------|------------|-----------|-----------");
    for row in &rows {
        println!(
            "{:6.2} | {:9} | {:10.3} | {:9.3} | {:10.2}",
            row.compression, row.kept, row.mse, row.unquantized_mse, row.psnr
        );
    }
    Ok(())
}

fn run_bench(matches: &ArgMatches) -> Result<()> {
    let n = *matches.get_one::<usize>("size").context("size")?;
    let iterations = (*matches.get_one::<usize>("iterations").context("iterations")?).max(1);
    if !n.is_power_of_two() {
        bail!("size 는 2의 거듭제곱이어야 합니다: {}", n);
    }

    let real = demo_signal(n, 64.0);
    let complex: Vec<ComplexNumber> = real.iter().map(|&x| ComplexNumber::new(x, 0.0)).collect();

    let measure = |label: &str, f: &dyn Fn() -> Result<()>| -> Result<()> {
        let start = Instant::now();
        for _ in 0..iterations {
            f()?;
        }
        let average = start.elapsed().as_secs_f64() / iterations as f64;
        println!("{:14} | {:12.3} ms", label, average * 1000.0);
        Ok(())
    };

    println!("신호 길이 {}, 반복 {}회", n, iterations);
    println!("엔진           |      평균 시간");
    println!("---------------|---------------");
    measure("straight dft", &|| {
        dft_forward(&complex);
        Ok(())
    })?;
    measure("radix-2 fft", &|| {
        fft_forward(&complex)?;
        Ok(())
    })?;
    measure("planned fft", &|| {
        planned_forward(&complex)?;
        Ok(())
    })?;
    measure("planned real", &|| {
        planned_forward_real(&real)?;
        Ok(())
    })?;
    Ok(())
}
