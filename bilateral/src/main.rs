use anyhow::{Context, Result};
use bilateral::cli::{self, Args};
use bilateral::filter::bilateral_with_params;
use bilateral::io::{ImageFormat, read_image, write_image};
use log::info;
use std::process::ExitCode;
use std::time::Instant;

fn main() -> ExitCode {
    let args = match cli::parse_from(std::env::args_os()) {
        Ok(args) => args,
        Err(e) => {
            // --help and --version also arrive here
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::from(1)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    env_logger::Builder::new()
        .filter_level(args.log_level())
        .parse_default_env()
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::from(1)
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let params = args.params();
    params.validate().context("invalid filter parameters")?;
    let strategy = args.strategy();
    info!("{params:?}, {strategy:?}");

    let input = read_image(&args.input_path)
        .with_context(|| format!("failed to read {}", args.input_path.display()))?;

    println!(
        "Running bilateral filter on {} ({} pixels).",
        args.input_path.display(),
        input.len()
    );
    println!();

    let start = Instant::now();
    let output = bilateral_with_params(&input, &params, strategy)
        .context("bilateral filter failed")?;
    let elapsed = start.elapsed();

    write_image(&output, &args.output_path, ImageFormat::Png)
        .with_context(|| format!("failed to write {}", args.output_path.display()))?;
    info!("wrote {}", args.output_path.display());

    println!("Total Run Time: {} seconds.", elapsed.as_secs_f64());
    Ok(())
}
