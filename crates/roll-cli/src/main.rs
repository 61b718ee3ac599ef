use anyhow::Context;
use clap::Parser;
use roll_config::RollConfig;

mod cli;
mod pipeline;

fn main() {
    if let Err(error) = run() {
        eprintln!("taskroll error: {error:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let mut config = RollConfig::load().context("failed to load taskroll configuration")?;
    cli.apply_to(&mut config);
    config.validate().context("invalid command-line options")?;

    let root = std::env::current_dir().context("failed to read current directory")?;
    let report = pipeline::build_report(&root, &config)?;

    if cli.stdout {
        eprintln!("{}", report.summary);
        print!("{}", report.document);
        return Ok(());
    }

    let output_path = root.join(&config.report.output_filename);
    pipeline::publish(
        &report,
        &output_path,
        &config.report.output_filename,
        &mut std::io::stdout().lock(),
        &mut std::io::stderr().lock(),
    )
    .context("failed to print run summary")?;

    Ok(())
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("TASKROLL_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
