// main.rs - CLI entry point

use capprobe::cli::Config;
use capprobe::output::write_stats;
use capprobe::prelude::*;

fn main() {
    if let Err(e) = run_main() {
        eprintln!("ERROR: {}", e);
        std::process::exit(1);
    }
}

/// Logs go to stderr; an explicit level overrides RUST_LOG
fn init_logging(level: Option<log::LevelFilter>) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if let Some(level) = level {
        builder.filter_level(level);
    }
    builder.init();
}

fn run_main() -> Result<()> {
    let mut args: Args = argh::from_env();
    let command_line = std::env::args().collect::<Vec<String>>().join(" ");

    // Handle generate config first
    if args.generate_config {
        print!("{}", Config::generate_sample());
        return Ok(());
    }

    // Load configuration file if specified
    if let Some(config_path) = args.config.clone() {
        args = args.with_config_file(&config_path)?;
    }

    let validation_result = validate_args(&args)?;
    init_logging(validation_result.log_level);

    if let Some(config_path) = &args.config {
        log::info!("Loaded configuration from: {}", config_path);
    }
    log::debug!("{}", capprobe::get_info());

    let fasta = args.fasta.as_deref().ok_or_else(|| {
        ProbeError::config("a FASTA input is required (use - for stdin)")
    })?;

    let design = &validation_result.design;
    for warning in design.warnings() {
        log::warn!("{}", warning);
    }

    let target = TargetSequence::from_fasta_path(fasta)?;
    let report = design_probes(&target.sequence, design);

    if args.stats_only {
        let stdout = std::io::stdout();
        let mut writer = stdout.lock();
        return write_stats(&mut writer, &report.stats);
    }

    write_probes(
        args.output.as_deref(),
        validation_result.format,
        &report.probes,
        &args.probe_prefix,
        &command_line,
    )
}
