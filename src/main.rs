use clap::{Parser, Subcommand, ValueHint};
use env_logger::Env;
use log::{info, warn, LevelFilter};
use pan::{config::ConfigValidator, PanConfig, Zone, ZoneResultExt};
use std::{
    fs, path::{Path, PathBuf},
};
#[derive(Parser, Debug)]
#[command(
    name = "pan",
    author,
    version,
    about = "Inspect files with zone-scoped error propagation",
    long_about = r#"
Pan - zone-scoped error propagation

Every command runs under a single outermost boundary. Failures raised inside
the program are reported as a plain message on stderr with the configured
exit status; genuine bugs still crash with their original panic.

EXAMPLES:
  pan read Cargo.toml                    # Show size and line count of a file
  pan scan src/*.rs                      # Read many files in parallel
  pan config show                        # Print the effective configuration
  pan config init pan.json               # Write a default configuration file
  pan -c pan.json config check           # Validate a configuration file

For more information on any command, use: pan <command> --help
    "#
)]
struct Opt {
    #[command(subcommand)]
    command: Commands,
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
    #[arg(
        short,
        long,
        global = true,
        value_name = "FILE",
        value_hint = ValueHint::FilePath,
        help = "JSON configuration file",
        long_help = "Configuration controlling the exit status, message prefix \
                    and worker count. Defaults apply when omitted."
    )]
    config: Option<PathBuf>,
}
#[derive(Subcommand, Debug)]
enum Commands {
    Read {
        #[arg(
            value_name = "PATH",
            value_hint = ValueHint::FilePath,
            help = "File to read",
            long_help = "The file is read in full. A missing or unreadable file \
                        ends the program with the configured exit status."
        )]
        path: PathBuf,
    },
    Scan {
        #[arg(
            value_name = "PATH",
            num_args = 1..,
            value_hint = ValueHint::FilePath,
            help = "Files to read in parallel",
            long_help = "Each file is read on the worker pool under its own \
                        boundary, so one unreadable file does not stop the others."
        )]
        paths: Vec<PathBuf>,
    },
    Config { #[command(subcommand)] action: ConfigCommand },
}
#[derive(Subcommand, Debug)]
enum ConfigCommand {
    Show,
    Check,
    Init {
        #[arg(value_name = "PATH", value_hint = ValueHint::FilePath)]
        path: PathBuf,
        #[arg(short, long, help = "Overwrite an existing file")]
        force: bool,
    },
}
#[derive(Debug, Clone, Copy)]
struct FileSummary {
    bytes: usize,
    lines: usize,
}
fn main() {
    let opt = Opt::parse();
    let log_level = match opt.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::from_env(
            Env::default().default_filter_or(log_level.to_string()),
        )
        .init();
    let zone = Zone::new();
    let strict = !matches!(opt.command, Commands::Config { action: ConfigCommand::Check });
    let config = zone.run_or_exit(|| load_config(&zone, opt.config.as_deref(), strict));
    zone.run_or_exit_with(&config.fatal, || run(&zone, &config, opt.command));
}
/// Read the configuration. `config check` passes `strict = false` so that it
/// can report every problem itself instead of stopping at the first error.
fn load_config(zone: &Zone, path: Option<&Path>, strict: bool) -> PanConfig {
    let config = match path {
        Some(path) => PanConfig::load(path).or_raise(zone),
        None => PanConfig::default(),
    };
    if !strict {
        return config;
    }
    let result = ConfigValidator::new().validate_config(&config);
    for warning in &result.warnings {
        warn!("{}: {}", warning.field, warning.message);
    }
    zone.check(result.into_result());
    config
}
fn run(zone: &Zone, config: &PanConfig, command: Commands) {
    match command {
        Commands::Read { path } => handle_read(zone, &path),
        Commands::Scan { paths } => handle_scan(zone, config, paths),
        Commands::Config { action } => handle_config(zone, config, action),
    }
}
fn read_summary(zone: &Zone, path: &Path) -> FileSummary {
    let data = fs::read(path).or_raise(zone);
    FileSummary {
        bytes: data.len(),
        lines: data.iter().filter(|&&b| b == b'\n').count(),
    }
}
fn handle_read(zone: &Zone, path: &Path) {
    let summary = read_summary(zone, path);
    println!("{}: {} bytes, {} lines", path.display(), summary.bytes, summary.lines);
}
fn handle_scan(zone: &Zone, config: &PanConfig, paths: Vec<PathBuf>) {
    zone.must(
        rayon::ThreadPoolBuilder::new().num_threads(config.worker_count()).build_global(),
    );
    info!("Scanning {} file(s) with {} worker(s)", paths.len(), config.worker_count());
    let results = zone.par_catch(paths.clone(), |path| read_summary(zone, &path));
    let mut failed = 0;
    for (path, result) in paths.iter().zip(&results) {
        match result {
            Ok(summary) => {
                println!(
                    "✓ {}: {} bytes, {} lines", path.display(), summary.bytes, summary
                    .lines
                )
            }
            Err(e) => {
                failed += 1;
                println!("✗ {}: {}", path.display(), e);
            }
        }
    }
    if failed > 0 {
        zone.raise(anyhow::anyhow!("{} of {} file(s) could not be read", failed, paths.len()));
    }
}
fn handle_config(zone: &Zone, config: &PanConfig, action: ConfigCommand) {
    match action {
        ConfigCommand::Show => {
            println!("{}", zone.must(serde_json::to_string_pretty(config)));
        }
        ConfigCommand::Check => {
            let result = ConfigValidator::new().validate_config(config);
            for error in &result.errors {
                println!("error: {}: {}", error.field, error.message);
                if let Some(suggestion) = &error.suggestion {
                    println!("  {}", suggestion);
                }
            }
            for warning in &result.warnings {
                println!("warning: {}: {}", warning.field, warning.message);
                if let Some(suggestion) = &warning.suggestion {
                    println!("  {}", suggestion);
                }
            }
            zone.check(result.into_result());
            println!("Configuration is valid");
        }
        ConfigCommand::Init { path, force } => {
            if path.exists() && !force {
                zone.raise(
                    anyhow::anyhow!(
                        "{} already exists, use --force to overwrite", path.display()
                    ),
                );
            }
            PanConfig::default().save(&path).or_raise(zone);
            println!("✓ Wrote default configuration to {}", path.display());
        }
    }
}
