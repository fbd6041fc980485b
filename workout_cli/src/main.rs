use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use workout_core::*;

#[derive(Parser)]
#[command(name = "workout")]
#[command(about = "Workout statistics from fitness tracker sensor packages", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Use this config file instead of the default location
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Report language (en, ru)
    #[arg(long, global = true)]
    locale: Option<Locale>,

    /// Output format (text, json)
    #[arg(long, global = true)]
    format: Option<OutputFormat>,
}

#[derive(Subcommand)]
enum Commands {
    /// Report the built-in sample packages (default)
    Demo,

    /// Report a single package given as a code and its readings
    Report {
        /// Activity code (SWM, RUN, WLK)
        code: String,

        /// Readings: action, duration, weight, then height (WLK) or pool length and laps (SWM)
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<f64>,
    },

    /// Report several packages from flags and/or a file
    Batch {
        /// Package as CODE:v1,v2,... (repeatable)
        #[arg(long = "package", short = 'p')]
        packages: Vec<String>,

        /// CSV (CODE,v1,v2,...) or JSON package file
        #[arg(long, short = 'i')]
        input: Option<PathBuf>,
    },

    /// Show the effective configuration
    Config {
        /// Write it to the default config path
        #[arg(long)]
        save: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    // Initialize logging
    workout_core::logging::init_with_level(&config.logging.level);

    let locale = cli.locale.unwrap_or(config.report.locale);
    let format = cli.format.unwrap_or(config.report.format);

    match cli.command {
        Some(Commands::Report { code, values }) => {
            cmd_print(&[WorkoutSample::new(code, values)], format, locale)
        }
        Some(Commands::Batch { packages, input }) => {
            let samples = collect_batch(&packages, input.as_deref())?;
            cmd_print(&samples, format, locale)
        }
        Some(Commands::Config { save }) => cmd_config(&config, save),
        Some(Commands::Demo) | None => {
            // Default to the demo packages
            let samples: &[WorkoutSample] = if config.packages.is_empty() {
                default_packages()
            } else {
                &config.packages
            };
            cmd_print(samples, format, locale)
        }
    }
}

fn collect_batch(packages: &[String], input: Option<&Path>) -> Result<Vec<WorkoutSample>> {
    let mut samples = packages
        .iter()
        .map(|p| parse_package(p))
        .collect::<Result<Vec<_>>>()?;

    if let Some(path) = input {
        samples.extend(load_packages(path)?);
    }

    if samples.is_empty() {
        return Err(Error::InvalidPackage(
            "no packages given (use --package or --input)".into(),
        ));
    }

    Ok(samples)
}

fn cmd_print(samples: &[WorkoutSample], format: OutputFormat, locale: Locale) -> Result<()> {
    tracing::debug!("Processing {} packages", samples.len());
    let reports = summarize(samples)?;
    for line in render_reports(&reports, format, locale)? {
        println!("{}", line);
    }
    Ok(())
}

fn cmd_config(config: &Config, save: bool) -> Result<()> {
    print!("{}", config.to_toml()?);

    if save {
        let path = Config::default_config_path()?;
        config.save_to(&path)?;
        println!("\n✓ Saved config to {}", path.display());
    }

    Ok(())
}
