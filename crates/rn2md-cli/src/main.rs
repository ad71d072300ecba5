use anyhow::{Context, Result};
use clap::Parser;
use rn2md_config::Config;
use rn2md_engine::{load_daily_entries, render_entries, resolve_dates, storage};
use std::path::PathBuf;
use std::process;

/// Print RedNotebook journal entries as Markdown
#[derive(Parser, Debug)]
#[command(name = "rn2md", author, version, about, long_about = None)]
struct Args {
    /// Dates to print: today, yesterday, tomorrow, this week, last week,
    /// next week or YYYY-MM-DD [default: today]
    date: Vec<String>,

    /// RedNotebook data directory
    #[arg(long)]
    data_path: Option<PathBuf>,

    /// Skip weekends when resolving dates
    #[arg(long)]
    workdays_only: bool,

    /// Extra header levels added to entry headers
    #[arg(long)]
    header_padding: Option<usize>,

    /// Config file to use instead of the default location
    #[arg(long)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn date_phrase(&self) -> String {
        if self.date.is_empty() {
            "today".to_string()
        } else {
            self.date.join(" ")
        }
    }
}

/// Command-line flags win over the config file, which wins over defaults.
fn resolve_config(args: &Args) -> Result<Config> {
    let loaded = match &args.config {
        Some(path) => Some(
            Config::load_from_path(path)?
                .with_context(|| format!("Config file '{}' not found", path.display()))?,
        ),
        None => Config::load()?,
    };

    let mut config = loaded.unwrap_or_default();
    if let Some(data_path) = &args.data_path {
        config.data_path = data_path.clone();
    }
    if let Some(header_padding) = args.header_padding {
        config.header_padding = header_padding;
    }
    config.workdays_only |= args.workdays_only;
    Ok(config)
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let config = resolve_config(&args)?;
    log::debug!("Using config: {config:?}");

    if let Err(e) = storage::validate_data_dir(&config.data_path) {
        eprintln!("Error: Data path '{}' is invalid: {e}", config.data_path.display());
        eprintln!("Pass --data-path or set data_path in {}", Config::config_path().display());
        process::exit(1);
    }

    let phrase = args.date_phrase();
    let dates = match resolve_dates(&phrase, config.workdays_only) {
        Ok(dates) => dates,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("Usage: rn2md [today|yesterday|tomorrow|this week|last week|next week|YYYY-MM-DD]");
            process::exit(1);
        }
    };

    let entries = load_daily_entries(&config.data_path)?;
    println!("{}", render_entries(&entries, &dates, config.header_padding));

    Ok(())
}
