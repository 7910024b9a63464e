use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;

use clap::{Args as ClapArgs, Parser, Subcommand};
use color_eyre::eyre::{Result, WrapErr};

use wsx_overflow::app::{DetectRunner, OutputFormat};
use wsx_overflow::domain::OverflowConfigPatch;
use wsx_overflow::error;
use wsx_overflow::infra::adapters::{FileLayoutSource, TomlConfigSource};
use wsx_overflow::logging;
use wsx_overflow::ui::components::OverflowStrip;

/// Decide which items of a horizontal strip fit and which overflow.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory holding overflow.toml (defaults to the user config dir).
    #[arg(long, global = true, value_name = "DIR")]
    config_dir: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run detection against a captured layout (.json or .toml).
    Detect {
        layout: PathBuf,

        /// Print the report as JSON.
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        overrides: Overrides,
    },
    /// Lay out text labels in a terminal row of the given width.
    Strip {
        /// Row width in cells.
        #[arg(long)]
        width: u16,

        labels: Vec<String>,

        #[command(flatten)]
        overrides: Overrides,
    },
    /// Show the effective defaults, optionally saving the overrides.
    Config {
        /// Write the effective defaults back to overflow.toml.
        #[arg(long)]
        save: bool,

        #[command(flatten)]
        overrides: Overrides,
    },
}

#[derive(ClapArgs, Debug, Default)]
struct Overrides {
    #[arg(long)]
    gap: Option<f64>,
    #[arg(long)]
    reserved_width: Option<f64>,
    #[arg(long)]
    overflow_button_width: Option<f64>,
    #[arg(long)]
    padding: Option<f64>,
    #[arg(long = "min-visible")]
    min_visible_items: Option<usize>,
}

impl Overrides {
    fn to_patch(&self) -> OverflowConfigPatch {
        OverflowConfigPatch {
            gap: self.gap,
            reserved_width: self.reserved_width,
            overflow_button_width: self.overflow_button_width,
            padding: self.padding,
            min_visible_items: self.min_visible_items,
        }
    }
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    error::install_hooks()?;

    let args = Args::parse();
    logging::init_tracing(args.verbose);

    let config_source = match args.config_dir {
        Some(dir) => TomlConfigSource::with_config_dir(dir),
        None => TomlConfigSource::new()?,
    };
    let runner = DetectRunner::new(Arc::new(config_source), Arc::new(FileLayoutSource::new()));

    let mut stdout = io::stdout().lock();

    match args.command {
        Command::Detect {
            layout,
            json,
            overrides,
        } => {
            let report = runner
                .run(&layout, &overrides.to_patch())
                .wrap_err_with(|| format!("failed to detect overflow for {}", layout.display()))?;
            let format = if json {
                OutputFormat::Json
            } else {
                OutputFormat::Text
            };
            writeln!(stdout, "{}", report.render(format)?)?;
        }
        Command::Strip {
            width,
            labels,
            overrides,
        } => {
            let config = runner.effective_config(&overrides.to_patch())?;
            let labels: Vec<&str> = labels.iter().map(String::as_str).collect();
            let (text, _) = OverflowStrip::render_to_string(&labels, width, &config);
            writeln!(stdout, "{}", text)?;
        }
        Command::Config { save, overrides } => {
            let patch = overrides.to_patch();
            let config = if save {
                runner.save_defaults(&patch)?
            } else {
                runner.effective_config(&patch)?
            };
            writeln!(stdout, "{}", serde_json::to_string_pretty(&config)?)?;
        }
    }

    Ok(())
}
