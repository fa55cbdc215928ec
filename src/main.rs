use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::PathBuf;
use tracing::debug;

use experiment_kit::colours::{any_colour, generate_xkcd_colours, is_near_black};
use experiment_kit::config::KitConfig;
use experiment_kit::{
    ensure_we_can_save, get_device, get_moving_average, get_seed, logging, user_has_requested_stop, Logger,
};

#[derive(Parser, Debug)]
#[command(name = "experiment-kit")]
#[command(about = "Helpers for machine-learning experiments")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List XKCD colours in preference order
    Colours {
        /// Colour definition file (defaults to the configured one)
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Stop after this many colours
        #[arg(short, long)]
        count: Option<usize>,

        /// Leave out colours that are nearly black
        #[arg(long)]
        skip_dark: bool,
    },

    /// Print the given seed, or a newly generated one
    Seed { seed: Option<u64> },

    /// Show which compute device would be used
    Device,

    /// Check for a stop file, consuming it if present
    StopCheck {
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// Smooth a series (one number per line), logging `index average` lines to a run log
    Smooth {
        file: PathBuf,

        /// Points per average (defaults to the configured window)
        #[arg(short, long)]
        window: Option<usize>,

        /// Base name of the run log (defaults to the configured prefix)
        #[arg(long)]
        log_prefix: Option<PathBuf>,
    },

    /// Turn `<BASE>.pth` into `<BASE>.bak` so a new checkpoint can be saved
    Rotate { base: PathBuf },
}

fn main() -> Result<()> {
    logging::setup_logging(logging::DEFAULT_LOG_FILTER);

    let cli = Cli::parse();
    let config = KitConfig::load();
    debug!("Using config {:?}", config);

    match cli.command {
        Command::Colours {
            file,
            count,
            skip_dark,
        } => {
            let file = file.unwrap_or(config.colour_file);
            let filter = move |r: u8, g: u8, b: u8| {
                if skip_dark {
                    !is_near_black(r, g, b)
                } else {
                    any_colour(r, g, b)
                }
            };

            let colours = generate_xkcd_colours(&file, filter)
                .with_context(|| format!("Cannot read colours from {:?}", file))?;
            for colour in colours.take(count.unwrap_or(usize::MAX)) {
                println!("{}", colour?);
            }
        }
        Command::Seed { seed } => {
            let seed = get_seed(seed);
            println!("{}", seed);
        }
        Command::Device => {
            get_device();
        }
        Command::StopCheck { file } => {
            let file = file.unwrap_or(config.stop_file);
            if !user_has_requested_stop(&file)? {
                println!("No stop requested");
            }
        }
        Command::Smooth {
            file,
            window,
            log_prefix,
        } => {
            let contents =
                fs::read_to_string(&file).with_context(|| format!("Cannot read series from {:?}", file))?;
            let ys = contents
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(|line| {
                    line.parse::<f64>()
                        .with_context(|| format!("Not a number in {:?}: {:?}", file, line))
                })
                .collect::<Result<Vec<f64>>>()?;
            let xs: Vec<usize> = (0..ys.len()).collect();

            let window = window.unwrap_or(config.moving_average_window);
            let (x1s, y1s) = get_moving_average(&xs, &ys, window)?;

            let mut logger = Logger::new(log_prefix.unwrap_or_else(|| PathBuf::from(&config.log_prefix)));
            logger.scope(|log| {
                for (x, y) in x1s.iter().zip(&y1s) {
                    log.log(&format!("{} {}", x, y))?;
                }
                Ok(())
            })?;
        }
        Command::Rotate { base } => {
            ensure_we_can_save(&base).with_context(|| format!("Cannot rotate checkpoint {:?}", base))?;
        }
    }

    Ok(())
}
