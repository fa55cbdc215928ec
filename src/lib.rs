//! Helpers for machine-learning experiments
//!
//! Each module stands alone:
//! - [`run_log`] - scoped console + file logger for long runs
//! - [`seed`] - pass through or generate a random seed
//! - [`stop`] - poll for a stop file to shut down gracefully
//! - [`colours`] - XKCD colour names for plots
//! - [`checkpoint`] - rotate a checkpoint into its backup before saving
//! - [`device`] - pick CUDA or CPU
//! - [`smoothing`] - moving average for noisy curves
//! - [`legend`] - sort legend entries by label

pub mod checkpoint;
pub mod colours;
pub mod config;
pub mod device;
pub mod error;
pub mod legend;
pub mod logging;
pub mod run_log;
pub mod seed;
pub mod smoothing;
pub mod stop;

pub use checkpoint::ensure_we_can_save;
pub use colours::{create_xkcd_colours, generate_xkcd_colours};
pub use device::{get_device, Device};
pub use error::{KitError, Result};
pub use legend::{sort_labels, LegendSource};
pub use run_log::Logger;
pub use seed::get_seed;
pub use smoothing::get_moving_average;
pub use stop::user_has_requested_stop;
