//! Compute device selection
//!
//! The selected [`Device`] is returned to the caller, who passes it on to
//! whatever needs it. Nothing process-wide is changed.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use tracing::info;

/// Driver files present when an NVIDIA GPU is usable
const NVIDIA_DRIVER_PATHS: [&str; 2] = ["/proc/driver/nvidia/version", "/dev/nvidiactl"];

/// Where tensors should live
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Device {
    /// CUDA accelerator
    Cuda,
    /// General purpose CPU
    #[default]
    Cpu,
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Device::Cuda => write!(f, "cuda"),
            Device::Cpu => write!(f, "cpu"),
        }
    }
}

/// Reports whether an accelerator can be used
pub trait AcceleratorProbe {
    fn is_available(&self) -> bool;
}

/// Looks for a CUDA-capable driver, honouring `CUDA_VISIBLE_DEVICES`
#[derive(Debug, Clone, Copy, Default)]
pub struct CudaProbe;

impl AcceleratorProbe for CudaProbe {
    fn is_available(&self) -> bool {
        if let Ok(visible) = std::env::var("CUDA_VISIBLE_DEVICES") {
            let visible = visible.trim();
            if visible.is_empty() || visible == "-1" {
                return false;
            }
        }

        NVIDIA_DRIVER_PATHS.iter().any(|path| Path::new(path).exists())
    }
}

/// Use CUDA if available, announcing the choice on stdout as `Using device = {device}`
pub fn get_device() -> Device {
    get_device_with(&CudaProbe, |device| println!("Using device = {}", device))
}

/// Pick [`Device::Cuda`] if `probe` says an accelerator is available, else [`Device::Cpu`].
/// `notify` is told which device will be used.
pub fn get_device_with<P, F>(probe: &P, notify: F) -> Device
where
    P: AcceleratorProbe + ?Sized,
    F: FnOnce(Device),
{
    let device = if probe.is_available() {
        Device::Cuda
    } else {
        Device::Cpu
    };

    info!("Selected device {}", device);
    notify(device);
    device
}
