//! End-to-end use of the helpers the way a training script strings them together

use std::fs;
use std::io;

use experiment_kit::checkpoint::{backup_path, checkpoint_path};
use experiment_kit::colours::any_colour;
use experiment_kit::device::{get_device_with, AcceleratorProbe, Device};
use experiment_kit::seed::get_seed_with;
use experiment_kit::{
    create_xkcd_colours, ensure_we_can_save, get_moving_average, sort_labels, user_has_requested_stop,
    KitError, LegendSource, Logger,
};

struct NoGpu;

impl AcceleratorProbe for NoGpu {
    fn is_available(&self) -> bool {
        false
    }
}

struct Plot {
    curves: Vec<(usize, String)>,
}

impl LegendSource for Plot {
    type Handle = usize;

    fn legend_handles_labels(&self) -> (Vec<usize>, Vec<String>) {
        self.curves.iter().cloned().unzip()
    }
}

#[test]
fn training_run_logs_checkpoints_and_stops() {
    let dir = tempfile::tempdir().unwrap();
    let base = dir.path().join("model");
    let stop_file = dir.path().join("stop");

    let seed = get_seed_with(Some(1234), |_| panic!("seed was supplied"));
    let device = get_device_with(&NoGpu, |_| {});
    assert_eq!(device, Device::Cpu);

    let mut logger = Logger::with_console(dir.path().join("train_"), Box::new(io::sink()));
    let epochs = logger
        .scope(|log| {
            log.log(&format!("seed = {}, device = {}", seed, device))?;

            let mut epochs = 0;
            for epoch in 1..=10 {
                ensure_we_can_save(&base)?;
                fs::write(checkpoint_path(&base), format!("epoch {}", epoch))
                    .map_err(|e| KitError::io(checkpoint_path(&base), e))?;
                log.log(&format!("saved epoch {}", epoch))?;
                epochs = epoch;

                if epoch == 3 {
                    fs::write(&stop_file, "").map_err(|e| KitError::io(&stop_file, e))?;
                }
                if user_has_requested_stop(&stop_file)? {
                    log.log("stopping early")?;
                    break;
                }
            }
            Ok(epochs)
        })
        .unwrap();

    assert_eq!(epochs, 3);
    assert!(!stop_file.exists());
    assert!(!logger.is_active());

    assert_eq!(fs::read_to_string(checkpoint_path(&base)).unwrap(), "epoch 3");
    assert_eq!(fs::read_to_string(backup_path(&base)).unwrap(), "epoch 2");

    let log = fs::read_to_string(logger.name()).unwrap();
    assert_eq!(
        log,
        "seed = 1234, device = cpu\nsaved epoch 1\nsaved epoch 2\nsaved epoch 3\nstopping early\n"
    );
}

#[test]
fn plotting_helpers_work_together() {
    let dir = tempfile::tempdir().unwrap();
    let colour_file = dir.path().join("bgr.txt");
    fs::write(
        &colour_file,
        "# XKCD colours\npurple #7e1e9c\ngreen #15b01a\nblue #0343df\npink #ff81c0\n",
    )
    .unwrap();

    let colours = create_xkcd_colours(3, &colour_file, any_colour).unwrap();
    assert_eq!(colours, vec!["xkcd:purple", "xkcd:green", "xkcd:blue"]);

    let err = create_xkcd_colours(5, &colour_file, any_colour).unwrap_err();
    assert!(matches!(err, KitError::Exhausted { requested: 5, available: 4 }));

    let xs: Vec<usize> = (0..7).collect();
    let losses = [9.0, 7.0, 8.0, 6.0, 4.0, 5.0, 3.0];
    let (x1s, y1s) = get_moving_average(&xs, &losses, 3).unwrap();
    assert_eq!(x1s, vec![1, 2, 3, 4, 5]);
    assert_eq!(y1s.len(), 5);
    assert!((y1s[0] - 8.0).abs() < 1e-9);
    assert!((y1s[4] - 4.0).abs() < 1e-9);

    let plot = Plot {
        curves: vec![
            (0, "validation".to_string()),
            (1, "training".to_string()),
            (2, "smoothed".to_string()),
        ],
    };
    let (handles, labels) = sort_labels(&plot);
    assert_eq!(labels, vec!["smoothed", "training", "validation"]);
    assert_eq!(handles, vec![2, 1, 0]);
}
