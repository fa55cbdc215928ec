use crate::error::{KitError, Result};

/// Window used when none is configured
pub const DEFAULT_WINDOW_SIZE: usize = 11;

/// Calculate a centred moving average.
///
/// The average is a valid-mode convolution of `ys` with a uniform kernel of
/// `window_size` points, so it is `window_size - 1` points shorter than `ys`.
/// The matching subset of `xs` is returned alongside, chosen so the average
/// can be plotted on the same scale as `xs, ys`.
///
/// # Arguments
/// * `xs` - Indices of data for plotting
/// * `ys` - Data to be plotted
/// * `window_size` - Number of points to be included; must be odd and at most `ys.len()`
///
/// # Returns
/// * `Ok((x1s, y1s))` with `x1s.len() == y1s.len()`
/// * `Err(KitError::InvalidInput)` if the window or the inputs don't fit
pub fn get_moving_average<X: Clone>(
    xs: &[X],
    ys: &[f64],
    window_size: usize,
) -> Result<(Vec<X>, Vec<f64>)> {
    if xs.len() != ys.len() {
        return Err(KitError::InvalidInput(format!(
            "xs has {} points but ys has {}",
            xs.len(),
            ys.len()
        )));
    }
    if window_size == 0 || window_size % 2 == 0 {
        return Err(KitError::InvalidInput(format!(
            "window size must be odd and positive, got {}",
            window_size
        )));
    }
    if window_size > ys.len() {
        return Err(KitError::InvalidInput(format!(
            "window size {} exceeds {} data points",
            window_size,
            ys.len()
        )));
    }

    let width = window_size as f64;
    let y1s: Vec<f64> = ys
        .windows(window_size)
        .map(|window| window.iter().sum::<f64>() / width)
        .collect();

    let skip = (ys.len() - y1s.len()) / 2;
    let x1s = xs[skip..skip + y1s.len()].to_vec();

    Ok((x1s, y1s))
}
