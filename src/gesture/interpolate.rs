//! Clamped piecewise-linear interpolation.
//!
//! Every visual parameter of the card stack is a clamped interpolation of the
//! drag offset. Values outside the input domain take the nearest endpoint of
//! the output range; there is no extrapolation.

/// Maps `x` through the piecewise-linear function defined by `input` → `output`.
///
/// `input` must be strictly increasing and the same length as `output`, with at
/// least two points. Inputs outside `[input[0], input[last]]` clamp to the
/// corresponding output endpoint.
///
/// ```
/// use prayer_deck::gesture::interpolate;
///
/// let rotation = |dx| interpolate(dx, &[-400.0, 0.0, 400.0], &[-30.0, 0.0, 30.0]);
/// assert_eq!(rotation(200.0), 15.0);
/// assert_eq!(rotation(-900.0), -30.0);
/// ```
#[must_use]
pub fn interpolate(x: f64, input: &[f64], output: &[f64]) -> f64 {
    debug_assert!(input.len() >= 2, "interpolation needs at least two points");
    debug_assert_eq!(input.len(), output.len());
    debug_assert!(input.windows(2).all(|w| w[0] < w[1]), "input must be increasing");

    let last = input.len() - 1;
    if x.is_nan() || x <= input[0] {
        return output[0];
    }
    if x >= input[last] {
        return output[last];
    }

    let segment = input
        .windows(2)
        .position(|w| x <= w[1])
        .unwrap_or(last - 1);

    let (x0, x1) = (input[segment], input[segment + 1]);
    let (y0, y1) = (output[segment], output[segment + 1]);
    if x == x1 {
        return y1;
    }

    let t = (x - x0) / (x1 - x0);
    y0 + t * (y1 - y0)
}

/// Interpolates a `[0, 1]` progress value between two endpoints, clamped.
#[must_use]
pub fn lerp_progress(progress: f64, from: f64, to: f64) -> f64 {
    interpolate(progress, &[0.0, 1.0], &[from, to])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hits_breakpoints_exactly() {
        let input = [-400.0, 0.0, 400.0];
        let output = [-30.0, 0.0, 30.0];
        assert_eq!(interpolate(-400.0, &input, &output), -30.0);
        assert_eq!(interpolate(0.0, &input, &output), 0.0);
        assert_eq!(interpolate(400.0, &input, &output), 30.0);
    }

    #[test]
    fn clamps_outside_domain() {
        assert_eq!(lerp_progress(-2.0, 0.94, 1.0), 0.94);
        assert_eq!(lerp_progress(7.5, 0.94, 1.0), 1.0);
    }

    #[test]
    fn decreasing_output_range() {
        let mid = lerp_progress(0.5, 1.0, 0.6);
        assert!((mid - 0.8).abs() < 1e-12);
    }

    #[test]
    fn nan_maps_to_start() {
        assert_eq!(lerp_progress(f64::NAN, 0.5, 0.7), 0.5);
    }
}
