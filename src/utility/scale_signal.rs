use super::*;

/// Smallest value a scaled signal can take
pub const SIGNAL_FLOOR: f64 = 0.01;

/// Width of the scaled signal range
pub const SIGNAL_SPAN: f64 = 0.98;

/// Scales raw signals from [0; 1] into [0.01; 0.99]
///
/// Inputs of exactly 0 or 1 would push the logistic function towards its flat
/// extremes, where the weight update vanishes. Mapping `x` to `x * 0.98 + 0.01`
/// keeps every signal away from those extremes.
///
/// # Parameters
///
/// * `raw` - Array of raw signals of any dimension, typically binary pixels
///
/// # Returns
///
/// * `Array<f64, D>` - Scaled signals with the same shape as the input
///
/// # Examples
/// ```rust
/// use neuronet::utility::scale_signal;
/// use ndarray::array;
///
/// let scaled = scale_signal(&array![0.0, 1.0]);
/// assert!((scaled[0] - 0.01).abs() < 1e-12);
/// assert!((scaled[1] - 0.99).abs() < 1e-12);
/// ```
pub fn scale_signal<S, D>(raw: &ArrayBase<S, D>) -> ndarray::Array<f64, D>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    raw.mapv(|x| x * SIGNAL_SPAN + SIGNAL_FLOOR)
}
