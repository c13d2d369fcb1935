use ndarray::{ArrayBase, Data, Ix1};

/// Computes the logistic sigmoid for a scalar input.
///
/// The sigmoid maps any real number into the interval (0, 1). The formulation
/// branches on the sign of `z` so that `exp` only ever sees a non-positive
/// argument and cannot overflow.
///
/// # Parameters
///
/// - `z` - Input value to transform
///
/// # Returns
///
/// - `f64` - Sigmoid output in the range (0, 1)
///
/// # Examples
/// ```rust
/// use neuronet::math::sigmoid;
///
/// let value = sigmoid(0.0);
/// // sigmoid(0) = 0.5
/// assert!((value - 0.5).abs() < 1e-12);
/// ```
#[inline]
pub fn sigmoid(z: f64) -> f64 {
    if z >= 0.0 {
        1.0 / (1.0 + (-z).exp())
    } else {
        let e = z.exp();
        e / (1.0 + e)
    }
}

/// Derivative of the sigmoid expressed through its own output.
///
/// If `a = sigmoid(z)` then `d/dz sigmoid(z) = a * (1 - a)`.
///
/// # Parameters
///
/// - `a` - An already activated value
///
/// # Returns
///
/// - `f64` - The slope of the sigmoid at the point that produced `a`
#[inline]
pub fn sigmoid_derivative(a: f64) -> f64 {
    a * (1.0 - a)
}

/// Euclidean (L2) norm of a vector.
///
/// # Examples
/// ```rust
/// use neuronet::math::l2_norm;
/// use ndarray::array;
///
/// let norm = l2_norm(&array![3.0, 4.0]);
/// assert!((norm - 5.0).abs() < 1e-12);
/// ```
pub fn l2_norm<S>(values: &ArrayBase<S, Ix1>) -> f64
where
    S: Data<Elem = f64>,
{
    values.dot(values).sqrt()
}

/// Index of the largest element of a vector.
///
/// Ties resolve to the first occurrence and NaN entries are skipped.
///
/// # Parameters
///
/// - `values` - Scores to search, e.g. the output activations of a network
///
/// # Returns
///
/// - `Some(usize)` - Position of the maximum
/// - `None` - If the vector is empty or holds only NaN
///
/// # Examples
/// ```rust
/// use neuronet::math::argmax;
/// use ndarray::array;
///
/// assert_eq!(argmax(&array![0.1, 0.7, 0.2]), Some(1));
/// ```
pub fn argmax<S>(values: &ArrayBase<S, Ix1>) -> Option<usize>
where
    S: Data<Elem = f64>,
{
    values
        .iter()
        .enumerate()
        .filter(|(_, v)| !v.is_nan())
        .fold(None, |best: Option<(usize, f64)>, (i, &v)| match best {
            Some((_, b)) if b >= v => best,
            _ => Some((i, v)),
        })
        .map(|(i, _)| i)
}
