use crate::error::NetworkError;

/// Validates the layer structure of a network.
///
/// # Parameters
///
/// * `layer_sizes` - Number of nodes in each layer, input layer first
///
/// # Returns
///
/// - `Ok(())` if there are at least two layers and every layer has more than one node
/// - `Err(NetworkError::InvalidTopology)` otherwise
pub(super) fn validate_topology(layer_sizes: &[usize]) -> Result<(), NetworkError> {
    if layer_sizes.len() < 2 {
        return Err(NetworkError::InvalidTopology(format!(
            "number of neuron layers must be > 1, got {}",
            layer_sizes.len()
        )));
    }
    if let Some((layer, &size)) = layer_sizes.iter().enumerate().find(|(_, n)| **n <= 1) {
        return Err(NetworkError::InvalidTopology(format!(
            "number of neurons must be > 1, layer {} has {}",
            layer, size
        )));
    }
    Ok(())
}

/// Validates that the learning rate lies in the open interval (0, 1).
///
/// NaN fails the range check and is rejected as well.
pub(super) fn validate_learning_rate(learning_rate: f64) -> Result<(), NetworkError> {
    if !(learning_rate > 0.0 && learning_rate < 1.0) {
        return Err(NetworkError::InvalidLearningRate(learning_rate));
    }
    Ok(())
}

/// Validates that a vector has the width of the layer it is fed into.
///
/// # Parameters
///
/// - `name` - What the vector is (`"signal"` or `"target"`), used in the error
/// - `expected` - Width of the layer
/// - `actual` - Length of the supplied vector
pub(super) fn validate_length(
    name: &'static str,
    expected: usize,
    actual: usize,
) -> Result<(), NetworkError> {
    if expected != actual {
        return Err(NetworkError::ShapeMismatch {
            name,
            expected,
            actual,
        });
    }
    Ok(())
}
