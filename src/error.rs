/// Error types that can occur while building, querying or training a network
///
/// # Variants
///
/// - `InvalidTopology` - fewer than two layers were requested, or a layer has one node or less
/// - `InvalidLearningRate` - the learning rate lies outside the open interval (0, 1)
/// - `ShapeMismatch` - a signal or target vector does not match the width of its layer
/// - `InputValidation` - the data handed to a training or encoding helper is malformed
#[derive(Debug, Clone, PartialEq)]
pub enum NetworkError {
    InvalidTopology(String),
    InvalidLearningRate(f64),
    ShapeMismatch {
        name: &'static str,
        expected: usize,
        actual: usize,
    },
    InputValidation(String),
}

impl std::fmt::Display for NetworkError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NetworkError::InvalidTopology(msg) => write!(f, "Invalid topology: {}", msg),
            NetworkError::InvalidLearningRate(rate) => write!(
                f,
                "Invalid learning rate: must be in ]0.0; 1.0[, got {}",
                rate
            ),
            NetworkError::ShapeMismatch {
                name,
                expected,
                actual,
            } => write!(
                f,
                "Shape mismatch: {} must have length {}, got {}",
                name, expected, actual
            ),
            NetworkError::InputValidation(msg) => write!(f, "Input validation error: {}", msg),
        }
    }
}

/// Implements the standard error trait for NetworkError
impl std::error::Error for NetworkError {}
