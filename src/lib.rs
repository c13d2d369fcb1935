/// Module `error` contains the error type shared by every operation of the crate.
///
/// All failures are detected before any computation starts, so an `Err` always means
/// the network was left untouched.
pub mod error;

pub use error::NetworkError;

/// Module `math` contains the scalar and vector functions the network is built from.
///
/// # Core Functions
///
/// - `sigmoid` - Numerically stable logistic function used as activation on every layer
/// - `sigmoid_derivative` - Slope of the logistic function expressed through its output
/// - `l2_norm` - Euclidean norm, used to monitor the output error during training
/// - `argmax` - Position of the largest output, used to pick a predicted class
pub mod math;

/// Module `neural_network` contains the feedforward network engine.
///
/// A [`neural_network::NeuroNet`] is built from a list of layer sizes and a learning
/// rate. It answers queries by propagating a signal through logistic layers and
/// learns from single examples by sending the output error back through the
/// transposed weight matrices.
///
/// # Examples
/// ```rust
/// use neuronet::neural_network::NeuroNet;
/// use ndarray::array;
///
/// // Input layer: 3 nodes, hidden layer: 4 nodes, output layer: 2 nodes
/// let mut net = NeuroNet::new(&[3, 4, 2], 0.3).unwrap();
///
/// // One training step
/// let errors = net.train(&array![0.2, 0.9, 0.4], &array![0.99, 0.01]).unwrap();
/// assert_eq!(errors.len(), 3);
///
/// // Inference
/// let output = net.query(&array![0.2, 0.9, 0.4]).unwrap();
/// assert_eq!(output.len(), 2);
/// ```
pub mod neural_network;

/// Module `utility` contains helpers for preparing signals and targets.
///
/// - `scale_signal` - Maps raw [0; 1] signals into [0.01; 0.99]
/// - `one_hot` - Encodes a class index as a target vector
pub mod utility;

/// Module `dataset` provides small built-in data sets for experiments and tests.
pub mod dataset;

/// Convenient re-exports of the most commonly used items.
pub mod prelude;
