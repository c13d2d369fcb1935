use crate::error::NetworkError;
use ndarray::{Array1, ArrayBase, Data, Dimension};

/// Encodes class indices as one-hot target vectors
pub mod one_hot;
/// Scales raw binary signals into the working range of the sigmoid
pub mod scale_signal;

pub use one_hot::*;
pub use scale_signal::*;
