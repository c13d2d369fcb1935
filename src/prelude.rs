pub use crate::dataset::glyphs::{load_glyph_tests, load_glyphs};
pub use crate::error::NetworkError;
pub use crate::math::{argmax, l2_norm, sigmoid};
pub use crate::neural_network::NeuroNet;
pub use crate::utility::{one_hot, scale_signal};
