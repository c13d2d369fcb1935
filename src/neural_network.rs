/// Module that contains validation helpers shared by the network operations
mod input_validation_function;
/// Module that contains the feedforward network engine
pub mod neuro_net;

pub use neuro_net::*;
