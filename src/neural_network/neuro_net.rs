use super::input_validation_function::*;
use crate::error::NetworkError;
use crate::math::{l2_norm, sigmoid, sigmoid_derivative};
use log::{debug, info};
use ndarray::{Array, Array1, Array2, ArrayBase, Axis, Data, Ix1, Ix2};
use ndarray_rand::RandomExt;
use ndarray_rand::rand::Rng;
use ndarray_rand::rand_distr::Uniform;

/// Lower bound (inclusive) of the initial weight distribution
const WEIGHT_INIT_LOW: f64 = -0.5;

/// Upper bound (exclusive) of the initial weight distribution
const WEIGHT_INIT_HIGH: f64 = 0.5;

/// A light-weight fully-connected feedforward neural network.
///
/// Both the number of layers and the number of nodes of each layer are chosen at
/// construction time. Every node is activated with the logistic function
/// `f(x) = 1 / (1 + exp(-x))` and there are no biases.
///
/// Training follows a simplified back-propagation rule: the output error is
/// distributed backwards through the transposed weight matrices only, and the
/// sigmoid slope enters once per layer when that layer's weights are updated.
///
/// # Dimensions
///
/// For layer sizes `[n_0, ..., n_L]`:
/// - `weights[i]` has shape `(n_{i+1}, n_i)`
/// - `signals[i]` and `errors[i]` have length `n_i`
///
/// # Fields
///
/// - `layer_sizes` - Number of nodes in each layer, input layer first
/// - `learning_rate` - Step size of the weight update, in ]0; 1[
/// - `weights` - Weight matrices mapping layer `i` onto layer `i + 1`
/// - `signals` - Activations of every layer from the most recent forward pass
/// - `errors` - Errors of every layer from the most recent training or evaluation pass
///
/// # Example
/// ```rust
/// use ndarray::array;
/// use neuronet::prelude::*;
///
/// let mut net = NeuroNet::new(&[2, 3, 2], 0.5).unwrap();
///
/// for _ in 0..100 {
///     net.train(&array![0.99, 0.01], &array![0.99, 0.01]).unwrap();
/// }
///
/// let output = net.query(&array![0.99, 0.01]).unwrap();
/// assert_eq!(output.len(), 2);
/// assert!(output.iter().all(|&v| v > 0.0 && v < 1.0));
/// ```
#[derive(Debug, Clone)]
pub struct NeuroNet {
    layer_sizes: Vec<usize>,
    learning_rate: f64,
    weights: Vec<Array2<f64>>,
    signals: Vec<Array1<f64>>,
    errors: Vec<Array1<f64>>,
}

impl NeuroNet {
    /// Creates a network with weights drawn uniformly from [-0.5; 0.5[ using the
    /// thread-local random generator.
    ///
    /// # Parameters
    ///
    /// - `layer_sizes` - Number of nodes in each layer; at least two layers, each with more than one node
    /// - `learning_rate` - Step size of the weight update, in ]0; 1[
    ///
    /// # Returns
    ///
    /// - `Ok(NeuroNet)` - A freshly initialised network
    /// - `Err(NetworkError::InvalidTopology)` - If the layer structure is rejected
    /// - `Err(NetworkError::InvalidLearningRate)` - If the learning rate is out of range
    pub fn new(layer_sizes: &[usize], learning_rate: f64) -> Result<Self, NetworkError> {
        let distribution = Uniform::new(WEIGHT_INIT_LOW, WEIGHT_INIT_HIGH);
        Self::with_initializer(layer_sizes, learning_rate, |shape| {
            Array::random(shape, distribution)
        })
    }

    /// Creates a network drawing its initial weights from the supplied generator.
    ///
    /// Same validation as [`NeuroNet::new`]; two calls with identically seeded
    /// generators produce identical networks.
    pub fn new_with_rng<R>(
        layer_sizes: &[usize],
        learning_rate: f64,
        rng: &mut R,
    ) -> Result<Self, NetworkError>
    where
        R: Rng + ?Sized,
    {
        let distribution = Uniform::new(WEIGHT_INIT_LOW, WEIGHT_INIT_HIGH);
        Self::with_initializer(layer_sizes, learning_rate, |shape| {
            Array::random_using(shape, distribution, &mut *rng)
        })
    }

    fn with_initializer<F>(
        layer_sizes: &[usize],
        learning_rate: f64,
        mut init: F,
    ) -> Result<Self, NetworkError>
    where
        F: FnMut((usize, usize)) -> Array2<f64>,
    {
        validate_topology(layer_sizes)?;
        validate_learning_rate(learning_rate)?;

        let weights = layer_sizes
            .windows(2)
            .map(|pair| init((pair[1], pair[0])))
            .collect();
        let signals = layer_sizes.iter().map(|&n| Array1::zeros(n)).collect();
        let errors = layer_sizes.iter().map(|&n| Array1::zeros(n)).collect();

        debug!(
            "created network: layers={:?} learning_rate={}",
            layer_sizes, learning_rate
        );

        Ok(NeuroNet {
            layer_sizes: layer_sizes.to_vec(),
            learning_rate,
            weights,
            signals,
            errors,
        })
    }

    /// Number of nodes in each layer, input layer first.
    pub fn layer_sizes(&self) -> &[usize] {
        &self.layer_sizes
    }

    /// Step size of the weight update.
    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    /// Weight matrices; `weights()[i]` has shape `(n_{i+1}, n_i)`.
    pub fn weights(&self) -> &[Array2<f64>] {
        &self.weights
    }

    /// Number of weight matrices, i.e. the number of layers minus one.
    pub fn layer_count(&self) -> usize {
        self.weights.len()
    }

    /// Propagates a signal through all layers and returns the output layer activations.
    ///
    /// Weights are not modified.
    ///
    /// # Parameters
    ///
    /// * `signal` - Input vector with one entry per input node
    ///
    /// # Returns
    ///
    /// - `Ok(Array1<f64>)` - Output activations in [0, 1]; entries saturate to exactly 0.0 or 1.0
    ///   only when a pre-activation exceeds roughly 36 in magnitude
    /// - `Err(NetworkError::ShapeMismatch)` - If the signal length differs from the input layer width
    pub fn query<S>(&mut self, signal: &ArrayBase<S, Ix1>) -> Result<Array1<f64>, NetworkError>
    where
        S: Data<Elem = f64>,
    {
        validate_length("signal", self.layer_sizes[0], signal.len())?;
        self.forward(signal);
        Ok(self.signals[self.weights.len()].clone())
    }

    /// Runs one training step on a single example and returns the errors of all layers.
    ///
    /// The output error is `target - output`. It is sent back through the transposed
    /// weights of every layer, after which each weight matrix is moved by
    /// `learning_rate * (error ⊙ a ⊙ (1 - a)) · previous_activationᵀ`, where `a` is
    /// the activation of the layer the matrix feeds into. All errors are computed from
    /// the weights as they were before the step.
    ///
    /// # Parameters
    ///
    /// - `signal` - Input vector with one entry per input node
    /// - `target` - Desired output with one entry per output node
    ///
    /// # Returns
    ///
    /// - `Ok(&[Array1<f64>])` - Errors of every layer, output layer last
    /// - `Err(NetworkError::ShapeMismatch)` - If either vector has the wrong length; nothing is modified
    pub fn train<S1, S2>(
        &mut self,
        signal: &ArrayBase<S1, Ix1>,
        target: &ArrayBase<S2, Ix1>,
    ) -> Result<&[Array1<f64>], NetworkError>
    where
        S1: Data<Elem = f64>,
        S2: Data<Elem = f64>,
    {
        self.validate_example(signal.len(), target.len())?;
        self.step(signal, target);
        Ok(self.errors.as_slice())
    }

    /// Computes the errors of all layers for an example without touching the weights.
    ///
    /// This performs the forward pass and the backward error propagation of
    /// [`NeuroNet::train`] but skips the weight update, so it can be used to score a
    /// network on held-out data.
    ///
    /// # Returns
    ///
    /// - `Ok(&[Array1<f64>])` - Errors of every layer, output layer last
    /// - `Err(NetworkError::ShapeMismatch)` - If either vector has the wrong length
    pub fn evaluate<S1, S2>(
        &mut self,
        signal: &ArrayBase<S1, Ix1>,
        target: &ArrayBase<S2, Ix1>,
    ) -> Result<&[Array1<f64>], NetworkError>
    where
        S1: Data<Elem = f64>,
        S2: Data<Elem = f64>,
    {
        self.validate_example(signal.len(), target.len())?;
        self.forward(signal);
        self.propagate_errors(target);
        Ok(self.errors.as_slice())
    }

    /// Trains the network for a number of epochs over a fixed set of examples.
    ///
    /// Each row of `x` is one input signal and the same row of `y` its target. An epoch
    /// trains on every row once, in order. The whole data set is validated before the
    /// first step, so malformed input never leaves the network half trained.
    ///
    /// # Parameters
    ///
    /// - `x` - Input signals with shape `(n_samples, n_0)`
    /// - `y` - Targets with shape `(n_samples, n_L)`
    /// - `epochs` - Number of passes over the data
    ///
    /// # Returns
    ///
    /// - `Ok(Vec<f64>)` - Norm of the output error of the last example after each epoch
    /// - `Err(NetworkError::InputValidation)` - If the data set is empty or `x` and `y` differ in row count
    /// - `Err(NetworkError::ShapeMismatch)` - If the column counts do not match the outer layers
    pub fn fit<S1, S2>(
        &mut self,
        x: &ArrayBase<S1, Ix2>,
        y: &ArrayBase<S2, Ix2>,
        epochs: usize,
    ) -> Result<Vec<f64>, NetworkError>
    where
        S1: Data<Elem = f64>,
        S2: Data<Elem = f64>,
    {
        if x.nrows() == 0 {
            return Err(NetworkError::InputValidation(
                "training data must contain at least one example".to_string(),
            ));
        }
        if x.nrows() != y.nrows() {
            return Err(NetworkError::InputValidation(format!(
                "got {} signals but {} targets",
                x.nrows(),
                y.nrows()
            )));
        }
        self.validate_example(x.ncols(), y.ncols())?;

        let mut history = Vec::with_capacity(epochs);
        for epoch in 0..epochs {
            for (signal, target) in x.rows().into_iter().zip(y.rows()) {
                self.step(&signal, &target);
            }
            let error = l2_norm(&self.errors[self.weights.len()]);
            info!("processed epoch {} with error {:.6}", epoch, error);
            history.push(error);
        }

        debug!(
            "training finished: {} examples, {} epochs",
            x.nrows(),
            epochs
        );
        Ok(history)
    }

    fn validate_example(&self, signal_len: usize, target_len: usize) -> Result<(), NetworkError> {
        validate_length("signal", self.layer_sizes[0], signal_len)?;
        validate_length("target", self.layer_sizes[self.weights.len()], target_len)
    }

    fn step<S1, S2>(&mut self, signal: &ArrayBase<S1, Ix1>, target: &ArrayBase<S2, Ix1>)
    where
        S1: Data<Elem = f64>,
        S2: Data<Elem = f64>,
    {
        self.forward(signal);
        self.propagate_errors(target);
        self.update_weights();
    }

    fn forward<S>(&mut self, signal: &ArrayBase<S, Ix1>)
    where
        S: Data<Elem = f64>,
    {
        self.signals[0].assign(signal);
        for (i, w) in self.weights.iter().enumerate() {
            let activated = w.dot(&self.signals[i]).mapv_into(sigmoid);
            self.signals[i + 1] = activated;
        }
    }

    fn propagate_errors<S>(&mut self, target: &ArrayBase<S, Ix1>)
    where
        S: Data<Elem = f64>,
    {
        let last = self.weights.len();
        let output_error = target - &self.signals[last];
        self.errors[last] = output_error;
        // no activation slope here, it is applied per layer in update_weights
        for i in (0..last).rev() {
            let error = self.weights[i].t().dot(&self.errors[i + 1]);
            self.errors[i] = error;
        }
    }

    fn update_weights(&mut self) {
        let rate = self.learning_rate;
        for (i, w) in self.weights.iter_mut().enumerate() {
            let delta = &self.errors[i + 1] * &self.signals[i + 1].mapv(sigmoid_derivative);
            let delta = delta.insert_axis(Axis(1));
            let input = self.signals[i].view().insert_axis(Axis(0));
            w.scaled_add(rate, &delta.dot(&input));
        }
    }
}
