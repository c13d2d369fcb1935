use super::*;

/// Builds a one-hot target vector
///
/// # Parameters
///
/// - `class` - Index of the class that should be active
/// - `classes` - Total number of classes, i.e. the width of the output layer
///
/// # Returns
///
/// - `Ok(Array1<f64>)` - Vector of length `classes` with a 1.0 at `class` and 0.0 elsewhere
/// - `Err(NetworkError::InputValidation)` - If `classes` is zero or `class` is out of range
///
/// # Examples
/// ```rust
/// use neuronet::utility::one_hot;
/// use ndarray::array;
///
/// assert_eq!(one_hot(1, 3).unwrap(), array![0.0, 1.0, 0.0]);
/// ```
pub fn one_hot(class: usize, classes: usize) -> Result<Array1<f64>, NetworkError> {
    if classes == 0 {
        return Err(NetworkError::InputValidation(
            "number of classes must be greater than 0".to_string(),
        ));
    }
    if class >= classes {
        return Err(NetworkError::InputValidation(format!(
            "class index {} out of range for {} classes",
            class, classes
        )));
    }

    let mut target = Array1::zeros(classes);
    target[class] = 1.0;
    Ok(target)
}
