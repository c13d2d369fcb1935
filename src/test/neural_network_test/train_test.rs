use super::*;

#[test]
fn train_single_layer_update_test() {
    let mut net = seeded_network(&[2, 2], 0.5, 5);
    let signal = array![0.3, 0.8];
    let target = array![0.9, 0.1];

    let w = net.weights()[0].clone();
    let output = w.dot(&signal).mapv(sigmoid);
    let error = &target - &output;
    let delta = &error * &output.mapv(|a| a * (1.0 - a));
    let mut expected = w.clone();
    for i in 0..2 {
        for j in 0..2 {
            expected[[i, j]] += 0.5 * delta[i] * signal[j];
        }
    }

    let errors = net.train(&signal, &target).unwrap();
    assert_arrays_close(&errors[1], &error, 1e-12);
    assert_arrays_close(&net.weights()[0], &expected, 1e-12);
}

#[test]
fn train_backpropagates_through_pre_update_weights_test() {
    let mut net = seeded_network(&[3, 4, 2], 0.4, 9);
    let signal = array![0.1, 0.5, 0.9];
    let target = array![0.99, 0.01];

    let w0 = net.weights()[0].clone();
    let w1 = net.weights()[1].clone();
    let s1 = w0.dot(&signal).mapv(sigmoid);
    let s2 = w1.dot(&s1).mapv(sigmoid);
    let e2 = &target - &s2;
    // transposed weights only, no activation slope between layers
    let e1 = w1.t().dot(&e2);
    let e0 = w0.t().dot(&e1);

    let errors = net.train(&signal, &target).unwrap().to_vec();
    assert_eq!(errors.len(), 3);
    assert_arrays_close(&errors[2], &e2, 1e-12);
    assert_arrays_close(&errors[1], &e1, 1e-12);
    assert_arrays_close(&errors[0], &e0, 1e-12);

    let d1 = &e1 * &s1.mapv(|a| a * (1.0 - a));
    let d2 = &e2 * &s2.mapv(|a| a * (1.0 - a));
    let outer = |d: &Array1<f64>, s: &Array1<f64>| {
        Array2::from_shape_fn((d.len(), s.len()), |(i, j)| d[i] * s[j])
    };
    let expected_w0 = &w0 + &(outer(&d1, &signal) * 0.4);
    let expected_w1 = &w1 + &(outer(&d2, &s1) * 0.4);
    assert_arrays_close(&net.weights()[0], &expected_w0, 1e-12);
    assert_arrays_close(&net.weights()[1], &expected_w1, 1e-12);
}

#[test]
fn train_error_shapes_test() {
    let mut net = NeuroNet::new(&[12, 9, 5], 0.6).unwrap();
    let errors = net
        .train(&Array1::from_elem(12, 0.5), &Array1::from_elem(5, 0.2))
        .unwrap();
    let lengths: Vec<usize> = errors.iter().map(|e| e.len()).collect();
    assert_eq!(lengths, vec![12, 9, 5]);
}

#[test]
fn train_changes_weights_test() {
    let mut net = seeded_network(&[4, 3, 2], 0.5, 21);
    let before = net.weights().to_vec();
    net.train(&array![0.9, 0.2, 0.4, 0.7], &array![0.99, 0.01])
        .unwrap();
    assert!(
        net.weights()
            .iter()
            .zip(&before)
            .any(|(after, before)| after != before)
    );
}

#[test]
fn train_shape_mismatch_leaves_network_untouched_test() {
    let mut net = seeded_network(&[3, 3], 0.5, 2);
    let before = net.weights().to_vec();

    assert_eq!(
        net.train(&array![0.1, 0.2], &array![0.1, 0.2, 0.3]).unwrap_err(),
        NetworkError::ShapeMismatch {
            name: "signal",
            expected: 3,
            actual: 2,
        }
    );
    assert_eq!(
        net.train(&array![0.1, 0.2, 0.3], &array![0.1]).unwrap_err(),
        NetworkError::ShapeMismatch {
            name: "target",
            expected: 3,
            actual: 1,
        }
    );
    assert_eq!(net.weights(), before.as_slice());
}

#[test]
fn evaluate_is_read_only_test() {
    let mut net = seeded_network(&[3, 4, 2], 0.5, 13);
    let mut twin = net.clone();
    let signal = array![0.2, 0.4, 0.6];
    let target = array![0.9, 0.1];
    let before = net.weights().to_vec();

    let evaluated = net.evaluate(&signal, &target).unwrap().to_vec();
    assert_eq!(net.weights(), before.as_slice());

    // same errors a training step would report
    let trained = twin.train(&signal, &target).unwrap().to_vec();
    assert_eq!(evaluated, trained);

    assert!(matches!(
        net.evaluate(&signal, &array![0.5]),
        Err(NetworkError::ShapeMismatch { name: "target", .. })
    ));
}

#[test]
fn repeated_training_reduces_error_test() {
    let mut net = seeded_network(&[3, 4, 2], 0.5, 17);
    let signal = array![0.8, 0.2, 0.5];
    let target = array![0.99, 0.01];

    let initial = crate::math::l2_norm(&net.evaluate(&signal, &target).unwrap()[2]);
    for _ in 0..300 {
        net.train(&signal, &target).unwrap();
    }
    let trained = crate::math::l2_norm(&net.evaluate(&signal, &target).unwrap()[2]);
    assert!(
        trained < initial,
        "error should shrink: {} -> {}",
        initial,
        trained
    );
}

#[test]
fn fit_history_test() {
    let mut net = seeded_network(&[2, 3, 2], 0.5, 4);
    let x = array![[0.99, 0.01], [0.01, 0.99]];
    let y = array![[0.99, 0.01], [0.01, 0.99]];

    let history = net.fit(&x, &y, 15).unwrap();
    assert_eq!(history.len(), 15);
    assert!(history.iter().all(|e| e.is_finite() && *e >= 0.0));

    let before = net.weights().to_vec();
    assert!(net.fit(&x, &y, 0).unwrap().is_empty());
    assert_eq!(net.weights(), before.as_slice());
}

#[test]
fn fit_validation_test() {
    let mut net = seeded_network(&[2, 2], 0.5, 6);
    let before = net.weights().to_vec();

    let empty = Array2::<f64>::zeros((0, 2));
    assert!(matches!(
        net.fit(&empty, &empty, 3),
        Err(NetworkError::InputValidation(_))
    ));
    assert!(matches!(
        net.fit(&Array2::<f64>::zeros((3, 2)), &Array2::<f64>::zeros((2, 2)), 3),
        Err(NetworkError::InputValidation(_))
    ));
    assert!(matches!(
        net.fit(&Array2::<f64>::zeros((2, 3)), &Array2::<f64>::zeros((2, 2)), 3),
        Err(NetworkError::ShapeMismatch { name: "signal", .. })
    ));
    assert!(matches!(
        net.fit(&Array2::<f64>::zeros((2, 2)), &Array2::<f64>::zeros((2, 4)), 3),
        Err(NetworkError::ShapeMismatch { name: "target", .. })
    ));
    assert_eq!(net.weights(), before.as_slice());
}
