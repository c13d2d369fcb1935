//! Trains a small network on the built-in glyph set and classifies the test glyphs.
//!
//! Set `RUST_LOG` to change verbosity and `NEURONET_SEED` to make a run reproducible.

use log::{info, warn};
use ndarray_rand::rand::SeedableRng;
use ndarray_rand::rand::rngs::StdRng;
use neuronet::prelude::*;
use std::error::Error;

const LAYER_SIZES: [usize; 3] = [12, 9, 5];
const LEARNING_RATE: f64 = 0.6;
const EPOCHS: usize = 24;

fn build_network() -> Result<NeuroNet, Box<dyn Error>> {
    match std::env::var("NEURONET_SEED") {
        Ok(raw) => {
            let seed: u64 = raw
                .parse()
                .map_err(|e| format!("invalid NEURONET_SEED {raw:?}: {e}"))?;
            info!("seeding weights with {seed}");
            let mut rng = StdRng::seed_from_u64(seed);
            Ok(NeuroNet::new_with_rng(&LAYER_SIZES, LEARNING_RATE, &mut rng)?)
        }
        Err(_) => Ok(NeuroNet::new(&LAYER_SIZES, LEARNING_RATE)?),
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let (labels, patterns, targets) = load_glyphs();
    let (tests, expected) = load_glyph_tests();

    let mut net = build_network()?;
    let history = net.fit(&scale_signal(&patterns), &targets, EPOCHS)?;
    if let Some(last) = history.last() {
        info!("final output error {last:.6}");
    }

    let mut score = Vec::with_capacity(expected.len());
    for (k, (signal, want)) in tests.rows().into_iter().zip(&expected).enumerate() {
        let output = net.query(&scale_signal(&signal))?;
        let got = argmax(&output).map_or("?", |i| labels[i]);
        if got == *want {
            info!("test {k}: {got}");
        } else {
            warn!("test {k}: {got} (expected {want})");
        }
        score.push(u8::from(got == *want));
    }
    info!("score {score:?}");

    Ok(())
}
