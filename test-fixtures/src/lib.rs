//! Shared test support for the veil workspace.
//!
//! Provides deterministic [`NoiseSource`] implementations for seeded and
//! scripted randomness, shared sample texts, and typed loading of the JSON
//! golden fixtures under `test-fixtures/fixtures/`.

use std::path::PathBuf;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use veil_core::traits::{laplace_from_uniform, NoiseSource};

/// Noise source over a seeded generator: random-looking but reproducible.
pub struct SeededNoise {
    rng: StdRng,
}

impl SeededNoise {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl NoiseSource for SeededNoise {
    fn next_uniform(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }

    fn next_laplace(&mut self, scale: f64) -> f64 {
        laplace_from_uniform(self.rng.gen::<f64>(), scale)
    }
}

/// Noise source that replays fixed value sequences, cycling when exhausted.
pub struct ScriptedNoise {
    uniforms: Vec<f64>,
    laplaces: Vec<f64>,
    u_next: usize,
    l_next: usize,
}

impl ScriptedNoise {
    /// Empty sequences fall back to the silent values (uniform 0.99,
    /// Laplace 0.0).
    pub fn new(uniforms: Vec<f64>, laplaces: Vec<f64>) -> Self {
        Self {
            uniforms: if uniforms.is_empty() { vec![0.99] } else { uniforms },
            laplaces: if laplaces.is_empty() { vec![0.0] } else { laplaces },
            u_next: 0,
            l_next: 0,
        }
    }

    /// A source under which the pipeline keeps every token and perturbs no
    /// count: uniform draws of 0.99 and Laplace samples of 0.0.
    pub fn silent() -> Self {
        Self::new(Vec::new(), Vec::new())
    }
}

impl NoiseSource for ScriptedNoise {
    fn next_uniform(&mut self) -> f64 {
        let value = self.uniforms[self.u_next % self.uniforms.len()];
        self.u_next += 1;
        value
    }

    fn next_laplace(&mut self, _scale: f64) -> f64 {
        let value = self.laplaces[self.l_next % self.laplaces.len()];
        self.l_next += 1;
        value
    }
}

/// Sample text mixing every redaction category with sentiment words.
pub const CLINICAL_NOTE: &str = "John Smith is a 63-year-old patient at 12 Baker Street. \
     He was anxious about the $500 bill but felt relieved after the visit.";

/// Sample text with positive sentiment and no sensitive spans.
pub const UPBEAT_REVIEW: &str = "We were happy and hopeful. The whole week felt great.";

/// Sample text with negative sentiment and no sensitive spans.
pub const GLOOMY_REVIEW: &str = "A terrible start. Everyone stayed worried and stressed.";

/// One golden redaction case: exact expected output for a given input.
#[derive(Debug, Clone, Deserialize)]
pub struct RedactionCase {
    pub name: String,
    pub input: String,
    pub expected: String,
}

/// Root directory of the test-fixtures folder.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up to find test-fixtures.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);
    while !path.join("test-fixtures").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures")
}

/// Load and deserialize a JSON fixture file from `test-fixtures/fixtures/`.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join("fixtures").join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}
