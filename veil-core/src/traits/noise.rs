use rand::Rng;

/// Source of randomness for the privacy transformations.
///
/// The pipeline consumes one uniform draw per token (dropping) and one
/// Laplace sample per distinct token per sentence (frequency rewriting).
/// Tests inject seeded or scripted sources; production callers use
/// [`ThreadNoise`].
pub trait NoiseSource {
    /// Uniform draw in `[0, 1)`.
    fn next_uniform(&mut self) -> f64;

    /// Zero-mean Laplace sample with the given scale parameter.
    fn next_laplace(&mut self, scale: f64) -> f64;
}

/// Inverse-CDF Laplace sample from one uniform draw in `[0, 1)`:
/// `-b * sgn(u) * ln(1 - 2|u|)` with `u = uniform - 0.5`.
///
/// The log argument is clamped away from zero for numerical stability.
pub fn laplace_from_uniform(uniform: f64, scale: f64) -> f64 {
    let u = uniform - 0.5;
    let clamped = (1.0 - 2.0 * u.abs()).clamp(f64::EPSILON, 1.0);
    -scale * u.signum() * clamped.ln()
}

/// Default noise source backed by the thread-local generator, so concurrent
/// pipeline invocations never share generator state.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadNoise;

impl NoiseSource for ThreadNoise {
    fn next_uniform(&mut self) -> f64 {
        rand::thread_rng().gen::<f64>()
    }

    fn next_laplace(&mut self, scale: f64) -> f64 {
        laplace_from_uniform(rand::thread_rng().gen::<f64>(), scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn laplace_is_zero_at_median() {
        assert_eq!(laplace_from_uniform(0.5, 1.0), 0.0);
    }

    #[test]
    fn laplace_sign_follows_tail() {
        assert!(laplace_from_uniform(0.9, 1.0) > 0.0);
        assert!(laplace_from_uniform(0.1, 1.0) < 0.0);
    }

    #[test]
    fn laplace_extreme_draws_stay_finite() {
        assert!(laplace_from_uniform(0.0, 1.0).is_finite());
        assert!(laplace_from_uniform(0.999_999_999, 1.0).is_finite());
    }

    #[test]
    fn laplace_scale_is_proportional() {
        let small = laplace_from_uniform(0.9, 0.5);
        let large = laplace_from_uniform(0.9, 1.0);
        assert!((large - 2.0 * small).abs() < 1e-12);
    }

    #[test]
    fn thread_noise_uniform_in_range() {
        let mut noise = ThreadNoise;
        for _ in 0..1000 {
            let u = noise.next_uniform();
            assert!((0.0..1.0).contains(&u));
        }
    }
}
