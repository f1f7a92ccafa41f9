// src/collider/kinematics.rs

//! Simplified 2→2 hard-scatter kinematics.

use crate::collider::ColliderConfig;
use crate::collider::config::pseudorapidity;
use rand::Rng;
use std::f64::consts::PI;

/// One sampled 2→2 hard scatter: a back-to-back jet pair sharing a
/// transverse momentum, with independent pseudorapidities.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scatter {
    /// Common transverse momentum of the pair (GeV).
    pub pt: f64,
    /// Pseudorapidity of the first jet.
    pub eta1: f64,
    /// Pseudorapidity of the second jet.
    pub eta2: f64,
    /// Azimuthal angle of the pair (radians).
    pub phi: f64,
}

/// Samples a 2→2 scatter from the partonic system of two momentum
/// fractions.
///
/// The partonic energy is ŝ = x1·x2·s. With cos θ drawn uniformly inside
/// the configured range, pT = √(t̂·û/ŝ) = √ŝ·sin θ / 2 for massless
/// two-body kinematics. Pseudorapidities come from uniform polar angles
/// inside the margin window; the second jet's sign is flipped half the
/// time so the pair is not always same-side.
pub fn generate_2to2<R: Rng + ?Sized>(
    config: &ColliderConfig,
    x1: f64,
    x2: f64,
    rng: &mut R,
) -> Scatter {
    let s_hat = x1 * x2 * config.s();

    let cos_theta = rng.random_range(-config.cos_theta_max..config.cos_theta_max);
    let sin_theta = (1.0 - cos_theta * cos_theta).sqrt();
    let pt = s_hat.sqrt() * sin_theta / 2.0;

    let phi = rng.random_range(0.0..2.0 * PI);
    let eta1 = pseudorapidity(rng.random_range(config.polar_margin..PI - config.polar_margin));
    let mut eta2 = pseudorapidity(rng.random_range(config.polar_margin..PI - config.polar_margin));
    if rng.random_bool(0.5) {
        eta2 = -eta2;
    }

    Scatter { pt, eta1, eta2, phi }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collider::config::eta_bound;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn pt_bounded_by_partonic_energy() {
        let config = ColliderConfig::default();
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..200 {
            let (x1, x2) = (0.01, 0.05);
            let scatter = generate_2to2(&config, x1, x2, &mut rng);
            let s_hat = x1 * x2 * config.s();
            assert!(scatter.pt >= 0.0);
            assert!(scatter.pt <= s_hat.sqrt() / 2.0 + 1e-9);
        }
    }

    #[test]
    fn eta_stays_inside_polar_window() {
        let config = ColliderConfig::default();
        let bound = eta_bound(config.polar_margin) + 1e-9;
        let mut rng = StdRng::seed_from_u64(6);
        for _ in 0..500 {
            let scatter = generate_2to2(&config, 0.02, 0.02, &mut rng);
            assert!(scatter.eta1.abs() <= bound, "eta1 = {}", scatter.eta1);
            assert!(scatter.eta2.abs() <= bound, "eta2 = {}", scatter.eta2);
        }
    }

    #[test]
    fn phi_in_full_turn() {
        let config = ColliderConfig::default();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let scatter = generate_2to2(&config, 0.02, 0.02, &mut rng);
            assert!((0.0..2.0 * PI).contains(&scatter.phi));
        }
    }
}
