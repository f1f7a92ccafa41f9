// src/collider/config.rs

use std::f64::consts::PI;

/// Full parameter set for one event-generation run.
///
/// Everything the generator samples from or cuts on lives here, so a run
/// is reproducible from the struct alone: the same config (seed included)
/// yields bit-identical aggregate arrays.
#[derive(Debug, Clone, PartialEq)]
pub struct ColliderConfig {
    /// Center-of-mass energy √s in GeV.
    pub sqrt_s: f64,
    /// Number of synthetic collision events to generate.
    pub n_events: usize,
    /// Seed for the run's random generator.
    pub seed: u64,

    /// Scatters with pT below this (GeV) are discarded before smearing.
    pub jet_pt_cut: f64,
    /// Smeared jet pT values are floored at this value (GeV).
    pub jet_pt_floor: f64,
    /// Jets with |η| at or beyond this window are discarded.
    pub eta_window: f64,
    /// Additive floor on missing transverse energy (GeV).
    pub met_floor: f64,
    /// Mean of the exponential MET contribution (GeV).
    pub met_scale: f64,

    /// Mean of the Poisson draw for hard scatters per event.
    pub hard_scatter_mean: f64,
    /// Mean of the Poisson draw padding the jet multiplicity.
    pub hadronization_mean: f64,
    /// σ of the log-normal pT smearing factor.
    pub smear_sigma: f64,

    /// Mean of ln(x) for momentum-fraction candidates.
    pub x_log_mean: f64,
    /// σ of ln(x) for momentum-fraction candidates.
    pub x_log_sigma: f64,
    /// Lower clip of the momentum-fraction window.
    pub x_min: f64,
    /// Upper clip of the momentum-fraction window.
    pub x_max: f64,

    /// Scattering angle is drawn with cos θ uniform in ±this value.
    pub cos_theta_max: f64,
    /// Jet polar angles are drawn uniformly in (polar_margin, π - polar_margin).
    pub polar_margin: f64,
}

impl ColliderConfig {
    /// Squared center-of-mass energy s = (√s)².
    pub fn s(&self) -> f64 {
        self.sqrt_s * self.sqrt_s
    }
}

impl Default for ColliderConfig {
    /// The 14 TeV toy-run parameters.
    fn default() -> Self {
        Self {
            sqrt_s: 14_000.0,
            n_events: 10_000,
            seed: 137,
            jet_pt_cut: 30.0,
            jet_pt_floor: 20.0,
            eta_window: 4.8,
            met_floor: 15.0,
            met_scale: 35.0,
            hard_scatter_mean: 2.3,
            hadronization_mean: 1.8,
            smear_sigma: 0.08,
            x_log_mean: -3.0,
            x_log_sigma: 1.1,
            x_min: 1e-6,
            x_max: 0.99,
            cos_theta_max: 0.95,
            polar_margin: 0.1,
        }
    }
}

/// Upper bound on |η| reachable from the polar-angle window; jets drawn
/// with the default margin always land inside ±3.0.
pub fn eta_bound(polar_margin: f64) -> f64 {
    -((polar_margin / 2.0).tan().ln())
}

/// Converts a polar angle θ ∈ (0, π) to pseudorapidity.
pub fn pseudorapidity(theta: f64) -> f64 {
    debug_assert!(theta > 0.0 && theta < PI);
    -((theta / 2.0).tan().ln())
}
