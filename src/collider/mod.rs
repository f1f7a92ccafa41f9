// src/collider/mod.rs

//! Simplified proton-collision event generation: per-event jet kinematics,
//! multiplicity, and missing transverse energy, aggregated over a run.
//!
//! The model is deliberately coarse. Hard scatters per event follow a
//! Poisson draw; each scatter's transverse momentum comes from sampled
//! momentum fractions and massless 2→2 kinematics; acceptance cuts,
//! log-normal smearing, and a hadronization padding term shape the final
//! per-event record.

pub mod config;
pub mod kinematics;
pub mod pdf;

pub use config::ColliderConfig;

use crate::core::QssmError;
use kinematics::generate_2to2;
use pdf::sample_momentum_fractions;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Exp, LogNormal, Poisson};
use tracing::debug;

/// One synthetic collision event before aggregation.
#[derive(Debug, Clone, PartialEq)]
pub struct EventRecord {
    /// Accepted, smeared jet transverse momenta (GeV).
    pub jet_pts: Vec<f64>,
    /// Jet multiplicity including the hadronization padding term.
    pub multiplicity: usize,
    /// Missing transverse energy (GeV).
    pub met: f64,
}

/// Flat aggregate arrays over a full run, consumed by summary printing
/// and plotting.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EventSample {
    /// Every accepted jet pT across all events (GeV).
    pub jet_pts: Vec<f64>,
    /// Jet multiplicity per event.
    pub multiplicities: Vec<usize>,
    /// Missing transverse energy per event (GeV).
    pub mets: Vec<f64>,
}

impl EventSample {
    /// Number of events aggregated.
    pub fn n_events(&self) -> usize {
        self.multiplicities.len()
    }

    /// Mean jet multiplicity across all events. 0.0 for an empty sample.
    pub fn mean_multiplicity(&self) -> f64 {
        if self.multiplicities.is_empty() {
            return 0.0;
        }
        self.multiplicities.iter().sum::<usize>() as f64 / self.multiplicities.len() as f64
    }

    /// Number of aggregated jets with pT above `threshold`.
    pub fn jets_above(&self, threshold: f64) -> usize {
        self.jet_pts.iter().filter(|&&pt| pt > threshold).count()
    }

    fn absorb(&mut self, record: EventRecord) {
        self.jet_pts.extend(record.jet_pts);
        self.multiplicities.push(record.multiplicity);
        self.mets.push(record.met);
    }
}

/// Generates a full run of synthetic collision events from a config.
///
/// All randomness flows through one seeded `StdRng` built from the config,
/// so `generate` is a pure function of the configuration.
pub struct EventGenerator {
    config: ColliderConfig,
}

impl EventGenerator {
    /// Creates a generator for the given configuration.
    pub fn new(config: ColliderConfig) -> Self {
        Self { config }
    }

    /// The configuration this generator runs with.
    pub fn config(&self) -> &ColliderConfig {
        &self.config
    }

    /// Runs the configured number of events and aggregates them.
    ///
    /// # Errors
    /// * `InvalidOperation` if a distribution parameter is out of range
    ///   (non-positive means, negative σ).
    /// * `SamplingFailure` if momentum-fraction sampling exhausts its
    ///   bounded retry budget.
    pub fn generate(&self) -> Result<EventSample, QssmError> {
        let cfg = &self.config;
        let mut rng = StdRng::seed_from_u64(cfg.seed);

        let hard_scatters = Poisson::new(cfg.hard_scatter_mean)
            .map_err(|e| invalid_param("hard_scatter_mean", e))?;
        let hadronization = Poisson::new(cfg.hadronization_mean)
            .map_err(|e| invalid_param("hadronization_mean", e))?;
        let met_tail =
            Exp::new(1.0 / cfg.met_scale).map_err(|e| invalid_param("met_scale", e))?;
        let smearing = LogNormal::new(0.0, cfg.smear_sigma)
            .map_err(|e| invalid_param("smear_sigma", e))?;

        let mut sample = EventSample::default();
        for _ in 0..cfg.n_events {
            let record =
                self.generate_event(&hard_scatters, &hadronization, &met_tail, &smearing, &mut rng)?;
            sample.absorb(record);
        }

        debug!(
            events = sample.n_events(),
            jets = sample.jet_pts.len(),
            "event generation complete"
        );
        Ok(sample)
    }

    /// Generates one event: Poisson-many hard scatters, acceptance cuts,
    /// smearing and flooring, hadronization padding, and the MET draw.
    fn generate_event<R: Rng + ?Sized>(
        &self,
        hard_scatters: &Poisson<f64>,
        hadronization: &Poisson<f64>,
        met_tail: &Exp<f64>,
        smearing: &LogNormal<f64>,
        rng: &mut R,
    ) -> Result<EventRecord, QssmError> {
        let cfg = &self.config;
        let n_hard: f64 = hard_scatters.sample(rng);
        let n_hard = n_hard as usize;

        let mut jets = Vec::new();
        for _ in 0..n_hard {
            let fractions = sample_momentum_fractions(cfg, 2, rng)?;
            let scatter = generate_2to2(cfg, fractions[0], fractions[1], rng);
            if scatter.pt < cfg.jet_pt_cut {
                continue;
            }
            // Back-to-back pair: each leg enters acceptance on its own.
            for eta in [scatter.eta1, scatter.eta2] {
                if eta.abs() < cfg.eta_window {
                    let smeared = scatter.pt * smearing.sample(rng);
                    jets.push(smeared.max(cfg.jet_pt_floor));
                }
            }
        }

        let padding: f64 = hadronization.sample(rng);
        let multiplicity = jets.len() + padding as usize;
        let met = met_tail.sample(rng) + cfg.met_floor;

        Ok(EventRecord {
            jet_pts: jets,
            multiplicity,
            met,
        })
    }
}

fn invalid_param(name: &str, err: impl std::fmt::Display) -> QssmError {
    QssmError::InvalidOperation {
        message: format!("invalid collider parameter {}: {}", name, err),
    }
}
