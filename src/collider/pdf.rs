// src/collider/pdf.rs

//! Parton momentum-fraction sampling.
//!
//! Candidates are drawn log-normally and accepted against a CTEQ-like
//! weighting (1-x)³ / x^0.7, valence-plus-gluon shaped. The retry loop is
//! bounded: if the acceptance rate collapses the sampler reports a
//! `SamplingFailure` instead of looping forever.

use crate::collider::ColliderConfig;
use crate::core::QssmError;
use rand::Rng;
use rand_distr::{Distribution, LogNormal};

/// Batch rounds attempted before the sampler gives up.
pub(crate) const MAX_SAMPLING_ROUNDS: usize = 64;

/// The unnormalized acceptance weight for a momentum fraction.
fn pdf_weight(x: f64) -> f64 {
    (1.0 - x).powi(3) / x.powf(0.7)
}

/// Draws `count` momentum fractions from the approximate parton density.
///
/// Each round draws a batch of log-normal candidates, clips them to the
/// configured x window, and accepts each with probability w(x)/max(w)
/// over the batch. Rounds repeat until `count` fractions are accepted or
/// the attempt budget runs out.
///
/// # Errors
/// * `SamplingFailure` after `MAX_SAMPLING_ROUNDS` rounds without enough
///   accepted candidates (degenerate acceptance rate).
pub fn sample_momentum_fractions<R: Rng + ?Sized>(
    config: &ColliderConfig,
    count: usize,
    rng: &mut R,
) -> Result<Vec<f64>, QssmError> {
    if count == 0 {
        return Ok(Vec::new());
    }

    let candidate_dist = LogNormal::new(config.x_log_mean, config.x_log_sigma).map_err(|e| {
        QssmError::InvalidOperation {
            message: format!("invalid momentum-fraction distribution parameters: {}", e),
        }
    })?;

    let batch = count.max(16);
    let mut accepted = Vec::with_capacity(count);

    for _round in 0..MAX_SAMPLING_ROUNDS {
        let candidates: Vec<f64> = (0..batch)
            .map(|_| candidate_dist.sample(rng).clamp(config.x_min, config.x_max))
            .collect();
        let weights: Vec<f64> = candidates.iter().map(|&x| pdf_weight(x)).collect();
        let w_max = weights.iter().cloned().fold(0.0_f64, f64::max);
        if w_max <= 0.0 {
            // Every candidate clipped onto a zero-weight edge.
            continue;
        }

        for (&x, &w) in candidates.iter().zip(weights.iter()) {
            if rng.random::<f64>() < w / w_max {
                accepted.push(x);
                if accepted.len() == count {
                    return Ok(accepted);
                }
            }
        }
    }

    Err(QssmError::SamplingFailure {
        attempts: MAX_SAMPLING_ROUNDS,
        message: format!(
            "accepted only {} of {} momentum fractions; acceptance rate too low for x window [{:.1e}, {:.2}]",
            accepted.len(),
            count,
            config.x_min,
            config.x_max
        ),
    })
}
