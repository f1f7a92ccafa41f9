// tests/collider_tests.rs

use qssm::collider::config::eta_bound;
use qssm::collider::kinematics::generate_2to2;
use qssm::collider::pdf::sample_momentum_fractions;
use qssm::{ColliderConfig, EventGenerator, QssmError};

use rand::SeedableRng;
use rand::rngs::StdRng;

fn test_config() -> ColliderConfig {
    ColliderConfig {
        n_events: 500,
        ..ColliderConfig::default()
    }
}

#[test]
fn test_fixed_seed_reproduces_aggregates() -> Result<(), QssmError> {
    let config = test_config();
    let sample_a = EventGenerator::new(config.clone()).generate()?;
    let sample_b = EventGenerator::new(config).generate()?;

    assert_eq!(sample_a.jet_pts, sample_b.jet_pts);
    assert_eq!(sample_a.multiplicities, sample_b.multiplicities);
    assert_eq!(sample_a.mets, sample_b.mets);
    Ok(())
}

#[test]
fn test_different_seeds_diverge() -> Result<(), QssmError> {
    let config = test_config();
    let other = ColliderConfig {
        seed: config.seed + 1,
        ..config.clone()
    };
    let sample_a = EventGenerator::new(config).generate()?;
    let sample_b = EventGenerator::new(other).generate()?;

    // MET is drawn every event, so any seed change shows up there.
    assert_ne!(sample_a.mets, sample_b.mets);
    Ok(())
}

#[test]
fn test_jet_pt_floor_holds() -> Result<(), QssmError> {
    let config = test_config();
    let floor = config.jet_pt_floor;
    let sample = EventGenerator::new(config).generate()?;

    assert!(!sample.jet_pts.is_empty(), "run produced no jets at all");
    for &pt in &sample.jet_pts {
        assert!(pt >= floor, "jet pT {} below floor {}", pt, floor);
    }
    Ok(())
}

#[test]
fn test_met_floor_holds() -> Result<(), QssmError> {
    let config = test_config();
    let floor = config.met_floor;
    let sample = EventGenerator::new(config).generate()?;

    assert_eq!(sample.mets.len(), 500);
    for &met in &sample.mets {
        assert!(met >= floor, "MET {} below floor {}", met, floor);
    }
    Ok(())
}

#[test]
fn test_one_record_per_event() -> Result<(), QssmError> {
    let config = test_config();
    let n_events = config.n_events;
    let sample = EventGenerator::new(config).generate()?;

    assert_eq!(sample.n_events(), n_events);
    assert_eq!(sample.multiplicities.len(), n_events);
    assert_eq!(sample.mets.len(), n_events);
    Ok(())
}

#[test]
fn test_momentum_fractions_within_window() -> Result<(), QssmError> {
    let config = test_config();
    let mut rng = StdRng::seed_from_u64(3);
    let fractions = sample_momentum_fractions(&config, 1000, &mut rng)?;

    assert_eq!(fractions.len(), 1000);
    for x in fractions {
        assert!(
            (config.x_min..=config.x_max).contains(&x),
            "fraction {} outside [{}, {}]",
            x,
            config.x_min,
            config.x_max
        );
    }
    Ok(())
}

#[test]
fn test_rejection_sampler_fails_bounded() {
    // A window clipped to x = 1 zeroes every acceptance weight; the
    // sampler must return an error instead of retrying forever.
    let config = ColliderConfig {
        x_min: 1.0,
        x_max: 1.0,
        ..ColliderConfig::default()
    };
    let mut rng = StdRng::seed_from_u64(3);
    let outcome = sample_momentum_fractions(&config, 2, &mut rng);
    assert!(matches!(outcome, Err(QssmError::SamplingFailure { .. })));
}

#[test]
fn test_scatter_pt_respects_partonic_bound() {
    let config = ColliderConfig::default();
    let mut rng = StdRng::seed_from_u64(9);

    for _ in 0..300 {
        let x1 = 0.03;
        let x2 = 0.01;
        let scatter = generate_2to2(&config, x1, x2, &mut rng);
        let s_hat = x1 * x2 * config.s();
        assert!(scatter.pt <= s_hat.sqrt() / 2.0 + 1e-9);
        assert!(scatter.pt >= 0.0);
    }
}

#[test]
fn test_eta_window_wider_than_polar_reach() {
    // With the default polar margin, |eta| tops out near 3.0, safely
    // inside the 4.8 acceptance window.
    let config = ColliderConfig::default();
    assert!(eta_bound(config.polar_margin) < config.eta_window);
}

#[test]
fn test_invalid_distribution_parameter_is_reported() {
    let config = ColliderConfig {
        n_events: 1,
        hard_scatter_mean: -1.0,
        ..ColliderConfig::default()
    };
    let outcome = EventGenerator::new(config).generate();
    assert!(matches!(outcome, Err(QssmError::InvalidOperation { .. })));
}
