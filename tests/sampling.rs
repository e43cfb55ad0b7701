use rand::rngs::mock::StepRng;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use rabinpoly::{
    find_irreducible, find_irreducible_unbounded, is_irreducible, random_candidate,
    random_candidate_unconstrained, SampleError, Sampler, SamplerConfig,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn candidate_degree_8_range() {
    let mut rng = ChaCha8Rng::seed_from_u64(0xC0FFEE);
    for _ in 0..10_000 {
        let c = random_candidate(&mut rng, 8).unwrap();
        assert!((128..=255).contains(&c.bits()), "{:#x}", c);
        assert_eq!(c.bits() & 1, 1);
    }
}

#[test]
fn unconstrained_candidates_hit_even_patterns() {
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let candidates: Vec<u64> = (0..256)
        .map(|_| random_candidate_unconstrained(&mut rng, 8).unwrap().bits())
        .collect();
    assert!(candidates.iter().all(|c| (128..=255).contains(c)));
    assert!(candidates.iter().any(|c| c % 2 == 0));
}

#[test]
fn find_degree_8_is_irreducible() {
    init_logging();
    let mut rng = ChaCha8Rng::seed_from_u64(8);
    let f = find_irreducible(&mut rng, 8, Some(10_000)).unwrap();
    assert!(is_irreducible(f));
    assert_eq!(f.degree(), Ok(7));
}

#[test]
fn find_degree_64_is_irreducible() {
    init_logging();
    let mut rng = ChaCha8Rng::seed_from_u64(64);
    let f = find_irreducible(&mut rng, 64, Some(100_000)).unwrap();
    assert!(f.is_irreducible());
    assert_eq!(f.degree(), Ok(63));
    assert!(f.coeff(0));
}

#[test]
fn unbounded_wrapper_finds() {
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    let f = find_irreducible_unbounded(&mut rng, 32).unwrap();
    assert!(f.is_irreducible());
    assert_eq!(f.degree(), Ok(31));
}

#[test]
fn same_seed_same_polynomial() {
    let a = find_irreducible(&mut ChaCha8Rng::seed_from_u64(99), 64, Some(100_000)).unwrap();
    let b = find_irreducible(&mut ChaCha8Rng::seed_from_u64(99), 64, Some(100_000)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn zero_budget_draws_nothing() {
    init_logging();
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let mut reference = rng.clone();
    assert_eq!(
        find_irreducible(&mut rng, 64, Some(0)),
        Err(SampleError::Exhausted { attempts: 0 })
    );
    assert_eq!(rng.gen::<u64>(), reference.gen::<u64>());
}

#[test]
fn exhausted_budget_is_recoverable() {
    init_logging();
    // Every draw is 0, so every candidate is x^63 + 1, which x + 1 divides
    let mut stuck = StepRng::new(0, 0);
    let err = find_irreducible(&mut stuck, 64, Some(50)).unwrap_err();
    assert_eq!(err, SampleError::Exhausted { attempts: 50 });

    // Retrying with a real source succeeds
    let mut rng = ChaCha8Rng::seed_from_u64(2);
    assert!(find_irreducible(&mut rng, 64, Some(100_000)).is_ok());
}

#[test]
fn attempt_count_matches_draws() {
    let config = SamplerConfig::default()
        .with_degree_bits(16)
        .with_max_attempts(Some(10_000));
    let sampler = Sampler::new(config).unwrap();

    let mut rng = ChaCha8Rng::seed_from_u64(16);
    let sample = sampler.find_with_stats(&mut rng).unwrap();
    assert!(sample.attempts >= 1);

    // Replaying the same number of candidates ends on the accepted one
    let mut replay = ChaCha8Rng::seed_from_u64(16);
    let mut last = None;
    for _ in 0..sample.attempts {
        last = Some(sampler.candidate(&mut replay));
    }
    assert_eq!(last, Some(sample.poly));
}

#[test]
fn budget_smaller_than_needed_fails() {
    let config = SamplerConfig::default()
        .with_degree_bits(64)
        .with_max_attempts(Some(100_000));
    let sampler = Sampler::new(config).unwrap();
    let needed = sampler
        .find_with_stats(&mut ChaCha8Rng::seed_from_u64(77))
        .unwrap()
        .attempts;

    let tight = Sampler::new(config.with_max_attempts(Some(needed - 1))).unwrap();
    assert_eq!(
        tight.find(&mut ChaCha8Rng::seed_from_u64(77)),
        Err(SampleError::Exhausted {
            attempts: needed - 1
        })
    );
}

#[test]
fn invalid_widths() {
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    for bits in [0, 65] {
        assert_eq!(
            random_candidate(&mut rng, bits),
            Err(SampleError::InvalidDegree { degree_bits: bits })
        );
    }
    assert_eq!(
        find_irreducible(&mut rng, 1, None),
        Err(SampleError::InvalidDegree { degree_bits: 1 })
    );
}

#[test]
fn error_is_std_error() {
    fn assert_error<E: std::error::Error>(_: &E) {}
    assert_error(&SampleError::Exhausted { attempts: 1 });
    assert_error(&rabinpoly::DomainError::ZeroModulus);
}
