// tests/integration/random_streams.rs
//! Generator configuration, determinism and rand interop

use fulgor_math::numerics::random;
use fulgor_math::{NumericsError, RandomConfig, RandomPcg};
use rand::seq::SliceRandom;
use rand::Rng;

#[test]
fn test_configured_generators_are_reproducible() {
    println!("=== Configured Generator Reproducibility Test ===");
    super::init_tracing();

    let config = RandomConfig::parse("seed=0x2a, increment=54").unwrap();
    assert_eq!(config, RandomConfig::new(42, 54));

    let mut a = RandomPcg::from_config(&config);
    let mut b = RandomPcg::new(42, 54);
    for _ in 0..64 {
        assert_eq!(a.rand(), b.rand());
    }
    // First output of the reference PCG32 stream for (42, 54).
    assert_eq!(RandomPcg::from_config(&config).rand(), 0xa15c02b7);

    println!("Configured generator reproducibility: OK");
}

#[test]
fn test_streams_differ_by_increment() {
    let mut a = RandomPcg::from_config(&RandomConfig::new(7, 1));
    let mut b = RandomPcg::from_config(&RandomConfig::new(7, 2));
    let first: Vec<u32> = (0..8).map(|_| a.rand()).collect();
    let second: Vec<u32> = (0..8).map(|_| b.rand()).collect();
    assert_ne!(first, second);
}

#[test]
fn test_configuration_errors() {
    let cases = [
        ("seed=", "seed"),
        ("seed=12,increment=oops", "increment"),
        ("inc=-4", "inc"),
    ];
    for (parameters, parameter_name) in cases {
        match RandomConfig::parse(parameters) {
            Err(NumericsError::InvalidParameter { name, .. }) => assert_eq!(name, parameter_name),
            other => panic!("Expected InvalidParameter for '{}', got: {:?}", parameters, other),
        }
    }

    let error = RandomConfig::parse("state=1").unwrap_err();
    assert_eq!(error.to_string(), "Unknown parameter: state");
}

#[test]
fn test_rand_ecosystem_interop() {
    let mut rng = RandomPcg::new(2024, 1);
    for _ in 0..200 {
        let die = rng.random_range(1..=6);
        assert!((1..=6).contains(&die));
        let unit: f64 = rng.random();
        assert!((0.0..1.0).contains(&unit));
    }

    let mut deck: Vec<u32> = (0..52).collect();
    let mut replay = deck.clone();
    deck.shuffle(&mut RandomPcg::new(5, 5));
    replay.shuffle(&mut RandomPcg::new(5, 5));
    assert_eq!(deck, replay);
    assert_ne!(deck, (0..52).collect::<Vec<u32>>());
}

#[test]
fn test_rand_from_seed_chains() {
    let mut seed = 99_u64;
    let chain: Vec<u32> = (0..5).map(|_| random::rand_from_seed(&mut seed)).collect();

    let mut replay_seed = 99_u64;
    let replay: Vec<u32> = (0..5)
        .map(|_| random::rand_from_seed(&mut replay_seed))
        .collect();

    assert_eq!(chain, replay);
    assert_eq!(seed, replay_seed);
    assert_ne!(seed, 99);
}

// The only test in this binary that touches the process-wide generator.
#[test]
fn test_process_wide_generator() {
    super::init_tracing();

    random::configure(&RandomConfig::new(42, 54));
    assert_eq!(random::rand(), 0xa15c02b7);

    // Reseeding keeps the configured stream.
    random::seed(1234);
    let expected: Vec<u32> = {
        let mut local = RandomPcg::new(1234, 54);
        (0..4).map(|_| local.rand()).collect()
    };
    let actual: Vec<u32> = (0..4).map(|_| random::rand()).collect();
    assert_eq!(actual, expected);

    for _ in 0..100 {
        let f = random::randomf(-2.0, 2.0);
        assert!((-2.0..=2.0).contains(&f));
        let d = random::randomd(10.0, 20.0);
        assert!((10.0..=20.0).contains(&d));
        let r = random::randomr(-5, 5);
        assert!((-5.0..=5.0).contains(&r));
    }

    random::randomize();
    let _ = random::randf();
}
