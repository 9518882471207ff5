//! Configuration validation and parsing

use mlfq_simulator_core_rs::scheduler::{
    ArrivalParams, ConfigError, Scheduler, SchedulerConfig, SchedulerVariant,
};
use mlfq_simulator_core_rs::{LevelPolicy, Quantum};

fn finite(values: &[usize]) -> Vec<Quantum> {
    let mut quanta: Vec<Quantum> = values.iter().copied().map(Quantum::Finite).collect();
    quanta.push(Quantum::Unbounded);
    quanta
}

#[test]
fn test_valid_uniform_config() {
    let config = SchedulerConfig::uniform(finite(&[2, 4]), 10);
    assert_eq!(config.validate(), Ok(()));
}

#[test]
fn test_equal_quanta_accepted() {
    let config = SchedulerConfig::uniform(finite(&[3, 3]), 10);
    assert_eq!(config.validate(), Ok(()));
}

#[test]
fn test_single_unbounded_level_accepted() {
    let config = SchedulerConfig::uniform(vec![Quantum::Unbounded], 1);
    assert_eq!(config.validate(), Ok(()));
}

#[test]
fn test_zero_population_rejected() {
    let uniform = SchedulerConfig::uniform(finite(&[2, 4]), 0);
    let mixed = SchedulerConfig::mixed(2, 4, 0);

    assert_eq!(uniform.validate(), Err(ConfigError::ZeroPopulationCap));
    assert_eq!(mixed.validate(), Err(ConfigError::ZeroPopulationCap));
}

#[test]
fn test_empty_levels_rejected() {
    let config = SchedulerConfig::uniform(Vec::new(), 5);
    assert_eq!(config.validate(), Err(ConfigError::NoLevels));
}

#[test]
fn test_decreasing_quanta_rejected() {
    let config = SchedulerConfig::uniform(finite(&[5, 2]), 5);

    assert_eq!(
        config.validate(),
        Err(ConfigError::DecreasingQuanta {
            level: 1,
            previous: Quantum::Finite(5),
            current: Quantum::Finite(2),
        })
    );
}

#[test]
fn test_zero_quantum_rejected() {
    let uniform = SchedulerConfig::uniform(finite(&[0, 4]), 5);
    assert_eq!(uniform.validate(), Err(ConfigError::ZeroQuantum { level: 0 }));

    let mixed = SchedulerConfig::mixed(3, 0, 5);
    assert_eq!(mixed.validate(), Err(ConfigError::ZeroQuantum { level: 1 }));
}

#[test]
fn test_mixed_allows_decreasing_quanta() {
    // Only positivity is required for the mixed layout
    let config = SchedulerConfig::mixed(8, 2, 5);
    assert_eq!(config.validate(), Ok(()));
}

#[test]
fn test_bounded_deepest_level_rejected() {
    let config = SchedulerConfig::uniform(vec![Quantum::Finite(2), Quantum::Finite(4)], 5);
    assert_eq!(
        config.validate(),
        Err(ConfigError::BoundedDeepestLevel(Quantum::Finite(4)))
    );
}

#[test]
fn test_unbounded_above_deepest_rejected() {
    let config = SchedulerConfig::uniform(vec![Quantum::Unbounded, Quantum::Unbounded], 5);
    assert_eq!(
        config.validate(),
        Err(ConfigError::UnboundedAboveDeepest { level: 0 })
    );
}

#[test]
fn test_arrival_params_checked() {
    let mut config = SchedulerConfig::mixed(2, 4, 5);
    config.arrivals.admission_probability = 1.5;
    assert_eq!(config.validate(), Err(ConfigError::InvalidProbability(1.5)));

    let mut config = SchedulerConfig::mixed(2, 4, 5);
    config.arrivals.burst_min = 20;
    config.arrivals.burst_max = 10;
    assert_eq!(
        config.validate(),
        Err(ConfigError::InvalidBurstRange { min: 20, max: 10 })
    );

    let mut config = SchedulerConfig::mixed(2, 4, 5);
    config.arrivals.burst_min = 0;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidBurstRange { min: 0, .. })
    ));
}

#[test]
fn test_parse_uniform_json_with_defaults() {
    let config: SchedulerConfig = serde_json::from_str(
        r#"{
            "variant": { "type": "Uniform", "quanta": [2, 4, null] },
            "population_cap": 10
        }"#,
    )
    .unwrap();

    assert_eq!(
        config.variant,
        SchedulerVariant::Uniform {
            quanta: finite(&[2, 4])
        }
    );
    assert_eq!(config.rng_seed, None);
    assert_eq!(config.arrivals, ArrivalParams::default());
    assert_eq!(config.arrivals.admission_probability, 0.1);
    assert_eq!((config.arrivals.burst_min, config.arrivals.burst_max), (5, 50));
}

#[test]
fn test_parse_mixed_json_with_overrides() {
    let config: SchedulerConfig = serde_json::from_str(
        r#"{
            "variant": { "type": "Mixed", "q0": 3, "q1": 6 },
            "population_cap": 4,
            "rng_seed": 99,
            "arrivals": { "burst_max": 12 }
        }"#,
    )
    .unwrap();

    assert_eq!(config.variant, SchedulerVariant::Mixed { q0: 3, q1: 6 });
    assert_eq!(config.rng_seed, Some(99));
    assert_eq!(config.arrivals.burst_min, 5);
    assert_eq!(config.arrivals.burst_max, 12);
    assert_eq!(config.validate(), Ok(()));
}

#[test]
fn test_unknown_variant_fails_to_parse() {
    let result: Result<SchedulerConfig, _> = serde_json::from_str(
        r#"{ "variant": { "type": "Lottery" }, "population_cap": 3 }"#,
    );
    assert!(result.is_err());
}

#[test]
fn test_from_config_builds_layout() {
    let config = SchedulerConfig::mixed(3, 5, 10).with_seed(1);
    let scheduler = Scheduler::from_config(&config).unwrap();

    assert_eq!(scheduler.num_levels(), 3);
    assert_eq!(scheduler.population_cap(), 10);
    assert_eq!(
        scheduler.level_policies()[1],
        LevelPolicy::ShortestJobFirst {
            quantum: Quantum::Finite(5)
        }
    );
    assert_eq!(scheduler.level_policies()[2].quantum(), Quantum::Unbounded);
}

#[test]
fn test_from_config_propagates_errors() {
    let config = SchedulerConfig::uniform(finite(&[4, 1]), 10);
    assert!(matches!(
        Scheduler::from_config(&config),
        Err(ConfigError::DecreasingQuanta { level: 1, .. })
    ));
}
