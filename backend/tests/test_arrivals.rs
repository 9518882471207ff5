//! Arrival Generator Tests
//!
//! Admission is a Bernoulli trial per tick, bounded by the population cap.

use mlfq_simulator_core_rs::arrivals::{ArrivalConfig, ArrivalGenerator};
use mlfq_simulator_core_rs::scheduler::{Scheduler, SchedulerConfig};
use mlfq_simulator_core_rs::{RngManager, SequenceRandom};

#[test]
fn test_cap_never_exceeded() {
    let config = ArrivalConfig {
        admission_probability: 1.0,
        burst_min: 5,
        burst_max: 50,
        population_cap: 7,
    };
    let mut generator = ArrivalGenerator::new(config);
    let mut rng = RngManager::new(5);

    let admitted = (0..10_000)
        .filter_map(|tick| generator.maybe_admit(tick, &mut rng))
        .count();

    assert_eq!(admitted, 7);
    assert_eq!(generator.generated_count(), 7);
    assert!(generator.is_exhausted());
}

#[test]
fn test_zero_cap_admits_nothing_and_draws_nothing() {
    let mut generator = ArrivalGenerator::new(ArrivalConfig::with_cap(0));
    let mut rng = SequenceRandom::new(vec![0.0; 5], vec![10; 5]);

    for tick in 0..5 {
        assert!(generator.maybe_admit(tick, &mut rng).is_none());
    }
    assert_eq!(rng.remaining_uniforms(), 5);
}

#[test]
fn test_admission_rate_near_configured_probability() {
    let mut generator = ArrivalGenerator::new(ArrivalConfig::with_cap(usize::MAX));
    let mut rng = RngManager::new(2718);

    let ticks = 100_000;
    let admitted = (0..ticks)
        .filter_map(|tick| generator.maybe_admit(tick, &mut rng))
        .count();

    let rate = admitted as f64 / ticks as f64;
    assert!((0.09..0.11).contains(&rate), "admission rate {} far from 0.1", rate);
}

#[test]
fn test_bursts_stay_in_default_range() {
    let mut generator = ArrivalGenerator::new(ArrivalConfig::with_cap(usize::MAX));
    let mut rng = RngManager::new(161);

    let bursts: Vec<usize> = (0..50_000)
        .filter_map(|tick| generator.maybe_admit(tick, &mut rng))
        .map(|p| p.burst_time())
        .collect();

    assert!(bursts.iter().all(|b| (5..=50).contains(b)));
    assert!(bursts.contains(&5));
    assert!(bursts.contains(&50));
}

#[test]
fn test_arrival_time_is_admission_tick() {
    let mut generator = ArrivalGenerator::new(ArrivalConfig::with_cap(2));
    let mut rng = SequenceRandom::admit_at(&[3, 8], &[5, 6]);

    let arrivals: Vec<(u32, usize)> = (0..20)
        .filter_map(|tick| generator.maybe_admit(tick, &mut rng))
        .map(|p| (p.id(), p.arrival_time()))
        .collect();

    assert_eq!(arrivals, vec![(1, 3), (2, 8)]);
}

#[test]
fn test_scheduler_admits_into_level_zero_tail() {
    let config = SchedulerConfig::mixed(50, 50, 3).with_seed(8);
    let mut scheduler = Scheduler::from_config(&config).unwrap();

    // Collect level-0 order after every tick; arrivals only ever append
    let mut last_len = 0;
    while scheduler.generated_count() < 3 {
        scheduler.tick();
        let ids: Vec<u32> = scheduler.level(0).iter().map(|p| p.id()).collect();
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
        if ids.len() > last_len {
            assert_eq!(ids.last().copied(), Some(scheduler.generated_count() as u32));
        }
        last_len = ids.len();
    }
}
