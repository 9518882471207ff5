use super::*;
use crate::arrivals::ArrivalConfig;
use crate::models::{Event, Process};
use crate::policy::{LevelPolicy, Quantum};
use crate::rng::SequenceRandom;

fn uniform_levels(quanta: &[Option<usize>]) -> Vec<LevelPolicy> {
    quanta
        .iter()
        .map(|&q| LevelPolicy::RoundRobin { quantum: q.into() })
        .collect()
}

fn scripted(levels: Vec<LevelPolicy>, cap: usize, ticks: &[usize], bursts: &[usize]) -> Scheduler {
    Scheduler::new(
        levels,
        ArrivalConfig {
            burst_min: 1,
            ..ArrivalConfig::with_cap(cap)
        },
        Box::new(SequenceRandom::admit_at(ticks, bursts)),
    )
}

#[test]
fn test_new_scheduler_is_idle_at_time_zero() {
    let scheduler = scripted(uniform_levels(&[Some(2), None]), 3, &[], &[]);

    assert_eq!(scheduler.current_time(), 0);
    assert!(scheduler.is_idle());
    assert!(!scheduler.is_paused());
    assert_eq!(scheduler.num_levels(), 2);
    assert_eq!(scheduler.generated_count(), 0);
    assert_eq!(scheduler.population_cap(), 3);
}

#[test]
fn test_arrival_is_dispatched_on_the_same_tick() {
    let mut scheduler = scripted(uniform_levels(&[Some(2), None]), 1, &[0], &[5]);

    let result = scheduler.tick();

    assert_eq!(result.tick, 0);
    assert_eq!(result.arrived, Some(1));
    assert_eq!(result.dispatched, Some(1));
    assert_eq!(result.running, Some(1));
    assert_eq!(scheduler.running().map(Process::remaining_time), Some(5));
    assert_eq!(scheduler.current_time(), 1);
}

#[test]
fn test_paused_tick_changes_nothing() {
    let mut scheduler = scripted(uniform_levels(&[Some(2), None]), 1, &[0], &[5]);
    scheduler.tick();
    scheduler.tick();
    scheduler.set_paused(true);

    let before = scheduler.snapshot();
    for _ in 0..5 {
        let result = scheduler.tick();
        assert!(result.paused);
        assert_eq!(result.tick, 2);
        assert_eq!(result.running, Some(1));
    }
    let after = scheduler.snapshot();

    assert_eq!(after.current_time, before.current_time);
    assert_eq!(after, before);
    assert_eq!(scheduler.run(100), 0);
}

#[test]
fn test_unpause_resumes_where_it_stopped() {
    let mut scheduler = scripted(uniform_levels(&[Some(2), None]), 1, &[0], &[5]);
    scheduler.set_paused(true);
    scheduler.tick();
    scheduler.set_paused(false);

    let result = scheduler.tick();
    assert_eq!(result.tick, 0);
    assert_eq!(result.arrived, Some(1));
}

#[test]
fn test_idle_time_advances() {
    let mut scheduler = scripted(uniform_levels(&[None]), 1, &[4], &[5]);

    for _ in 0..4 {
        let result = scheduler.tick();
        assert_eq!(result.running, None);
    }
    assert_eq!(scheduler.current_time(), 4);
    assert_eq!(scheduler.tick().arrived, Some(1));
}

#[test]
fn test_process_rotates_at_deepest_bounded_level() {
    // A single level with a finite quantum: the process is re-queued in place
    let mut scheduler = scripted(uniform_levels(&[Some(2)]), 1, &[0], &[5]);
    scheduler.run(100);

    let rotations: Vec<&Event> = scheduler.event_log().events_of_type("Preemption");
    assert_eq!(rotations.len(), 2);
    assert!(rotations.iter().all(|e| !e.is_demotion()));
    assert_eq!(scheduler.completed()[0].current_level(), 0);
    assert_eq!(scheduler.completed()[0].waiting_time(), Some(0));
}

#[test]
fn test_run_stops_when_finished() {
    let mut scheduler = scripted(uniform_levels(&[Some(2), Some(4), None]), 1, &[0], &[5]);

    let executed = scheduler.run(1_000);

    assert_eq!(executed, 6);
    assert!(scheduler.is_finished());
    assert_eq!(scheduler.completed().len(), 1);
}

#[test]
fn test_run_respects_tick_budget() {
    let mut scheduler = scripted(uniform_levels(&[Some(2), None]), 1, &[0], &[40]);

    assert_eq!(scheduler.run(10), 10);
    assert!(!scheduler.is_finished());
    assert_eq!(scheduler.current_time(), 10);
}

#[test]
fn test_reset_replays_seeded_run() {
    let config = SchedulerConfig::mixed(3, 5, 4).with_seed(7);
    let mut scheduler = Scheduler::from_config(&config).unwrap();
    scheduler.run(5_000);
    let first_log = scheduler.event_log().clone();
    let first_completed: Vec<ProcessSnapshot> = scheduler.snapshot().completed;

    scheduler.reset();
    assert_eq!(scheduler.current_time(), 0);
    assert!(scheduler.completed().is_empty());
    assert!(scheduler.event_log().is_empty());
    assert_eq!(scheduler.generated_count(), 0);

    scheduler.run(5_000);
    assert_eq!(scheduler.event_log(), &first_log);
    assert_eq!(scheduler.snapshot().completed, first_completed);
}

#[test]
fn test_reset_keeps_pause_flag() {
    let mut scheduler = scripted(uniform_levels(&[None]), 1, &[0], &[5]);
    scheduler.set_paused(true);
    scheduler.reset();
    assert!(scheduler.is_paused());
}

#[test]
fn test_from_config_rejects_invalid_config() {
    let config = SchedulerConfig::uniform(vec![Quantum::Finite(3)], 5);
    assert_eq!(
        Scheduler::from_config(&config).unwrap_err(),
        ConfigError::BoundedDeepestLevel(Quantum::Finite(3))
    );
}

#[test]
fn test_snapshot_mirrors_queues() {
    let mut scheduler = scripted(
        vec![
            LevelPolicy::RoundRobin { quantum: Quantum::Finite(3) },
            LevelPolicy::ShortestJobFirst { quantum: Quantum::Finite(3) },
            LevelPolicy::FirstComeFirstServed,
        ],
        2,
        &[0, 1],
        &[10, 10],
    );
    for _ in 0..5 {
        scheduler.tick();
    }

    let snapshot = scheduler.snapshot();
    assert_eq!(snapshot.current_time, 5);
    assert_eq!(snapshot.levels[0].policy, "RR");
    assert_eq!(snapshot.levels[1].policy, "SJF");
    assert_eq!(snapshot.levels[2].quantum, Quantum::Unbounded);
    assert_eq!(snapshot.running.as_ref().map(|p| p.pid), Some(2));
    assert_eq!(snapshot.levels[1].processes[0].pid, 1);
    assert_eq!(snapshot.levels[1].processes[0].remaining_time, 7);
    assert_eq!(snapshot.total_waiting(), 1);
    assert_eq!(snapshot.generated_count, 2);
}
