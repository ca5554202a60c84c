/*!
 * Replacement Engine Tests
 * Frame-set integrity, hit/fault mutation rules, and reset behavior
 */

use memsim::replace::FrameInfo;
use memsim::{FrameTable, ReplacementEngine, ReplacementPolicy};
use pretty_assertions::assert_eq;

#[test]
fn test_engine_initialization() {
    let engine = ReplacementEngine::new(4, ReplacementPolicy::Fifo);
    assert_eq!(engine.capacity(), 4);
    assert!(engine.resident_pages().0.iter().all(|p| p.is_none()));
}

#[test]
fn test_capacity_never_changes_during_a_run() {
    let mut engine = ReplacementEngine::new(2, ReplacementPolicy::Lru);
    let report = engine.run(&[1, 2, 3, 4, 5]);
    assert!(report.steps.iter().all(|e| e.frames.0.len() == 2));
    assert_eq!(report.capacity, 2);
}

#[test]
fn test_fault_changes_exactly_one_frame() {
    let mut table = FrameTable::new(3);
    let mut previous = table.snapshot();
    for &page in &[7, 0, 1, 2, 0, 3, 0, 4] {
        let event = table.step(page, ReplacementPolicy::Fifo);
        let changed = previous
            .0
            .iter()
            .zip(event.frames.0.iter())
            .filter(|(a, b)| a != b)
            .count();
        if event.fault {
            assert_eq!(changed, 1);
        } else {
            assert_eq!(changed, 0);
        }
        previous = event.frames;
    }
}

#[test]
fn test_hit_is_reported_without_eviction() {
    let mut engine = ReplacementEngine::new(2, ReplacementPolicy::Lru);
    engine.step(8);
    let event = engine.step(8);
    assert!(!event.fault);
    assert_eq!(event.evicted, None);
    assert_eq!(event.frames.0, vec![Some(8), None]);
}

#[test]
fn test_eviction_reports_the_displaced_page() {
    let mut engine = ReplacementEngine::new(1, ReplacementPolicy::Fifo);
    engine.step(1);
    let event = engine.step(2);
    assert!(event.fault);
    assert_eq!(event.evicted, Some(1));
}

#[test]
fn test_cold_start_faults_are_free_of_evictions() {
    let mut engine = ReplacementEngine::new(3, ReplacementPolicy::Lru);
    let report = engine.run(&[1, 2, 3]);
    assert_eq!(report.stats.total_faults, 3);
    assert!(report.steps.iter().all(|e| e.evicted.is_none()));
}

#[test]
fn test_reset_restores_empty_state_between_policy_runs() {
    let trace = [7, 0, 1, 2, 0, 3];
    let mut engine = ReplacementEngine::new(3, ReplacementPolicy::Fifo);
    let fifo = engine.run(&trace);

    engine.reset();
    engine.set_policy(ReplacementPolicy::Lru);
    let lru = engine.run(&trace);

    // both runs start cold: first three snapshots are identical fills
    assert_eq!(fifo.steps[0].frames, lru.steps[0].frames);
    assert_eq!(fifo.steps[1].frames, lru.steps[1].frames);
    assert_eq!(fifo.steps[2].frames, lru.steps[2].frames);
}
