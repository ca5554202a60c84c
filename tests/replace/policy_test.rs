/*!
 * Replacement Policy Tests
 * Exact fault counts and frame rows for the reference trace
 */

use memsim::{ReplacementEngine, ReplacementPolicy};
use pretty_assertions::assert_eq;

const TRACE: [u32; 12] = [7, 0, 1, 2, 0, 3, 0, 4, 2, 3, 0, 3];

fn snapshots(report: &memsim::ReplacementReport) -> Vec<Vec<Option<u32>>> {
    report.steps.iter().map(|e| e.frames.0.clone()).collect()
}

#[test]
fn test_fifo_reference_trace() {
    let mut engine = ReplacementEngine::new(3, ReplacementPolicy::Fifo);
    let report = engine.run(&TRACE);

    assert_eq!(report.stats.total_faults, 10);
    assert_eq!(report.stats.hits, 2);
    assert_eq!(
        snapshots(&report),
        vec![
            vec![Some(7), None, None],
            vec![Some(7), Some(0), None],
            vec![Some(7), Some(0), Some(1)],
            vec![Some(2), Some(0), Some(1)],
            vec![Some(2), Some(0), Some(1)], // hit on 0
            vec![Some(2), Some(3), Some(1)],
            vec![Some(2), Some(3), Some(0)],
            vec![Some(4), Some(3), Some(0)],
            vec![Some(4), Some(2), Some(0)],
            vec![Some(4), Some(2), Some(3)],
            vec![Some(0), Some(2), Some(3)],
            vec![Some(0), Some(2), Some(3)], // hit on 3
        ]
    );
}

#[test]
fn test_lru_reference_trace() {
    let mut engine = ReplacementEngine::new(3, ReplacementPolicy::Lru);
    let report = engine.run(&TRACE);

    assert_eq!(report.stats.total_faults, 9);
    assert_eq!(report.stats.hits, 3);
    assert_eq!(
        snapshots(&report),
        vec![
            vec![Some(7), None, None],
            vec![Some(7), Some(0), None],
            vec![Some(7), Some(0), Some(1)],
            vec![Some(2), Some(0), Some(1)], // 7 was least recent
            vec![Some(2), Some(0), Some(1)], // hit on 0
            vec![Some(2), Some(0), Some(3)], // 1 was least recent
            vec![Some(2), Some(0), Some(3)], // hit on 0
            vec![Some(4), Some(0), Some(3)], // 2 was least recent
            vec![Some(4), Some(0), Some(2)], // 3 was least recent
            vec![Some(4), Some(3), Some(2)], // 0 was least recent
            vec![Some(0), Some(3), Some(2)], // 4 was least recent
            vec![Some(0), Some(3), Some(2)], // hit on 3
        ]
    );
}

#[test]
fn test_lru_beats_fifo_on_this_trace() {
    let mut engine = ReplacementEngine::new(3, ReplacementPolicy::Fifo);
    let fifo = engine.run(&TRACE);
    engine.reset();
    engine.set_policy(ReplacementPolicy::Lru);
    let lru = engine.run(&TRACE);

    assert!(lru.stats.total_faults < fifo.stats.total_faults);
}

#[test]
fn test_fifo_cursor_advances_once_per_fault() {
    // A hit during partial fill must not advance the cursor: the fill
    // continues with the next empty frame, then wraps to frame 0.
    let mut engine = ReplacementEngine::new(3, ReplacementPolicy::Fifo);
    let report = engine.run(&[1, 1, 2, 3, 4]);

    assert_eq!(report.stats.total_faults, 4);
    assert_eq!(
        snapshots(&report),
        vec![
            vec![Some(1), None, None],
            vec![Some(1), None, None], // hit, cursor stays put
            vec![Some(1), Some(2), None],
            vec![Some(1), Some(2), Some(3)],
            vec![Some(4), Some(2), Some(3)], // wrap to frame 0
        ]
    );
}

#[test]
fn test_lru_evicts_the_oldest_stamp() {
    // 1 loaded at clock 1, 2 at clock 2; the fresh page must displace 1
    let mut engine = ReplacementEngine::new(2, ReplacementPolicy::Lru);
    engine.step(1);
    engine.step(2);
    let event = engine.step(3);
    assert_eq!(event.evicted, Some(1));
    assert_eq!(event.frames.0, vec![Some(3), Some(2)]);
}
