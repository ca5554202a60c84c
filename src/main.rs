/*!
 * memsim - Main Entry Point
 *
 * Offline policy comparison driver:
 * - Runs the allocation scenario under first-fit and best-fit
 * - Runs the reference trace under FIFO and LRU
 * - Prints per-event reports and a summary for each engine
 */

use anyhow::Context;
use memsim::report::{render_allocation, render_replacement};
use memsim::{
    init_tracing, AllocatorEngine, PlacementStrategy, PolicyComparison, ReplacementEngine,
    ReplacementPolicy, SimulationConfig, StrategyComparison,
};
use tracing::info;

fn main() -> anyhow::Result<()> {
    // Initialize structured tracing
    init_tracing();

    info!("memsim starting...");

    let scenario_path = std::env::var("MEMSIM_SCENARIO").ok();
    let config = SimulationConfig::load(scenario_path.as_deref())
        .context("scenario configuration rejected")?;
    info!(
        holes = config.allocation.holes.len(),
        requests = config.allocation.requests.len(),
        references = config.replacement.trace.len(),
        frames = config.replacement.frames,
        "Scenario loaded"
    );

    // Allocation: both strategies against identical starting state
    info!("Running allocation engine...");
    let mut allocator = AllocatorEngine::new(
        config.allocation.holes.clone(),
        PlacementStrategy::FirstFit,
    )
    .with_verbose(config.verbose);
    let first_fit = allocator.allocate(&config.allocation.requests);
    print!("{}", render_allocation(&first_fit));

    allocator.reset();
    allocator.set_strategy(PlacementStrategy::BestFit);
    let best_fit = allocator.allocate(&config.allocation.requests);
    print!("{}", render_allocation(&best_fit));

    println!("{}", StrategyComparison::new(&first_fit, &best_fit));

    // Replacement: both policies over the same unmodified trace
    info!("Running replacement engine...");
    let mut replacer = ReplacementEngine::new(config.replacement.frames, ReplacementPolicy::Fifo)
        .with_verbose(config.verbose);
    let fifo = replacer.run(&config.replacement.trace);
    print!("{}", render_replacement(&fifo));

    replacer.reset();
    replacer.set_policy(ReplacementPolicy::Lru);
    let lru = replacer.run(&config.replacement.trace);
    print!("{}", render_replacement(&lru));

    println!("{}", PolicyComparison::new(&fifo, &lru));

    info!("Simulation complete");
    Ok(())
}
