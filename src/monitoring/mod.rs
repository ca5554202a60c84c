/*!
 * Monitoring
 * Tracing setup for the simulator
 */

mod tracer;

pub use tracer::init_tracing;
