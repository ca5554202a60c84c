/*!
 * Simulation Limits and Constants
 *
 * Centralized location for capacity bounds and scenario defaults.
 * All values include rationale comments explaining WHY they exist.
 */

// =============================================================================
// REPLACEMENT ENGINE LIMITS
// =============================================================================

/// Upper bound on the frame table capacity
/// The table is Vec-backed, so this is a sanity bound on scenario input
/// rather than a storage constraint
pub const MAX_FRAME_CAPACITY: usize = 64;

/// Default frame count for the bundled scenario
pub const DEFAULT_FRAME_CAPACITY: usize = 3;

// =============================================================================
// SCENARIO DEFAULTS
// =============================================================================

/// Initial hole sizes of the bundled allocation scenario
pub const DEFAULT_HOLE_SIZES: &[super::types::Size] = &[100, 500, 200, 300, 600];

/// Request sizes of the bundled allocation scenario
pub const DEFAULT_REQUEST_SIZES: &[super::types::Size] = &[212, 417, 112, 426];

/// Reference trace of the bundled replacement scenario
pub const DEFAULT_REFERENCE_TRACE: &[super::types::PageId] = &[7, 0, 1, 2, 0, 3, 0, 4, 2, 3, 0, 3];
