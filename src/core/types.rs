/*!
 * Core Types
 * Common types used across both simulation engines
 */

/// Size of a memory region or request, in abstract units
pub type Size = usize;

/// Stable identifier of a free hole (1-based, assigned at creation)
pub type HoleId = u32;

/// Identifier of an allocation request (1-based index in the request list)
pub type RequestId = u32;

/// Identifier of a referenced page
pub type PageId = u32;

/// Index of a frame within the fixed frame table
pub type FrameIndex = usize;

/// Logical clock tick, incremented once per processed reference
pub type Clock = u64;

/// Common result type for configuration-stage operations
pub type ConfigResult<T> = Result<T, super::errors::ConfigError>;
