//! Compile-time constants

/// Add command line flag `-v`.
pub const ENABLE_LOGGING: bool = true;
/// Check the `requires!()` assertions at runtime (cheap).
pub const CHECK_PRECONDITIONS: bool = true;
/// Check the `invariant!()` assertions at runtime (cheap).
pub const CHECK_INVARIANTS: bool = true;
