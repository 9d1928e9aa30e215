use std::error::Error;
use std::fmt;

// ---------------------------------------------------------------------------
// Handle and telemetry failure types
// ---------------------------------------------------------------------------

/// A host handle no longer resolves to a live block.
///
/// Any handle method may return this at any call — blocks can be destroyed
/// between cycles. The owning collection removes the handle permanently and
/// carries on; the condition is never fatal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gone;

impl fmt::Display for Gone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("block handle no longer exists")
    }
}

impl Error for Gone {}

/// No reachable ship controller this cycle.
///
/// The cycle issues no thrust commands; previously applied fractions remain
/// in effect on the hardware until the next successful cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Unavailable;

impl fmt::Display for Unavailable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("no reachable ship controller")
    }
}

impl Error for Unavailable {}
