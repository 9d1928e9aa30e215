use super::group::ThrusterGroup;
use super::thruster::{ThrustCapability, Thruster};
use crate::direction::Direction;

// ---------------------------------------------------------------------------
// Thruster bank: one group per canonical direction
// ---------------------------------------------------------------------------

/// Six thruster groups, one per canonical body direction.
///
/// Classification happens once, at construction. A thruster bolted onto the
/// craft later is invisible until the bank is rebuilt.
pub struct ThrusterBank<T> {
    groups: [ThrusterGroup<T>; 6],
}

impl<T: Thruster> ThrusterBank<T> {
    /// Empty bank with six empty groups.
    pub fn new() -> Self {
        Self {
            groups: std::array::from_fn(|_| ThrusterGroup::new()),
        }
    }

    /// Classify thrusters into groups by their mounted forward axis.
    ///
    /// Handles that are already gone are dropped silently.
    pub fn from_thrusters<I>(thrusters: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut bank = Self::new();
        for thruster in thrusters {
            bank.add(thruster);
        }
        bank
    }

    /// Classify and add a single thruster. Returns the direction it landed
    /// in, or `None` if the handle was already gone.
    pub fn add(&mut self, thruster: T) -> Option<Direction> {
        let axis = thruster.forward_axis().ok()?;
        let direction = Direction::closest(&axis);
        self.groups[direction.index()].add(thruster);
        Some(direction)
    }

    pub fn group(&self, direction: Direction) -> &ThrusterGroup<T> {
        &self.groups[direction.index()]
    }

    /// Aggregate capability for one direction; see [`ThrusterGroup::capability`].
    pub fn capability(&mut self, direction: Direction) -> Option<ThrustCapability> {
        self.groups[direction.index()].capability()
    }

    /// Apply an output fraction to one direction's group.
    pub fn set_output_fraction(&mut self, direction: Direction, fraction: f64) {
        self.groups[direction.index()].set_output_fraction(fraction);
    }
}

impl<T: Thruster> Default for ThrusterBank<T> {
    fn default() -> Self {
        Self::new()
    }
}
