pub mod bank;
pub mod group;
pub mod thruster;

pub use bank::ThrusterBank;
pub use group::ThrusterGroup;
pub use thruster::{ThrustCapability, Thruster};
