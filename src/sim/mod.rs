pub mod craft;
pub mod event;
pub mod integrator;
pub mod runner;
pub mod state;

pub use craft::{CraftBuilder, SimController, SimCraft, SimThruster};
pub use event::{ArrivalDetector, EventDetector, EventKind, SettleDetector, SimEvent};
pub use integrator::rk4_step;
pub use runner::{fly_to, fly_to_with, SimConfig};
pub use state::{Deriv, State};
