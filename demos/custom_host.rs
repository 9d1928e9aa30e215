use std::cell::Cell;
use std::rc::Rc;

use nalgebra::{UnitQuaternion, Vector3};

use omni_pilot::{
    Autopilot, Direction, Gone, ShipController, TelemetrySource, Thruster, ThrusterBank,
};

/// A hand-rolled host rig implementing the hardware traits directly, instead
/// of going through the sim module — this is all a game-engine (or hardware)
/// integration has to provide.
struct RigThruster {
    axis: Vector3<f64>,
    force: f64,
    fraction: Rc<Cell<f64>>,
}

impl Thruster for RigThruster {
    fn is_operational(&self) -> Result<bool, Gone> {
        Ok(true)
    }

    fn rated_force(&self) -> Result<f64, Gone> {
        Ok(self.force)
    }

    fn forward_axis(&self) -> Result<Vector3<f64>, Gone> {
        Ok(self.axis)
    }

    fn set_output_fraction(&mut self, fraction: f64) -> Result<(), Gone> {
        self.fraction.set(fraction);
        Ok(())
    }
}

struct RigController {
    position: Vector3<f64>,
    velocity: Vector3<f64>,
}

impl ShipController for RigController {
    fn position(&self) -> Result<Vector3<f64>, Gone> {
        Ok(self.position)
    }

    fn linear_velocity(&self) -> Result<Vector3<f64>, Gone> {
        Ok(self.velocity)
    }

    fn natural_gravity(&self) -> Result<Vector3<f64>, Gone> {
        Ok(Vector3::zeros())
    }

    fn total_mass(&self) -> Result<f64, Gone> {
        Ok(5_000.0)
    }

    fn orientation(&self) -> Result<UnitQuaternion<f64>, Gone> {
        Ok(UnitQuaternion::identity())
    }
}

fn main() {
    // One thruster per direction; the cells let us read back what the
    // autopilot commanded.
    let fractions: Vec<Rc<Cell<f64>>> = Direction::ALL
        .iter()
        .map(|_| Rc::new(Cell::new(0.0)))
        .collect();

    let bank = ThrusterBank::from_thrusters(Direction::ALL.iter().zip(&fractions).map(
        |(direction, cell)| RigThruster {
            axis: direction.axis(),
            force: 60_000.0,
            fraction: cell.clone(),
        },
    ));

    // Drifting +Z at 12 m/s, 250 m short of the target.
    let telemetry = TelemetrySource::new(vec![RigController {
        position: Vector3::zeros(),
        velocity: Vector3::new(0.0, 0.0, 12.0),
    }]);
    let mut autopilot = Autopilot::new(telemetry, bank);

    let target = Vector3::new(0.0, 0.0, 250.0);
    let outcome = autopilot.run_cycle(Some(target));

    println!("Cycle outcome: {outcome:?}");
    println!("Commanded fractions:");
    for (direction, cell) in Direction::ALL.iter().zip(&fractions) {
        println!("  {:<9} -> {:.3}", format!("{direction:?}"), cell.get());
    }
}
