use std::cell::{Cell, RefCell};
use std::rc::Rc;

use nalgebra::{UnitQuaternion, Vector3};

use crate::actuator::{Thruster, ThrusterBank};
use crate::direction::Direction;
use crate::errors::Gone;
use crate::frame;
use crate::telemetry::{ShipController, TelemetrySource};

// ---------------------------------------------------------------------------
// Simulated hardware blocks
// ---------------------------------------------------------------------------

#[derive(Debug)]
struct ThrusterBlock {
    exists: bool,
    operational: bool,
    rated_force: f64,           // N
    forward_axis: Vector3<f64>, // body frame
    output_fraction: f64,
}

/// Handle to a simulated thruster block. Cheap to clone; all clones observe
/// the same block.
#[derive(Clone)]
pub struct SimThruster {
    block: Rc<RefCell<ThrusterBlock>>,
}

impl Thruster for SimThruster {
    fn is_operational(&self) -> Result<bool, Gone> {
        let b = self.block.borrow();
        if !b.exists {
            return Err(Gone);
        }
        Ok(b.operational)
    }

    fn rated_force(&self) -> Result<f64, Gone> {
        let b = self.block.borrow();
        if !b.exists {
            return Err(Gone);
        }
        Ok(b.rated_force)
    }

    fn forward_axis(&self) -> Result<Vector3<f64>, Gone> {
        let b = self.block.borrow();
        if !b.exists {
            return Err(Gone);
        }
        Ok(b.forward_axis)
    }

    fn set_output_fraction(&mut self, fraction: f64) -> Result<(), Gone> {
        let mut b = self.block.borrow_mut();
        if !b.exists {
            return Err(Gone);
        }
        b.output_fraction = fraction;
        Ok(())
    }
}

#[derive(Debug)]
struct BodyState {
    pos: Vector3<f64>,
    vel: Vector3<f64>,
    mass: f64,
    orientation: UnitQuaternion<f64>,
    gravity: Vector3<f64>,
}

/// Handle to a simulated ship controller block. Reads go through to the
/// shared body state; a destroyed block reports `Gone` on every call.
#[derive(Clone)]
pub struct SimController {
    exists: Rc<Cell<bool>>,
    body: Rc<RefCell<BodyState>>,
}

impl SimController {
    fn guard(&self) -> Result<(), Gone> {
        if self.exists.get() {
            Ok(())
        } else {
            Err(Gone)
        }
    }
}

impl ShipController for SimController {
    fn position(&self) -> Result<Vector3<f64>, Gone> {
        self.guard()?;
        Ok(self.body.borrow().pos)
    }

    fn linear_velocity(&self) -> Result<Vector3<f64>, Gone> {
        self.guard()?;
        Ok(self.body.borrow().vel)
    }

    fn natural_gravity(&self) -> Result<Vector3<f64>, Gone> {
        self.guard()?;
        Ok(self.body.borrow().gravity)
    }

    fn total_mass(&self) -> Result<f64, Gone> {
        self.guard()?;
        Ok(self.body.borrow().mass)
    }

    fn orientation(&self) -> Result<UnitQuaternion<f64>, Gone> {
        self.guard()?;
        Ok(self.body.borrow().orientation)
    }
}

// ---------------------------------------------------------------------------
// Simulated craft
// ---------------------------------------------------------------------------

/// A simulated craft: shared rigid-body state plus its mounted blocks.
///
/// Handles returned by [`bank`](SimCraft::bank) and
/// [`telemetry`](SimCraft::telemetry) observe the same cells the plant
/// integrates, so the autopilot and the physics see one world. Attitude is
/// held fixed — the autopilot commands translation only.
pub struct SimCraft {
    pub name: String,
    body: Rc<RefCell<BodyState>>,
    thrusters: Vec<SimThruster>,
    controllers: Vec<SimController>,
}

impl SimCraft {
    /// Fresh bank over this craft's thruster handles.
    pub fn bank(&self) -> ThrusterBank<SimThruster> {
        ThrusterBank::from_thrusters(self.thrusters.iter().cloned())
    }

    /// Fresh telemetry source over this craft's controller handles.
    pub fn telemetry(&self) -> TelemetrySource<SimController> {
        TelemetrySource::new(self.controllers.clone())
    }

    pub fn position(&self) -> Vector3<f64> {
        self.body.borrow().pos
    }

    pub fn velocity(&self) -> Vector3<f64> {
        self.body.borrow().vel
    }

    pub fn mass(&self) -> f64 {
        self.body.borrow().mass
    }

    pub fn gravity(&self) -> Vector3<f64> {
        self.body.borrow().gravity
    }

    /// Net world-frame thrust force at the current outputs, N.
    pub fn thrust_force(&self) -> Vector3<f64> {
        let body = self.body.borrow();
        let mut force = Vector3::zeros();
        for t in &self.thrusters {
            let b = t.block.borrow();
            if !b.exists || !b.operational {
                continue;
            }
            let push = -frame::to_world(&b.forward_axis, &body.orientation);
            force += push * (b.rated_force * b.output_fraction);
        }
        force
    }

    /// Current acceleration: thrust over mass plus ambient gravity.
    pub fn acceleration(&self) -> Vector3<f64> {
        let (mass, gravity) = {
            let b = self.body.borrow();
            (b.mass, b.gravity)
        };
        self.thrust_force() / mass + gravity
    }

    /// Plant write-back after an integration step.
    pub fn set_kinematics(&mut self, pos: Vector3<f64>, vel: Vector3<f64>) {
        let mut b = self.body.borrow_mut();
        b.pos = pos;
        b.vel = vel;
    }

    pub fn thruster_count(&self) -> usize {
        self.thrusters.len()
    }

    pub fn controller_count(&self) -> usize {
        self.controllers.len()
    }

    /// Commanded output fraction of thruster `index` (mount order).
    pub fn output_fraction(&self, index: usize) -> f64 {
        self.thrusters[index].block.borrow().output_fraction
    }

    /// Marks the block damaged: still present, zero force.
    pub fn disable_thruster(&mut self, index: usize) {
        self.thrusters[index].block.borrow_mut().operational = false;
    }

    /// Removes the block from existence; its handles report `Gone`.
    pub fn destroy_thruster(&mut self, index: usize) {
        self.thrusters[index].block.borrow_mut().exists = false;
    }

    /// Removes a controller block; its handles report `Gone`.
    pub fn destroy_controller(&mut self, index: usize) {
        self.controllers[index].exists.set(false);
    }
}

// ---------------------------------------------------------------------------
// Craft builder
// ---------------------------------------------------------------------------

pub struct CraftBuilder {
    name: String,
    mass: f64,
    position: Vector3<f64>,
    velocity: Vector3<f64>,
    orientation: UnitQuaternion<f64>,
    gravity: Vector3<f64>,
    controllers: usize,
    thrusters: Vec<(Direction, usize, f64)>,
}

impl CraftBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mass: 10_000.0,
            position: Vector3::zeros(),
            velocity: Vector3::zeros(),
            orientation: UnitQuaternion::identity(),
            gravity: Vector3::zeros(),
            controllers: 1,
            thrusters: Vec::new(),
        }
    }

    pub fn mass(mut self, v: f64) -> Self { self.mass = v; self }
    pub fn position(mut self, v: Vector3<f64>) -> Self { self.position = v; self }
    pub fn velocity(mut self, v: Vector3<f64>) -> Self { self.velocity = v; self }
    pub fn orientation(mut self, q: UnitQuaternion<f64>) -> Self { self.orientation = q; self }
    pub fn gravity(mut self, v: Vector3<f64>) -> Self { self.gravity = v; self }
    pub fn controllers(mut self, count: usize) -> Self { self.controllers = count; self }

    /// Mount `count` thrusters facing `direction`, each rated `force` N.
    /// They propel the craft toward `direction.opposite()`.
    pub fn thrusters(mut self, direction: Direction, count: usize, force: f64) -> Self {
        self.thrusters.push((direction, count, force));
        self
    }

    /// Mount `count` thrusters facing every direction — a symmetric craft.
    pub fn symmetric_thrusters(mut self, count: usize, force: f64) -> Self {
        for direction in Direction::ALL {
            self.thrusters.push((direction, count, force));
        }
        self
    }

    pub fn build(self) -> SimCraft {
        let body = Rc::new(RefCell::new(BodyState {
            pos: self.position,
            vel: self.velocity,
            mass: self.mass,
            orientation: self.orientation,
            gravity: self.gravity,
        }));

        let mut thrusters = Vec::new();
        for (direction, count, force) in self.thrusters {
            for _ in 0..count {
                thrusters.push(SimThruster {
                    block: Rc::new(RefCell::new(ThrusterBlock {
                        exists: true,
                        operational: true,
                        rated_force: force,
                        forward_axis: direction.axis(),
                        output_fraction: 0.0,
                    })),
                });
            }
        }

        let controllers = (0..self.controllers)
            .map(|_| SimController {
                exists: Rc::new(Cell::new(true)),
                body: body.clone(),
            })
            .collect();

        SimCraft {
            name: self.name,
            body,
            thrusters,
            controllers,
        }
    }
}
