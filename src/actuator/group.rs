use super::thruster::{ThrustCapability, Thruster};
use crate::errors::Gone;

// ---------------------------------------------------------------------------
// Thruster group: all thrusters mounted facing one direction
// ---------------------------------------------------------------------------

/// Groups thrusters that share one mounted axis.
///
/// Membership only shrinks after construction: any query that finds a stale
/// handle removes it permanently.
pub struct ThrusterGroup<T> {
    members: Vec<T>,
}

impl<T: Thruster> ThrusterGroup<T> {
    pub fn new() -> Self {
        Self { members: Vec::new() }
    }

    /// Adds a thruster assumed to share the group's mounted axis.
    ///
    /// No validation — the bank's classification step guarantees it.
    pub fn add(&mut self, thruster: T) {
        self.members.push(thruster);
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Current aggregate capability, or `None` if no member handle answers.
    ///
    /// The axis comes from the first member that answers, whether or not it
    /// is operational; force sums over operational members only. A group
    /// with an axis but zero force still returns `Some` — callers must
    /// distinguish "cannot push right now" from "nothing mounted here".
    pub fn capability(&mut self) -> Option<ThrustCapability> {
        let mut forward_axis = None;
        let mut total_force = 0.0;
        self.members.retain_mut(|t| {
            if forward_axis.is_none() {
                match t.forward_axis() {
                    Ok(axis) => forward_axis = Some(axis),
                    Err(Gone) => return false,
                }
            }
            match t.is_operational() {
                Ok(true) => match t.rated_force() {
                    Ok(force) => {
                        total_force += force;
                        true
                    }
                    Err(Gone) => false,
                },
                Ok(false) => true,
                Err(Gone) => false,
            }
        });
        forward_axis.map(|forward_axis| ThrustCapability {
            forward_axis,
            total_force,
        })
    }

    /// Applies `fraction` to every member, dropping stale handles.
    ///
    /// Contract: `fraction` is already clamped to [0, 1] by the caller.
    pub fn set_output_fraction(&mut self, fraction: f64) {
        self.members
            .retain_mut(|t| t.set_output_fraction(fraction).is_ok());
    }
}

impl<T: Thruster> Default for ThrusterGroup<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Vector3;
    use std::cell::RefCell;
    use std::rc::Rc;

    // Minimal scriptable thruster for group-level tests.
    struct FakeThruster {
        exists: Rc<RefCell<bool>>,
        operational: bool,
        force: f64,
        axis: Vector3<f64>,
        applied: Rc<RefCell<Vec<f64>>>,
    }

    impl FakeThruster {
        fn live(force: f64) -> (Self, Rc<RefCell<Vec<f64>>>, Rc<RefCell<bool>>) {
            let applied = Rc::new(RefCell::new(Vec::new()));
            let exists = Rc::new(RefCell::new(true));
            let t = FakeThruster {
                exists: exists.clone(),
                operational: true,
                force,
                axis: Vector3::new(0.0, 0.0, -1.0),
                applied: applied.clone(),
            };
            (t, applied, exists)
        }
    }

    impl Thruster for FakeThruster {
        fn is_operational(&self) -> Result<bool, Gone> {
            if !*self.exists.borrow() {
                return Err(Gone);
            }
            Ok(self.operational)
        }

        fn rated_force(&self) -> Result<f64, Gone> {
            if !*self.exists.borrow() {
                return Err(Gone);
            }
            Ok(self.force)
        }

        fn forward_axis(&self) -> Result<Vector3<f64>, Gone> {
            if !*self.exists.borrow() {
                return Err(Gone);
            }
            Ok(self.axis)
        }

        fn set_output_fraction(&mut self, fraction: f64) -> Result<(), Gone> {
            if !*self.exists.borrow() {
                return Err(Gone);
            }
            self.applied.borrow_mut().push(fraction);
            Ok(())
        }
    }

    #[test]
    fn empty_group_has_no_capability() {
        let mut group: ThrusterGroup<FakeThruster> = ThrusterGroup::new();
        assert!(group.capability().is_none());
    }

    #[test]
    fn capability_sums_operational_members() {
        let mut group = ThrusterGroup::new();
        let (a, _, _) = FakeThruster::live(100.0);
        let (mut b, _, _) = FakeThruster::live(250.0);
        b.operational = false;
        group.add(a);
        group.add(b);

        let cap = group.capability().unwrap();
        assert!((cap.total_force - 100.0).abs() < 1e-12);
        assert_eq!(group.len(), 2, "disabled member stays in the group");
    }

    #[test]
    fn zero_force_group_still_reports_axis() {
        let mut group = ThrusterGroup::new();
        let (mut a, _, _) = FakeThruster::live(100.0);
        a.operational = false;
        group.add(a);

        let cap = group.capability().unwrap();
        assert_eq!(cap.total_force, 0.0);
        assert!((cap.forward_axis - Vector3::new(0.0, 0.0, -1.0)).norm() < 1e-12);
    }

    #[test]
    fn stale_members_are_removed_for_good() {
        let mut group = ThrusterGroup::new();
        let (a, _, gone_a) = FakeThruster::live(100.0);
        let (b, _, _) = FakeThruster::live(60.0);
        group.add(a);
        group.add(b);

        *gone_a.borrow_mut() = false;
        let cap = group.capability().unwrap();
        assert!((cap.total_force - 60.0).abs() < 1e-12);
        assert_eq!(group.len(), 1);

        // A later recovery of the handle must not resurrect it.
        *gone_a.borrow_mut() = true;
        assert_eq!(group.len(), 1);
    }

    #[test]
    fn all_members_stale_yields_none() {
        let mut group = ThrusterGroup::new();
        let (a, _, gone) = FakeThruster::live(100.0);
        group.add(a);
        *gone.borrow_mut() = false;
        assert!(group.capability().is_none());
        assert!(group.is_empty());
    }

    #[test]
    fn set_output_fraction_fans_out_and_prunes() {
        let mut group = ThrusterGroup::new();
        let (a, applied_a, _) = FakeThruster::live(100.0);
        let (b, applied_b, gone_b) = FakeThruster::live(100.0);
        group.add(a);
        group.add(b);

        group.set_output_fraction(0.75);
        assert_eq!(applied_a.borrow().as_slice(), &[0.75]);
        assert_eq!(applied_b.borrow().as_slice(), &[0.75]);

        *gone_b.borrow_mut() = false;
        group.set_output_fraction(0.25);
        assert_eq!(applied_a.borrow().as_slice(), &[0.75, 0.25]);
        assert_eq!(applied_b.borrow().as_slice(), &[0.75], "stale member dropped");
        assert_eq!(group.len(), 1);
    }
}
