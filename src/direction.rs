use nalgebra::Vector3;

// ---------------------------------------------------------------------------
// Canonical body directions
// ---------------------------------------------------------------------------

/// The six canonical mounting directions in the craft body frame.
///
/// Body frame is right-handed: +X right, +Y up, −Z forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Forward,
    Backward,
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// All six directions, in index order.
    pub const ALL: [Direction; 6] = [
        Direction::Forward,
        Direction::Backward,
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// Stable index for array storage.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Unit axis in the body frame.
    pub fn axis(self) -> Vector3<f64> {
        match self {
            Direction::Forward => Vector3::new(0.0, 0.0, -1.0),
            Direction::Backward => Vector3::new(0.0, 0.0, 1.0),
            Direction::Left => Vector3::new(-1.0, 0.0, 0.0),
            Direction::Right => Vector3::new(1.0, 0.0, 0.0),
            Direction::Up => Vector3::new(0.0, 1.0, 0.0),
            Direction::Down => Vector3::new(0.0, -1.0, 0.0),
        }
    }

    /// Same axis, reversed sign.
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Forward => Direction::Backward,
            Direction::Backward => Direction::Forward,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    /// Classify an arbitrary body-frame vector by its dominant component.
    ///
    /// Ties resolve in Z, Y, X order; the zero vector classifies as Backward.
    pub fn closest(v: &Vector3<f64>) -> Direction {
        let (ax, ay, az) = (v.x.abs(), v.y.abs(), v.z.abs());
        if az >= ax && az >= ay {
            if v.z < 0.0 {
                Direction::Forward
            } else {
                Direction::Backward
            }
        } else if ay >= ax {
            if v.y >= 0.0 {
                Direction::Up
            } else {
                Direction::Down
            }
        } else if v.x >= 0.0 {
            Direction::Right
        } else {
            Direction::Left
        }
    }
}
