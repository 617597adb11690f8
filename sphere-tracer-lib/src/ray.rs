//
// ray.rs: Rays as an origin plus a direction.
//

use crate::matrix::Matrix4;
use crate::tuple::{Point, Tuple, Vector};

/// A ray r(t) = origin + direction * t. The direction is not
/// required to be normalized by construction; the intersection math
/// just assumes a well-formed direction.
#[derive(Clone, Copy, Debug)]
pub struct Ray {
    pub origin: Point,
    pub direction: Vector,
}

impl Ray {
    pub fn new(origin: Point, direction: Vector) -> Ray {
        Ray { origin, direction }
    }

    /// The point at parameter t along the ray.
    pub fn position(&self, t: f32) -> Point {
        self.origin.add(self.direction.scale(t))
    }

    /// Apply a transform to both origin and direction. Used with an
    /// object's inverse transform to move a world-space ray into the
    /// object's local space.
    pub fn transform(&self, m: &Matrix4) -> Ray {
        Ray {
            origin: m.apply(self.origin),
            direction: m.apply(self.direction),
        }
    }
}
