//
// tuple.rs: Points, vectors and colours as 4-component tuples.
//

/// Tolerance used for all floating-point comparisons in the crate.
pub const EPSILON: f32 = 1.0e-5;

/// Compare two floats with a fixed tolerance, to avoid spurious
/// inequality from rounding.
pub fn floats_equal(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

/// A 4-component tuple. With w = 1 it is a point, with w = 0 a
/// vector. The same layout doubles as an RGBA colour via the r/g/b/a
/// accessors. The type does not police w; callers keep it meaningful
/// (adding two points would give w = 2, which is nothing).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Tuple {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

// Type synonyms to mark intent at call sites.
pub type Point = Tuple;
pub type Vector = Tuple;
pub type Colour = Tuple;

impl Tuple {
    pub fn new(x: f32, y: f32, z: f32, w: f32) -> Tuple {
        Tuple { x, y, z, w }
    }

    /// A point (w = 1).
    pub fn point(x: f32, y: f32, z: f32) -> Point {
        Tuple { x, y, z, w: 1.0 }
    }

    /// A vector (w = 0).
    pub fn vector(x: f32, y: f32, z: f32) -> Vector {
        Tuple { x, y, z, w: 0.0 }
    }

    /// A colour, stored in the same four slots.
    pub fn colour(r: f32, g: f32, b: f32, a: f32) -> Colour {
        Tuple {
            x: r,
            y: g,
            z: b,
            w: a,
        }
    }

    pub fn r(&self) -> f32 {
        self.x
    }

    pub fn g(&self) -> f32 {
        self.y
    }

    pub fn b(&self) -> f32 {
        self.z
    }

    pub fn is_point(&self) -> bool {
        floats_equal(self.w, 1.0)
    }

    pub fn is_vector(&self) -> bool {
        floats_equal(self.w, 0.0)
    }

    pub fn add(&self, rhs: Tuple) -> Tuple {
        Tuple {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
            w: self.w + rhs.w,
        }
    }

    pub fn sub(&self, rhs: Tuple) -> Tuple {
        Tuple {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
            w: self.w - rhs.w,
        }
    }

    /// Component-wise product, used for colour blending.
    pub fn hadamard(&self, rhs: Tuple) -> Tuple {
        Tuple {
            x: self.x * rhs.x,
            y: self.y * rhs.y,
            z: self.z * rhs.z,
            w: self.w * rhs.w,
        }
    }

    pub fn scale(&self, m: f32) -> Tuple {
        Tuple {
            x: self.x * m,
            y: self.y * m,
            z: self.z * m,
            w: self.w * m,
        }
    }

    /// Negate the spatial components. w is left alone so a negated
    /// direction stays a vector and a point stays a point.
    pub fn neg(&self) -> Tuple {
        Tuple {
            x: -self.x,
            y: -self.y,
            z: -self.z,
            w: self.w,
        }
    }

    /// Euclidean norm over all four components.
    pub fn magnitude(&self) -> f32 {
        (self.x * self.x + self.y * self.y + self.z * self.z + self.w * self.w).sqrt()
    }

    /// Scale to unit length. A zero-magnitude tuple propagates NaN;
    /// callers guarantee non-zero directions.
    pub fn normalize(&self) -> Tuple {
        let magnitude = self.magnitude();
        Tuple {
            x: self.x / magnitude,
            y: self.y / magnitude,
            z: self.z / magnitude,
            w: self.w / magnitude,
        }
    }

    pub fn is_unit(&self) -> bool {
        floats_equal(self.magnitude(), 1.0)
    }

    pub fn dot(&self, rhs: Tuple) -> f32 {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z + self.w * rhs.w
    }

    /// 3-component cross product. The result is forced to vector form.
    pub fn cross(&self, rhs: Tuple) -> Vector {
        Tuple::vector(
            self.y * rhs.z - self.z * rhs.y,
            self.z * rhs.x - self.x * rhs.z,
            self.x * rhs.y - self.y * rhs.x,
        )
    }

    /// Reflect this vector about a surface normal.
    pub fn reflect(&self, normal: Vector) -> Vector {
        self.sub(normal.scale(2.0 * self.dot(normal)))
    }

    pub fn approx_eq(&self, rhs: Tuple) -> bool {
        floats_equal(self.x, rhs.x)
            && floats_equal(self.y, rhs.y)
            && floats_equal(self.z, rhs.z)
            && floats_equal(self.w, rhs.w)
    }
}
