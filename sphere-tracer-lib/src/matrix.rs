//
// matrix.rs: Row-major 2x2/3x3/4x4 matrices and the affine transform
// constructors. The 2x2 and 3x3 sizes exist only as submatrix
// intermediates for determinants and cofactors.
//

use crate::tuple::{floats_equal, Tuple};

/// A 2x2 matrix, flat row-major.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Matrix2 {
    pub v: [f32; 4],
}

/// A 3x3 matrix, flat row-major.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Matrix3 {
    pub v: [f32; 9],
}

/// A 4x4 matrix, flat row-major. The primary transform representation.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Matrix4 {
    pub v: [f32; 16],
}

impl Matrix2 {
    pub fn new(v: [f32; 4]) -> Matrix2 {
        Matrix2 { v }
    }

    pub fn at(&self, row: usize, col: usize) -> f32 {
        self.v[row * 2 + col]
    }

    pub fn determinant(&self) -> f32 {
        self.v[0] * self.v[3] - self.v[1] * self.v[2]
    }
}

impl Matrix3 {
    pub fn new(v: [f32; 9]) -> Matrix3 {
        Matrix3 { v }
    }

    pub fn at(&self, row: usize, col: usize) -> f32 {
        self.v[row * 3 + col]
    }

    /// Delete the given row and column, leaving a 2x2 matrix.
    pub fn submatrix(&self, row: usize, col: usize) -> Matrix2 {
        let mut out = [0.0; 4];
        let mut i = 0;
        for r in 0..3 {
            if r == row {
                continue;
            }
            for c in 0..3 {
                if c == col {
                    continue;
                }
                out[i] = self.at(r, c);
                i += 1;
            }
        }
        Matrix2::new(out)
    }

    pub fn minor(&self, row: usize, col: usize) -> f32 {
        self.submatrix(row, col).determinant()
    }

    /// Minor with the cofactor sign (-1)^(row+col) applied.
    pub fn cofactor(&self, row: usize, col: usize) -> f32 {
        if (row + col) % 2 == 0 {
            self.minor(row, col)
        } else {
            -self.minor(row, col)
        }
    }

    /// Cofactor expansion along row 0.
    pub fn determinant(&self) -> f32 {
        (0..3).map(|col| self.at(0, col) * self.cofactor(0, col)).sum()
    }
}

impl Matrix4 {
    pub const ZERO: Matrix4 = Matrix4 { v: [0.0; 16] };

    pub fn new(v: [f32; 16]) -> Matrix4 {
        Matrix4 { v }
    }

    pub fn at(&self, row: usize, col: usize) -> f32 {
        self.v[row * 4 + col]
    }

    pub fn identity() -> Matrix4 {
        Matrix4::new([
            1.0, 0.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    /// Delete the given row and column, leaving a 3x3 matrix.
    pub fn submatrix(&self, row: usize, col: usize) -> Matrix3 {
        let mut out = [0.0; 9];
        let mut i = 0;
        for r in 0..4 {
            if r == row {
                continue;
            }
            for c in 0..4 {
                if c == col {
                    continue;
                }
                out[i] = self.at(r, c);
                i += 1;
            }
        }
        Matrix3::new(out)
    }

    pub fn minor(&self, row: usize, col: usize) -> f32 {
        self.submatrix(row, col).determinant()
    }

    /// Minor with the cofactor sign (-1)^(row+col) applied.
    pub fn cofactor(&self, row: usize, col: usize) -> f32 {
        if (row + col) % 2 == 0 {
            self.minor(row, col)
        } else {
            -self.minor(row, col)
        }
    }

    /// Cofactor expansion along row 0, recursing through the 3x3 and
    /// 2x2 determinants.
    pub fn determinant(&self) -> f32 {
        (0..4).map(|col| self.at(0, col) * self.cofactor(0, col)).sum()
    }

    pub fn transpose(&self) -> Matrix4 {
        let mut out = [0.0; 16];
        for row in 0..4 {
            for col in 0..4 {
                out[col * 4 + row] = self.at(row, col);
            }
        }
        Matrix4::new(out)
    }

    /// General inverse via the adjugate: the matrix of cofactors over
    /// the determinant, transposed. A singular matrix (determinant
    /// zero within tolerance) gives the all-zero matrix as a defined
    /// fallback rather than an error; callers that care must treat an
    /// all-zero result as "no valid inverse".
    pub fn inverse(&self) -> Matrix4 {
        let determinant = self.determinant();
        if floats_equal(determinant, 0.0) {
            return Matrix4::ZERO;
        }

        let mut out = [0.0; 16];
        for row in 0..4 {
            for col in 0..4 {
                // Writing to the transposed slot turns the cofactor
                // matrix into the adjugate.
                out[col * 4 + row] = self.cofactor(row, col) / determinant;
            }
        }
        Matrix4::new(out)
    }

    /// Standard row-by-column 4x4 product.
    pub fn multiply(&self, rhs: &Matrix4) -> Matrix4 {
        let mut out = [0.0; 16];
        for row in 0..4 {
            for col in 0..4 {
                out[row * 4 + col] = (0..4).map(|k| self.at(row, k) * rhs.at(k, col)).sum();
            }
        }
        Matrix4::new(out)
    }

    /// Apply the matrix to a homogeneous tuple.
    pub fn apply(&self, t: Tuple) -> Tuple {
        Tuple::new(
            self.v[0] * t.x + self.v[1] * t.y + self.v[2] * t.z + self.v[3] * t.w,
            self.v[4] * t.x + self.v[5] * t.y + self.v[6] * t.z + self.v[7] * t.w,
            self.v[8] * t.x + self.v[9] * t.y + self.v[10] * t.z + self.v[11] * t.w,
            self.v[12] * t.x + self.v[13] * t.y + self.v[14] * t.z + self.v[15] * t.w,
        )
    }

    pub fn approx_eq(&self, rhs: &Matrix4) -> bool {
        self.v
            .iter()
            .zip(rhs.v.iter())
            .all(|(a, b)| floats_equal(*a, *b))
    }

    pub fn translation(x: f32, y: f32, z: f32) -> Matrix4 {
        Matrix4::new([
            1.0, 0.0, 0.0, x, //
            0.0, 1.0, 0.0, y, //
            0.0, 0.0, 1.0, z, //
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    pub fn scaling(x: f32, y: f32, z: f32) -> Matrix4 {
        Matrix4::new([
            x, 0.0, 0.0, 0.0, //
            0.0, y, 0.0, 0.0, //
            0.0, 0.0, z, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    /// Right-handed rotation about the x axis.
    pub fn rotation_x(radians: f32) -> Matrix4 {
        let (sin, cos) = radians.sin_cos();
        Matrix4::new([
            1.0, 0.0, 0.0, 0.0, //
            0.0, cos, -sin, 0.0, //
            0.0, sin, cos, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    /// Right-handed rotation about the y axis.
    pub fn rotation_y(radians: f32) -> Matrix4 {
        let (sin, cos) = radians.sin_cos();
        Matrix4::new([
            cos, 0.0, sin, 0.0, //
            0.0, 1.0, 0.0, 0.0, //
            -sin, 0.0, cos, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    /// Right-handed rotation about the z axis.
    pub fn rotation_z(radians: f32) -> Matrix4 {
        let (sin, cos) = radians.sin_cos();
        Matrix4::new([
            cos, -sin, 0.0, 0.0, //
            sin, cos, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    /// Shear each coordinate in proportion to the other two. The six
    /// parameters read "x in proportion to y", "x in proportion to z",
    /// and so on.
    pub fn shearing(xy: f32, xz: f32, yx: f32, yz: f32, zx: f32, zy: f32) -> Matrix4 {
        Matrix4::new([
            1.0, xy, xz, 0.0, //
            yx, 1.0, yz, 0.0, //
            zx, zy, 1.0, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    #[test]
    fn constructing_and_inspecting_matrices() {
        let m = Matrix4::new([
            1.0, 2.0, 3.0, 4.0, //
            5.5, 6.5, 7.5, 8.5, //
            9.0, 10.0, 11.0, 12.0, //
            13.5, 14.5, 15.5, 16.5,
        ]);
        assert!(floats_equal(m.at(0, 0), 1.0));
        assert!(floats_equal(m.at(0, 3), 4.0));
        assert!(floats_equal(m.at(1, 0), 5.5));
        assert!(floats_equal(m.at(1, 2), 7.5));
        assert!(floats_equal(m.at(2, 2), 11.0));
        assert!(floats_equal(m.at(3, 0), 13.5));
        assert!(floats_equal(m.at(3, 2), 15.5));
    }

    #[test]
    fn multiplying_two_matrices() {
        let a = Matrix4::new([
            1.0, 2.0, 3.0, 4.0, //
            5.0, 6.0, 7.0, 8.0, //
            9.0, 8.0, 7.0, 6.0, //
            5.0, 4.0, 3.0, 2.0,
        ]);
        let b = Matrix4::new([
            -2.0, 1.0, 2.0, 3.0, //
            3.0, 2.0, 1.0, -1.0, //
            4.0, 3.0, 6.0, 5.0, //
            1.0, 2.0, 7.0, 8.0,
        ]);
        let expected = Matrix4::new([
            20.0, 22.0, 50.0, 48.0, //
            44.0, 54.0, 114.0, 108.0, //
            40.0, 58.0, 110.0, 102.0, //
            16.0, 26.0, 46.0, 42.0,
        ]);
        assert!(a.multiply(&b).approx_eq(&expected));
    }

    #[test]
    fn multiplying_by_identity_is_a_no_op() {
        let a = Matrix4::new([
            0.0, 1.0, 2.0, 4.0, //
            1.0, 2.0, 4.0, 8.0, //
            2.0, 4.0, 8.0, 16.0, //
            4.0, 8.0, 16.0, 32.0,
        ]);
        assert!(a.multiply(&Matrix4::identity()).approx_eq(&a));

        let t = Tuple::new(1.0, 2.0, 3.0, 4.0);
        assert!(Matrix4::identity().apply(t).approx_eq(t));
    }

    #[test]
    fn multiplying_matrix_by_tuple() {
        let a = Matrix4::new([
            1.0, 2.0, 3.0, 4.0, //
            2.0, 4.0, 4.0, 2.0, //
            8.0, 6.0, 4.0, 1.0, //
            0.0, 0.0, 0.0, 1.0,
        ]);
        let t = Tuple::new(1.0, 2.0, 3.0, 1.0);
        assert!(a.apply(t).approx_eq(Tuple::new(18.0, 24.0, 33.0, 1.0)));
    }

    #[test]
    fn transposing_a_matrix() {
        let a = Matrix4::new([
            0.0, 9.0, 3.0, 0.0, //
            9.0, 8.0, 0.0, 8.0, //
            1.0, 8.0, 5.0, 3.0, //
            0.0, 0.0, 5.0, 8.0,
        ]);
        let expected = Matrix4::new([
            0.0, 9.0, 1.0, 0.0, //
            9.0, 8.0, 8.0, 0.0, //
            3.0, 0.0, 5.0, 5.0, //
            0.0, 8.0, 3.0, 8.0,
        ]);
        assert!(a.transpose().approx_eq(&expected));
        assert!(Matrix4::identity()
            .transpose()
            .approx_eq(&Matrix4::identity()));
    }

    #[test]
    fn determinant_of_2x2() {
        let a = Matrix2::new([1.0, 5.0, -3.0, 2.0]);
        assert!(floats_equal(a.determinant(), 17.0));
    }

    #[test]
    fn submatrix_of_3x3_drops_row_and_column() {
        let a = Matrix3::new([
            1.0, 5.0, 0.0, //
            -3.0, 2.0, 7.0, //
            0.0, 6.0, -3.0,
        ]);
        let expected = Matrix2::new([-3.0, 2.0, 0.0, 6.0]);
        assert_eq!(a.submatrix(0, 2), expected);
    }

    #[test]
    fn submatrix_of_4x4_drops_row_and_column() {
        let a = Matrix4::new([
            -6.0, 1.0, 1.0, 6.0, //
            -8.0, 5.0, 8.0, 6.0, //
            -1.0, 0.0, 8.0, 2.0, //
            -7.0, 1.0, -1.0, 1.0,
        ]);
        let expected = Matrix3::new([
            -6.0, 1.0, 6.0, //
            -8.0, 8.0, 6.0, //
            -7.0, -1.0, 1.0,
        ]);
        assert_eq!(a.submatrix(2, 1), expected);
    }

    #[test]
    fn minors_and_cofactors_of_3x3() {
        let a = Matrix3::new([
            3.0, 5.0, 0.0, //
            2.0, -1.0, -7.0, //
            6.0, -1.0, 5.0,
        ]);
        assert!(floats_equal(a.minor(1, 0), 25.0));
        assert!(floats_equal(a.cofactor(1, 0), -25.0));
        assert!(floats_equal(a.minor(0, 0), -12.0));
        assert!(floats_equal(a.cofactor(0, 0), -12.0));
    }

    #[test]
    fn determinant_of_3x3() {
        let a = Matrix3::new([
            1.0, 2.0, 6.0, //
            -5.0, 8.0, -4.0, //
            2.0, 6.0, 4.0,
        ]);
        assert!(floats_equal(a.cofactor(0, 0), 56.0));
        assert!(floats_equal(a.cofactor(0, 1), 12.0));
        assert!(floats_equal(a.cofactor(0, 2), -46.0));
        assert!(floats_equal(a.determinant(), -196.0));
    }

    #[test]
    fn determinant_of_4x4() {
        let a = Matrix4::new([
            -2.0, -8.0, 3.0, 5.0, //
            -3.0, 1.0, 7.0, 3.0, //
            1.0, 2.0, -9.0, 6.0, //
            -6.0, 7.0, 7.0, -9.0,
        ]);
        assert!(floats_equal(a.cofactor(0, 0), 690.0));
        assert!(floats_equal(a.cofactor(0, 1), 447.0));
        assert!(floats_equal(a.cofactor(0, 2), 210.0));
        assert!(floats_equal(a.cofactor(0, 3), 51.0));
        assert!(floats_equal(a.determinant(), -4071.0));
    }

    #[test]
    fn inverting_a_matrix() {
        let a = Matrix4::new([
            -5.0, 2.0, 6.0, -8.0, //
            1.0, -5.0, 1.0, 8.0, //
            7.0, 7.0, -6.0, -7.0, //
            1.0, -3.0, 7.0, 4.0,
        ]);
        let b = a.inverse();
        assert!(floats_equal(a.determinant(), 532.0));
        assert!(floats_equal(a.cofactor(2, 3), -160.0));
        assert!(floats_equal(b.at(3, 2), -160.0 / 532.0));
        assert!(floats_equal(a.cofactor(3, 2), 105.0));
        assert!(floats_equal(b.at(2, 3), 105.0 / 532.0));

        let expected = Matrix4::new([
            0.21805, 0.45113, 0.24060, -0.04511, //
            -0.80827, -1.45677, -0.44361, 0.52068, //
            -0.07895, -0.22368, -0.05263, 0.19737, //
            -0.52256, -0.81391, -0.30075, 0.30639,
        ]);
        assert!(b.approx_eq(&expected));
    }

    #[test]
    fn multiplying_by_inverse_gives_identity() {
        let a = Matrix4::new([
            3.0, -9.0, 7.0, 3.0, //
            3.0, -8.0, 2.0, -9.0, //
            -4.0, 4.0, 4.0, 1.0, //
            -6.0, 5.0, -1.0, 1.0,
        ]);
        assert!(a.multiply(&a.inverse()).approx_eq(&Matrix4::identity()));
    }

    #[test]
    fn multiplying_product_by_inverse_recovers_operand() {
        let a = Matrix4::new([
            3.0, -9.0, 7.0, 3.0, //
            3.0, -8.0, 2.0, -9.0, //
            -4.0, 4.0, 4.0, 1.0, //
            -6.0, 5.0, -1.0, 1.0,
        ]);
        let b = Matrix4::new([
            8.0, 2.0, 2.0, 2.0, //
            3.0, -1.0, 7.0, 0.0, //
            7.0, 0.0, 5.0, 4.0, //
            6.0, -2.0, 0.0, 5.0,
        ]);
        let c = a.multiply(&b);
        assert!(c.multiply(&b.inverse()).approx_eq(&a));
    }

    #[test]
    fn singular_matrix_inverts_to_zero() {
        let a = Matrix4::new([
            -4.0, 2.0, -2.0, -3.0, //
            9.0, 6.0, 2.0, 6.0, //
            0.0, -5.0, 1.0, -5.0, //
            0.0, 0.0, 0.0, 0.0,
        ]);
        assert!(floats_equal(a.determinant(), 0.0));
        assert!(a.inverse().approx_eq(&Matrix4::ZERO));
    }

    #[test]
    fn translating_a_point() {
        let transform = Matrix4::translation(5.0, -3.0, 2.0);
        let p = Tuple::point(-3.0, 4.0, 5.0);
        assert!(transform.apply(p).approx_eq(Tuple::point(2.0, 1.0, 7.0)));
        assert!(transform
            .inverse()
            .apply(p)
            .approx_eq(Tuple::point(-8.0, 7.0, 3.0)));
    }

    #[test]
    fn translation_leaves_vectors_alone() {
        let transform = Matrix4::translation(5.0, -3.0, 2.0);
        let v = Tuple::vector(-3.0, 4.0, 5.0);
        assert!(transform.apply(v).approx_eq(v));
    }

    #[test]
    fn scaling_points_and_vectors() {
        let transform = Matrix4::scaling(2.0, 3.0, 4.0);
        let p = Tuple::point(-4.0, 6.0, 8.0);
        assert!(transform.apply(p).approx_eq(Tuple::point(-8.0, 18.0, 32.0)));

        let v = Tuple::vector(-4.0, 6.0, 8.0);
        assert!(transform.apply(v).approx_eq(Tuple::vector(-8.0, 18.0, 32.0)));
        assert!(transform
            .inverse()
            .apply(v)
            .approx_eq(Tuple::vector(-2.0, 2.0, 2.0)));
    }

    #[test]
    fn reflection_is_scaling_by_a_negative_value() {
        let transform = Matrix4::scaling(-1.0, 1.0, 1.0);
        let p = Tuple::point(2.0, 3.0, 4.0);
        assert!(transform.apply(p).approx_eq(Tuple::point(-2.0, 3.0, 4.0)));
    }

    #[test]
    fn rotating_around_x() {
        let p = Tuple::point(0.0, 1.0, 0.0);
        let half_sqrt2 = 2.0_f32.sqrt() / 2.0;
        assert!(Matrix4::rotation_x(PI / 4.0)
            .apply(p)
            .approx_eq(Tuple::point(0.0, half_sqrt2, half_sqrt2)));
        assert!(Matrix4::rotation_x(PI / 2.0)
            .apply(p)
            .approx_eq(Tuple::point(0.0, 0.0, 1.0)));
        // The inverse rotates the other way.
        assert!(Matrix4::rotation_x(PI / 4.0)
            .inverse()
            .apply(p)
            .approx_eq(Tuple::point(0.0, half_sqrt2, -half_sqrt2)));
    }

    #[test]
    fn rotating_around_y() {
        let p = Tuple::point(0.0, 0.0, 1.0);
        let half_sqrt2 = 2.0_f32.sqrt() / 2.0;
        assert!(Matrix4::rotation_y(PI / 4.0)
            .apply(p)
            .approx_eq(Tuple::point(half_sqrt2, 0.0, half_sqrt2)));
        assert!(Matrix4::rotation_y(PI / 2.0)
            .apply(p)
            .approx_eq(Tuple::point(1.0, 0.0, 0.0)));
    }

    #[test]
    fn rotating_around_z() {
        let p = Tuple::point(0.0, 1.0, 0.0);
        let half_sqrt2 = 2.0_f32.sqrt() / 2.0;
        assert!(Matrix4::rotation_z(PI / 4.0)
            .apply(p)
            .approx_eq(Tuple::point(-half_sqrt2, half_sqrt2, 0.0)));
        assert!(Matrix4::rotation_z(PI / 2.0)
            .apply(p)
            .approx_eq(Tuple::point(-1.0, 0.0, 0.0)));
    }

    #[test]
    fn shearing_moves_each_coordinate_in_proportion() {
        let p = Tuple::point(2.0, 3.0, 4.0);
        assert!(Matrix4::shearing(1.0, 0.0, 0.0, 0.0, 0.0, 0.0)
            .apply(p)
            .approx_eq(Tuple::point(5.0, 3.0, 4.0)));
        assert!(Matrix4::shearing(0.0, 1.0, 0.0, 0.0, 0.0, 0.0)
            .apply(p)
            .approx_eq(Tuple::point(6.0, 3.0, 4.0)));
        assert!(Matrix4::shearing(0.0, 0.0, 1.0, 0.0, 0.0, 0.0)
            .apply(p)
            .approx_eq(Tuple::point(2.0, 5.0, 4.0)));
        assert!(Matrix4::shearing(0.0, 0.0, 0.0, 1.0, 0.0, 0.0)
            .apply(p)
            .approx_eq(Tuple::point(2.0, 7.0, 4.0)));
        assert!(Matrix4::shearing(0.0, 0.0, 0.0, 0.0, 1.0, 0.0)
            .apply(p)
            .approx_eq(Tuple::point(2.0, 3.0, 6.0)));
        assert!(Matrix4::shearing(0.0, 0.0, 0.0, 0.0, 0.0, 1.0)
            .apply(p)
            .approx_eq(Tuple::point(2.0, 3.0, 7.0)));
    }

    #[test]
    fn chained_transforms_apply_in_reverse_order() {
        let p = Tuple::point(1.0, 0.0, 1.0);
        let a = Matrix4::rotation_x(PI / 2.0);
        let b = Matrix4::scaling(5.0, 5.0, 5.0);
        let c = Matrix4::translation(10.0, 5.0, 7.0);

        // Step by step.
        let p2 = a.apply(p);
        assert!(p2.approx_eq(Tuple::point(1.0, -1.0, 0.0)));
        let p3 = b.apply(p2);
        assert!(p3.approx_eq(Tuple::point(5.0, -5.0, 0.0)));
        let p4 = c.apply(p3);
        assert!(p4.approx_eq(Tuple::point(15.0, 0.0, 7.0)));

        // And as a single combined matrix.
        let t = c.multiply(&b).multiply(&a);
        assert!(t.apply(p).approx_eq(Tuple::point(15.0, 0.0, 7.0)));
    }
}
