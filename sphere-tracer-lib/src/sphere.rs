//
// sphere.rs: The one primitive: a unit sphere at the local origin,
// carried into world space by an affine transform.
//

use crate::intersection::{Intersections, SphereId};
use crate::lighting::Material;
use crate::matrix::Matrix4;
use crate::ray::Ray;
use crate::tuple::{floats_equal, Point, Tuple, Vector};

/// A unit sphere (radius 1, centred on the local origin) plus an
/// object-to-world transform and a material. World-space shape is
/// never stored; it is always derived through the inverse transform.
/// The inverse and its transpose are cached whenever the transform is
/// set, since inversion is the most expensive operation in the
/// pipeline.
#[derive(Clone, Debug)]
pub struct Sphere {
    transform: Matrix4,
    inverse: Matrix4,
    inverse_transpose: Matrix4,
    pub material: Material,
}

impl Default for Sphere {
    fn default() -> Sphere {
        Sphere::new()
    }
}

impl Sphere {
    pub fn new() -> Sphere {
        Sphere {
            transform: Matrix4::identity(),
            inverse: Matrix4::identity(),
            inverse_transpose: Matrix4::identity(),
            material: Material::default(),
        }
    }

    pub fn transform(&self) -> &Matrix4 {
        &self.transform
    }

    /// Set the object-to-world transform, refreshing the cached
    /// inverse and inverse-transpose. A singular transform leaves the
    /// caches all-zero, matching the inverse's fallback.
    pub fn set_transform(&mut self, transform: Matrix4) {
        self.transform = transform;
        self.inverse = transform.inverse();
        self.inverse_transpose = self.inverse.transpose();
    }

    /// Intersect a world-space ray with this sphere, pushing any hits
    /// (tagged with `id`) into the list. A tangent ray records a
    /// single hit; otherwise both roots go in, and the list keeps
    /// them sorted ascending.
    pub fn intersect(&self, id: SphereId, ray: &Ray, out: &mut Intersections) {
        // Solve against the unit sphere in local space.
        let local = ray.transform(&self.inverse);
        let sphere_to_ray = local.origin.sub(Tuple::point(0.0, 0.0, 0.0));

        let a = local.direction.dot(local.direction);
        let b = 2.0 * local.direction.dot(sphere_to_ray);
        let c = sphere_to_ray.dot(sphere_to_ray) - 1.0;
        let discriminant = b * b - 4.0 * a * c;

        if discriminant < 0.0 {
            return;
        }

        let t0 = (-b - discriminant.sqrt()) / (2.0 * a);
        let t1 = (-b + discriminant.sqrt()) / (2.0 * a);

        out.push(t0, id);
        if !floats_equal(t0, t1) {
            out.push(t1, id);
        }
    }

    /// The world-space surface normal at a world-space point on the
    /// sphere. The normal transforms by the inverse-transpose, not
    /// the plain transform, which is what keeps it perpendicular
    /// under non-uniform scaling.
    pub fn normal_at(&self, world_point: Point) -> Vector {
        let object_point = self.inverse.apply(world_point);
        let object_normal = object_point.sub(Tuple::point(0.0, 0.0, 0.0));
        let mut world_normal = self.inverse_transpose.apply(object_normal);
        world_normal.w = 0.0;
        world_normal.normalize()
    }
}
