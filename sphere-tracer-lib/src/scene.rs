//
// scene.rs: The scene as an arena of spheres plus the point lights,
// and the scene-level intersect and shade steps.
//

use crate::intersection::{Intersection, Intersections, SphereId};
use crate::lighting::{lighting, PointLight};
use crate::ray::Ray;
use crate::sphere::Sphere;
use crate::tuple::{Colour, Tuple};

/// Immutable scene data for a render: spheres and lights. Spheres
/// are held in an arena and handed out as `SphereId`s, so an
/// intersection can name its object without borrowing it.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    spheres: Vec<Sphere>,
    pub lights: Vec<PointLight>,
}

impl Scene {
    pub fn new() -> Scene {
        Scene {
            spheres: Vec::new(),
            lights: Vec::new(),
        }
    }

    /// Add a sphere and get back its stable id.
    pub fn add_sphere(&mut self, sphere: Sphere) -> SphereId {
        self.spheres.push(sphere);
        SphereId(self.spheres.len() - 1)
    }

    pub fn add_light(&mut self, light: PointLight) {
        self.lights.push(light);
    }

    pub fn sphere(&self, id: SphereId) -> &Sphere {
        &self.spheres[id.0]
    }

    pub fn sphere_mut(&mut self, id: SphereId) -> &mut Sphere {
        &mut self.spheres[id.0]
    }

    /// Intersect a ray with every sphere in the scene. The combined
    /// list comes back sorted ascending by t.
    pub fn intersect(&self, ray: &Ray) -> Intersections {
        let mut xs = Intersections::new();
        for (i, sphere) in self.spheres.iter().enumerate() {
            sphere.intersect(SphereId(i), ray, &mut xs);
        }
        xs
    }

    /// Phong-shade a hit: evaluate the surface point, normal and eye
    /// vector, and sum the lighting contribution of every light.
    pub fn shade_hit(&self, ray: &Ray, hit: &Intersection) -> Colour {
        let point = ray.position(hit.t);
        let sphere = self.sphere(hit.object);
        let normal = sphere.normal_at(point);
        let eye = ray.direction.neg();

        let mut colour = Tuple::colour(0.0, 0.0, 0.0, 1.0);
        for light in &self.lights {
            colour = colour.add(lighting(&sphere.material, light, point, eye, normal));
        }
        colour
    }

    /// Cast a ray into the scene: the shaded colour of the nearest
    /// hit in front of the origin, or None for a miss.
    pub fn colour_at(&self, ray: &Ray) -> Option<Colour> {
        let xs = self.intersect(ray);
        xs.hit().map(|hit| self.shade_hit(ray, hit))
    }
}
