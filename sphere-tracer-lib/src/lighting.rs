//
// lighting.rs: Materials, point lights, and the Phong reflection
// model.
//

use crate::tuple::{Colour, Point, Tuple, Vector};

/// Phong material parameters. The coefficients are non-negative and
/// are not required to sum to one.
#[derive(Clone, Copy, Debug)]
pub struct Material {
    pub colour: Colour,
    pub ambient: f32,
    pub diffuse: f32,
    pub specular: f32,
    pub shininess: f32,
}

impl Default for Material {
    fn default() -> Material {
        Material {
            colour: Tuple::colour(1.0, 1.0, 1.0, 1.0),
            ambient: 0.1,
            diffuse: 0.9,
            specular: 0.9,
            shininess: 200.0,
        }
    }
}

/// An idealized point light: a single position with an intensity and
/// no attenuation or softness.
#[derive(Clone, Copy, Debug)]
pub struct PointLight {
    pub intensity: Colour,
    pub position: Point,
}

impl PointLight {
    pub fn new(intensity: Colour, position: Point) -> PointLight {
        PointLight {
            intensity,
            position,
        }
    }
}

fn black() -> Colour {
    Tuple::colour(0.0, 0.0, 0.0, 1.0)
}

/// Phong local illumination: ambient + diffuse + specular, given the
/// shaded point, the eye vector and the surface normal. Purely local,
/// no secondary rays, and the result is left unclamped.
pub fn lighting(
    material: &Material,
    light: &PointLight,
    point: Point,
    eye: Vector,
    normal: Vector,
) -> Colour {
    let effective_colour = material.colour.hadamard(light.intensity);
    let light_vector = light.position.sub(point).normalize();
    let ambient = effective_colour.scale(material.ambient);

    let diffuse;
    let specular;

    let light_dot_normal = light_vector.dot(normal);
    if light_dot_normal < 0.0 {
        // Light on the other side of the surface.
        diffuse = black();
        specular = black();
    } else {
        diffuse = effective_colour.scale(material.diffuse * light_dot_normal);
        let reflect_v = light_vector.neg().reflect(normal);
        let reflect_dot_eye = reflect_v.dot(eye);
        if reflect_dot_eye <= 0.0 {
            // Reflection points away from the eye.
            specular = black();
        } else {
            let factor = reflect_dot_eye.powf(material.shininess);
            specular = light.intensity.scale(material.specular * factor);
        }
    }

    ambient.add(diffuse).add(specular)
}
