//
// lib.rs: Display-independent core of the sphere tracer: tuple and
// matrix algebra, ray/sphere intersection, Phong shading, and the
// per-pixel render loop.
//

pub mod canvas;
pub mod intersection;
pub mod lighting;
pub mod matrix;
pub mod ray;
pub mod renderer;
pub mod scene;
pub mod sphere;
pub mod tuple;

pub use canvas::Canvas;
pub use intersection::{Intersection, Intersections, SphereId};
pub use lighting::{lighting, Material, PointLight};
pub use matrix::Matrix4;
pub use ray::Ray;
pub use renderer::{render, CanvasConfig, RenderStats};
pub use scene::Scene;
pub use sphere::Sphere;
pub use tuple::{Colour, Point, Tuple, Vector, EPSILON};
