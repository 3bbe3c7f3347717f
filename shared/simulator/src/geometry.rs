use nalgebra::{vector, Vector2};
use serde::{Deserialize, Serialize};

/// A two-dimensional vector.
pub type Vec2 = Vector2<f64>;

/// Returns a [Vec2] with the given coordinates.
pub fn vec2(x: f64, y: f64) -> Vec2 {
    vector![x, y]
}

/// The origin.
pub fn null() -> Vec2 {
    vec2(0.0, 0.0)
}

/// Unit vector along the local forward axis.
pub fn unit_x() -> Vec2 {
    vec2(1.0, 0.0)
}

pub fn unit_y() -> Vec2 {
    vec2(0.0, 1.0)
}

/// Extra methods for Vec2.
///
/// Addition, scaling, dot product and length come from nalgebra (`+`,
/// `scale`, `dot`, `norm`).
pub trait Vec2Ext {
    /// Adds only the x component of `other`.
    fn add_x(&self, other: &Vec2) -> Vec2;

    /// Adds only the y component of `other`.
    fn add_y(&self, other: &Vec2) -> Vec2;

    /// Returns the unit vector, or the zero vector unchanged if the length is
    /// exactly zero.
    fn normalize_or_zero(&self) -> Vec2;

    /// Returns the 2D cross product (determinant)
    /// `self.x * other.y - self.y * other.x`.
    fn det(&self, other: &Vec2) -> f64;

    /// Returns the signed angle from `self` to `other` in (-PI, PI].
    fn angle_between(&self, other: &Vec2) -> f64;

    /// Rotates around `pivot` by `angle` (in radians).
    ///
    /// This is not the textbook counter-clockwise rotation. The vehicle model
    /// and the pursuit controller are calibrated against this exact formula:
    ///
    /// ```text
    /// x' = (x - px) * cos(a) + (py - y) * sin(a) + px
    /// y' = (py - y) * cos(a) - (x - px) * sin(a) + py
    /// ```
    fn rotate_around(&self, pivot: &Vec2, angle: f64) -> Vec2;
}

impl Vec2Ext for Vec2 {
    fn add_x(&self, other: &Vec2) -> Vec2 {
        vec2(self.x + other.x, self.y)
    }

    fn add_y(&self, other: &Vec2) -> Vec2 {
        vec2(self.x, self.y + other.y)
    }

    fn normalize_or_zero(&self) -> Vec2 {
        let len = self.norm();
        if len != 0.0 {
            self.scale(1.0 / len)
        } else {
            *self
        }
    }

    fn det(&self, other: &Vec2) -> f64 {
        self.x * other.y - self.y * other.x
    }

    fn angle_between(&self, other: &Vec2) -> f64 {
        self.det(other).atan2(self.dot(other))
    }

    fn rotate_around(&self, pivot: &Vec2, angle: f64) -> Vec2 {
        let (sin, cos) = angle.sin_cos();
        vec2(
            (self.x - pivot.x) * cos + (pivot.y - self.y) * sin + pivot.x,
            (pivot.y - self.y) * cos - (self.x - pivot.x) * sin + pivot.y,
        )
    }
}

/// An implicitly closed loop of vertices. Vertex order defines the edges,
/// and the last vertex connects back to the first.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    vertices: Vec<Vec2>,
}

impl Polygon {
    pub fn new(vertices: Vec<Vec2>) -> Polygon {
        Polygon { vertices }
    }

    /// Axis-aligned rectangle with corners at the origin and `size`.
    pub fn rectangle(size: Vec2) -> Polygon {
        Polygon::new(vec![null(), null().add_x(&size), size, null().add_y(&size)])
    }

    pub fn vertices(&self) -> &[Vec2] {
        &self.vertices
    }

    pub fn iter(&self) -> impl Iterator<Item = &Vec2> {
        self.vertices.iter()
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Vertices followed by the first vertex again, as consumed by a line
    /// strip renderer.
    pub fn closed_points(&self) -> Vec<Vec2> {
        let mut points = self.vertices.clone();
        if let Some(&first) = self.vertices.first() {
            points.push(first);
        }
        points
    }

    /// Arithmetic mean of the vertices, or the origin if there are none.
    pub fn center(&self) -> Vec2 {
        if self.vertices.is_empty() {
            return null();
        }
        let sum = self.vertices.iter().fold(null(), |acc, v| acc + v);
        sum.scale(1.0 / self.vertices.len() as f64)
    }

    pub fn translate(&self, offset: &Vec2) -> Polygon {
        Polygon::new(self.vertices.iter().map(|v| v + offset).collect())
    }

    pub fn rotate_around(&self, pivot: &Vec2, angle: f64) -> Polygon {
        Polygon::new(
            self.vertices
                .iter()
                .map(|v| v.rotate_around(pivot, angle))
                .collect(),
        )
    }

    /// Total length of the closed loop.
    pub fn perimeter(&self) -> f64 {
        self.edges().map(|(a, b)| (b - a).norm()).sum()
    }

    fn edges(&self) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| (self.vertices[i], self.vertices[(i + 1) % n]))
    }

    /// Returns the point at fraction `t` of the perimeter, walking the edges
    /// in vertex order. `t` is clamped to [0, 1].
    ///
    /// An empty polygon yields the origin. A loop with zero perimeter, and
    /// `t == 1`, yield the first vertex.
    pub fn interpolate(&self, t: f64) -> Vec2 {
        let first = match self.vertices.first() {
            Some(&v) => v,
            None => return null(),
        };

        let mut cumulative = Vec::with_capacity(self.vertices.len() + 1);
        cumulative.push(0.0);
        for (a, b) in self.edges() {
            let last = cumulative[cumulative.len() - 1];
            cumulative.push(last + (b - a).norm());
        }
        let total = cumulative[cumulative.len() - 1];
        if total <= 0.0 {
            return first;
        }

        let t = t.clamp(0.0, 1.0);
        for (i, (a, b)) in self.edges().enumerate() {
            if t < cumulative[i + 1] / total {
                // The first matching edge always has nonzero length.
                let k = (t * total - cumulative[i]) / (cumulative[i + 1] - cumulative[i]);
                return a + (b - a).scale(k);
            }
        }
        first
    }
}

impl From<Vec<Vec2>> for Polygon {
    fn from(vertices: Vec<Vec2>) -> Self {
        Polygon::new(vertices)
    }
}
