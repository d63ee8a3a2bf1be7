use crate::{
    color::{Hsv, Rgba},
    geometry::Point,
    mesh::{self, Vertex},
};

/// One (ring, piece) cell of the wheel together with its mesh.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub ring: usize,
    pub piece: usize,
    pub r_min: f32,
    pub r_max: f32,
    pub theta_min: f32,
    pub theta_max: f32,
    hsv: Hsv,
    vertices: Vec<Vertex>,
}

impl Segment {
    #[must_use]
    pub fn new(
        ring: usize,
        piece: usize,
        origin: Point,
        (r_min, r_max): (f32, f32),
        (theta_min, theta_max): (f32, f32),
        hsv: Hsv,
    ) -> Self {
        let color = Rgba::from(hsv).to_array();
        Self {
            ring,
            piece,
            r_min,
            r_max,
            theta_min,
            theta_max,
            hsv,
            vertices: mesh::wedge(origin, r_min, r_max, theta_min, theta_max, color),
        }
    }

    #[must_use]
    pub const fn hsv(&self) -> Hsv {
        self.hsv
    }

    #[must_use]
    pub fn rgba(&self, alpha: f32) -> Rgba {
        Rgba::from_rgb(self.hsv.to_rgb(), alpha)
    }

    #[must_use]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    #[must_use]
    pub fn outline(&self, origin: Point) -> Vec<Point> {
        mesh::outline(origin, self.r_min, self.r_max, self.theta_min, self.theta_max)
    }

    /// Swap the colour while keeping the vertex positions.
    pub fn recolor(&mut self, hsv: Hsv) {
        self.hsv = hsv;
        let color = Rgba::from(hsv).to_array();
        for vertex in &mut self.vertices {
            vertex.color = color;
        }
    }
}
