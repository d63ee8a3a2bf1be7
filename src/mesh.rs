use wgpu::{vertex_attr_array, VertexAttribute, VertexBufferLayout, VertexStepMode};

use crate::geometry::Point;

/// Angular sampling step for curved edges, in radians.
pub const ARC_STEP: f32 = 0.1;

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub pos: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    const ATTRIBUTES: [VertexAttribute; 2] = vertex_attr_array![
        0 => Float32x2, 1 => Float32x4
    ];

    #[must_use]
    pub const fn new(pos: Point, color: [f32; 4]) -> Self {
        Self {
            pos: pos.to_array(),
            color,
        }
    }

    #[must_use]
    pub const fn desc<'a>() -> VertexBufferLayout<'a> {
        VertexBufferLayout {
            array_stride: std::mem::size_of::<Self>() as wgpu::BufferAddress,
            step_mode: VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// Sample angles from `theta_min` to `theta_max` in `ARC_STEP` increments.
///
/// Always ends on `theta_max`, so an arc that is not a whole number of steps
/// still gets its final short step.
#[must_use]
pub fn arc_angles(theta_min: f32, theta_max: f32) -> Vec<f32> {
    let mut angles = vec![theta_min];
    let mut theta = theta_min + ARC_STEP;
    while theta < theta_max {
        angles.push(theta);
        theta += ARC_STEP;
    }
    if theta_max > theta_min {
        angles.push(theta_max);
    }
    angles
}

/// Triangle list covering the wedge between two radii and two angles.
///
/// With `r_min == 0` the wedge is a fan meeting at `origin`.
#[must_use]
pub fn wedge(
    origin: Point,
    r_min: f32,
    r_max: f32,
    theta_min: f32,
    theta_max: f32,
    color: [f32; 4],
) -> Vec<Vertex> {
    let angles = arc_angles(theta_min, theta_max);
    let mut vertices = Vec::with_capacity(angles.len().saturating_sub(1) * 6);

    for step in angles.windows(2) {
        let (a0, a1) = (step[0], step[1]);
        let outer0 = Vertex::new(origin.offset(r_max, a0), color);
        let outer1 = Vertex::new(origin.offset(r_max, a1), color);

        if r_min <= 0.0 {
            vertices.extend([Vertex::new(origin, color), outer0, outer1]);
        } else {
            let inner0 = Vertex::new(origin.offset(r_min, a0), color);
            let inner1 = Vertex::new(origin.offset(r_min, a1), color);
            vertices.extend([inner0, outer0, outer1, outer1, inner1, inner0]);
        }
    }
    vertices
}

/// Closed perimeter of a wedge: the outer arc forwards, then the inner arc
/// backwards (or just `origin` for the innermost ring).
#[must_use]
pub fn outline(origin: Point, r_min: f32, r_max: f32, theta_min: f32, theta_max: f32) -> Vec<Point> {
    let angles = arc_angles(theta_min, theta_max);
    let mut points: Vec<Point> = angles.iter().map(|&a| origin.offset(r_max, a)).collect();
    if r_min <= 0.0 {
        points.push(origin);
    } else {
        points.extend(angles.iter().rev().map(|&a| origin.offset(r_min, a)));
    }
    points
}
