use std::f32::consts::TAU;

use crate::{
    color::{Hsv, Rgba},
    config::{validate_origin, validate_radius, WheelConfig},
    error::WheelError,
    geometry::{to_polar, Point},
    gradient::RingGradient,
    mesh::Vertex,
    segment::Segment,
};

/// Circular hue/saturation/value picker split into rings and pieces.
///
/// Hue follows the angle, saturation and value follow the ring through a
/// [`RingGradient`] offset by `depth`.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorWheel {
    config: WheelConfig,
    gradient: RingGradient,
    depth: usize,
    segments: Vec<Segment>,
}

impl ColorWheel {
    /// # Errors
    /// Refuses zero rings, zero pieces, an oversized grid, a non-positive
    /// radius or a non-finite origin.
    pub fn new(config: WheelConfig) -> Result<Self, WheelError> {
        config.validate()?;
        let mut wheel = Self {
            gradient: RingGradient::new(config.ring_count, config.gradient),
            config,
            depth: 0,
            segments: vec![],
        };
        wheel.rebuild();
        Ok(wheel)
    }

    #[must_use]
    pub const fn origin(&self) -> Point {
        self.config.origin
    }

    #[must_use]
    pub const fn radius(&self) -> f32 {
        self.config.radius
    }

    #[must_use]
    pub const fn depth(&self) -> usize {
        self.depth
    }

    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    #[must_use]
    pub fn segment(&self, ring: usize, piece: usize) -> Option<&Segment> {
        if ring >= self.config.ring_count || piece >= self.config.piece_count {
            return None;
        }
        self.segments.get(ring * self.config.piece_count + piece)
    }

    /// Every segment's triangles in one list, ready for a vertex buffer.
    #[must_use]
    pub fn mesh(&self) -> Vec<Vertex> {
        self.segments
            .iter()
            .flat_map(|segment| segment.vertices().iter().copied())
            .collect()
    }

    /// # Errors
    /// A non-finite origin. The wheel is left as it was.
    pub fn set_origin(&mut self, origin: Point) -> Result<(), WheelError> {
        self.resize(origin, self.config.radius)
    }

    /// # Errors
    /// A non-positive or non-finite radius. The wheel is left as it was.
    pub fn set_radius(&mut self, radius: f32) -> Result<(), WheelError> {
        self.resize(self.config.origin, radius)
    }

    /// Moves and scales the wheel, rebuilding every segment.
    ///
    /// # Errors
    /// Same as [`ColorWheel::set_origin`] and [`ColorWheel::set_radius`].
    pub fn resize(&mut self, origin: Point, radius: f32) -> Result<(), WheelError> {
        validate_origin(origin)?;
        validate_radius(radius)?;
        if origin == self.config.origin && radius == self.config.radius {
            return Ok(());
        }
        self.config.origin = origin;
        self.config.radius = radius;
        self.rebuild();
        Ok(())
    }

    /// Moves the saturation/value offset, recolouring in place.
    pub fn set_depth(&mut self, depth: usize) {
        let depth = depth % self.gradient.len();
        if depth == self.depth {
            return;
        }
        self.depth = depth;
        self.recolor();
    }

    /// Steps the depth forwards or backwards, wrapping around the gradient.
    pub fn shift_depth(&mut self, steps: isize) {
        let len = self.gradient.len() as isize;
        let depth = (self.depth as isize + steps).rem_euclid(len);
        self.set_depth(depth as usize);
    }

    /// Ring and piece under `point`, or `None` outside the wheel.
    #[must_use]
    pub fn hit_test(&self, point: Point) -> Option<(usize, usize)> {
        let polar = to_polar(point, self.config.origin);
        if polar.radius.is_nan() || polar.radius >= self.config.radius {
            return None;
        }

        let rings = self.config.ring_count;
        let pieces = self.config.piece_count;
        let piece = (polar.angle / TAU * pieces as f32).floor() as usize;
        let ring = (polar.radius / self.config.radius * rings as f32).floor() as usize;
        Some((ring.min(rings - 1), piece.min(pieces - 1)))
    }

    /// Colour under `point` carrying the caller's `alpha`, or `None` outside the wheel.
    #[must_use]
    pub fn select(&self, point: Point, alpha: f32) -> Option<Rgba> {
        let (ring, piece) = self.hit_test(point)?;
        let segment = self.segment(ring, piece)?;
        log::trace!(
            "hit ({}, {}) -> ring {ring}, piece {piece}, {:?}",
            point.x,
            point.y,
            segment.hsv()
        );
        Some(segment.rgba(alpha))
    }

    fn color_at(&self, ring: usize, piece: usize) -> Hsv {
        let (saturation, value) = self.gradient.entry(ring + self.depth);
        Hsv::new(piece as f32 / self.config.piece_count as f32, saturation, value)
    }

    fn rebuild(&mut self) {
        let WheelConfig {
            origin,
            radius,
            ring_count,
            piece_count,
            ..
        } = self.config;
        log::debug!(
            "building {ring_count}x{piece_count} wheel at ({}, {}) radius {radius}",
            origin.x,
            origin.y
        );

        let ring_width = |ring: usize| radius * ring as f32 / ring_count as f32;
        let piece_angle = |piece: usize| TAU * piece as f32 / piece_count as f32;

        let mut segments = Vec::with_capacity(ring_count * piece_count);
        for ring in 0..ring_count {
            for piece in 0..piece_count {
                segments.push(Segment::new(
                    ring,
                    piece,
                    origin,
                    (ring_width(ring), ring_width(ring + 1)),
                    (piece_angle(piece), piece_angle(piece + 1)),
                    self.color_at(ring, piece),
                ));
            }
        }
        self.segments = segments;
    }

    fn recolor(&mut self) {
        log::debug!("recolouring wheel at depth {}", self.depth);
        let colors: Vec<Hsv> = self
            .segments
            .iter()
            .map(|segment| self.color_at(segment.ring, segment.piece))
            .collect();
        for (segment, hsv) in self.segments.iter_mut().zip(colors) {
            segment.recolor(hsv);
        }
    }
}
