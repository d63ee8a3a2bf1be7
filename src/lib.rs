#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::float_cmp)]

#[cfg(feature = "gui")]
pub mod canvas;
pub mod color;
pub mod colorwheel;
pub mod config;
pub mod error;
pub mod geometry;
pub mod gradient;
pub mod mesh;
pub mod picker;
pub mod segment;
