use std::{fs, io, path::Path};

use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::{error::ConfigError, error::WheelError, geometry::Point, gradient::GradientPolicy};

/// Everything a frontend needs to put a picker on screen.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub wheel: WheelConfig,
    pub logging: LoggingConfig,
}

impl Settings {
    /// # Errors
    /// Malformed JSON, an unknown log level or an invalid wheel.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.wheel.validate()?;
        settings.logging.filter()?;
        Ok(settings)
    }

    /// Reads settings from `path`. A missing file gives the defaults.
    ///
    /// # Errors
    /// Any other I/O failure, or anything [`Settings::from_json`] rejects.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        match fs::read_to_string(path.as_ref()) {
            Ok(json) => Self::from_json(&json),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                log::debug!("{} not found, using default settings", path.as_ref().display());
                Ok(Self::default())
            }
            Err(err) => Err(err.into()),
        }
    }
}

/// Largest `ring_count * piece_count` a wheel will build.
pub const MAX_SEGMENTS: usize = 1 << 16;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WheelConfig {
    pub origin: Point,
    pub radius: f32,
    pub ring_count: usize,
    pub piece_count: usize,
    pub gradient: GradientPolicy,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            origin: Point::new(100.0, 100.0),
            radius: 100.0,
            ring_count: 10,
            piece_count: 16,
            gradient: GradientPolicy::default(),
        }
    }
}

impl WheelConfig {
    /// # Errors
    /// Zero rings or pieces, more than [`MAX_SEGMENTS`] segments, a
    /// non-positive radius or a non-finite origin.
    pub fn validate(&self) -> Result<(), WheelError> {
        if self.ring_count == 0 {
            return Err(WheelError::NoRings);
        }
        if self.piece_count == 0 {
            return Err(WheelError::NoPieces);
        }
        match self.ring_count.checked_mul(self.piece_count) {
            Some(count) if count <= MAX_SEGMENTS => {}
            _ => {
                return Err(WheelError::TooManySegments {
                    rings: self.ring_count,
                    pieces: self.piece_count,
                    max: MAX_SEGMENTS,
                })
            }
        }
        validate_radius(self.radius)?;
        validate_origin(self.origin)
    }
}

pub(crate) fn validate_radius(radius: f32) -> Result<(), WheelError> {
    if radius.is_finite() && radius > 0.0 {
        Ok(())
    } else {
        Err(WheelError::InvalidRadius(radius))
    }
}

pub(crate) fn validate_origin(origin: Point) -> Result<(), WheelError> {
    if origin.is_finite() {
        Ok(())
    } else {
        Err(WheelError::InvalidOrigin(origin.x, origin.y))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub enabled: bool,
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            level: "info".to_owned(),
        }
    }
}

impl LoggingConfig {
    /// # Errors
    /// A level name `log` does not recognise.
    pub fn filter(&self) -> Result<LevelFilter, ConfigError> {
        if !self.enabled {
            return Ok(LevelFilter::Off);
        }
        self.level
            .parse()
            .map_err(|_| ConfigError::UnknownLevel(self.level.clone()))
    }
}
