use crate::error::HexError;

/// Hue, saturation and value. Hue is a fraction of a full turn.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Hsv {
    /// [0, 1), wraps
    pub hue: f32,
    /// [0, 1]
    pub saturation: f32,
    /// [0, 1]
    pub value: f32,
}

impl Hsv {
    #[must_use]
    pub const fn new(hue: f32, saturation: f32, value: f32) -> Self {
        Self {
            hue,
            saturation,
            value,
        }
    }

    /// Standard sextant conversion. A non-finite hue is read as 0.
    #[must_use]
    pub fn to_rgb(self) -> [f32; 3] {
        let hue = if self.hue.is_finite() {
            self.hue.rem_euclid(1.0)
        } else {
            0.0
        };
        let s = self.saturation.clamp(0.0, 1.0);
        let v = self.value.clamp(0.0, 1.0);

        if s == 0.0 {
            return [v, v, v];
        }

        let hh = hue * 6.0;
        let c = v * s;
        let x = c * (1.0 - ((hh % 2.0) - 1.0).abs());
        let (r, g, b) = match hh.floor() as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };
        let m = v - c;
        [r + m, g + m, b + m]
    }
}

/// Straight (not pre-multiplied) RGBA, every channel in [0, 1].
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);

    #[must_use]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    #[must_use]
    pub const fn from_rgb(rgb: [f32; 3], a: f32) -> Self {
        Self::new(rgb[0], rgb[1], rgb[2], a)
    }

    #[must_use]
    pub const fn rgb(&self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }

    #[must_use]
    pub const fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Parses `#RGB` or `#RRGGBB`. Alpha is always 1.
    ///
    /// # Errors
    /// Anything that is not a `#` followed by 3 or 6 hex digits.
    pub fn from_hex(hex: &str) -> Result<Self, HexError> {
        let digits = hex
            .strip_prefix('#')
            .ok_or_else(|| HexError::MissingHash(hex.to_owned()))?;
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(HexError::BadDigit(hex.to_owned()));
        }

        let channel = |s: &str| {
            u8::from_str_radix(s, 16)
                .map(|n| f32::from(n) / 255.0)
                .map_err(|_| HexError::BadDigit(hex.to_owned()))
        };

        match digits.len() {
            3 => {
                let mut rgb = [0.0; 3];
                for (out, c) in rgb.iter_mut().zip(digits.chars()) {
                    *out = channel(&format!("{c}{c}"))?;
                }
                Ok(Self::from_rgb(rgb, 1.0))
            }
            6 => Ok(Self::new(
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
                1.0,
            )),
            _ => Err(HexError::BadLength(hex.to_owned())),
        }
    }

    /// Like [`Rgba::from_hex`], but malformed input becomes opaque white.
    #[must_use]
    pub fn parse_or_white(hex: &str) -> Self {
        Self::from_hex(hex).unwrap_or(Self::WHITE)
    }

    #[must_use]
    pub fn to_hex(&self) -> String {
        let byte = |x: f32| (x * 255.0).round().clamp(0.0, 255.0) as u8;
        format!("#{:02X}{:02X}{:02X}", byte(self.r), byte(self.g), byte(self.b))
    }
}

impl From<Hsv> for Rgba {
    fn from(hsv: Hsv) -> Self {
        Self::from_rgb(hsv.to_rgb(), 1.0)
    }
}

#[must_use]
pub fn is_valid_hex(hex: &str) -> bool {
    hex.strip_prefix('#').is_some_and(|digits| {
        matches!(digits.len(), 3 | 6) && digits.chars().all(|c| c.is_ascii_hexdigit())
    })
}
