use super::validation::{validate_dimensions, validate_upscale_factor};
use crate::domain::shared::errors::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Pixel width and height of an image.
///
/// Both axes are validated on construction and the pair is immutable
/// afterwards. Equality is by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Dimensions {
    width: u32,
    height: u32,
}

impl Dimensions {
    /// Creates validated dimensions.
    ///
    /// # Errors
    /// [`DomainError::InvalidDimensions`] when either axis is zero or above
    /// the maximum.
    pub fn new(width: u32, height: u32) -> Result<Self, DomainError> {
        Self::from_raw(f64::from(width), f64::from(height))
    }

    /// Creates dimensions from untyped numeric input, such as values read
    /// from external metadata. Fractional values are rejected.
    pub fn from_raw(width: f64, height: f64) -> Result<Self, DomainError> {
        let (width, height) = validate_dimensions(width, height)?;
        Ok(Self { width, height })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Width divided by height.
    pub fn aspect_ratio(&self) -> f64 {
        f64::from(self.width) / f64::from(self.height)
    }

    pub fn pixel_count(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Image encodings accepted for enhancement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    Jpeg,
    Jpg,
    Png,
    Webp,
    Bmp,
}

impl ImageFormat {
    /// Every supported format, in the order used by error messages.
    pub const ALL: [ImageFormat; 5] = [
        ImageFormat::Jpeg,
        ImageFormat::Jpg,
        ImageFormat::Png,
        ImageFormat::Webp,
        ImageFormat::Bmp,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ImageFormat::Jpeg => "jpeg",
            ImageFormat::Jpg => "jpg",
            ImageFormat::Png => "png",
            ImageFormat::Webp => "webp",
            ImageFormat::Bmp => "bmp",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ImageFormat::Jpeg | ImageFormat::Jpg => "image/jpeg",
            ImageFormat::Png => "image/png",
            ImageFormat::Webp => "image/webp",
            ImageFormat::Bmp => "image/bmp",
        }
    }

    /// Comma-separated list of supported names, e.g. for error messages.
    pub fn supported_list() -> String {
        Self::ALL
            .iter()
            .map(ImageFormat::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string names no supported format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownFormat;

impl FromStr for ImageFormat {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|format| format.as_str().eq_ignore_ascii_case(s))
            .ok_or(UnknownFormat)
    }
}

/// Multiplier applied to both axes during enhancement.
///
/// Only obtainable through [`validate_upscale_factor`], so holding one
/// proves the value is finite and within `(1, 4]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
pub struct UpscaleFactor(f64);

impl UpscaleFactor {
    /// Factor applied when a request does not specify one.
    pub const DEFAULT: UpscaleFactor = UpscaleFactor(2.0);

    pub(super) fn new_unchecked(value: f64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for UpscaleFactor {
    type Error = DomainError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        validate_upscale_factor(value)
    }
}

impl Default for UpscaleFactor {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for UpscaleFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x", self.0)
    }
}
