use super::ports::LoadedImage;
use super::validation::{validate_file_size, validate_format, validate_upscale_factor};
use super::value_objects::{Dimensions, ImageFormat};
use crate::domain::shared::errors::DomainError;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Width and height at or above which an image is no longer upscaled.
pub const UPSCALE_THRESHOLD: u32 = 4000;

/// Megapixel count below which an image counts as low resolution.
pub const LOW_RESOLUTION_MEGAPIXELS: f64 = 1.0;

/// Metadata of an image submitted for enhancement.
///
/// # Invariants
/// - dimensions, format and size satisfy the rules in
///   [`validation`](super::validation); construction fails otherwise
/// - `format` keeps the caller's casing; comparisons go through
///   [`Image::format_kind`]
/// - nothing is mutable after construction
#[derive(Debug, Clone, Serialize)]
pub struct Image {
    id: String,
    dimensions: Dimensions,
    format: String,
    format_kind: ImageFormat,
    size_bytes: u64,
    created_at: DateTime<Utc>,
}

impl Image {
    /// Creates a validated image.
    ///
    /// Dimensions are checked first, then format, then file size, so the
    /// first broken rule decides the error.
    ///
    /// # Errors
    /// The matching validation variant of [`DomainError`].
    pub fn new(
        id: impl Into<String>,
        width: u32,
        height: u32,
        format: impl Into<String>,
        size_bytes: u64,
    ) -> Result<Self, DomainError> {
        let format = format.into();
        let dimensions = Dimensions::new(width, height)?;
        let format_kind = validate_format(&format)?;
        validate_file_size(size_bytes)?;

        Ok(Self {
            id: id.into(),
            dimensions,
            format,
            format_kind,
            size_bytes,
            created_at: Utc::now(),
        })
    }

    /// Builds an image from a loader result under the given identifier.
    pub fn from_loaded(id: impl Into<String>, loaded: &LoadedImage) -> Result<Self, DomainError> {
        Self::new(
            id,
            loaded.width,
            loaded.height,
            loaded.format.as_str(),
            loaded.size_bytes,
        )
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn width(&self) -> u32 {
        self.dimensions.width()
    }

    pub fn height(&self) -> u32 {
        self.dimensions.height()
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    /// Format exactly as supplied at construction.
    pub fn format(&self) -> &str {
        &self.format
    }

    pub fn format_kind(&self) -> ImageFormat {
        self.format_kind
    }

    pub fn size_bytes(&self) -> u64 {
        self.size_bytes
    }

    /// Returns a copy of the creation instant.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn aspect_ratio(&self) -> f64 {
        self.dimensions.aspect_ratio()
    }

    pub fn megapixels(&self) -> f64 {
        self.dimensions.pixel_count() as f64 / 1_000_000.0
    }

    pub fn is_low_resolution(&self) -> bool {
        self.megapixels() < LOW_RESOLUTION_MEGAPIXELS
    }

    /// Both axes must be strictly below [`UPSCALE_THRESHOLD`].
    pub fn can_be_upscaled(&self) -> bool {
        self.width() < UPSCALE_THRESHOLD && self.height() < UPSCALE_THRESHOLD
    }

    /// Dimensions after scaling both axes by `factor`, rounded half away
    /// from zero.
    ///
    /// Does not consult [`Image::can_be_upscaled`].
    ///
    /// # Errors
    /// [`DomainError::InvalidUpscaleFactor`] for a bad factor, or
    /// [`DomainError::InvalidDimensions`] when the result exceeds the
    /// dimension limit.
    pub fn upscaled_dimensions(&self, factor: f64) -> Result<Dimensions, DomainError> {
        let factor = validate_upscale_factor(factor)?.value();
        let width = (f64::from(self.width()) * factor).round();
        let height = (f64::from(self.height()) * factor).round();
        Dimensions::from_raw(width, height)
    }
}
