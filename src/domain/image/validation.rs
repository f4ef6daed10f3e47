//! Guard rules for image metadata and enhancement parameters.
//!
//! Each rule fails fast on the first violated constraint, so the reported
//! message is deterministic even when a value breaks several rules at once.
//! The same rules run inside the entity constructors, which means an
//! [`Image`](super::entity::Image) or
//! [`Dimensions`](super::value_objects::Dimensions) can never hold values
//! that these functions would reject.

use super::value_objects::{ImageFormat, UpscaleFactor};
use crate::domain::shared::errors::DomainError;

/// Largest accepted width or height, in pixels.
pub const MAX_DIMENSION: u32 = 10_000;

/// Largest accepted file size: 50 MiB, inclusive.
pub const MAX_FILE_SIZE_BYTES: u64 = 50 * 1024 * 1024;

/// Exclusive lower bound for the upscale factor.
pub const MIN_UPSCALE_FACTOR: f64 = 1.0;

/// Inclusive upper bound for the upscale factor.
pub const MAX_UPSCALE_FACTOR: f64 = 4.0;

/// Validates a raw width/height pair.
///
/// Rules are checked in this order: positivity, integrality, upper bound.
/// Returns the values as pixel counts once all of them hold.
///
/// # Errors
/// [`DomainError::InvalidDimensions`] naming the first violated rule.
pub fn validate_dimensions(width: f64, height: f64) -> Result<(u32, u32), DomainError> {
    if width <= 0.0 || height <= 0.0 {
        return Err(DomainError::InvalidDimensions(format!(
            "Width and height must be positive, got {}x{}",
            width, height
        )));
    }

    if !is_whole(width) || !is_whole(height) {
        return Err(DomainError::InvalidDimensions(format!(
            "Width and height must be integers, got {}x{}",
            width, height
        )));
    }

    let max = f64::from(MAX_DIMENSION);
    if width > max || height > max {
        return Err(DomainError::InvalidDimensions(format!(
            "Width and height must not exceed {} pixels, got {}x{}",
            MAX_DIMENSION, width, height
        )));
    }

    Ok((width as u32, height as u32))
}

/// Validates a format name against the supported list, ignoring case.
///
/// # Errors
/// [`DomainError::InvalidFormat`] when the value is empty or unsupported.
/// The unsupported-format message echoes the input exactly as given.
pub fn validate_format(format: &str) -> Result<ImageFormat, DomainError> {
    if format.is_empty() {
        return Err(DomainError::InvalidFormat(
            "Image format is required".to_string(),
        ));
    }

    format.parse::<ImageFormat>().map_err(|_| {
        DomainError::InvalidFormat(format!(
            "Unsupported image format: {}. Supported formats: {}",
            format,
            ImageFormat::supported_list()
        ))
    })
}

/// Validates a file size in bytes. The upper bound is inclusive.
///
/// # Errors
/// [`DomainError::InvalidFileSize`] for zero or oversized files.
pub fn validate_file_size(bytes: u64) -> Result<(), DomainError> {
    if bytes == 0 {
        return Err(DomainError::InvalidFileSize(
            "File size must be positive, got 0 bytes".to_string(),
        ));
    }

    if bytes > MAX_FILE_SIZE_BYTES {
        return Err(DomainError::InvalidFileSize(format!(
            "File size {} bytes exceeds maximum of {} bytes (50 MB)",
            bytes, MAX_FILE_SIZE_BYTES
        )));
    }

    Ok(())
}

/// Validates an upscale factor, which must be finite and lie in `(1, 4]`.
///
/// # Errors
/// [`DomainError::InvalidUpscaleFactor`]. Non-finite values are rejected
/// before the range checks.
pub fn validate_upscale_factor(factor: f64) -> Result<UpscaleFactor, DomainError> {
    if !factor.is_finite() {
        return Err(DomainError::InvalidUpscaleFactor(format!(
            "Upscale factor must be a finite number, got {}",
            factor
        )));
    }

    if factor <= MIN_UPSCALE_FACTOR {
        return Err(DomainError::InvalidUpscaleFactor(format!(
            "Upscale factor must be greater than {}, got {}",
            MIN_UPSCALE_FACTOR, factor
        )));
    }

    if factor > MAX_UPSCALE_FACTOR {
        return Err(DomainError::InvalidUpscaleFactor(format!(
            "Upscale factor must not exceed {}, got {}",
            MAX_UPSCALE_FACTOR, factor
        )));
    }

    Ok(UpscaleFactor::new_unchecked(factor))
}

fn is_whole(value: f64) -> bool {
    value.is_finite() && value.fract() == 0.0
}
