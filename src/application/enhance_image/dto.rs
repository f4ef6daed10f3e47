use crate::domain::{
    image::{entity::Image, ports::ImageSource, value_objects::Dimensions},
    job::entity::ProcessingJob,
};
use bytes::Bytes;
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct EnhanceImageRequest {
    pub source: ImageSource,
    /// Falls back to the use case's default factor when `None`.
    pub upscale_factor: Option<f64>,
}

impl EnhanceImageRequest {
    pub fn new(source: ImageSource) -> Self {
        Self {
            source,
            upscale_factor: None,
        }
    }

    pub fn with_upscale_factor(mut self, factor: f64) -> Self {
        self.upscale_factor = Some(factor);
        self
    }
}

/// Outcome of one enhancement run.
///
/// On failure `image` and `job` hold whatever had been built before the
/// error, for diagnostics.
#[derive(Debug, Clone, Serialize)]
pub struct EnhanceImageResponse {
    pub success: bool,
    #[serde(skip)]
    pub enhanced_image_data: Option<Bytes>,
    pub image: Option<Arc<Image>>,
    pub job: Option<ProcessingJob>,
    pub enhanced_dimensions: Option<Dimensions>,
    pub processing_time_ms: u64,
    pub error: Option<String>,
}

impl EnhanceImageResponse {
    pub(crate) fn succeeded(
        enhanced_image_data: Bytes,
        image: Option<Arc<Image>>,
        job: Option<ProcessingJob>,
        enhanced_dimensions: Dimensions,
        processing_time_ms: u64,
    ) -> Self {
        Self {
            success: true,
            enhanced_image_data: Some(enhanced_image_data),
            image,
            job,
            enhanced_dimensions: Some(enhanced_dimensions),
            processing_time_ms,
            error: None,
        }
    }

    pub(crate) fn failed(
        error: String,
        processing_time_ms: u64,
        image: Option<Arc<Image>>,
        job: Option<ProcessingJob>,
    ) -> Self {
        Self {
            success: false,
            enhanced_image_data: None,
            image,
            job,
            enhanced_dimensions: None,
            processing_time_ms,
            error: Some(error),
        }
    }
}
