use super::value_objects::UpscaleFactor;
use async_trait::async_trait;
use bytes::Bytes;
use std::path::PathBuf;

/// Where the image to enhance comes from. Resolution is up to the loader.
#[derive(Debug, Clone)]
pub enum ImageSource {
    File(PathBuf),
    Url(String),
    Bytes(Bytes),
}

impl ImageSource {
    /// Short label used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            ImageSource::File(_) => "file",
            ImageSource::Url(_) => "url",
            ImageSource::Bytes(_) => "bytes",
        }
    }
}

/// Raw image data plus the metadata a loader extracted from it.
#[derive(Debug, Clone)]
pub struct LoadedImage {
    pub data: Bytes,
    pub width: u32,
    pub height: u32,
    pub format: String,
    pub size_bytes: u64,
}

#[derive(Debug, Clone)]
pub struct EnhancementOutput {
    pub enhanced_image_data: Bytes,
    pub processing_time_ms: u64,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ImageLoaderPort: Send + Sync {
    /// Resolve a source into bytes and metadata.
    async fn load(&self, source: ImageSource) -> anyhow::Result<LoadedImage>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SuperResolutionPort: Send + Sync {
    /// Upscale `data` by `factor`, which the caller has already validated.
    async fn enhance(
        &self,
        data: Bytes,
        factor: UpscaleFactor,
    ) -> anyhow::Result<EnhancementOutput>;
}
