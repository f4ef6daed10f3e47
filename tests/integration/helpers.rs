use async_trait::async_trait;
use bytes::Bytes;
use enhancer::domain::image::{
    ports::{EnhancementOutput, ImageLoaderPort, ImageSource, LoadedImage, SuperResolutionPort},
    value_objects::UpscaleFactor,
};
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

/// Loader that always answers with the same metadata, or the same error.
pub struct StubLoader {
    result: Result<LoadedImage, String>,
    pub calls: AtomicUsize,
}

impl StubLoader {
    pub fn returning(width: u32, height: u32, format: &str, size_bytes: u64) -> Arc<Self> {
        Arc::new(Self {
            result: Ok(LoadedImage {
                data: Bytes::from_static(b"\x89PNG-ish"),
                width,
                height,
                format: format.to_string(),
                size_bytes,
            }),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn failing(message: &str) -> Arc<Self> {
        Arc::new(Self {
            result: Err(message.to_string()),
            calls: AtomicUsize::new(0),
        })
    }
}

#[async_trait]
impl ImageLoaderPort for StubLoader {
    async fn load(&self, _source: ImageSource) -> anyhow::Result<LoadedImage> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.result.clone().map_err(|e| anyhow::anyhow!(e))
    }
}

/// Resolver that records the factors it was asked for.
pub struct StubResolver {
    failure: Option<String>,
    pub factors: Mutex<Vec<f64>>,
}

impl StubResolver {
    pub fn succeeding() -> Arc<Self> {
        Arc::new(Self {
            failure: None,
            factors: Mutex::new(Vec::new()),
        })
    }

    pub fn failing(message: &str) -> Arc<Self> {
        Arc::new(Self {
            failure: Some(message.to_string()),
            factors: Mutex::new(Vec::new()),
        })
    }

    pub fn recorded_factors(&self) -> Vec<f64> {
        self.factors.lock().expect("factor log poisoned").clone()
    }
}

#[async_trait]
impl SuperResolutionPort for StubResolver {
    async fn enhance(
        &self,
        data: Bytes,
        factor: UpscaleFactor,
    ) -> anyhow::Result<EnhancementOutput> {
        self.factors
            .lock()
            .expect("factor log poisoned")
            .push(factor.value());
        if let Some(message) = &self.failure {
            anyhow::bail!("{}", message);
        }
        let mut enhanced = data.to_vec();
        enhanced.extend_from_slice(b"-enhanced");
        Ok(EnhancementOutput {
            enhanced_image_data: Bytes::from(enhanced),
            processing_time_ms: 12,
        })
    }
}

pub fn bytes_source() -> ImageSource {
    ImageSource::Bytes(Bytes::from_static(b"\x89PNG-ish"))
}
