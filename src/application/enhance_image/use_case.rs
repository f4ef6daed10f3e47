use crate::{
    application::enhance_image::dto::{EnhanceImageRequest, EnhanceImageResponse},
    config::Config,
    domain::{
        image::{
            entity::Image,
            ports::{ImageLoaderPort, SuperResolutionPort},
            validation::{
                validate_dimensions, validate_file_size, validate_format, validate_upscale_factor,
            },
            value_objects::{Dimensions, UpscaleFactor},
        },
        job::entity::ProcessingJob,
        shared::errors::DomainError,
    },
};
use bytes::Bytes;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, error, info, instrument, warn};
use uuid::Uuid;

/// Loads an image, runs it through super-resolution and records the outcome
/// on a [`ProcessingJob`].
///
/// Both collaborators are injected, and the use case never retries. Every
/// error raised along the way is caught once in [`execute`](Self::execute)
/// and turned into a failed [`EnhanceImageResponse`].
pub struct EnhanceImageUseCase {
    loader: Arc<dyn ImageLoaderPort>,
    resolver: Arc<dyn SuperResolutionPort>,
    default_upscale_factor: UpscaleFactor,
}

/// What had been built when the pipeline stopped.
#[derive(Default)]
struct Progress {
    image: Option<Arc<Image>>,
    job: Option<ProcessingJob>,
}

struct Enhanced {
    data: Bytes,
    dimensions: Dimensions,
    elapsed_ms: u64,
}

impl EnhanceImageUseCase {
    pub fn new(loader: Arc<dyn ImageLoaderPort>, resolver: Arc<dyn SuperResolutionPort>) -> Self {
        Self {
            loader,
            resolver,
            default_upscale_factor: UpscaleFactor::DEFAULT,
        }
    }

    /// Like [`new`](Self::new), with the default factor taken from `config`.
    pub fn with_config(
        loader: Arc<dyn ImageLoaderPort>,
        resolver: Arc<dyn SuperResolutionPort>,
        config: &Config,
    ) -> Self {
        Self {
            default_upscale_factor: config.default_upscale_factor,
            ..Self::new(loader, resolver)
        }
    }

    /// Runs one enhancement.
    ///
    /// 1. Resolves and validates the factor before any I/O
    /// 2. Loads the source through the loader port
    /// 3. Re-validates the loaded metadata
    /// 4. Builds the image and a job, and starts the job
    /// 5. Calls the resolution port
    /// 6. Computes the enhanced dimensions
    /// 7. Completes the job with the elapsed time
    ///
    /// Never returns an error: failures come back as `success == false`
    /// with the message, the elapsed time and any partial image or job. A
    /// job that was already in progress is marked failed first.
    #[instrument(skip(self, request), fields(
        source = request.source.kind(),
        upscale_factor = ?request.upscale_factor
    ))]
    pub async fn execute(&self, request: EnhanceImageRequest) -> EnhanceImageResponse {
        let started = Instant::now();
        let mut progress = Progress::default();

        match self.run(request, started, &mut progress).await {
            Ok(enhanced) => {
                info!(
                    "Enhanced image to {} in {} ms",
                    enhanced.dimensions, enhanced.elapsed_ms
                );
                EnhanceImageResponse::succeeded(
                    enhanced.data,
                    progress.image,
                    progress.job,
                    enhanced.dimensions,
                    enhanced.elapsed_ms,
                )
            }
            Err(err) => {
                let message = err.to_string();
                if let Some(job) = progress.job.as_mut().filter(|job| job.is_in_progress()) {
                    if let Err(transition_err) = job.fail(message.clone()) {
                        warn!("Could not mark job {} as failed: {}", job.id(), transition_err);
                    }
                }

                if err.is_validation() {
                    warn!("Enhancement rejected: {}", message);
                } else {
                    error!("Enhancement failed: {}", message);
                }

                EnhanceImageResponse::failed(
                    message,
                    elapsed_ms(started),
                    progress.image,
                    progress.job,
                )
            }
        }
    }

    async fn run(
        &self,
        request: EnhanceImageRequest,
        started: Instant,
        progress: &mut Progress,
    ) -> Result<Enhanced, DomainError> {
        let factor = validate_upscale_factor(
            request
                .upscale_factor
                .unwrap_or(self.default_upscale_factor.value()),
        )?;

        let loaded = self.loader.load(request.source).await.map_err(|e| {
            error!("Image loader failed: {}", e);
            DomainError::from(e)
        })?;
        debug!(
            "Loaded {}x{} {} image ({} bytes)",
            loaded.width, loaded.height, loaded.format, loaded.size_bytes
        );

        validate_dimensions(f64::from(loaded.width), f64::from(loaded.height))?;
        validate_file_size(loaded.size_bytes)?;
        validate_format(&loaded.format)?;

        let image = Arc::new(Image::from_loaded(Uuid::now_v7().to_string(), &loaded)?);
        progress.image = Some(Arc::clone(&image));

        let job = progress
            .job
            .insert(ProcessingJob::new(Uuid::now_v7().to_string(), Arc::clone(&image)));
        job.start_processing()?;
        debug!("Job {} started for image {}", job.id(), image.id());

        let output = self
            .resolver
            .enhance(loaded.data, factor)
            .await
            .map_err(|e| {
                error!("Super-resolution failed for job {}: {}", job.id(), e);
                DomainError::from(e)
            })?;
        debug!(
            "Resolver returned {} bytes after {} ms",
            output.enhanced_image_data.len(),
            output.processing_time_ms
        );

        let dimensions = image.upscaled_dimensions(factor.value())?;
        let elapsed_ms = elapsed_ms(started);
        job.complete_successfully(dimensions, elapsed_ms)?;

        Ok(Enhanced {
            data: output.enhanced_image_data,
            dimensions,
            elapsed_ms,
        })
    }
}

fn elapsed_ms(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)
}
