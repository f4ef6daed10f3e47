use super::helpers::{StubLoader, StubResolver, bytes_source};
use enhancer::{
    application::enhance_image::{dto::EnhanceImageRequest, use_case::EnhanceImageUseCase},
    config::Config,
    domain::{image::value_objects::Dimensions, job::entity::JobStatus},
    telemetry::init_tracing,
};
use std::sync::atomic::Ordering;

#[tokio::test]
async fn default_factor_doubles_dimensions_and_completes_job() {
    init_tracing(&Config::default().log_filter);
    let loader = StubLoader::returning(800, 600, "jpeg", 50_000);
    let resolver = StubResolver::succeeding();
    let use_case = EnhanceImageUseCase::new(loader.clone(), resolver.clone());

    let response = use_case.execute(EnhanceImageRequest::new(bytes_source())).await;

    assert!(response.success, "unexpected error: {:?}", response.error);
    assert_eq!(
        response.enhanced_dimensions,
        Some(Dimensions::new(1600, 1200).unwrap())
    );
    let job = response.job.as_ref().expect("job in response");
    assert_eq!(job.status(), JobStatus::Completed);
    assert!(job.completed_at().is_some());
    assert_eq!(resolver.recorded_factors(), vec![2.0]);
    assert_eq!(loader.calls.load(Ordering::SeqCst), 1);
    assert!(
        response
            .enhanced_image_data
            .as_deref()
            .is_some_and(|data| data.ends_with(b"-enhanced"))
    );
}

#[tokio::test]
async fn loader_rejection_returns_failure_without_entities() {
    let resolver = StubResolver::succeeding();
    let use_case = EnhanceImageUseCase::new(
        StubLoader::failing("cannot read /missing.png"),
        resolver.clone(),
    );

    let response = use_case.execute(EnhanceImageRequest::new(bytes_source())).await;

    assert!(!response.success);
    assert_eq!(response.error.as_deref(), Some("cannot read /missing.png"));
    assert!(response.image.is_none());
    assert!(response.job.is_none());
    assert!(resolver.recorded_factors().is_empty());
}

#[tokio::test]
async fn resolver_rejection_fails_job_with_its_message() {
    let use_case = EnhanceImageUseCase::new(
        StubLoader::returning(800, 600, "jpeg", 50_000),
        StubResolver::failing("CUDA device lost"),
    );

    let response = use_case
        .execute(EnhanceImageRequest::new(bytes_source()).with_upscale_factor(1.5))
        .await;

    assert!(!response.success);
    assert_eq!(response.error.as_deref(), Some("CUDA device lost"));
    let job = response.job.as_ref().expect("job in response");
    assert_eq!(job.status(), JobStatus::Failed);
    assert_eq!(job.error_message(), Some("CUDA device lost"));
    assert!(response.image.is_some());
}

#[tokio::test]
async fn malformed_factor_skips_loading() {
    let loader = StubLoader::returning(800, 600, "jpeg", 50_000);
    let use_case = EnhanceImageUseCase::new(loader.clone(), StubResolver::succeeding());

    let response = use_case
        .execute(EnhanceImageRequest::new(bytes_source()).with_upscale_factor(f64::INFINITY))
        .await;

    assert!(!response.success);
    assert_eq!(loader.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn oversized_upload_is_rejected_before_job_creation() {
    let resolver = StubResolver::succeeding();
    let use_case = EnhanceImageUseCase::new(
        StubLoader::returning(800, 600, "png", 60 * 1024 * 1024),
        resolver.clone(),
    );

    let response = use_case.execute(EnhanceImageRequest::new(bytes_source())).await;

    assert!(!response.success);
    assert!(response.error.unwrap().contains("exceeds maximum"));
    assert!(response.job.is_none());
    assert!(resolver.recorded_factors().is_empty());
}

#[tokio::test]
async fn response_serializes_job_status() {
    let use_case = EnhanceImageUseCase::new(
        StubLoader::returning(320, 240, "WebP", 2_048),
        StubResolver::succeeding(),
    );

    let response = use_case.execute(EnhanceImageRequest::new(bytes_source())).await;
    let json = serde_json::to_value(&response).unwrap();

    assert_eq!(json["success"], true);
    assert_eq!(json["job"]["status"], "COMPLETED");
    assert_eq!(json["image"]["format"], "WebP");
    assert!(json.get("enhanced_image_data").is_none());
}
