use crate::domain::image::{entity::Image, value_objects::Dimensions};
use crate::domain::shared::errors::DomainError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Lifecycle of an enhancement job.
///
/// `Pending -> InProgress -> Completed | Failed`. Both end states are
/// terminal and no state may be skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
    Failed,
}

impl JobStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::Pending => "PENDING",
            JobStatus::InProgress => "IN_PROGRESS",
            JobStatus::Completed => "COMPLETED",
            JobStatus::Failed => "FAILED",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, JobStatus::Completed | JobStatus::Failed)
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tracks one enhancement of one [`Image`].
///
/// # Invariants
/// - `enhanced_dimensions` and `processing_time_ms` are set iff the job is
///   `Completed`
/// - `error_message` is set iff the job is `Failed`
/// - `completed_at` is set iff the job is in a terminal state
///
/// Fields are private and change only through the transition methods, which
/// is what keeps the invariants above.
#[derive(Debug, Clone, Serialize)]
pub struct ProcessingJob {
    id: String,
    image: Arc<Image>,
    status: JobStatus,
    enhanced_dimensions: Option<Dimensions>,
    processing_time_ms: Option<u64>,
    error_message: Option<String>,
    created_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
}

impl ProcessingJob {
    /// Creates a `Pending` job for `image`.
    pub fn new(id: impl Into<String>, image: Arc<Image>) -> Self {
        Self {
            id: id.into(),
            image,
            status: JobStatus::Pending,
            enhanced_dimensions: None,
            processing_time_ms: None,
            error_message: None,
            created_at: Utc::now(),
            completed_at: None,
        }
    }

    /// `Pending -> InProgress`.
    pub fn start_processing(&mut self) -> Result<(), DomainError> {
        self.ensure_status(JobStatus::Pending, "start")?;
        self.transition(JobStatus::InProgress);
        Ok(())
    }

    /// `InProgress -> Completed`, recording the result.
    pub fn complete_successfully(
        &mut self,
        enhanced_dimensions: Dimensions,
        processing_time_ms: u64,
    ) -> Result<(), DomainError> {
        self.ensure_status(JobStatus::InProgress, "complete")?;
        self.enhanced_dimensions = Some(enhanced_dimensions);
        self.processing_time_ms = Some(processing_time_ms);
        self.completed_at = Some(Utc::now());
        self.transition(JobStatus::Completed);
        Ok(())
    }

    /// `InProgress -> Failed`, recording why.
    pub fn fail(&mut self, error_message: impl Into<String>) -> Result<(), DomainError> {
        self.ensure_status(JobStatus::InProgress, "fail")?;
        self.error_message = Some(error_message.into());
        self.completed_at = Some(Utc::now());
        self.transition(JobStatus::Failed);
        Ok(())
    }

    fn ensure_status(&self, expected: JobStatus, action: &'static str) -> Result<(), DomainError> {
        if self.status != expected {
            return Err(DomainError::InvalidTransition {
                from: self.status,
                action,
            });
        }
        Ok(())
    }

    fn transition(&mut self, to: JobStatus) {
        debug!(job_id = %self.id, from = %self.status, to = %to, "Job status changed");
        self.status = to;
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn image(&self) -> &Arc<Image> {
        &self.image
    }

    pub fn status(&self) -> JobStatus {
        self.status
    }

    pub fn enhanced_dimensions(&self) -> Option<Dimensions> {
        self.enhanced_dimensions
    }

    pub fn processing_time_ms(&self) -> Option<u64> {
        self.processing_time_ms
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// Returns a copy of the creation instant.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns a copy of the completion instant, if the job has ended.
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    pub fn is_in_progress(&self) -> bool {
        self.status == JobStatus::InProgress
    }

    pub fn is_completed(&self) -> bool {
        self.status == JobStatus::Completed
    }

    pub fn has_failed(&self) -> bool {
        self.status == JobStatus::Failed
    }

    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }
}
