//! Domain core for an image-enhancement workflow.
//!
//! Validated image metadata, a job state machine that tracks each
//! enhancement, and a use case that drives both through two injected
//! ports: one that loads images and one that performs super-resolution.

pub mod application;
pub mod config;
pub mod domain;
pub mod telemetry;
