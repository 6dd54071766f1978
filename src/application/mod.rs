// SPDX-License-Identifier: MPL-2.0
//! Application layer - Use cases and orchestration.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//! - [`pipeline`]: The transcode-then-upload use case
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - Presentation layer drives the pipeline through Iced tasks

pub mod pipeline;
pub mod port;

pub use pipeline::{Pipeline, PipelineError, PipelineOutcome};
