//! pipeward
//!
//! Converges a single AWS Elastic Transcoder pipeline to a declared desired
//! state. Each run is a fresh, idempotent convergence attempt — the remote
//! control plane is the sole source of truth, nothing is persisted locally.
//!
//! Public API:
//! - `find()` — look up an existing pipeline by name
//! - `converge()` — dispatch on target state (present/absent)
//! - `converge_present()` — create or update until settings match
//! - `converge_absent()` — delete if the pipeline exists
//!
//! Remote calls go through the [`PipelineApi`] seam; [`EtClient`] is the
//! production implementation over the AWS SDK.

pub mod api;
pub mod client;
pub mod error;
pub mod event;
pub mod pipeline;
pub mod reconcile;

pub use crate::api::PipelineApi;
pub use crate::client::EtClient;
pub use crate::error::ReconcileError;
pub use crate::event::{EventKind, Notifications};
pub use crate::pipeline::{
    DesiredPipeline, Outcome, PipelineSettings, RemotePipeline, TargetState,
};
pub use crate::reconcile::{converge, converge_absent, converge_present, find};
