use std::future::Future;
use std::pin::Pin;

use crate::error::ReconcileError;
use crate::pipeline::{DesiredPipeline, PipelineSettings, RemotePipeline};

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Thin seam over the transcoder control plane.
///
/// [`crate::EtClient`] is the production implementation; tests drive the
/// reconciler against an in-memory fake. Every call is a single remote
/// round-trip — no retries, failures surface verbatim.
pub trait PipelineApi: Send + Sync {
    /// All pipelines in the account, in list order.
    fn list(&self) -> BoxFuture<'_, Result<Vec<RemotePipeline>, ReconcileError>>;

    /// Create a pipeline from the desired state. The assigned id is obtained
    /// by re-listing afterwards, not returned here.
    fn create<'a>(
        &'a self,
        desired: &'a DesiredPipeline,
    ) -> BoxFuture<'a, Result<(), ReconcileError>>;

    /// Update the pipeline with the given id wholesale. The settings type
    /// carries no output bucket, so one can never be resent.
    fn update<'a>(
        &'a self,
        id: &'a str,
        settings: &'a PipelineSettings,
    ) -> BoxFuture<'a, Result<(), ReconcileError>>;

    /// Delete the pipeline with the given id.
    fn delete<'a>(&'a self, id: &'a str) -> BoxFuture<'a, Result<(), ReconcileError>>;
}
