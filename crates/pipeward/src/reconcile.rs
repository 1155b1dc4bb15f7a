use crate::api::PipelineApi;
use crate::error::ReconcileError;
use crate::pipeline::{DesiredPipeline, Outcome, RemotePipeline, TargetState};

/// Look up a pipeline by name: list everything, take the first exact match.
///
/// The control plane permits duplicate names; when duplicates exist the
/// first in list order wins and no further tie-break is guaranteed.
pub async fn find(
    api: &dyn PipelineApi,
    name: &str,
) -> Result<Option<RemotePipeline>, ReconcileError> {
    Ok(api.list().await?.into_iter().find(|p| p.name == name))
}

/// Dispatch on the desired target state.
pub async fn converge(
    api: &dyn PipelineApi,
    desired: &DesiredPipeline,
) -> Result<Outcome, ReconcileError> {
    match desired.target {
        TargetState::Present => converge_present(api, desired).await,
        TargetState::Absent => converge_absent(api, desired).await,
    }
}

/// Create or update until the remote pipeline matches the desired settings.
///
/// The comparison runs over the settings projection only — an output bucket
/// that differs remotely never triggers an update. Updates are wholesale,
/// not field-level patches.
pub async fn converge_present(
    api: &dyn PipelineApi,
    desired: &DesiredPipeline,
) -> Result<Outcome, ReconcileError> {
    match find(api, &desired.name).await? {
        None => {
            tracing::info!(name = %desired.name, "pipeline missing, creating");
            api.create(desired).await?;

            // Re-fetch for the assigned id.
            let created = find(api, &desired.name).await?.ok_or_else(|| {
                ReconcileError::CreatedButNotFound {
                    name: desired.name.clone(),
                }
            })?;

            Ok(Outcome {
                changed: true,
                name: created.name,
                id: Some(created.id),
            })
        }
        Some(existing) if existing.settings() == desired.settings() => {
            tracing::info!(name = %existing.name, id = %existing.id, "pipeline in sync, no changes needed");
            Ok(Outcome {
                changed: false,
                name: existing.name,
                id: Some(existing.id),
            })
        }
        Some(existing) => {
            tracing::info!(name = %existing.name, id = %existing.id, "pipeline drifted, updating");
            api.update(&existing.id, &desired.settings()).await?;
            Ok(Outcome {
                changed: true,
                name: existing.name,
                id: Some(existing.id),
            })
        }
    }
}

/// Delete the pipeline if it exists.
pub async fn converge_absent(
    api: &dyn PipelineApi,
    desired: &DesiredPipeline,
) -> Result<Outcome, ReconcileError> {
    match find(api, &desired.name).await? {
        None => Ok(Outcome {
            changed: false,
            name: desired.name.clone(),
            id: None,
        }),
        Some(existing) => {
            tracing::info!(name = %existing.name, id = %existing.id, "pipeline present, deleting");
            api.delete(&existing.id).await?;
            Ok(Outcome {
                changed: true,
                name: existing.name,
                id: Some(existing.id),
            })
        }
    }
}
