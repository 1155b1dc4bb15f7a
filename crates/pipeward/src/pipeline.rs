use serde::{Deserialize, Serialize};

use crate::event::Notifications;

/// Whether the pipeline should exist at all.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetState {
    #[default]
    Present,
    Absent,
}

/// The declared desired state of one pipeline.
///
/// `name` is treated as the lookup key. The control plane recommends names be
/// unique within an account but does not enforce it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesiredPipeline {
    pub name: String,
    pub input_bucket: String,
    /// Write-once: sent on create, never compared or resent on update.
    pub output_bucket: String,
    pub role: String,
    pub notifications: Notifications,
    pub target: TargetState,
}

/// A pipeline as the control plane reports it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemotePipeline {
    /// Assigned by the control plane at creation; immutable.
    pub id: String,
    pub name: String,
    pub input_bucket: String,
    pub output_bucket: String,
    pub role: String,
    pub notifications: Notifications,
}

/// The updatable subset of pipeline fields — the drift comparison happens
/// over exactly this projection. `output_bucket` has no field here, which is
/// what keeps it out of both the comparison and the update call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineSettings {
    pub name: String,
    pub input_bucket: String,
    pub role: String,
    pub notifications: Notifications,
}

impl DesiredPipeline {
    pub fn settings(&self) -> PipelineSettings {
        PipelineSettings {
            name: self.name.clone(),
            input_bucket: self.input_bucket.clone(),
            role: self.role.clone(),
            notifications: self.notifications.clone(),
        }
    }
}

impl RemotePipeline {
    pub fn settings(&self) -> PipelineSettings {
        PipelineSettings {
            name: self.name.clone(),
            input_bucket: self.input_bucket.clone(),
            role: self.role.clone(),
            notifications: self.notifications.clone(),
        }
    }
}

/// Result of one convergence run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Outcome {
    pub changed: bool,
    pub name: String,
    /// None only when the target was absent and nothing existed to delete.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}
