use aws_sdk_elastictranscoder::types;
use aws_sdk_elastictranscoder::Client;

use crate::api::{BoxFuture, PipelineApi};
use crate::error::{format_err_chain, ReconcileError};
use crate::event::Notifications;
use crate::pipeline::{DesiredPipeline, PipelineSettings, RemotePipeline};

/// Production [`PipelineApi`] over the Elastic Transcoder SDK client.
pub struct EtClient {
    client: Client,
}

impl EtClient {
    pub fn new(config: &aws_config::SdkConfig) -> Self {
        Self {
            client: Client::new(config),
        }
    }
}

impl PipelineApi for EtClient {
    fn list(&self) -> BoxFuture<'_, Result<Vec<RemotePipeline>, ReconcileError>> {
        Box::pin(async {
            let mut pipelines = Vec::new();
            let mut page_token = None;
            loop {
                let mut req = self.client.list_pipelines();
                if let Some(token) = &page_token {
                    req = req.page_token(token);
                }
                let resp = req
                    .send()
                    .await
                    .map_err(|e| ReconcileError::ListFailed(format_err_chain(&e)))?;

                pipelines.extend(resp.pipelines().iter().map(from_sdk_pipeline));

                match resp.next_page_token() {
                    Some(token) => page_token = Some(token.to_string()),
                    None => break,
                }
            }
            Ok(pipelines)
        })
    }

    fn create<'a>(
        &'a self,
        desired: &'a DesiredPipeline,
    ) -> BoxFuture<'a, Result<(), ReconcileError>> {
        Box::pin(async {
            self.client
                .create_pipeline()
                .name(&desired.name)
                .input_bucket(&desired.input_bucket)
                .output_bucket(&desired.output_bucket)
                .role(&desired.role)
                .notifications(to_sdk_notifications(&desired.notifications))
                .send()
                .await
                .map_err(|e| ReconcileError::CreateFailed(format_err_chain(&e)))?;

            tracing::info!(name = %desired.name, "pipeline created");
            Ok(())
        })
    }

    fn update<'a>(
        &'a self,
        id: &'a str,
        settings: &'a PipelineSettings,
    ) -> BoxFuture<'a, Result<(), ReconcileError>> {
        Box::pin(async move {
            self.client
                .update_pipeline()
                .id(id)
                .name(&settings.name)
                .input_bucket(&settings.input_bucket)
                .role(&settings.role)
                .notifications(to_sdk_notifications(&settings.notifications))
                .send()
                .await
                .map_err(|e| ReconcileError::UpdateFailed(format_err_chain(&e)))?;

            tracing::info!(id = %id, name = %settings.name, "pipeline updated");
            Ok(())
        })
    }

    fn delete<'a>(&'a self, id: &'a str) -> BoxFuture<'a, Result<(), ReconcileError>> {
        Box::pin(async move {
            self.client
                .delete_pipeline()
                .id(id)
                .send()
                .await
                .map_err(|e| ReconcileError::DeleteFailed(format_err_chain(&e)))?;

            tracing::info!(id = %id, "pipeline deleted");
            Ok(())
        })
    }
}

fn from_sdk_pipeline(p: &types::Pipeline) -> RemotePipeline {
    RemotePipeline {
        id: p.id().unwrap_or_default().to_string(),
        name: p.name().unwrap_or_default().to_string(),
        input_bucket: p.input_bucket().unwrap_or_default().to_string(),
        output_bucket: p.output_bucket().unwrap_or_default().to_string(),
        role: p.role().unwrap_or_default().to_string(),
        notifications: p
            .notifications()
            .map(from_sdk_notifications)
            .unwrap_or_default(),
    }
}

fn from_sdk_notifications(n: &types::Notifications) -> Notifications {
    Notifications {
        progressing: n.progressing().unwrap_or_default().to_string(),
        completed: n.completed().unwrap_or_default().to_string(),
        warning: n.warning().unwrap_or_default().to_string(),
        error: n.error().unwrap_or_default().to_string(),
    }
}

fn to_sdk_notifications(n: &Notifications) -> types::Notifications {
    types::Notifications::builder()
        .progressing(&n.progressing)
        .completed(&n.completed)
        .warning(&n.warning)
        .error(&n.error)
        .build()
}
