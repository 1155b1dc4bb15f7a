use clap::{Parser, ValueEnum};
use pipeward::{DesiredPipeline, Notifications, TargetState};

/// Converge an Elastic Transcoder pipeline to the declared state.
#[derive(Debug, Parser)]
#[command(name = "pipeward", version)]
pub struct Args {
    /// Pipeline name. Used as the lookup key; uniqueness is recommended but
    /// not enforced by the control plane.
    #[arg(long)]
    pub name: String,

    /// S3 bucket holding the media to transcode.
    #[arg(long, default_value = "")]
    pub input_bucket: String,

    /// S3 bucket for transcoded output. Only used at creation — it cannot
    /// be changed afterwards.
    #[arg(long, default_value = "")]
    pub output_bucket: String,

    /// IAM role ARN the transcoder assumes.
    #[arg(long, default_value = "")]
    pub role: String,

    /// SNS topic per event kind, as EVENT=TOPIC_ARN. EVENT is one of
    /// progressing, completed, warning, error (case-insensitive). May be
    /// repeated; unmentioned kinds get no topic.
    #[arg(long = "notify", value_name = "EVENT=TOPIC")]
    pub notify: Vec<String>,

    /// Whether the pipeline should exist.
    #[arg(long, value_enum, default_value = "present")]
    pub state: StateArg,

    /// AWS region.
    #[arg(long, env = "AWS_REGION")]
    pub region: Option<String>,

    /// Named AWS profile. Falls back to the default credential chain.
    #[arg(long)]
    pub profile: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StateArg {
    Present,
    Absent,
}

impl Args {
    /// Validate and assemble the desired pipeline state.
    pub fn desired(&self) -> eyre::Result<DesiredPipeline> {
        let mut pairs = Vec::with_capacity(self.notify.len());
        for raw in &self.notify {
            let (event, topic) = raw
                .split_once('=')
                .ok_or_else(|| eyre::eyre!("invalid --notify value {raw:?}, expected EVENT=TOPIC"))?;
            pairs.push((event, topic));
        }

        Ok(DesiredPipeline {
            name: self.name.clone(),
            input_bucket: self.input_bucket.clone(),
            output_bucket: self.output_bucket.clone(),
            role: self.role.clone(),
            notifications: Notifications::from_pairs(pairs)?,
            target: match self.state {
                StateArg::Present => TargetState::Present,
                StateArg::Absent => TargetState::Absent,
            },
        })
    }
}
