use clap::Parser;
use eyre::Result;

mod args;
mod aws;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = args::Args::parse();
    let desired = args.desired()?;

    let region = args
        .region
        .as_deref()
        .ok_or_else(|| eyre::eyre!("region must be specified (--region or AWS_REGION)"))?;

    let config = aws::build_aws_config(region, args.profile.as_deref()).await;
    let identity = aws::validate_credentials(&config).await?;
    tracing::info!(account_id = %identity.account_id, region = %region, "credentials validated");

    let client = pipeward::EtClient::new(&config);
    let outcome = pipeward::converge(&client, &desired).await?;

    println!("{}", serde_json::to_string_pretty(&outcome)?);
    Ok(())
}
