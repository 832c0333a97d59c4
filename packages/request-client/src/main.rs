use std::process::ExitCode;

use serde_json::Value;
use thiserror::Error;
use tracing::info;

use request_client::{telemetry, ClientConfig, ClientError, ConfigError, RequestClient};

const USAGE: &str = "usage: request-client <endpoint> [key=value ...]";

#[derive(Debug, Error)]
enum AppError {
    #[error("telemetry initialization failed: {0}")]
    Telemetry(#[from] telemetry::TelemetryError),
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("{0}")]
    Usage(String),
    #[error(transparent)]
    Request(#[from] ClientError),
    #[error("failed to render response: {0}")]
    Render(#[from] serde_json::Error),
}

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("request-client: {error}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), AppError> {
    telemetry::init_tracing()?;

    let config = ClientConfig::from_env()?;
    let (endpoint, params) = parse_args(std::env::args().skip(1))?;

    info!(base_url = %config.base_url, endpoint = %endpoint, "fetching");

    let client: RequestClient<Value> = RequestClient::from_config(&config);
    let body = client.fetch(&endpoint, params).await?;

    println!("{}", serde_json::to_string_pretty(&body)?);
    Ok(())
}

fn parse_args<I>(mut args: I) -> Result<(String, Vec<(String, String)>), AppError>
where
    I: Iterator<Item = String>,
{
    let endpoint = args.next().ok_or_else(|| AppError::Usage(USAGE.to_string()))?;
    let params = args
        .map(|arg| match arg.split_once('=') {
            Some((key, value)) => Ok((key.to_string(), value.to_string())),
            None => Err(AppError::Usage(format!(
                "invalid parameter '{arg}', expected key=value\n{USAGE}"
            ))),
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok((endpoint, params))
}
