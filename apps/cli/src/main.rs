//! Command-line front end printing campaign request artifacts.

#![forbid(unsafe_code)]

mod cli_command;

use std::env;
use std::sync::Arc;

use mcamp_application::CampaignRequestService;
use mcamp_core::{AppError, AppResult};
use mcamp_infrastructure::{EnvClientStateSource, TracingDiagnosticSink};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::cli_command::CliCommand;

fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    init_tracing();

    let command = CliCommand::parse(env::args().skip(1))?;
    let service = CampaignRequestService::new(
        Arc::new(EnvClientStateSource::new()),
        Arc::new(TracingDiagnosticSink::new()),
    );

    match command {
        CliCommand::Profile { attributes } => {
            let request =
                require_built("profile request", service.profile_request(Some(&attributes)))?;

            info!(
                attribute_count = attributes.len(),
                host = %request.url.host(),
                "built profile request"
            );
            println!("{}", request.url);
            println!("{}", request.body);
        }
        CliCommand::Track {
            broadlog_id,
            delivery_id,
            action,
        } => {
            let url = require_built(
                "tracking URL",
                service.tracking_url(broadlog_id.as_str(), delivery_id.as_str(), action.as_str()),
            )?;

            info!(action = %action, host = %url.host(), "built tracking URL");
            println!("{url}");
        }
    }

    Ok(())
}

/// The diagnostic sink has already logged why the artifact is missing.
fn require_built<T>(artifact: &str, value: Option<T>) -> AppResult<T> {
    value.ok_or_else(|| AppError::Internal(format!("{artifact} could not be built")))
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}
