// Member QA Entry Point
// Fetches member messages per request and answers questions about them.

use member_qa::config::AppConfig;
use member_qa::{server, telemetry};
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load()?;
    telemetry::init(config.log_format);

    info!("Starting member-qa v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = server::run(config).await {
        error!("Server exited with error: {:#}", e);
        return Err(e);
    }

    Ok(())
}
