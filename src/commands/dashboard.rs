use iocraft::prelude::*;

use crate::api::HttpSupportClient;
use crate::config::Settings;
use crate::error::{DashError, Result};
use crate::logging::{self, LogTarget};
use crate::tui::Dashboard;

/// Open the fullscreen dashboard. Logs go to the configured log file while
/// the dashboard owns the terminal.
pub async fn cmd_dashboard(settings: &Settings) -> Result<()> {
    logging::init(&LogTarget::File(settings.log_file.clone()))?;
    tracing::info!("Opening dashboard against {}", settings.api_base);

    let client = HttpSupportClient::new(settings.api_base.clone())?;
    let endpoint = settings.api_base.to_string();

    element!(Dashboard(client: Some(client), endpoint))
        .fullscreen()
        .await
        .map_err(|e| DashError::Other(format!("TUI error: {e}")))
}
