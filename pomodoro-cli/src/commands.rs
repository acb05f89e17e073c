//! Executes one CLI command against the daemon.

use pomodoro_core::parse_duration;

use crate::cli::Command;
use crate::client::Client;
use crate::config::ClientConfig;
use crate::error::CliError;
use crate::render;

/// Run `command` and return the line to print.
///
/// `None` runs `status`. A bad duration spec is reported before the daemon
/// is contacted.
///
/// # Errors
/// Returns [`CliError::Duration`] for an invalid spec and
/// [`CliError::Client`] if the daemon is unreachable or refuses.
pub async fn execute(
    command: Option<&Command>,
    config: &ClientConfig,
    client: &Client,
) -> Result<String, CliError> {
    match command {
        Some(Command::Start { duration }) => {
            let spec = duration.as_deref().unwrap_or(&config.default_duration);
            let duration = parse_duration(spec)
                .map_err(|source| CliError::Duration { spec: spec.to_owned(), source })?;
            tracing::debug!(spec, secs = duration.as_secs(), "starting session");
            Ok(render::started(&client.start(duration).await?))
        }
        Some(Command::Stop) => Ok(render::stopped(&client.stop().await?)),
        Some(Command::Pause) => Ok(render::paused(&client.pause().await?)),
        Some(Command::Resume) => Ok(render::resumed(&client.resume().await?)),
        Some(Command::Status) | None => Ok(render::status(client.status().await?.as_ref())),
    }
}
