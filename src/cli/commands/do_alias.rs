use anyhow::{anyhow, Result};
use tracing::error;

use crate::domain::AliasError;
use crate::executor::CommandExecutor;
use crate::repository::AliasRepository;
use crate::App;

/// Execute an alias and return the exit code of the command
///
/// A command that runs and exits non-zero is not an error here; its exit
/// code is returned so the caller can propagate it.
pub async fn execute_do<R, E>(app: &App<R, E>, args: &[String]) -> Result<i32>
where
    R: AliasRepository,
    E: CommandExecutor,
{
    app.invoke(args).await.map_err(|err| {
        let (not_found, storage) = match err.downcast_ref::<AliasError>() {
            Some(AliasError::AliasNotFound { name }) => (Some(name.clone()), false),
            Some(AliasError::Storage { .. }) => (None, true),
            _ => (None, false),
        };

        if let Some(name) = not_found {
            error!(name = %name, "alias not found");
            anyhow!("alias '{name}' not found. Use 'mantrid alias list' to see available aliases")
        } else if storage {
            error!(error = %err, "failed to get alias");
            err.context("failed to get alias")
        } else {
            error!(error = %err, "failed to execute alias");
            err
        }
    })
}
