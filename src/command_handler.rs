use crate::config::LauncherConfig;
use crate::errors::{CommandError, ParseError};
use crate::handlers::launch::LaunchHandler;
use async_trait::async_trait;

#[async_trait]
pub trait CommandHandler {
    fn parse(&mut self, args: &mut dyn Iterator<Item = String>) -> Result<(), ParseError>;
    async fn execute(&self) -> Result<(), CommandError>;
}

/// Skips the program name, then parses and runs the launch command.
pub async fn handle_args<I>(args: I, config: LauncherConfig) -> Result<(), CommandError>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    args.next();

    let mut command_handler: Box<dyn CommandHandler + Send + Sync> =
        Box::new(LaunchHandler::new(config));

    command_handler.parse(&mut args)?;
    command_handler.execute().await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_without_cache_dir() -> LauncherConfig {
        LauncherConfig {
            cache_dir: None,
            runtime: "java".to_string(),
            releases_url: "http://127.0.0.1:9".to_string(),
            download_url: "http://127.0.0.1:9".to_string(),
        }
    }

    #[tokio::test]
    async fn program_name_alone_asks_for_a_version() {
        let result = handle_args(vec!["openapi-generator-cli".to_string()], config_without_cache_dir()).await;

        assert!(matches!(
            result,
            Err(CommandError::Parse(ParseError::MissingVersion))
        ));
        assert!(result
            .unwrap_err()
            .to_string()
            .starts_with("you need to specify version"));
    }

    #[tokio::test]
    async fn first_argument_after_program_name_is_the_version() {
        // A snapshot version fails validation before any cache or network access.
        let args = vec![
            "openapi-generator-cli".to_string(),
            "7.1.0-SNAPSHOT".to_string(),
            "generate".to_string(),
        ];

        let result = handle_args(args, config_without_cache_dir()).await;

        assert!(matches!(result, Err(CommandError::SnapshotNotSupported)));
    }
}
