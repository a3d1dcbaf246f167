use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("you need to specify version of the openapi-code-generator-cli to use or use latest to fetch most current one")]
    MissingVersion,
    #[error("invalid version '{0}': {1}")]
    InvalidVersionNotation(String, semver::Error),
}

#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("could not determine the user cache directory")]
    NoCacheDirectory,
    #[error("snapshot versions are not supported")]
    SnapshotNotSupported,
    #[error("no releases found")]
    NoReleasesFound,
    #[error("could not build http client: {0}")]
    ClientBuildFailed(reqwest::Error),
    #[error("http request failed: {0}")]
    HTTPFailed(reqwest::Error),
    #[error("bad status: {0}")]
    BadStatus(reqwest::StatusCode),
    #[error("download stalled: no data received for {0:?}")]
    DownloadStalled(std::time::Duration),
    #[error("could not read response body: {0}")]
    FailedResponseBytes(reqwest::Error),
    #[error("could not parse latest release info: {0}")]
    ParsingFailed(serde_json::Error),
    #[error("could not create parent directory {0}: {1}")]
    FailedToCreateDir(PathBuf, std::io::Error),
    #[error("could not create target: {0}")]
    FailedToCreateFile(std::io::Error),
    #[error("error while downloading release: {0}")]
    FailedToWriteFile(std::io::Error),
    #[error("could not move download into place at {0}: {1}")]
    FailedToPersistFile(PathBuf, std::io::Error),
    #[error("could not start '{0}': {1}")]
    FailedToSpawn(String, std::io::Error),
    #[error("Command finished with error: {0}")]
    RuntimeFailed(std::process::ExitStatus),
    #[error("could not relay runtime output: {0}")]
    FailedToRelayOutput(std::io::Error),
}

impl CommandError {
    /// Exit code the launcher should terminate with for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CommandError::RuntimeFailed(status) => status.code().unwrap_or(1),
            _ => 1,
        }
    }
}
