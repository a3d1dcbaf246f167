use crate::constants::{
    CACHE_DIR_ENV, CACHE_DIR_NAME, DOWNLOAD_URL, DOWNLOAD_URL_ENV, RELEASES_URL, RELEASES_URL_ENV,
    RUNTIME, RUNTIME_ENV,
};
use crate::errors::CommandError;
use std::env;
use std::path::{Path, PathBuf};

/// Where the launcher looks things up, with environment overrides applied.
#[derive(Debug, Clone)]
pub struct LauncherConfig {
    /// `None` when neither an override nor a user cache directory exists.
    pub cache_dir: Option<PathBuf>,
    pub runtime: String,
    pub releases_url: String,
    pub download_url: String,
}

impl LauncherConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let cache_dir = match lookup(CACHE_DIR_ENV) {
            Some(dir) => Some(PathBuf::from(dir)),
            None => dirs::cache_dir().map(|dir| dir.join(CACHE_DIR_NAME)),
        };

        Self {
            cache_dir,
            runtime: lookup(RUNTIME_ENV).unwrap_or_else(|| RUNTIME.to_string()),
            releases_url: lookup(RELEASES_URL_ENV).unwrap_or_else(|| RELEASES_URL.to_string()),
            download_url: lookup(DOWNLOAD_URL_ENV)
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DOWNLOAD_URL.to_string()),
        }
    }

    pub fn cache_dir(&self) -> Result<&Path, CommandError> {
        self.cache_dir
            .as_deref()
            .ok_or(CommandError::NoCacheDirectory)
    }
}
