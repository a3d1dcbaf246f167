use crate::cache::Cache;
use crate::command_handler::CommandHandler;
use crate::config::LauncherConfig;
use crate::constants::DOWNLOAD_IDLE_TIMEOUT;
use crate::errors::{CommandError, ParseError};
use crate::http::HttpRequest;
use crate::runner::Runner;
use crate::versions::Versions;
use async_trait::async_trait;
use log::{debug, info};
use reqwest::Client;
use std::path::PathBuf;

pub struct LaunchHandler {
    config: LauncherConfig,
    version: String,
    forwarded: Vec<String>,
}

impl LaunchHandler {
    pub fn new(config: LauncherConfig) -> Self {
        Self {
            config,
            version: String::new(),
            forwarded: Vec::new(),
        }
    }

    async fn resolve_version(&self, client: &Client) -> Result<String, CommandError> {
        if !Versions::is_latest(&self.version) {
            return Ok(self.version.clone());
        }

        info!("Looking up the latest release ...");
        let releases = HttpRequest::releases(client, &self.config.releases_url).await?;
        let version = Versions::latest_stable(&releases)?;
        info!("Latest release is {version}");

        Ok(version)
    }

    /// Resolves the requested version and makes sure its jar is in the cache.
    pub async fn prepare(&self, client: &Client) -> Result<PathBuf, CommandError> {
        let version = self.resolve_version(client).await?;
        Versions::validate(&version)?;

        let cache = Cache::new(self.config.cache_dir()?);
        let artifact = cache.artifact_path(&version);

        if Cache::is_cached(&artifact) {
            debug!("Using cached {}", artifact.display());
            return Ok(artifact);
        }

        let url = Versions::artifact_url(&self.config.download_url, &version);
        info!("Downloading openapi-generator-cli {version} from {url}");
        let mut partial = cache.begin(&artifact)?;
        let size = HttpRequest::download(client, &url, &mut partial, DOWNLOAD_IDLE_TIMEOUT).await?;
        let artifact = partial.commit()?;
        info!("Saved {} ({size} bytes)", artifact.display());

        Ok(artifact)
    }
}

#[async_trait]
impl CommandHandler for LaunchHandler {
    fn parse(&mut self, args: &mut dyn Iterator<Item = String>) -> Result<(), ParseError> {
        self.version = args.next().ok_or(ParseError::MissingVersion)?;
        self.forwarded = args.collect();

        Ok(())
    }

    async fn execute(&self) -> Result<(), CommandError> {
        let client = HttpRequest::client()?;
        let artifact = self.prepare(&client).await?;

        Runner::run(&self.config.runtime, &artifact, &self.forwarded).await
    }
}
