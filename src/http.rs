use crate::constants::{CONNECT_TIMEOUT, REQUEST_TIMEOUT, USER_AGENT};
use crate::errors::CommandError;
use crate::types::Releases;
use bytes::Bytes;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use std::io::Write;
use std::time::Duration;
use tokio::time::timeout;

pub struct HttpRequest;
impl HttpRequest {
    /// No overall timeout: jar downloads are bounded per chunk instead.
    pub fn client() -> Result<Client, CommandError> {
        Client::builder()
            .user_agent(USER_AGENT)
            .connect_timeout(CONNECT_TIMEOUT)
            .build()
            .map_err(CommandError::ClientBuildFailed)
    }

    async fn send(request: RequestBuilder) -> Result<Response, CommandError> {
        let response = request.send().await.map_err(CommandError::HTTPFailed)?;

        if response.status() != StatusCode::OK {
            return Err(CommandError::BadStatus(response.status()));
        }

        Ok(response)
    }

    pub async fn get_bytes(client: &Client, url: &str) -> Result<Bytes, CommandError> {
        Self::send(client.get(url).timeout(REQUEST_TIMEOUT))
            .await?
            .bytes()
            .await
            .map_err(CommandError::FailedResponseBytes)
    }

    /// Streams the response body into `sink`, failing if no chunk arrives within `idle`.
    pub async fn download<W>(
        client: &Client,
        url: &str,
        sink: &mut W,
        idle: Duration,
    ) -> Result<u64, CommandError>
    where
        W: Write + Send,
    {
        let mut response = Self::send(client.get(url)).await?;
        let mut written = 0u64;

        loop {
            let chunk = match timeout(idle, response.chunk()).await {
                Ok(Ok(Some(chunk))) => chunk,
                Ok(Ok(None)) => break,
                Ok(Err(e)) => return Err(CommandError::FailedResponseBytes(e)),
                Err(_) => return Err(CommandError::DownloadStalled(idle)),
            };

            sink.write_all(&chunk)
                .map_err(CommandError::FailedToWriteFile)?;
            written += chunk.len() as u64;
        }

        Ok(written)
    }

    pub async fn releases(client: &Client, url: &str) -> Result<Releases, CommandError> {
        let body = Self::get_bytes(client, url).await?;
        serde_json::from_slice::<Releases>(&body).map_err(CommandError::ParsingFailed)
    }
}
