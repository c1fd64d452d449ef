use super::types::ModelArtifact;
use crate::{Error, Result, config::RegistryConfig};
use async_trait::async_trait;
use futures::StreamExt;
use std::{
    path::{Path, PathBuf},
    time::Duration,
};
use tokio::io::AsyncWriteExt;
use tracing::{debug, info, warn};

/// Resolves a model artifact to a local file, fetching it when needed.
#[async_trait]
pub trait ModelRegistry: Send + Sync {
    async fn resolve(&self, artifact: &ModelArtifact) -> Result<PathBuf>;
}

/// Hugging Face Hub style registry: files are served at
/// `{endpoint}/{repo_id}/resolve/{revision}/{file_name}`.
///
/// `timeout_secs` bounds connecting and each read of the body, not the
/// whole transfer.
pub struct HuggingFaceRegistry {
    endpoint: String,
    cache_dir: PathBuf,
    token: Option<String>,
    client: reqwest::Client,
}

impl HuggingFaceRegistry {
    pub fn new(config: &RegistryConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if config.timeout_secs > 0 {
            let timeout = Duration::from_secs(config.timeout_secs);
            builder = builder.connect_timeout(timeout).read_timeout(timeout);
        }

        Ok(Self {
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            cache_dir: PathBuf::from(&config.cache_dir),
            token: config.token.clone(),
            client: builder.build()?,
        })
    }

    pub fn download_url(&self, artifact: &ModelArtifact) -> String {
        format!(
            "{}/{}/resolve/{}/{}",
            self.endpoint, artifact.repo_id, artifact.revision, artifact.file_name
        )
    }

    pub fn cached_path(&self, artifact: &ModelArtifact) -> PathBuf {
        self.cache_dir
            .join(artifact.repo_id.replace('/', "--"))
            .join(&artifact.file_name)
    }

    async fn download(&self, artifact: &ModelArtifact, target: &Path) -> Result<()> {
        let url = self.download_url(artifact);
        info!("Downloading model artifact from {}", url);

        let mut request = self.client.get(&url);
        if let Some(ref token) = self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        if !response.status().is_success() {
            return Err(Error::registry(format!(
                "{} returned HTTP {}",
                url,
                response.status()
            )));
        }

        let partial = target.with_extension("part");
        let written = match write_body(response, &partial).await {
            Ok(written) => written,
            Err(e) => {
                let _ = tokio::fs::remove_file(&partial).await;
                return Err(e);
            }
        };

        if written == 0 {
            let _ = tokio::fs::remove_file(&partial).await;
            return Err(Error::registry(format!("{} returned an empty body", url)));
        }

        tokio::fs::rename(&partial, target).await?;
        info!("Model artifact stored at {} ({} bytes)", target.display(), written);
        Ok(())
    }
}

#[async_trait]
impl ModelRegistry for HuggingFaceRegistry {
    async fn resolve(&self, artifact: &ModelArtifact) -> Result<PathBuf> {
        validate_artifact(artifact)?;

        let target = self.cached_path(artifact);
        if let Ok(metadata) = tokio::fs::metadata(&target).await {
            if metadata.is_file() && metadata.len() > 0 {
                debug!("Using cached model artifact: {}", target.display());
                return Ok(target);
            }
            warn!("Ignoring empty cached artifact: {}", target.display());
        }

        if let Some(parent) = target.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        self.download(artifact, &target).await?;
        Ok(target)
    }
}

async fn write_body(response: reqwest::Response, partial: &Path) -> Result<u64> {
    let mut file = tokio::fs::File::create(partial).await?;
    let mut written: u64 = 0;
    let mut body = response.bytes_stream();
    while let Some(chunk) = body.next().await {
        let chunk = chunk?;
        file.write_all(&chunk).await?;
        written += chunk.len() as u64;
    }
    file.flush().await?;
    Ok(written)
}

fn validate_artifact(artifact: &ModelArtifact) -> Result<()> {
    if artifact.repo_id.trim().is_empty() || artifact.file_name.trim().is_empty() {
        return Err(Error::registry("repo_id and file_name must be set"));
    }
    let escapes = |s: &str| s.split('/').any(|part| part == ".." || part == ".");
    if escapes(&artifact.repo_id) || artifact.file_name.contains('/') || escapes(&artifact.file_name)
    {
        return Err(Error::registry(format!(
            "Invalid artifact path: {}/{}",
            artifact.repo_id, artifact.file_name
        )));
    }
    Ok(())
}
