//! Where the guest device keeps its bearer token.
//!
//! The chat front end asks a [`CredentialProvider`] for the current token
//! instead of reading a file directly.

use crate::domain::DeviceToken;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tokio::sync::RwLock;
use tracing::{debug, info};

#[async_trait::async_trait]
pub trait CredentialProvider: Send + Sync {
    /// The token currently held by the device, if any.
    async fn current_token(&self) -> Result<Option<DeviceToken>>;

    /// Replaces the held token (check-in rotates it).
    async fn store_token(&self, token: &DeviceToken) -> Result<()>;

    /// Forgets the held token (check-out invalidates it).
    async fn clear_token(&self) -> Result<()>;
}

/// Keeps the token as the sole content of a local file.
pub struct FileCredentialProvider {
    path: PathBuf,
}

impl FileCredentialProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait::async_trait]
impl CredentialProvider for FileCredentialProvider {
    async fn current_token(&self) -> Result<Option<DeviceToken>> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No device token file");
                return Ok(None);
            }
            Err(e) => {
                return Err(e).with_context(|| {
                    format!("Failed to read device token file: {}", self.path.display())
                });
            }
        };

        Ok(content.parse::<DeviceToken>().ok())
    }

    async fn store_token(&self, token: &DeviceToken) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        tokio::fs::write(&self.path, token.as_str())
            .await
            .with_context(|| {
                format!("Failed to write device token file: {}", self.path.display())
            })?;

        info!(path = %self.path.display(), "Device token stored");
        Ok(())
    }

    async fn clear_token(&self) -> Result<()> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => {
                info!(path = %self.path.display(), "Device token removed");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e).with_context(|| {
                format!("Failed to remove device token file: {}", self.path.display())
            }),
        }
    }
}

/// Holds the token in memory. Used for `--token` overrides and in tests.
#[derive(Default)]
pub struct StaticCredentialProvider {
    token: RwLock<Option<DeviceToken>>,
}

impl StaticCredentialProvider {
    #[must_use]
    pub fn new(token: Option<DeviceToken>) -> Self {
        Self {
            token: RwLock::new(token),
        }
    }
}

#[async_trait::async_trait]
impl CredentialProvider for StaticCredentialProvider {
    async fn current_token(&self) -> Result<Option<DeviceToken>> {
        Ok(self.token.read().await.clone())
    }

    async fn store_token(&self, token: &DeviceToken) -> Result<()> {
        *self.token.write().await = Some(token.clone());
        Ok(())
    }

    async fn clear_token(&self) -> Result<()> {
        *self.token.write().await = None;
        Ok(())
    }
}
