//! Implements SharePort for a terminal session.
//!
//! Prints the message and, when a share directory is configured, appends it to
//! `<share_dir>/shared.txt` so it can be picked up by another program.

use crate::domain::DomainError;
use crate::ports::SharePort;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::info;

const SHARE_FILE: &str = "shared.txt";

pub struct ConsoleShare {
    share_dir: Option<PathBuf>,
}

impl ConsoleShare {
    pub fn new(share_dir: Option<impl AsRef<Path>>) -> Self {
        Self {
            share_dir: share_dir.map(|p| p.as_ref().to_path_buf()),
        }
    }

    async fn append(dir: &Path, message: &str) -> Result<PathBuf, DomainError> {
        fs::create_dir_all(dir)
            .await
            .map_err(|e| DomainError::Share(format!("create share dir: {}", e)))?;
        let path = dir.join(SHARE_FILE);
        let mut f = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .await
            .map_err(|e| DomainError::Share(format!("open {}: {}", path.display(), e)))?;
        f.write_all(message.as_bytes())
            .await
            .map_err(|e| DomainError::Share(e.to_string()))?;
        f.write_all(b"\n\n")
            .await
            .map_err(|e| DomainError::Share(e.to_string()))?;
        f.flush()
            .await
            .map_err(|e| DomainError::Share(e.to_string()))?;
        Ok(path)
    }
}

#[async_trait::async_trait]
impl SharePort for ConsoleShare {
    async fn share(&self, message: &str) -> Result<(), DomainError> {
        println!("\n{}\n", message);
        if let Some(dir) = &self.share_dir {
            let path = Self::append(dir, message).await?;
            info!(path = %path.display(), "shared message written");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_appends_each_share() {
        let dir = tempfile::tempdir().unwrap();
        let share = ConsoleShare::new(Some(dir.path()));

        share.share("first").await.unwrap();
        share.share("second").await.unwrap();

        let written = std::fs::read_to_string(dir.path().join(SHARE_FILE)).unwrap();
        assert_eq!(written, "first\n\nsecond\n\n");
    }

    #[tokio::test]
    async fn test_without_dir_only_prints() {
        let share = ConsoleShare::new(None::<&Path>);
        share.share("hello").await.unwrap();
    }
}
