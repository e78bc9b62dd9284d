//! # Story store
//!
//! Stories live as individual files in one uploads directory, named
//! `story_<16-char-stem>.txt`. The directory doubles as the index: listing
//! it is the only enumeration, and entry order follows whatever the
//! filesystem returns, so callers must not rely on it being stable.

use std::{
    io::ErrorKind,
    path::{Component, Path, PathBuf},
};

use tokio::fs;

use crate::{error::AppError, naming};

/// Filename prefix that marks a directory entry as a story.
pub const STORY_PREFIX: &str = "story_";

const STORY_EXTENSION: &str = "txt";

pub struct StoryStore {
    root: PathBuf,
}

impl StoryStore {
    /// Open the store rooted at `root`, creating the directory if absent.
    pub async fn open(root: &Path) -> Result<Self, AppError> {
        fs::create_dir_all(root).await?;

        Ok(Self {
            root: root.to_path_buf(),
        })
    }

    /// Persist `content` verbatim under a freshly generated name and
    /// return that name.
    pub async fn create(&self, content: &str) -> Result<String, AppError> {
        let name = format!(
            "{STORY_PREFIX}{}",
            naming::generate(naming::STEM_LENGTH, STORY_EXTENSION)
        );

        fs::write(self.root.join(&name), content).await?;

        Ok(name)
    }

    /// Read a story back by name. The name must be a plain single-component
    /// filename; anything that could step outside the store directory is
    /// rejected before the filesystem is touched.
    pub async fn read(&self, name: &str) -> Result<String, AppError> {
        if !is_plain_filename(name) {
            return Err(AppError::InvalidName);
        }

        match fs::read_to_string(self.root.join(name)).await {
            Ok(content) => Ok(content),
            Err(err) if err.kind() == ErrorKind::NotFound => {
                Err(AppError::NotFound(name.to_string()))
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Names of every story in the directory, in filesystem order.
    pub async fn list(&self) -> Result<Vec<String>, AppError> {
        let mut names = Vec::new();
        let mut entries = fs::read_dir(&self.root).await?;

        while let Some(entry) = entries.next_entry().await? {
            if let Some(name) = entry.file_name().to_str() {
                if name.starts_with(STORY_PREFIX) {
                    names.push(name.to_string());
                }
            }
        }

        Ok(names)
    }
}

fn is_plain_filename(name: &str) -> bool {
    if name.is_empty() || name.contains(['/', '\\']) {
        return false;
    }

    let mut components = Path::new(name).components();

    matches!(components.next(), Some(Component::Normal(_))) && components.next().is_none()
}
