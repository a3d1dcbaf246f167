use crate::errors::CommandError;
use crate::versions::Versions;
use log::debug;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Directory holding one downloaded jar per version.
pub struct Cache {
    root: PathBuf,
}

impl Cache {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn artifact_path(&self, version: &str) -> PathBuf {
        self.root.join(Versions::artifact_name(version))
    }

    /// A directory sitting at the artifact path does not count.
    pub fn is_cached(path: &Path) -> bool {
        path.metadata().map(|meta| !meta.is_dir()).unwrap_or(false)
    }

    /// Opens a temp file next to `target`; nothing is visible at `target` until commit.
    pub fn begin(&self, target: &Path) -> Result<PartialArtifact, CommandError> {
        let parent = target.parent().unwrap_or(self.root());
        std::fs::create_dir_all(parent)
            .map_err(|e| CommandError::FailedToCreateDir(parent.to_path_buf(), e))?;

        let file = NamedTempFile::new_in(parent).map_err(CommandError::FailedToCreateFile)?;

        Ok(PartialArtifact {
            file,
            target: target.to_path_buf(),
        })
    }
}

/// A download in progress. Dropping it without committing removes the temp file.
pub struct PartialArtifact {
    file: NamedTempFile,
    target: PathBuf,
}

impl PartialArtifact {
    pub fn commit(self) -> Result<PathBuf, CommandError> {
        self.file
            .as_file()
            .sync_all()
            .map_err(CommandError::FailedToWriteFile)?;

        debug!("Moving {} into {}", self.file.path().display(), self.target.display());
        self.file
            .persist(&self.target)
            .map_err(|e| CommandError::FailedToPersistFile(self.target.clone(), e.error))?;

        Ok(self.target)
    }
}

impl Write for PartialArtifact {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.file.write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.file.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn artifact_path_is_inside_root() {
        let cache = Cache::new("/var/cache/launcher");

        assert_eq!(
            cache.artifact_path("7.0.1"),
            PathBuf::from("/var/cache/launcher/openapi-generator-cli-7.0.1.jar")
        );
    }

    #[test]
    fn only_files_count_as_cached() {
        let dir = tempfile::tempdir().unwrap();
        let cache = Cache::new(dir.path());

        let missing = cache.artifact_path("7.0.0");
        assert!(!Cache::is_cached(&missing));

        let directory = cache.artifact_path("7.0.1");
        std::fs::create_dir_all(&directory).unwrap();
        assert!(!Cache::is_cached(&directory));

        let file = cache.artifact_path("7.0.2");
        std::fs::write(&file, b"jar").unwrap();
        assert!(Cache::is_cached(&file));
    }

    #[test]
    fn commit_creates_missing_root() {
        let dir = tempfile::tempdir().unwrap();
        let cache = Cache::new(dir.path().join("nested").join("cache"));
        let target = cache.artifact_path("7.0.1");

        let mut partial = cache.begin(&target).unwrap();
        partial.write_all(b"PK\x03").unwrap();
        partial.write_all(b"\x04").unwrap();
        assert!(!Cache::is_cached(&target));

        assert_eq!(partial.commit().unwrap(), target);
        assert!(Cache::is_cached(&target));
        assert_eq!(std::fs::read(&target).unwrap(), b"PK\x03\x04");
        assert_eq!(std::fs::read_dir(cache.root()).unwrap().count(), 1);
    }

    #[test]
    fn commit_replaces_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let cache = Cache::new(dir.path());
        let target = cache.artifact_path("7.0.1");
        std::fs::write(&target, b"truncated").unwrap();

        let mut partial = cache.begin(&target).unwrap();
        partial.write_all(b"complete").unwrap();
        partial.commit().unwrap();

        assert_eq!(std::fs::read(&target).unwrap(), b"complete");
    }

    #[test]
    fn abandoned_download_leaves_no_files() {
        let dir = tempfile::tempdir().unwrap();
        let cache = Cache::new(dir.path());
        let target = cache.artifact_path("7.0.1");

        let mut partial = cache.begin(&target).unwrap();
        partial.write_all(b"half a jar").unwrap();
        drop(partial);

        assert!(!Cache::is_cached(&target));
        assert_eq!(std::fs::read_dir(cache.root()).unwrap().count(), 0);
    }
}
