use crate::constants::{ARTIFACT_PREFIX, LATEST, SNAPSHOT_SUFFIX};
use crate::errors::{CommandError, ParseError};
use crate::types::Release;
use semver::Version;

pub struct Versions;
impl Versions {
    pub fn is_latest(version: &str) -> bool {
        version == LATEST
    }

    /// Picks the first stable release in API order, stripping the tag's `v` prefix.
    pub fn latest_stable(releases: &[Release]) -> Result<String, CommandError> {
        releases
            .iter()
            .find(|release| !release.prerelease)
            .map(|release| Self::from_tag(&release.tag_name))
            .ok_or(CommandError::NoReleasesFound)
    }

    pub fn from_tag(tag: &str) -> String {
        tag.strip_prefix('v').unwrap_or(tag).to_string()
    }

    /// Checks that a concrete version can be used to build a cache path and a download URL.
    pub fn validate(version: &str) -> Result<(), CommandError> {
        if version.ends_with(SNAPSHOT_SUFFIX) {
            return Err(CommandError::SnapshotNotSupported);
        }

        Version::parse(version)
            .map_err(|e| ParseError::InvalidVersionNotation(version.to_string(), e))?;

        Ok(())
    }

    pub fn artifact_name(version: &str) -> String {
        format!("{ARTIFACT_PREFIX}-{version}.jar")
    }

    /// `base` already points at the artifact's directory in the Maven repository.
    pub fn artifact_url(base: &str, version: &str) -> String {
        format!("{base}/{version}/{}", Self::artifact_name(version))
    }
}
