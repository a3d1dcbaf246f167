use serde::Deserialize;

/// One entry of the GitHub releases listing. Everything else in the payload is ignored.
#[derive(Debug, Deserialize)]
pub struct Release {
    pub tag_name: String,
    #[serde(default)]
    pub prerelease: bool,
}

pub type Releases = Vec<Release>;
