use std::time::Duration;

pub const RELEASES_URL: &str = "https://api.github.com/repos/openapitools/openapi-generator/releases";

pub const DOWNLOAD_URL: &str =
    "https://search.maven.org/remotecontent?filepath=org/openapitools/openapi-generator-cli";

pub const CACHE_DIR_NAME: &str = ".openapi-codegenerator-cli";

pub const ARTIFACT_PREFIX: &str = "openapi-generator-cli";

pub const RUNTIME: &str = "java";

pub const LATEST: &str = "latest";

pub const SNAPSHOT_SUFFIX: &str = "-SNAPSHOT";

pub const USER_AGENT: &str = concat!("openapi-generator-launcher/", env!("CARGO_PKG_VERSION"));

pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(30);

/// Upper bound for small metadata requests such as the release listing.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Longest gap between two body chunks before a download counts as stalled.
pub const DOWNLOAD_IDLE_TIMEOUT: Duration = Duration::from_secs(300);

pub const CACHE_DIR_ENV: &str = "OPENAPI_GENERATOR_CLI_CACHE_DIR";
pub const RUNTIME_ENV: &str = "OPENAPI_GENERATOR_CLI_JAVA";
pub const RELEASES_URL_ENV: &str = "OPENAPI_GENERATOR_CLI_RELEASES_URL";
pub const DOWNLOAD_URL_ENV: &str = "OPENAPI_GENERATOR_CLI_DOWNLOAD_URL";
