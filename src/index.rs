use serde::Deserialize;

use crate::error::NetworkError;

pub const DEFAULT_MIRROR: &str = "https://nodejs.org/dist";

/// The `lts` field of a release: `false` for current releases, the LTS
/// codename (e.g. "Iron") otherwise.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Lts {
    Flag(bool),
    Codename(String),
    #[default]
    Missing,
}

impl Lts {
    pub fn is_lts(&self) -> bool {
        match self {
            Lts::Flag(flag) => *flag,
            Lts::Codename(name) => !name.is_empty(),
            Lts::Missing => false,
        }
    }
}

/// One entry of `index.json`. Only the fields ron needs are decoded.
#[derive(Debug, Clone, Deserialize)]
pub struct ReleaseRecord {
    pub version: String,
    #[serde(default)]
    pub lts: Lts,
}

pub struct IndexClient {
    http: reqwest::blocking::Client,
    index_url: String,
}

impl IndexClient {
    pub fn new(mirror: &str) -> Result<Self, NetworkError> {
        let http = reqwest::blocking::Client::builder()
            .user_agent(concat!("ron/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(NetworkError::Client)?;

        Ok(Self {
            http,
            index_url: index_url(mirror),
        })
    }

    /// GET <mirror>/index.json → every published release, newest first
    pub fn fetch_index(&self) -> Result<Vec<ReleaseRecord>, NetworkError> {
        log::debug!("[index] GET {}", self.index_url);

        let resp = self
            .http
            .get(&self.index_url)
            .header("Accept", "application/json")
            .send()
            .map_err(|source| NetworkError::Request {
                url: self.index_url.clone(),
                source,
            })?;

        if !resp.status().is_success() {
            return Err(NetworkError::Status {
                url: self.index_url.clone(),
                status: resp.status(),
            });
        }

        let body = resp.text().map_err(|source| NetworkError::Body {
            url: self.index_url.clone(),
            source,
        })?;

        let releases = parse_index(&body)?;
        log::debug!("[index] total releases: {}", releases.len());

        Ok(releases)
    }

    /// Fetches the index and keeps the LTS versions, in upstream order.
    pub fn lts_versions(&self) -> Result<Vec<String>, NetworkError> {
        let versions = lts_versions(&self.fetch_index()?);
        log::debug!("[index] lts releases: {}", versions.len());
        Ok(versions)
    }
}

pub fn parse_index(body: &str) -> Result<Vec<ReleaseRecord>, NetworkError> {
    Ok(serde_json::from_str(body)?)
}

pub fn lts_versions(releases: &[ReleaseRecord]) -> Vec<String> {
    releases
        .iter()
        .filter(|r| r.lts.is_lts())
        .map(|r| r.version.clone())
        .collect()
}

fn index_url(mirror: &str) -> String {
    format!("{}/index.json", mirror.trim_end_matches('/'))
}
