//! Video metadata resolution.
//!
//! YouTube exposes a public, token-free oEmbed endpoint, so YouTube URLs can
//! be resolved to a title/channel/thumbnail record with a single GET.
//! Facebook's oEmbed requires an access token, so Facebook URLs resolve to a
//! partial record that signals manual title entry. At most one network round
//! trip happens per call and failures are never retried here; any
//! retry/debounce policy belongs to the caller.

use crate::error::Error;
use crate::resolver::{self, Platform};
use serde::{Deserialize, Serialize};

/// YouTube's public oEmbed endpoint.
pub const YOUTUBE_OEMBED_ENDPOINT: &str = "https://www.youtube.com/oembed";

/// Thumbnail reference used when no platform thumbnail can be derived.
pub const DEFAULT_PLACEHOLDER: &str = "placeholder.svg";

const USER_AGENT: &str = concat!("clipshelf/", env!("CARGO_PKG_VERSION"));

/// Resolved metadata for a video. Fields may be empty when the platform does
/// not expose public metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoMetadata {
    pub title: String,
    pub channel_name: String,
    pub channel_url: String,
    pub thumbnail_url: String,
}

/// Outcome of a metadata resolution attempt.
///
/// `ManualEntryRequired` is not an error: the platform has no token-free
/// metadata endpoint and the caller should prompt for a title. `FetchFailed`
/// covers network errors, non-success statuses, and unparseable bodies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", content = "metadata", rename_all = "snake_case")]
pub enum MetadataOutcome {
    Resolved(VideoMetadata),
    ManualEntryRequired(VideoMetadata),
    FetchFailed,
    Unrecognized,
}

impl MetadataOutcome {
    pub fn metadata(&self) -> Option<&VideoMetadata> {
        match self {
            MetadataOutcome::Resolved(meta) | MetadataOutcome::ManualEntryRequired(meta) => {
                Some(meta)
            }
            MetadataOutcome::FetchFailed | MetadataOutcome::Unrecognized => None,
        }
    }
}

#[derive(Debug, Deserialize)]
struct OembedResponse {
    #[serde(default)]
    title: String,
    #[serde(default)]
    author_name: String,
    #[serde(default)]
    author_url: String,
}

/// Resolves video metadata through platform endpoints.
pub struct MetadataResolver {
    client: reqwest::Client,
    endpoint: String,
    placeholder: String,
}

impl MetadataResolver {
    pub fn new() -> Result<Self, Error> {
        let client = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
        Ok(MetadataResolver {
            client,
            endpoint: YOUTUBE_OEMBED_ENDPOINT.to_string(),
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
        })
    }

    /// Override the oEmbed endpoint base (tests point this at a local mock).
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Override the placeholder thumbnail reference.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Derive a thumbnail URL without touching the network.
    ///
    /// YouTube exposes per-video image assets keyed by id; every other case
    /// falls back to the placeholder reference.
    pub fn derive_thumbnail(&self, platform: Platform, video_id: Option<&str>) -> String {
        match (platform, video_id) {
            (Platform::Youtube, Some(id)) => youtube_thumbnail(id),
            _ => self.placeholder.clone(),
        }
    }

    /// Resolve metadata for a URL. At most one HTTP round trip; failures are
    /// reported through [`MetadataOutcome::FetchFailed`], never raised.
    pub async fn resolve(&self, url: &str) -> MetadataOutcome {
        let url = url.trim();
        match resolver::classify(url) {
            Platform::Unknown => MetadataOutcome::Unrecognized,
            Platform::Facebook => {
                // No token-free metadata endpoint; the caller prompts for a title.
                MetadataOutcome::ManualEntryRequired(VideoMetadata {
                    thumbnail_url: self.placeholder.clone(),
                    ..VideoMetadata::default()
                })
            }
            Platform::Youtube => match self.fetch_oembed(url).await {
                Ok(oembed) => {
                    let video_id = resolver::extract_id(url);
                    MetadataOutcome::Resolved(VideoMetadata {
                        title: oembed.title,
                        channel_name: oembed.author_name,
                        channel_url: oembed.author_url,
                        thumbnail_url: self
                            .derive_thumbnail(Platform::Youtube, video_id.as_deref()),
                    })
                }
                Err(err) => {
                    tracing::warn!(url, error = %err, "oEmbed lookup failed");
                    MetadataOutcome::FetchFailed
                }
            },
        }
    }

    async fn fetch_oembed(&self, url: &str) -> Result<OembedResponse, Error> {
        let request_url = format!(
            "{}?url={}&format=json",
            self.endpoint,
            urlencoding::encode(url)
        );

        let response = self.client.get(&request_url).send().await?;
        if !response.status().is_success() {
            return Err(Error::Other(format!(
                "oEmbed endpoint returned error status: {}",
                response.status()
            )));
        }

        Ok(response.json::<OembedResponse>().await?)
    }
}

/// Thumbnail asset URL for a YouTube video id.
pub fn youtube_thumbnail(video_id: &str) -> String {
    format!("https://img.youtube.com/vi/{}/mqdefault.jpg", video_id)
}
