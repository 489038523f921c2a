use reqwest::Url;
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::{DictionaryConfig, MerriamWebsterConfig, PearsonConfig, ProviderKind};
use crate::pronunciation::audio_subdirectory;
use crate::{merriam_webster_api, pearson_api, DictionaryEntry, DictionaryError, NotFoundError};

const WORD_PLACEHOLDER: &str = "{word}";

/// A definitions response after the provider-specific schema has been read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    Entries {
        entries: Vec<DictionaryEntry>,
        /// Upstream elements that could not be read as entries.
        skipped: usize,
    },
    /// "Did you mean" list returned instead of entries.
    Suggestions(Vec<String>),
}

impl Payload {
    pub fn entries(entries: Vec<DictionaryEntry>) -> Self {
        Self::Entries {
            entries,
            skipped: 0,
        }
    }

    /// True when the provider answered with nothing at all, as opposed to nothing readable.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Entries { entries, skipped } => entries.is_empty() && *skipped == 0,
            Self::Suggestions(suggestions) => suggestions.is_empty(),
        }
    }
}

#[derive(Debug, Clone)]
pub enum Provider {
    MerriamWebster(MerriamWebsterConfig),
    Pearson(PearsonConfig),
}

impl Provider {
    pub fn from_config(config: &DictionaryConfig) -> Self {
        match config.provider {
            ProviderKind::MerriamWebster => Self::MerriamWebster(config.merriam_webster.clone()),
            ProviderKind::Pearson => Self::Pearson(config.pearson.clone()),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::MerriamWebster(_) => "merriam-webster",
            Self::Pearson(_) => "pearson",
        }
    }

    pub fn definitions_url(&self, word: &str) -> Result<Url, DictionaryError> {
        match self {
            Self::MerriamWebster(config) => merriam_webster_api::request_url(config, word),
            Self::Pearson(config) => pearson_api::request_url(config, word),
        }
    }

    pub fn parse_definitions(&self, payload: Value) -> Result<Payload, DictionaryError> {
        match self {
            Self::MerriamWebster(_) => merriam_webster_api::parse(payload),
            Self::Pearson(_) => pearson_api::parse(payload),
        }
    }

    /// Playable URL for an audio token taken from one of this provider's entries.
    pub fn audio_url(&self, token: &str) -> String {
        match self {
            Self::MerriamWebster(config) => {
                let subdirectory = audio_subdirectory(token);
                fill_template(
                    &config.audio_url,
                    &[("subdirectory", subdirectory.as_str()), ("audio", token)],
                )
            }
            Self::Pearson(config) => fill_template(&config.audio_url, &[("audio", token)]),
        }
    }

    pub(crate) async fn fetch_definitions(
        &self,
        client: &reqwest::Client,
        word: &str,
    ) -> Result<Payload, DictionaryError> {
        debug!(provider = self.name(), word, "fetching definitions");
        let url = self.definitions_url(word)?;
        let payload = get_json(client, url).await.inspect_err(|error| {
            warn!(provider = self.name(), word, %error, "definitions request failed");
        })?;
        self.parse_definitions(payload)
    }
}

/// Replaces every `{key}` in `template`. Placeholders without a substitution are left alone.
pub(crate) fn fill_template(template: &str, substitutions: &[(&str, &str)]) -> String {
    substitutions
        .iter()
        .fold(template.to_string(), |filled, (key, value)| {
            filled.replace(&format!("{{{key}}}"), value)
        })
}

/// Fills `template`, whose `{word}` must be a whole path segment, with `word` percent-encoded
/// as that one segment.
pub(crate) fn word_url(template: &str, word: &str) -> Result<Url, DictionaryError> {
    // a dot segment cannot be sent, url normalization drops it
    if matches!(word, "." | "..") {
        return Err(DictionaryError::NotFound(NotFoundError::new("entries")));
    }
    let (prefix, suffix) = template
        .split_once(WORD_PLACEHOLDER)
        .filter(|(prefix, suffix)| prefix.ends_with('/') && !suffix.contains(WORD_PLACEHOLDER))
        .ok_or_else(|| {
            DictionaryError::Config(format!("url {template} needs one {{word}} path segment"))
        })?;
    let mut url = parse_url(prefix)?;
    if suffix.contains(['?', '#']) {
        return Err(DictionaryError::Config(format!(
            "url {template} must end its path after {{word}}"
        )));
    }
    url.path_segments_mut()
        .map_err(|()| DictionaryError::Config(format!("url {template} has no path")))?
        .pop_if_empty()
        .push(word)
        .extend(suffix.split('/').filter(|segment| !segment.is_empty()));
    Ok(url)
}

pub(crate) fn parse_url(url: &str) -> Result<Url, DictionaryError> {
    Url::parse(url).map_err(|error| DictionaryError::Config(format!("invalid url {url}: {error}")))
}

pub(crate) async fn get_json(client: &reqwest::Client, url: Url) -> Result<Value, DictionaryError> {
    let res = client.get(url).send().await.map_err(DictionaryError::Fetch)?;
    let res = res.error_for_status().map_err(DictionaryError::Fetch)?;
    res.json::<Value>().await.map_err(DictionaryError::Deserialize)
}
