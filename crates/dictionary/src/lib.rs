use format::{format_definitions, format_etymology, format_thesaurus};
use pronunciation::resolve_pronunciation;
use thesaurus_api::fetch_thesaurus;

pub mod config;
mod dictionary;
pub mod format;
mod merriam_webster_api;
mod pearson_api;
pub mod pronunciation;
pub mod provider;
pub mod query;
mod thesaurus_api;

pub use config::{DictionaryConfig, ProviderKind};
pub use dictionary::{
    DictionaryEntry, PronunciationVariant, Relation, RelationKind, ThesaurusEntry,
};
pub use format::Markup;
pub use pronunciation::AudioRequest;
pub use provider::{Payload, Provider};
pub use query::{normalize, Command, LookupRequest};

#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    #[error("word is empty")]
    EmptyWord,
    #[error("request failed: {0}")]
    Fetch(reqwest::Error),
    #[error("response is not valid JSON: {0}")]
    Deserialize(reqwest::Error),
    #[error("unexpected response shape: {0}")]
    UnexpectedShape(String),
    #[error(transparent)]
    NotFound(NotFoundError),
    #[error("no entry in the response can be rendered")]
    NoUsableResult,
    #[error("no results")]
    NoResults,
    #[error("configuration error: {0}")]
    Config(String),
}

/// Coarse classification of a [`DictionaryError`], one per user-facing failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    EmptyWord,
    Network,
    NotFound,
    NoUsableResult,
    NoResults,
    Config,
}

impl DictionaryError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyWord => ErrorKind::EmptyWord,
            Self::Fetch(_) | Self::Deserialize(_) | Self::UnexpectedShape(_) => ErrorKind::Network,
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::NoUsableResult => ErrorKind::NoUsableResult,
            Self::NoResults => ErrorKind::NoResults,
            Self::Config(_) => ErrorKind::Config,
        }
    }

    /// The reply sent back to the user in place of a result.
    pub fn user_message(&self) -> String {
        let text = match self {
            Self::EmptyWord => "Word is too short.".to_string(),
            Self::Fetch(_) | Self::Deserialize(_) | Self::UnexpectedShape(_) => {
                "The dictionary service could not be reached.".to_string()
            }
            Self::NotFound(not_found) if not_found.suggestions.is_empty() => {
                format!("No {} found.", not_found.subject)
            }
            Self::NotFound(not_found) => format!(
                "Word not found.\n\nSuggestions:\n{}",
                not_found.suggestions.join("\n")
            ),
            Self::NoUsableResult => "No usable results to show.".to_string(),
            Self::NoResults => "No results to show.".to_string(),
            Self::Config(message) => format!("The dictionary is misconfigured: {message}."),
        };
        format!("❌ {text}")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("no {subject} found")]
pub struct NotFoundError {
    subject: &'static str,
    suggestions: Vec<String>,
}

impl NotFoundError {
    pub fn new(subject: &'static str) -> Self {
        Self {
            subject,
            suggestions: Vec::new(),
        }
    }

    pub fn with_suggestions(
        subject: &'static str,
        suggestions: impl IntoIterator<Item = String>,
    ) -> Self {
        Self {
            subject,
            suggestions: suggestions.into_iter().collect(),
        }
    }

    /// "Did you mean" words offered by the provider, in its order.
    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }
}

/// What a command produces for the host to send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Text(String),
    Audio(AudioRequest),
}

pub struct Dictionary {
    client: reqwest::Client,
    config: DictionaryConfig,
    provider: Provider,
}

impl Dictionary {
    pub fn new(config: DictionaryConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            provider: Provider::from_config(&config),
            config,
        }
    }

    pub fn config(&self) -> &DictionaryConfig {
        &self.config
    }

    pub async fn lookup(&self, request: &LookupRequest) -> Result<Reply, DictionaryError> {
        let word = request.word();
        match request.command() {
            Command::Define => self.define(word).await.map(Reply::Text),
            Command::Etymology => self.etymology(word).await.map(Reply::Text),
            Command::Pronounce => self.pronounce(word).await.map(Reply::Audio),
            Command::Thesaurus => self.thesaurus(word).await.map(Reply::Text),
        }
    }

    pub async fn define(&self, word: &str) -> Result<String, DictionaryError> {
        let payload = self.fetch_definitions(word).await?;
        format_definitions(&payload, self.config.markup)
    }

    pub async fn etymology(&self, word: &str) -> Result<String, DictionaryError> {
        let payload = self.fetch_definitions(word).await?;
        format_etymology(&payload, self.config.markup)
    }

    pub async fn pronounce(&self, word: &str) -> Result<AudioRequest, DictionaryError> {
        let payload = self.fetch_definitions(word).await?;
        resolve_pronunciation(&payload, &self.provider)
    }

    pub async fn thesaurus(&self, word: &str) -> Result<String, DictionaryError> {
        let word = normalize(&[word])?;
        let entries = fetch_thesaurus(&self.client, &self.config.thesaurus, &word).await?;
        format_thesaurus(&entries, self.config.markup)
    }

    async fn fetch_definitions(&self, word: &str) -> Result<Payload, DictionaryError> {
        let word = normalize(&[word])?;
        self.provider.fetch_definitions(&self.client, &word).await
    }
}
