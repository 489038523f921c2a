use serde::Deserialize;

use crate::format::Markup;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderKind {
    #[default]
    MerriamWebster,
    Pearson,
}

/// Everything the look-ups need, fixed for the lifetime of a [`crate::Dictionary`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DictionaryConfig {
    pub provider: ProviderKind,
    pub markup: Markup,
    pub merriam_webster: MerriamWebsterConfig,
    pub pearson: PearsonConfig,
    pub thesaurus: ThesaurusConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MerriamWebsterConfig {
    /// Template with `{dictionary}` and `{word}` placeholders.
    pub base_url: String,
    pub dictionary: String,
    /// Template with `{subdirectory}` and `{audio}` placeholders.
    pub audio_url: String,
    pub api_key: Option<String>,
}

impl Default for MerriamWebsterConfig {
    fn default() -> Self {
        Self {
            base_url: "https://www.dictionaryapi.com/api/v3/references/{dictionary}/json/{word}"
                .to_string(),
            dictionary: "collegiate".to_string(),
            audio_url:
                "https://media.merriam-webster.com/audio/prons/en/us/ogg/{subdirectory}/{audio}.ogg"
                    .to_string(),
            api_key: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PearsonConfig {
    /// The word is sent as the `headword` query parameter.
    pub base_url: String,
    /// Template with an `{audio}` placeholder, filled with the asset path from the entry.
    pub audio_url: String,
    pub api_key: Option<String>,
}

impl Default for PearsonConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.pearson.com/v2/dictionaries/ldoce5/entries".to_string(),
            audio_url: "https://api.pearson.com{audio}".to_string(),
            api_key: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThesaurusConfig {
    /// Template with `{api_key}` and `{word}` placeholders.
    pub base_url: String,
    pub api_key: Option<String>,
}

impl Default for ThesaurusConfig {
    fn default() -> Self {
        Self {
            base_url: "https://words.bighugelabs.com/api/2/{api_key}/{word}/json".to_string(),
            api_key: None,
        }
    }
}
