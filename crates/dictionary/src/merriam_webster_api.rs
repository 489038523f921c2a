// https://dictionaryapi.com/products/json - collegiate dictionary, one JSON array per word
// the array holds entry objects, or plain strings when the word is unknown

use reqwest::Url;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::config::MerriamWebsterConfig;
use crate::provider::{fill_template, word_url, Payload};
use crate::{DictionaryEntry, DictionaryError, PronunciationVariant};

#[derive(Debug, Deserialize)]
struct Entry {
    hwi: HeadwordInfo,
    fl: Option<String>,
    #[serde(default)]
    shortdef: Vec<String>,
    et: Option<Vec<Value>>,
    date: Option<String>,
}

#[derive(Debug, Deserialize)]
struct HeadwordInfo {
    hw: String,
    #[serde(default)]
    prs: Vec<Pronunciation>,
}

#[derive(Debug, Deserialize)]
struct Pronunciation {
    mw: Option<String>,
    sound: Option<Sound>,
}

#[derive(Debug, Deserialize)]
struct Sound {
    audio: Option<String>,
}

impl From<Entry> for DictionaryEntry {
    fn from(entry: Entry) -> Self {
        Self {
            headword: entry.hwi.hw,
            part_of_speech: entry.fl,
            definitions: entry.shortdef,
            etymology: entry.et.map(|et| etymology_text(&et)),
            date: entry.date,
            pronunciations: entry
                .hwi
                .prs
                .into_iter()
                .map(|pr| PronunciationVariant {
                    transcription: pr.mw,
                    audio_token: pr.sound.and_then(|sound| sound.audio),
                })
                .collect(),
        }
    }
}

/// Keeps the `["text", "..."]` pairs of an `et` array and drops cross references and notes.
fn etymology_text(et: &[Value]) -> Vec<String> {
    et.iter()
        .filter_map(|element| match element.as_array()?.as_slice() {
            [tag, text] if tag.as_str() == Some("text") => text.as_str().map(str::to_string),
            _ => None,
        })
        .collect()
}

pub(crate) fn request_url(config: &MerriamWebsterConfig, word: &str) -> Result<Url, DictionaryError> {
    let template = fill_template(&config.base_url, &[("dictionary", config.dictionary.as_str())]);
    let mut url = word_url(&template, word)?;
    if let Some(key) = &config.api_key {
        url.query_pairs_mut().append_pair("key", key);
    }
    Ok(url)
}

pub(crate) fn parse(payload: Value) -> Result<Payload, DictionaryError> {
    let Value::Array(results) = payload else {
        return Err(DictionaryError::UnexpectedShape(
            "expected a JSON array of entries".to_string(),
        ));
    };
    if !results.is_empty() && results.iter().all(Value::is_string) {
        let suggestions = results
            .into_iter()
            .filter_map(|value| match value {
                Value::String(suggestion) => Some(suggestion),
                _ => None,
            })
            .collect();
        return Ok(Payload::Suggestions(suggestions));
    }
    let total = results.len();
    let entries = results
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| match serde_json::from_value::<Entry>(value) {
            Ok(entry) => Some(DictionaryEntry::from(entry)),
            Err(error) => {
                debug!(index, %error, "skipping unreadable entry");
                None
            }
        })
        .collect::<Vec<DictionaryEntry>>();
    Ok(Payload::Entries {
        skipped: total - entries.len(),
        entries,
    })
}
