// http://developer.pearson.com/apis/dictionaries - LDOCE entries, `results` array per headword search

use reqwest::Url;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::config::PearsonConfig;
use crate::provider::{parse_url, Payload};
use crate::{DictionaryEntry, DictionaryError, PronunciationVariant};

#[derive(Debug, Deserialize)]
struct Response {
    #[serde(default)]
    results: Vec<Value>,
}

#[derive(Debug, Deserialize)]
struct Entry {
    headword: String,
    part_of_speech: Option<String>,
    #[serde(default)]
    senses: Vec<Sense>,
    #[serde(default)]
    pronunciations: Vec<Pronunciation>,
}

#[derive(Debug, Deserialize)]
struct Sense {
    #[serde(default)]
    definition: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct Pronunciation {
    ipa: Option<String>,
    #[serde(default)]
    audio: Vec<Audio>,
}

#[derive(Debug, Deserialize)]
struct Audio {
    url: Option<String>,
}

impl From<Entry> for DictionaryEntry {
    fn from(entry: Entry) -> Self {
        Self {
            headword: entry.headword,
            part_of_speech: entry.part_of_speech,
            definitions: entry
                .senses
                .into_iter()
                .flat_map(|sense| sense.definition)
                .collect(),
            etymology: None,
            date: None,
            pronunciations: entry
                .pronunciations
                .into_iter()
                .map(|pronunciation| PronunciationVariant {
                    transcription: pronunciation.ipa,
                    audio_token: pronunciation.audio.into_iter().find_map(|audio| audio.url),
                })
                .collect(),
        }
    }
}

pub(crate) fn request_url(config: &PearsonConfig, word: &str) -> Result<Url, DictionaryError> {
    let mut url = parse_url(&config.base_url)?;
    {
        let mut query = url.query_pairs_mut();
        query.append_pair("headword", word);
        if let Some(key) = &config.api_key {
            query.append_pair("apikey", key);
        }
    }
    Ok(url)
}

pub(crate) fn parse(payload: Value) -> Result<Payload, DictionaryError> {
    let response: Response = serde_json::from_value(payload).map_err(|error| {
        DictionaryError::UnexpectedShape(format!("expected an object with results: {error}"))
    })?;
    let total = response.results.len();
    let entries = response
        .results
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
