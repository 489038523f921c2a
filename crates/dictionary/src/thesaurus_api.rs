// https://words.bighugelabs.com/site/api - {part of speech: {relation code: [words]}}

use reqwest::Url;
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::ThesaurusConfig;
use crate::provider::{fill_template, get_json, word_url};
use crate::{DictionaryError, Relation, RelationKind, ThesaurusEntry};

pub(crate) fn request_url(config: &ThesaurusConfig, word: &str) -> Result<Url, DictionaryError> {
    let api_key = config
        .api_key
        .as_deref()
        .ok_or_else(|| DictionaryError::Config("missing thesaurus API key".to_string()))?;
    word_url(&fill_template(&config.base_url, &[("api_key", api_key)]), word)
}

pub(crate) fn parse(payload: Value) -> Result<Vec<ThesaurusEntry>, DictionaryError> {
    let Value::Object(parts_of_speech) = payload else {
        return Err(DictionaryError::UnexpectedShape(
            "expected a JSON object keyed by part of speech".to_string(),
        ));
    };
    let entries = parts_of_speech
        .into_iter()
        .filter_map(|(part_of_speech, relations)| {
            let Value::Object(relations) = relations else {
                debug!(%part_of_speech, "skipping part of speech without relations");
                return None;
            };
            let relations = relations
                .into_iter()
                .map(|(code, words)| Relation {
                    kind: RelationKind::from_code(&code),
                    words: words
                        .as_array()
                        .map(|words| {
                            words
                                .iter()
                                .filter_map(|word| word.as_str().map(str::to_string))
                                .collect()
                        })
                        .unwrap_or_default(),
                })
                .collect();
            Some(ThesaurusEntry {
                part_of_speech,
                relations,
            })
        })
        .collect();
    Ok(entries)
}

pub(crate) async fn fetch_thesaurus(
    client: &reqwest::Client,
    config: &ThesaurusConfig,
    word: &str,
) -> Result<Vec<ThesaurusEntry>, DictionaryError> {
    debug!(word, "fetching thesaurus");
    let url = request_url(config, word)?;
    let payload = get_json(client, url).await.inspect_err(|error| {
        warn!(word, %error, "thesaurus request failed");
    })?;
    parse(payload)
}
