use std::time::Duration;

use crate::format::entries_or_not_found;
use crate::provider::{Payload, Provider};
use crate::{DictionaryError, NotFoundError};

/// Bound on the host's voice upload of the resolved audio.
pub const AUDIO_UPLOAD_TIMEOUT: Duration = Duration::from_secs(60);

/// A playable pronunciation, ready to be sent as a voice message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioRequest {
    pub url: String,
    pub caption: String,
    pub timeout: Duration,
}

/// Directory the Merriam-Webster CDN files an audio token under.
pub fn audio_subdirectory(token: &str) -> String {
    if token.starts_with("bix") {
        return "bix".to_string();
    }
    if token.starts_with("gg") {
        return "gg".to_string();
    }
    match token.chars().next() {
        Some(first) if first.is_ascii_alphabetic() => first.to_ascii_lowercase().to_string(),
        _ => "number".to_string(),
    }
}

/// Takes the first pronunciation, across entries in order, that has both a transcription and
/// an audio token.
pub fn resolve_pronunciation(
    payload: &Payload,
    provider: &Provider,
) -> Result<AudioRequest, DictionaryError> {
    let entries = entries_or_not_found(payload, "pronunciations")?;
    entries
        .iter()
        .flat_map(|entry| entry.pronunciations.iter())
        .find_map(|variant| variant.usable())
        .map(|(transcription, token)| AudioRequest {
            url: provider.audio_url(token),
            caption: transcription.to_string(),
            timeout: AUDIO_UPLOAD_TIMEOUT,
        })
        .ok_or_else(|| DictionaryError::NotFound(NotFoundError::new("pronunciations")))
}
