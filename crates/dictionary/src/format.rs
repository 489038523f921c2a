use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;
use tracing::debug;

use crate::provider::Payload;
use crate::{DictionaryEntry, DictionaryError, NotFoundError, ThesaurusEntry};

/// Upper bound on rendered entries per reply.
pub const MAX_ENTRIES: usize = 5;
/// Upper bound on "did you mean" words listed in a not-found reply.
pub const MAX_SUGGESTIONS: usize = 10;

static MARKUP_TOKEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\{[^}]+\}").unwrap());

/// How emphasis is rendered in replies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Markup {
    #[default]
    Plain,
    Html,
}

impl Markup {
    pub fn text(self, text: &str) -> String {
        match self {
            Markup::Plain => text.to_string(),
            Markup::Html => text
                .replace('&', "&amp;")
                .replace('<', "&lt;")
                .replace('>', "&gt;"),
        }
    }

    pub fn bold(self, text: &str) -> String {
        match self {
            Markup::Plain => self.text(text),
            Markup::Html => format!("<b>{}</b>", self.text(text)),
        }
    }

    pub fn italic(self, text: &str) -> String {
        match self {
            Markup::Plain => self.text(text),
            Markup::Html => format!("<i>{}</i>", self.text(text)),
        }
    }
}

/// Removes `{it}`, `{/it}`, `{bc}` and every other `{...}` formatting token.
pub fn strip_markup(text: &str) -> String {
    MARKUP_TOKEN.replace_all(text, "").into_owned()
}

pub fn format_definitions(payload: &Payload, markup: Markup) -> Result<String, DictionaryError> {
    let entries = entries_or_not_found(payload, "definitions")?;
    let rendered = entries
        .iter()
        .filter_map(|entry| render_definition(entry, markup))
        .take(MAX_ENTRIES)
        .collect::<Vec<String>>();
    if rendered.is_empty() {
        return Err(DictionaryError::NoUsableResult);
    }
    Ok(rendered.join("\n\n"))
}

pub fn format_etymology(payload: &Payload, markup: Markup) -> Result<String, DictionaryError> {
    let entries = entries_or_not_found(payload, "etymology")?;
    let rendered = entries
        .iter()
        .filter_map(|entry| render_etymology(entry, markup))
        .take(MAX_ENTRIES)
        .collect::<Vec<String>>();
    if rendered.is_empty() {
        return Err(DictionaryError::NotFound(NotFoundError::new("etymology")));
    }
    Ok(rendered.join("\n\n"))
}

pub fn format_thesaurus(
    entries: &[ThesaurusEntry],
    markup: Markup,
) -> Result<String, DictionaryError> {
    if entries.is_empty() {
        return Err(DictionaryError::NoResults);
    }
    let mut lines = Vec::new();
    for entry in entries {
        lines.push(markup.bold(&capitalize(&entry.part_of_speech)));
        for relation in &entry.relations {
            let prefix = format!("{} {}:", relation.words.len(), relation.kind.label());
            lines.push(format!(
                "{} {}",
                markup.italic(&prefix),
                markup.text(&relation.words.join(", "))
            ));
        }
    }
    Ok(lines.join("\n"))
}

/// Entries of a definitions payload, or the matching not-found error. A payload whose elements
/// were all unreadable yields an empty slice, so callers report it as unusable rather than absent.
pub(crate) fn entries_or_not_found<'a>(
    payload: &'a Payload,
    subject: &'static str,
) -> Result<&'a [DictionaryEntry], DictionaryError> {
    match payload {
        Payload::Suggestions(suggestions) => Err(DictionaryError::NotFound(
            NotFoundError::with_suggestions(subject, suggestions.iter().take(MAX_SUGGESTIONS).cloned()),
        )),
        Payload::Entries { .. } if payload.is_empty() => {
            Err(DictionaryError::NotFound(NotFoundError::new(subject)))
        }
        Payload::Entries { entries, .. } => Ok(entries),
    }
}

fn render_definition(entry: &DictionaryEntry, markup: Markup) -> Option<String> {
    let part_of_speech = entry
        .part_of_speech
        .as_deref()
        .map(strip_markup)
        .filter(|part_of_speech| !part_of_speech.trim().is_empty());
    let Some(part_of_speech) = part_of_speech else {
        debug!(headword = %entry.headword, "skipping entry without part of speech");
        return None;
    };
    if entry.definitions.is_empty() {
        debug!(headword = %entry.headword, "skipping entry without senses");
        return None;
    }
    Some(format!(
        "📖 {} ({}): {}",
        markup.bold(&strip_markup(&entry.headword)),
        markup.italic(&part_of_speech),
        numbered(&entry.definitions, markup)
    ))
}

fn render_etymology(entry: &DictionaryEntry, markup: Markup) -> Option<String> {
    let etymology = entry.etymology.as_deref().filter(|et| !et.is_empty())?;
    let date = entry
        .date
        .as_deref()
        .map(strip_markup)
        .filter(|date| !date.trim().is_empty())
        .map(|date| format!(" ({})", markup.italic(&date)))
        .unwrap_or_default();
    Some(format!(
        "📖 {}{}: {}",
        markup.bold(&strip_markup(&entry.headword)),
        date,
        numbered(etymology, markup)
    ))
}

fn numbered(items: &[String], markup: Markup) -> String {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| format!("{}. {}", index + 1, markup.text(&strip_markup(item))))
        .collect::<Vec<String>>()
        .join("\n")
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
