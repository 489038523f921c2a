use dictionary::config::{MerriamWebsterConfig, PearsonConfig};
use dictionary::format::{format_definitions, format_etymology, strip_markup};
use dictionary::pronunciation::resolve_pronunciation;
use dictionary::{normalize, DictionaryError, ErrorKind, Markup, Provider};
use serde_json::{json, Value};

fn merriam_webster() -> Provider {
    Provider::MerriamWebster(MerriamWebsterConfig::default())
}

fn pearson() -> Provider {
    Provider::Pearson(PearsonConfig::default())
}

fn fish_response() -> Value {
    json!([
        {
            "meta": {"id": "fish:1", "stems": ["fish", "fishes"]},
            "hwi": {"hw": "fish", "prs": [{"mw": "ˈfish", "sound": {"audio": "fish0001"}}]},
            "fl": "noun",
            "shortdef": [
                "an aquatic animal",
                "{it}archaic{/it} any of various mostly marine invertebrates"
            ],
            "date": "before 12th century{ds||1|a|}",
            "et": [["text", "Middle English, from Old English {it}fisc{/it}"]]
        },
        {
            "meta": {"id": "fish:2"},
            "hwi": {"hw": "fish", "prs": [{"mw": "ˈfish", "sound": {"audio": "fish0002"}}]},
            "fl": "verb",
            "shortdef": ["to attempt to catch fish"]
        },
        {
            "meta": {"id": "fish-eye"},
            "hwi": {"hw": "fish-eye"},
            "fl": "noun",
            "shortdef": ["a suspicious look"],
            "date": "1929",
            "et": [["et_snote", [["t", "see {et_link|fish:1|fish:1}"]]]]
        }
    ])
}

#[test]
fn blank_input_never_reaches_a_provider() {
    let blank: [&str; 3] = ["", "   ", "\n"];
    assert!(matches!(normalize(&blank), Err(DictionaryError::EmptyWord)));
}

#[test]
fn merriam_webster_definitions() {
    let payload = merriam_webster().parse_definitions(fish_response()).unwrap();
    let text = format_definitions(&payload, Markup::Html).unwrap();
    assert_eq!(
        text,
        "📖 <b>fish</b> (<i>noun</i>): 1. an aquatic animal\n\
         2. archaic any of various mostly marine invertebrates\n\n\
         📖 <b>fish</b> (<i>verb</i>): 1. to attempt to catch fish\n\n\
         📖 <b>fish-eye</b> (<i>noun</i>): 1. a suspicious look"
    );
}

#[test]
fn merriam_webster_etymology_keeps_text_elements_only() {
    let payload = merriam_webster().parse_definitions(fish_response()).unwrap();
    let text = format_etymology(&payload, Markup::Plain).unwrap();
    assert_eq!(
        text,
        "📖 fish (before 12th century): 1. Middle English, from Old English fisc"
    );
}

#[test]
fn merriam_webster_suggestions() {
    let payload = merriam_webster()
        .parse_definitions(json!(["fush", "fish", "fissure"]))
        .unwrap();
    let error = format_definitions(&payload, Markup::Plain).unwrap_err();
    assert_eq!(error.kind(), ErrorKind::NotFound);
    assert!(error.user_message().contains("fush\nfish\nfissure"));

    let error = format_etymology(&payload, Markup::Plain).unwrap_err();
    assert!(error.user_message().contains("fush\nfish\nfissure"));
}

#[test]
fn merriam_webster_pronunciation() {
    let provider = merriam_webster();
    let payload = provider.parse_definitions(fish_response()).unwrap();
    let audio = resolve_pronunciation(&payload, &provider).unwrap();
    assert_eq!(audio.caption, "ˈfish");
    assert_eq!(
        audio.url,
        "https://media.merriam-webster.com/audio/prons/en/us/ogg/f/fish0001.ogg"
    );
}

#[test]
fn merriam_webster_response_with_only_unreadable_entries() {
    let payload = merriam_webster()
        .parse_definitions(json!([{"meta": {"id": "x"}}, {"fl": "noun", "shortdef": ["a"]}]))
        .unwrap();
    let error = format_definitions(&payload, Markup::Plain).unwrap_err();
    assert_eq!(error.kind(), ErrorKind::NoUsableResult);
    assert_eq!(error.user_message(), "❌ No usable results to show.");
}

#[test]
fn pearson_skips_entries_without_structure() {
    let provider = pearson();
    let payload = provider
        .parse_definitions(json!({
            "status": 200,
            "results": [
                {"headword": "fish", "senses": [{"definition": ["no part of speech"]}]},
                {"headword": "fish", "part_of_speech": "verb"},
                {"headword": "fish", "part_of_speech": "noun", "senses": [{"definition": ["an animal that lives in water"]}]}
            ]
        }))
        .unwrap();
    let text = format_definitions(&payload, Markup::Plain).unwrap();
    assert_eq!(text, "📖 fish (noun): 1. an animal that lives in water");

    let error = format_etymology(&payload, Markup::Plain).unwrap_err();
    assert_eq!(error.kind(), ErrorKind::NotFound);
}

#[test]
fn pearson_without_usable_entries() {
    let payload = pearson()
        .parse_definitions(json!({"results": [{"headword": "fish"}]}))
        .unwrap();
    let error = format_definitions(&payload, Markup::Plain).unwrap_err();
    assert_eq!(error.kind(), ErrorKind::NoUsableResult);
}

#[test]
fn markup_stripping_preserves_surrounding_text() {
    assert_eq!(strip_markup("{it}aquatic{/it} animal"), "aquatic animal");
}

#[test]
fn same_payload_formats_identically() {
    let payload = merriam_webster().parse_definitions(fish_response()).unwrap();
    let first = format_definitions(&payload, Markup::Plain).unwrap();
    let second = format_definitions(&payload, Markup::Plain).unwrap();
    assert_eq!(first.as_bytes(), second.as_bytes());
}
