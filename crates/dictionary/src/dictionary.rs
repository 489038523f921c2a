/// One upstream sense record, normalized across providers.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DictionaryEntry {
    pub headword: String,
    pub part_of_speech: Option<String>,
    pub definitions: Vec<String>,
    /// `None` when the upstream entry carries no etymology block at all.
    pub etymology: Option<Vec<String>>,
    pub date: Option<String>,
    pub pronunciations: Vec<PronunciationVariant>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PronunciationVariant {
    pub transcription: Option<String>,
    pub audio_token: Option<String>,
}

impl PronunciationVariant {
    /// Both halves present and non-empty.
    pub fn usable(&self) -> Option<(&str, &str)> {
        match (self.transcription.as_deref(), self.audio_token.as_deref()) {
            (Some(transcription), Some(token)) if !transcription.is_empty() && !token.is_empty() => {
                Some((transcription, token))
            }
            _ => None,
        }
    }
}

/// Relations for one part of speech, in the order the thesaurus returned them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThesaurusEntry {
    pub part_of_speech: String,
    pub relations: Vec<Relation>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relation {
    pub kind: RelationKind,
    pub words: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelationKind {
    Synonym,
    Antonym,
    Related,
    Similar,
    UserDefined,
    Other(String),
}

impl RelationKind {
    pub fn from_code(code: &str) -> Self {
        match code {
            "syn" => Self::Synonym,
            "ant" => Self::Antonym,
            "rel" => Self::Related,
            "sim" => Self::Similar,
            "usr" => Self::UserDefined,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::Synonym => "Synonym(s)",
            Self::Antonym => "Antonym(s)",
            Self::Related => "Related word(s)",
            Self::Similar => "Similar word(s)",
            Self::UserDefined => "User-defined",
            Self::Other(code) => code,
        }
    }
}
