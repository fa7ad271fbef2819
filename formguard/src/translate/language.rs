use super::{en_us, es_es};

/// Built-in message languages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Language {
    #[default]
    EnUs,
    EsEs,
}

impl Language {
    /// Resolve a language code. Unknown codes fall back to `en_US`.
    pub fn from_code(code: &str) -> Self {
        match code {
            "es_ES" => Self::EsEs,
            "en_US" => Self::EnUs,
            other => {
                log::debug!("Unknown language code {other:?}, using en_US");
                Self::default()
            }
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Self::EnUs => "en_US",
            Self::EsEs => "es_ES",
        }
    }

    pub(super) fn strings(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Self::EnUs => en_us::STRINGS,
            Self::EsEs => es_es::STRINGS,
        }
    }
}
