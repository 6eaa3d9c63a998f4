use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize};

/// Interface languages the bot speaks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Lang {
    Kk,
    #[default]
    Ru,
    En,
}

impl Lang {
    pub const DEFAULT: Lang = Lang::Ru;

    /// Parses a language code. `kz` is the code older records were written with.
    pub fn parse(code: &str) -> Option<Lang> {
        match code.trim().to_lowercase().as_str() {
            "kk" | "kz" => Some(Lang::Kk),
            "ru" => Some(Lang::Ru),
            "en" => Some(Lang::En),
            _ => None,
        }
    }

    /// Unknown codes fall back to the default language.
    pub fn parse_or_default(code: &str) -> Lang {
        Self::parse(code).unwrap_or(Self::DEFAULT)
    }

    pub fn code(self) -> &'static str {
        match self {
            Lang::Kk => "kk",
            Lang::Ru => "ru",
            Lang::En => "en",
        }
    }

    /// Every key this language may be stored under in content files.
    fn keys(self) -> &'static [&'static str] {
        match self {
            Lang::Kk => &["kk", "kz"],
            Lang::Ru => &["ru"],
            Lang::En => &["en"],
        }
    }
}

impl From<String> for Lang {
    fn from(code: String) -> Self {
        Lang::parse_or_default(&code)
    }
}

impl From<Lang> for String {
    fn from(lang: Lang) -> Self {
        lang.code().to_string()
    }
}

/// A value translated into some of the languages.
///
/// In content files it is either an object keyed by language code or a single
/// value shared by every language.
#[derive(Debug, Clone, PartialEq)]
pub enum Localized<T> {
    PerLanguage(HashMap<String, T>),
    Shared(T),
}

impl<T> Default for Localized<T> {
    fn default() -> Self {
        Localized::PerLanguage(HashMap::new())
    }
}

impl<T> Localized<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(self, lang: Lang, value: T) -> Self {
        let mut values = match self {
            Localized::PerLanguage(values) => values,
            Localized::Shared(_) => HashMap::new(),
        };
        values.insert(lang.code().to_string(), value);
        Localized::PerLanguage(values)
    }
}

/// Translations that count as missing when empty.
pub trait Blank {
    fn is_blank(&self) -> bool;
}

impl Blank for String {
    fn is_blank(&self) -> bool {
        self.trim().is_empty()
    }
}

impl<T> Blank for Vec<T> {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl<T: Blank> Localized<T> {
    /// Looks the value up in `lang`, then in the default language. Empty
    /// translations count as missing.
    pub fn get(&self, lang: Lang) -> Option<&T> {
        match self {
            Localized::Shared(value) => Some(value).filter(|value| !value.is_blank()),
            Localized::PerLanguage(values) => Self::lookup(values, lang)
                .or_else(|| Self::lookup(values, Lang::DEFAULT)),
        }
    }

    fn lookup(values: &HashMap<String, T>, lang: Lang) -> Option<&T> {
        lang.keys()
            .iter()
            .filter_map(|key| values.get(*key))
            .find(|value| !value.is_blank())
    }
}

impl<T: Blank + Clone + Default> Localized<T> {
    /// Like [`Localized::get`], degrading to an empty value when neither
    /// language has a translation.
    pub fn resolve(&self, lang: Lang) -> T {
        self.get(lang).cloned().unwrap_or_default()
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Localized<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr<T> {
            PerLanguage(HashMap<String, T>),
            Shared(T),
        }

        Ok(match Repr::deserialize(deserializer)? {
            Repr::PerLanguage(values) => Localized::PerLanguage(values),
            Repr::Shared(value) => Localized::Shared(value),
        })
    }
}
