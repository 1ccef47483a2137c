// WHY: translation is a placeholder until a real backend exists
// Output is fixed per language and independent of the input text

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Translations {
    pub spanish: String,
    pub french: String,
    pub german: String,
    pub hindi: String,
}

pub const SPANISH_PLACEHOLDER: &str = "Este es un ejemplo de traducción al español.";
pub const FRENCH_PLACEHOLDER: &str = "Ceci est un exemple de traduction en français.";
pub const GERMAN_PLACEHOLDER: &str = "Dies ist ein Übersetzungsbeispiel ins Deutsche.";
pub const HINDI_PLACEHOLDER: &str = "यह हिंदी अनुवाद का एक उदाहरण है।";

pub fn translate(_text: &str) -> Translations {
    Translations {
        spanish: SPANISH_PLACEHOLDER.to_string(),
        french: FRENCH_PLACEHOLDER.to_string(),
        german: GERMAN_PLACEHOLDER.to_string(),
        hindi: HINDI_PLACEHOLDER.to_string(),
    }
}

impl Translations {
    /// `(language, text)` pairs in display order
    pub fn entries(&self) -> [(&'static str, &str); 4] {
        [
            ("spanish", self.spanish.as_str()),
            ("french", self.french.as_str()),
            ("german", self.german.as_str()),
            ("hindi", self.hindi.as_str()),
        ]
    }
}
