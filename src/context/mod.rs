pub mod language;

pub use language::{use_texts, Language, LanguageContext};
