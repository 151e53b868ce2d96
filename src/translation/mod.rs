mod client;
mod language;
mod request;

pub use client::{DEFAULT_ENDPOINT, MyMemoryClient, Translator, parse_response};
pub use language::{Language, SUPPORTED_LANGUAGES, print_languages};
pub use request::{TranslationRequest, TranslationResponse};
