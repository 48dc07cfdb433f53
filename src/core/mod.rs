pub mod difficulty;
pub mod errors;
pub mod frequency;
pub mod models;
pub mod pipeline;

pub use errors::KikimineError;
pub use models::{ CorpusRow, LanguageData, Question };
