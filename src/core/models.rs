use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use super::frequency::FrequencyTable;

/// Per-language mapping from a token to its pool of plausible wrong answers.
pub type DistractorMap = BTreeMap<String, BTreeSet<String>>;

/// One corpus row enriched with derived timing, tokenization and distractors.
///
/// `distractors` keys are always a subset of the distinct entries of
/// `tokenized`; `audio_length` is strictly positive by the time a question
/// leaves the load pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub path: String,           // Clip file name, unique within a language
    pub sentence: String,       // Raw transcript
    pub locale: String,
    pub audio_length: f64,      // Seconds
    pub chars_sec: f64,         // Character count / audio_length
    pub tokenized: Vec<String>, // Ordered tokens, duplicates preserved
    pub distractors: DistractorMap,
}

/// The columns of a `validated.tsv` row we actually consume. The corpus dumps
/// carry more columns (client id, votes, demographics); serde skips them.
#[derive(Debug, Clone, Deserialize)]
pub struct CorpusRow {
    pub path: String,
    pub sentence: String,
    pub locale: String,
}

/// Everything one worker produces for one language.
#[derive(Debug, Clone, PartialEq)]
pub struct LanguageData {
    pub language: String,
    pub questions: Vec<Question>,
    pub frequency: FrequencyTable,
}
