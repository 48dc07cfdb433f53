use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{core::models::CorpusRow, KikimineError};

pub const VALIDATED_FILE: &str = "validated.tsv";
pub const CLIPS_DIR: &str = "clips";

/// Read every validated row for one language. The file is tab-separated with
/// a header; a missing or unreadable file aborts the language's load.
pub fn read_rows(corpus_root: &Path, language: &str) -> Result<Vec<CorpusRow>, KikimineError> {
    let path = corpus_root.join(language).join(VALIDATED_FILE);

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .flexible(true)
        .from_path(&path)?;

    let mut rows = Vec::new();
    for row in reader.deserialize() {
        rows.push(row?);
    }
    Ok(rows)
}

pub fn clip_path(corpus_root: &Path, language: &str, clip: &str) -> PathBuf {
    corpus_root.join(language).join(CLIPS_DIR).join(clip)
}

/// Every subdirectory of the corpus root names a language. Sorted so the
/// catalog is stable across runs.
pub fn discover_languages(corpus_root: &Path) -> Result<Vec<String>, KikimineError> {
    let mut languages = Vec::new();
    for entry in fs::read_dir(corpus_root)? {
        let entry = entry?;
        if entry.path().is_dir() {
            languages.push(entry.file_name().to_string_lossy().into_owned());
        }
    }
    languages.sort();
    Ok(languages)
}
