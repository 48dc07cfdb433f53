use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use log::{info, warn};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::{
    core::{models::Question, pipeline::LoaderContext},
    orchestrator,
    KikimineError,
};

pub const CACHE_SCHEMA_VERSION: u32 = 1;
const LANGUAGES_FILE: &str = "languages.bin.zst";

/// Versioned envelope around every persisted blob, so a stale cache format
/// reads as a miss instead of as garbage.
#[derive(Serialize, Deserialize)]
struct CacheBlob<T> {
    schema_version: u32,
    payload: T,
}

/// What the serving layer reads back: the language catalog and each
/// language's difficulty-sorted question list.
#[derive(Debug, Clone, PartialEq)]
pub struct CachedCorpus {
    pub languages: Vec<String>,
    pub questions: BTreeMap<String, Vec<Question>>,
}

/// Compressed snapshots of the per-language question sets and the language
/// catalog, one blob per file so a subset can be loaded without touching
/// the rest. Regeneration always rewrites every blob it covers; there are
/// no partial updates.
pub struct CacheStore {
    dir: PathBuf,
}

impl CacheStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        CacheStore { dir: dir.into() }
    }

    fn languages_path(&self) -> PathBuf {
        self.dir.join(LANGUAGES_FILE)
    }

    fn questions_path(&self, language: &str) -> PathBuf {
        self.dir.join(format!("questions__{}.bin.zst", language))
    }

    /// Run the full pipeline and persist everything it produced.
    pub fn regenerate(
        &self,
        ctx: &LoaderContext<'_>,
        languages: Option<Vec<String>>,
        workers: usize,
    ) -> Result<CachedCorpus, KikimineError> {
        let corpus = orchestrator::load_all_languages(ctx, languages, workers)?;

        fs::create_dir_all(&self.dir)?;
        info!("Saving question sets to {:?}...", self.dir);
        write_blob(&self.languages_path(), &corpus.languages)?;
        for (language, questions) in &corpus.questions {
            write_blob(&self.questions_path(language), questions)?;
        }

        Ok(CachedCorpus { languages: corpus.languages, questions: corpus.questions })
    }

    /// Warm-cache read of the catalog and every per-language blob. Any
    /// missing file or stale schema version falls back to a full
    /// regeneration; the cache is best-effort and correctness never
    /// depends on it.
    pub fn load_or_regenerate(
        &self,
        ctx: &LoaderContext<'_>,
        workers: usize,
    ) -> Result<CachedCorpus, KikimineError> {
        match self.load()? {
            Some(corpus) => Ok(corpus),
            None => self.regenerate(ctx, None, workers),
        }
    }

    fn load(&self) -> Result<Option<CachedCorpus>, KikimineError> {
        let Some(languages) = read_blob::<Vec<String>>(&self.languages_path())? else {
            return Ok(None);
        };
        info!("Loading pre-cached question sets for {} languages...", languages.len());

        let mut questions = BTreeMap::new();
        for language in &languages {
            match read_blob::<Vec<Question>>(&self.questions_path(language))? {
                Some(list) => {
                    questions.insert(language.clone(), list);
                }
                None => return Ok(None),
            }
        }

        Ok(Some(CachedCorpus { languages, questions }))
    }
}

fn write_blob<T: Serialize>(path: &Path, payload: &T) -> Result<(), KikimineError> {
    let blob = CacheBlob { schema_version: CACHE_SCHEMA_VERSION, payload };
    let encoded = bincode::serde::encode_to_vec(&blob, bincode::config::standard())?;
    let compressed = zstd::encode_all(encoded.as_slice(), 0)?;
    fs::write(path, compressed)?;
    Ok(())
}

fn read_blob<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, KikimineError> {
    if !path.exists() {
        return Ok(None);
    }

    let compressed = fs::read(path)?;
    let encoded = zstd::decode_all(compressed.as_slice())?;
    let (blob, _): (CacheBlob<T>, usize) =
        bincode::serde::decode_from_slice(&encoded, bincode::config::standard())?;

    if blob.schema_version != CACHE_SCHEMA_VERSION {
        warn!(
            "Cache blob {:?} has schema version {} (expected {}), regenerating",
            path, blob.schema_version, CACHE_SCHEMA_VERSION
        );
        return Ok(None);
    }
    Ok(Some(blob.payload))
}
