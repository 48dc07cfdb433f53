use std::collections::BTreeMap;

use log::info;
use rayon::prelude::*;

use crate::{
    core::{
        frequency::FrequencyTable,
        models::{LanguageData, Question},
        pipeline::{load_language, LoaderContext},
    },
    corpus,
    KikimineError,
};

pub const DEFAULT_WORKERS: usize = 4;

/// Merged output of a full corpus pass, keyed by language.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedCorpus {
    pub languages: Vec<String>,
    pub questions: BTreeMap<String, Vec<Question>>,
    pub frequencies: BTreeMap<String, FrequencyTable>,
}

/// Fan the language loader out over a bounded worker pool and merge.
///
/// Languages are fully independent, so the pool is purely a throughput
/// knob: every worker owns its language's table and question list, and
/// nothing is shared until the reduction after all workers return. Any
/// failing language fails the whole orchestration.
pub fn load_all_languages(
    ctx: &LoaderContext<'_>,
    languages: Option<Vec<String>>,
    workers: usize,
) -> Result<LoadedCorpus, KikimineError> {
    let languages = match languages {
        Some(languages) => languages,
        None => corpus::discover_languages(ctx.corpus_root)?,
    };
    info!("Loading {} languages on {} workers", languages.len(), workers);

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .build()
        .map_err(|e| KikimineError::WorkerPool(e.to_string()))?;

    let results: Vec<LanguageData> = pool.install(|| {
        languages
            .par_iter()
            .map(|language| load_language(ctx, language))
            .collect::<Result<_, _>>()
    })?;

    let mut questions = BTreeMap::new();
    let mut frequencies = BTreeMap::new();
    for data in results {
        questions.insert(data.language.clone(), data.questions);
        frequencies.insert(data.language, data.frequency);
    }

    Ok(LoadedCorpus { languages, questions, frequencies })
}

#[cfg(test)]
mod tests {
    use super::load_all_languages;
    use crate::{
        audio::stub::FixedDurations,
        core::pipeline::LoaderContext,
        distractors::stub::EveryOtherWord,
    };

    #[test]
    fn loads_discovered_languages_and_merges_results() {
        let dir = tempfile::tempdir().unwrap();
        crate::corpus::fixtures::write_language(dir.path(), "en", &[("a.mp3", "go fast")]);
        crate::corpus::fixtures::write_language(dir.path(), "fi", &[("b.mp3", "terve")]);

        let audio = FixedDurations::uniform(1.0);
        let distractors = EveryOtherWord;
        let ctx = LoaderContext {
            corpus_root: dir.path(),
            dictionary_dir: dir.path(),
            audio: &audio,
            distractors: &distractors,
        };

        let corpus = load_all_languages(&ctx, None, 2).unwrap();

        assert_eq!(corpus.languages, vec!["en".to_string(), "fi".to_string()]);
        assert_eq!(corpus.questions["en"].len(), 1);
        assert_eq!(corpus.questions["fi"].len(), 1);
        assert_eq!(corpus.frequencies["en"].count("fast"), 1);
        assert_eq!(corpus.frequencies["fi"].count("terve"), 1);
    }

    #[test]
    fn explicit_language_subset_skips_the_rest() {
        let dir = tempfile::tempdir().unwrap();
        crate::corpus::fixtures::write_language(dir.path(), "en", &[("a.mp3", "go")]);
        crate::corpus::fixtures::write_language(dir.path(), "fi", &[("b.mp3", "hei")]);

        let audio = FixedDurations::uniform(1.0);
        let distractors = EveryOtherWord;
        let ctx = LoaderContext {
            corpus_root: dir.path(),
            dictionary_dir: dir.path(),
            audio: &audio,
            distractors: &distractors,
        };

        let corpus = load_all_languages(&ctx, Some(vec!["fi".to_string()]), 2).unwrap();

        assert_eq!(corpus.languages, vec!["fi".to_string()]);
        assert!(!corpus.questions.contains_key("en"));
    }

    #[test]
    fn one_failing_language_fails_the_orchestration() {
        let dir = tempfile::tempdir().unwrap();
        crate::corpus::fixtures::write_language(dir.path(), "en", &[("a.mp3", "go")]);

        let audio = FixedDurations::uniform(1.0);
        let distractors = EveryOtherWord;
        let ctx = LoaderContext {
            corpus_root: dir.path(),
            dictionary_dir: dir.path(),
            audio: &audio,
            distractors: &distractors,
        };

        let missing = Some(vec!["en".to_string(), "xx".to_string()]);
        assert!(load_all_languages(&ctx, missing, 2).is_err());
    }
}
