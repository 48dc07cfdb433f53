use std::path::Path;

use log::info;

use super::{
    difficulty::sort_by_difficulty,
    errors::KikimineError,
    frequency::FrequencyTable,
    models::{DistractorMap, LanguageData, Question},
};
use crate::{
    audio::AudioDurations,
    corpus,
    distractors::{assign_distractors, DistractorGenerator},
    segmentation::{SegmentStrategy, Segmenter},
};

/// Collaborators shared by every per-language load. All references, so one
/// context can be handed to a whole worker pool.
pub struct LoaderContext<'a> {
    pub corpus_root: &'a Path,
    pub dictionary_dir: &'a Path,
    pub audio: &'a dyn AudioDurations,
    pub distractors: &'a dyn DistractorGenerator,
}

/// Run one language through read -> accumulate -> assign -> sort.
///
/// The phases are strictly sequential: scoring and distractor generation
/// both need the finished frequency table, so neither starts until every
/// row has been read. Row-level errors (missing clip, bad corpus file)
/// abort the whole language.
pub fn load_language(
    ctx: &LoaderContext<'_>,
    language: &str,
) -> Result<LanguageData, KikimineError> {
    let strategy = SegmentStrategy::for_locale(language);
    let segmenter = Segmenter::for_language(strategy, ctx.dictionary_dir)?;

    let rows = corpus::read_rows(ctx.corpus_root, language)?;
    info!("Loading {:?} ({} rows)...", language, rows.len());

    let mut frequency = FrequencyTable::new();
    let mut questions = Vec::with_capacity(rows.len());
    for row in rows {
        let clip = corpus::clip_path(ctx.corpus_root, language, &row.path);
        let audio_length = ctx.audio.duration(&clip)?;
        if audio_length <= 0.0 {
            return Err(KikimineError::NonPositiveDuration(clip));
        }

        let chars_sec = row.sentence.chars().count() as f64 / audio_length;
        let tokenized = segmenter.tokenize(&row.sentence);
        frequency.record(&tokenized);

        questions.push(Question {
            path: row.path,
            sentence: row.sentence,
            locale: row.locale,
            audio_length,
            chars_sec,
            tokenized,
            distractors: DistractorMap::new(),
        });
    }
    info!("Done loading {:?}.", language);

    info!(
        "Generating distractors for {:?} ({} distinct tokens)...",
        language,
        frequency.len()
    );
    let distractor_map = ctx.distractors.generate(&frequency)?;
    assign_distractors(&mut questions, &distractor_map)?;

    sort_by_difficulty(&mut questions, &frequency);

    Ok(LanguageData { language: language.to_string(), questions, frequency })
}
