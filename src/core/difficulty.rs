use log::warn;

use super::{
    frequency::{FrequencyTable, MostCommonWord},
    models::Question,
};

/// Listening-difficulty score, lower = easier (ascending sort key).
///
/// `chars_sec * -min(relative frequency over the sentence's words)`: fast
/// speech over rare vocabulary sorts last. The minimum matters, not the mean:
/// a sentence is only as easy as its rarest word.
pub fn difficulty(
    question: &Question,
    frequency: &FrequencyTable,
    most_common: &MostCommonWord,
) -> f64 {
    let min_relative = question
        .tokenized
        .iter()
        .map(|word| frequency.count(word) as f64 / most_common.count as f64)
        .fold(f64::INFINITY, f64::min);

    if min_relative.is_finite() {
        question.chars_sec * -min_relative
    } else {
        warn!(
            "No tokens to score for clip {:?}, falling back to speech rate alone",
            question.path
        );
        question.chars_sec
    }
}

/// Stable ascending sort by difficulty. Scores are computed once per question
/// against the finished frequency table.
pub fn sort_by_difficulty(questions: &mut Vec<Question>, frequency: &FrequencyTable) {
    if frequency.is_empty() {
        // Not a single token in the whole language: every question degrades
        // to its speech rate.
        questions.sort_by(|a, b| a.chars_sec.total_cmp(&b.chars_sec));
        return;
    }

    let Some(most_common) = frequency.most_common() else {
        return;
    };

    let mut scored: Vec<(f64, Question)> = std::mem::take(questions)
        .into_iter()
        .map(|question| (difficulty(&question, frequency, &most_common), question))
        .collect();
    scored.sort_by(|a, b| a.0.total_cmp(&b.0));
    questions.extend(scored.into_iter().map(|(_, question)| question));
}
