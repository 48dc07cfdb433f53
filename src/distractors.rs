use std::collections::BTreeSet;

use crate::{
    core::{
        frequency::FrequencyTable,
        models::{DistractorMap, Question},
    },
    KikimineError,
};

/// Wrong-answer generator. Invoked exactly once per language with the
/// complete frequency table: generation cost scales with vocabulary size,
/// so calling it per question is off the table. The returned map must cover
/// every token in the table.
pub trait DistractorGenerator: Sync {
    fn generate(&self, frequency: &FrequencyTable) -> Result<DistractorMap, KikimineError>;
}

/// Offers neighbors in the frequency ranking as alternatives: words a
/// learner hears about as often as the right answer make plausible wrong
/// ones. `width` bounds the neighborhood on each side.
pub struct RankNeighborGenerator {
    pub width: usize,
}

impl Default for RankNeighborGenerator {
    fn default() -> Self {
        RankNeighborGenerator { width: 8 }
    }
}

impl DistractorGenerator for RankNeighborGenerator {
    fn generate(&self, frequency: &FrequencyTable) -> Result<DistractorMap, KikimineError> {
        let ranked = frequency.ranked();

        let mut map = DistractorMap::new();
        for (position, (word, _)) in ranked.iter().enumerate() {
            let from = position.saturating_sub(self.width);
            let to = (position + self.width + 1).min(ranked.len());

            let alternatives: BTreeSet<String> = ranked[from..to]
                .iter()
                .filter(|(other, _)| other != word)
                .map(|(other, _)| other.to_string())
                .collect();
            map.insert(word.to_string(), alternatives);
        }
        Ok(map)
    }
}

/// Populate each question's `distractors` with the restriction of the
/// per-language map to the question's own tokens. A token without an entry
/// means the generator broke its coverage contract, which is a bug, not a
/// runtime condition to recover from.
pub fn assign_distractors(
    questions: &mut [Question],
    distractors: &DistractorMap,
) -> Result<(), KikimineError> {
    for question in questions {
        let mut own = DistractorMap::new();
        for token in &question.tokenized {
            let alternatives = distractors
                .get(token)
                .ok_or_else(|| KikimineError::MissingDistractor(token.clone()))?;
            own.insert(token.clone(), alternatives.clone());
        }
        question.distractors = own;
    }
    Ok(())
}


#[cfg(test)]
mod tests {
    use super::{assign_distractors, DistractorGenerator, RankNeighborGenerator};
    use crate::{
        core::{
            frequency::FrequencyTable,
            models::{DistractorMap, Question},
        },
        KikimineError,
    };

    fn table(tokens: &[&str]) -> FrequencyTable {
        let mut table = FrequencyTable::new();
        table.record(tokens);
        table
    }

    fn question(tokens: &[&str]) -> Question {
        Question {
            path: "a.mp3".to_string(),
            sentence: tokens.join(" "),
            locale: "en".to_string(),
            audio_length: 1.0,
            chars_sec: 1.0,
            tokenized: tokens.iter().map(|t| t.to_string()).collect(),
            distractors: DistractorMap::new(),
        }
    }

    #[test]
    fn generator_covers_every_word_in_the_table() {
        let table = table(&["go", "go", "fast", "stop", "slow"]);
        let map = RankNeighborGenerator { width: 2 }.generate(&table).unwrap();

        for (word, _) in table.iter() {
            let alternatives = map.get(word).unwrap();
            assert!(!alternatives.is_empty());
            assert!(!alternatives.contains(word));
        }
    }

    #[test]
    fn assignment_restricts_the_global_map_to_own_tokens() {
        let table = table(&["go", "go", "fast", "stop", "slow"]);
        let map = RankNeighborGenerator::default().generate(&table).unwrap();

        let mut questions = vec![question(&["go", "fast"]), question(&["stop"])];
        assign_distractors(&mut questions, &map).unwrap();

        assert_eq!(
            questions[0].distractors.keys().collect::<Vec<_>>(),
            vec!["fast", "go"]
        );
        assert_eq!(questions[0].distractors["go"], map["go"]);
        assert_eq!(
            questions[1].distractors.keys().collect::<Vec<_>>(),
            vec!["stop"]
        );
    }

    #[test]
    fn duplicate_tokens_collapse_to_one_entry() {
        let table = table(&["go", "go"]);
        let map = RankNeighborGenerator::default().generate(&table).unwrap();

        let mut questions = vec![question(&["go", "go"])];
        assign_distractors(&mut questions, &map).unwrap();

        assert_eq!(questions[0].distractors.len(), 1);
    }

    #[test]
    fn missing_token_is_a_contract_violation() {
        let empty = DistractorMap::new();
        let mut questions = vec![question(&["go"])];

        let err = assign_distractors(&mut questions, &empty).unwrap_err();
        assert!(matches!(err, KikimineError::MissingDistractor(token) if token == "go"));
    }
}
