use std::path::Path;

use jieba_rs::Jieba;
use nlpo3::tokenizer::{newmm::NewmmTokenizer, tokenizer_trait::Tokenizer};
use regex::Regex;

use super::{strategy::SegmentStrategy, wordlist::ensure_thai_wordlist};
use crate::KikimineError;

// U+02BC, the suffix marker Turkish orthography uses where ASCII text has a
// plain apostrophe. It counts as a word character, an ASCII ' does not.
const TURKISH_APOSTROPHE: char = '\u{02bc}';

/// Locale-aware sentence splitter, built once per language. The segmented
/// variants own their dictionaries, so construction can be expensive; calls
/// to [`Segmenter::tokenize`] are pure.
pub enum Segmenter {
    Pattern { words: Regex },
    Turkish { words: Regex },
    Chinese { jieba: Jieba },
    Thai { newmm: NewmmTokenizer },
}

impl Segmenter {
    pub fn for_language(
        strategy: SegmentStrategy,
        dictionary_dir: &Path,
    ) -> Result<Self, KikimineError> {
        let segmenter = match strategy {
            SegmentStrategy::Default => Segmenter::Pattern { words: word_pattern()? },
            SegmentStrategy::TurkishApostrophe => Segmenter::Turkish { words: word_pattern()? },
            SegmentStrategy::ChineseSegmented => Segmenter::Chinese { jieba: Jieba::new() },
            SegmentStrategy::ThaiSegmented => {
                let wordlist = ensure_thai_wordlist(dictionary_dir)?;
                Segmenter::Thai { newmm: NewmmTokenizer::new(&wordlist.to_string_lossy()) }
            }
        };
        Ok(segmenter)
    }

    /// Ordered tokens with original casing and diacritics preserved.
    /// Whitespace-only spans are never emitted; punctuation spans are kept
    /// as their own tokens.
    pub fn tokenize(&self, sentence: &str) -> Vec<String> {
        let tokens: Vec<String> = match self {
            Segmenter::Pattern { words } => split_spans(words, sentence)
                .into_iter()
                .map(str::to_string)
                .collect(),
            Segmenter::Turkish { words } => {
                let marked = sentence.replace('\'', "\u{02bc}");
                split_spans(words, &marked)
                    .into_iter()
                    .map(|span| span.replace(TURKISH_APOSTROPHE, "'"))
                    .collect()
            }
            Segmenter::Chinese { jieba } => jieba
                .cut(sentence, true)
                .into_iter()
                .map(str::to_string)
                .collect(),
            Segmenter::Thai { newmm } => newmm.segment_to_string(sentence, true, false),
        };

        tokens.into_iter().filter(|token| !token.trim().is_empty()).collect()
    }
}

fn word_pattern() -> Result<Regex, KikimineError> {
    Ok(Regex::new(r"\w+")?)
}

// Alternating word/non-word spans in input order; the caller drops the
// whitespace-only ones.
fn split_spans<'a>(words: &Regex, text: &'a str) -> Vec<&'a str> {
    let mut spans = Vec::new();
    let mut last = 0;

    for hit in words.find_iter(text) {
        if hit.start() > last {
            spans.push(&text[last..hit.start()]);
        }
        spans.push(hit.as_str());
        last = hit.end();
    }
    if last < text.len() {
        spans.push(&text[last..]);
    }

    spans
}
