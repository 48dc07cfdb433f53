use std::{
    fs::{self, File},
    io::{self, Cursor},
    path::{Path, PathBuf},
};

use log::info;
use reqwest::blocking::get;

use crate::KikimineError;

const THAI_WORDLIST_URL: &str =
    "https://raw.githubusercontent.com/PyThaiNLP/pythainlp/dev/pythainlp/corpus/words_th.txt";
const THAI_WORDLIST_FILE: &str = "words_th.txt";

/// Fetch the newmm wordlist into the dictionary directory if it is not
/// already there, and return its path.
pub fn ensure_thai_wordlist(dictionary_dir: &Path) -> Result<PathBuf, KikimineError> {
    let wordlist_path = dictionary_dir.join(THAI_WORDLIST_FILE);

    if wordlist_path.exists() {
        return Ok(wordlist_path);
    }

    fs::create_dir_all(dictionary_dir)?;

    info!("Downloading Thai wordlist from {}...", THAI_WORDLIST_URL);
    let response = get(THAI_WORDLIST_URL)?;
    let mut file = File::create(&wordlist_path)?;
    io::copy(&mut Cursor::new(response.bytes()?), &mut file)?;
    info!("Saved wordlist to {:?}", wordlist_path);

    Ok(wordlist_path)
}
