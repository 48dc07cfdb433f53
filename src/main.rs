use std::{env, path::Path, process};

use kikimine::{
    audio::SymphoniaDurations,
    config::Config,
    core::pipeline::LoaderContext,
    distractors::RankNeighborGenerator,
    persistence::CacheStore,
};

const CONFIG_FILE: &str = "kikimine.json";

fn main() {
    env_logger::init();

    let config = Config::load_or_default(Path::new(CONFIG_FILE));

    // Language codes on the command line restrict the pass; no args
    // regenerates every language found under the corpus root.
    let args: Vec<String> = env::args().skip(1).collect();
    let languages = if args.is_empty() { None } else { Some(args) };

    let audio = SymphoniaDurations;
    let distractors = RankNeighborGenerator { width: config.distractor_width };
    let ctx = LoaderContext {
        corpus_root: &config.corpus_dir,
        dictionary_dir: &config.dictionary_dir,
        audio: &audio,
        distractors: &distractors,
    };

    let store = CacheStore::new(&config.cache_dir);
    match store.regenerate(&ctx, languages, config.workers) {
        Ok(corpus) => {
            for language in &corpus.languages {
                let count = corpus.questions.get(language).map_or(0, Vec::len);
                println!("{}: {} questions", language, count);
            }
        }
        Err(e) => {
            eprintln!("Cache regeneration failed: {}", e);
            process::exit(1);
        }
    }
}
