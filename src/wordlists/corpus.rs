//! The production word source

use super::loader::{load_from_file, words_from_slice};
use super::{ALLOWED, ANSWERS};
use crate::core::Word;
use crate::game::{SourceError, WordSource};
use log::{debug, info};
use rand::SeedableRng;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rustc_hash::FxHashSet;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver};
use std::thread;

/// Answer pool plus accepted-guess set
///
/// Every answer is also an accepted guess, even when the allowed list given at
/// construction does not mention it.
pub struct Corpus {
    answers: Vec<Word>,
    allowed: FxHashSet<String>,
    rng: StdRng,
}

impl Corpus {
    /// Build a corpus from already parsed words
    ///
    /// # Errors
    ///
    /// Returns `SourceError::EmptyCorpus` if there are no answers.
    pub fn new(answers: Vec<Word>, allowed: Vec<Word>) -> Result<Self, SourceError> {
        if answers.is_empty() {
            return Err(SourceError::EmptyCorpus);
        }

        let allowed = allowed
            .iter()
            .chain(&answers)
            .map(|w| w.text().to_string())
            .collect();

        Ok(Self {
            answers,
            allowed,
            rng: StdRng::from_os_rng(),
        })
    }

    /// Build a corpus from string slices, skipping malformed entries
    ///
    /// # Errors
    ///
    /// Returns `SourceError::EmptyCorpus` if no answer is a valid word.
    pub fn from_words(answers: &[&str], allowed: &[&str]) -> Result<Self, SourceError> {
        Self::new(words_from_slice(answers), words_from_slice(allowed))
    }

    /// The word lists compiled into the binary
    ///
    /// # Errors
    ///
    /// Returns `SourceError::EmptyCorpus` if the embedded answer list is empty.
    pub fn embedded() -> Result<Self, SourceError> {
        Self::from_words(ANSWERS, ALLOWED)
    }

    /// Load answers and, optionally, extra allowed guesses from files
    ///
    /// # Errors
    ///
    /// Returns `SourceError::Io` if a file cannot be read and
    /// `SourceError::EmptyCorpus` if the answers file has no valid words.
    pub fn from_files(answers: &Path, allowed: Option<&Path>) -> Result<Self, SourceError> {
        let answers = read_list(answers)?;
        let allowed = allowed.map(read_list).transpose()?.unwrap_or_default();
        Self::new(answers, allowed)
    }

    /// Make secret draws reproducible
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    #[must_use]
    pub fn answer_count(&self) -> usize {
        self.answers.len()
    }

    #[must_use]
    pub fn allowed_count(&self) -> usize {
        self.allowed.len()
    }
}

impl WordSource for Corpus {
    fn draw_secret(&mut self) -> Result<Word, SourceError> {
        self.answers
            .choose(&mut self.rng)
            .cloned()
            .ok_or(SourceError::EmptyCorpus)
    }

    fn is_valid(&self, word: &str) -> bool {
        self.allowed.contains(&word.to_ascii_uppercase())
    }
}

/// Where the corpus comes from, as chosen on the command line
#[derive(Debug, Clone, Default)]
pub struct CorpusConfig {
    /// Answers file; the embedded lists are used when absent
    pub answers: Option<PathBuf>,
    /// Extra accepted guesses
    pub allowed: Option<PathBuf>,
    pub seed: Option<u64>,
}

impl CorpusConfig {
    /// Build the corpus on the calling thread
    ///
    /// Without an answers file the embedded lists are used, and an allowed
    /// file only adds accepted guesses to them.
    ///
    /// # Errors
    ///
    /// Returns `SourceError` if a list cannot be read or has no answers.
    pub fn load(&self) -> Result<Corpus, SourceError> {
        let corpus = match (&self.answers, &self.allowed) {
            (Some(answers), allowed) => Corpus::from_files(answers, allowed.as_deref())?,
            (None, Some(allowed)) => {
                let mut extra = words_from_slice(ALLOWED);
                extra.extend(read_list(allowed)?);
                Corpus::new(words_from_slice(ANSWERS), extra)?
            }
            (None, None) => Corpus::embedded()?,
        };

        info!(
            "Loaded {} answers, {} accepted guesses",
            corpus.answer_count(),
            corpus.allowed_count()
        );

        Ok(match self.seed {
            Some(seed) => corpus.with_seed(seed),
            None => corpus,
        })
    }

    /// Build the corpus on a background thread
    ///
    /// The receiver yields exactly one result. If the thread dies first the
    /// channel disconnects, which callers report as
    /// [`SourceError::LoaderStopped`].
    #[must_use]
    pub fn spawn(self) -> Receiver<Result<Corpus, SourceError>> {
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            debug!("Loading word lists in background");
            // The receiver may be gone if the user quit while loading
            let _ = tx.send(self.load());
        });
        rx
    }
}

fn read_list(path: &Path) -> Result<Vec<Word>, SourceError> {
    load_from_file(path).map_err(|e| SourceError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn empty_answers_rejected() {
        assert!(matches!(
            Corpus::from_words(&[], &["crane"]),
            Err(SourceError::EmptyCorpus)
        ));
        assert!(matches!(
            Corpus::from_words(&["toolong", "abc"], &[]),
            Err(SourceError::EmptyCorpus)
        ));
    }

    #[test]
    fn answers_are_always_allowed() {
        let corpus = Corpus::from_words(&["crane"], &["slate"]).unwrap();
        assert!(corpus.is_valid("CRANE"));
        assert!(corpus.is_valid("slate"));
        assert!(corpus.is_valid("SlAtE"));
        assert!(!corpus.is_valid("place"));
        assert_eq!(corpus.allowed_count(), 2);
    }

    #[test]
    fn draws_come_from_answers() {
        let mut corpus = Corpus::from_words(&["crane", "slate", "place"], &[])
            .unwrap()
            .with_seed(7);
        for _ in 0..20 {
            let secret = corpus.draw_secret().unwrap();
            assert!(["CRANE", "SLATE", "PLACE"].contains(&secret.text()));
        }
    }

    #[test]
    fn seeded_draws_repeat() {
        let answers = &["crane", "slate", "place", "ghost", "audio"];
        let mut a = Corpus::from_words(answers, &[]).unwrap().with_seed(42);
        let mut b = Corpus::from_words(answers, &[]).unwrap().with_seed(42);

        for _ in 0..10 {
            assert_eq!(a.draw_secret(), b.draw_secret());
        }
    }

    #[test]
    fn embedded_corpus_is_playable() {
        let mut corpus = Corpus::embedded().unwrap();
        assert_eq!(corpus.answer_count(), ANSWERS.len());
        let secret = corpus.draw_secret().unwrap();
        assert!(corpus.is_valid(secret.text()));
    }

    #[test]
    fn from_files_reports_missing_file() {
        let err = Corpus::from_files(Path::new("/no/such/answers.txt"), None)
            .err()
            .unwrap();
        assert!(matches!(err, SourceError::Io { .. }));
    }

    #[test]
    fn config_defaults_to_embedded_lists() {
        let corpus = CorpusConfig::default().load().unwrap();
        assert_eq!(corpus.answer_count(), ANSWERS.len());
        assert!(corpus.is_valid("crane"));
    }

    #[test]
    fn config_seed_makes_draws_repeat() {
        let config = CorpusConfig {
            seed: Some(3),
            ..CorpusConfig::default()
        };
        let mut a = config.load().unwrap();
        let mut b = config.load().unwrap();
        assert_eq!(a.draw_secret(), b.draw_secret());
    }

    #[test]
    fn spawned_loader_reports_errors() {
        let config = CorpusConfig {
            answers: Some(PathBuf::from("/no/such/answers.txt")),
            ..CorpusConfig::default()
        };
        let result = config.spawn().recv().unwrap();
        assert!(matches!(result, Err(SourceError::Io { .. })));
    }

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("wordle_game_{}_{name}", std::process::id()))
    }

    #[test]
    fn config_allowed_file_extends_embedded_lists() {
        let allowed = temp_path("extra_allowed.txt");
        fs::write(&allowed, "zzzzz\n").unwrap();

        let config = CorpusConfig {
            allowed: Some(allowed.clone()),
            ..CorpusConfig::default()
        };
        let corpus = config.load().unwrap();
        assert!(corpus.is_valid("zzzzz"));
        assert!(corpus.is_valid("eerie"));
        assert!(!ANSWERS.contains(&"EERIE"));
        assert_eq!(corpus.answer_count(), ANSWERS.len());

        fs::remove_file(&allowed).unwrap();
    }

    #[test]
    fn from_files_merges_lists() {
        let answers = temp_path("merge_answers.txt");
        let allowed = temp_path("merge_allowed.txt");
        fs::write(&answers, "crane\nslate\n").unwrap();
        fs::write(&allowed, "place\nxx\n").unwrap();

        let corpus = Corpus::from_files(&answers, Some(&allowed)).unwrap();
        assert_eq!(corpus.answer_count(), 2);
        assert!(corpus.is_valid("place"));
        assert!(corpus.is_valid("crane"));

        fs::remove_file(&answers).unwrap();
        fs::remove_file(&allowed).unwrap();
    }
}
