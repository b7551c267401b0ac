//! Flat-file persistence for users, results, and quizzes.
//!
//! Users and results are one record per line. Quizzes use a block layout:
//!
//! ```text
//! Math
//! 2+2|4|3|5
//! 3*3|9|6|12|8
//!
//! Science
//! H2O is|water|salt
//! ```
//!
//! The first non-blank line of a block names the category; the lines after it
//! are `question|correct|incorrect...` until the next blank line.

use std::iter::Enumerate;
use std::path::{Path, PathBuf};
use std::str::Lines;

use crate::codec;
use crate::config::QuizdeskConfig;
use crate::error::{QuizError, Result};
use crate::model::{Question, QuizResult, Quizzes, User};

const QUESTION_FIELDS: &[&str] = &["question", "correct"];

/// Lazily yields `(category, questions)` pairs from quiz file contents.
pub struct QuizBlocks<'a> {
    lines: Enumerate<Lines<'a>>,
    failed: bool,
}

/// Parse quiz file contents into a lazy sequence of categories.
///
/// A category header followed by no questions is dropped. A trailing block
/// without a final blank line is still yielded.
pub fn parse_quizzes(content: &str) -> QuizBlocks<'_> {
    QuizBlocks {
        lines: content.lines().enumerate(),
        failed: false,
    }
}

impl Iterator for QuizBlocks<'_> {
    type Item = Result<(String, Vec<Question>)>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        let mut category: Option<String> = None;
        let mut questions = Vec::new();

        for (idx, raw) in self.lines.by_ref() {
            let line = raw.trim();

            if line.is_empty() {
                // A header with no questions yet keeps collecting past blanks.
                if !questions.is_empty() {
                    if let Some(name) = category.take() {
                        return Some(Ok((name, questions)));
                    }
                }
                continue;
            }

            if category.is_none() {
                category = Some(line.to_string());
                continue;
            }

            match parse_question(line, idx + 1) {
                Ok(q) => questions.push(q),
                Err(e) => {
                    self.failed = true;
                    return Some(Err(e));
                }
            }
        }

        match category {
            Some(name) if !questions.is_empty() => Some(Ok((name, questions))),
            _ => None,
        }
    }
}

fn parse_question(line: &str, line_no: usize) -> Result<Question> {
    let record = codec::decode(line, QUESTION_FIELDS, line_no)?;
    Ok(Question {
        question: record.get("question")?.to_string(),
        correct: record.get("correct")?.to_string(),
        incorrect: record.rest().to_vec(),
    })
}

/// Read a whole data file, mapping IO failures to [`QuizError::Load`].
fn read_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| QuizError::Load {
        path: path.to_path_buf(),
        source,
    })
}

fn malformed(path: &Path) -> impl FnOnce(QuizError) -> QuizError + '_ {
    move |e| QuizError::Malformed {
        path: path.to_path_buf(),
        source: Box::new(e),
    }
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    let save_err = |source| QuizError::Save {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(save_err)?;
    }
    std::fs::write(path, contents).map_err(save_err)
}

/// Load all users from `path`.
pub fn load_users(path: &Path) -> Result<Vec<User>> {
    let users: Vec<User> = codec::decode_records(&read_file(path)?).map_err(malformed(path))?;
    tracing::debug!("loaded {} users from {}", users.len(), path.display());
    Ok(users)
}

/// Overwrite `path` with `users`.
pub fn save_users(path: &Path, users: &[User]) -> Result<()> {
    write_file(path, &codec::encode_records(users))?;
    tracing::debug!("saved {} users to {}", users.len(), path.display());
    Ok(())
}

/// Load all quiz results from `path`.
pub fn load_results(path: &Path) -> Result<Vec<QuizResult>> {
    let results: Vec<QuizResult> =
        codec::decode_records(&read_file(path)?).map_err(malformed(path))?;
    tracing::debug!("loaded {} results from {}", results.len(), path.display());
    Ok(results)
}

/// Overwrite `path` with `results`. The full list is rewritten every time.
pub fn save_results(path: &Path, results: &[QuizResult]) -> Result<()> {
    write_file(path, &codec::encode_records(results))?;
    tracing::debug!("saved {} results to {}", results.len(), path.display());
    Ok(())
}

/// Load every category from a quiz file. Later duplicates of a category
/// name replace earlier ones.
pub fn load_quizzes(path: &Path) -> Result<Quizzes> {
    let content = read_file(path)?;
    let quizzes = parse_quizzes(&content)
        .collect::<Result<Quizzes>>()
        .map_err(malformed(path))?;
    tracing::debug!(
        "loaded {} quiz categories from {}",
        quizzes.len(),
        path.display()
    );
    Ok(quizzes)
}

/// The three data files an application instance reads and writes.
#[derive(Debug, Clone)]
pub struct QuizStore {
    users: PathBuf,
    quizzes: PathBuf,
    results: PathBuf,
}

impl QuizStore {
    pub fn new(users: PathBuf, quizzes: PathBuf, results: PathBuf) -> Self {
        Self {
            users,
            quizzes,
            results,
        }
    }

    /// Store using the default file names inside `dir`.
    pub fn in_dir(dir: &Path) -> Self {
        Self::from_config(&QuizdeskConfig {
            data_dir: dir.to_path_buf(),
            ..QuizdeskConfig::default()
        })
    }

    pub fn from_config(config: &QuizdeskConfig) -> Self {
        Self::new(
            config.users_path(),
            config.quizzes_path(),
            config.results_path(),
        )
    }

    pub fn users_path(&self) -> &Path {
        &self.users
    }

    pub fn quizzes_path(&self) -> &Path {
        &self.quizzes
    }

    pub fn results_path(&self) -> &Path {
        &self.results
    }

    pub fn load_users(&self) -> Result<Vec<User>> {
        load_users(&self.users)
    }

    pub fn save_users(&self, users: &[User]) -> Result<()> {
        save_users(&self.users, users)
    }

    pub fn load_results(&self) -> Result<Vec<QuizResult>> {
        load_results(&self.results)
    }

    pub fn save_results(&self, results: &[QuizResult]) -> Result<()> {
        save_results(&self.results, results)
    }

    pub fn load_quizzes(&self) -> Result<Quizzes> {
        load_quizzes(&self.quizzes)
    }
}
