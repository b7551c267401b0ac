//! The `quizdesk validate` command.

use anyhow::Result;

use quizdesk_core::store::QuizStore;
use quizdesk_core::QuizError;

/// Load every data file strictly and report what was found.
///
/// Missing user and result files are fine (they are created on first save);
/// a missing quiz file or any malformed record is an error.
pub fn execute(store: &QuizStore) -> Result<()> {
    let mut problems = 0;

    match store.load_quizzes() {
        Ok(quizzes) => {
            let questions: usize = quizzes.values().map(Vec::len).sum();
            println!(
                "{}: {} categories, {} questions",
                store.quizzes_path().display(),
                quizzes.len(),
                questions
            );
            for (category, qs) in &quizzes {
                let short = qs.iter().filter(|q| q.incorrect.len() < 3).count();
                if short > 0 {
                    println!(
                        "  [{category}] WARNING: {short} question(s) offer fewer options on Hard"
                    );
                }
            }
        }
        Err(e) => {
            println!("{e}");
            problems += 1;
        }
    }

    problems += report_flat(
        store.users_path().display(),
        "users",
        store.load_users().map(|u| u.len()),
    );
    problems += report_flat(
        store.results_path().display(),
        "results",
        store.load_results().map(|r| r.len()),
    );

    anyhow::ensure!(problems == 0, "{problems} data file(s) failed validation");
    println!("All data files valid.");
    Ok(())
}

fn report_flat(
    path: impl std::fmt::Display,
    noun: &str,
    loaded: quizdesk_core::Result<usize>,
) -> usize {
    match loaded {
        Ok(count) => {
            println!("{path}: {count} {noun}");
            0
        }
        Err(QuizError::Load { .. }) => {
            println!("{path}: not found (will be created on first save)");
            0
        }
        Err(e) => {
            println!("{e}");
            1
        }
    }
}
