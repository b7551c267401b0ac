//! Aggregate views over stored quiz results.

use serde::Serialize;

use crate::engine::grade;
use crate::model::{Difficulty, QuizResult, User};

/// One line of a user's history.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserReportEntry {
    pub category: String,
    pub difficulty: Difficulty,
    pub percentage: f64,
    pub grade: char,
}

/// Every result recorded for a username, in the order they were taken.
pub fn user_report(results: &[QuizResult], username: &str) -> Vec<UserReportEntry> {
    results
        .iter()
        .filter(|r| r.username == username)
        .map(|r| UserReportEntry {
            category: r.category.clone(),
            difficulty: r.difficulty,
            percentage: r.percentage,
            grade: grade(r.percentage),
        })
        .collect()
}

/// Summary of every attempt at one category and difficulty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuizReport {
    pub category: String,
    pub difficulty: Difficulty,
    pub attempts: usize,
    /// 0 when there are no attempts.
    pub average: f64,
    pub highest: f64,
    /// Who scored `highest`, if anyone scored above 0.
    pub top_username: Option<String>,
    /// The registered user behind `top_username`, when one exists.
    pub top_user: Option<User>,
}

/// Average and best score for `category` at `difficulty`.
///
/// The first result to strictly exceed the running best takes the top spot,
/// so ties go to whoever got there first.
pub fn quiz_report(
    users: &[User],
    results: &[QuizResult],
    category: &str,
    difficulty: Difficulty,
) -> QuizReport {
    let mut total = 0.0;
    let mut attempts = 0usize;
    let mut highest = 0.0;
    let mut top_username: Option<&str> = None;

    for r in results
        .iter()
        .filter(|r| r.category == category && r.difficulty == difficulty)
    {
        total += r.percentage;
        attempts += 1;
        if r.percentage > highest {
            highest = r.percentage;
            top_username = Some(r.username.as_str());
        }
    }

    let average = if attempts == 0 {
        0.0
    } else {
        total / attempts as f64
    };

    let top_user = top_username
        .and_then(|name| users.iter().find(|u| u.username == name))
        .cloned();

    QuizReport {
        category: category.to_string(),
        difficulty,
        attempts,
        average,
        highest,
        top_username: top_username.map(str::to_string),
        top_user,
    }
}
