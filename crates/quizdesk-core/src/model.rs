//! Core data model types for quizdesk.
//!
//! Users and results are flat records; questions are grouped by category
//! into [`Quizzes`].

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::codec::{Record, Recordable};
use crate::error::{QuizError, Result};

/// A registered user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// First three characters of the name followed by the age.
    pub username: String,
    /// Stored and compared as plain text.
    pub password: String,
    pub name: String,
    pub age: u32,
    pub year_group: String,
}

impl Recordable for User {
    const FIELDS: &'static [&'static str] =
        &["username", "password", "name", "age", "year_group"];

    fn to_values(&self) -> Vec<String> {
        vec![
            self.username.clone(),
            self.password.clone(),
            self.name.clone(),
            self.age.to_string(),
            self.year_group.clone(),
        ]
    }

    fn from_record(record: &Record) -> Result<Self> {
        Ok(Self {
            username: record.get("username")?.to_string(),
            password: record.get("password")?.to_string(),
            name: record.get("name")?.to_string(),
            age: record.get_u32("age")?,
            year_group: record.get("year_group")?.to_string(),
        })
    }
}

/// A multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub question: String,
    pub correct: String,
    /// Wrong answers in file order. Harder difficulties use more of them.
    pub incorrect: Vec<String>,
}

/// Quiz categories keyed by name. Iteration order is alphabetical.
pub type Quizzes = BTreeMap<String, Vec<Question>>;

/// Quiz difficulty. Determines how many options each question offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// All difficulties in menu order.
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Total options per question: one correct plus the rest incorrect.
    pub fn option_count(self) -> usize {
        match self {
            Difficulty::Easy => 2,
            Difficulty::Medium => 3,
            Difficulty::Hard => 4,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "Easy" => Ok(Difficulty::Easy),
            "Medium" => Ok(Difficulty::Medium),
            "Hard" => Ok(Difficulty::Hard),
            other => Err(format!("unknown difficulty: {other}")),
        }
    }
}

/// The outcome of one completed quiz. Append-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizResult {
    pub username: String,
    pub category: String,
    pub difficulty: Difficulty,
    /// In `[0, 100]`.
    pub percentage: f64,
}

impl Recordable for QuizResult {
    const FIELDS: &'static [&'static str] =
        &["username", "category", "difficulty", "percentage"];

    fn to_values(&self) -> Vec<String> {
        vec![
            self.username.clone(),
            self.category.clone(),
            self.difficulty.to_string(),
            format_percentage(self.percentage),
        ]
    }

    fn from_record(record: &Record) -> Result<Self> {
        let difficulty: Difficulty = record
            .get("difficulty")?
            .parse()
            .map_err(|e: String| QuizError::format(record.line(), e))?;

        Ok(Self {
            username: record.get("username")?.to_string(),
            category: record.get("category")?.to_string(),
            difficulty,
            percentage: record.get_f64("percentage")?,
        })
    }
}

/// Render a percentage so whole numbers keep one decimal place (`100.0`).
pub fn format_percentage(p: f64) -> String {
    if p.fract() == 0.0 {
        format!("{p:.1}")
    } else {
        p.to_string()
    }
}
