//! Quiz administration and scoring.
//!
//! Option selection is deterministic (the first `n - 1` wrong answers in file
//! order), only their presentation order is random. Callers supply the RNG so
//! tests can seed it.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::{QuizError, Result};
use crate::model::{Difficulty, Question};

/// Letter grade bands, highest first. The first band whose minimum the
/// percentage meets wins.
pub const GRADE_THRESHOLDS: [(f64, char); 5] =
    [(90.0, 'A'), (80.0, 'B'), (70.0, 'C'), (60.0, 'D'), (0.0, 'F')];

/// Options offered per question for a difficulty label.
///
/// Unknown labels yield 0; use [`Difficulty::from_str`](std::str::FromStr)
/// to reject them before a quiz starts.
pub fn question_count(difficulty: &str) -> usize {
    difficulty
        .parse::<Difficulty>()
        .map(Difficulty::option_count)
        .unwrap_or(0)
}

/// Build the shuffled options for one question.
///
/// The correct answer always appears exactly once and no option repeats.
/// Questions with too few distinct wrong answers simply offer fewer options.
pub fn build_options<R: Rng + ?Sized>(
    question: &Question,
    difficulty: Difficulty,
    rng: &mut R,
) -> Vec<String> {
    let count = difficulty.option_count();
    let mut options = Vec::with_capacity(count);
    options.push(question.correct.clone());
    for wrong in question.incorrect.iter().take(count.saturating_sub(1)) {
        if !options.contains(wrong) {
            options.push(wrong.clone());
        }
    }
    options.shuffle(rng);
    options
}

/// Something that can pick one of the presented options.
pub trait AnswerSource {
    /// Return the index of the chosen option.
    fn choose(&mut self, question: &Question, options: &[String]) -> std::io::Result<usize>;

    /// Called after each answer is checked.
    fn on_feedback(&mut self, _question: &Question, _chosen: &str, _correct: bool) {}
}

/// Present `options` for `question` and return the chosen value.
pub fn ask(
    question: &Question,
    options: &[String],
    source: &mut dyn AnswerSource,
) -> Result<String> {
    let index = source
        .choose(question, options)
        .map_err(QuizError::Interaction)?;
    options.get(index).cloned().ok_or_else(|| {
        QuizError::Precondition(format!(
            "choice {index} out of range for {} options",
            options.len()
        ))
    })
}

/// Percentage of `answers` that match their question's correct answer.
///
/// `questions` must be non-empty and the same length as `answers`.
pub fn score(questions: &[Question], answers: &[String]) -> Result<f64> {
    if questions.is_empty() {
        return Err(QuizError::Precondition(
            "cannot score a quiz with no questions".into(),
        ));
    }
    if questions.len() != answers.len() {
        return Err(QuizError::Precondition(format!(
            "{} answers for {} questions",
            answers.len(),
            questions.len()
        )));
    }

    let correct = questions
        .iter()
        .zip(answers)
        .filter(|(q, a)| &q.correct == *a)
        .count();
    Ok(correct as f64 / questions.len() as f64 * 100.0)
}

/// Letter grade for a percentage, or `None` below zero.
pub fn try_grade(percentage: f64) -> Option<char> {
    GRADE_THRESHOLDS
        .iter()
        .find(|(min, _)| percentage >= *min)
        .map(|(_, letter)| *letter)
}

/// Letter grade for a percentage in `[0, 100]`.
pub fn grade(percentage: f64) -> char {
    try_grade(percentage).unwrap_or('F')
}

/// Summary of a completed quiz.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizOutcome {
    pub correct: usize,
    pub total: usize,
    pub percentage: f64,
    pub grade: char,
    /// Chosen values, one per question.
    pub answers: Vec<String>,
}

/// Administer every question at `difficulty` and score the answers.
pub fn run_quiz<R: Rng + ?Sized>(
    difficulty: Difficulty,
    questions: &[Question],
    source: &mut dyn AnswerSource,
    rng: &mut R,
) -> Result<QuizOutcome> {
    if questions.is_empty() {
        return Err(QuizError::Precondition(
            "cannot run a quiz with no questions".into(),
        ));
    }

    let mut answers = Vec::with_capacity(questions.len());
    let mut correct = 0;
    for question in questions {
        let options = build_options(question, difficulty, rng);
        let answer = ask(question, &options, source)?;
        let is_correct = answer == question.correct;
        if is_correct {
            correct += 1;
        }
        source.on_feedback(question, &answer, is_correct);
        answers.push(answer);
    }

    let percentage = score(questions, &answers)?;
    tracing::debug!(
        "quiz finished at {difficulty}: {correct}/{} ({percentage}%)",
        questions.len()
    );

    Ok(QuizOutcome {
        correct,
        total: questions.len(),
        percentage,
        grade: grade(percentage),
        answers,
    })
}
