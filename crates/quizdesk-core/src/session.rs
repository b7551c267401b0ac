//! Application state shared by the interactive flows.

use crate::account::{self, Registration};
use crate::error::{QuizError, Result};
use crate::model::{Difficulty, QuizResult, Quizzes, User};
use crate::store::QuizStore;

/// A collection that could not be loaded and was replaced by an empty one.
#[derive(Debug)]
pub struct LoadWarning {
    /// "Users", "Quizzes", or "Results".
    pub collection: &'static str,
    pub error: QuizError,
}

/// Users, quizzes, and results for one session, plus where to persist them.
#[derive(Debug)]
pub struct QuizContext {
    pub store: QuizStore,
    pub users: Vec<User>,
    pub quizzes: Quizzes,
    pub results: Vec<QuizResult>,
}

impl QuizContext {
    /// Empty context backed by `store`.
    pub fn empty(store: QuizStore) -> Self {
        Self {
            store,
            users: Vec::new(),
            quizzes: Quizzes::new(),
            results: Vec::new(),
        }
    }

    /// Load each collection independently. Any that fail start out empty and
    /// are reported back rather than aborting the session.
    pub fn load(store: QuizStore) -> (Self, Vec<LoadWarning>) {
        let mut warnings = Vec::new();
        let mut ctx = Self::empty(store);

        match ctx.store.load_users() {
            Ok(users) => ctx.users = users,
            Err(error) => warnings.push(LoadWarning {
                collection: "Users",
                error,
            }),
        }
        match ctx.store.load_quizzes() {
            Ok(quizzes) => ctx.quizzes = quizzes,
            Err(error) => warnings.push(LoadWarning {
                collection: "Quizzes",
                error,
            }),
        }
        match ctx.store.load_results() {
            Ok(results) => ctx.results = results,
            Err(error) => warnings.push(LoadWarning {
                collection: "Results",
                error,
            }),
        }

        for w in &warnings {
            tracing::warn!("unable to load {}: {}", w.collection, w.error);
        }

        (ctx, warnings)
    }

    /// Category names in display order.
    pub fn categories(&self) -> Vec<&str> {
        self.quizzes.keys().map(String::as_str).collect()
    }

    /// Register a new user and persist the user list.
    pub fn register_user(&mut self, form: Registration) -> Result<User> {
        let user = account::register(&self.users, form)?;
        self.users.push(user.clone());
        self.store.save_users(&self.users)?;
        tracing::info!("registered user {}", user.username);
        Ok(user)
    }

    pub fn login(&self, username: &str, password: &str) -> Option<&User> {
        account::login(&self.users, username, password)
    }

    /// Append a finished quiz and persist the result list.
    pub fn record_result(
        &mut self,
        username: &str,
        category: &str,
        difficulty: Difficulty,
        percentage: f64,
    ) -> Result<()> {
        self.results.push(QuizResult {
            username: username.to_string(),
            category: category.to_string(),
            difficulty,
            percentage,
        });
        self.store.save_results(&self.results)
    }
}
