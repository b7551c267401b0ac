//! quizdesk-core — record codec, flat-file store, and quiz engine.
//!
//! This crate holds everything the quizdesk console application does that is
//! not terminal interaction: the `|`-delimited record format, loading and
//! saving the three data files, option selection and scoring, and reports.

pub mod account;
pub mod codec;
pub mod config;
pub mod engine;
pub mod error;
pub mod model;
pub mod report;
pub mod session;
pub mod store;

pub use error::{QuizError, Result};
