//! The `quizdesk report` command and the report renderers shared with the
//! interactive menu.

use anyhow::{Context, Result};
use comfy_table::{Cell, Table};

use quizdesk_core::model::{format_percentage, Difficulty};
use quizdesk_core::report::{quiz_report, user_report, QuizReport, UserReportEntry};
use quizdesk_core::session::QuizContext;

/// Output format for the non-interactive report command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ReportFormat {
    Text,
    Json,
}

pub fn render_user_report(username: &str, entries: &[UserReportEntry]) -> String {
    if entries.is_empty() {
        return format!("No results for {username}");
    }

    let mut table = Table::new();
    table.set_header(vec!["Grade", "Percentage", "Category", "Difficulty"]);
    for e in entries {
        table.add_row(vec![
            Cell::new(e.grade),
            Cell::new(format!("{}%", format_percentage(e.percentage))),
            Cell::new(&e.category),
            Cell::new(e.difficulty),
        ]);
    }
    format!("User Results\n{table}")
}

pub fn render_quiz_report(report: &QuizReport) -> String {
    let mut out = format!(
        "Average : {}\nHighest : {}%\n",
        format_percentage(report.average),
        format_percentage(report.highest)
    );

    match (&report.top_user, &report.top_username) {
        (Some(user), _) => {
            let mut table = Table::new();
            table.add_row(vec![Cell::new("Username"), Cell::new(&user.username)]);
            table.add_row(vec![Cell::new("Name"), Cell::new(&user.name)]);
            table.add_row(vec![Cell::new("Age"), Cell::new(user.age)]);
            table.add_row(vec![Cell::new("Year Group"), Cell::new(&user.year_group)]);
            out.push_str(&table.to_string());
        }
        (None, Some(username)) => {
            out.push_str(&format!("Username   : {username} (no longer registered)"));
        }
        (None, None) => {}
    }

    out
}

pub fn execute_user(ctx: &QuizContext, username: &str, format: ReportFormat) -> Result<()> {
    if !ctx.users.iter().any(|u| u.username == username) {
        tracing::warn!("{username} is not a registered user");
    }
    let entries = user_report(&ctx.results, username);

    match format {
        ReportFormat::Json => {
            let json = serde_json::to_string_pretty(&entries)
                .context("failed to serialize user report")?;
            println!("{json}");
        }
        ReportFormat::Text => println!("{}", render_user_report(username, &entries)),
    }
    Ok(())
}

pub fn execute_quiz(
    ctx: &QuizContext,
    category: &str,
    difficulty: &str,
    format: ReportFormat,
) -> Result<()> {
    let difficulty: Difficulty = difficulty
        .parse()
        .map_err(|e: String| anyhow::anyhow!("{}", e))?;
    anyhow::ensure!(
        ctx.quizzes.contains_key(category),
        "unknown category '{}'. Available: {:?}",
        category,
        ctx.categories()
    );

    let report = quiz_report(&ctx.users, &ctx.results, category, difficulty);

    match format {
        ReportFormat::Json => {
            let json = serde_json::to_string_pretty(&report)
                .context("failed to serialize quiz report")?;
            println!("{json}");
        }
        ReportFormat::Text => println!("{}", render_quiz_report(&report)),
    }
    Ok(())
}
