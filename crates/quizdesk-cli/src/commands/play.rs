//! The interactive menu (`quizdesk play`).

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use rand::Rng;

use quizdesk_core::account::Registration;
use quizdesk_core::engine::run_quiz;
use quizdesk_core::model::{format_percentage, Difficulty, User};
use quizdesk_core::report::{quiz_report, user_report};
use quizdesk_core::session::QuizContext;
use quizdesk_core::QuizError;

use crate::commands::report::{render_quiz_report, render_user_report};
use crate::prompt::Prompt;

const MAIN_MENU: [&str; 4] = ["Register", "Login", "Report", "Exit"];
const USER_MENU: [&str; 2] = ["Take Quiz", "Return to Main Menu"];
const REPORT_MENU: [&str; 2] = ["User", "Quiz"];

/// Run the main menu until the user exits or input ends.
pub fn execute<R: BufRead, W: Write>(
    ctx: &mut QuizContext,
    prompt: &mut Prompt<R, W>,
    rng: &mut impl Rng,
) -> Result<()> {
    match main_menu(ctx, prompt, rng) {
        Err(e) if is_end_of_input(&e) => {
            tracing::debug!("input closed, leaving menu");
            Ok(())
        }
        other => other,
    }
}

fn is_end_of_input(err: &anyhow::Error) -> bool {
    err.chain().any(|cause| {
        let io_err = match cause.downcast_ref::<QuizError>() {
            Some(QuizError::Interaction(e)) => Some(e),
            _ => cause.downcast_ref::<io::Error>(),
        };
        io_err.is_some_and(|e| e.kind() == io::ErrorKind::UnexpectedEof)
    })
}

fn main_menu<R: BufRead, W: Write>(
    ctx: &mut QuizContext,
    prompt: &mut Prompt<R, W>,
    rng: &mut impl Rng,
) -> Result<()> {
    loop {
        match *prompt.pick(&MAIN_MENU)? {
            "Register" => {
                if let Some(user) = register(ctx, prompt)? {
                    user_menu(ctx, prompt, rng, &user)?;
                }
            }
            "Login" => {
                let username = prompt.input("Username: ")?;
                let password = prompt.input("Password: ")?;
                match ctx.login(&username, &password).cloned() {
                    Some(user) => user_menu(ctx, prompt, rng, &user)?,
                    None => prompt.say("Invalid Username/Password")?,
                }
            }
            "Report" => report_menu(ctx, prompt)?,
            "Exit" => return Ok(()),
            other => unreachable!("unhandled main menu option {other}"),
        }
    }
}

fn register<R: BufRead, W: Write>(
    ctx: &mut QuizContext,
    prompt: &mut Prompt<R, W>,
) -> Result<Option<User>> {
    let taken: Vec<String> = ctx.users.iter().map(|u| u.username.clone()).collect();
    let name = prompt.input_with(
        "Name: ",
        |n| !n.is_empty() && !taken.iter().any(|t| t == n),
        "Username already exists",
    )?;
    let password = prompt.input("Password: ")?;
    let age = prompt.input_with(
        "Age: ",
        |a| a.parse::<u32>().is_ok_and(|n| n > 0),
        "Age must be a number greater than 0",
    )?;
    let year_group = prompt.input("Year Group: ")?;
    prompt.say("")?;

    let form = Registration {
        name,
        password,
        age: age.parse().context("age was validated as a number")?,
        year_group,
    };

    match ctx.register_user(form) {
        Ok(user) => {
            prompt.say(format_args!("Your username is: {}\n", user.username))?;
            Ok(Some(user))
        }
        Err(QuizError::Registration(reason)) => {
            prompt.say(format_args!("Registration failed: {reason}\n"))?;
            Ok(None)
        }
        Err(e) => Err(e).context("failed to save new user"),
    }
}

fn user_menu<R: BufRead, W: Write>(
    ctx: &mut QuizContext,
    prompt: &mut Prompt<R, W>,
    rng: &mut impl Rng,
    user: &User,
) -> Result<()> {
    loop {
        prompt.say(format_args!("Hello {}", user.username))?;
        match *prompt.pick(&USER_MENU)? {
            "Take Quiz" => {
                let Some((category, difficulty)) = choose_category_and_difficulty(ctx, prompt)?
                else {
                    return Ok(());
                };
                take_quiz(ctx, prompt, rng, user, &category, difficulty)?;
            }
            "Return to Main Menu" => return Ok(()),
            other => unreachable!("unhandled user menu option {other}"),
        }
    }
}

fn take_quiz<R: BufRead, W: Write>(
    ctx: &mut QuizContext,
    prompt: &mut Prompt<R, W>,
    rng: &mut impl Rng,
    user: &User,
    category: &str,
    difficulty: Difficulty,
) -> Result<()> {
    let questions = ctx
        .quizzes
        .get(category)
        .cloned()
        .with_context(|| format!("category '{category}' disappeared"))?;

    let outcome = run_quiz(difficulty, &questions, prompt, rng)?;
    prompt.say(format_args!(
        "Result: {}/{} - {}% - {}\n",
        outcome.correct,
        outcome.total,
        format_percentage(outcome.percentage),
        outcome.grade
    ))?;

    ctx.record_result(&user.username, category, difficulty, outcome.percentage)
        .context("failed to save result")?;
    Ok(())
}

/// Returns `None` when there are no categories to choose from.
fn choose_category_and_difficulty<R: BufRead, W: Write>(
    ctx: &QuizContext,
    prompt: &mut Prompt<R, W>,
) -> Result<Option<(String, Difficulty)>> {
    let categories = ctx.categories();
    if categories.is_empty() {
        prompt.say("No Categories")?;
        return Ok(None);
    }

    prompt.say("Category:")?;
    let category = prompt.pick(&categories)?.to_string();

    prompt.say("Difficulty:")?;
    let difficulty = *prompt.pick(&Difficulty::ALL)?;

    Ok(Some((category, difficulty)))
}

fn report_menu<R: BufRead, W: Write>(ctx: &QuizContext, prompt: &mut Prompt<R, W>) -> Result<()> {
    prompt.say("Report Type:")?;
    match *prompt.pick(&REPORT_MENU)? {
        "User" => {
            if ctx.users.is_empty() {
                prompt.say("No Users")?;
                return Ok(());
            }
            prompt.say("Choose Username:")?;
            let usernames: Vec<&str> = ctx.users.iter().map(|u| u.username.as_str()).collect();
            let username = *prompt.pick(&usernames)?;

            let entries = user_report(&ctx.results, username);
            prompt.say(render_user_report(username, &entries))?;
            prompt.say("")?;
        }
        "Quiz" => {
            let Some((category, difficulty)) = choose_category_and_difficulty(ctx, prompt)? else {
                return Ok(());
            };
            let report = quiz_report(&ctx.users, &ctx.results, &category, difficulty);
            prompt.say(render_quiz_report(&report))?;
            prompt.say("")?;
        }
        other => unreachable!("unhandled report option {other}"),
    }
    Ok(())
}
