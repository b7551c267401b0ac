//! Registration and login.

use crate::codec::DELIMITER;
use crate::error::{QuizError, Result};
use crate::model::User;

/// Username for a new account: the first three characters of the name
/// followed by the age.
pub fn derive_username(name: &str, age: u32) -> String {
    let prefix: String = name.chars().take(3).collect();
    format!("{prefix}{age}")
}

/// Reject values that would corrupt a record line.
pub fn validate_field(label: &str, value: &str) -> Result<()> {
    if value.contains(DELIMITER) {
        return Err(QuizError::Registration(format!(
            "{label} may not contain \"{DELIMITER}\""
        )));
    }
    if value.contains('\n') || value.contains('\r') {
        return Err(QuizError::Registration(format!(
            "{label} may not contain line breaks"
        )));
    }
    if value.trim() != value {
        return Err(QuizError::Registration(format!(
            "{label} may not start or end with whitespace"
        )));
    }
    Ok(())
}

/// Details collected from someone signing up.
#[derive(Debug, Clone)]
pub struct Registration {
    pub name: String,
    pub password: String,
    pub age: u32,
    pub year_group: String,
}

/// Validate a registration against existing users and build the new user.
///
/// Does not insert the user anywhere.
pub fn register(users: &[User], form: Registration) -> Result<User> {
    let name = form.name.trim();
    if name.is_empty() {
        return Err(QuizError::Registration("name is required".into()));
    }
    if form.age == 0 {
        return Err(QuizError::Registration(
            "age must be a number greater than 0".into(),
        ));
    }
    validate_field("name", name)?;
    validate_field("password", &form.password)?;
    validate_field("year group", &form.year_group)?;

    let username = derive_username(name, form.age);
    if users.iter().any(|u| u.username == username) {
        return Err(QuizError::Registration(format!(
            "username {username} already exists"
        )));
    }

    Ok(User {
        username,
        password: form.password,
        name: name.to_string(),
        age: form.age,
        year_group: form.year_group,
    })
}

/// Find the user whose credentials match exactly.
pub fn login<'a>(users: &'a [User], username: &str, password: &str) -> Option<&'a User> {
    users
        .iter()
        .find(|u| u.username == username && u.password == password)
}
