//! Login / registration prompt
//!
//! Asks for a username, then either the existing account's password or a
//! new password for a first-time username.

use std::io::{BufRead, Write};

use crate::error::TrackerResult;
use crate::services::{AuthOutcome, AuthService};
use crate::storage::CredentialStore;

use super::console::Console;

/// Run the login prompt, allowing up to `attempts` tries
///
/// Returns the authenticated username, or `None` if every attempt failed or
/// input ended. Errors reading or writing the credential file are returned.
pub fn run_login<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    store: &CredentialStore,
    auth: &AuthService<'_>,
    attempts: u32,
) -> TrackerResult<Option<String>> {
    console.say("===== LOGIN / REGISTER =====")?;

    for attempt in 1..=attempts {
        let Some(username) = console.prompt("Enter username: ")? else {
            return Ok(None);
        };
        let username = username.trim().to_string();

        let mut users = store.load()?;
        let password_prompt = if users.contains_key(&username) {
            "Enter password: "
        } else {
            console.say("No account found. Create a new one.")?;
            "Set password: "
        };

        let Some(password) = console.prompt_password(password_prompt)? else {
            return Ok(None);
        };

        match auth.authenticate(&username, &password, &mut users) {
            Ok(AuthOutcome::Success) => {
                console.say("Login successful!")?;
                return Ok(Some(username));
            }
            Ok(AuthOutcome::NewAccount) => {
                console.say("Account created successfully!")?;
                return Ok(Some(username));
            }
            Ok(AuthOutcome::Failure) => console.say("Incorrect password!")?,
            Err(e) if e.is_validation() => console.say(e)?,
            Err(e) => return Err(e),
        }

        if attempt < attempts {
            console.say(format!("Attempts left: {}", attempts - attempt))?;
        }
    }

    Ok(None)
}
