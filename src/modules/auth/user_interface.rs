// src/modules/auth/user_interface.rs
use itertools::Itertools;
use std::io::{self, Write};

use super::errors::AuthError;
use super::store::CredentialStore;
use super::validator::missing_requirements;
use crate::modules::utils::io::Prompter;

/// Commands understood by the account shell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountCommand {
    Register,
    Login,
    ResetPassword,
    Exit,
}

impl AccountCommand {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "register" => Some(AccountCommand::Register),
            "login" => Some(AccountCommand::Login),
            "resetPassword" | "reset-password" => Some(AccountCommand::ResetPassword),
            "exit" | "quit" => Some(AccountCommand::Exit),
            _ => None,
        }
    }
}

/// Message shown to the user for the outcome of an account operation.
///
/// `password` is the password whose strength was checked, used to list what
/// a weak password is missing.
pub fn describe_outcome(
    command: AccountCommand,
    outcome: &Result<(), AuthError>,
    password: &str,
) -> String {
    match outcome {
        Ok(()) => match command {
            AccountCommand::Register => "Registration successful".to_string(),
            AccountCommand::Login => "Login successful".to_string(),
            AccountCommand::ResetPassword => "Password reset successful".to_string(),
            AccountCommand::Exit => "Goodbye!".to_string(),
        },
        Err(AuthError::InvalidLength) => {
            "Username and password must be between 6 and 20 characters".to_string()
        }
        Err(AuthError::InvalidFormat) => {
            "Username may only contain letters, digits and underscores; passwords may also use special characters".to_string()
        }
        Err(AuthError::WeakPassword) => format!(
            "Password is too weak, it needs {}",
            missing_requirements(password).iter().join(", ")
        ),
        Err(e) => e.to_string(),
    }
}

/// Run the interactive account shell until `exit` or end of input
pub fn run_account_shell<P: Prompter, W: Write>(
    store: &mut CredentialStore,
    input: &mut P,
    out: &mut W,
) -> io::Result<()> {
    loop {
        let Some(choice) = input.line("Enter command (register, login, resetPassword, exit): ")?
        else {
            return Ok(());
        };
        if choice.trim().is_empty() {
            continue;
        }

        let Some(command) = AccountCommand::parse(&choice) else {
            writeln!(out, "Invalid command, please try again")?;
            continue;
        };

        let message = match command {
            AccountCommand::Exit => {
                writeln!(out, "Goodbye!")?;
                return Ok(());
            }
            AccountCommand::Register => match handle_register(store, input)? {
                Some(message) => message,
                None => return Ok(()),
            },
            AccountCommand::Login => match handle_login(store, input)? {
                Some(message) => message,
                None => return Ok(()),
            },
            AccountCommand::ResetPassword => match handle_reset_password(store, input)? {
                Some(message) => message,
                None => return Ok(()),
            },
        };
        writeln!(out, "{}", message)?;
    }
}

/// Prompt for registration details; `None` when input ends mid-way
pub fn handle_register<P: Prompter>(
    store: &mut CredentialStore,
    input: &mut P,
) -> io::Result<Option<String>> {
    let Some(username) = input.line("Username: ")? else {
        return Ok(None);
    };
    let Some(password) = input.secret("Password: ")? else {
        return Ok(None);
    };

    let outcome = store.register(&username, &password);
    Ok(Some(describe_outcome(
        AccountCommand::Register,
        &outcome,
        &password,
    )))
}

pub fn handle_login<P: Prompter>(
    store: &CredentialStore,
    input: &mut P,
) -> io::Result<Option<String>> {
    let Some(username) = input.line("Username: ")? else {
        return Ok(None);
    };
    let Some(password) = input.secret("Password: ")? else {
        return Ok(None);
    };

    let outcome = store.authenticate(&username, &password);
    Ok(Some(describe_outcome(AccountCommand::Login, &outcome, &password)))
}

pub fn handle_reset_password<P: Prompter>(
    store: &mut CredentialStore,
    input: &mut P,
) -> io::Result<Option<String>> {
    let Some(username) = input.line("Username: ")? else {
        return Ok(None);
    };
    let Some(old_password) = input.secret("Current password: ")? else {
        return Ok(None);
    };
    let Some(new_password) = input.secret("New password: ")? else {
        return Ok(None);
    };

    let outcome = store.reset_password(&username, &old_password, &new_password);
    Ok(Some(describe_outcome(
        AccountCommand::ResetPassword,
        &outcome,
        &new_password,
    )))
}
