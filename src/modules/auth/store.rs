use log::{debug, warn};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

use super::errors::AuthError;
use super::hasher::{hash_password, is_digest};
use super::validator::{check_format, check_length, check_password_format, check_strength};
use crate::modules::utils::logging::log_auth_event;

/// A stored username together with the digest of its password
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub username: String,
    pub password_hash: String,
}

impl Account {
    /// Parse one `username:hash` line, splitting on the first colon
    fn from_line(line: &str) -> Option<Self> {
        let (username, password_hash) = line.split_once(':')?;
        Some(Self {
            username: username.to_string(),
            password_hash: password_hash.to_string(),
        })
    }

    fn matches(&self, username: &str, password_hash: &str) -> bool {
        self.username == username && self.password_hash == password_hash
    }
}

/// Accounts backed by a flat `username:hash` file that is rewritten on every change
#[derive(Debug)]
pub struct CredentialStore {
    accounts: Vec<Account>,
    path: PathBuf,
}

impl CredentialStore {
    /// Load the store from `path`; a missing file gives an empty store
    pub fn open(path: impl Into<PathBuf>) -> io::Result<Self> {
        let path = path.into();
        let accounts = match fs::read_to_string(&path) {
            Ok(contents) => parse_accounts(&contents),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("No account file at {}, starting empty", path.display());
                Vec::new()
            }
            Err(e) => return Err(e),
        };

        debug!("Loaded {} accounts from {}", accounts.len(), path.display());
        Ok(Self { accounts, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn contains(&self, username: &str) -> bool {
        self.accounts.iter().any(|a| a.username == username)
    }

    /// Create a new account.
    ///
    /// Checks run in a fixed order (length, format, existing username, strength)
    /// and the first failure is returned without touching the file.
    pub fn register(&mut self, username: &str, password: &str) -> Result<(), AuthError> {
        let outcome = self.try_register(username, password);
        log_outcome("register", username, &outcome);
        outcome
    }

    fn try_register(&mut self, username: &str, password: &str) -> Result<(), AuthError> {
        validate_pair(username, password)?;
        if self.contains(username) {
            return Err(AuthError::UsernameExists);
        }
        if !check_strength(password) {
            return Err(AuthError::WeakPassword);
        }

        self.accounts.push(Account {
            username: username.to_string(),
            password_hash: hash_password(password),
        });

        if let Err(e) = self.save() {
            self.accounts.pop();
            return Err(AuthError::Storage(e));
        }
        Ok(())
    }

    /// Check a username and password against the store.
    ///
    /// Unknown usernames and wrong passwords both give `InvalidCredentials`.
    pub fn authenticate(&self, username: &str, password: &str) -> Result<(), AuthError> {
        let outcome = self.try_authenticate(username, password);
        log_outcome("login", username, &outcome);
        outcome
    }

    fn try_authenticate(&self, username: &str, password: &str) -> Result<(), AuthError> {
        validate_username(username)?;

        // A password that could never have been registered is just a wrong password
        if !check_length(password) || !check_password_format(password) {
            return Err(AuthError::InvalidCredentials);
        }

        let password_hash = hash_password(password);
        if self
            .accounts
            .iter()
            .any(|a| a.matches(username, &password_hash))
        {
            Ok(())
        } else {
            Err(AuthError::InvalidCredentials)
        }
    }

    /// Replace the password of an account after verifying the old one
    pub fn reset_password(
        &mut self,
        username: &str,
        old_password: &str,
        new_password: &str,
    ) -> Result<(), AuthError> {
        let outcome = self.try_reset_password(username, old_password, new_password);
        log_outcome("reset_password", username, &outcome);
        outcome
    }

    fn try_reset_password(
        &mut self,
        username: &str,
        old_password: &str,
        new_password: &str,
    ) -> Result<(), AuthError> {
        validate_pair(username, old_password)?;
        validate_pair(username, new_password)?;
        if !check_strength(new_password) {
            return Err(AuthError::WeakPassword);
        }

        let old_hash = hash_password(old_password);
        let account = self
            .accounts
            .iter_mut()
            .find(|a| a.matches(username, &old_hash))
            .ok_or(AuthError::InvalidCredentials)?;

        let previous = std::mem::replace(&mut account.password_hash, hash_password(new_password));

        if let Err(e) = self.save() {
            if let Some(account) = self.accounts.iter_mut().find(|a| a.username == username) {
                account.password_hash = previous;
            }
            return Err(AuthError::Storage(e));
        }
        Ok(())
    }

    /// Rewrite the whole file through a temporary file in the same directory
    pub fn save(&self) -> io::Result<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut file = NamedTempFile::new_in(dir)?;
        file.write_all(serialize_accounts(&self.accounts).as_bytes())?;
        file.flush()?;
        file.as_file().sync_all()?;
        file.persist(&self.path).map_err(|e| e.error)?;

        debug!(
            "Saved {} accounts to {}",
            self.accounts.len(),
            self.path.display()
        );
        Ok(())
    }
}

fn validate_username(username: &str) -> Result<(), AuthError> {
    if !check_length(username) {
        return Err(AuthError::InvalidLength);
    }
    if !check_format(username) {
        return Err(AuthError::InvalidFormat);
    }
    Ok(())
}

fn validate_pair(username: &str, password: &str) -> Result<(), AuthError> {
    if !check_length(username) || !check_length(password) {
        return Err(AuthError::InvalidLength);
    }
    if !check_format(username) || !check_password_format(password) {
        return Err(AuthError::InvalidFormat);
    }
    Ok(())
}

fn log_outcome(event: &str, username: &str, outcome: &Result<(), AuthError>) {
    match outcome {
        Ok(()) => log_auth_event(event, username, true, None),
        Err(e) => log_auth_event(event, username, false, Some(&e.to_string())),
    }
}

/// Parse the store file, skipping lines without a colon and repeated usernames
pub fn parse_accounts(contents: &str) -> Vec<Account> {
    let mut accounts: Vec<Account> = Vec::new();
    for line in contents.lines() {
        let line = line.strip_suffix('\r').unwrap_or(line);
        let Some(account) = Account::from_line(line) else {
            continue;
        };
        if accounts.iter().any(|a| a.username == account.username) {
            warn!("Ignoring duplicate account entry in store file");
            continue;
        }
        if !is_digest(&account.password_hash) {
            // Kept so the file round-trips; no password can ever match it
            warn!("Account entry with a malformed password digest in store file");
        }
        accounts.push(account);
    }
    accounts
}

pub fn serialize_accounts(accounts: &[Account]) -> String {
    accounts
        .iter()
        .map(|a| format!("{}:{}\n", a.username, a.password_hash))
        .collect()
}
