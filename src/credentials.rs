// MIT License - Copyright (c) 2026 Peter Wright
// Tapo bulb group control

use std::fmt;

use keyring::Entry;
use tracing::debug;

use crate::error::Result;

/// Secret-store service the password is filed under.
pub const KEYRING_SERVICE: &str = "system";

/// Tapo account credentials.
#[derive(Clone)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

// Manual Debug so the password never ends up in log output.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Where the password came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordSource {
    Keyring,
    Prompt,
}

/// Look up the stored password for `username`, falling back to an interactive
/// hidden prompt when the store has no entry. Other store errors propagate.
pub fn obtain(username: &str) -> Result<(Credentials, PasswordSource)> {
    let entry = Entry::new(KEYRING_SERVICE, username)?;
    match entry.get_password() {
        Ok(password) => {
            debug!("Found stored password for {username}");
            Ok((Credentials::new(username, password), PasswordSource::Keyring))
        }
        Err(keyring::Error::NoEntry) => {
            let password = rpassword::prompt_password("please enter your password: ")?;
            Ok((Credentials::new(username, password), PasswordSource::Prompt))
        }
        Err(e) => Err(e.into()),
    }
}

/// Write the password back to the secret store. Called after a fully
/// successful run, so a prompted password is available next time.
pub fn store(credentials: &Credentials) -> Result<()> {
    let entry = Entry::new(KEYRING_SERVICE, credentials.username())?;
    entry.set_password(credentials.password())?;
    debug!("Stored password for {}", credentials.username());
    Ok(())
}
