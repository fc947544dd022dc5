/**
 * Password Policy and Credential Hashing
 *
 * This module holds the two password strength validators used by the
 * registration endpoints, and the bcrypt hashing helpers shared by
 * registration and login.
 *
 * # Policies
 *
 * `/signup` and `/register` accept different symbol sets. Both are kept as
 * distinct, named validators so neither endpoint changes which passwords it
 * accepts:
 *
 * - `PasswordPolicy::Signup` - symbols `!@#$%^&*`
 * - `PasswordPolicy::Register` - symbols `@$!%*?&`
 *
 * Each requires at least 8 characters, one ASCII letter, one ASCII digit and
 * one symbol from its set, and rejects any character outside
 * letters, digits and its own symbol set.
 *
 * # Hashing
 *
 * Passwords are hashed with bcrypt at a fixed cost of 10. Hashing and
 * verification run on the blocking thread pool so they do not stall the
 * async runtime.
 */

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

/// bcrypt cost factor applied to every stored password
pub const HASH_COST: u32 = 10;

/// Whole password drawn from letters, digits and the signup symbols, 8+ long
static SIGNUP_ALPHABET_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9!@#$%^&*]{8,}$").expect("Invalid regex"));

static REGISTER_ALPHABET_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9@$!%*?&]{8,}$").expect("Invalid regex"));

static SIGNUP_SYMBOL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[!@#$%^&*]").expect("Invalid regex"));

static REGISTER_SYMBOL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[@$!%*?&]").expect("Invalid regex"));

static LETTER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z]").expect("Invalid regex"));

static DIGIT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]").expect("Invalid regex"));

/// Named password strength validators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PasswordPolicy {
    /// Validator applied by `POST /signup`
    Signup,
    /// Validator applied by `POST /register`
    Register,
}

impl PasswordPolicy {
    /// Symbols that satisfy the "one symbol" rule for this policy
    pub fn symbols(self) -> &'static str {
        match self {
            Self::Signup => "!@#$%^&*",
            Self::Register => "@$!%*?&",
        }
    }

    /// Message returned to the client when a password is rejected
    pub fn requirement(self) -> &'static str {
        match self {
            Self::Signup => {
                "Password must be 8+ chars, include a number, letter & special character."
            }
            Self::Register => {
                "Password must be at least 8 characters long and include 1 letter, 1 number, and 1 symbol."
            }
        }
    }

    fn alphabet(self) -> &'static Regex {
        match self {
            Self::Signup => &*SIGNUP_ALPHABET_RE,
            Self::Register => &*REGISTER_ALPHABET_RE,
        }
    }

    fn symbol(self) -> &'static Regex {
        match self {
            Self::Signup => &*SIGNUP_SYMBOL_RE,
            Self::Register => &*REGISTER_SYMBOL_RE,
        }
    }

    /// Check a candidate password against this policy
    pub fn is_valid(self, password: &str) -> bool {
        self.alphabet().is_match(password)
            && LETTER_RE.is_match(password)
            && DIGIT_RE.is_match(password)
            && self.symbol().is_match(password)
    }
}

impl fmt::Display for PasswordPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Signup => f.write_str("signup"),
            Self::Register => f.write_str("register"),
        }
    }
}

/// Failure while hashing or verifying a password
#[derive(Debug, Error)]
pub enum HashError {
    #[error("bcrypt failure: {0}")]
    Bcrypt(#[from] bcrypt::BcryptError),
    #[error("hashing task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Hash a plaintext password with bcrypt
pub async fn hash_password(plaintext: &str) -> Result<String, HashError> {
    let plaintext = plaintext.to_owned();
    let digest = tokio::task::spawn_blocking(move || bcrypt::hash(plaintext, HASH_COST)).await??;
    Ok(digest)
}

/// Check a plaintext password against a stored bcrypt digest
///
/// A malformed digest is an error, not a mismatch.
pub async fn verify_password(plaintext: &str, digest: &str) -> Result<bool, HashError> {
    let plaintext = plaintext.to_owned();
    let digest = digest.to_owned();
    let valid = tokio::task::spawn_blocking(move || bcrypt::verify(plaintext, &digest)).await??;
    Ok(valid)
}

/// Digest compared against when the account does not exist
static DUMMY_DIGEST: LazyLock<Option<String>> =
    LazyLock::new(|| bcrypt::hash("unknown-account-placeholder", HASH_COST).ok());

/// Spend one bcrypt verification without a stored digest
///
/// Keeps the unknown-email path of login as slow as a wrong password.
pub async fn verify_against_dummy(plaintext: &str) -> Result<(), HashError> {
    let plaintext = plaintext.to_owned();
    tokio::task::spawn_blocking(move || {
        if let Some(digest) = DUMMY_DIGEST.as_deref() {
            let _ = bcrypt::verify(plaintext, digest);
        }
    })
    .await?;
    Ok(())
}
