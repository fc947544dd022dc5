//! Authentication Module
//!
//! This module handles account creation, credential checks and session
//! tokens for the storefront.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── users.rs        - Account model and identifier generation
//! ├── password.rs     - Password policies and bcrypt hashing
//! ├── sessions.rs     - JWT token management
//! ├── store/          - UserStore port and its adapters
//! └── handlers/       - HTTP handlers
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Signup**: user_name, email, password → account created → confirmation
//! 2. **Register**: profile and password → account created → 1-day JWT returned
//! 3. **Login**: email and password → credentials verified → 7-day JWT returned
//! 4. **Get Me**: JWT → token verified → account returned
//!
//! # Security
//!
//! - Passwords are hashed using bcrypt (cost 10) before storage
//! - Tokens are HS256, signed with the configured secret
//! - Unknown email and wrong password are indistinguishable (401)

/// Account model
pub mod users;

/// Password policies and hashing
pub mod password;

/// JWT token generation and validation
pub mod sessions;

/// Account persistence
pub mod store;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use handlers::{get_me, login, register, signup};
pub use password::PasswordPolicy;
pub use sessions::{Claims, TokenIssuer};
pub use store::{SharedUserStore, StoreError, UserStore};
pub use users::{Account, NewAccount};
