//! # holocron-auth
//!
//! Mock session authentication for the Holocron catalog viewer.
//!
//! ## Features
//!
//! - **Credential check**: fixed in-memory user table, artificially delayed login
//! - **Pseudo-tokens**: self-describing `header.payload.signature` strings
//!   carrying `{username, iat, exp}` as base64-encoded JSON
//! - **Pluggable persistence**: the [`TokenStore`] port with in-memory and
//!   JSON-file implementations
//! - **Background refresh**: a cancellable [`RefreshTask`] that reissues the
//!   token shortly before it expires
//!
//! Tokens are **not signed**. They gate a local demo and carry no security
//! guarantees.
//!
//! ## Quick Start
//!
//! ```ignore
//! use holocron_auth::{AuthService, LoginOutcome, MemoryStore};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let auth = AuthService::new(MemoryStore::new());
//!
//!     match auth.login("admin", "password123").await? {
//!         LoginOutcome::Success { username, .. } => println!("Welcome, {username}"),
//!         LoginOutcome::Failure { error } => println!("{error}"),
//!     }
//!
//!     assert!(auth.is_authenticated()?);
//!     Ok(())
//! }
//! ```
//!
//! ### Keeping a session alive
//!
//! ```ignore
//! use std::sync::Arc;
//! use holocron_auth::{AuthService, MemoryStore, Session};
//!
//! let session = Session::new(Arc::new(AuthService::new(MemoryStore::new())));
//! session.login("luke", "skywalker").await?; // starts the refresh task
//! session.logout()?;                          // stops it
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod config;
mod error;
pub mod refresh;
pub mod service;
pub mod session;
pub mod store;
pub mod token;

pub use config::AuthConfig;
pub use error::{Error, Result};
pub use refresh::RefreshTask;
pub use service::{AuthService, CurrentUser, LoginOutcome};
pub use session::Session;
pub use store::{FileStore, MemoryStore, TokenStore};
pub use token::Claims;
