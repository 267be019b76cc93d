// MIT License - Copyright (c) 2026 Peter Wright
// Tapo bulb group control
//
//! # bulbctl
//!
//! Switch named groups of TP-Link Tapo smart bulbs on or off.
//!
//! This crate is orchestration over the [`tapo`] device-communication
//! library: it resolves a friendly group name to bulb host addresses, opens
//! an authenticated session to each bulb in turn, and issues one high-level
//! on/off/toggle command per device. The vendor protocol, encryption, and
//! session handling all live in `tapo`.
//!
//! ## Quick Start
//!
//! ```no_run
//! use bulbctl::{Bulb, BulbAction, Credentials, GroupTable};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let credentials = Credentials::new("user@example.com", "secret");
//!
//!     let table = GroupTable::builtin();
//!     for host in table.hosts_for("decke")? {
//!         let bulb = Bulb::connect(&credentials, host).await?;
//!         bulb.apply(BulbAction::Toggle).await?;
//!     }
//!     Ok(())
//! }
//! ```

pub mod action;
pub mod bulb;
pub mod credentials;
pub mod error;
pub mod groups;

// Re-exports for convenience
pub use action::BulbAction;
pub use bulb::Bulb;
pub use credentials::{Credentials, PasswordSource};
pub use error::{BulbError, Result};
pub use groups::GroupTable;
