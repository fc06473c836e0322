//! Trusted Runtime Services
//!
//! The service implementations behind the dispatcher:
//! - [`secstore`]: confidential byte store with bounded copy-in/copy-out
//! - [`keystore`]: fixed-slot key storage, import only
//! - [`crypto`]: in-place symmetric transform over caller memory
//! - [`power`]: platform power hooks, stubbed in this core
//!
//! Every service takes the non-secure window and raw caller arguments
//! and performs its own guard checks before any copy; rejection means no
//! mutation at all.

pub mod crypto;
pub mod keystore;
pub mod power;
pub mod secstore;
