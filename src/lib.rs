//! secmon - EL3 Runtime-Service Secure Monitor
//!
//! The trusted-side call handler of a firmware security monitor. A less
//! trusted execution context issues SMCs; the trap collaborator captures
//! the caller's registers into an [`SmcContext`] and hands it to
//! [`smc::dispatch`], which validates every untrusted memory reference
//! before touching it and routes the call to one of a small set of
//! trusted services.
//!
//! # Services
//! - Confidential byte store with bounds-checked copy-in/copy-out
//! - Fixed-slot key store (import only, no read-back)
//! - Symmetric in-place transform over caller memory
//! - Power-control stubs awaiting a platform implementation
//!
//! # Security Model
//! - Every caller-supplied (address, length) pair is checked against the
//!   non-secure memory window before any access
//! - Whitelist dispatch: unknown function IDs return NOT_SUPPORTED
//! - Every call returns a status; no input can fault the monitor
//! - Shared trusted state is behind spinlocks for multi-core entry
//! - Key material is volatile-zeroized before being overwritten
//!
//! # Collaborators (out of crate)
//! - Trap entry/exit and register save/restore (hands in the context)
//! - Platform power primitives (substituted via [`services::power`])
//! - The physical memory map that fixes the non-secure window at boot

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_op_in_unsafe_fn)]

pub mod monitor;
pub mod security;
pub mod services;
pub mod smc;

pub use monitor::{Monitor, MONITOR};
pub use smc::context::SmcContext;
pub use smc::SmcStatus;

/// Service version reported by GET_VERSION.
pub const VERSION_MAJOR: u64 = 1;
/// Minor service version.
pub const VERSION_MINOR: u64 = 0;

/// Version word placed in reply slot 0 by GET_VERSION: `major << 16 | minor`.
#[inline]
pub const fn version_word() -> u64 {
    (VERSION_MAJOR << 16) | VERSION_MINOR
}
