//! Security Primitives Module
//!
//! Confidential-computing hygiene for the monitor:
//! - Secret zeroization via volatile writes
//!
//! # Security Properties
//! - Key material is cleared before being overwritten
//! - Clearing cannot be optimized away by the compiler

pub mod zeroize;

pub use zeroize::Zeroize;
