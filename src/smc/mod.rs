//! SMC Call Interface
//!
//! Provides the secure call boundary between the non-secure caller and
//! the monitor's trusted services.
//!
//! # Security Model
//! - Whitelist approach: only explicitly implemented function IDs are served
//! - All parameters are validated before use
//! - Invalid inputs return status codes, never panic
//! - The caller only ever sees a status word; no diagnostic text crosses
//!   the trust boundary

pub mod context;
pub mod handler;
pub mod validate;

pub use context::SmcContext;
pub use handler::dispatch;
pub use validate::{NsWindow, RegionCheck};

/// Status codes returned to the non-secure caller in reply slot 0.
///
/// Encoded on the wire as the two's-complement `u64` of the discriminant,
/// so `Ok` is 0 and errors are large unsigned values.
#[repr(i64)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SmcStatus {
    /// Operation completed.
    Ok = 0,
    /// Generic failure (reserved; no current path returns it).
    Error = -1,
    /// Malformed argument: bad slot id, zero or oversized length, missing key.
    InvalidParam = -2,
    /// Unknown function ID or unimplemented platform hook.
    NotSupported = -3,
    /// Address/length outside the non-secure window, or overflowing.
    AccessDenied = -4,
    /// Request exceeds a fixed trusted buffer.
    InsufficientSpace = -5,
}

impl SmcStatus {
    /// Wire encoding for a reply register.
    #[inline]
    pub const fn as_reg(self) -> u64 {
        self as i64 as u64
    }
}
