//! Untrusted-Pointer Validation
//!
//! Every address the non-secure caller supplies is hostile until it has
//! been checked against the non-secure memory window. This module is the
//! single gate: trusted code only touches caller memory through the
//! validated buffer handles built here.
//!
//! # Security Principles
//! - Validate ALL inputs before use
//! - Fail-secure: deny by default
//! - Zero-length regions are rejected by policy, not silently accepted
//! - Overflow of `addr + len - 1` is its own rejection path and can
//!   never wrap around into acceptance

use super::SmcStatus;

/// Outcome of checking a caller-supplied (address, length) region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionCheck {
    /// Region lies entirely inside the non-secure window.
    InRange,
    /// Zero-length access; proves nothing, policy-rejected.
    ZeroLength,
    /// Region starts below, ends past, or wraps the address space.
    OutOfRange,
}

/// The non-secure memory window, inclusive on both ends.
///
/// Fixed by the platform memory map at boot and constant for the life of
/// the monitor; it is deliberately not adjustable through the call
/// interface.
#[derive(Debug, Clone, Copy)]
pub struct NsWindow {
    start: u64,
    end: u64,
}

impl NsWindow {
    /// Create a window covering `[start, end]`.
    #[inline]
    pub const fn new(start: u64, end: u64) -> Self {
        debug_assert!(start <= end);
        Self { start, end }
    }

    /// First address of the window.
    #[inline]
    pub const fn start(&self) -> u64 {
        self.start
    }

    /// Last address of the window.
    #[inline]
    pub const fn end(&self) -> u64 {
        self.end
    }

    /// Check a caller-supplied region against the window.
    ///
    /// Pure predicate, no side effects. Must be called before any read
    /// or write that touches a caller-supplied address; there is no code
    /// path that skips it.
    pub const fn check(&self, addr: u64, len: u64) -> RegionCheck {
        if len == 0 {
            return RegionCheck::ZeroLength;
        }
        if addr < self.start {
            return RegionCheck::OutOfRange;
        }
        // Last byte of the region; checked_add keeps a wrapping
        // (addr near u64::MAX) from masquerading as in-range.
        let last = match addr.checked_add(len - 1) {
            Some(last) => last,
            None => return RegionCheck::OutOfRange,
        };
        if last > self.end {
            return RegionCheck::OutOfRange;
        }
        RegionCheck::InRange
    }

    /// Validate a region the monitor will read from.
    ///
    /// Any rejection is reported as `AccessDenied`; the finer-grained
    /// [`RegionCheck`] distinction is kept for trusted-side logging only.
    pub fn read_buffer(&self, addr: u64, len: u64) -> Result<NsBuffer, SmcStatus> {
        match self.check(addr, len) {
            RegionCheck::InRange => Ok(NsBuffer {
                ptr: addr as usize as *const u8,
                len: len as usize,
            }),
            reject => {
                log::debug!("[SMC] region {:#x}+{:#x} rejected: {:?}", addr, len, reject);
                Err(SmcStatus::AccessDenied)
            }
        }
    }

    /// Validate a region the monitor will write to.
    pub fn write_buffer(&self, addr: u64, len: u64) -> Result<NsBufferMut, SmcStatus> {
        let buf = self.read_buffer(addr, len)?;
        Ok(NsBufferMut {
            ptr: buf.ptr as *mut u8,
            len: buf.len,
        })
    }
}

/// A validated read-only region of non-secure memory.
///
/// Only constructed after [`NsWindow::check`] passes; holding one is
/// proof the region lies inside the window.
#[derive(Debug)]
pub struct NsBuffer {
    ptr: *const u8,
    len: usize,
}

impl NsBuffer {
    /// Length in bytes (always non-zero).
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// View the region as a byte slice.
    ///
    /// The contents may still change under a racing non-secure writer
    /// (TOCTOU); callers copy into trusted storage rather than parsing
    /// in place.
    pub fn as_bytes(&self) -> &[u8] {
        // SAFETY:
        // - Pointer and length were validated against the window
        // - The window covers memory mapped for the monitor's use
        unsafe { core::slice::from_raw_parts(self.ptr, self.len) }
    }
}

/// A validated writable region of non-secure memory.
#[derive(Debug)]
pub struct NsBufferMut {
    ptr: *mut u8,
    len: usize,
}

impl NsBufferMut {
    /// Length in bytes (always non-zero).
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// View the region as a mutable byte slice.
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        // SAFETY: same validation as NsBuffer, plus the window is the
        // caller's own memory so writes cannot alias trusted state.
        unsafe { core::slice::from_raw_parts_mut(self.ptr, self.len) }
    }
}
