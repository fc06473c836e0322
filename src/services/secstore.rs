//! Confidential Byte Store
//!
//! One fixed-capacity secret buffer on the trusted side. The non-secure
//! caller can deposit bytes into it and fetch them back, but only
//! through bounded copy operations; the buffer itself is never exposed.
//!
//! # Guard Order
//! Capacity is checked before the window (an oversized request fails
//! `InsufficientSpace` even if its address range is also bad), matching
//! the stable external behavior of the service.

use crate::smc::validate::NsWindow;
use crate::smc::SmcStatus;

/// Capacity of the confidential store in bytes.
pub const STORE_SIZE: usize = 4096;

/// The trusted-side secret buffer.
pub struct SecureStore {
    data: [u8; STORE_SIZE],
}

impl SecureStore {
    /// A zeroed store.
    pub const fn new() -> Self {
        Self {
            data: [0; STORE_SIZE],
        }
    }

    /// Copy `len` bytes from caller memory into the front of the store.
    ///
    /// Bytes of the store beyond `len` keep their previous value; a
    /// short write does not clear the tail. Callers relying on the tail
    /// must track their own lengths.
    ///
    /// Fully rejects or fully copies; no partial transfer happens on any
    /// error path.
    pub fn write_in(&mut self, win: &NsWindow, src_addr: u64, len: u64) -> Result<(), SmcStatus> {
        if len > STORE_SIZE as u64 {
            return Err(SmcStatus::InsufficientSpace);
        }
        let src = win.read_buffer(src_addr, len)?;
        self.data[..src.len()].copy_from_slice(src.as_bytes());
        Ok(())
    }

    /// Copy `len` bytes from the front of the store out to caller memory.
    pub fn read_out(&self, win: &NsWindow, dst_addr: u64, len: u64) -> Result<(), SmcStatus> {
        if len > STORE_SIZE as u64 {
            return Err(SmcStatus::InsufficientSpace);
        }
        let mut dst = win.write_buffer(dst_addr, len)?;
        let n = dst.len();
        dst.as_bytes_mut().copy_from_slice(&self.data[..n]);
        Ok(())
    }
}

impl Default for SecureStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // A stand-in non-secure RAM region; the window spans the whole arena
    // so validated copies hit real host memory.
    fn arena() -> (Box<[u8; 128]>, NsWindow, u64) {
        let mut mem = Box::new([0u8; 128]);
        let base = mem.as_mut_ptr() as u64;
        (mem, NsWindow::new(base, base + 127), base)
    }

    #[test]
    fn write_then_read_round_trips() {
        let (mut mem, win, base) = arena();
        for (i, b) in mem[..64].iter_mut().enumerate() {
            *b = i as u8;
        }

        let mut store = SecureStore::new();
        store.write_in(&win, base, 64).unwrap();
        store.read_out(&win, base + 64, 64).unwrap();

        let (src, dst) = mem.split_at(64);
        assert_eq!(src, dst);
    }

    #[test]
    fn exact_capacity_write_and_read() {
        let mut mem = vec![0u8; STORE_SIZE].into_boxed_slice();
        let base = mem.as_mut_ptr() as u64;
        let win = NsWindow::new(base, base + STORE_SIZE as u64 - 1);
        for (i, b) in mem.iter_mut().enumerate() {
            *b = (i % 251) as u8;
        }
        let expected = mem.to_vec();

        let mut store = SecureStore::new();
        // len == STORE_SIZE is the last accepted length; one more is not.
        store.write_in(&win, base, STORE_SIZE as u64).unwrap();
        assert_eq!(
            store.write_in(&win, base, STORE_SIZE as u64 + 1),
            Err(SmcStatus::InsufficientSpace)
        );

        mem.fill(0);
        store.read_out(&win, base, STORE_SIZE as u64).unwrap();
        assert_eq!(&mem[..], &expected[..]);
    }

    #[test]
    fn oversized_write_is_insufficient_space() {
        let (_mem, win, base) = arena();
        let mut store = SecureStore::new();
        assert_eq!(
            store.write_in(&win, base, STORE_SIZE as u64 + 1),
            Err(SmcStatus::InsufficientSpace)
        );
    }

    #[test]
    fn capacity_checked_before_window() {
        // Both guards would fail; capacity wins.
        let (_mem, win, _base) = arena();
        let mut store = SecureStore::new();
        assert_eq!(
            store.write_in(&win, 0x1, STORE_SIZE as u64 + 1),
            Err(SmcStatus::InsufficientSpace)
        );
    }

    #[test]
    fn out_of_window_write_is_access_denied() {
        let (_mem, win, base) = arena();
        let mut store = SecureStore::new();
        // Spans one byte past the window end.
        assert_eq!(
            store.write_in(&win, base + 1, 128),
            Err(SmcStatus::AccessDenied)
        );
    }

    #[test]
    fn short_write_leaves_tail_untouched() {
        let (mut mem, win, base) = arena();
        mem.fill(0xAA);

        let mut store = SecureStore::new();
        store.write_in(&win, base, 32).unwrap();
        mem.fill(0x11);
        store.write_in(&win, base, 8).unwrap();

        store.read_out(&win, base + 64, 32).unwrap();
        // First 8 rewritten, tail still holds the earlier 0xAA write.
        assert_eq!(&mem[64..72], &[0x11; 8]);
        assert_eq!(&mem[72..96], &[0xAA; 24]);
    }

    #[test]
    fn rejected_read_writes_nothing() {
        let (mut mem, win, base) = arena();
        mem.fill(0x55);
        let store = SecureStore::default();
        assert_eq!(
            store.read_out(&win, base, 0),
            Err(SmcStatus::AccessDenied)
        );
        assert_eq!(&mem[..], &[0x55; 128][..]);
    }
}
