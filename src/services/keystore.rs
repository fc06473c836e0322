//! Fixed-Slot Key Store
//!
//! Eight key slots, 32 bytes each, import-only. Key material enters from
//! caller memory after validation and leaves only by being consumed in
//! the transform service; there is no read-back path and no plaintext
//! ever returns across the boundary.
//!
//! # Security Properties
//! - Empty vs. occupied is a tagged state, not a sentinel length
//! - Import overwrites a slot wholesale; no partial update exists
//! - Previous key material is volatile-zeroized before being replaced

use crate::security::Zeroize;
use crate::smc::validate::NsWindow;
use crate::smc::SmcStatus;

/// Number of key slots.
pub const MAX_KEYS: usize = 8;
/// Maximum key length per slot in bytes.
pub const KEY_SIZE: usize = 32;

/// State of one key slot.
///
/// Deliberately neither `Clone` nor `Copy`: key material must not be
/// implicitly duplicated outside the store.
#[derive(Debug, PartialEq, Eq)]
pub enum KeySlot {
    /// No key imported.
    Empty,
    /// Holds `len` valid bytes of key material at the front of `bytes`.
    Occupied { bytes: [u8; KEY_SIZE], len: usize },
}

impl Zeroize for KeySlot {
    fn zeroize(&mut self) {
        if let KeySlot::Occupied { bytes, .. } = self {
            bytes.zeroize();
        }
        *self = KeySlot::Empty;
    }
}

/// The fixed arena of key slots.
pub struct KeyStore {
    slots: [KeySlot; MAX_KEYS],
}

impl KeyStore {
    /// A store with all slots empty.
    pub const fn new() -> Self {
        Self {
            slots: [const { KeySlot::Empty }; MAX_KEYS],
        }
    }

    /// Import key material from caller memory into a slot.
    ///
    /// Argument guards run before the window check, so a bad slot id or
    /// length reports `InvalidParam` even when the address is also bad.
    /// On any rejection the slot is left exactly as it was.
    pub fn import(
        &mut self,
        win: &NsWindow,
        slot_id: u64,
        src_addr: u64,
        len: u64,
    ) -> Result<(), SmcStatus> {
        if slot_id >= MAX_KEYS as u64 {
            log::debug!("[SMC] key import: bad slot {}", slot_id);
            return Err(SmcStatus::InvalidParam);
        }
        if len == 0 || len > KEY_SIZE as u64 {
            log::debug!("[SMC] key import: bad length {}", len);
            return Err(SmcStatus::InvalidParam);
        }
        let src = win.read_buffer(src_addr, len)?;

        // Copy straight into the slot; no stack temporary ever holds
        // key material.
        let slot = &mut self.slots[slot_id as usize];
        slot.zeroize();
        *slot = KeySlot::Occupied {
            bytes: [0u8; KEY_SIZE],
            len: src.len(),
        };
        if let KeySlot::Occupied { bytes, .. } = slot {
            bytes[..src.len()].copy_from_slice(src.as_bytes());
        }
        Ok(())
    }

    /// Valid key bytes of a slot, or `None` if the id is out of range or
    /// the slot is empty. Trusted-side use only.
    pub fn key(&self, slot_id: u64) -> Option<&[u8]> {
        let idx = usize::try_from(slot_id).ok()?;
        match self.slots.get(idx)? {
            KeySlot::Empty => None,
            KeySlot::Occupied { bytes, len } => Some(&bytes[..*len]),
        }
    }

    #[cfg(test)]
    fn slot(&self, idx: usize) -> &KeySlot {
        &self.slots[idx]
    }
}

impl Default for KeyStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arena() -> (Box<[u8; 64]>, NsWindow, u64) {
        let mut mem = Box::new([0u8; 64]);
        let base = mem.as_mut_ptr() as u64;
        (mem, NsWindow::new(base, base + 63), base)
    }

    #[test]
    fn import_records_material_and_length() {
        let (mut mem, win, base) = arena();
        mem[..16].copy_from_slice(&[7u8; 16]);

        let mut keys = KeyStore::new();
        keys.import(&win, 3, base, 16).unwrap();
        assert_eq!(keys.key(3), Some(&[7u8; 16][..]));
    }

    #[test]
    fn full_length_key_accepted() {
        let (_mem, win, base) = arena();
        let mut keys = KeyStore::new();
        keys.import(&win, 0, base, KEY_SIZE as u64).unwrap();
        assert_eq!(keys.key(0).unwrap().len(), KEY_SIZE);
    }

    #[test]
    fn zero_and_oversized_lengths_rejected() {
        let (_mem, win, base) = arena();
        let mut keys = KeyStore::new();
        assert_eq!(keys.import(&win, 0, base, 0), Err(SmcStatus::InvalidParam));
        assert_eq!(
            keys.import(&win, 0, base, KEY_SIZE as u64 + 1),
            Err(SmcStatus::InvalidParam)
        );
        assert_eq!(*keys.slot(0), KeySlot::Empty);
    }

    #[test]
    fn out_of_range_slot_rejected() {
        let (_mem, win, base) = arena();
        let mut keys = KeyStore::new();
        assert_eq!(
            keys.import(&win, MAX_KEYS as u64, base, 8),
            Err(SmcStatus::InvalidParam)
        );
    }

    #[test]
    fn bad_address_leaves_slot_unchanged() {
        let (mut mem, win, base) = arena();
        mem[..8].copy_from_slice(&[1u8; 8]);

        let mut keys = KeyStore::new();
        keys.import(&win, 2, base, 8).unwrap();
        // Region spans past the window end.
        assert_eq!(
            keys.import(&win, 2, base + 60, 8),
            Err(SmcStatus::AccessDenied)
        );
        assert_eq!(keys.key(2), Some(&[1u8; 8][..]));
    }

    #[test]
    fn reimport_overwrites_wholesale() {
        let (mut mem, win, base) = arena();
        mem[..32].copy_from_slice(&[0xFFu8; 32]);

        let mut keys = KeyStore::new();
        keys.import(&win, 1, base, 32).unwrap();

        mem[..4].copy_from_slice(&[2u8; 4]);
        keys.import(&win, 1, base, 4).unwrap();
        // Only the new 4 bytes are valid key material.
        assert_eq!(keys.key(1), Some(&[2u8; 4][..]));
    }

    #[test]
    fn empty_slot_has_no_key() {
        let keys = KeyStore::default();
        assert_eq!(keys.key(0), None);
        assert_eq!(keys.key(u64::MAX), None);
    }

    #[test]
    fn slot_zeroize_wipes_material_and_empties() {
        let mut slot = KeySlot::Occupied {
            bytes: [0x42; KEY_SIZE],
            len: KEY_SIZE,
        };
        slot.zeroize();
        assert_eq!(slot, KeySlot::Empty);
    }
}
