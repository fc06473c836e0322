//! In-Place Symmetric Transform
//!
//! Applies a keyed transform over a caller-owned buffer, consuming a key
//! slot. The algorithm sits behind the [`Cipher`] trait so the demo XOR
//! construction can be swapped for a real authenticated cipher without
//! touching the guard logic; the dispatcher already routes encrypt and
//! decrypt to the distinct trait operations.
//!
//! # Guard Order
//! Key checks (`InvalidParam`) run before the window check
//! (`AccessDenied`, which also covers zero-length regions). Trusted
//! state is never modified; the only side effect is in caller memory.

use super::keystore::KeyStore;
use crate::smc::validate::{NsBufferMut, NsWindow};
use crate::smc::SmcStatus;

/// A symmetric transform with declared forward and inverse operations.
///
/// Contract: `decrypt(encrypt(x)) == x` for any key the key store can
/// hold. `key` is never empty; the guards reject empty slots first.
pub trait Cipher {
    /// Forward transform, in place.
    fn encrypt(&self, buf: &mut [u8], key: &[u8]);
    /// Inverse transform, in place.
    fn decrypt(&self, buf: &mut [u8], key: &[u8]);
}

/// Demo XOR keystream cipher.
///
/// Involutive, so forward and inverse coincide. Placeholder only: it
/// provides no integrity and trivially leaks key material under known
/// plaintext. A production monitor substitutes an AEAD here.
pub struct XorCipher;

impl Cipher for XorCipher {
    fn encrypt(&self, buf: &mut [u8], key: &[u8]) {
        xor_keystream(buf, key);
    }

    fn decrypt(&self, buf: &mut [u8], key: &[u8]) {
        xor_keystream(buf, key);
    }
}

fn xor_keystream(buf: &mut [u8], key: &[u8]) {
    debug_assert!(!key.is_empty());
    for (i, b) in buf.iter_mut().enumerate() {
        *b ^= key[i % key.len()];
    }
}

/// Run the shared guards and hand back the validated buffer and key.
fn transform_args<'k>(
    win: &NsWindow,
    keys: &'k KeyStore,
    addr: u64,
    len: u64,
    slot_id: u64,
) -> Result<(NsBufferMut, &'k [u8]), SmcStatus> {
    let key = keys.key(slot_id).ok_or_else(|| {
        log::debug!("[SMC] transform: no key in slot {}", slot_id);
        SmcStatus::InvalidParam
    })?;
    let buf = win.write_buffer(addr, len)?;
    Ok((buf, key))
}

/// Forward transform over `len` bytes of caller memory.
pub fn encrypt_in_place<C: Cipher>(
    cipher: &C,
    win: &NsWindow,
    keys: &KeyStore,
    addr: u64,
    len: u64,
    slot_id: u64,
) -> Result<(), SmcStatus> {
    let (mut buf, key) = transform_args(win, keys, addr, len, slot_id)?;
    cipher.encrypt(buf.as_bytes_mut(), key);
    Ok(())
}

/// Inverse transform over `len` bytes of caller memory.
pub fn decrypt_in_place<C: Cipher>(
    cipher: &C,
    win: &NsWindow,
    keys: &KeyStore,
    addr: u64,
    len: u64,
    slot_id: u64,
) -> Result<(), SmcStatus> {
    let (mut buf, key) = transform_args(win, keys, addr, len, slot_id)?;
    cipher.decrypt(buf.as_bytes_mut(), key);
    Ok(())
}
