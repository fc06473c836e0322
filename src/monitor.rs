//! Monitor State
//!
//! Process-wide trusted state: the non-secure window fixed at boot, the
//! confidential store and key store behind spinlocks, and the platform
//! power and cipher capabilities. The [`MONITOR`] static carries the
//! reference boot configuration; a platform wires its own window and
//! power implementation through [`Monitor::new`].
//!
//! # Concurrency
//! Calls may enter from multiple cores. Each store sits behind its own
//! `spin::Mutex`, taken one at a time for the duration of a single
//! synchronous operation; the locks never nest.

use spin::Mutex;

use crate::services::crypto::{self, Cipher, XorCipher};
use crate::services::keystore::KeyStore;
use crate::services::power::{PlatformPower, StubPower};
use crate::services::secstore::SecureStore;
use crate::smc::validate::NsWindow;
use crate::smc::SmcStatus;

/// Default non-secure RAM range. Platforms with a different memory map
/// construct their own window.
pub const NS_RAM_START: u64 = 0x4000_0000;
/// Last address of the default non-secure RAM range (inclusive).
pub const NS_RAM_END: u64 = 0x47FF_FFFF;

/// All trusted-side state behind the call boundary.
pub struct Monitor<P: PlatformPower = StubPower, C: Cipher = XorCipher> {
    window: NsWindow,
    secstore: Mutex<SecureStore>,
    keys: Mutex<KeyStore>,
    power: P,
    cipher: C,
}

/// The monitor instance with the reference boot configuration.
pub static MONITOR: Monitor = Monitor::new(
    NsWindow::new(NS_RAM_START, NS_RAM_END),
    StubPower,
    XorCipher,
);

impl<P: PlatformPower, C: Cipher> Monitor<P, C> {
    /// Build a monitor over a boot-time window with the platform's power
    /// hooks and cipher.
    pub const fn new(window: NsWindow, power: P, cipher: C) -> Self {
        Self {
            window,
            secstore: Mutex::new(SecureStore::new()),
            keys: Mutex::new(KeyStore::new()),
            power,
            cipher,
        }
    }

    /// The non-secure window this monitor validates against.
    #[inline]
    pub fn window(&self) -> &NsWindow {
        &self.window
    }

    /// SECSTORE_WRITE: caller memory into the confidential store.
    pub fn secstore_write(&self, src_addr: u64, len: u64) -> Result<(), SmcStatus> {
        self.secstore.lock().write_in(&self.window, src_addr, len)
    }

    /// SECSTORE_READ: confidential store out to caller memory.
    pub fn secstore_read(&self, dst_addr: u64, len: u64) -> Result<(), SmcStatus> {
        self.secstore.lock().read_out(&self.window, dst_addr, len)
    }

    /// KEY_IMPORT: caller memory into a key slot.
    pub fn key_import(&self, slot_id: u64, src_addr: u64, len: u64) -> Result<(), SmcStatus> {
        self.keys.lock().import(&self.window, slot_id, src_addr, len)
    }

    /// CRYPTO_ENCRYPT: forward transform in place over caller memory.
    pub fn crypto_encrypt(&self, addr: u64, len: u64, slot_id: u64) -> Result<(), SmcStatus> {
        let keys = self.keys.lock();
        crypto::encrypt_in_place(&self.cipher, &self.window, &keys, addr, len, slot_id)
    }

    /// CRYPTO_DECRYPT: inverse transform in place over caller memory.
    pub fn crypto_decrypt(&self, addr: u64, len: u64, slot_id: u64) -> Result<(), SmcStatus> {
        let keys = self.keys.lock();
        crypto::decrypt_in_place(&self.cipher, &self.window, &keys, addr, len, slot_id)
    }

    /// CPU_ON: delegate to the platform power hook.
    pub fn cpu_on(&self, core_id: u64, entry_addr: u64) -> SmcStatus {
        self.power.cpu_on(core_id, entry_addr)
    }

    /// CPU_OFF: delegate to the platform power hook.
    pub fn cpu_off(&self) -> SmcStatus {
        self.power.cpu_off()
    }

    /// SYSTEM_RESET: delegate to the platform power hook.
    pub fn system_reset(&self) -> SmcStatus {
        self.power.system_reset()
    }
}
