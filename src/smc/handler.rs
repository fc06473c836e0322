//! SMC Dispatcher
//!
//! Maps an incoming function ID plus up to three arguments onto exactly
//! one trusted service and writes the reply back into the call record.
//!
//! # Security Considerations
//! - Function IDs are matched against a closed enumeration; anything
//!   else lands in the reachable NOT_SUPPORTED default arm
//! - Every input yields a status reply; no register content can fault
//!   the monitor or unwind across the trust boundary
//! - Each service validates its own arguments before any copy

use crate::monitor::Monitor;
use crate::services::crypto::Cipher;
use crate::services::power::PlatformPower;
use crate::version_word;

use super::context::SmcContext;
use super::SmcStatus;

/// SMC function IDs (vendor range 0x8200_0000).
pub mod fid {
    pub const PING: u64 = 0x8200_0000;
    pub const GET_VERSION: u64 = 0x8200_0001;
    pub const SECSTORE_WRITE: u64 = 0x8200_1000;
    pub const SECSTORE_READ: u64 = 0x8200_1001;
    pub const KEY_IMPORT: u64 = 0x8200_2000;
    pub const CRYPTO_ENCRYPT: u64 = 0x8200_2010;
    pub const CRYPTO_DECRYPT: u64 = 0x8200_2011;
    pub const CPU_ON: u64 = 0x8200_3000;
    pub const CPU_OFF: u64 = 0x8200_3001;
    pub const SYSTEM_RESET: u64 = 0x8200_3002;
}

/// Magic pong placed in reply slot 0 by PING.
pub const PONG_SENTINEL: u64 = 0xBADC_0FFE_E0DD_F00D;

/// The closed set of supported calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SmcFunction {
    Ping,
    GetVersion,
    SecstoreWrite,
    SecstoreRead,
    KeyImport,
    CryptoEncrypt,
    CryptoDecrypt,
    CpuOn,
    CpuOff,
    SystemReset,
}

impl SmcFunction {
    fn from_fid(raw: u64) -> Option<Self> {
        match raw {
            fid::PING => Some(Self::Ping),
            fid::GET_VERSION => Some(Self::GetVersion),
            fid::SECSTORE_WRITE => Some(Self::SecstoreWrite),
            fid::SECSTORE_READ => Some(Self::SecstoreRead),
            fid::KEY_IMPORT => Some(Self::KeyImport),
            fid::CRYPTO_ENCRYPT => Some(Self::CryptoEncrypt),
            fid::CRYPTO_DECRYPT => Some(Self::CryptoDecrypt),
            fid::CPU_ON => Some(Self::CpuOn),
            fid::CPU_OFF => Some(Self::CpuOff),
            fid::SYSTEM_RESET => Some(Self::SystemReset),
            _ => None,
        }
    }
}

/// Dispatch one call.
///
/// Reads the function ID and arguments from the context, invokes the
/// matching service on `mon`, and overwrites the context in place with
/// the reply. Always returns; never panics for any register content.
pub fn dispatch<P: PlatformPower, C: Cipher>(mon: &Monitor<P, C>, ctx: &mut SmcContext) {
    let raw_fid = ctx.fid();
    let (a1, a2, a3) = ctx.args();

    let Some(func) = SmcFunction::from_fid(raw_fid) else {
        log::warn!("[SMC] unknown fid {:#010x}", raw_fid);
        ctx.reply_status(SmcStatus::NotSupported);
        return;
    };

    match func {
        SmcFunction::Ping => ctx.reply_value(PONG_SENTINEL),
        SmcFunction::GetVersion => ctx.reply_value(version_word()),
        SmcFunction::SecstoreWrite => ctx.reply_result(mon.secstore_write(a1, a2)),
        SmcFunction::SecstoreRead => ctx.reply_result(mon.secstore_read(a1, a2)),
        SmcFunction::KeyImport => ctx.reply_result(mon.key_import(a1, a2, a3)),
        SmcFunction::CryptoEncrypt => ctx.reply_result(mon.crypto_encrypt(a1, a2, a3)),
        SmcFunction::CryptoDecrypt => ctx.reply_result(mon.crypto_decrypt(a1, a2, a3)),
        SmcFunction::CpuOn => ctx.reply_status(mon.cpu_on(a1, a2)),
        SmcFunction::CpuOff => ctx.reply_status(mon.cpu_off()),
        SmcFunction::SystemReset => ctx.reply_status(mon.system_reset()),
    }
}
