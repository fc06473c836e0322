//! Per-Call Register Record
//!
//! The trap collaborator saves the caller's registers x0-x7 into an
//! [`SmcContext`], hands it to the dispatcher, and restores it to the
//! caller on return. The record lives for exactly one call.
//!
//! # Slot Layout
//! - Slot 0: function ID on entry, status / primary value on reply
//! - Slots 1-3: arguments on entry, cleared to zero on reply
//! - Slots 4-7: reserved for the transport collaborator, never touched

use super::SmcStatus;

/// Number of saved register slots (x0-x7).
pub const REG_COUNT: usize = 8;

/// Saved caller registers for one in-flight call.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct SmcContext {
    /// Register slots x0-x7 as captured at trap entry.
    pub regs: [u64; REG_COUNT],
}

impl SmcContext {
    /// Build a context from saved registers.
    #[inline]
    pub const fn new(regs: [u64; REG_COUNT]) -> Self {
        Self { regs }
    }

    /// Function ID (slot 0 at entry).
    #[inline]
    pub fn fid(&self) -> u64 {
        self.regs[0]
    }

    /// Argument slots a1..a3.
    #[inline]
    pub fn args(&self) -> (u64, u64, u64) {
        (self.regs[1], self.regs[2], self.regs[3])
    }

    /// Write a status reply and clear the unused reply slots.
    pub fn reply_status(&mut self, status: SmcStatus) {
        self.reply_value(status.as_reg());
    }

    /// Write a raw value reply (PING sentinel, version word) and clear
    /// the unused reply slots. Slots 4-7 belong to the transport and are
    /// left as-is.
    pub fn reply_value(&mut self, value: u64) {
        self.regs[0] = value;
        self.regs[1] = 0;
        self.regs[2] = 0;
        self.regs[3] = 0;
    }

    /// Collapse a service result into a status reply.
    pub fn reply_result(&mut self, result: Result<(), SmcStatus>) {
        let status = match result {
            Ok(()) => SmcStatus::Ok,
            Err(e) => e,
        };
        self.reply_status(status);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reply_clears_argument_slots() {
        let mut ctx = SmcContext::new([0xAA; REG_COUNT]);
        ctx.reply_status(SmcStatus::Ok);
        assert_eq!(ctx.regs[0], 0);
        assert_eq!(ctx.regs[1..4], [0, 0, 0]);
    }

    #[test]
    fn reply_preserves_transport_slots() {
        let mut ctx = SmcContext::new([0x55; REG_COUNT]);
        ctx.reply_value(0xBEEF);
        assert_eq!(ctx.regs[0], 0xBEEF);
        assert_eq!(ctx.regs[4..], [0x55; 4]);
    }

    #[test]
    fn error_status_encodes_twos_complement() {
        let mut ctx = SmcContext::new([0; REG_COUNT]);
        ctx.reply_status(SmcStatus::AccessDenied);
        assert_eq!(ctx.regs[0], (-4i64) as u64);
    }
}
