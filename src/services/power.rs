//! Platform Power Hooks
//!
//! Core bring-up, shutdown, and system reset belong to the platform; the
//! monitor only owns the call surface. [`StubPower`] is what ships in
//! this core and answers `NotSupported` for everything. A platform
//! substitutes its own [`PlatformPower`] when wiring up the monitor.

use crate::smc::SmcStatus;

/// Lifecycle operations supplied by a platform collaborator.
pub trait PlatformPower {
    /// Power on a core and start it at `entry_addr`.
    fn cpu_on(&self, core_id: u64, entry_addr: u64) -> SmcStatus;
    /// Power down the calling core.
    fn cpu_off(&self) -> SmcStatus;
    /// Reset the whole system.
    fn system_reset(&self) -> SmcStatus;
}

/// Placeholder implementation: every operation reports `NotSupported`.
pub struct StubPower;

impl PlatformPower for StubPower {
    fn cpu_on(&self, core_id: u64, _entry_addr: u64) -> SmcStatus {
        log::debug!("[SMC] cpu_on({}) not implemented", core_id);
        SmcStatus::NotSupported
    }

    fn cpu_off(&self) -> SmcStatus {
        SmcStatus::NotSupported
    }

    fn system_reset(&self) -> SmcStatus {
        SmcStatus::NotSupported
    }
}
