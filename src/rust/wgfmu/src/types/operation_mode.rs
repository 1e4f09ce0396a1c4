// Copyright 2026 Zurich Instruments AG
// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

/// Operation modes of a WGFMU channel.
///
/// The setting is applied to the channel by `execute` or the other update
/// operations, not at the moment it is set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(i32)]
pub enum OperationMode {
    /// DC voltage output and voltage or current measurement (VFVM or VFIM).
    Dc = 2000,
    /// Fast IV mode. ALWG voltage output and voltage or current measurement
    /// (VFVM or VFIM).
    FastIv = 2001,
    /// PG mode. ALWG voltage output and voltage measurement (VFVM). The
    /// output voltage is divided by the internal 50 Ohm resistor and the load
    /// impedance. Faster than the Fast IV mode.
    Pg = 2002,
    /// SMU mode, the instrument default. For using an SMU connected to the
    /// RSU.
    #[default]
    Smu = 2003,
}

impl From<OperationMode> for i32 {
    fn from(mode: OperationMode) -> i32 {
        mode as i32
    }
}
