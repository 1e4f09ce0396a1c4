// Copyright 2026 Zurich Instruments AG
// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

/// Measurement modes of a WGFMU channel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(i32)]
pub enum MeasureMode {
    /// Voltage measurement, the instrument default. Selecting it does not
    /// change the current measurement range. Available for the Fast IV, PG,
    /// and DC operation modes.
    #[default]
    Voltage = 4000,
    /// Current measurement. Selecting it changes the voltage measurement
    /// range to the 5 V range. Available for the Fast IV and DC operation
    /// modes.
    Current = 4001,
}

impl From<MeasureMode> for i32 {
    fn from(mode: MeasureMode) -> i32 {
        mode as i32
    }
}
