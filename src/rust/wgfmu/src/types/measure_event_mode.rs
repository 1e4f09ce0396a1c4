// Copyright 2026 Zurich Instruments AG
// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

/// Data output modes of a measurement event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(i32)]
pub enum MeasureEventMode {
    /// Averaging data output. Only the averaging result is returned, one
    /// value per sampling point.
    #[default]
    Averaged = 12000,
    /// Raw data output. Every measurement used for averaging is returned, so
    /// the number of values grows with the averaging time.
    Raw = 12001,
}

impl From<MeasureEventMode> for i32 {
    fn from(mode: MeasureEventMode) -> i32 {
        mode as i32
    }
}
