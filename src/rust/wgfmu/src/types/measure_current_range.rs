// Copyright 2026 Zurich Instruments AG
// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

/// Current measurement ranges of a WGFMU channel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(i32)]
pub enum MeasureCurrentRange {
    /// 1 uA fixed range.
    R1uA = 6001,
    /// 10 uA fixed range.
    #[default]
    R10uA = 6002,
    /// 100 uA fixed range.
    R100uA = 6003,
    /// 1 mA fixed range.
    R1mA = 6004,
    /// 10 mA fixed range.
    R10mA = 6005,
}

impl From<MeasureCurrentRange> for i32 {
    fn from(range: MeasureCurrentRange) -> i32 {
        range as i32
    }
}
