// Copyright 2026 Zurich Instruments AG
// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

/// Channel ids of the WGFMU modules installed in the mainframe.
///
/// The id encodes the slot and the channel within the module, so the values
/// depend on how the instrument is populated. This set matches a module in
/// slot 2 plus the first channel of a module in slot 3.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(i32)]
pub enum Channel {
    /// Channel 1 of the WGFMU installed in slot 2.
    #[default]
    Ch1 = 201,
    /// Channel 2 of the WGFMU installed in slot 2.
    Ch2 = 202,
    /// Channel 1 of the WGFMU installed in slot 3.
    Ch3 = 301,
}

impl From<Channel> for i32 {
    fn from(channel: Channel) -> i32 {
        channel as i32
    }
}
