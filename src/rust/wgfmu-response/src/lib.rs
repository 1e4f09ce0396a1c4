// Copyright 2026 Zurich Instruments AG
// SPDX-License-Identifier: Apache-2.0

//! Response handling for the WGFMU instrument library.
//!
//! Every entry point of the native library reports its outcome as a leading
//! signed status code, optionally followed by result values. Zero is success,
//! negative codes are failures, and positive codes are sequencer state
//! indicators returned by polling-style calls.
//!
//! This crate turns that raw shape into idiomatic results in two stages:
//! [`check_status`] rejects negative codes with an [`OperationError`] resolved
//! from the fixed code table, and [`strip_status`] drops the leading code from
//! whatever remains. [`normalize`] composes the two and is the single contract
//! every wrapped call goes through.

mod response;
mod status;

pub use response::{Response, check_status, normalize, strip_status};
pub use status::{ErrorCode, ExecutionStatus, OperationError};

pub type Result<T, E = OperationError> = std::result::Result<T, E>;
