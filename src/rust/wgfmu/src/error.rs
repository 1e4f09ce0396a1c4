// Copyright 2026 Zurich Instruments AG
// SPDX-License-Identifier: Apache-2.0

use thiserror::Error;
use wgfmu_response::OperationError;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors reported by the typed instrument interface.
///
/// Argument-contract violations are detected locally before anything reaches
/// the native library; everything else originates as a negative status code
/// translated by [`wgfmu_response`].
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Operation(#[from] OperationError),
    #[error("time_steps and voltages must have the same length ({time_steps} != {voltages})")]
    VectorLengthMismatch { time_steps: usize, voltages: usize },
}
