// Copyright 2026 Zurich Instruments AG
// SPDX-License-Identifier: Apache-2.0

//! Typed interface to the WGFMU waveform generator / fast measurement unit.
//!
//! The native instrument library exposes a flat C surface in which every call
//! returns a leading signed status code. This crate wraps that surface with
//! typed channel, mode and range enumerations and routes every raw result
//! through [`wgfmu_response::normalize`], so callers get `Result` values with
//! resolved error messages instead of integer codes.
//!
//! The raw surface itself sits behind the [`InstrumentLibrary`] trait. The
//! `native` feature provides [`NativeLibrary`], which links the vendor shared
//! library; tests and simulations substitute their own implementation.

mod data;
mod error;
mod library;
#[cfg(feature = "native")]
mod native;
mod session;
mod timing;
mod types;

pub use data::MeasurementData;
pub use error::{Error, Result};
pub use library::InstrumentLibrary;
#[cfg(feature = "native")]
pub use native::NativeLibrary;
pub use session::{DEFAULT_ADDRESS, Wgfmu};
pub use timing::{TIME_RESOLUTION, round_to_resolution};
pub use types::{Channel, MeasureCurrentRange, MeasureEventMode, MeasureMode, OperationMode};
pub use wgfmu_response::{ErrorCode, ExecutionStatus, OperationError};
