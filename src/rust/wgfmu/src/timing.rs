// Copyright 2026 Zurich Instruments AG
// SPDX-License-Identifier: Apache-2.0

/// Programmable timing grid of the instrument, in seconds (10 ns).
pub static TIME_RESOLUTION: f64 = 1e-8;

/// Round a time value to the nearest multiple of the 10 ns grid.
///
/// The instrument applies this rounding internally to vector time steps,
/// sampling intervals and averaging times; the helper lets a caller predict
/// the value the hardware will actually use. It does not gate any call.
pub fn round_to_resolution(value: f64) -> f64 {
    (value / TIME_RESOLUTION).round() * TIME_RESOLUTION
}
