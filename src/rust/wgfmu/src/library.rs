// Copyright 2026 Zurich Instruments AG
// SPDX-License-Identifier: Apache-2.0

/// Raw entry points of the native WGFMU library.
///
/// Signatures mirror the vendor calling convention: every method returns a
/// leading signed status code, optionally followed by its output values, and
/// performs no validation of its own. [`crate::Wgfmu`] routes every return
/// value through [`wgfmu_response::normalize`] exactly once.
///
/// The library owns a single global communication session and is not
/// reentrant; implementations take `&mut self` to serialize access.
pub trait InstrumentLibrary {
    fn open_session(&mut self, address: &str) -> i32;
    fn close_session(&mut self) -> i32;
    fn initialize(&mut self) -> i32;
    fn clear(&mut self) -> i32;
    fn self_test(&mut self) -> i32;

    fn set_operation_mode(&mut self, channel: i32, mode: i32) -> i32;
    fn set_measure_mode(&mut self, channel: i32, mode: i32) -> i32;
    fn set_measure_current_range(&mut self, channel: i32, range: i32) -> i32;
    fn connect(&mut self, channel: i32) -> i32;

    /// Number of WGFMU channels installed in the mainframe.
    fn channel_id_size(&mut self) -> (i32, i32);
    /// Ids of the installed channels; `size` comes from `channel_id_size`.
    fn channel_ids(&mut self, size: i32) -> (i32, Vec<i32>);

    fn create_pattern(&mut self, pattern: &str, start_voltage: f64) -> i32;
    fn add_vector(&mut self, pattern: &str, time_step: f64, voltage: f64) -> i32;
    /// Caller guarantees the slices have equal length.
    fn add_vectors(&mut self, pattern: &str, time_steps: &[f64], voltages: &[f64]) -> i32;
    fn add_sequence(&mut self, channel: i32, pattern: &str, count: f64) -> i32;

    /// Argument order follows the vendor signature: the event start time
    /// precedes the point count.
    #[allow(clippy::too_many_arguments)]
    fn set_measure_event(
        &mut self,
        pattern: &str,
        event: &str,
        time: f64,
        points: i32,
        interval: f64,
        average: f64,
        rdata: i32,
    ) -> i32;

    fn execute(&mut self) -> i32;
    fn wait_until_completed(&mut self) -> i32;

    /// Measured and total data counts for one channel.
    fn measure_value_size(&mut self, channel: i32) -> (i32, i32, i32);
    /// Time and value of one measured point.
    fn measure_value(&mut self, channel: i32, index: i32) -> (i32, f64, f64);
    /// Output voltage interpolated at `time` from the programmed waveform.
    fn interpolated_force_value(&mut self, channel: i32, time: f64) -> (i32, f64);
    fn export_ascii(&mut self, filename: &str) -> i32;

    /// Byte size of the accumulated error summary log.
    fn error_summary_size(&mut self) -> (i32, i32);
    /// The accumulated error summary; `size` comes from `error_summary_size`.
    fn error_summary(&mut self, size: i32) -> (i32, String);
}
