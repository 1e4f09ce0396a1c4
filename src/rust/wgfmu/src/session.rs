// Copyright 2026 Zurich Instruments AG
// SPDX-License-Identifier: Apache-2.0

use log::{debug, info};
use wgfmu_response::normalize;

use crate::data::MeasurementData;
use crate::error::{Error, Result};
use crate::library::InstrumentLibrary;
use crate::types::{Channel, MeasureCurrentRange, MeasureEventMode, MeasureMode, OperationMode};

/// VISA address of a B1500A mainframe connected over USB.
pub const DEFAULT_ADDRESS: &str = "USB1::0x0957::0x0001::0001::0::INSTR";

/// Typed facade over the WGFMU instrument library.
///
/// Owns the raw library handle and exposes the operation catalog with typed
/// arguments. Every raw result goes through [`wgfmu_response::normalize`]
/// exactly once, so a negative status surfaces as [`Error::Operation`] and a
/// successful call yields its output values with the status stripped.
///
/// All instrument state (patterns, sequences, events, measured data) lives in
/// the library and the firmware; this type holds nothing besides the handle.
pub struct Wgfmu<L> {
    library: L,
}

impl<L: InstrumentLibrary> Wgfmu<L> {
    pub fn new(library: L) -> Self {
        Wgfmu { library }
    }

    // Session lifecycle.

    /// Open the communication session with the mainframe.
    ///
    /// [`DEFAULT_ADDRESS`] fits a B1500A connected over USB.
    pub fn open_session(&mut self, address: &str) -> Result<()> {
        normalize(self.library.open_session(address))?;
        info!("opened session to {address}");
        Ok(())
    }

    /// Close the session opened by [`Wgfmu::open_session`].
    pub fn close_session(&mut self) -> Result<()> {
        normalize(self.library.close_session())?;
        info!("closed session");
        Ok(())
    }

    /// Reset all WGFMU channels. Does not clear the setup information held by
    /// the library; see [`Wgfmu::clear`] for that.
    pub fn initialize(&mut self) -> Result<()> {
        Ok(normalize(self.library.initialize())?)
    }

    /// Clear the library's software setup information and the accumulated
    /// error summary log.
    pub fn clear(&mut self) -> Result<()> {
        Ok(normalize(self.library.clear())?)
    }

    /// Perform the self-test of the mainframe and all modules.
    pub fn self_test(&mut self) -> Result<()> {
        Ok(normalize(self.library.self_test())?)
    }

    // Channel and mode configuration.

    /// Set the operation mode of a channel. Applied to the hardware by the
    /// next update or [`Wgfmu::execute`].
    pub fn set_operation_mode(&mut self, channel: Channel, mode: OperationMode) -> Result<()> {
        Ok(normalize(self.library.set_operation_mode(channel.into(), mode.into()))?)
    }

    /// Set the measurement mode of a channel.
    pub fn set_measure_mode(&mut self, channel: Channel, mode: MeasureMode) -> Result<()> {
        Ok(normalize(self.library.set_measure_mode(channel.into(), mode.into()))?)
    }

    /// Set the current measurement range of a channel.
    pub fn set_measure_current_range(
        &mut self,
        channel: Channel,
        range: MeasureCurrentRange,
    ) -> Result<()> {
        Ok(normalize(
            self.library.set_measure_current_range(channel.into(), range.into()),
        )?)
    }

    /// Enable the output of a channel and the RSU connected to it.
    pub fn connect(&mut self, channel: Channel) -> Result<()> {
        Ok(normalize(self.library.connect(channel.into()))?)
    }

    /// Ids of the WGFMU channels installed in the connected mainframe.
    pub fn channel_ids(&mut self) -> Result<Vec<i32>> {
        let size = normalize(self.library.channel_id_size())?;
        Ok(normalize(self.library.channel_ids(size))?)
    }

    // Waveform definition.

    /// Create a waveform pattern starting at `start_voltage`.
    pub fn create_pattern(&mut self, name: &str, start_voltage: f64) -> Result<()> {
        Ok(normalize(self.library.create_pattern(name, start_voltage))?)
    }

    /// Append one vector to a pattern: reach `voltage` after `time_step`
    /// seconds from the pattern's current last point.
    ///
    /// The pattern must exist. Time steps are clamped to the 10 ns grid by
    /// the instrument; see [`crate::round_to_resolution`].
    pub fn add_vector(&mut self, name: &str, time_step: f64, voltage: f64) -> Result<()> {
        Ok(normalize(self.library.add_vector(name, time_step, voltage))?)
    }

    /// Append several vectors to a pattern at once.
    ///
    /// `time_steps` and `voltages` are parallel arrays and must have the same
    /// length; the check runs before anything reaches the library.
    pub fn add_vectors(&mut self, name: &str, time_steps: &[f64], voltages: &[f64]) -> Result<()> {
        if time_steps.len() != voltages.len() {
            return Err(Error::VectorLengthMismatch {
                time_steps: time_steps.len(),
                voltages: voltages.len(),
            });
        }
        Ok(normalize(self.library.add_vectors(name, time_steps, voltages))?)
    }

    /// Append `repetitions` runs of a pattern to a channel's sequence.
    pub fn add_sequence(&mut self, channel: Channel, pattern_name: &str, repetitions: u32) -> Result<()> {
        Ok(normalize(self.library.add_sequence(
            channel.into(),
            pattern_name,
            f64::from(repetitions),
        ))?)
    }

    // Measurement-event definition.

    /// Define a sampling measurement performed while a channel outputs the
    /// named pattern.
    ///
    /// `start_time` is relative to the pattern's time origin; `interval` and
    /// `average` are in seconds on the 10 ns grid. The sample count and
    /// timing limits are contract constraints of the instrument and are not
    /// checked here.
    #[allow(clippy::too_many_arguments)]
    pub fn set_measure_event(
        &mut self,
        pattern_name: &str,
        event_name: &str,
        points: i32,
        interval: f64,
        average: f64,
        mode: MeasureEventMode,
        start_time: f64,
    ) -> Result<()> {
        Ok(normalize(self.library.set_measure_event(
            pattern_name,
            event_name,
            start_time,
            points,
            interval,
            average,
            mode.into(),
        ))?)
    }

    // Execution and readout.

    /// Run the sequencer of all enabled channels in the Fast IV or PG mode.
    /// Channels keep their last output voltage after the run.
    pub fn execute(&mut self) -> Result<()> {
        debug!("starting sequencers");
        Ok(normalize(self.library.execute())?)
    }

    /// Block until all connected channels are ready to read data. Fails if no
    /// sequencer is running. No timeout is exposed at this layer.
    pub fn wait_until_completed(&mut self) -> Result<()> {
        debug!("waiting for sequencers to complete");
        Ok(normalize(self.library.wait_until_completed())?)
    }

    /// Read the sampled time/value arrays of a channel.
    pub fn measurement_data(&mut self, channel: Channel) -> Result<MeasurementData> {
        let (measured, _total) = normalize(self.library.measure_value_size(channel.into()))?;
        let count = usize::try_from(measured).unwrap_or(0);
        let mut times = Vec::with_capacity(count);
        let mut values = Vec::with_capacity(count);
        for index in 0..measured {
            let (time, value) = normalize(self.library.measure_value(channel.into(), index))?;
            times.push(time);
            values.push(value);
        }
        Ok(MeasurementData { times, values })
    }

    /// Output voltage of a channel at `time`, interpolated from the
    /// programmed waveform.
    pub fn voltage_value(&mut self, channel: Channel, time: f64) -> Result<f64> {
        Ok(normalize(self.library.interpolated_force_value(channel.into(), time))?)
    }

    /// Output voltages of a channel at each measured timestamp.
    pub fn voltage_data(&mut self, channel: Channel) -> Result<Vec<f64>> {
        let data = self.measurement_data(channel)?;
        data.times
            .iter()
            .map(|&time| self.voltage_value(channel, time))
            .collect()
    }

    /// Write a setup summary report (patterns, events, sequences) to a CSV
    /// file. A debugging side channel, not authoritative state.
    pub fn export_measurement_setup(&mut self, filename: &str) -> Result<()> {
        Ok(normalize(self.library.export_ascii(filename))?)
    }

    // Error introspection.

    /// Read the accumulated error summary log. The log is cleared only by
    /// [`Wgfmu::clear`].
    pub fn error_summary(&mut self) -> Result<String> {
        let size = normalize(self.library.error_summary_size())?;
        if size > 0 {
            Ok(normalize(self.library.error_summary(size))?)
        } else {
            Ok(String::from("No error details available"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records every raw call and replays canned results.
    #[derive(Default)]
    struct MockLibrary {
        calls: Vec<String>,
        status: i32,
        points: Vec<(f64, f64)>,
        installed: Vec<i32>,
        log: String,
    }

    impl InstrumentLibrary for MockLibrary {
        fn open_session(&mut self, address: &str) -> i32 {
            self.calls.push(format!("open_session({address})"));
            self.status
        }

        fn close_session(&mut self) -> i32 {
            self.calls.push("close_session".into());
            self.status
        }

        fn initialize(&mut self) -> i32 {
            self.calls.push("initialize".into());
            self.status
        }

        fn clear(&mut self) -> i32 {
            self.calls.push("clear".into());
            self.status
        }

        fn self_test(&mut self) -> i32 {
            self.calls.push("self_test".into());
            self.status
        }

        fn set_operation_mode(&mut self, channel: i32, mode: i32) -> i32 {
            self.calls.push(format!("set_operation_mode({channel}, {mode})"));
            self.status
        }

        fn set_measure_mode(&mut self, channel: i32, mode: i32) -> i32 {
            self.calls.push(format!("set_measure_mode({channel}, {mode})"));
            self.status
        }

        fn set_measure_current_range(&mut self, channel: i32, range: i32) -> i32 {
            self.calls.push(format!("set_measure_current_range({channel}, {range})"));
            self.status
        }

        fn connect(&mut self, channel: i32) -> i32 {
            self.calls.push(format!("connect({channel})"));
            self.status
        }

        fn channel_id_size(&mut self) -> (i32, i32) {
            self.calls.push("channel_id_size".into());
            (self.status, self.installed.len() as i32)
        }

        fn channel_ids(&mut self, size: i32) -> (i32, Vec<i32>) {
            self.calls.push(format!("channel_ids({size})"));
            (self.status, self.installed.clone())
        }

        fn create_pattern(&mut self, pattern: &str, start_voltage: f64) -> i32 {
            self.calls.push(format!("create_pattern({pattern}, {start_voltage})"));
            self.status
        }

        fn add_vector(&mut self, pattern: &str, time_step: f64, voltage: f64) -> i32 {
            self.calls.push(format!("add_vector({pattern}, {time_step}, {voltage})"));
            self.status
        }

        fn add_vectors(&mut self, pattern: &str, time_steps: &[f64], voltages: &[f64]) -> i32 {
            self.calls.push(format!(
                "add_vectors({pattern}, {} steps, {} voltages)",
                time_steps.len(),
                voltages.len()
            ));
            self.status
        }

        fn add_sequence(&mut self, channel: i32, pattern: &str, count: f64) -> i32 {
            self.calls.push(format!("add_sequence({channel}, {pattern}, {count})"));
            self.status
        }

        fn set_measure_event(
            &mut self,
            pattern: &str,
            event: &str,
            time: f64,
            points: i32,
            interval: f64,
            average: f64,
            rdata: i32,
        ) -> i32 {
            self.calls.push(format!(
                "set_measure_event({pattern}, {event}, {time}, {points}, {interval}, {average}, {rdata})"
            ));
            self.status
        }

        fn execute(&mut self) -> i32 {
            self.calls.push("execute".into());
            self.status
        }

        fn wait_until_completed(&mut self) -> i32 {
            self.calls.push("wait_until_completed".into());
            self.status
        }

        fn measure_value_size(&mut self, channel: i32) -> (i32, i32, i32) {
            self.calls.push(format!("measure_value_size({channel})"));
            (self.status, self.points.len() as i32, self.points.len() as i32)
        }

        fn measure_value(&mut self, channel: i32, index: i32) -> (i32, f64, f64) {
            self.calls.push(format!("measure_value({channel}, {index})"));
            let (time, value) = self.points[index as usize];
            (self.status, time, value)
        }

        fn interpolated_force_value(&mut self, channel: i32, time: f64) -> (i32, f64) {
            self.calls.push(format!("interpolated_force_value({channel}, {time})"));
            (self.status, 2.0 * time)
        }

        fn export_ascii(&mut self, filename: &str) -> i32 {
            self.calls.push(format!("export_ascii({filename})"));
            self.status
        }

        fn error_summary_size(&mut self) -> (i32, i32) {
            self.calls.push("error_summary_size".into());
            (self.status, self.log.len() as i32)
        }

        fn error_summary(&mut self, size: i32) -> (i32, String) {
            self.calls.push(format!("error_summary({size})"));
            (self.status, self.log.clone())
        }
    }

    fn session() -> Wgfmu<MockLibrary> {
        Wgfmu::new(MockLibrary::default())
    }

    #[test]
    fn lifecycle_calls_pass_through() {
        let mut wgfmu = session();
        wgfmu.open_session(DEFAULT_ADDRESS).unwrap();
        wgfmu.initialize().unwrap();
        wgfmu.self_test().unwrap();
        wgfmu.clear().unwrap();
        wgfmu.close_session().unwrap();
        assert_eq!(
            wgfmu.library.calls,
            vec![
                format!("open_session({DEFAULT_ADDRESS})"),
                "initialize".to_string(),
                "self_test".to_string(),
                "clear".to_string(),
                "close_session".to_string(),
            ]
        );
    }

    #[test]
    fn typed_arguments_reach_the_library_as_native_constants() {
        let mut wgfmu = session();
        wgfmu.set_operation_mode(Channel::Ch2, OperationMode::FastIv).unwrap();
        wgfmu.set_measure_mode(Channel::Ch1, MeasureMode::Current).unwrap();
        wgfmu
            .set_measure_current_range(Channel::Ch3, MeasureCurrentRange::R1mA)
            .unwrap();
        wgfmu.connect(Channel::Ch1).unwrap();
        assert_eq!(
            wgfmu.library.calls,
            vec![
                "set_operation_mode(202, 2001)",
                "set_measure_mode(201, 4001)",
                "set_measure_current_range(301, 6004)",
                "connect(201)",
            ]
        );
    }

    #[test]
    fn mismatched_vectors_fail_before_any_raw_call() {
        let mut wgfmu = session();
        let result = wgfmu.add_vectors("ramp", &[1e-8, 2e-8, 3e-8], &[0.1, 0.2]);
        match result {
            Err(Error::VectorLengthMismatch { time_steps, voltages }) => {
                assert_eq!(time_steps, 3);
                assert_eq!(voltages, 2);
            }
            other => panic!("expected a length mismatch, got {other:?}"),
        }
        assert!(wgfmu.library.calls.is_empty());
    }

    #[test]
    fn matched_vectors_are_forwarded() {
        let mut wgfmu = session();
        wgfmu.add_vectors("ramp", &[1e-8, 2e-8, 3e-8], &[0.1, 0.2, 0.3]).unwrap();
        assert_eq!(wgfmu.library.calls, vec!["add_vectors(ramp, 3 steps, 3 voltages)"]);
    }

    #[test]
    fn negative_status_surfaces_as_operation_error() {
        let mut wgfmu = session();
        wgfmu.library.status = -10;
        let error = wgfmu.create_pattern("pulse", 0.0).unwrap_err();
        match error {
            Error::Operation(inner) => {
                assert_eq!(inner.code, -10);
                assert_eq!(
                    inner.message,
                    "Unexpected pattern name was specified. Specify the effective pattern name. Or create a new pattern."
                );
            }
            other => panic!("expected an operation error, got {other:?}"),
        }
    }

    #[test]
    fn unknown_negative_status_keeps_its_code() {
        let mut wgfmu = session();
        wgfmu.library.status = -1234;
        let error = wgfmu.execute().unwrap_err();
        match error {
            Error::Operation(inner) => {
                assert_eq!(inner.code, -1234);
                assert_eq!(inner.message, "Unknown error code: -1234");
            }
            other => panic!("expected an operation error, got {other:?}"),
        }
    }

    #[test]
    fn sequence_repetitions_widen_to_the_raw_parameter() {
        let mut wgfmu = session();
        wgfmu.add_sequence(Channel::Ch1, "pulse", 10).unwrap();
        assert_eq!(wgfmu.library.calls, vec!["add_sequence(201, pulse, 10)"]);
    }

    #[test]
    fn measure_event_arguments_follow_the_raw_order() {
        let mut wgfmu = session();
        wgfmu
            .set_measure_event("pulse", "sample", 100, 1e-8, 0.0, MeasureEventMode::Raw, 2e-7)
            .unwrap();
        assert_eq!(
            wgfmu.library.calls,
            vec!["set_measure_event(pulse, sample, 0.0000002, 100, 0.00000001, 0, 12001)"]
        );
    }

    #[test]
    fn measurement_data_collects_every_point() {
        let mut wgfmu = session();
        wgfmu.library.points = vec![(0.0, 0.5), (1e-8, 0.6), (2e-8, 0.7)];
        let data = wgfmu.measurement_data(Channel::Ch1).unwrap();
        assert_eq!(data.times, vec![0.0, 1e-8, 2e-8]);
        assert_eq!(data.values, vec![0.5, 0.6, 0.7]);
        assert_eq!(wgfmu.library.calls.first().map(String::as_str), Some("measure_value_size(201)"));
        assert_eq!(wgfmu.library.calls.len(), 4);
    }

    #[test]
    fn voltage_data_interpolates_at_measured_times() {
        let mut wgfmu = session();
        wgfmu.library.points = vec![(1.0, 0.0), (2.0, 0.0)];
        let voltages = wgfmu.voltage_data(Channel::Ch2).unwrap();
        assert_eq!(voltages, vec![2.0, 4.0]);
    }

    #[test]
    fn channel_ids_run_the_size_query_first() {
        let mut wgfmu = session();
        wgfmu.library.installed = vec![201, 202, 301];
        let ids = wgfmu.channel_ids().unwrap();
        assert_eq!(ids, vec![201, 202, 301]);
        assert_eq!(wgfmu.library.calls, vec!["channel_id_size", "channel_ids(3)"]);
    }

    #[test]
    fn empty_error_summary_reads_as_placeholder() {
        let mut wgfmu = session();
        assert_eq!(wgfmu.error_summary().unwrap(), "No error details available");
        // The buffer read is skipped entirely when the log is empty.
        assert_eq!(wgfmu.library.calls, vec!["error_summary_size"]);
    }

    #[test]
    fn accumulated_error_summary_is_returned() {
        let mut wgfmu = session();
        wgfmu.library.log = "channel 201: context error".into();
        let summary = wgfmu.error_summary().unwrap();
        assert_eq!(summary, "channel 201: context error");
        assert_eq!(
            wgfmu.library.calls,
            vec!["error_summary_size".to_string(), format!("error_summary({})", summary.len())]
        );
    }

    #[test]
    fn export_writes_through_the_library() {
        let mut wgfmu = session();
        wgfmu.export_measurement_setup("measurement_setup.csv").unwrap();
        assert_eq!(wgfmu.library.calls, vec!["export_ascii(measurement_setup.csv)"]);
    }
}
