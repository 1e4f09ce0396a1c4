// Copyright 2026 Zurich Instruments AG
// SPDX-License-Identifier: Apache-2.0

//! Backend that links the vendor WGFMU shared library.
//!
//! Only the entry points used by the operation catalog are declared; the
//! vendor header is not parsed or vendored.

use std::ffi::{CStr, CString};
use std::marker::PhantomData;
use std::os::raw::c_char;

use wgfmu_response::ErrorCode;

use crate::library::InstrumentLibrary;

#[allow(non_snake_case)]
mod ffi {
    use std::os::raw::{c_char, c_double, c_int};

    #[link(name = "wgfmu")]
    unsafe extern "C" {
        pub fn WGFMU_openSession(address: *const c_char) -> c_int;
        pub fn WGFMU_closeSession() -> c_int;
        pub fn WGFMU_initialize() -> c_int;
        pub fn WGFMU_clear() -> c_int;
        pub fn WGFMU_doSelfTest() -> c_int;

        pub fn WGFMU_setOperationMode(channel: c_int, mode: c_int) -> c_int;
        pub fn WGFMU_setMeasureMode(channel: c_int, mode: c_int) -> c_int;
        pub fn WGFMU_setMeasureCurrentRange(channel: c_int, range: c_int) -> c_int;
        pub fn WGFMU_connect(channel: c_int) -> c_int;

        pub fn WGFMU_getChannelIdSize(size: *mut c_int) -> c_int;
        pub fn WGFMU_getChannelIds(ids: *mut c_int, size: *mut c_int) -> c_int;

        pub fn WGFMU_createPattern(pattern: *const c_char, start_voltage: c_double) -> c_int;
        pub fn WGFMU_addVector(
            pattern: *const c_char,
            time_step: c_double,
            voltage: c_double,
        ) -> c_int;
        pub fn WGFMU_addVectors(
            pattern: *const c_char,
            time_steps: *const c_double,
            voltages: *const c_double,
            size: c_int,
        ) -> c_int;
        pub fn WGFMU_addSequence(channel: c_int, pattern: *const c_char, count: c_double) -> c_int;

        pub fn WGFMU_setMeasureEvent(
            pattern: *const c_char,
            event: *const c_char,
            time: c_double,
            points: c_int,
            interval: c_double,
            average: c_double,
            rdata: c_int,
        ) -> c_int;

        pub fn WGFMU_execute() -> c_int;
        pub fn WGFMU_waitUntilCompleted() -> c_int;

        pub fn WGFMU_getMeasureValueSize(
            channel: c_int,
            measured: *mut c_int,
            total: *mut c_int,
        ) -> c_int;
        pub fn WGFMU_getMeasureValue(
            channel: c_int,
            index: c_int,
            time: *mut c_double,
            value: *mut c_double,
        ) -> c_int;
        pub fn WGFMU_getInterpolatedForceValue(
            channel: c_int,
            time: c_double,
            value: *mut c_double,
        ) -> c_int;
        pub fn WGFMU_exportAscii(filename: *const c_char) -> c_int;

        pub fn WGFMU_getErrorSummarySize(size: *mut c_int) -> c_int;
        pub fn WGFMU_getErrorSummary(summary: *mut c_char, size: *mut c_int) -> c_int;
    }
}

/// A string with an embedded NUL byte cannot cross the C boundary; report it
/// as the library's own illegal-string status.
fn c_string(value: &str) -> Result<CString, i32> {
    CString::new(value).map_err(|_| ErrorCode::IllegalString as i32)
}

/// [`InstrumentLibrary`] backed by the vendor shared library.
///
/// The library maintains one global session, so the handle is neither `Send`
/// nor `Sync`.
#[derive(Debug, Default)]
pub struct NativeLibrary {
    _single_session: PhantomData<*mut ()>,
}

impl NativeLibrary {
    pub fn new() -> Self {
        NativeLibrary {
            _single_session: PhantomData,
        }
    }
}

impl InstrumentLibrary for NativeLibrary {
    fn open_session(&mut self, address: &str) -> i32 {
        let address = match c_string(address) {
            Ok(address) => address,
            Err(status) => return status,
        };
        unsafe { ffi::WGFMU_openSession(address.as_ptr()) }
    }

    fn close_session(&mut self) -> i32 {
        unsafe { ffi::WGFMU_closeSession() }
    }

    fn initialize(&mut self) -> i32 {
        unsafe { ffi::WGFMU_initialize() }
    }

    fn clear(&mut self) -> i32 {
        unsafe { ffi::WGFMU_clear() }
    }

    fn self_test(&mut self) -> i32 {
        unsafe { ffi::WGFMU_doSelfTest() }
    }

    fn set_operation_mode(&mut self, channel: i32, mode: i32) -> i32 {
        unsafe { ffi::WGFMU_setOperationMode(channel, mode) }
    }

    fn set_measure_mode(&mut self, channel: i32, mode: i32) -> i32 {
        unsafe { ffi::WGFMU_setMeasureMode(channel, mode) }
    }

    fn set_measure_current_range(&mut self, channel: i32, range: i32) -> i32 {
        unsafe { ffi::WGFMU_setMeasureCurrentRange(channel, range) }
    }

    fn connect(&mut self, channel: i32) -> i32 {
        unsafe { ffi::WGFMU_connect(channel) }
    }

    fn channel_id_size(&mut self) -> (i32, i32) {
        let mut size = 0;
        let status = unsafe { ffi::WGFMU_getChannelIdSize(&mut size) };
        (status, size)
    }

    fn channel_ids(&mut self, size: i32) -> (i32, Vec<i32>) {
        let mut ids = vec![0; usize::try_from(size).unwrap_or(0)];
        let mut size = size;
        let status = unsafe { ffi::WGFMU_getChannelIds(ids.as_mut_ptr(), &mut size) };
        ids.truncate(usize::try_from(size).unwrap_or(0));
        (status, ids)
    }

    fn create_pattern(&mut self, pattern: &str, start_voltage: f64) -> i32 {
        let pattern = match c_string(pattern) {
            Ok(pattern) => pattern,
            Err(status) => return status,
        };
        unsafe { ffi::WGFMU_createPattern(pattern.as_ptr(), start_voltage) }
    }

    fn add_vector(&mut self, pattern: &str, time_step: f64, voltage: f64) -> i32 {
        let pattern = match c_string(pattern) {
            Ok(pattern) => pattern,
            Err(status) => return status,
        };
        unsafe { ffi::WGFMU_addVector(pattern.as_ptr(), time_step, voltage) }
    }

    fn add_vectors(&mut self, pattern: &str, time_steps: &[f64], voltages: &[f64]) -> i32 {
        let pattern = match c_string(pattern) {
            Ok(pattern) => pattern,
            Err(status) => return status,
        };
        unsafe {
            ffi::WGFMU_addVectors(
                pattern.as_ptr(),
                time_steps.as_ptr(),
                voltages.as_ptr(),
                time_steps.len() as i32,
            )
        }
    }

    fn add_sequence(&mut self, channel: i32, pattern: &str, count: f64) -> i32 {
        let pattern = match c_string(pattern) {
            Ok(pattern) => pattern,
            Err(status) => return status,
        };
        unsafe { ffi::WGFMU_addSequence(channel, pattern.as_ptr(), count) }
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
        let (pattern, event) = match (c_string(pattern), c_string(event)) {
            (Ok(pattern), Ok(event)) => (pattern, event),
            _ => return ErrorCode::IllegalString as i32,
        };
        unsafe {
            ffi::WGFMU_setMeasureEvent(
                pattern.as_ptr(),
                event.as_ptr(),
                time,
                points,
                interval,
                average,
                rdata,
            )
        }
    }

    fn execute(&mut self) -> i32 {
        unsafe { ffi::WGFMU_execute() }
    }

    fn wait_until_completed(&mut self) -> i32 {
        unsafe { ffi::WGFMU_waitUntilCompleted() }
    }

    fn measure_value_size(&mut self, channel: i32) -> (i32, i32, i32) {
        let mut measured = 0;
        let mut total = 0;
        let status = unsafe { ffi::WGFMU_getMeasureValueSize(channel, &mut measured, &mut total) };
        (status, measured, total)
    }

    fn measure_value(&mut self, channel: i32, index: i32) -> (i32, f64, f64) {
        let mut time = 0.0;
        let mut value = 0.0;
        let status = unsafe { ffi::WGFMU_getMeasureValue(channel, index, &mut time, &mut value) };
        (status, time, value)
    }

    fn interpolated_force_value(&mut self, channel: i32, time: f64) -> (i32, f64) {
        let mut value = 0.0;
        let status = unsafe { ffi::WGFMU_getInterpolatedForceValue(channel, time, &mut value) };
        (status, value)
    }

    fn export_ascii(&mut self, filename: &str) -> i32 {
        let filename = match c_string(filename) {
            Ok(filename) => filename,
            Err(status) => return status,
        };
        unsafe { ffi::WGFMU_exportAscii(filename.as_ptr()) }
    }

    fn error_summary_size(&mut self) -> (i32, i32) {
        let mut size = 0;
        let status = unsafe { ffi::WGFMU_getErrorSummarySize(&mut size) };
        (status, size)
    }

    fn error_summary(&mut self, size: i32) -> (i32, String) {
        let mut buffer = vec![0u8; usize::try_from(size).unwrap_or(0)];
        let mut size = size;
        let status = unsafe {
            ffi::WGFMU_getErrorSummary(buffer.as_mut_ptr().cast::<c_char>(), &mut size)
        };
        let summary = match CStr::from_bytes_until_nul(&buffer) {
            Ok(text) => text.to_string_lossy().into_owned(),
            Err(_) => String::from_utf8_lossy(&buffer).into_owned(),
        };
        (status, summary)
    }
}
