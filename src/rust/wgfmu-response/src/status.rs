// Copyright 2026 Zurich Instruments AG
// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure codes defined by the WGFMU instrument library.
///
/// Every negative status returned by a raw call either maps to one of these
/// or falls outside the table; newer firmware revisions may report codes the
/// table does not know about, so the mapping stays optional.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(i32)]
pub enum ErrorCode {
    ParameterOutOfRange = -1,
    IllegalString = -2,
    Context = -3,
    FunctionNotSupported = -4,
    Communication = -5,
    Firmware = -6,
    Library = -7,
    Unidentified = -8,
    ChannelNotFound = -9,
    PatternNotFound = -10,
    EventNotFound = -11,
    PatternAlreadyExists = -12,
    SequencerNotRunning = -13,
    ResultNotReady = -14,
    ResultOutOfDate = -15,
}

impl ErrorCode {
    pub fn from_code(code: i32) -> Option<Self> {
        let code = match code {
            -1 => ErrorCode::ParameterOutOfRange,
            -2 => ErrorCode::IllegalString,
            -3 => ErrorCode::Context,
            -4 => ErrorCode::FunctionNotSupported,
            -5 => ErrorCode::Communication,
            -6 => ErrorCode::Firmware,
            -7 => ErrorCode::Library,
            -8 => ErrorCode::Unidentified,
            -9 => ErrorCode::ChannelNotFound,
            -10 => ErrorCode::PatternNotFound,
            -11 => ErrorCode::EventNotFound,
            -12 => ErrorCode::PatternAlreadyExists,
            -13 => ErrorCode::SequencerNotRunning,
            -14 => ErrorCode::ResultNotReady,
            -15 => ErrorCode::ResultOutOfDate,
            _ => return None,
        };
        Some(code)
    }

    /// The vendor-documented description of this code.
    pub fn message(self) -> &'static str {
        match self {
            ErrorCode::ParameterOutOfRange => {
                "Invalid parameter value was found. It will be out of the range. Set the effective parameter value."
            }
            ErrorCode::IllegalString => {
                "Invalid string value was found. It will be empty or illegal (pointer). Set the effective string value."
            }
            ErrorCode::Context => {
                "Context error was found between relative functions. Set the effective parameter value."
            }
            ErrorCode::FunctionNotSupported => {
                "Specified function is not supported by this channel. Set the channel id properly."
            }
            ErrorCode::Communication => "IO library error was found.",
            ErrorCode::Firmware => "Firmware error was found.",
            ErrorCode::Library => "WGFMU instrument library error was found.",
            ErrorCode::Unidentified => "Unidentified error was found.",
            ErrorCode::ChannelNotFound => {
                "Specified channel id is not available for WGFMU. Set the channel id properly."
            }
            ErrorCode::PatternNotFound => {
                "Unexpected pattern name was specified. Specify the effective pattern name. Or create a new pattern."
            }
            ErrorCode::EventNotFound => {
                "Unexpected event name was specified. Specify the effective event name."
            }
            ErrorCode::PatternAlreadyExists => {
                "Duplicate pattern name was specified. Specify the unique pattern name."
            }
            ErrorCode::SequencerNotRunning => {
                "Sequencer must be run to execute the specified function. Run the sequencer."
            }
            ErrorCode::ResultNotReady => {
                "Measurement is in progress. Read the result data after the measurement is completed."
            }
            ErrorCode::ResultOutOfDate => {
                "Measurement result data was deleted by the setup change. The result data must be read before changing the waveform setup or the measurement setup."
            }
        }
    }
}

/// Sequencer state codes returned by polling-style calls.
///
/// These are positive and never treated as failures; they travel through the
/// response pipeline untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(i32)]
pub enum ExecutionStatus {
    Completed = 10000,
    Done = 10001,
    Running = 10002,
    AbortCompleted = 10003,
    Aborted = 10004,
    RunningIllegal = 10005,
    Idle = 10006,
}

impl ExecutionStatus {
    pub fn from_code(code: i32) -> Option<Self> {
        let status = match code {
            10000 => ExecutionStatus::Completed,
            10001 => ExecutionStatus::Done,
            10002 => ExecutionStatus::Running,
            10003 => ExecutionStatus::AbortCompleted,
            10004 => ExecutionStatus::Aborted,
            10005 => ExecutionStatus::RunningIllegal,
            10006 => ExecutionStatus::Idle,
            _ => return None,
        };
        Some(status)
    }
}

/// Error raised when a library call reports a negative status code.
///
/// Carries the original numeric code together with the message resolved from
/// the code table. Codes outside the table are tolerated and get a generated
/// fallback message instead.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("WGFMU Error {code}: {message}")]
pub struct OperationError {
    pub code: i32,
    pub message: String,
}

impl OperationError {
    pub fn from_code(code: i32) -> Self {
        let message = match ErrorCode::from_code(code) {
            Some(known) => known.message().to_owned(),
            None => format!("Unknown error code: {code}"),
        };
        OperationError { code, message }
    }

    /// The table entry for this code, if it is a known one.
    pub fn kind(&self) -> Option<ErrorCode> {
        ErrorCode::from_code(self.code)
    }
}
