// Copyright 2026 Zurich Instruments AG
// SPDX-License-Identifier: Apache-2.0

mod channel;
mod measure_current_range;
mod measure_event_mode;
mod measure_mode;
mod operation_mode;

pub use channel::Channel;
pub use measure_current_range::MeasureCurrentRange;
pub use measure_event_mode::MeasureEventMode;
pub use measure_mode::MeasureMode;
pub use operation_mode::OperationMode;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn native_constants() {
        assert_eq!(i32::from(Channel::Ch1), 201);
        assert_eq!(i32::from(Channel::Ch2), 202);
        assert_eq!(i32::from(Channel::Ch3), 301);
        assert_eq!(i32::from(OperationMode::Dc), 2000);
        assert_eq!(i32::from(OperationMode::FastIv), 2001);
        assert_eq!(i32::from(OperationMode::Pg), 2002);
        assert_eq!(i32::from(OperationMode::Smu), 2003);
        assert_eq!(i32::from(MeasureMode::Voltage), 4000);
        assert_eq!(i32::from(MeasureMode::Current), 4001);
        assert_eq!(i32::from(MeasureCurrentRange::R1uA), 6001);
        assert_eq!(i32::from(MeasureCurrentRange::R10mA), 6005);
        assert_eq!(i32::from(MeasureEventMode::Averaged), 12000);
        assert_eq!(i32::from(MeasureEventMode::Raw), 12001);
    }

    #[test]
    fn serde_round_trip() {
        let json = serde_json::to_string(&Channel::Ch2).unwrap();
        assert_eq!(json, "\"Ch2\"");
        assert_eq!(serde_json::from_str::<Channel>(&json).unwrap(), Channel::Ch2);

        let json = serde_json::to_string(&OperationMode::Pg).unwrap();
        assert_eq!(serde_json::from_str::<OperationMode>(&json).unwrap(), OperationMode::Pg);
    }

    #[test]
    fn defaults_match_the_instrument() {
        assert_eq!(Channel::default(), Channel::Ch1);
        assert_eq!(OperationMode::default(), OperationMode::Smu);
        assert_eq!(MeasureMode::default(), MeasureMode::Voltage);
        assert_eq!(MeasureCurrentRange::default(), MeasureCurrentRange::R10uA);
        assert_eq!(MeasureEventMode::default(), MeasureEventMode::Averaged);
    }
}
