// Copyright 2026 Zurich Instruments AG
// SPDX-License-Identifier: Apache-2.0

use crate::Result;
use crate::status::OperationError;

/// Raw result shape shared by every WGFMU library call.
///
/// A call returns either a bare status code or a tuple whose first element is
/// the status code and whose remaining elements are the output values. The
/// trait captures both shapes so the pipeline below can operate on any of
/// them.
pub trait Response {
    /// The output values with the leading status code removed.
    type Payload;

    fn status(&self) -> i32;
    fn into_payload(self) -> Self::Payload;
}

impl Response for i32 {
    type Payload = ();

    fn status(&self) -> i32 {
        *self
    }

    fn into_payload(self) -> Self::Payload {}
}

impl<T> Response for (i32, T) {
    type Payload = T;

    fn status(&self) -> i32 {
        self.0
    }

    fn into_payload(self) -> Self::Payload {
        self.1
    }
}

macro_rules! impl_response_for_tuple {
    ($($field:tt: $ty:ident),+) => {
        impl<$($ty),+> Response for (i32, $($ty),+) {
            type Payload = ($($ty,)+);

            fn status(&self) -> i32 {
                self.0
            }

            fn into_payload(self) -> Self::Payload {
                ($(self.$field,)+)
            }
        }
    };
}

impl_response_for_tuple!(1: T0, 2: T1);
impl_response_for_tuple!(1: T0, 2: T1, 3: T2);

/// Reject a response whose status code is negative.
///
/// Zero and positive codes pass through unchanged. Positive codes are
/// sequencer state indicators, not failures, and polling callers still need
/// to see them.
pub fn check_status<R: Response>(response: R) -> Result<R> {
    let status = response.status();
    if status < 0 {
        return Err(OperationError::from_code(status));
    }
    Ok(response)
}

/// Drop the leading status code and return the remaining output values.
///
/// A bare status strips to `()` whatever its value; a single output value is
/// returned bare, several keep their order as a tuple.
pub fn strip_status<R: Response>(response: R) -> R::Payload {
    response.into_payload()
}

/// Validate and unwrap a raw library response.
///
/// Validation always runs first, so a failing call never yields its payload.
pub fn normalize<R: Response>(response: R) -> Result<R::Payload> {
    check_status(response).map(strip_status)
}
