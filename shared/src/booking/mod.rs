//! Booking flow state machine
//!
//! The multi-stage booking workflow accumulates a selection across
//! screens (service, staff member, time window, comments) before a
//! single create-appointment submission. This module holds the pure
//! state: the accumulating [`BookingState`], the derived
//! [`BookingStep`], and the [`StepView`] render result consumed by
//! the presentation layer.

pub mod state;
pub mod step;

pub use state::{BookingState, BookingStateUpdate, CommentsTooLong, MAX_COMMENTS_LEN, validate_comments};
pub use step::{BookingStep, StepView};
