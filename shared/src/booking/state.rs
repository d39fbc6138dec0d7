//! In-progress booking selection

use crate::models::{Service, StaffMember};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::step::BookingStep;

/// Maximum length of the free-text comments field, in characters
pub const MAX_COMMENTS_LEN: usize = 500;

/// Comments exceeded [`MAX_COMMENTS_LEN`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("comments exceed the {MAX_COMMENTS_LEN} character limit ({len} given)")]
pub struct CommentsTooLong {
    /// Character count of the rejected text
    pub len: usize,
}

/// The in-progress booking selection, populated incrementally
/// across the flow's screens
///
/// `staff_member`, `start` and `end` are only meaningful once
/// `service` is set. No validation happens at this level; each
/// consuming step validates what it needs before merging.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookingState {
    pub service: Option<Service>,
    pub staff_member: Option<StaffMember>,
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
    /// IANA time zone name
    pub time_zone: Option<String>,
    pub comments: Option<String>,
}

/// Partial update payload for [`BookingState`]
///
/// `Some` fields overwrite the current value, `None` fields are
/// left untouched.
#[derive(Debug, Clone, Default)]
pub struct BookingStateUpdate {
    pub service: Option<Service>,
    pub staff_member: Option<StaffMember>,
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
    pub time_zone: Option<String>,
    pub comments: Option<String>,
}

impl BookingState {
    /// Create an empty booking state
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge a subset of fields into the current state
    pub fn merge(&mut self, update: BookingStateUpdate) {
        if let Some(service) = update.service {
            self.service = Some(service);
        }
        if let Some(staff) = update.staff_member {
            self.staff_member = Some(staff);
        }
        if let Some(start) = update.start {
            self.start = Some(start);
        }
        if let Some(end) = update.end {
            self.end = Some(end);
        }
        if let Some(tz) = update.time_zone {
            self.time_zone = Some(tz);
        }
        if let Some(comments) = update.comments {
            self.comments = Some(comments);
        }
    }

    /// Clear every field back to the initial empty state
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Whether the state carries everything submission requires
    ///
    /// Submission needs service, staff member, start and end all
    /// present; comments and time zone are optional.
    pub fn can_submit(&self) -> bool {
        self.service.is_some()
            && self.staff_member.is_some()
            && self.start.is_some()
            && self.end.is_some()
    }

    /// Derive the current step from which fields are populated
    pub fn step(&self) -> BookingStep {
        if self.service.is_none() {
            return BookingStep::Empty;
        }
        if self.staff_member.is_none() || self.start.is_none() || self.end.is_none() {
            return BookingStep::ServiceChosen;
        }
        if self.comments.is_none() {
            return BookingStep::StaffTimeChosen;
        }
        BookingStep::DetailsAdded
    }
}

/// Check free-text comments against the maximum-length constraint
///
/// Counts characters, not bytes, so multi-byte input is not
/// penalized.
pub fn validate_comments(text: &str) -> Result<(), CommentsTooLong> {
    let len = text.chars().count();
    if len > MAX_COMMENTS_LEN {
        return Err(CommentsTooLong { len });
    }
    Ok(())
}
