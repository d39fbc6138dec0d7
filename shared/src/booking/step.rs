//! Flow steps and per-step render results

use serde::{Deserialize, Serialize};

/// Position in the linear booking flow
///
/// `Empty → ServiceChosen → StaffTimeChosen → DetailsAdded`, derived
/// from which fields of the booking state are populated. There is no
/// programmatic back-transition; abandoning the flow resets the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStep {
    /// Nothing selected yet
    #[default]
    Empty,
    /// A service has been chosen
    ServiceChosen,
    /// Staff member and time window have been chosen
    StaffTimeChosen,
    /// Comments collected (possibly empty), ready for the summary
    DetailsAdded,
}

/// Tagged render result for one step of the flow
///
/// Replaces polymorphic render callbacks: the flow controller
/// produces one of these per step and the presentation layer matches
/// on it. `Error` carries the step's typed error so the render layer
/// can distinguish load, precondition and configuration failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepView<T, E = String> {
    /// Fetch still in flight
    Loading,
    /// Fetch succeeded but there is nothing to show
    Empty,
    /// Step cannot render
    Error(E),
    /// Step data ready to render
    Ready(T),
}

impl<T, E> StepView<T, E> {
    /// Whether this view carries renderable data
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    /// The ready payload, if any
    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(data) => Some(data),
            _ => None,
        }
    }

    /// Consume the view, yielding the ready payload if any
    pub fn into_ready(self) -> Option<T> {
        match self {
            Self::Ready(data) => Some(data),
            _ => None,
        }
    }

    /// Map the ready payload, leaving other variants untouched
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> StepView<U, E> {
        match self {
            Self::Loading => StepView::Loading,
            Self::Empty => StepView::Empty,
            Self::Error(err) => StepView::Error(err),
            Self::Ready(data) => StepView::Ready(f(data)),
        }
    }
}

impl<T, E> From<Result<Vec<T>, E>> for StepView<Vec<T>, E> {
    /// Collapse a list-fetch result into a render view: an empty
    /// list becomes `Empty`, an error is carried through.
    fn from(result: Result<Vec<T>, E>) -> Self {
        match result {
            Ok(items) if items.is_empty() => Self::Empty,
            Ok(items) => Self::Ready(items),
            Err(err) => Self::Error(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_results_collapse_into_views() {
        let ok: Result<Vec<i32>, String> = Ok(vec![1, 2]);
        assert_eq!(StepView::from(ok), StepView::Ready(vec![1, 2]));

        let empty: Result<Vec<i32>, String> = Ok(vec![]);
        assert_eq!(StepView::from(empty), StepView::<Vec<i32>>::Empty);

        let err: Result<Vec<i32>, String> = Err("server unavailable".to_string());
        assert_eq!(
            StepView::from(err),
            StepView::<Vec<i32>>::Error("server unavailable".to_string())
        );
    }

    #[test]
    fn map_preserves_non_ready_variants() {
        let view: StepView<Vec<i32>> = StepView::Loading;
        assert_eq!(view.map(|v| v.len()), StepView::Loading);

        let view: StepView<Vec<i32>> = StepView::Ready(vec![1, 2, 3]);
        assert_eq!(view.map(|v| v.len()), StepView::Ready(3));
    }

    #[test]
    fn into_ready_yields_the_payload() {
        let view: StepView<Vec<i32>> = StepView::Ready(vec![7]);
        assert_eq!(view.into_ready(), Some(vec![7]));

        let view: StepView<Vec<i32>> = StepView::Empty;
        assert_eq!(view.into_ready(), None);
    }
}
