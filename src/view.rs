//! Two-screen view state: the trip form, or the results for a submitted trip

use crate::form::TripDetails;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ViewState {
    #[default]
    Form,
    Results(TripDetails),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    /// A validated trip was submitted
    Submit(TripDetails),
    /// Go back and plan another trip
    Back,
}

impl ViewState {
    /// Next state for `event`; going back always discards the trip
    #[must_use]
    pub fn transition(self, event: ViewEvent) -> ViewState {
        match event {
            ViewEvent::Submit(details) => ViewState::Results(details),
            ViewEvent::Back => ViewState::Form,
        }
    }

    #[must_use]
    pub fn trip_details(&self) -> Option<&TripDetails> {
        match self {
            ViewState::Form => None,
            ViewState::Results(details) => Some(details),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::TripForm;

    fn details() -> TripDetails {
        TripForm {
            destination: "Oslo".to_string(),
            duration: "2".to_string(),
            start_date: "2025-01-10".to_string(),
            ..TripForm::default()
        }
        .submit()
        .unwrap()
    }

    #[test]
    fn test_starts_on_form() {
        assert_eq!(ViewState::default(), ViewState::Form);
        assert!(ViewState::Form.trip_details().is_none());
    }

    #[test]
    fn test_submit_shows_results() {
        let state = ViewState::Form.transition(ViewEvent::Submit(details()));
        assert_eq!(state.trip_details().unwrap().trip.destination, "Oslo");
    }

    #[test]
    fn test_back_discards_trip() {
        let state = ViewState::Form
            .transition(ViewEvent::Submit(details()))
            .transition(ViewEvent::Back);
        assert_eq!(state, ViewState::Form);
    }

    #[test]
    fn test_back_on_form_stays_on_form() {
        assert_eq!(ViewState::Form.transition(ViewEvent::Back), ViewState::Form);
    }
}
