//! Request lifecycle for the upload flow.
//!
//! A single state machine replaces the loose file/result/loading/error flags:
//! the result and the error message live inside their variants, so a stale
//! error can never coexist with an in-flight request or a fresh payload.

use crate::types::AnalysisResult;

/// Lifecycle of the one analysis request.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum RequestState {
    /// No attempt made yet.
    #[default]
    Idle,
    /// Exactly one request in flight.
    Submitting,
    /// Last attempt resolved with a parsed payload.
    Succeeded(AnalysisResult),
    /// Last attempt resolved with a human-readable reason.
    Failed(String),
}

impl RequestState {
    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting)
    }

    /// Payload of the last successful attempt, if any.
    pub fn result(&self) -> Option<&AnalysisResult> {
        match self {
            Self::Succeeded(result) => Some(result),
            _ => None,
        }
    }

    /// Error message of the last failed attempt, if any.
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Starts a new attempt.
    ///
    /// Returns `false` and leaves the state untouched when no file is
    /// selected or a request is already in flight. Otherwise moves to
    /// `Submitting`, dropping any previous error or result.
    pub fn begin(&mut self, has_file: bool) -> bool {
        if !has_file || self.is_submitting() {
            return false;
        }
        *self = Self::Submitting;
        true
    }

    /// Settles the in-flight attempt.
    ///
    /// A resolution arriving in any other state is ignored; the disabled
    /// submit control keeps at most one request outstanding, so this only
    /// happens if a caller misuses the machine.
    pub fn resolve(&mut self, outcome: Result<AnalysisResult, String>) {
        if !self.is_submitting() {
            return;
        }
        *self = match outcome {
            Ok(result) => Self::Succeeded(result),
            Err(message) => Self::Failed(message),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> AnalysisResult {
        AnalysisResult {
            filename: "a.csv".to_string(),
            rows: 10,
            columns: 3,
            ..Default::default()
        }
    }

    #[test]
    fn test_begin_without_file_is_rejected() {
        let mut state = RequestState::Idle;
        assert!(!state.begin(false));
        assert_eq!(state, RequestState::Idle);
    }

    #[test]
    fn test_begin_while_submitting_is_rejected() {
        let mut state = RequestState::Submitting;
        assert!(!state.begin(true));
        assert_eq!(state, RequestState::Submitting);
    }

    #[test]
    fn test_success_path() {
        let mut state = RequestState::Idle;
        assert!(state.begin(true));
        assert!(state.is_submitting());

        state.resolve(Ok(payload()));
        assert_eq!(state.result(), Some(&payload()));
        assert_eq!(state.error(), None);
    }

    #[test]
    fn test_failure_path() {
        let mut state = RequestState::Idle;
        assert!(state.begin(true));

        state.resolve(Err("unsupported file type".to_string()));
        assert_eq!(state.error(), Some("unsupported file type"));
        assert_eq!(state.result(), None);
    }

    #[test]
    fn test_resubmit_clears_previous_error() {
        let mut state = RequestState::Failed("boom".to_string());
        assert!(state.begin(true));
        assert_eq!(state.error(), None);
        assert!(state.is_submitting());
    }

    #[test]
    fn test_succeeded_accepts_new_attempt() {
        let mut state = RequestState::Succeeded(payload());
        assert!(state.begin(true));
        assert!(state.is_submitting());
    }

    #[test]
    fn test_resolve_outside_submitting_is_ignored() {
        let mut state = RequestState::Idle;
        state.resolve(Err("late".to_string()));
        assert_eq!(state, RequestState::Idle);
    }
}
