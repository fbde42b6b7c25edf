//! Submission state machine for the contact modal.
//!
//! `ContactWorkflow` never touches the browser. Every operation returns the
//! side effects it wants performed (a send, a delayed reset, closing the
//! modal) and the component hosting it carries them out, feeding outcomes
//! back in through `complete_send` and `fire`.

use log::{debug, info, warn};
use thiserror::Error;

use crate::config::{EmailJsConfig, ERROR_RESET_MS, SUCCESS_RESET_MS};
use crate::contact::client::SendError;
use crate::contact::form::{self, Field, FormState, ValidationErrors};
use crate::contact::payload::EmailJsRequest;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Lifecycle {
    #[default]
    Idle,
    Submitting,
    Submitted,
}

/// Identifies one open/submit period of the modal. Responses and timers
/// carry the session they were started in and are dropped if it has moved on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SessionId(u64);

impl SessionId {
    fn next(self) -> Self {
        SessionId(self.0.wrapping_add(1))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerKind {
    SuccessReset,
    ErrorReset,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimerTask {
    pub session: SessionId,
    pub kind: TimerKind,
}

impl TimerTask {
    pub fn delay_ms(&self) -> u32 {
        match self.kind {
            TimerKind::SuccessReset => SUCCESS_RESET_MS,
            TimerKind::ErrorReset => ERROR_RESET_MS,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    Send {
        session: SessionId,
        request: EmailJsRequest,
    },
    Schedule(TimerTask),
    CloseModal,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SubmitRejected {
    #[error("a submission is already {0:?}")]
    Busy(Lifecycle),
    #[error("form has errors in: {}", .0.keys_summary())]
    Invalid(ValidationErrors),
}

#[derive(Clone, Debug, PartialEq)]
pub struct ContactWorkflow {
    config: EmailJsConfig,
    form: FormState,
    errors: ValidationErrors,
    lifecycle: Lifecycle,
    session: SessionId,
}

impl ContactWorkflow {
    pub fn new(config: EmailJsConfig) -> Self {
        Self {
            config,
            form: FormState::default(),
            errors: ValidationErrors::new(),
            lifecycle: Lifecycle::Idle,
            session: SessionId::default(),
        }
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn session(&self) -> SessionId {
        self.session
    }

    fn reset(&mut self) {
        self.form = FormState::default();
        self.errors.clear();
        self.lifecycle = Lifecycle::Idle;
        self.session = self.session.next();
    }

    /// Starts a fresh session with an empty form.
    pub fn open(&mut self) {
        self.reset();
        debug!("Contact form opened, session {:?}", self.session);
    }

    pub fn update_field(&mut self, field: Field, value: String) {
        self.form.set(field, value);
        if let Some(key) = field.error_key() {
            self.errors.remove(key);
        }
    }

    pub fn validate(&self) -> ValidationErrors {
        form::validate(&self.form)
    }

    pub fn submit(&mut self) -> Result<Vec<Effect>, SubmitRejected> {
        if self.lifecycle != Lifecycle::Idle {
            return Err(SubmitRejected::Busy(self.lifecycle));
        }

        let errors = self.validate();
        self.errors = errors.clone();
        if !errors.is_empty() {
            info!("Contact form rejected, invalid fields: {}", errors.keys_summary());
            return Err(SubmitRejected::Invalid(errors));
        }

        self.session = self.session.next();
        self.lifecycle = Lifecycle::Submitting;
        info!("Sending contact request, session {:?}", self.session);

        Ok(vec![Effect::Send {
            session: self.session,
            request: EmailJsRequest::new(&self.config, &self.form),
        }])
    }

    /// Applies the outcome of the send started in `session`.
    pub fn complete_send(&mut self, session: SessionId, outcome: Result<(), SendError>) -> Vec<Effect> {
        if session != self.session || self.lifecycle != Lifecycle::Submitting {
            debug!("Ignoring send result for stale session {:?}", session);
            return Vec::new();
        }

        match outcome {
            Ok(()) => {
                info!("Contact request delivered");
                self.errors.clear();
                self.lifecycle = Lifecycle::Submitted;
                vec![Effect::Schedule(TimerTask {
                    session,
                    kind: TimerKind::SuccessReset,
                })]
            }
            Err(e) => {
                warn!("Contact request failed: {}", e);
                self.lifecycle = Lifecycle::Idle;
                self.errors = ValidationErrors::submit_failed();
                vec![Effect::Schedule(TimerTask {
                    session,
                    kind: TimerKind::ErrorReset,
                })]
            }
        }
    }

    pub fn fire(&mut self, task: TimerTask) -> Vec<Effect> {
        if task.session != self.session {
            debug!("Ignoring {:?} timer for stale session {:?}", task.kind, task.session);
            return Vec::new();
        }

        match task.kind {
            TimerKind::SuccessReset => {
                if self.lifecycle != Lifecycle::Submitted {
                    return Vec::new();
                }
                self.reset();
                vec![Effect::CloseModal]
            }
            TimerKind::ErrorReset => {
                self.errors.clear();
                Vec::new()
            }
        }
    }

    /// Abandons the current session from any state.
    pub fn close(&mut self) -> Vec<Effect> {
        self.reset();
        debug!("Contact form closed");
        vec![Effect::CloseModal]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::form::{ErrorKey, EMAIL_INVALID, MESSAGE_TOO_SHORT, NAME_REQUIRED, SUBMIT_FAILED};

    /// Stands in for the browser's timers so tests can step through time.
    #[derive(Default)]
    struct ManualClock {
        now_ms: u64,
        pending: Vec<(u64, TimerTask)>,
    }

    impl ManualClock {
        fn schedule(&mut self, effects: &[Effect]) {
            for effect in effects {
                if let Effect::Schedule(task) = effect {
                    self.pending.push((self.now_ms + u64::from(task.delay_ms()), *task));
                }
            }
        }

        fn advance(&mut self, ms: u64) -> Vec<TimerTask> {
            self.now_ms += ms;
            let now = self.now_ms;
            let (due, pending): (Vec<_>, Vec<_>) =
                self.pending.drain(..).partition(|(at, _)| *at <= now);
            self.pending = pending;
            let mut due = due;
            due.sort_by_key(|(at, _)| *at);
            due.into_iter().map(|(_, task)| task).collect()
        }
    }

    fn workflow() -> ContactWorkflow {
        let mut workflow = ContactWorkflow::new(EmailJsConfig::default());
        workflow.open();
        workflow
    }

    fn fill_valid(workflow: &mut ContactWorkflow) {
        workflow.update_field(Field::Name, "Jo".to_string());
        workflow.update_field(Field::Email, "jo@x.com".to_string());
        workflow.update_field(Field::Message, "Hello there, this is long enough".to_string());
    }

    fn sent_session(effects: &[Effect]) -> SessionId {
        match effects {
            [Effect::Send { session, .. }] => *session,
            other => panic!("expected a single send, got {other:?}"),
        }
    }

    fn run_timers(workflow: &mut ContactWorkflow, clock: &mut ManualClock, ms: u64) -> Vec<Effect> {
        clock
            .advance(ms)
            .into_iter()
            .flat_map(|task| workflow.fire(task))
            .collect()
    }

    #[test]
    fn valid_submit_sends_exactly_once() {
        let mut workflow = workflow();
        fill_valid(&mut workflow);
        assert!(workflow.validate().is_empty());

        let effects = workflow.submit().unwrap();
        assert_eq!(workflow.lifecycle(), Lifecycle::Submitting);

        let sends: Vec<_> = effects
            .iter()
            .filter_map(|effect| match effect {
                Effect::Send { request, .. } => Some(request),
                _ => None,
            })
            .collect();
        assert_eq!(sends.len(), 1);
        let params = &sends[0].template_params;
        assert_eq!(params.from_name, "Jo");
        assert_eq!(params.from_email, "jo@x.com");
        assert_eq!(params.message, "Hello there, this is long enough");
        assert_eq!(params.to_name, "JDS Team");
    }

    #[test]
    fn invalid_submit_makes_no_call() {
        let mut workflow = workflow();
        workflow.update_field(Field::Email, "bad".to_string());
        workflow.update_field(Field::Message, "short".to_string());

        let rejected = workflow.submit().unwrap_err();
        let SubmitRejected::Invalid(errors) = rejected else {
            panic!("expected invalid form");
        };
        assert_eq!(errors.get(ErrorKey::Name), Some(NAME_REQUIRED));
        assert_eq!(errors.get(ErrorKey::Email), Some(EMAIL_INVALID));
        assert_eq!(errors.get(ErrorKey::Message), Some(MESSAGE_TOO_SHORT));
        assert_eq!(workflow.errors(), &errors);
        assert_eq!(workflow.lifecycle(), Lifecycle::Idle);

        // Repeating the attempt changes nothing.
        assert!(matches!(workflow.submit(), Err(SubmitRejected::Invalid(_))));
        assert_eq!(workflow.lifecycle(), Lifecycle::Idle);
    }

    #[test]
    fn editing_a_field_clears_only_its_error() {
        let mut workflow = workflow();
        let _ = workflow.submit();
        assert_eq!(workflow.errors().len(), 3);

        workflow.update_field(Field::Name, "J".to_string());
        assert!(!workflow.errors().contains(ErrorKey::Name));
        assert!(workflow.errors().contains(ErrorKey::Email));
        assert!(workflow.errors().contains(ErrorKey::Message));

        workflow.update_field(Field::Title, "CEO".to_string());
        assert_eq!(workflow.errors().len(), 2);
        assert_eq!(workflow.form().title, "CEO");
    }

    #[test]
    fn success_resets_after_three_seconds() {
        let mut workflow = workflow();
        let mut clock = ManualClock::default();
        fill_valid(&mut workflow);

        let session = sent_session(&workflow.submit().unwrap());
        let effects = workflow.complete_send(session, Ok(()));
        clock.schedule(&effects);
        assert_eq!(workflow.lifecycle(), Lifecycle::Submitted);
        assert!(workflow.errors().is_empty());

        assert!(run_timers(&mut workflow, &mut clock, 2_999).is_empty());
        assert_eq!(workflow.lifecycle(), Lifecycle::Submitted);

        let effects = run_timers(&mut workflow, &mut clock, 1);
        assert_eq!(effects, vec![Effect::CloseModal]);
        assert_eq!(workflow.lifecycle(), Lifecycle::Idle);
        assert_eq!(workflow.form(), &FormState::default());
    }

    #[test]
    fn failure_shows_submit_error_for_five_seconds() {
        let mut workflow = workflow();
        let mut clock = ManualClock::default();
        fill_valid(&mut workflow);

        let session = sent_session(&workflow.submit().unwrap());
        let effects = workflow.complete_send(session, Err(SendError::Network("offline".to_string())));
        clock.schedule(&effects);

        assert_eq!(workflow.lifecycle(), Lifecycle::Idle);
        assert_eq!(workflow.errors().get(ErrorKey::Submit), Some(SUBMIT_FAILED));
        assert_eq!(workflow.errors().len(), 1);
        assert_eq!(workflow.form().name, "Jo");

        run_timers(&mut workflow, &mut clock, 4_999);
        assert!(!workflow.errors().is_empty());
        let effects = run_timers(&mut workflow, &mut clock, 1);
        assert!(effects.is_empty());
        assert!(workflow.errors().is_empty());
    }

    #[test]
    fn error_timer_clears_field_errors_from_a_later_invalid_attempt() {
        let mut workflow = workflow();
        let mut clock = ManualClock::default();
        fill_valid(&mut workflow);

        let session = sent_session(&workflow.submit().unwrap());
        clock.schedule(&workflow.complete_send(session, Err(SendError::Network("offline".to_string()))));

        run_timers(&mut workflow, &mut clock, 2_000);
        workflow.update_field(Field::Name, String::new());
        assert!(matches!(workflow.submit(), Err(SubmitRejected::Invalid(_))));
        assert_eq!(workflow.errors().get(ErrorKey::Name), Some(NAME_REQUIRED));
        assert!(!workflow.errors().contains(ErrorKey::Submit));

        run_timers(&mut workflow, &mut clock, 3_000);
        assert!(workflow.errors().is_empty());
        assert_eq!(workflow.lifecycle(), Lifecycle::Idle);
    }

    #[test]
    fn retry_after_failure_is_allowed() {
        let mut workflow = workflow();
        fill_valid(&mut workflow);

        let first = sent_session(&workflow.submit().unwrap());
        workflow.complete_send(first, Err(SendError::Rejected { status: 500, body: String::new() }));

        let second = sent_session(&workflow.submit().unwrap());
        assert_ne!(first, second);
        assert!(workflow.errors().is_empty());
        assert_eq!(workflow.lifecycle(), Lifecycle::Submitting);
    }

    #[test]
    fn stale_error_timer_does_not_clear_a_newer_failure() {
        let mut workflow = workflow();
        let mut clock = ManualClock::default();
        fill_valid(&mut workflow);

        let first = sent_session(&workflow.submit().unwrap());
        clock.schedule(&workflow.complete_send(first, Err(SendError::Network("a".to_string()))));
        run_timers(&mut workflow, &mut clock, 4_000);

        let second = sent_session(&workflow.submit().unwrap());
        clock.schedule(&workflow.complete_send(second, Err(SendError::Network("b".to_string()))));

        run_timers(&mut workflow, &mut clock, 1_000);
        assert_eq!(workflow.errors().get(ErrorKey::Submit), Some(SUBMIT_FAILED));

        run_timers(&mut workflow, &mut clock, 4_000);
        assert!(workflow.errors().is_empty());
    }

    #[test]
    fn submit_is_rejected_while_busy() {
        let mut workflow = workflow();
        fill_valid(&mut workflow);

        let session = sent_session(&workflow.submit().unwrap());
        assert_eq!(workflow.submit(), Err(SubmitRejected::Busy(Lifecycle::Submitting)));

        workflow.complete_send(session, Ok(()));
        assert_eq!(workflow.submit(), Err(SubmitRejected::Busy(Lifecycle::Submitted)));
    }

    #[test]
    fn close_resets_from_every_state() {
        let mut idle = workflow();
        idle.update_field(Field::Name, "Jo".to_string());
        let _ = idle.submit();

        let mut submitting = workflow();
        fill_valid(&mut submitting);
        submitting.submit().unwrap();

        let mut submitted = workflow();
        fill_valid(&mut submitted);
        let session = sent_session(&submitted.submit().unwrap());
        submitted.complete_send(session, Ok(()));

        for mut workflow in [idle, submitting, submitted] {
            assert_eq!(workflow.close(), vec![Effect::CloseModal]);
            assert_eq!(workflow.lifecycle(), Lifecycle::Idle);
            assert_eq!(workflow.form(), &FormState::default());
            assert!(workflow.errors().is_empty());
        }
    }

    #[test]
    fn late_response_after_close_is_ignored() {
        let mut workflow = workflow();
        fill_valid(&mut workflow);
        let session = sent_session(&workflow.submit().unwrap());

        workflow.close();
        workflow.open();
        workflow.update_field(Field::Name, "Sam".to_string());

        assert!(workflow.complete_send(session, Ok(())).is_empty());
        assert_eq!(workflow.lifecycle(), Lifecycle::Idle);
        assert_eq!(workflow.form().name, "Sam");
    }

    #[test]
    fn late_timer_after_close_is_ignored() {
        let mut workflow = workflow();
        let mut clock = ManualClock::default();
        fill_valid(&mut workflow);
        let session = sent_session(&workflow.submit().unwrap());
        clock.schedule(&workflow.complete_send(session, Ok(())));

        workflow.close();
        workflow.open();
        workflow.update_field(Field::Message, "draft in progress".to_string());

        assert!(run_timers(&mut workflow, &mut clock, 3_000).is_empty());
        assert_eq!(workflow.form().message, "draft in progress");
    }

    #[test]
    fn open_starts_from_a_clean_slate() {
        let mut workflow = workflow();
        let before = workflow.session();
        workflow.update_field(Field::Email, "bad".to_string());
        let _ = workflow.submit();

        workflow.open();
        assert!(workflow.session() > before);
        assert_eq!(workflow.form(), &FormState::default());
        assert!(workflow.errors().is_empty());
        assert_eq!(workflow.lifecycle(), Lifecycle::Idle);
    }
}
