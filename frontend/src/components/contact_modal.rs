use gloo_timers::callback::Timeout;
use log::debug;
use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config::EmailJsConfig;
use crate::contact::client::{EmailJsClient, SendError};
use crate::contact::form::{ErrorKey, Field};
use crate::contact::workflow::{
    ContactWorkflow, Effect, Lifecycle, SessionId, SubmitRejected, TimerKind, TimerTask,
};

#[derive(Properties, PartialEq)]
pub struct ContactModalProps {
    pub open: bool,
    pub on_close: Callback<()>,
}

pub enum ContactModalMsg {
    Input(Field, String),
    Submit,
    Sent(SessionId, Result<(), SendError>),
    Timer(TimerTask),
    Close,
}

/// At most one pending handle per reset kind. Replacing or dropping a
/// `Timeout` cancels it.
pub struct PendingTimers<H> {
    success: Option<H>,
    error: Option<H>,
}

impl<H> Default for PendingTimers<H> {
    fn default() -> Self {
        Self {
            success: None,
            error: None,
        }
    }
}

impl<H> PendingTimers<H> {
    fn slot(&mut self, kind: TimerKind) -> &mut Option<H> {
        match kind {
            TimerKind::SuccessReset => &mut self.success,
            TimerKind::ErrorReset => &mut self.error,
        }
    }

    pub fn set(&mut self, kind: TimerKind, handle: H) {
        *self.slot(kind) = Some(handle);
    }

    /// Releases the handle of a timer that has just fired.
    pub fn finish(&mut self, kind: TimerKind) {
        self.slot(kind).take();
    }

    pub fn clear(&mut self) {
        self.success = None;
        self.error = None;
    }

    pub fn len(&self) -> usize {
        usize::from(self.success.is_some()) + usize::from(self.error.is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Starts a fresh workflow session when the modal goes from hidden to shown.
pub fn reset_on_open<H>(
    was_open: bool,
    is_open: bool,
    workflow: &mut ContactWorkflow,
    timers: &mut PendingTimers<H>,
) -> bool {
    if !is_open || was_open {
        return false;
    }
    timers.clear();
    workflow.open();
    true
}

pub struct ContactModal {
    workflow: ContactWorkflow,
    client: EmailJsClient,
    timers: PendingTimers<Timeout>,
}

impl Component for ContactModal {
    type Message = ContactModalMsg;
    type Properties = ContactModalProps;

    fn create(ctx: &Context<Self>) -> Self {
        let config = EmailJsConfig::default();
        let mut workflow = ContactWorkflow::new(config.clone());
        if ctx.props().open {
            workflow.open();
        }

        Self {
            workflow,
            client: EmailJsClient::new(&config),
            timers: PendingTimers::default(),
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        reset_on_open(old_props.open, ctx.props().open, &mut self.workflow, &mut self.timers);
        true
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        let effects = match msg {
            ContactModalMsg::Input(field, value) => {
                self.workflow.update_field(field, value);
                Vec::new()
            }
            ContactModalMsg::Submit => match self.workflow.submit() {
                Ok(effects) => effects,
                Err(SubmitRejected::Busy(state)) => {
                    debug!("Submit ignored while {:?}", state);
                    return false;
                }
                Err(SubmitRejected::Invalid(_)) => Vec::new(),
            },
            ContactModalMsg::Sent(session, outcome) => self.workflow.complete_send(session, outcome),
            ContactModalMsg::Timer(task) => {
                self.timers.finish(task.kind);
                self.workflow.fire(task)
            }
            ContactModalMsg::Close => self.workflow.close(),
        };

        self.run(ctx, effects);
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        if !ctx.props().open {
            return html! {};
        }

        let close = ctx.link().callback(|_: MouseEvent| ContactModalMsg::Close);

        html! {
            <div class="contact-overlay">
                <style>{MODAL_CSS}</style>
                <div class="contact-card" role="dialog" aria-modal="true" aria-labelledby="contact-title">
                    <div class="contact-header">
                        <h2 id="contact-title" class="gradient-text">{"Schedule a Consultation"}</h2>
                        <button class="contact-close" onclick={close} aria-label="Close">{"✕"}</button>
                    </div>
                    <div class="contact-body">
                        {
                            if self.workflow.lifecycle() == Lifecycle::Submitted {
                                self.view_confirmation()
                            } else {
                                self.view_form(ctx)
                            }
                        }
                    </div>
                </div>
            </div>
        }
    }
}

impl ContactModal {
    fn run(&mut self, ctx: &Context<Self>, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Send { session, request } => {
                    let client = self.client.clone();
                    ctx.link().send_future(async move {
                        let outcome = client.send(&request).await;
                        ContactModalMsg::Sent(session, outcome)
                    });
                }
                Effect::Schedule(task) => {
                    let link = ctx.link().clone();
                    let timeout = Timeout::new(task.delay_ms(), move || {
                        link.send_message(ContactModalMsg::Timer(task));
                    });
                    self.timers.set(task.kind, timeout);
                }
                Effect::CloseModal => {
                    self.timers.clear();
                    ctx.props().on_close.emit(());
                }
            }
        }
    }

    fn view_form(&self, ctx: &Context<Self>) -> Html {
        let form = self.workflow.form();
        let errors = self.workflow.errors();
        let submitting = self.workflow.lifecycle() == Lifecycle::Submitting;

        let oninput = ctx.link().batch_callback(|e: InputEvent| {
            let target = e.target()?;
            let (name, value) = if let Some(input) = target.dyn_ref::<HtmlInputElement>() {
                (input.name(), input.value())
            } else if let Some(area) = target.dyn_ref::<HtmlTextAreaElement>() {
                (area.name(), area.value())
            } else {
                return None;
            };
            match Field::from_name(&name) {
                Some(field) => Some(ContactModalMsg::Input(field, value)),
                None => {
                    debug!("Ignoring input from unknown field {:?}", name);
                    None
                }
            }
        });

        let onsubmit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            ContactModalMsg::Submit
        });

        let field_class = |key: ErrorKey| classes!("contact-input", errors.contains(key).then(|| "invalid"));
        let field_error = |key: ErrorKey| match errors.get(key) {
            Some(message) => html! { <p class="field-error">{message}</p> },
            None => html! {},
        };

        html! {
            <>
                <p class="contact-lead">
                    {"Ready to grow your brand online? Fill out the form below and we'll get back to you within 24 hours."}
                </p>
                <form class="contact-form" onsubmit={onsubmit}>
                    <div>
                        <label for="title">{"Title"}</label>
                        <input
                            type="text"
                            id="title"
                            name="title"
                            class="contact-input"
                            value={form.title.clone()}
                            oninput={oninput.clone()}
                            placeholder="e.g. Founder, Marketing Lead"
                        />
                    </div>
                    <div>
                        <label for="name">{"Full Name *"}</label>
                        <input
                            type="text"
                            id="name"
                            name="name"
                            class={field_class(ErrorKey::Name)}
                            value={form.name.clone()}
                            oninput={oninput.clone()}
                            placeholder="Enter your full name"
                        />
                        { field_error(ErrorKey::Name) }
                    </div>
                    <div>
                        <label for="email">{"Email Address *"}</label>
                        <input
                            type="email"
                            id="email"
                            name="email"
                            class={field_class(ErrorKey::Email)}
                            value={form.email.clone()}
                            oninput={oninput.clone()}
                            placeholder="Enter your email address"
                        />
                        { field_error(ErrorKey::Email) }
                    </div>
                    <div>
                        <label for="message">{"Project Details *"}</label>
                        <textarea
                            id="message"
                            name="message"
                            rows="4"
                            class={field_class(ErrorKey::Message)}
                            value={form.message.clone()}
                            oninput={oninput}
                            placeholder="Tell us about your project, goals, and how we can help you..."
                        />
                        { field_error(ErrorKey::Message) }
                    </div>
                    if let Some(message) = errors.get(ErrorKey::Submit) {
                        <div class="submit-error">{message}</div>
                    }
                    <button type="submit" class="contact-submit" disabled={submitting}>
                        if submitting {
                            <span class="spinner"></span>
                            {"Sending Message..."}
                        } else {
                            {"Send Message"}
                        }
                    </button>
                </form>
            </>
        }
    }

    fn view_confirmation(&self) -> Html {
        html! {
            <div class="contact-sent">
                <div class="contact-sent-icon">{"✅"}</div>
                <h3>{"Message Sent!"}</h3>
                <p>{"Thank you for reaching out! We'll get back to you within 24 hours."}</p>
                <div class="contact-next">
                    <strong>{"What's next?"}</strong>
                    {" Our team will review your project details and send you a personalized consultation proposal."}
                </div>
            </div>
        }
    }
}

const MODAL_CSS: &str = r#"
.contact-overlay {
    position: fixed;
    inset: 0;
    z-index: 50;
    display: flex;
    align-items: center;
    justify-content: center;
    padding: 1rem;
    background: rgba(17, 24, 39, 0.2);
    backdrop-filter: blur(4px);
    animation: modalIn 0.4s ease-out;
}
@keyframes modalIn {
    from { opacity: 0; transform: translateY(30px) scale(0.8); }
    to { opacity: 1; transform: translateY(0) scale(1); }
}
.contact-card {
    background: #fff;
    border-radius: 1rem;
    box-shadow: 0 20px 40px rgba(0, 0, 0, 0.15);
    width: 100%;
    max-width: 28rem;
    max-height: 90vh;
    overflow-y: auto;
}
.contact-header {
    display: flex;
    align-items: center;
    justify-content: space-between;
    padding: 1.5rem;
    border-bottom: 1px solid #f3f4f6;
}
.contact-header h2 {
    font-size: 1.5rem;
    margin: 0;
}
.contact-close {
    background: none;
    border: none;
    font-size: 1.25rem;
    color: #9ca3af;
    cursor: pointer;
}
.contact-close:hover {
    color: #4b5563;
}
.contact-body {
    padding: 1.5rem;
}
.contact-lead {
    color: #4b5563;
    margin: 0 0 1.5rem;
}
.contact-form {
    display: flex;
    flex-direction: column;
    gap: 1.5rem;
}
.contact-form label {
    display: block;
    font-size: 0.875rem;
    font-weight: 600;
    color: #374151;
    margin-bottom: 0.5rem;
}
.contact-input {
    width: 100%;
    box-sizing: border-box;
    padding: 0.75rem 1rem;
    border: 1px solid #d1d5db;
    border-radius: 0.75rem;
    font: inherit;
    resize: none;
}
.contact-input:focus {
    outline: 2px solid #dc2626;
    border-color: transparent;
}
.contact-input.invalid {
    border-color: #ef4444;
    background: #fef2f2;
}
.field-error {
    color: #ef4444;
    font-size: 0.875rem;
    margin: 0.25rem 0 0;
}
.submit-error {
    color: #b91c1c;
    background: #fef2f2;
    border: 1px solid #fecaca;
    border-radius: 0.75rem;
    padding: 0.75rem 1rem;
    font-size: 0.875rem;
}
.contact-submit {
    display: flex;
    align-items: center;
    justify-content: center;
    gap: 0.5rem;
    padding: 0.75rem 1.5rem;
    border: none;
    border-radius: 0.75rem;
    color: #fff;
    font-weight: 600;
    cursor: pointer;
    background: linear-gradient(to right, #dc2626, #fb923c);
    transition: transform 0.3s, box-shadow 0.3s;
}
.contact-submit:hover:not(:disabled) {
    transform: scale(1.02);
    box-shadow: 0 10px 20px rgba(220, 38, 38, 0.25);
}
.contact-submit:disabled {
    background: #9ca3af;
    cursor: not-allowed;
}
.spinner {
    width: 1.25rem;
    height: 1.25rem;
    border: 2px solid #fff;
    border-top-color: transparent;
    border-radius: 50%;
    animation: spin 0.8s linear infinite;
}
@keyframes spin {
    to { transform: rotate(360deg); }
}
.contact-sent {
    text-align: center;
    padding: 2rem 0;
}
.contact-sent-icon {
    font-size: 3.75rem;
    margin-bottom: 1rem;
}
.contact-sent h3 {
    font-size: 1.5rem;
    color: #111827;
    margin: 0 0 0.5rem;
}
.contact-sent p {
    color: #4b5563;
}
.contact-next {
    background: #f0fdf4;
    border: 1px solid #bbf7d0;
    border-radius: 0.75rem;
    padding: 1rem;
    color: #15803d;
    font-size: 0.875rem;
}
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Counts drops, standing in for a cancellable browser timeout.
    struct Handle(Rc<Cell<u32>>);

    impl Drop for Handle {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    fn filled_workflow() -> ContactWorkflow {
        let mut workflow = ContactWorkflow::new(EmailJsConfig::default());
        workflow.open();
        workflow.update_field(Field::Name, "Jo".to_string());
        workflow.update_field(Field::Email, "bad".to_string());
        let _ = workflow.submit();
        workflow
    }

    #[test]
    fn one_handle_per_kind_across_retries() {
        let dropped = Rc::new(Cell::new(0));
        let mut timers = PendingTimers::default();

        for _ in 0..4 {
            timers.set(TimerKind::ErrorReset, Handle(dropped.clone()));
        }
        assert_eq!(timers.len(), 1);
        assert_eq!(dropped.get(), 3);

        timers.set(TimerKind::SuccessReset, Handle(dropped.clone()));
        assert_eq!(timers.len(), 2);
    }

    #[test]
    fn fired_handles_are_released() {
        let dropped = Rc::new(Cell::new(0));
        let mut timers = PendingTimers::default();
        timers.set(TimerKind::ErrorReset, Handle(dropped.clone()));

        timers.finish(TimerKind::ErrorReset);
        assert_eq!(timers.len(), 0);
        assert_eq!(dropped.get(), 1);
    }

    #[test]
    fn reopening_resets_workflow_and_cancels_timers() {
        let dropped = Rc::new(Cell::new(0));
        let mut timers = PendingTimers::default();
        timers.set(TimerKind::ErrorReset, Handle(dropped.clone()));
        let mut workflow = filled_workflow();
        let before = workflow.session();

        assert!(reset_on_open(false, true, &mut workflow, &mut timers));

        assert!(timers.is_empty());
        assert_eq!(dropped.get(), 1);
        assert!(workflow.session() > before);
        assert_eq!(workflow.form().name, "");
        assert!(workflow.errors().is_empty());
        assert_eq!(workflow.lifecycle(), Lifecycle::Idle);
    }

    #[test]
    fn staying_open_or_closing_keeps_state() {
        let dropped = Rc::new(Cell::new(0));
        let mut timers = PendingTimers::default();
        timers.set(TimerKind::ErrorReset, Handle(dropped.clone()));
        let mut workflow = filled_workflow();
        let snapshot = workflow.clone();

        assert!(!reset_on_open(true, true, &mut workflow, &mut timers));
        assert!(!reset_on_open(true, false, &mut workflow, &mut timers));
        assert!(!reset_on_open(false, false, &mut workflow, &mut timers));

        assert_eq!(workflow, snapshot);
        assert_eq!(timers.len(), 1);
        assert_eq!(dropped.get(), 0);
    }
}
