use std::rc::Rc;

use log::{error, warn};
use thiserror::Error;
use yew::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("{section} section failed to render: {reason}")]
    Section {
        section: &'static str,
        reason: String,
    },
}

pub type RenderResult = Result<Html, RenderError>;

/// A fallible view builder handed to [`ErrorBoundary`].
#[derive(Clone)]
pub struct RenderFn(Rc<dyn Fn() -> RenderResult>);

impl RenderFn {
    pub fn new(render: impl Fn() -> RenderResult + 'static) -> Self {
        Self(Rc::new(render))
    }

    pub fn call(&self) -> RenderResult {
        (self.0)()
    }
}

impl PartialEq for RenderFn {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum BoundaryState {
    #[default]
    Healthy,
    Failed(RenderError),
}

impl BoundaryState {
    /// Renders through the boundary. After the first failure the child is
    /// never built again and the fallback is returned until a reload.
    pub fn render(&mut self, render: impl FnOnce() -> RenderResult) -> Html {
        if let BoundaryState::Failed(err) = self {
            return fallback(&err.to_string());
        }

        match render() {
            Ok(html) => html,
            Err(err) => {
                error!("Render boundary caught: {}", err);
                let html = fallback(&err.to_string());
                *self = BoundaryState::Failed(err);
                html
            }
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, BoundaryState::Failed(_))
    }
}

pub fn fallback(details: &str) -> Html {
    html! {
        <div class="error-fallback" style="max-width: 640px; margin: 4rem auto; padding: 2rem; font-family: sans-serif;">
            <h1>{"Something went wrong."}</h1>
            <details style="white-space: pre-wrap;">
                <summary>{"Error details"}</summary>
                <pre>{details}</pre>
            </details>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ErrorBoundaryProps {
    pub render: RenderFn,
}

#[function_component(ErrorBoundary)]
pub fn error_boundary(props: &ErrorBoundaryProps) -> Html {
    let state = use_mut_ref(BoundaryState::default);
    let render = props.render.clone();
    let html = state.borrow_mut().render(move || render.call());
    html
}

/// Panics cannot be caught on wasm32, so the hook swaps the page for the
/// static fallback after reporting to the console.
pub fn install_panic_fallback() {
    std::panic::set_hook(Box::new(|info| {
        console_error_panic_hook::hook(info);
        show_static_fallback(&info.to_string());
    }));
}

fn show_static_fallback(details: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Some(body) = document.body() else {
        return;
    };

    body.set_inner_html("");
    let built = (|| -> Result<(), wasm_bindgen::JsValue> {
        let heading = document.create_element("h1")?;
        heading.set_text_content(Some("Something went wrong."));
        let details_el = document.create_element("details")?;
        let summary = document.create_element("summary")?;
        summary.set_text_content(Some("Error details"));
        let pre = document.create_element("pre")?;
        pre.set_text_content(Some(details));
        details_el.append_child(&summary)?;
        details_el.append_child(&pre)?;
        body.append_child(&heading)?;
        body.append_child(&details_el)?;
        Ok(())
    })();

    if built.is_err() {
        warn!("Could not draw panic fallback");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn broken() -> RenderResult {
        Err(RenderError::Section {
            section: "testimonials",
            reason: "rating 9 is out of range".to_string(),
        })
    }

    #[test]
    fn healthy_child_renders_through() {
        let mut state = BoundaryState::default();
        let html = state.render(|| Ok(html! { <p>{"hello"}</p> }));
        assert_eq!(html, html! { <p>{"hello"}</p> });
        assert!(!state.is_failed());
    }

    #[test]
    fn failure_renders_fallback_with_description() {
        let mut state = BoundaryState::default();
        let html = state.render(broken);
        assert_eq!(
            html,
            fallback("testimonials section failed to render: rating 9 is out of range")
        );
        assert!(state.is_failed());
    }

    #[test]
    fn tripped_boundary_does_not_heal() {
        let mut state = BoundaryState::default();
        state.render(broken);

        let calls = Cell::new(0);
        let html = state.render(|| {
            calls.set(calls.get() + 1);
            Ok(html! { <p>{"recovered"}</p> })
        });

        assert_eq!(calls.get(), 0);
        assert_ne!(html, html! { <p>{"recovered"}</p> });
        assert!(state.is_failed());
    }

    #[test]
    fn render_fns_compare_by_identity() {
        let a = RenderFn::new(|| Ok(Html::default()));
        let b = RenderFn::new(|| Ok(Html::default()));
        assert!(a == a.clone());
        assert!(a != b);
    }
}
