use log::warn;
use web_sys::{ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct BackToTopProps {
    pub visible: bool,
}

pub fn scroll_to_top() {
    let Some(window) = web_sys::window() else {
        warn!("No window to scroll");
        return;
    };
    let options = ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

#[function_component(BackToTop)]
pub fn back_to_top(props: &BackToTopProps) -> Html {
    let onclick = Callback::from(|_: MouseEvent| scroll_to_top());

    html! {
        <>
            <style>
                {r#"
                    .back-to-top {
                        position: fixed;
                        bottom: 2rem;
                        right: 2rem;
                        z-index: 40;
                        width: 3rem;
                        height: 3rem;
                        border: none;
                        border-radius: 50%;
                        color: #fff;
                        font-size: 1.25rem;
                        cursor: pointer;
                        background: linear-gradient(to right, #dc2626, #fb923c);
                        box-shadow: 0 10px 20px rgba(0, 0, 0, 0.15);
                        transition: all 0.3s ease;
                        opacity: 0;
                        transform: translateY(4rem) scale(0.5);
                        pointer-events: none;
                    }
                    .back-to-top.visible {
                        opacity: 1;
                        transform: translateY(0) scale(1);
                        pointer-events: auto;
                    }
                    .back-to-top.visible:hover {
                        box-shadow: 0 14px 28px rgba(220, 38, 38, 0.35);
                    }
                "#}
            </style>
            <button
                class={classes!("back-to-top", props.visible.then(|| "visible"))}
                onclick={onclick}
                aria-label="Back to top"
            >
                {"▲"}
            </button>
        </>
    }
}
