use std::rc::Rc;

use yew::functional::Reducible;

use crate::config::BACK_TO_TOP_THRESHOLD_PX;

/// UI-only state owned by the landing page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ShellState {
    pub menu_open: bool,
    pub contact_open: bool,
    pub back_to_top_visible: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ShellAction {
    ToggleMenu,
    CloseMenu,
    OpenContact,
    CloseContact,
    Scrolled(f64),
}

pub fn back_to_top_visible(scroll_y: f64) -> bool {
    scroll_y > BACK_TO_TOP_THRESHOLD_PX
}

impl ShellState {
    pub fn apply(self, action: ShellAction) -> Self {
        match action {
            ShellAction::ToggleMenu => Self {
                menu_open: !self.menu_open,
                ..self
            },
            ShellAction::CloseMenu => Self {
                menu_open: false,
                ..self
            },
            // The menu would otherwise stay open behind the modal on mobile.
            ShellAction::OpenContact => Self {
                menu_open: false,
                contact_open: true,
                ..self
            },
            ShellAction::CloseContact => Self {
                contact_open: false,
                ..self
            },
            ShellAction::Scrolled(y) => Self {
                back_to_top_visible: back_to_top_visible(y),
                ..self
            },
        }
    }
}

impl Reducible for ShellState {
    type Action = ShellAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(self.apply(action))
    }
}
