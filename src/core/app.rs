use crate::core::action_bindings::ActionBindings;
use crate::core::event::Action;
use crate::core::form::FormRecord;
use crate::core::reducer::{Effect, Reducer};
use crate::core::state::AppState;
use crate::terminal::{KeyEvent, Terminal};
use crate::ui::renderer::Renderer;
use crate::ui::theme::Theme;
use std::io;

pub struct App {
    pub state: AppState,
    pub renderer: Renderer,
    action_bindings: ActionBindings,
    theme: Theme,
    submission: Option<FormRecord>,
}

impl App {
    pub fn new() -> Self {
        Self {
            state: AppState::new(),
            renderer: Renderer::new(),
            action_bindings: ActionBindings::new(),
            theme: Theme::default_theme(),
            submission: None,
        }
    }

    pub fn handle_key(&mut self, key_event: KeyEvent) {
        let action = self
            .action_bindings
            .handle_key(&key_event)
            .unwrap_or(Action::InputKey(key_event));
        let effects = Reducer::reduce(&mut self.state, action);
        self.apply_effects(effects);
    }

    pub fn render(&mut self, terminal: &mut Terminal) -> io::Result<()> {
        self.renderer.render(&self.state, &self.theme, terminal)
    }

    pub fn should_exit(&self) -> bool {
        self.state.should_exit
    }

    /// The record emitted by a submit, if one happened this session.
    pub fn take_submission(&mut self) -> Option<FormRecord> {
        self.submission.take()
    }

    fn apply_effects(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Submitted(record) => self.submission = Some(record),
                Effect::FieldChanged { .. } => {}
            }
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
