use crate::core::event::Action;
use crate::core::form::{Field, FormRecord};
use crate::core::state::AppState;
use crate::input::KeyResult;
use crate::terminal::KeyEvent;

/// Outputs of a reduction, consumed by the host loop.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    FieldChanged { field: Field, value: String },
    Submitted(FormRecord),
}

pub struct Reducer;

impl Reducer {
    pub fn reduce(state: &mut AppState, action: Action) -> Vec<Effect> {
        match action {
            Action::Exit => {
                state.should_exit = true;
                vec![]
            }
            Action::NextStep => {
                Self::advance(state);
                vec![]
            }
            Action::PrevStep => {
                Self::retreat(state);
                vec![]
            }
            Action::Submit => Self::handle_submit(state),
            Action::InputKey(key_event) => Self::handle_input_key(state, key_event),
        }
    }

    fn advance(state: &mut AppState) {
        if state.wizard.has_next() {
            state.wizard.advance();
            state.reset_editor_for_current_step();
        }
    }

    fn retreat(state: &mut AppState) {
        if state.wizard.has_prev() {
            state.wizard.retreat();
            state.reset_editor_for_current_step();
        }
    }

    /// Enter advances until the last step, where it becomes the terminal
    /// submit: the record is emitted as-is and the wizard stays put.
    fn handle_submit(state: &mut AppState) -> Vec<Effect> {
        if state.wizard.has_next() {
            Self::advance(state);
            return vec![];
        }

        state.should_exit = true;
        vec![Effect::Submitted(state.form.clone())]
    }

    fn handle_input_key(state: &mut AppState, key_event: KeyEvent) -> Vec<Effect> {
        let before = state.editor.value().to_string();
        let result = state.editor.handle_key(key_event.code, key_event.modifiers);
        let after = state.editor.value().to_string();

        let mut effects = Vec::new();

        if before != after {
            let field = state.wizard.current().field();
            state.form.set(field, after.clone());
            effects.push(Effect::FieldChanged {
                field,
                value: after,
            });
        }

        if matches!(result, KeyResult::Submit) {
            effects.extend(Self::handle_submit(state));
        }

        effects
    }
}
