use crate::core::form::FormRecord;
use crate::core::wizard::Wizard;
use crate::input::TextInput;

pub struct AppState {
    pub wizard: Wizard,
    pub form: FormRecord,
    pub editor: TextInput,
    pub should_exit: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            wizard: Wizard::new(),
            form: FormRecord::new(),
            editor: TextInput::new(),
            should_exit: false,
        }
    }

    /// Point the line editor at the field the current step collects.
    pub fn reset_editor_for_current_step(&mut self) {
        let field = self.wizard.current().field();
        self.editor.set_value(self.form.get(field).to_string());
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
