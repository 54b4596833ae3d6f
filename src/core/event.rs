use crate::terminal::KeyEvent;

#[derive(Debug, Clone)]
pub enum Action {
    Exit,
    NextStep,
    PrevStep,
    Submit,
    InputKey(KeyEvent),
}
