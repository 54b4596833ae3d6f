pub mod core;
pub mod input;
pub mod terminal;
pub mod ui;

pub use crate::core::action_bindings;
pub use crate::core::app;
pub use crate::core::event;
pub use crate::core::form;
pub use crate::core::reducer;
pub use crate::core::state;
pub use crate::core::step;
pub use crate::core::wizard;

pub use crate::input::text_input;

pub use crate::terminal::input_event;
pub use crate::terminal::terminal_event;

pub use crate::ui::renderer;
pub use crate::ui::span;
pub use crate::ui::steps;
pub use crate::ui::style;
pub use crate::ui::theme;
