use crate::ui::style::{Color, Style};

#[derive(Debug, Clone)]
pub struct Theme {
    pub title: Style,
    pub label: Style,
    pub value: Style,
    pub placeholder: Style,
    pub button: Style,
    pub hint: Style,
}

impl Theme {
    pub fn default_theme() -> Self {
        Self {
            title: Style::new().color(Color::Cyan).bold(),
            label: Style::new().bold(),
            value: Style::new(),
            placeholder: Style::new().color(Color::DarkGrey).dim(),
            button: Style::new().color(Color::Green),
            hint: Style::new().color(Color::DarkGrey),
        }
    }
}
