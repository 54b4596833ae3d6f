use crate::core::form::{Field, FormRecord};
use crate::core::step::Step;
use crate::ui::span::{Span, SpanLine};
use crate::ui::theme::Theme;
use unicode_width::UnicodeWidthStr;

/// Cursor target in frame-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorPos {
    pub col: u16,
    pub row: u16,
}

#[derive(Debug, Clone, Default)]
pub struct StepFrame {
    pub lines: Vec<SpanLine>,
    pub cursor: Option<CursorPos>,
}

/// Render the view for the active step. Views are pure: the full record comes
/// in read-only, the output is span lines plus a cursor target.
pub fn step_view(step: Step, form: &FormRecord, cursor_offset: usize, theme: &Theme) -> StepFrame {
    match step {
        Step::FirstName => first_name_view(form, cursor_offset, theme),
        Step::LastName => last_name_view(form, cursor_offset, theme),
        Step::Email => email_view(form, cursor_offset, theme),
    }
}

fn first_name_view(form: &FormRecord, cursor_offset: usize, theme: &Theme) -> StepFrame {
    let mut frame = frame_with_field(Step::FirstName, form, cursor_offset, theme);
    frame.lines.push(vec![]);
    frame.lines.push(buttons_line(&["Next"], theme));
    frame.lines.push(hint_line("Enter: next", false, theme));
    frame
}

fn last_name_view(form: &FormRecord, cursor_offset: usize, theme: &Theme) -> StepFrame {
    let mut frame = frame_with_field(Step::LastName, form, cursor_offset, theme);
    frame.lines.push(vec![]);
    frame.lines.push(buttons_line(&["Back", "Next"], theme));
    frame.lines.push(hint_line("Enter: next", true, theme));
    frame
}

fn email_view(form: &FormRecord, cursor_offset: usize, theme: &Theme) -> StepFrame {
    let mut frame = frame_with_field(Step::Email, form, cursor_offset, theme);

    // Email is collected as free text; the placeholder is a hint, not a format check.
    if form.get(Field::Email).is_empty() {
        if let Some(field_line) = frame.lines.last_mut() {
            field_line.push(Span::styled("name@example.com", theme.placeholder));
        }
    }

    frame.lines.push(vec![]);
    frame.lines.push(buttons_line(&["Back", "Submit"], theme));
    frame.lines.push(hint_line("Enter: submit", true, theme));
    frame
}

/// Title and field rows shared by all three views. The cursor lands on the
/// field row, after the label and the edited portion of the value.
fn frame_with_field(
    step: Step,
    form: &FormRecord,
    cursor_offset: usize,
    theme: &Theme,
) -> StepFrame {
    let field = step.field();
    let label = format!("{}: ", field.label());
    let value = form.get(field);

    let title = format!("Step {} of {}", step.number(), Step::total());
    let cursor_col = label.width() + cursor_offset;

    StepFrame {
        lines: vec![
            vec![Span::styled(title, theme.title)],
            vec![],
            vec![
                Span::styled(label, theme.label),
                Span::styled(value, theme.value),
            ],
        ],
        cursor: Some(CursorPos {
            col: cursor_col as u16,
            row: 2,
        }),
    }
}

fn buttons_line(buttons: &[&str], theme: &Theme) -> SpanLine {
    let mut line = SpanLine::new();
    for (i, button) in buttons.iter().enumerate() {
        if i > 0 {
            line.push(Span::new("  "));
        }
        line.push(Span::styled(format!("[ {} ]", button), theme.button));
    }
    line
}

fn hint_line(enter_hint: &str, has_back: bool, theme: &Theme) -> SpanLine {
    let mut hint = format!("{}, Tab: next", enter_hint);
    if has_back {
        hint.push_str(", Shift+Tab: back");
    }
    hint.push_str(", Esc: quit");
    vec![Span::styled(hint, theme.hint)]
}

#[cfg(test)]
mod tests {
    use super::{StepFrame, step_view};
    use crate::core::form::{Field, FormRecord};
    use crate::core::step::Step;
    use crate::ui::theme::Theme;

    fn text_of(frame: &StepFrame) -> Vec<String> {
        frame
            .lines
            .iter()
            .map(|line| line.iter().map(|span| span.text.as_str()).collect())
            .collect()
    }

    #[test]
    fn first_step_shows_only_next() {
        let form = FormRecord::new();
        let frame = step_view(Step::FirstName, &form, 0, &Theme::default_theme());
        let text = text_of(&frame).join("\n");

        assert!(text.contains("Step 1 of 3"));
        assert!(text.contains("First Name: "));
        assert!(text.contains("[ Next ]"));
        assert!(!text.contains("[ Back ]"));
    }

    #[test]
    fn middle_step_shows_back_and_next() {
        let mut form = FormRecord::new();
        form.set(Field::LastName, "Doe".to_string());
        let frame = step_view(Step::LastName, &form, 3, &Theme::default_theme());
        let text = text_of(&frame).join("\n");

        assert!(text.contains("Step 2 of 3"));
        assert!(text.contains("Last Name: Doe"));
        assert!(text.contains("[ Back ]"));
        assert!(text.contains("[ Next ]"));
    }

    #[test]
    fn last_step_shows_back_and_submit() {
        let form = FormRecord::new();
        let frame = step_view(Step::Email, &form, 0, &Theme::default_theme());
        let text = text_of(&frame).join("\n");

        assert!(text.contains("Step 3 of 3"));
        assert!(text.contains("[ Back ]"));
        assert!(text.contains("[ Submit ]"));
        assert!(!text.contains("[ Next ]"));
    }

    #[test]
    fn email_placeholder_disappears_once_typed() {
        let mut form = FormRecord::new();
        let theme = Theme::default_theme();

        let empty = text_of(&step_view(Step::Email, &form, 0, &theme)).join("\n");
        assert!(empty.contains("name@example.com"));

        form.set(Field::Email, "a".to_string());
        let typed = text_of(&step_view(Step::Email, &form, 1, &theme)).join("\n");
        assert!(!typed.contains("name@example.com"));
    }

    #[test]
    fn cursor_sits_after_the_label_and_edited_text() {
        let mut form = FormRecord::new();
        form.set(Field::FirstName, "Al".to_string());
        let frame = step_view(Step::FirstName, &form, 2, &Theme::default_theme());

        let cursor = frame.cursor.expect("field views place a cursor");
        assert_eq!(cursor.row, 2);
        // "First Name: " is 12 columns wide
        assert_eq!(cursor.col, 14);
    }
}
