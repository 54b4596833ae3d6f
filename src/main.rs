use std::io;
use std::time::Duration;
use wizstep::app::App;
use wizstep::terminal::Terminal;
use wizstep::terminal_event::TerminalEvent;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
    }
}

fn run() -> io::Result<()> {
    let mut terminal = Terminal::new()?;
    terminal.enter_raw_mode()?;

    let mut app = App::new();
    let result = event_loop(&mut app, &mut terminal);

    let cleanup = app.renderer.finish(&mut terminal);
    terminal.exit_raw_mode()?;
    result.and(cleanup)?;

    if let Some(record) = app.take_submission() {
        println!("Form submitted:");
        println!("{}", serde_json::to_string_pretty(&record)?);
    }

    Ok(())
}

fn event_loop(app: &mut App, terminal: &mut Terminal) -> io::Result<()> {
    let mut render_requested = true;

    loop {
        if render_requested {
            app.render(terminal)?;
            render_requested = false;
        }

        if app.should_exit() {
            break;
        }

        if terminal.poll(Duration::from_millis(100))? {
            match terminal.read_event()? {
                TerminalEvent::Key(key_event) => {
                    app.handle_key(key_event);
                    render_requested = true;
                }
                TerminalEvent::Resize { .. } => {
                    render_requested = true;
                }
            }
        }
    }

    Ok(())
}
