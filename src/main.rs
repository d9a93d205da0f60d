mod app;
mod config;
mod game;
mod input;
mod logging;
mod notify;
mod types;
mod ui;

use app::App;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use std::io;
use std::time::{Duration, Instant};

const FRAME_RATE: Duration = Duration::from_millis(33); // ~30 fps

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();
    let config = config::load_config();

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_app(&mut terminal, config).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        log::error!("{}", e);
        eprintln!("Error: {}", e);
    }

    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    config: types::GameConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let step_rate = config.tick_interval();
    let size = terminal.size()?;
    let mut app = App::new(
        config,
        ui::layout::playfield_area(Rect::new(0, 0, size.width, size.height)),
    );
    let mut last_frame = Instant::now();
    let mut last_step = Instant::now();

    loop {
        // Render
        terminal.draw(|f| ui::draw(f, &app))?;

        // Poll for events with timeout to hold both the frame and game rates
        let timeout = FRAME_RATE
            .checked_sub(last_frame.elapsed())
            .unwrap_or(Duration::ZERO)
            .min(
                step_rate
                    .checked_sub(last_step.elapsed())
                    .unwrap_or(Duration::ZERO),
            );

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    // Only handle key press events, ignore release/repeat
                    if key.kind == KeyEventKind::Press {
                        // Ctrl+C always quits
                        if key.modifiers.contains(KeyModifiers::CONTROL)
                            && key.code == KeyCode::Char('c')
                        {
                            app.should_quit = true;
                        } else {
                            input::handle_key(&mut app, key);
                        }
                    }
                }
                Event::Mouse(mouse) => input::handle_mouse(&mut app, mouse),
                Event::Resize(width, height) => {
                    app.resize_playfield(ui::layout::playfield_area(Rect::new(
                        0, 0, width, height,
                    )));
                }
                _ => {}
            }
        }

        // Game update
        if last_step.elapsed() >= step_rate {
            if !app.is_paused() {
                app.step();
            }
            last_step = Instant::now();
        }

        // Frame counter
        if last_frame.elapsed() >= FRAME_RATE {
            app.tick = app.tick.wrapping_add(1);
            last_frame = Instant::now();
        }

        if app.should_quit {
            log::info!("session ended with score {}", app.game.score());
            break;
        }
    }

    Ok(())
}
