mod display;

use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::sync::mpsc;
use std::thread;
use std::time::Instant;

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal, ExecutableCommand,
};
use rand::thread_rng;

use gorillas::compute::{initialize, render_state, submit_throw, tick};
use gorillas::entities::{MatchState, TickOutcome};
use gorillas::GameConfig;

use display::InputFields;

// ── Logging ───────────────────────────────────────────────────────────────────

/// The terminal is in raw mode on the alternate screen, so log lines go to a
/// file instead of stderr.  Filter with `RUST_LOG` as usual.
fn init_logging() {
    let path = std::env::temp_dir().join("gorillas.log");
    // Without a file there is no logger and the log macros are no-ops.
    if let Ok(file) = File::create(&path) {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
            .target(env_logger::Target::Pipe(Box::new(file)))
            .init();
        log::info!("logging to {}", path.display());
    }
}

// ── Game loop ─────────────────────────────────────────────────────────────────

enum LoopExit {
    Quit,
    Restart,
}

/// Runs one match until the player quits or asks for a rematch.
///
/// Key presses edit the two input fields; ENTER submits them.  The match is
/// advanced by exactly one `tick` per frame regardless of input.
fn game_loop<W: Write>(
    out: &mut W,
    state: &mut MatchState,
    rx: &mpsc::Receiver<Event>,
) -> std::io::Result<LoopExit> {
    let mut rng = thread_rng();
    let mut fields = InputFields::new();
    let frame_len = state.config.tick_interval;

    loop {
        let frame_start = Instant::now();

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(ev) = rx.try_recv() {
            let Event::Key(KeyEvent { code, kind, modifiers, .. }) = ev else {
                continue;
            };
            if kind != KeyEventKind::Press {
                continue;
            }
            match code {
                KeyCode::Esc => return Ok(LoopExit::Quit),
                KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                    return Ok(LoopExit::Quit);
                }
                KeyCode::Char('r') | KeyCode::Char('R') if !state.is_running() => {
                    return Ok(LoopExit::Restart);
                }
                KeyCode::Tab | KeyCode::BackTab => fields.toggle_focus(),
                KeyCode::Backspace => {
                    fields.focused_mut().pop();
                }
                KeyCode::Enter => match submit_throw(state, &fields.angle, &fields.speed) {
                    Ok(next) => {
                        *state = next;
                        fields.message = None;
                    }
                    Err(err) => fields.message = Some(err.to_string()),
                },
                KeyCode::Char(ch) if !ch.is_control() => fields.focused_mut().push(ch),
                _ => {}
            }
        }

        let (next, outcome) = tick(state, &mut rng);
        *state = next;
        if let TickOutcome::Hit { .. } | TickOutcome::Miss = outcome {
            fields.message = None;
        }

        display::render(out, &render_state(state), &state.config, &fields)?;

        let elapsed = frame_start.elapsed();
        if elapsed < frame_len {
            std::thread::sleep(frame_len - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    init_logging();

    // Fail before touching the terminal if the field is unusable.
    let config = GameConfig::default();
    config.validate()?;

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || {
        while let Ok(ev) = event::read() {
            if tx.send(ev).is_err() {
                break; // receiver dropped → program exiting
            }
        }
    });

    let result = run(&mut out, &rx, &config);

    // Always restore the terminal
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}

fn run<W: Write>(out: &mut W, rx: &mpsc::Receiver<Event>, config: &GameConfig) -> anyhow::Result<()> {
    let mut rng = thread_rng();
    loop {
        let mut state = initialize(config.clone(), &mut rng)?;
        match game_loop(out, &mut state, rx)? {
            LoopExit::Quit => break,
            LoopExit::Restart => log::info!("rematch requested"),
        }
    }
    Ok(())
}
