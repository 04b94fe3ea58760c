mod display;

use std::io::{stdout, BufWriter, Write};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal,
    ExecutableCommand,
};
use rand::thread_rng;

use flappy_game::compute::{init_state, press_action, tick};
use flappy_game::config::Config;
use flappy_game::entities::GameState;

const FRAME: Duration = Duration::from_millis(33); // ≈30 FPS

// ── Game loop ─────────────────────────────────────────────────────────────────

/// One logical tick per frame: drain pending input, measure the wall-clock
/// time since the previous frame, advance the simulation, draw.
///
/// The action key routes straight into `press_action`, which flaps while the
/// run is live and resets from the game-over screen; there is nothing else
/// to wire. Returns when the player quits.
fn game_loop<W: Write>(
    out: &mut W,
    state: &mut GameState,
    rx: &mpsc::Receiver<Event>,
) -> std::io::Result<()> {
    let mut rng = thread_rng();
    let mut last = Instant::now();

    loop {
        let frame_start = Instant::now();

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(Event::Key(KeyEvent { code, kind, modifiers, .. })) = rx.try_recv() {
            if kind != KeyEventKind::Press {
                continue;
            }
            match code {
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                    return Ok(());
                }
                KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                    return Ok(());
                }
                KeyCode::Char(' ') | KeyCode::Up | KeyCode::Enter => {
                    *state = press_action(state, &mut rng);
                }
                _ => {}
            }
        }

        // Elapsed wall-clock seconds since the previous frame, fed to the
        // simulation as-is (no clamping).
        let delta = last.elapsed().as_secs_f64();
        last = Instant::now();

        *state = tick(state, delta, &mut rng);

        display::render(out, state)?;

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            thread::sleep(FRAME - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> std::io::Result<()> {
    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || {
        loop {
            match event::read() {
                Ok(ev) => {
                    if tx.send(ev).is_err() {
                        break; // receiver dropped → program exiting
                    }
                }
                Err(_) => break,
            }
        }
    });

    let result = run(&mut out, &rx);

    // Always restore the terminal
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}

fn run<W: Write>(out: &mut W, rx: &mpsc::Receiver<Event>) -> std::io::Result<()> {
    let mut rng = thread_rng();
    let config = Config::default();
    let mut state = init_state(&config, &mut rng)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;
    game_loop(out, &mut state, rx)
}
