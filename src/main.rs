mod display;

use std::io::{stdout, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Context;
use clap::Parser;
use crossterm::{
    cursor,
    event::{
        self, DisableFocusChange, EnableFocusChange, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
        PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand, QueueableCommand,
};
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use canvas_shooter::canvas::Canvas;
use canvas_shooter::config::Config;
use canvas_shooter::game_loop::GameLoop;
use canvas_shooter::input::{InputTracker, HOLD_WINDOW};

use display::Viewport;

/// Side-scrolling arcade shooter for the terminal.
#[derive(Parser)]
#[command(name = "canvas_shooter")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Config file (TOML); ./canvas_shooter.toml is used when present
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Fixed RNG seed, overrides the config file
    #[arg(long)]
    seed: Option<u64>,

    /// Write log output to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

/// Logs go to `log_file` when given.  Without one they would land on the
/// game screen, so stderr logging stays off unless RUST_LOG asks for it.
fn init_logging(log_file: Option<&Path>) -> anyhow::Result<()> {
    let default_filter = if log_file.is_some() { "info" } else { "off" };
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter));
    if let Some(path) = log_file {
        let file = std::fs::File::create(path)
            .with_context(|| format!("creating log file {}", path.display()))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }
    builder.init();
    Ok(())
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Runs until the player quits.  Input arrives from the reader thread and is
/// folded into `tracker` before each tick; one-shot actions (quit, restart)
/// are handled straight from the press events.
fn run<W: Write>(
    out: &mut W,
    rx: &mpsc::Receiver<Event>,
    config: Config,
    keyboard_enhanced: bool,
) -> anyhow::Result<()> {
    let frame = Duration::from_millis(config.frame_ms.max(1));
    let rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut game = GameLoop::new(config, rng);
    let mut tracker = if keyboard_enhanced {
        InputTracker::new()
    } else {
        InputTracker::with_hold_window(HOLD_WINDOW)
    };
    let mut canvas = Canvas::new();
    let mut view = Viewport::current()?;
    let clock = Instant::now();

    game.start_loading();
    let mut last_phase = game.phase();

    loop {
        let frame_start = Instant::now();
        let now_ms = clock.elapsed().as_millis() as u64;
        tracker.begin_frame();

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(event) = rx.try_recv() {
            tracker.handle_event(&event);
            match event {
                Event::Key(KeyEvent {
                    code,
                    kind: KeyEventKind::Press,
                    modifiers,
                    ..
                }) => match code {
                    KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return Ok(()),
                    KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                        return Ok(())
                    }
                    KeyCode::Char('r') | KeyCode::Char('R') => game.restart(now_ms),
                    _ => {}
                },
                Event::Resize(cols, rows) => {
                    view = Viewport { cols, rows };
                    out.queue(terminal::Clear(terminal::ClearType::All))?;
                }
                _ => {}
            }
        }

        let phase = game
            .tick(now_ms, &tracker.snapshot(), &mut canvas)
            .context("asset loading failed")?;
        if phase != last_phase {
            out.queue(terminal::Clear(terminal::ClearType::All))?;
            last_phase = phase;
        }
        display::render(out, &canvas, phase, game.resources().pending(), view)?;

        let elapsed = frame_start.elapsed();
        if elapsed < frame {
            thread::sleep(frame - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_deref())?;

    let cwd = std::env::current_dir()?;
    let mut config =
        Config::discover(cli.config.as_deref(), &cwd).context("loading configuration")?;
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }
    info!("starting with {config:?}");

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;
    out.execute(EnableFocusChange)?;

    // Release events let held keys end immediately; terminals without the
    // kitty protocol fall back to the tracker's hold window.
    let keyboard_enhanced = terminal::supports_keyboard_enhancement().unwrap_or(false)
        && out
            .execute(PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
            ))
            .is_ok();
    info!("keyboard enhancement: {keyboard_enhanced}");

    // Dedicated thread for blocking event reads so the game loop never
    // waits on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // receiver dropped → program exiting
                }
            }
            Err(_) => break,
        }
    });

    let result = run(&mut out, &rx, config, keyboard_enhanced);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(DisableFocusChange);
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}
