/// Rendering layer: all terminal I/O lives here.
///
/// The game draws into a 512×480 `Canvas`; this module shrinks that
/// framebuffer onto the terminal using upper half-block cells, so each cell
/// shows two 8×8 pixel blocks (foreground = top, background = bottom).  No
/// game logic is performed here.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal, QueueableCommand,
};
use image::RgbaImage;

use canvas_shooter::canvas::Canvas;
use canvas_shooter::game_loop::Phase;

const BLOCK: u32 = 8;
const HALF_BLOCK: char = '▀';

/// Rows above the playfield.
const HUD_ROWS: u16 = 1;

// ── Colour palette ────────────────────────────────────────────────────────────

const C_HUD_SCORE: Color = Color::Yellow;
const C_HUD_PHASE: Color = Color::DarkGrey;
const C_HINT: Color = Color::DarkGrey;
const C_GAME_OVER: Color = Color::Red;
const C_LOADING: Color = Color::Cyan;

/// Terminal area available for drawing.
#[derive(Clone, Copy, Debug)]
pub struct Viewport {
    pub cols: u16,
    pub rows: u16,
}

impl Viewport {
    pub fn current() -> std::io::Result<Viewport> {
        let (cols, rows) = terminal::size()?;
        Ok(Viewport { cols, rows })
    }

    fn playfield_cols(&self, canvas: &Canvas) -> u16 {
        ((canvas.width() / BLOCK) as u16).min(self.cols)
    }

    fn playfield_rows(&self, canvas: &Canvas) -> u16 {
        ((canvas.height() / (BLOCK * 2)) as u16).min(self.rows.saturating_sub(HUD_ROWS + 1))
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(
    out: &mut W,
    canvas: &Canvas,
    phase: Phase,
    pending_assets: usize,
    view: Viewport,
) -> std::io::Result<()> {
    match phase {
        Phase::Uninitialized | Phase::Loading | Phase::Ready => {
            draw_loading(out, view, pending_assets)?;
        }
        Phase::Running | Phase::GameOver => {
            draw_hud(out, canvas, phase, view)?;
            draw_playfield(out, canvas, view)?;
            draw_controls_hint(out, canvas, view)?;
            if phase == Phase::GameOver {
                draw_game_over(out, canvas, view)?;
            }
        }
    }

    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, view.rows.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── Playfield ─────────────────────────────────────────────────────────────────

/// Average colour of the `BLOCK`×`BLOCK` square at block coordinates.
fn block_color(pixels: &RgbaImage, bx: u32, by: u32) -> Color {
    let (mut r, mut g, mut b) = (0u32, 0u32, 0u32);
    let x0 = bx * BLOCK;
    let y0 = by * BLOCK;
    for y in y0..(y0 + BLOCK).min(pixels.height()) {
        for x in x0..(x0 + BLOCK).min(pixels.width()) {
            let px = pixels.get_pixel(x, y);
            r += px[0] as u32;
            g += px[1] as u32;
            b += px[2] as u32;
        }
    }
    let n = BLOCK * BLOCK;
    Color::Rgb {
        r: (r / n) as u8,
        g: (g / n) as u8,
        b: (b / n) as u8,
    }
}

fn draw_playfield<W: Write>(out: &mut W, canvas: &Canvas, view: Viewport) -> std::io::Result<()> {
    let pixels = canvas.pixels();
    let cols = view.playfield_cols(canvas);
    let rows = view.playfield_rows(canvas);

    for row in 0..rows {
        out.queue(cursor::MoveTo(0, HUD_ROWS + row))?;
        // skip escape codes when neighbouring cells share colours
        let mut last: Option<(Color, Color)> = None;
        for col in 0..cols {
            let top = block_color(pixels, col as u32, row as u32 * 2);
            let bottom = block_color(pixels, col as u32, row as u32 * 2 + 1);
            if last != Some((top, bottom)) {
                out.queue(style::SetForegroundColor(top))?;
                out.queue(style::SetBackgroundColor(bottom))?;
                last = Some((top, bottom));
            }
            out.queue(Print(HALF_BLOCK))?;
        }
    }
    out.queue(style::ResetColor)?;
    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(
    out: &mut W,
    canvas: &Canvas,
    phase: Phase,
    view: Viewport,
) -> std::io::Result<()> {
    let width = view.playfield_cols(canvas);
    out.queue(cursor::MoveTo(0, 0))?;
    out.queue(terminal::Clear(terminal::ClearType::CurrentLine))?;
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
    out.queue(Print(format!("Score: {}", canvas.score_text())))?;

    let tag = match phase {
        Phase::GameOver => "[ GAME OVER ]",
        _ => "[ PLAYING ]",
    };
    let tx = width.saturating_sub(tag.len() as u16 + 1);
    out.queue(cursor::MoveTo(tx, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_PHASE))?;
    out.queue(Print(tag))?;
    Ok(())
}

// ── Controls hint (below the playfield) ───────────────────────────────────────

fn draw_controls_hint<W: Write>(
    out: &mut W,
    canvas: &Canvas,
    view: Viewport,
) -> std::io::Result<()> {
    let row = HUD_ROWS + view.playfield_rows(canvas);
    out.queue(cursor::MoveTo(1, row))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("←↑→↓ / WASD : Move   SPACE : Shoot   R : Restart   Q : Quit"))?;
    Ok(())
}

// ── Overlays ──────────────────────────────────────────────────────────────────

fn draw_centered<W: Write>(
    out: &mut W,
    lines: &[(String, Color)],
    cols: u16,
    rows: u16,
) -> std::io::Result<()> {
    let cx = cols / 2;
    let start_row = (rows / 2).saturating_sub(lines.len() as u16 / 2);
    for (i, (msg, color)) in lines.iter().enumerate() {
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, start_row + i as u16))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(style::SetBackgroundColor(Color::Black))?;
        out.queue(Print(msg))?;
    }
    Ok(())
}

fn draw_game_over<W: Write>(out: &mut W, canvas: &Canvas, view: Viewport) -> std::io::Result<()> {
    let lines = [
        ("╔════════════════════╗".to_string(), C_GAME_OVER),
        ("║    GAME  OVER      ║".to_string(), C_GAME_OVER),
        ("╚════════════════════╝".to_string(), C_GAME_OVER),
        (format!("Final Score: {:>6}", canvas.score_text()), C_HUD_SCORE),
        ("R - Play Again  Q - Quit".to_string(), Color::White),
    ];
    let rows = HUD_ROWS * 2 + view.playfield_rows(canvas);
    draw_centered(out, &lines, view.playfield_cols(canvas), rows)
}

fn draw_loading<W: Write>(out: &mut W, view: Viewport, pending: usize) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    let lines = [(format!("Loading assets… ({pending} pending)"), C_LOADING)];
    draw_centered(out, &lines, view.cols, view.rows)
}
