/// Rendering layer — all terminal I/O lives here.
///
/// Each function receives a mutable writer and an immutable view of the
/// game state. No game logic is performed; this module only projects
/// field-space rectangles onto the terminal cell grid.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};
use flappy_game::entities::{GameState, GameStatus, Rect};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_SKY: Color = Color::Cyan;
const C_PIPE: Color = Color::DarkBlue;
const C_GROUND: Color = Color::DarkBlue;
const C_BIRD: Color = Color::White;
const C_SCORE: Color = Color::White;
const C_OVER: Color = Color::Red;
const C_HINT: Color = Color::DarkGrey;

// ── Field-to-cell projection ──────────────────────────────────────────────────

/// Maps the logical field onto the available terminal cells.
struct FieldView {
    cols: u16,
    rows: u16,
    sx: f64,
    sy: f64,
}

impl FieldView {
    fn new(state: &GameState, cols: u16, rows: u16) -> Self {
        FieldView {
            cols,
            rows,
            sx: cols as f64 / state.config.field_width,
            sy: rows as f64 / state.config.field_height,
        }
    }

    /// Project a field-space rect to a clipped cell-space span, or `None`
    /// when it falls entirely off screen.
    fn cells(&self, r: &Rect) -> Option<(u16, u16, u16, u16)> {
        let x0 = ((r.position.x * self.sx).floor() as i32).max(0);
        let y0 = ((r.position.y * self.sy).floor() as i32).max(0);
        let x1 = (((r.position.x + r.size.x) * self.sx).ceil() as i32).min(self.cols as i32);
        let y1 = (((r.position.y + r.size.y) * self.sy).ceil() as i32).min(self.rows as i32);
        if x0 >= x1 || y0 >= y1 {
            return None;
        }
        Some((x0 as u16, y0 as u16, (x1 - x0) as u16, (y1 - y0) as u16))
    }

    fn cell_y(&self, field_y: f64) -> u16 {
        ((field_y * self.sy) as i32).clamp(0, self.rows.saturating_sub(1) as i32) as u16
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame. Draw order is fixed: clear, background, all
/// upper pipes, all lower pipes, ground, score, actor, game-over overlay.
pub fn render<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    let (cols, rows) = terminal::size()?;
    let view = FieldView::new(state, cols, rows);

    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_background(out, &view)?;
    for pair in &state.pipes {
        fill_rect(out, &view, &pair.upper, C_PIPE)?;
    }
    for pair in &state.pipes {
        fill_rect(out, &view, &pair.lower, C_PIPE)?;
    }
    fill_rect(out, &view, &state.ground, C_GROUND)?;
    draw_score(out, &view, state)?;
    fill_rect(out, &view, &state.bird.rect, C_BIRD)?;
    if state.status == GameStatus::GameOver {
        draw_game_over(out, &view)?;
    }
    draw_controls_hint(out, &view)?;

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, rows.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── Primitives ────────────────────────────────────────────────────────────────

fn draw_background<W: Write>(out: &mut W, view: &FieldView) -> std::io::Result<()> {
    out.queue(style::SetBackgroundColor(C_SKY))?;
    let run = " ".repeat(view.cols as usize);
    for row in 0..view.rows {
        out.queue(cursor::MoveTo(0, row))?;
        out.queue(Print(&run))?;
    }
    Ok(())
}

fn fill_rect<W: Write>(
    out: &mut W,
    view: &FieldView,
    r: &Rect,
    color: Color,
) -> std::io::Result<()> {
    if let Some((x, y, w, h)) = view.cells(r) {
        out.queue(style::SetBackgroundColor(color))?;
        let run = " ".repeat(w as usize);
        for row in y..y + h {
            out.queue(cursor::MoveTo(x, row))?;
            out.queue(Print(&run))?;
        }
    }
    Ok(())
}

// ── HUD ───────────────────────────────────────────────────────────────────────

fn draw_score<W: Write>(out: &mut W, view: &FieldView, state: &GameState) -> std::io::Result<()> {
    let text = state.score.to_string();
    let row = view.cell_y(100.0);
    let col = (view.cols / 2).saturating_sub(text.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(col, row))?;
    out.queue(style::SetBackgroundColor(C_SKY))?;
    out.queue(style::SetForegroundColor(C_SCORE))?;
    out.queue(Print(text))?;
    Ok(())
}

fn draw_controls_hint<W: Write>(out: &mut W, view: &FieldView) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, view.rows.saturating_sub(1)))?;
    out.queue(style::SetBackgroundColor(C_GROUND))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("SPACE : Flap   Q : Quit"))?;
    Ok(())
}

// ── Game-over overlay ─────────────────────────────────────────────────────────

fn draw_game_over<W: Write>(out: &mut W, view: &FieldView) -> std::io::Result<()> {
    let lines: &[&str] = &[
        "╔══════════════════╗",
        "║    GAME  OVER    ║",
        "╚══════════════════╝",
    ];
    let hint = "SPACE - Play Again   Q - Quit";

    let cx = view.cols / 2;
    let start_row = (view.rows / 2).saturating_sub(2);

    out.queue(style::SetBackgroundColor(C_SKY))?;
    out.queue(style::SetForegroundColor(C_OVER))?;
    for (i, msg) in lines.iter().enumerate() {
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, start_row + i as u16))?;
        out.queue(Print(*msg))?;
    }

    let col = cx.saturating_sub(hint.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(col, start_row + lines.len() as u16))?;
    out.queue(style::SetForegroundColor(Color::White))?;
    out.queue(Print(hint))?;
    Ok(())
}
