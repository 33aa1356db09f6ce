//! Rendering layer: all terminal I/O lives here.
//!
//! Each function receives a mutable writer and an immutable view of the
//! match.  No game logic is performed; this module only translates field
//! coordinates into terminal cells and queues the drawing commands.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};
use gorillas::entities::{Building, Position, RenderState};
use gorillas::{GameConfig, ThrowField};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_SKY_TEXT: Color = Color::White;
const C_BUILDING_A: Color = Color::DarkBlue;
const C_BUILDING_B: Color = Color::Blue;
const C_ACTOR: Color = Color::Magenta;
const C_BANANA: Color = Color::Yellow;
const C_HUD: Color = Color::Cyan;
const C_FIELD_FOCUS: Color = Color::Yellow;
const C_FIELD: Color = Color::Grey;
const C_ERROR: Color = Color::Red;
const C_HINT: Color = Color::DarkGrey;
const C_WINNER: Color = Color::Red;

/// Rows above the field: status line and input line.
const HUD_ROWS: u16 = 2;

/// What the player has typed so far.
pub struct InputFields {
    pub angle: String,
    pub speed: String,
    pub focus: ThrowField,
    /// Last rejected throw, shown until the next accepted one.
    pub message: Option<String>,
}

impl InputFields {
    pub fn new() -> Self {
        Self {
            angle: String::new(),
            speed: String::new(),
            focus: ThrowField::Angle,
            message: None,
        }
    }

    pub fn focused_mut(&mut self) -> &mut String {
        match self.focus {
            ThrowField::Angle => &mut self.angle,
            ThrowField::Speed => &mut self.speed,
        }
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            ThrowField::Angle => ThrowField::Speed,
            ThrowField::Speed => ThrowField::Angle,
        };
    }
}

/// Maps field units onto the terminal grid below the HUD.
struct Viewport {
    cols: u16,
    rows: u16,
    sx: f64,
    sy: f64,
}

impl Viewport {
    fn new(config: &GameConfig, cols: u16, rows: u16) -> Self {
        let field_rows = rows.saturating_sub(HUD_ROWS + 1).max(1);
        Self {
            cols,
            rows,
            sx: f64::from(cols) / config.play_width,
            sy: f64::from(field_rows) / config.play_height,
        }
    }

    fn col(&self, x: f64) -> Option<u16> {
        let c = (x * self.sx).floor();
        (c >= 0.0 && c < f64::from(self.cols)).then_some(c as u16)
    }

    fn row(&self, y: f64) -> Option<u16> {
        let r = (y * self.sy).floor() + f64::from(HUD_ROWS);
        (r >= f64::from(HUD_ROWS) && r < f64::from(self.rows.saturating_sub(1))).then_some(r as u16)
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(
    out: &mut W,
    view: &RenderState,
    config: &GameConfig,
    fields: &InputFields,
) -> std::io::Result<()> {
    let (cols, rows) = terminal::size()?;
    let vp = Viewport::new(config, cols, rows);

    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_sky_text(out, &vp)?;
    for (i, building) in view.buildings.iter().enumerate() {
        draw_building(out, &vp, building, config, i)?;
    }
    for actor in &view.actors {
        draw_actor(out, &vp, *actor)?;
    }
    if let Some(banana) = view.projectile {
        draw_banana(out, &vp, banana)?;
    }

    draw_hud(out, view, fields)?;
    draw_controls_hint(out, &vp, view)?;

    if !view.is_running {
        draw_game_over(out, &vp, view)?;
    }

    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, rows.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── Field ─────────────────────────────────────────────────────────────────────

fn draw_sky_text<W: Write>(out: &mut W, vp: &Viewport) -> std::io::Result<()> {
    let text = "G O R I L L A S";
    if let Some(row) = vp.row(100.0) {
        let x = (vp.cols / 2).saturating_sub(text.len() as u16 / 2);
        out.queue(cursor::MoveTo(x, row))?;
        out.queue(style::SetForegroundColor(C_SKY_TEXT))?;
        out.queue(Print(text))?;
    }
    Ok(())
}

fn draw_building<W: Write>(
    out: &mut W,
    vp: &Viewport,
    b: &Building,
    config: &GameConfig,
    index: usize,
) -> std::io::Result<()> {
    let Some(left) = vp.col(f64::from(b.x)) else {
        return Ok(());
    };
    // Overhang of the last building is clipped at the right edge.
    let right = vp
        .col(f64::from(b.right()))
        .map_or(vp.cols.saturating_sub(1), |c| c.saturating_sub(1))
        .max(left);
    let Some(top) = vp.row(f64::from(b.y)) else {
        return Ok(());
    };
    let bottom = vp.row(config.play_height - 1.0).unwrap_or(top).max(top);

    let color = if index % 2 == 0 { C_BUILDING_A } else { C_BUILDING_B };
    out.queue(style::SetForegroundColor(color))?;
    let span = "█".repeat(usize::from(right.saturating_sub(left)) + 1);
    for row in top..=bottom {
        out.queue(cursor::MoveTo(left, row))?;
        out.queue(Print(&span))?;
    }
    Ok(())
}

fn draw_actor<W: Write>(out: &mut W, vp: &Viewport, pos: Position) -> std::io::Result<()> {
    let half = gorillas::config::ACTOR_SIZE / 2.0;
    if let (Some(col), Some(row)) = (vp.col(pos.x + half), vp.row(pos.y + half)) {
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetForegroundColor(C_ACTOR))?;
        out.queue(Print("@"))?;
    }
    Ok(())
}

fn draw_banana<W: Write>(out: &mut W, vp: &Viewport, pos: Position) -> std::io::Result<()> {
    // Above the top edge: show where it will come back down.
    let (col, row, glyph) = match (vp.col(pos.x), vp.row(pos.y)) {
        (Some(col), Some(row)) => (col, row, "o"),
        (Some(col), None) if pos.y < 0.0 => (col, HUD_ROWS, "^"),
        _ => return Ok(()),
    };
    out.queue(cursor::MoveTo(col, row))?;
    out.queue(style::SetForegroundColor(C_BANANA))?;
    out.queue(Print(glyph))?;
    Ok(())
}

// ── HUD (rows 0–1) ────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, view: &RenderState, fields: &InputFields) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD))?;
    out.queue(Print(&view.status_text))?;

    out.queue(cursor::MoveTo(1, 1))?;
    draw_field(out, "Angle (°):", &fields.angle, fields.focus == ThrowField::Angle)?;
    out.queue(Print("  "))?;
    draw_field(out, "Speed:", &fields.speed, fields.focus == ThrowField::Speed)?;

    if let Some(msg) = &fields.message {
        out.queue(Print("  "))?;
        out.queue(style::SetForegroundColor(C_ERROR))?;
        out.queue(Print(msg))?;
    }
    Ok(())
}

fn draw_field<W: Write>(out: &mut W, label: &str, value: &str, focused: bool) -> std::io::Result<()> {
    out.queue(style::SetForegroundColor(C_FIELD))?;
    out.queue(Print(format!("{label} ")))?;
    out.queue(style::SetForegroundColor(if focused { C_FIELD_FOCUS } else { C_FIELD }))?;
    let cursor_mark = if focused { "_" } else { " " };
    out.queue(Print(format!("[{value:<5}{cursor_mark}]")))?;
    Ok(())
}

fn draw_controls_hint<W: Write>(out: &mut W, vp: &Viewport, view: &RenderState) -> std::io::Result<()> {
    let hint = if view.is_running {
        "TAB: switch field   ENTER: throw banana   ESC: quit"
    } else {
        "R: new game   ESC: quit"
    };
    out.queue(cursor::MoveTo(1, vp.rows.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print(hint))?;
    Ok(())
}

fn draw_game_over<W: Write>(out: &mut W, vp: &Viewport, view: &RenderState) -> std::io::Result<()> {
    let banner = format!("*** {} ***", view.status_text);
    let x = (vp.cols / 2).saturating_sub(banner.chars().count() as u16 / 2);
    let y = vp.rows / 3;
    out.queue(cursor::MoveTo(x, y))?;
    out.queue(style::SetForegroundColor(C_WINNER))?;
    out.queue(Print(banner))?;
    Ok(())
}
