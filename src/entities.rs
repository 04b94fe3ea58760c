/// All game entity types — pure data, no logic.

use crate::config::Config;

// ── Geometry ──────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub fn new(x: f64, y: f64) -> Self {
        Vec2 { x, y }
    }

    pub fn zero() -> Self {
        Vec2 { x: 0.0, y: 0.0 }
    }
}

/// Axis-aligned rectangle. `position` is the corner with the smaller
/// coordinates; the field's y axis grows downward, so y = 0 is the top
/// edge of the field.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub position: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Rect {
            position: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }
}

// ── Actor ─────────────────────────────────────────────────────────────────────

/// The player-controlled actor. Tuning constants (gravity, flap impulse,
/// fall cap) live in `Config`, not on the actor itself.
#[derive(Clone, Debug)]
pub struct Bird {
    pub rect: Rect,
    pub velocity: Vec2,
}

// ── Obstacles ─────────────────────────────────────────────────────────────────

/// One upper/lower obstacle pair sharing an x position and velocity.
///
/// `spawned` marks that this pair has already released its successor in the
/// cyclic pool; `scored` that the pair has already been counted. Both flags
/// are cleared again when the pair itself gets recycled.
#[derive(Clone, Debug)]
pub struct PipePair {
    pub upper: Rect,
    pub lower: Rect,
    pub velocity: Vec2,
    pub spawned: bool,
    pub scored: bool,
}

impl PipePair {
    /// Shared x position of the pair — both rects move in lockstep.
    pub fn x(&self) -> f64 {
        self.upper.position.x
    }
}

// ── Master game state ─────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub enum GameStatus {
    Playing,
    GameOver,
}

/// The entire game state. Cloneable so pure update functions can
/// return a new copy without mutating the original.
#[derive(Clone, Debug)]
pub struct GameState {
    pub config: Config,
    pub bird: Bird,
    /// The cyclic obstacle pool, `config.pipe_count` pairs recycled forever.
    pub pipes: Vec<PipePair>,
    /// Static bottom strip; never changes after construction.
    pub ground: Rect,
    pub score: u32,
    pub status: GameStatus,
    /// The world stays frozen until the first flap; set by the first action
    /// event and cleared again by a reset.
    pub pipes_active: bool,
}
