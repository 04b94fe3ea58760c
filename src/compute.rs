/// Pure game-logic functions.
///
/// Every public function takes an immutable reference to the current state
/// (and, where needed, an RNG handle) and returns a brand-new value. Side
/// effects are limited to the injected RNG, so callers control determinism
/// (useful for tests with a seeded RNG).

use rand::Rng;

use crate::config::{Config, ConfigError};
use crate::entities::{Bird, GameState, GameStatus, PipePair, Rect, Vec2};

/// Once the run is over the actor rests slightly sunk into the ground line
/// instead of sitting exactly on it.
const GROUND_SEAT: f64 = 1.04;

// ── Geometry ──────────────────────────────────────────────────────────────────

/// Axis-aligned overlap test. Strict inequalities on both axes: rects that
/// merely share an edge do not overlap. Symmetric in its arguments.
pub fn rect_overlap(a: &Rect, b: &Rect) -> bool {
    a.position.x + a.size.x > b.position.x
        && a.position.x < b.position.x + b.size.x
        && a.position.y + a.size.y > b.position.y
        && a.position.y < b.position.y + b.size.y
}

// ── Constructors ──────────────────────────────────────────────────────────────

/// Build the initial game state: the actor at its spawn point, the full
/// obstacle pool parked off-screen right at fixed spacing, and a fresh
/// random gap for the first pair. Fails fast on a bad configuration.
pub fn init_state(config: &Config, rng: &mut impl Rng) -> Result<GameState, ConfigError> {
    config.validate()?;

    let ground = Rect::new(
        0.0,
        config.field_height - config.ground_height,
        config.field_width,
        config.ground_height,
    );

    Ok(GameState {
        bird: spawn_bird(config),
        pipes: starting_pipes(config, rng),
        ground,
        score: 0,
        status: GameStatus::Playing,
        pipes_active: false,
        config: config.clone(),
    })
}

fn spawn_bird(cfg: &Config) -> Bird {
    Bird {
        rect: Rect::new(
            cfg.field_width * cfg.bird_x_frac,
            cfg.field_height * 0.5,
            cfg.bird_size,
            cfg.bird_size,
        ),
        velocity: Vec2::zero(),
    }
}

fn starting_pipes(cfg: &Config, rng: &mut impl Rng) -> Vec<PipePair> {
    let mut pipes: Vec<PipePair> = (0..cfg.pipe_count)
        .map(|i| {
            let x = cfg.field_width + cfg.spawn_lead + i as f64 * cfg.pipe_distance;
            PipePair {
                upper: Rect::new(x, 0.0, cfg.pipe_width, cfg.pipe_height),
                lower: Rect::new(x, 0.0, cfg.pipe_width, cfg.pipe_height),
                velocity: Vec2::new(-cfg.pipe_speed, 0.0),
                spawned: false,
                scored: false,
            }
        })
        .collect();

    // Only the first pair needs a real gap now; every later pair is
    // repositioned by the recycle pass before it ever scrolls into view.
    randomize_gap(&mut pipes[0], cfg, rng);
    pipes
}

// ── Actor physics ─────────────────────────────────────────────────────────────

/// Advance the actor by `delta` seconds: gravity integration capped at the
/// terminal fall speed, then translation clamped at the top of the field.
/// Once the run is over the actor is additionally seated on the ground line.
pub fn move_bird(bird: &Bird, delta: f64, game_over: bool, cfg: &Config) -> Bird {
    let mut b = bird.clone();
    b.velocity.y = cfg.max_fall_speed.min(b.velocity.y + cfg.gravity * delta);

    b.rect.position.x += b.velocity.x * delta;
    b.rect.position.y = 0.0_f64.max(b.rect.position.y + b.velocity.y * delta);

    if game_over {
        let seat = cfg.field_height - cfg.ground_height - b.rect.size.y * GROUND_SEAT;
        b.rect.position.y = b.rect.position.y.min(seat);
    }
    b
}

/// The impulse fully replaces any current vertical motion, mid-fall included.
/// No cooldown, no stacking.
pub fn flap(bird: &Bird, cfg: &Config) -> Bird {
    let mut b = bird.clone();
    b.velocity.y = -cfg.flap_speed;
    b
}

// ── Obstacle pool ─────────────────────────────────────────────────────────────

/// Linear translation of both halves of the pair.
pub fn move_pipe(pair: &PipePair, delta: f64) -> PipePair {
    let mut p = pair.clone();
    p.upper.position.x += p.velocity.x * delta;
    p.upper.position.y += p.velocity.y * delta;
    p.lower.position.x += p.velocity.x * delta;
    p.lower.position.y += p.velocity.y * delta;
    p
}

/// Spawn trigger: fires when the pair has scrolled `pipe_distance` in from
/// the right edge, at most once per cycle.
pub fn should_spawn_next(pair: &PipePair, cfg: &Config) -> bool {
    !pair.spawned && pair.x() < cfg.field_width - cfg.pipe_distance
}

/// Score trigger: fires when the pair crosses the actor's approximate x
/// position, at most once per cycle. Checked once per pair record, never
/// per half, so a pair can only ever count for a single point.
pub fn crossed_score_line(pair: &PipePair, cfg: &Config) -> bool {
    !pair.scored && pair.x() < cfg.field_width * cfg.bird_x_frac - pair.upper.size.x / 2.0
}

/// Draw a fresh gap placement: upper rect above the gap, lower below, both
/// tall enough to reach past the field edges.
fn randomize_gap(pair: &mut PipePair, cfg: &Config, rng: &mut impl Rng) {
    let offset = rng.gen_range(-cfg.max_offset..=cfg.max_offset) as f64;
    let gap = rng.gen_range(cfg.gap_min..=cfg.gap_max) as f64;
    let center = cfg.field_height / 2.0 + offset;

    pair.upper.position.y = center - gap / 2.0 - cfg.pipe_height;
    pair.lower.position.y = center + gap / 2.0;
}

/// Recycle a spent pair back to the right edge with a fresh gap.
fn reposition_pipe(pair: &mut PipePair, cfg: &Config, rng: &mut impl Rng) {
    pair.upper.position.x = cfg.field_width;
    pair.lower.position.x = cfg.field_width;
    randomize_gap(pair, cfg, rng);
}

// ── Input event ───────────────────────────────────────────────────────────────

/// Handle the single "action" input event.
///
/// While the run is live this applies a flap impulse, waking the world on
/// the very first one (re-flapping a live world is a plain impulse). From
/// the game-over screen it performs a full reset instead.
pub fn press_action(state: &GameState, rng: &mut impl Rng) -> GameState {
    match state.status {
        GameStatus::Playing => GameState {
            bird: flap(&state.bird, &state.config),
            pipes_active: true,
            ..state.clone()
        },
        GameStatus::GameOver => reset_state(state, rng),
    }
}

/// Rebuild the starting layout, keeping only the configuration and the
/// (immutable) ground.
fn reset_state(state: &GameState, rng: &mut impl Rng) -> GameState {
    GameState {
        bird: spawn_bird(&state.config),
        pipes: starting_pipes(&state.config, rng),
        score: 0,
        status: GameStatus::Playing,
        pipes_active: false,
        ground: state.ground,
        config: state.config.clone(),
    }
}

// ── Per-frame tick ────────────────────────────────────────────────────────────

/// Advance the simulation by `delta` seconds of wall-clock time.
///
/// The delta is applied as-is, never clamped: a very large value (a frame
/// arriving after the terminal was suspended) can step the actor straight
/// through an obstacle. Known, accepted limitation.
pub fn tick(state: &GameState, delta: f64, rng: &mut impl Rng) -> GameState {
    // The whole world, actor included, stays frozen until the first flap.
    if !state.pipes_active {
        return state.clone();
    }

    let cfg = &state.config;
    let mut next = state.clone();
    let over = state.status == GameStatus::GameOver;
    next.bird = move_bird(&state.bird, delta, over, cfg);

    if over {
        return next;
    }

    for pair in &mut next.pipes {
        *pair = move_pipe(pair, delta);
    }

    // Recycle pass: a pair that just crossed the trigger line releases its
    // successor in the cyclic pool.
    let count = next.pipes.len();
    for i in 0..count {
        if should_spawn_next(&next.pipes[i], cfg) {
            let succ = (i + 1) % count;
            reposition_pipe(&mut next.pipes[succ], cfg, rng);
            next.pipes[i].spawned = true;
            next.pipes[succ].spawned = false;
            next.pipes[succ].scored = false;
        }
    }

    // Scoring pass.
    for pair in &mut next.pipes {
        if crossed_score_line(pair, cfg) {
            pair.scored = true;
            next.score += 1;
        }
    }

    // Collision pass: actor vs every upper half, every lower half, then the
    // ground.
    let bird_rect = next.bird.rect;
    let hit = next.pipes.iter().any(|p| rect_overlap(&bird_rect, &p.upper))
        || next.pipes.iter().any(|p| rect_overlap(&bird_rect, &p.lower))
        || rect_overlap(&bird_rect, &next.ground);
    if hit {
        game_over(&mut next);
    }

    next
}

/// Collision aftermath: obstacles freeze in place and the actor's vertical
/// motion is cancelled before it starts its final drop to the ground seat.
fn game_over(state: &mut GameState) {
    state.status = GameStatus::GameOver;
    state.bird.velocity.y = 0.0;
    for pair in &mut state.pipes {
        pair.velocity.x = 0.0;
    }
}
