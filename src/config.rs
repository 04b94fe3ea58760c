/// Simulation tuning constants and their validation.

use std::error::Error;
use std::fmt;

/// Field geometry and physics tuning. The defaults reproduce the classic
/// 480×720 layout with a pool of three obstacle pairs.
///
/// All geometry is expressed in field units; the renderer scales the field
/// to whatever cell grid it has available.
#[derive(Clone, Debug)]
pub struct Config {
    pub field_width: f64,
    pub field_height: f64,
    /// Height of the static ground strip at the bottom of the field.
    pub ground_height: f64,
    /// The actor rect is `bird_size` × `bird_size`.
    pub bird_size: f64,
    /// Actor x position (and the score line) as a fraction of the field width.
    pub bird_x_frac: f64,
    /// Downward acceleration, units/s².
    pub gravity: f64,
    /// A flap sets `velocity.y` to `-flap_speed`.
    pub flap_speed: f64,
    /// Terminal fall speed.
    pub max_fall_speed: f64,
    /// Number of recyclable obstacle pairs in the pool.
    pub pipe_count: usize,
    pub pipe_width: f64,
    /// Height of each half of a pair — tall enough to reach past the field
    /// edge from either side of the gap.
    pub pipe_height: f64,
    /// Leftward scroll speed; pairs move at `velocity.x = -pipe_speed`.
    pub pipe_speed: f64,
    /// Horizontal spacing between pairs, which doubles as the spawn-trigger
    /// distance from the right edge.
    pub pipe_distance: f64,
    /// Extra off-screen lead given to the whole pool at game start.
    pub spawn_lead: f64,
    /// Gap centers are drawn uniformly from field center ± `max_offset`.
    pub max_offset: i32,
    /// Gap sizes are drawn uniformly from `gap_min..=gap_max`.
    pub gap_min: i32,
    pub gap_max: i32,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            field_width: 480.0,
            field_height: 720.0,
            ground_height: 60.0,
            bird_size: 21.0,
            bird_x_frac: 0.34,
            gravity: 1700.0,
            flap_speed: 600.0,
            max_fall_speed: 750.0,
            pipe_count: 3,
            pipe_width: 60.0,
            pipe_height: 480.0,
            pipe_speed: 240.0,
            pipe_distance: 270.0,
            spawn_lead: 120.0,
            max_offset: 160,
            gap_min: 120,
            gap_max: 160,
        }
    }
}

// ── Validation ────────────────────────────────────────────────────────────────

/// A configuration that would produce degenerate geometry or a
/// non-terminating recycle trigger. Rejected at construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Field dimensions must be positive and leave room above the ground.
    BadField,
    /// The obstacle pool must hold at least one pair.
    EmptyPool,
    /// `gap_min..=gap_max` must be a non-empty range of positive sizes.
    BadGapRange,
    /// Pipe and actor geometry must be strictly positive.
    BadGeometry,
    /// Speeds, gravity, offsets and fractions must stay in range.
    BadTuning,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            ConfigError::BadField => "field dimensions are degenerate",
            ConfigError::EmptyPool => "obstacle pool size must be at least 1",
            ConfigError::BadGapRange => "gap size range is empty or non-positive",
            ConfigError::BadGeometry => "pipe or actor geometry is non-positive",
            ConfigError::BadTuning => "speed, offset or fraction out of range",
        };
        f.write_str(msg)
    }
}

impl Error for ConfigError {}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.field_width <= 0.0
            || self.field_height <= 0.0
            || self.ground_height < 0.0
            || self.ground_height >= self.field_height
        {
            return Err(ConfigError::BadField);
        }
        if self.pipe_count == 0 {
            return Err(ConfigError::EmptyPool);
        }
        if self.gap_min > self.gap_max || self.gap_min <= 0 {
            return Err(ConfigError::BadGapRange);
        }
        if self.pipe_width <= 0.0
            || self.pipe_height <= 0.0
            || self.pipe_distance <= 0.0
            || self.bird_size <= 0.0
        {
            return Err(ConfigError::BadGeometry);
        }
        if self.pipe_speed < 0.0
            || self.gravity < 0.0
            || self.flap_speed < 0.0
            || self.max_fall_speed < 0.0
            || self.spawn_lead < 0.0
            || self.max_offset < 0
            || !(0.0..=1.0).contains(&self.bird_x_frac)
        {
            return Err(ConfigError::BadTuning);
        }
        Ok(())
    }
}
