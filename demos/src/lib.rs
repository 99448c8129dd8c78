//! Headless chase demo shared by the `chase` binary.
//!
//! Demonstrates: one Dijkstra map per tick toward the player, and a pack of
//! chasers that close in by greedy descent over it without any search of
//! their own.

use std::path::Path;

use floodmap_core::{Grid, GridError, Point};
use floodmap_paths::{DIRECTIONS, DistanceField, FloodError, ObstacleView, advance_chasers};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Deserialize;
use thiserror::Error;

pub const FLOOR_CODE: i32 = 0;
pub const WALL_CODE: i32 = 1;
pub const CHASER_CODE: i32 = 2;

const DEFAULT_LEVEL: [[i32; 10]; 10] = [
    [1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
    [1, 2, 0, 1, 0, 0, 0, 0, 0, 1],
    [1, 0, 0, 1, 0, 0, 0, 1, 0, 1],
    [1, 0, 0, 0, 0, 0, 0, 1, 2, 1],
    [1, 1, 1, 0, 0, 0, 0, 1, 0, 1],
    [1, 0, 0, 0, 0, 0, 2, 0, 0, 1],
    [1, 0, 0, 0, 0, 0, 0, 0, 0, 1],
    [1, 0, 2, 0, 0, 0, 0, 1, 0, 1],
    [1, 0, 0, 0, 0, 0, 0, 0, 0, 1],
    [1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
];

/// Errors raised while setting up or running the demo.
#[derive(Error, Debug)]
pub enum DemoError {
    #[error("could not read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not parse config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid level: {0}")]
    Level(#[from] GridError),
    #[error("unknown cell code {code} at {pos}")]
    UnknownCode { code: i32, pos: Point },
    #[error("player start {0} is not a free floor cell")]
    BadPlayer(Point),
    #[error(transparent)]
    Flood(#[from] FloodError),
}

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

/// Demo settings. Every field is optional in the JSON form.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ChaseConfig {
    /// Level rows: 0 floor, 1 wall, 2 chaser start.
    pub level: Vec<Vec<i32>>,
    /// Player start as `[row, col]`.
    pub player: [i32; 2],
    /// Number of updates to run.
    pub ticks: u32,
    /// Seed for the player's wandering.
    pub seed: u64,
    /// Flood limit; 0 is unbounded.
    pub limit: i32,
    /// Chance per tick that the player tries a random step.
    pub wander: f64,
}

impl Default for ChaseConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LEVEL.iter().map(|r| r.to_vec()).collect(),
            player: [4, 4],
            ticks: 20,
            seed: 42,
            limit: 0,
            wander: 0.5,
        }
    }
}

impl ChaseConfig {
    /// Parse a config from JSON. Missing fields take their defaults.
    pub fn from_json(s: &str) -> Result<Self, DemoError> {
        Ok(serde_json::from_str(s)?)
    }

    /// Read and parse a JSON config file.
    pub fn load(path: &Path) -> Result<Self, DemoError> {
        let s = std::fs::read_to_string(path)?;
        Self::from_json(&s)
    }
}

// ---------------------------------------------------------------------------
// ChaseDemo
// ---------------------------------------------------------------------------

pub struct ChaseDemo {
    walls: Grid<bool>,
    player: Point,
    chasers: Vec<Point>,
    limit: i32,
    wander: f64,
    rng: StdRng,
    tick: u32,
    field: Option<DistanceField>,
}

impl ChaseDemo {
    pub fn new(config: &ChaseConfig) -> Result<Self, DemoError> {
        let level = Grid::from_rows(&config.level)?;
        let mut chasers = Vec::new();
        for (p, &code) in level.iter() {
            match code {
                FLOOR_CODE | WALL_CODE => {}
                CHASER_CODE => chasers.push(p),
                code => return Err(DemoError::UnknownCode { code, pos: p }),
            }
        }
        let walls = level.map(|&c| c == WALL_CODE);

        let player = Point::from_row_col(config.player[0], config.player[1]);
        if walls.is_blocked(player) || chasers.contains(&player) {
            return Err(DemoError::BadPlayer(player));
        }

        Ok(Self {
            walls,
            player,
            chasers,
            limit: config.limit,
            wander: config.wander.clamp(0.0, 1.0),
            rng: StdRng::seed_from_u64(config.seed),
            tick: 0,
            field: None,
        })
    }

    pub fn player(&self) -> Point {
        self.player
    }

    pub fn chasers(&self) -> &[Point] {
        &self.chasers
    }

    pub fn walls(&self) -> &Grid<bool> {
        &self.walls
    }

    /// Number of updates run so far.
    pub fn tick(&self) -> u32 {
        self.tick
    }

    /// The field computed by the last update.
    pub fn field(&self) -> Option<&DistanceField> {
        self.field.as_ref()
    }

    /// Maybe take a random step, if the cell is free.
    fn wander(&mut self) -> bool {
        if !self.rng.random_bool(self.wander) {
            return false;
        }
        let next = self.player + DIRECTIONS[self.rng.random_range(0..DIRECTIONS.len())];
        if self.walls.is_blocked(next) || self.chasers.contains(&next) {
            return false;
        }
        self.player = next;
        true
    }

    /// Run one update: the player may wander, then every chaser steps.
    /// Returns how many chasers moved.
    pub fn step(&mut self) -> Result<usize, DemoError> {
        self.tick += 1;
        if self.wander() {
            log::debug!("tick {}: player -> {}", self.tick, self.player);
        }
        let tick = advance_chasers(&self.walls, self.player, &mut self.chasers, self.limit)?;
        log::debug!(
            "tick {}: {} of {} chasers moved",
            self.tick,
            tick.moved,
            self.chasers.len()
        );
        self.field = Some(tick.field);
        Ok(tick.moved)
    }

    /// Whether every chaser stands next to the player.
    pub fn caught(&self) -> bool {
        self.chasers.iter().all(|c| {
            let d = *c - self.player;
            d.x.abs().max(d.y.abs()) == 1
        })
    }

    /// Draw the level: `#` wall, `@` player, `a`.. chasers, `.` floor.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.walls.len() + self.walls.height() as usize);
        for y in 0..self.walls.height() {
            for x in 0..self.walls.width() {
                let p = Point::new(x, y);
                let ch = if p == self.player {
                    '@'
                } else if let Some(i) = self.chasers.iter().position(|&c| c == p) {
                    char::from(b'a' + (i % 26) as u8)
                } else if self.walls.is_blocked(p) {
                    '#'
                } else {
                    '.'
                };
                out.push(ch);
            }
            out.push('\n');
        }
        out
    }
}
