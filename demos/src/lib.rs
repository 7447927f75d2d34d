//! Shared code for the gridsearch demo binary: argument parsing and the
//! frame-by-frame replay loop.

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use clap::Parser;

use gridsearch_core::Point;
use gridsearch_crossterm::TermRenderer;
use gridsearch_paths::{Engine, Frame, Outcome, Problem, Snapshot, StepResult, Strategy, solution_prefixes};

/// Fastest replay speed, in frames per second, while searching.
pub const MAX_FPS: u32 = 60;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "gridsearch",
    version,
    about = "Watch depth-first, breadth-first or A* search a grid one step per frame"
)]
pub struct Args {
    /// Grid width in cells
    #[arg(long, default_value_t = 7)]
    pub width: i32,

    /// Grid height in cells
    #[arg(long, default_value_t = 5)]
    pub height: i32,

    /// Start cell
    #[arg(long, value_name = "X,Y", value_parser = parse_point, default_value = "1,2")]
    pub start: Point,

    /// Goal cell
    #[arg(long, value_name = "X,Y", value_parser = parse_point, default_value = "6,2")]
    pub goal: Point,

    /// Obstacle cell; repeat for more. Defaults to the wall at column 4,
    /// rows 1 to 4.
    #[arg(long = "obstacle", value_name = "X,Y", value_parser = parse_point)]
    pub obstacles: Vec<Point>,

    /// Start from an empty grid when no --obstacle is given
    #[arg(long)]
    pub no_default_obstacles: bool,

    /// Search strategy: dfs, bfs or astar
    #[arg(long, short, default_value = "astar")]
    pub strategy: Strategy,

    /// Frames per second while searching; the solution is drawn three times
    /// faster. Defaults to one frame per seven cells, capped at 60.
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub fps: Option<u32>,

    /// Print uncoloured text frames one after another
    #[arg(long)]
    pub plain: bool,
}

impl Args {
    /// Build and validate the problem described by the arguments.
    pub fn problem(&self) -> Result<Problem> {
        let obstacles = if self.obstacles.is_empty() && !self.no_default_obstacles {
            default_obstacles()
        } else {
            self.obstacles.clone()
        };
        let problem = Problem::new(self.width, self.height, self.start, self.goal, obstacles);
        problem.validate().context("invalid grid")?;
        Ok(problem)
    }

    /// Search speed in frames per second.
    pub fn search_fps(&self) -> u32 {
        self.fps.unwrap_or_else(|| default_fps(self.width, self.height))
    }
}

/// The wall used when no obstacles are given.
pub fn default_obstacles() -> Vec<Point> {
    (1..5).map(|y| Point::new(4, y)).collect()
}

/// One frame per seven cells, between 1 and [`MAX_FPS`].
pub fn default_fps(width: i32, height: i32) -> u32 {
    let cells = (width.max(0) as u32).saturating_mul(height.max(0) as u32);
    (cells / 7).clamp(1, MAX_FPS)
}

/// Parse `X,Y` into a point.
pub fn parse_point(s: &str) -> Result<Point> {
    let Some((x, y)) = s.split_once(',') else {
        bail!("expected X,Y, got {s:?}");
    };
    let x = x.trim().parse().with_context(|| format!("bad column in {s:?}"))?;
    let y = y.trim().parse().with_context(|| format!("bad row in {s:?}"))?;
    Ok(Point::new(x, y))
}

/// Status line shown under a frame.
pub fn status_line(engine: &Engine, result: &StepResult) -> String {
    let strategy = engine.strategy();
    match result {
        StepResult::Expanded(snap) => format!(
            "{strategy} | step {} | frontier {} | visited {}",
            engine.expanded(),
            snap.frontier.len(),
            snap.visited.len()
        ),
        StepResult::Solved(path) => format!(
            "{strategy} | solved in {} steps | {} moves",
            engine.expanded(),
            path.len().saturating_sub(1)
        ),
        StepResult::Exhausted => format!(
            "{strategy} | no path after {} steps",
            engine.expanded()
        ),
    }
}

/// Drives an [`Engine`] to the end, drawing one frame per step and then the
/// solution path one cell per frame.
pub struct Replay {
    search_delay: Option<Duration>,
    path_delay: Option<Duration>,
}

impl Replay {
    /// Pace frames at `fps` while searching and at `3 × fps` while drawing
    /// the solution.
    pub fn paced(fps: u32) -> Self {
        let fps = fps.max(1);
        Self {
            search_delay: Some(Duration::from_secs(1) / fps),
            path_delay: Some(Duration::from_secs(1) / fps.saturating_mul(3)),
        }
    }

    /// Draw every frame without waiting.
    pub fn unpaced() -> Self {
        Self {
            search_delay: None,
            path_delay: None,
        }
    }

    pub fn run<W: Write>(&self, mut engine: Engine, out: &mut TermRenderer<W>) -> io::Result<Outcome> {
        let problem = engine.problem().clone();
        let mut last = Snapshot::default();
        out.draw(&Frame::new(&problem), &format!("{} | ready", engine.strategy()))?;

        loop {
            let result = engine.step();
            let status = status_line(&engine, &result);
            match result {
                StepResult::Expanded(snap) => {
                    out.draw(&Frame::new(&problem).with_snapshot(&snap), &status)?;
                    last = snap;
                    pause(self.search_delay);
                }
                StepResult::Solved(path) => {
                    log::info!("{status}");
                    for prefix in solution_prefixes(&path) {
                        let frame = Frame::new(&problem).with_snapshot(&last).with_path(prefix);
                        out.draw(&frame, &status)?;
                        pause(self.path_delay);
                    }
                    return Ok(Outcome::Solved(path));
                }
                StepResult::Exhausted => {
                    log::info!("{status}");
                    out.draw(&Frame::new(&problem).with_snapshot(&last), &status)?;
                    return Ok(Outcome::Exhausted);
                }
            }
        }
    }
}

fn pause(delay: Option<Duration>) {
    if let Some(d) = delay {
        thread::sleep(d);
    }
}
