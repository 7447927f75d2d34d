//! Replay a grid search in the terminal.
//!
//! Run: cargo run --bin gridsearch -- --strategy bfs --obstacle 3,1 --obstacle 3,2

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

use gridsearch_crossterm::TermRenderer;
use gridsearch_demos::{Args, Replay};
use gridsearch_paths::{Engine, Outcome};

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    let args = Args::parse();
    let problem = args.problem()?;
    log::debug!("{args:?}");

    let engine = Engine::new(args.strategy, problem);
    let mut out = TermRenderer::stdout().with_plain(args.plain);
    out.init()?;
    let outcome = Replay::paced(args.search_fps()).run(engine, &mut out);
    out.close()?;

    match outcome? {
        Outcome::Solved(path) => {
            let cells: Vec<String> = path.iter().map(ToString::to_string).collect();
            println!("{}", cells.join(" -> "));
        }
        Outcome::Exhausted => println!("no path from {} to {}", args.start, args.goal),
    }
    Ok(())
}
