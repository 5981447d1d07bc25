mod conduction;
mod error;
mod material;
mod model;
mod report;
mod simulation;

use std::io::{self, Write};

use model::*;
use simulation::simulate;

/// Runs the built-in model, or the JSON5 model given as the first argument.
fn main() -> anyhow::Result<()> {
    let model = match std::env::args().nth(1) {
        Some(path) => Model::load(path)?,
        None => Model::default(),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for run in model.runs.iter() {
        simulate(run, &mut out)?;
    }
    out.flush()?;

    anyhow::Result::Ok(())
}
