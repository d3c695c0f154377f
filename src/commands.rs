//! Command execution for the citymaps tool
//!
//! Every input (file or stdin) is one task: the map is built once, then routed
//! with each selected algorithm. A failing task is reported and the remaining
//! tasks still run.

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use thiserror::Error;

use citymaps::builders::{bcm, Format, LoadOptions, Loaded, RandomMapBuilder};
use citymaps::errors::{BuildError, MapError};
use citymaps::{Algorithm, Route};

use crate::cli::{Cli, Commands, TimeOpts};


/// Exit codes of the tool
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// A task failed or a check reported a failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
}


/// Errors that stop a task
#[derive(Error, Debug)]
pub enum ToolError {
    #[error("{0}")]
    Usage(String),

    #[error("missing start/end in ret input")]
    MissingEnds,

    #[error("missing start/end/expected in ret input")]
    MissingExpected,

    #[error(transparent)]
    Build(#[from] BuildError),

    #[error(transparent)]
    Map(#[from] MapError),

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl ToolError {
    pub fn exit_code(&self) -> ExitCode {
        match self {
            ToolError::Usage(_) => ExitCode::Usage,
            ToolError::MissingEnds
            | ToolError::MissingExpected
            | ToolError::Build(_)
            | ToolError::Map(_)
            | ToolError::Io(_) => ExitCode::Failure,
        }
    }
}


/// What to compute on each input
#[derive(Clone, Copy, Debug)]
enum Query<'a> {
    Path { from: &'a str, to: &'a str },
    Solve,
    Check,
}

/// Where a map comes from
#[derive(Clone, Debug, PartialEq, Eq)]
enum Input {
    Stdin,
    File(PathBuf),
}

fn inputs(files: &[PathBuf]) -> Vec<Input> {
    if files.is_empty() || (files.len() == 1 && files[0] == Path::new("-")) {
        return vec![Input::Stdin];
    }
    files.iter().cloned().map(Input::File).collect()
}


/// Run the parsed command line, writing results to `out`
pub fn run<W: Write>(cli: &Cli, out: &mut W) -> Result<ExitCode, ToolError> {
    let (query, files) = match &cli.command {
        Commands::Path { from, to, files } => (Query::Path { from: from.as_str(), to: to.as_str() }, files),
        Commands::Solve { files } => (Query::Solve, files),
        Commands::Check { files } => (Query::Check, files),
        Commands::Generate { cities, probability, extent, seed } => {
            let mut builder = RandomMapBuilder::new(*cities)
                .road_probability(*probability)
                .extent(*extent);
            if let Some(seed) = seed {
                builder = builder.seed(*seed);
            }
            bcm::write(&builder.build()?, out)?;
            return Ok(ExitCode::Success);
        }
    };

    let inputs = inputs(files);
    if inputs.contains(&Input::Stdin) && cli.format.is_none() {
        return Err(ToolError::Usage("you must specify a format if reading from stdin".to_string()));
    }

    let mut exit_code = ExitCode::Success;
    for input in &inputs {
        let code = match run_task(cli, query, input, out) {
            Ok(code) => code,
            Err(e) => {
                tracing::debug!(input = ?input, error = %e, "task failed");
                eprintln!("error: {e}");
                e.exit_code()
            }
        };
        exit_code = exit_code.max(code);
    }
    Ok(exit_code)
}


/// Build the map of one input and route it with every selected algorithm
fn run_task<W: Write>(cli: &Cli, query: Query<'_>, input: &Input, out: &mut W) -> Result<ExitCode, ToolError> {
    let loaded = load(cli, input)?;
    if let Input::File(path) = input {
        writeln!(out, "-- {}", path.display())?;
    }

    let mut exit_code = ExitCode::Success;
    for &algorithm in &cli.algorithm.0 {
        let code = match run_algorithm(cli, query, &loaded, algorithm, out) {
            Ok(code) => code,
            Err(e @ ToolError::Map(_)) => {
                // a routing error only affects this algorithm
                eprintln!("error: {e}");
                e.exit_code()
            }
            Err(e) => return Err(e),
        };
        exit_code = exit_code.max(code);
    }
    Ok(exit_code)
}

fn load(cli: &Cli, input: &Input) -> Result<Loaded, ToolError> {
    let format = match (cli.format, input) {
        (Some(format), _) => format,
        (None, Input::File(path)) => Format::from_path(path)
            .ok_or_else(|| ToolError::Usage(format!("unknown file format: {}", path.display())))?,
        (None, Input::Stdin) => {
            return Err(ToolError::Usage("you must specify a format if reading from stdin".to_string()));
        }
    };

    let options = LoadOptions { format, diagonal: !cli.no_diagonal };
    let loaded = match input {
        Input::File(path) => options.load_path(path)?,
        Input::Stdin => options.load_reader(io::stdin().lock())?,
    };
    Ok(loaded)
}

fn run_algorithm<W: Write>(
    cli: &Cli,
    query: Query<'_>,
    loaded: &Loaded,
    algorithm: Algorithm,
    out: &mut W,
) -> Result<ExitCode, ToolError> {
    let route = solve(query, loaded, algorithm)?;

    writeln!(out, "-- {algorithm}")?;
    let exit_code = report(query, loaded, &route, out)?;

    if cli.time {
        let per_loop = time(cli.time_opts, || solve(query, loaded, algorithm).map(|_| ()))?;
        writeln!(
            out,
            "{:.2} ms per loop in best of {} runs of {} loops",
            per_loop.as_secs_f64() * 1000.0,
            cli.time_opts.repeat,
            cli.time_opts.number,
        )?;
    }
    Ok(exit_code)
}

/// Compute the route a query asks for
fn solve(query: Query<'_>, loaded: &Loaded, algorithm: Algorithm) -> Result<Route, ToolError> {
    let (origin, destination) = match query {
        Query::Path { from, to } => (from, to),
        Query::Solve | Query::Check => {
            let problem = loaded.problem.as_ref()
                .ok_or_else(|| ToolError::Usage("solve and check only work with ret input".to_string()))?;
            match (problem.start.as_deref(), problem.end.as_deref()) {
                (Some(start), Some(end)) => (start, end),
                _ => return Err(ToolError::MissingEnds),
            }
        }
    };
    Ok(algorithm.route(&loaded.map, origin, destination)?)
}

/// Print a route, and for checks whether it stays on the expected path
fn report<W: Write>(query: Query<'_>, loaded: &Loaded, route: &Route, out: &mut W) -> Result<ExitCode, ToolError> {
    let Query::Check = query else {
        writeln!(out, "Result path : {:?}", route.path)?;
        writeln!(out, "Total cost  : {}", route.cost)?;
        return Ok(ExitCode::Success);
    };

    let expected = match &loaded.problem {
        Some(problem) if !problem.expected.is_empty() => &problem.expected,
        _ => return Err(ToolError::MissingExpected),
    };

    if route.is_reachable() && route.path.iter().all(|city| expected.contains(city)) {
        writeln!(out, "OK.")?;
        return Ok(ExitCode::Success);
    }

    let mut expected: Vec<&String> = expected.iter().collect();
    expected.sort();
    writeln!(out, "FAILURE.")?;
    writeln!(out, "Algorithm result : {:?}", route.path)?;
    writeln!(out, "Expected result  : {:?}", expected)?;
    Ok(ExitCode::Failure)
}

/// Best time per loop over `repeat` runs of `number` loops
fn time<F>(opts: TimeOpts, mut task: F) -> Result<Duration, ToolError>
where
    F: FnMut() -> Result<(), ToolError>,
{
    let mut best = Duration::MAX;
    for _ in 0..opts.repeat {
        let start = Instant::now();
        for _ in 0..opts.number {
            task()?;
        }
        best = best.min(start.elapsed());
    }
    Ok(best / opts.number)
}
