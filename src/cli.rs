//! CLI argument parsing for citymaps

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use citymaps::Algorithm;
use citymaps::builders::Format;


/// citymaps - shortest paths over maps of cities and roads
#[derive(Parser, Debug)]
#[command(name = "citymaps")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Algorithm to be used: a-star, dij-o (Dijkstra's original), dij-pq
    /// (Dijkstra with priority queue) or all
    #[arg(
        short,
        long,
        global = true,
        env = "CITYMAPS_ALGORITHM",
        default_value = "a-star",
        value_parser = parse_algorithms
    )]
    pub algorithm: Algorithms,

    /// Input format (bcm or ret), guessed from the file extension if omitted.
    /// Required when reading from stdin
    #[arg(short, long, global = true)]
    pub format: Option<Format>,

    /// Do not join diagonal neighbours in ret grids
    #[arg(long, global = true)]
    pub no_diagonal: bool,

    /// Report elapsed time for each task
    #[arg(short, long, global = true)]
    pub time: bool,

    /// Timer options, in the form <repeat>:<number>
    #[arg(long, global = true, default_value = "3:100", value_parser = parse_time_opts)]
    pub time_opts: TimeOpts,

    /// Log debug events
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log filter, a level (warn, debug...) or a tracing directive
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute shortest path between two cities, map taken from the input
    Path {
        /// Origin city
        from: String,

        /// Destination city
        to: String,

        /// Input files, stdin if none or -
        #[arg(value_name = "FILE")]
        files: Vec<PathBuf>,
    },

    /// Compute the routing problem described by each ret input
    Solve {
        /// Input files, stdin if none or -
        #[arg(value_name = "FILE")]
        files: Vec<PathBuf>,
    },

    /// Compute and check the routing problem described by each ret input
    Check {
        /// Input files, stdin if none or -
        #[arg(value_name = "FILE")]
        files: Vec<PathBuf>,
    },

    /// Print a random map in bcm format
    Generate {
        /// Number of cities
        #[arg(long, default_value_t = 20)]
        cities: usize,

        /// Chance of a road between any two cities
        #[arg(long, default_value_t = 0.2)]
        probability: f64,

        /// Cities are placed within [-extent, extent] on both axes
        #[arg(long, default_value_t = 100.0)]
        extent: f64,

        /// Seed for a reproducible map
        #[arg(long)]
        seed: Option<u64>,
    },
}


/// Algorithms selected with --algorithm
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Algorithms(pub Vec<Algorithm>);

fn parse_algorithms(name: &str) -> Result<Algorithms, String> {
    if name == "all" {
        return Ok(Algorithms(Algorithm::ALL.to_vec()));
    }
    name.parse::<Algorithm>()
        .map(|algorithm| Algorithms(vec![algorithm]))
        .map_err(|e| e.to_string())
}


/// Timer options: `repeat` runs of `number` loops each
/// `number` divides a `Duration`, hence `u32`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimeOpts {
    pub repeat: usize,
    pub number: u32,
}

fn parse_time_opts(value: &str) -> Result<TimeOpts, String> {
    let wrong = || format!("wrong timer options: {value} (expected <repeat>:<number>)");
    let (repeat, number) = value.split_once(':').ok_or_else(wrong)?;
    let repeat = repeat.trim().parse::<usize>().map_err(|_| wrong())?;
    let number = number.trim().parse::<u64>().map_err(|_| wrong())?;
    let number = u32::try_from(number).map_err(|_| wrong())?;
    if repeat == 0 || number == 0 {
        return Err(wrong());
    }
    Ok(TimeOpts { repeat, number })
}


#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_algorithms() {
        assert_eq!(parse_algorithms("dij-pq"), Ok(Algorithms(vec![Algorithm::DijkstraPriorityQueue])));
        assert_eq!(parse_algorithms("all").unwrap().0.len(), 3);
        assert!(parse_algorithms("bfs").is_err());
    }

    #[test]
    fn test_parse_time_opts() {
        assert_eq!(parse_time_opts("3:100"), Ok(TimeOpts { repeat: 3, number: 100 }));
        assert!(parse_time_opts("3").is_err());
        assert!(parse_time_opts("a:b").is_err());
        assert!(parse_time_opts("0:10").is_err());
        assert!(parse_time_opts("1:0").is_err());
    }

    #[test]
    fn test_time_opts_number_fits_a_duration_divisor() {
        assert_eq!(parse_time_opts("1:4294967295").unwrap().number, u32::MAX);
        assert!(parse_time_opts("1:4294967296").is_err());
        assert!(parse_time_opts("1:8589934592").is_err());

        let err = Cli::try_parse_from(["citymaps", "--time-opts", "1:4294967296", "solve"]).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_global_options_after_subcommand() {
        let cli = Cli::try_parse_from(["citymaps", "solve", "maze.ret", "-a", "all", "-t"]).unwrap();
        assert_eq!(cli.algorithm.0, Algorithm::ALL.to_vec());
        assert!(cli.time);
        assert_eq!(cli.time_opts, TimeOpts { repeat: 3, number: 100 });
        assert!(matches!(cli.command, Commands::Solve { ref files } if files.len() == 1));
    }
}
