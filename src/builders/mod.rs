//! Builders that populate a [`Map`] from external sources
//!
//! - [`bcm`]: cities and roads listed one per line
//! - [`ret`]: a routing problem drawn on a grid
//! - [`random`]: randomly placed cities and roads

pub mod bcm;
pub mod ret;
pub mod random;

use crate::errors::BuildError;
use crate::model::Map;

use std::{fmt, io::BufRead, path::Path, str::FromStr};

pub use random::RandomMapBuilder;
pub use ret::{RetBuilder, RetProblem};


/// Input formats
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    Bcm,
    Ret,
}

impl Format {

    pub const ALL: [Format; 2] = [Format::Bcm, Format::Ret];

    pub fn name(self) -> &'static str {
        match self {
            Format::Bcm => "bcm",
            Format::Ret => "ret",
        }
    }

    /// Guess the format of a file from its extension, case insensitive
    pub fn from_path(path: &Path) -> Option<Format> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        extension.parse().ok()
    }
}

impl FromStr for Format {
    type Err = String;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Format::ALL
            .into_iter()
            .find(|format| format.name() == name)
            .ok_or_else(|| format!("unknown format: {name}"))
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}


/// A built map, with the routing problem for formats that carry one
#[derive(Clone, Debug)]
pub struct Loaded {
    pub map: Map,
    pub problem: Option<RetProblem>,
}

/// Options shared by every loader
#[derive(Clone, Copy, Debug)]
pub struct LoadOptions {
    pub format: Format,
    pub diagonal: bool, // RET only
}

impl LoadOptions {

    pub fn new(format: Format) -> Self {
        Self { format, diagonal: true }
    }

    /// Build from a file
    pub fn load_path(&self, path: impl AsRef<Path>) -> Result<Loaded, BuildError> {
        match self.format {
            Format::Bcm => Ok(Loaded { map: bcm::from_path(path)?, problem: None }),
            Format::Ret => {
                let (map, problem) = RetBuilder::new().diagonal(self.diagonal).build_file(path)?;
                Ok(Loaded { map, problem: Some(problem) })
            }
        }
    }

    /// Build from a stream, such as stdin
    pub fn load_reader<R: BufRead>(&self, reader: R) -> Result<Loaded, BuildError> {
        match self.format {
            Format::Bcm => Ok(Loaded { map: bcm::from_reader(reader)?, problem: None }),
            Format::Ret => {
                let (map, problem) = RetBuilder::new().diagonal(self.diagonal).build_reader(reader)?;
                Ok(Loaded { map, problem: Some(problem) })
            }
        }
    }
}
