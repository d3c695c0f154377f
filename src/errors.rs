use std::path::PathBuf;
use thiserror::Error;


/// Errors raised by the map model and the routing functions
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MapError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String), // missing or empty required field

    #[error("name already exists: {0}")]
    DuplicateName(String),

    #[error("road already exists between {0} and {1}")]
    DuplicateRoad(String, String),

    #[error("unknown city: {0}")]
    UnknownCity(String),

    #[error("city {city} does not belong to road {city_1} - {city_2}")]
    NotAMember {
        city: String,
        city_1: String,
        city_2: String,
    },

    #[error("pop from an empty priority queue")]
    EmptyQueue, // internal queue misuse
}

/// Errors raised by the priority queue
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueError {
    #[error("pop from an empty priority queue")]
    Empty,
}

impl From<QueueError> for MapError {
    fn from(error: QueueError) -> Self {
        match error {
            QueueError::Empty => MapError::EmptyQueue,
        }
    }
}

/// Errors raised while building a map from text input
/// Line numbers are 1-based
#[derive(Error, Debug)]
pub enum BuildError {
    #[error("wrong number of items at line {line}")]
    WrongItemCount { line: usize },

    #[error("wrong format at line {line}")]
    WrongFormat { line: usize },

    #[error("duplicate '{marker}' marker at line {line}")]
    DuplicateMarker { line: usize, marker: char },

    #[error("{source} (line {line})")]
    Map {
        line: usize,
        #[source]
        source: MapError,
    },

    #[error("cannot read {path:?}: {source}")]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Algorithm name not found in the registry
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown algorithm: {0}")]
pub struct UnknownAlgorithm(pub String);


#[cfg(test)]
mod tests {
    use super::*;
    use crate::collections::PriorityQueue;

    #[test]
    fn test_queue_error_converts_to_empty_queue() {
        assert_eq!(MapError::from(QueueError::Empty), MapError::EmptyQueue);

        // `?` on an empty queue inside a routing function
        let pop = || -> Result<u8, MapError> {
            let mut queue = PriorityQueue::<u8, f64>::new();
            Ok(queue.pop()?.0)
        };
        assert_eq!(pop(), Err(MapError::EmptyQueue));
    }

    #[test]
    fn test_build_error_carries_the_line() {
        let err = BuildError::Map { line: 7, source: MapError::UnknownCity("Z".to_string()) };
        assert_eq!(err.to_string(), "unknown city: Z (line 7)");
    }
}
