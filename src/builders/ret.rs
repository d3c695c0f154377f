//! RET format: routing problems drawn on a grid
//!
//! ```text
//! |$     x   |
//! |@@    x o |
//! | @@@@@x   |
//! |     @@@# |
//! ```
//!
//! Every character between the bars is a city, except `x` which is an
//! obstacle. Cities are named `"<x>:<y>"` after their coordinates, measured
//! from the `o` cell (or the top-left cell without one) with y growing upwards.
//! Neighbouring cells are joined by roads, diagonals included by default.
//!
//! Markers: `o` origin of coordinates, `$` start, `#` end, `@` a city on
//! the expected shortest path.

use crate::errors::{BuildError, MapError};
use crate::collections::FxIndexSet;
use crate::model::Map;

use std::{fs, io::BufRead, path::Path};


const OBSTACLE: char = 'x';
const ORIGIN: char = 'o';
const START: char = '$';
const END: char = '#';
const EXPECTED: char = '@';


/// The routing problem carried by a RET document
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RetProblem {
    /// (column, row) of the origin of coordinates in the grid
    pub origin: (usize, usize),
    pub start: Option<String>,
    pub end: Option<String>,
    /// Cities the shortest path may go through, start and end included
    pub expected: FxIndexSet<String>,
}


/// Builds a map and its routing problem from RET text
#[derive(Clone, Copy, Debug)]
pub struct RetBuilder {
    diagonal: bool,
}

impl Default for RetBuilder {
    fn default() -> Self {
        Self { diagonal: true }
    }
}

impl RetBuilder {

    pub fn new() -> Self {
        Self::default()
    }

    /// Join diagonal neighbours with roads too (on by default)
    pub fn diagonal(mut self, diagonal: bool) -> Self {
        self.diagonal = diagonal;
        self
    }

    pub fn build_str(&self, text: &str) -> Result<(Map, RetProblem), BuildError> {
        let lines = text.lines().enumerate().map(|(index, line)| (index + 1, line.to_string()));
        self.build_rows(grid_rows(lines))
    }

    pub fn build_reader<R: BufRead>(&self, reader: R) -> Result<(Map, RetProblem), BuildError> {
        let mut lines = Vec::new();
        for (index, line) in reader.lines().enumerate() {
            lines.push((index + 1, line?));
        }
        self.build_rows(grid_rows(lines))
    }

    pub fn build_file(&self, path: impl AsRef<Path>) -> Result<(Map, RetProblem), BuildError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .map_err(|source| BuildError::File { path: path.to_path_buf(), source })?;
        self.build_str(&text)
    }

    fn build_rows(&self, rows: Vec<GridRow>) -> Result<(Map, RetProblem), BuildError> {
        let mut problem = RetProblem::default();

        // The origin has to be known before any city can be named
        let mut origin_line = None;
        for (r, row) in rows.iter().enumerate() {
            for (c, &cell) in row.cells.iter().enumerate() {
                if cell == ORIGIN {
                    if origin_line.is_some() {
                        return Err(BuildError::DuplicateMarker { line: row.line, marker: ORIGIN });
                    }
                    origin_line = Some(row.line);
                    problem.origin = (c, r);
                }
            }
        }

        let origin = problem.origin;
        let name = |c: usize, r: usize| {
            let x = c as i64 - origin.0 as i64;
            let y = origin.1 as i64 - r as i64;
            (format!("{x}:{y}"), x as f64, y as f64)
        };

        let mut map = Map::new();
        let mut start = None;
        let mut end = None;
        for (r, row) in rows.iter().enumerate() {
            for (c, &cell) in row.cells.iter().enumerate() {
                if cell == OBSTACLE {
                    continue;
                }

                let (city, x, y) = name(c, r);
                map.create_city(&city, x, y)
                    .map_err(|source| BuildError::Map { line: row.line, source })?;

                let marker = match cell {
                    START => &mut start,
                    END => &mut end,
                    EXPECTED => {
                        problem.expected.insert(city);
                        continue;
                    }
                    _ => continue,
                };
                if marker.is_some() {
                    return Err(BuildError::DuplicateMarker { line: row.line, marker: cell });
                }
                *marker = Some(city);
            }
        }

        // start and end are always part of the expected path
        problem.start = start;
        problem.end = end;
        problem.expected.extend(problem.start.iter().chain(problem.end.iter()).cloned());

        // Roads, row-major: right, down, down-right, down-left
        let mut steps = vec![(1, 0), (0, 1)];
        if self.diagonal {
            steps.extend([(1, 1), (-1, 1)]);
        }
        let is_city = |c: usize, r: usize| {
            rows.get(r).and_then(|row| row.cells.get(c)).is_some_and(|&cell| cell != OBSTACLE)
        };
        for (r, row) in rows.iter().enumerate() {
            for c in 0..row.cells.len() {
                if !is_city(c, r) {
                    continue;
                }
                for &(dc, dr) in &steps {
                    let Some(nc) = c.checked_add_signed(dc) else {
                        continue;
                    };
                    let nr = r + dr;
                    if !is_city(nc, nr) {
                        continue;
                    }
                    map.create_road(&name(c, r).0, &name(nc, nr).0)
                        .map_err(|source: MapError| BuildError::Map { line: row.line, source })?;
                }
            }
        }

        tracing::debug!(
            format = "ret",
            cities = map.city_count(),
            roads = map.road_count(),
            start = ?problem.start,
            end = ?problem.end,
            "map built"
        );
        Ok((map, problem))
    }
}


/// One line of the grid, with its line number in the source
struct GridRow {
    line: usize,
    cells: Vec<char>,
}

/// Keep the lines that are grid rows: everything between the first and last bar
fn grid_rows<I>(lines: I) -> Vec<GridRow>
where
    I: IntoIterator<Item = (usize, String)>,
{
    lines
        .into_iter()
        .filter_map(|(line, text)| {
            let text = text.trim();
            let inner = text.strip_prefix('|')?;
            let inner = match inner.rfind('|') {
                Some(end) => &inner[..end],
                None => inner,
            };
            Some(GridRow { line, cells: inner.chars().collect() })
        })
        .collect()
}
