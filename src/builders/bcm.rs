//! BCM format
//!
//! ```text
//! # Comment
//!
//! [Cities]
//! <city name>, <x>, <y>
//! ...
//!
//! [Roads]
//! <city name>, <city name>
//! ...
//! ```
//!
//! Comments and blank lines can appear at any position. Cities must come
//! before the roads that use them.

use crate::errors::BuildError;
use crate::model::Map;

use std::{fs, io::{self, BufRead, ErrorKind, Write}, path::Path};


#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Section {
    Cities,
    Roads,
}


/// Build a map from BCM text
pub fn from_str(text: &str) -> Result<Map, BuildError> {
    let mut builder = BcmBuilder::default();
    for (index, line) in text.lines().enumerate() {
        builder.line(index + 1, line)?;
    }
    Ok(builder.finish())
}

/// Build a map from a stream of BCM text
pub fn from_reader<R: BufRead>(reader: R) -> Result<Map, BuildError> {
    let mut builder = BcmBuilder::default();
    for (index, line) in reader.lines().enumerate() {
        builder.line(index + 1, &line?)?;
    }
    Ok(builder.finish())
}

/// Build a map from a BCM file
pub fn from_path(path: impl AsRef<Path>) -> Result<Map, BuildError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)
        .map_err(|source| BuildError::File { path: path.to_path_buf(), source })?;
    from_str(&text)
}


/// Line by line BCM reader
#[derive(Default)]
struct BcmBuilder {
    map: Map,
    section: Option<Section>,
}

impl BcmBuilder {

    fn line(&mut self, line_number: usize, line: &str) -> Result<(), BuildError> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(());
        }

        let lower = line.to_lowercase();
        if lower.starts_with("[cities]") {
            self.section = Some(Section::Cities);
            return Ok(());
        }
        if lower.starts_with("[roads]") {
            self.section = Some(Section::Roads);
            return Ok(());
        }

        match self.section {
            Some(Section::Cities) => {
                let items: Vec<&str> = line.split(',').collect();
                let [name, x, y] = items[..] else {
                    return Err(BuildError::WrongItemCount { line: line_number });
                };
                let (Ok(x), Ok(y)) = (x.trim().parse::<f64>(), y.trim().parse::<f64>()) else {
                    return Err(BuildError::WrongFormat { line: line_number });
                };
                self.map.create_city(name.trim(), x, y)
                    .map_err(|source| BuildError::Map { line: line_number, source })?;
            }
            Some(Section::Roads) => {
                let items: Vec<&str> = line.split(',').collect();
                let [name_1, name_2] = items[..] else {
                    return Err(BuildError::WrongItemCount { line: line_number });
                };
                self.map.create_road(name_1.trim(), name_2.trim())
                    .map_err(|source| BuildError::Map { line: line_number, source })?;
            }
            // anything before the first section is ignored
            None => {}
        }
        Ok(())
    }

    fn finish(self) -> Map {
        tracing::debug!(
            format = "bcm",
            cities = self.map.city_count(),
            roads = self.map.road_count(),
            "map built"
        );
        self.map
    }
}


/// Write a map as BCM text
/// Roads are written in creation order, so reading the output back yields the same map.
/// Fails with `InvalidInput`, before writing anything, if a city name could not be read back.
pub fn write<W: Write>(map: &Map, mut writer: W) -> io::Result<()> {
    if let Some(city) = map.cities().find(|city| !is_writable(city.name())) {
        return Err(io::Error::new(
            ErrorKind::InvalidInput,
            format!("city name cannot be written as bcm: {:?}", city.name()),
        ));
    }

    // the title is a comment, only the first line is kept
    if let Some(name) = map.name().and_then(|name| name.lines().next()) {
        writeln!(writer, "# {name}")?;
    }

    writeln!(writer, "[Cities]")?;
    for city in map.cities() {
        writeln!(writer, "{}, {}, {}", city.name(), city.x(), city.y())?;
    }

    writeln!(writer)?;
    writeln!(writer, "[Roads]")?;
    for road in map.roads() {
        writeln!(writer, "{}, {}", road.city_1().name(), road.city_2().name())?;
    }
    Ok(())
}

/// A name survives a BCM line: no separator, no line break, no surrounding
/// blanks, and not mistaken for a comment or a section header
fn is_writable(name: &str) -> bool {
    let lower = name.to_lowercase();
    name == name.trim()
        && !name.contains([',', '\n', '\r'])
        && !name.starts_with('#')
        && !lower.starts_with("[cities]")
        && !lower.starts_with("[roads]")
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::MapError;

    const SAMPLE: &str = "
        # A sample map

        [cities]
        A, 0.5, -1.2
        B, -3.2, 0.8
        C, 5, 5

        [roads]
        A, B
        B, C
        ";

    #[test]
    fn test_works_with_correct_input() {
        let map = from_str(SAMPLE).unwrap();
        assert_eq!(map.city_count(), 3);
        assert_eq!(map.road_count(), 2);

        let city = map.city("B").unwrap();
        assert_eq!((city.name(), city.x(), city.y()), ("B", -3.2, 0.8));
        assert_eq!(city.roads().len(), 2);
    }

    #[test]
    fn test_from_reader_matches_from_str() {
        let map = from_reader(SAMPLE.as_bytes()).unwrap();
        assert_eq!(map.city_count(), 3);
        assert_eq!(map.road_count(), 2);
    }

    #[test]
    fn test_headers_are_case_insensitive() {
        let map = from_str("[CITIES]\nA, 0, 0\nB, 1, 0\n[Roads]\nA, B\n").unwrap();
        assert_eq!(map.road_count(), 1);
    }

    #[test]
    fn test_lines_before_a_section_are_ignored() {
        let map = from_str("stray text\n[cities]\nA, 0, 0\n").unwrap();
        assert_eq!(map.city_count(), 1);
    }

    #[test]
    fn test_wrong_number_of_items() {
        let err = from_str("[cities]\nA, 0\n").unwrap_err();
        assert!(matches!(err, BuildError::WrongItemCount { line: 2 }));

        let err = from_str("[cities]\nA, 0, 0\n[roads]\nA\n").unwrap_err();
        assert!(matches!(err, BuildError::WrongItemCount { line: 4 }));
    }

    #[test]
    fn test_wrong_coordinate_format() {
        let err = from_str("\n[cities]\nA, zero, 0\n").unwrap_err();
        assert!(matches!(err, BuildError::WrongFormat { line: 3 }));
    }

    #[test]
    fn test_model_errors_carry_the_line() {
        let err = from_str("[cities]\nA, 0, 0\n[roads]\nA, B\n").unwrap_err();
        match err {
            BuildError::Map { line, source } => {
                assert_eq!(line, 4);
                assert_eq!(source, MapError::UnknownCity("B".to_string()));
            }
            other => panic!("unexpected error: {other}"),
        }

        let err = from_str("[cities]\nA, 0, 0\nA, 1, 1\n").unwrap_err();
        assert!(matches!(err, BuildError::Map { line: 3, source: MapError::DuplicateName(_) }));
    }

    #[test]
    fn test_write_then_read() {
        let map = from_str(SAMPLE).unwrap();

        let mut out = Vec::new();
        write(&map, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("[Cities]\nA, 0.5, -1.2\n"));
        assert!(text.ends_with("[Roads]\nA, B\nB, C\n"));

        let again = from_str(&text).unwrap();
        let roads: Vec<_> = again.roads().map(|r| (r.city_1().name(), r.city_2().name())).collect();
        assert_eq!(roads, vec![("A", "B"), ("B", "C")]);
        assert_eq!(again.city("C").unwrap().location(), map.city("C").unwrap().location());
    }

    #[test]
    fn test_write_rejects_names_that_cannot_be_read_back() {
        for name in ["a,b", "#c", " d ", "[Roads] e", "f\ng"] {
            let mut map = Map::new();
            map.create_city("A", 0.0, 0.0).unwrap();
            map.create_city(name, 1.0, 1.0).unwrap();

            let mut out = Vec::new();
            let err = write(&map, &mut out).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidInput, "{name:?}");
            assert!(out.is_empty());
        }
    }

    #[test]
    fn test_write_keeps_unusual_but_valid_names() {
        let mut map = Map::with_name("two\nlines");
        map.create_city("São Paulo", 0.0, 0.0).unwrap();
        map.create_city("x:-1 [old]", 3.0, 4.0).unwrap();
        map.create_road("São Paulo", "x:-1 [old]").unwrap();

        let mut out = Vec::new();
        write(&map, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("# two\n[Cities]\n"));

        let again = from_str(&text).unwrap();
        assert_eq!(again.city("x:-1 [old]").unwrap().distance_to(&again.city("São Paulo").unwrap()), 5.0);
        assert_eq!(again.road_count(), 1);
    }
}
