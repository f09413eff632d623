//! Node records from delimited text.
//!
//! The input has a header row and one node per line:
//!
//! ```text
//! id,latitude,longitude
//! tower-1,52.5200,13.4050
//! ```
//!
//! Header names are matched case-insensitively and a few aliases are
//! accepted. Malformed records are skipped with a warning rather than
//! failing the whole load.

use crate::error::{Error, Result};
use beacon_alloc::Node;
use csv::{ReaderBuilder, StringRecord, Trim};
use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::PathBuf;
use tracing::{debug, info, warn};

const ID_COLUMNS: &[&str] = &["id", "name", "node"];
const LAT_COLUMNS: &[&str] = &["lat", "latitude"];
const LON_COLUMNS: &[&str] = &["lon", "lng", "long", "longitude"];

/// Where nodes are read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// A CSV file on disk
    File(PathBuf),
    /// CSV on standard input
    Stdin,
    /// The built-in sample set
    Demo,
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Source::File(path) => write!(f, "{}", path.display()),
            Source::Stdin => f.write_str("<stdin>"),
            Source::Demo => f.write_str("<demo>"),
        }
    }
}

/// Counts from one load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoadReport {
    /// Records turned into nodes
    pub loaded: usize,
    /// Records rejected during cleaning
    pub skipped: usize,
}

/// Load nodes from a source.
pub fn load_nodes(source: &Source) -> Result<(Vec<Node>, LoadReport)> {
    info!(%source, "loading nodes");
    match source {
        Source::File(path) => read_nodes(File::open(path)?),
        Source::Stdin => read_nodes(std::io::stdin().lock()),
        Source::Demo => {
            let nodes = demo_nodes();
            let report = LoadReport {
                loaded: nodes.len(),
                skipped: 0,
            };
            Ok((nodes, report))
        }
    }
}

/// Column positions resolved from the header row.
#[derive(Debug, Clone, Copy)]
struct Columns {
    id: usize,
    lat: usize,
    lon: usize,
}

impl Columns {
    fn resolve(headers: &StringRecord) -> Result<Self> {
        let find = |aliases: &[&str], name: &'static str| {
            headers
                .iter()
                .position(|h| aliases.iter().any(|a| h.trim().eq_ignore_ascii_case(a)))
                .ok_or(Error::MissingColumn(name))
        };
        Ok(Self {
            id: find(ID_COLUMNS, "id")?,
            lat: find(LAT_COLUMNS, "latitude")?,
            lon: find(LON_COLUMNS, "longitude")?,
        })
    }
}

/// Why a record was rejected.
#[derive(Debug, Clone, PartialEq)]
enum Rejection {
    MissingField(&'static str),
    EmptyId,
    BadNumber(&'static str, String),
    OutOfRange(&'static str, f64),
    Duplicate(String),
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rejection::MissingField(field) => write!(f, "missing {}", field),
            Rejection::EmptyId => f.write_str("empty id"),
            Rejection::BadNumber(field, text) => write!(f, "{} {:?} is not a number", field, text),
            Rejection::OutOfRange(field, value) => write!(f, "{} {} out of range", field, value),
            Rejection::Duplicate(id) => write!(f, "duplicate id {:?}", id),
        }
    }
}

fn parse_degrees(text: &str, field: &'static str, limit: f64) -> std::result::Result<f64, Rejection> {
    let value: f64 = text
        .parse()
        .map_err(|_| Rejection::BadNumber(field, text.to_string()))?;
    if !value.is_finite() {
        return Err(Rejection::BadNumber(field, text.to_string()));
    }
    if !(-limit..=limit).contains(&value) {
        return Err(Rejection::OutOfRange(field, value));
    }
    Ok(value)
}

fn clean_record(
    record: &StringRecord,
    columns: Columns,
    seen: &HashSet<String>,
) -> std::result::Result<Node, Rejection> {
    let field = |index: usize, name: &'static str| {
        record.get(index).ok_or(Rejection::MissingField(name))
    };

    let id = field(columns.id, "id")?;
    if id.is_empty() {
        return Err(Rejection::EmptyId);
    }
    let lat = parse_degrees(field(columns.lat, "latitude")?, "latitude", 90.0)?;
    let lon = parse_degrees(field(columns.lon, "longitude")?, "longitude", 180.0)?;
    if seen.contains(id) {
        return Err(Rejection::Duplicate(id.to_string()));
    }
    Ok(Node::new(id, lat, lon))
}

/// Read and clean node records from any reader.
///
/// Fails if the header is unusable or no record survives cleaning.
pub fn read_nodes<R: Read>(reader: R) -> Result<(Vec<Node>, LoadReport)> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .flexible(true)
        .comment(Some(b'#'))
        .from_reader(reader);

    let columns = Columns::resolve(reader.headers()?)?;
    debug!(?columns, "resolved header");

    let mut nodes = Vec::new();
    let mut seen = HashSet::new();
    let mut report = LoadReport::default();

    for result in reader.records() {
        let record = match result {
            Ok(record) => record,
            Err(e) => {
                warn!(error = %e, "skipping unreadable record");
                report.skipped += 1;
                continue;
            }
        };
        let line = record.position().map_or(0, |p| p.line());

        // Blank lines come through as a single empty field
        if record.iter().all(str::is_empty) {
            continue;
        }

        match clean_record(&record, columns, &seen) {
            Ok(node) => {
                seen.insert(node.id().to_string());
                nodes.push(node);
                report.loaded += 1;
            }
            Err(reason) => {
                warn!(line, %reason, "skipping record");
                report.skipped += 1;
            }
        }
    }

    if nodes.is_empty() {
        return Err(Error::NoValidRecords {
            skipped: report.skipped,
        });
    }

    info!(loaded = report.loaded, skipped = report.skipped, "nodes loaded");
    Ok((nodes, report))
}

/// A small fixed layout: two dense clusters and a few isolated sites.
pub fn demo_nodes() -> Vec<Node> {
    vec![
        Node::new("berlin-mitte", 52.5200, 13.4050),
        Node::new("berlin-alex", 52.5219, 13.4132),
        Node::new("berlin-museum", 52.5169, 13.4019),
        Node::new("berlin-spree", 52.5186, 13.4081),
        Node::new("munich-marien", 48.1374, 11.5755),
        Node::new("munich-odeon", 48.1425, 11.5775),
        Node::new("munich-sendlinger", 48.1339, 11.5670),
        Node::new("hamburg-port", 53.5461, 9.9665),
        Node::new("cologne-dom", 50.9413, 6.9583),
    ]
}
