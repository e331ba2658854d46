//! Dataset loader - volcano CSV + world map raster
//!
//! Everything here runs once at startup. Any failure is fatal; the only
//! silent fallback is era normalization (see [`Era::from_code`]).

use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

use crate::era::Era;
use crate::geometry::{elevation_to_size, project_geo, MapRect, Point};

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Malformed CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("Line {line}: column '{column}' is not a number: '{value}'")]
    InvalidNumber {
        line: u64,
        column: &'static str,
        value: String,
    },
    #[error("Failed to decode map image {path}: {source}")]
    Image {
        path: PathBuf,
        source: image::ImageError,
    },
}

/// One volcano, immutable after load
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VolcanoRecord {
    pub name: String,
    pub country: String,
    pub location: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub category: String,
    pub status: String,
    pub last_eruption: Era,
    pub elevation: f64,
    pub latitude: f64,
    pub longitude: f64,
    /// Cached marker position, projected at load
    pub screen_x: f64,
    pub screen_y: f64,
}

impl VolcanoRecord {
    pub fn screen_pos(&self) -> Point {
        Point::new(self.screen_x, self.screen_y)
    }

    pub fn marker_size(&self) -> f64 {
        elevation_to_size(self.elevation)
    }

    /// Whether `pointer` lies strictly within the marker's radius
    pub fn contains(&self, pointer: Point) -> bool {
        pointer.distance(self.screen_pos()) < self.marker_size()
    }
}

/// Raw CSV row, column names as they appear in the dataset header
#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(rename = "Latitude")]
    latitude: String,
    #[serde(rename = "Longitude")]
    longitude: String,
    #[serde(rename = "Elevation (m)")]
    elevation: String,
    #[serde(rename = "Volcano Name")]
    name: String,
    #[serde(rename = "Country")]
    country: String,
    #[serde(rename = "Location")]
    location: String,
    #[serde(rename = "Type")]
    kind: String,
    #[serde(rename = "TypeCategory")]
    category: String,
    #[serde(rename = "Status")]
    status: String,
    #[serde(rename = "Last Known Eruption")]
    last_eruption: String,
}

fn parse_number(value: &str, column: &'static str, line: u64) -> Result<f64, LoadError> {
    value.trim().parse::<f64>().map_err(|_| LoadError::InvalidNumber {
        line,
        column,
        value: value.to_string(),
    })
}

impl RawRow {
    fn into_record(self, line: u64, map: &MapRect) -> Result<VolcanoRecord, LoadError> {
        let latitude = parse_number(&self.latitude, "Latitude", line)?;
        let longitude = parse_number(&self.longitude, "Longitude", line)?;
        let elevation = parse_number(&self.elevation, "Elevation (m)", line)?;
        let screen = project_geo(longitude, latitude, map);

        Ok(VolcanoRecord {
            name: self.name,
            country: self.country,
            location: self.location,
            kind: self.kind,
            category: self.category,
            status: self.status,
            last_eruption: Era::from_code(&self.last_eruption),
            elevation,
            latitude,
            longitude,
            screen_x: screen.x,
            screen_y: screen.y,
        })
    }
}

/// Parse volcano records from CSV, projecting each into `map`
pub fn load_records<R: Read>(reader: R, map: &MapRect) -> Result<Vec<VolcanoRecord>, LoadError> {
    let mut csv_reader = csv::ReaderBuilder::new().has_headers(true).from_reader(reader);
    let headers = csv_reader.headers()?.clone();

    let mut records = Vec::new();
    for row in csv_reader.records() {
        let row = row?;
        let line = row.position().map(|p| p.line()).unwrap_or(0);
        let raw: RawRow = row.deserialize(Some(&headers))?;
        records.push(raw.into_record(line, map)?);
    }

    let unknown = records
        .iter()
        .filter(|r| r.last_eruption == Era::Unknown)
        .count();
    debug!("Parsed {} records ({} with unknown era)", records.len(), unknown);
    Ok(records)
}

/// Load volcano records from a CSV file
pub fn load_records_from_path(path: &Path, map: &MapRect) -> Result<Vec<VolcanoRecord>, LoadError> {
    let file = std::fs::File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let records = load_records(std::io::BufReader::new(file), map)?;
    info!("Loaded {} volcanoes from {}", records.len(), path.display());
    Ok(records)
}

/// Decoded world map, RGBA8
#[derive(Clone)]
pub struct MapImage {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl std::fmt::Debug for MapImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MapImage")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}

impl MapImage {
    fn from_dynamic(image: image::DynamicImage) -> Self {
        let rgba = image.to_rgba8();
        Self {
            width: rgba.width(),
            height: rgba.height(),
            rgba: rgba.into_raw(),
        }
    }

    /// Decode an in-memory image; the format is sniffed from the bytes
    pub fn from_bytes(bytes: &[u8], origin: &Path) -> Result<Self, LoadError> {
        image::load_from_memory(bytes)
            .map(Self::from_dynamic)
            .map_err(|source| LoadError::Image {
                path: origin.to_path_buf(),
                source,
            })
    }

    pub fn open(path: &Path) -> Result<Self, LoadError> {
        let bytes = std::fs::read(path).map_err(|source| LoadError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let image = Self::from_bytes(&bytes, path)?;
        info!("Loaded map image {} ({}x{})", path.display(), image.width, image.height);
        Ok(image)
    }
}
