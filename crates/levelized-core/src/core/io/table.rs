use super::fields::FacilityField;
use crate::core::facility::input::{FacilityInput, NameValue};
use serde::Deserialize;
use std::io::Read;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("CSV parsing error for '{path}': {source}")]
    Csv { path: String, source: csv::Error },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
    #[error("Line {line}: column '{column}' holds '{value}', which is not a finite number")]
    InvalidNumber {
        line: u64,
        column: String,
        value: String,
    },
    #[error("Facility table '{0}' has no 'name' column")]
    MissingNameColumn(String),
    #[error("Line {0}: facility has no name")]
    MissingName(u64),
    #[error("Facility '{0}' is defined more than once")]
    DuplicateName(String),
    #[error("Unsupported facility table format for '{0}' (expected .csv or .toml)")]
    UnsupportedFormat(String),
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlTable {
    #[serde(default)]
    facility: Vec<FacilityInput>,
}

/// Facility definitions keyed by name, in the order they were read.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FacilityTable {
    entries: Vec<FacilityInput>,
}

impl FacilityTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a definition, rejecting a name that is already present.
    pub fn insert(&mut self, input: FacilityInput) -> Result<(), LoadError> {
        let name = input.display_name();
        if self.entries.iter().any(|e| e.display_name() == name) {
            return Err(LoadError::DuplicateName(name));
        }
        self.entries.push(input);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&FacilityInput> {
        self.entries.iter().find(|e| e.display_name() == name)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FacilityInput> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Loads a table, choosing the format from the file extension.
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match extension.as_deref() {
            Some("csv") => Self::load_csv(path),
            Some("toml") => Self::load_toml(path),
            _ => Err(LoadError::UnsupportedFormat(
                path.to_string_lossy().to_string(),
            )),
        }
    }

    pub fn load_csv(path: &Path) -> Result<Self, LoadError> {
        let origin = path.to_string_lossy().to_string();
        let file = std::fs::File::open(path).map_err(|e| LoadError::Io {
            path: origin.clone(),
            source: e,
        })?;
        Self::read_csv(file, &origin)
    }

    pub fn load_toml(path: &Path) -> Result<Self, LoadError> {
        let origin = path.to_string_lossy().to_string();
        let content = std::fs::read_to_string(path).map_err(|e| LoadError::Io {
            path: origin.clone(),
            source: e,
        })?;
        Self::parse_toml(&content, &origin)
    }

    /// Reads a CSV table with a header row.
    ///
    /// Empty cells are left absent. Unrecognized columns are skipped with a warning.
    pub fn read_csv(reader: impl Read, origin: &str) -> Result<Self, LoadError> {
        let csv_err = |e: csv::Error| LoadError::Csv {
            path: origin.to_string(),
            source: e,
        };
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = reader.headers().map_err(csv_err)?.clone();
        let mut columns = Vec::with_capacity(headers.len());
        for header in headers.iter() {
            let header = header.trim_start_matches('\u{feff}');
            let field = FacilityField::from_column(header);
            if field.is_none() {
                warn!("Ignoring unrecognized column '{}' in '{}'.", header, origin);
            }
            columns.push((header.to_string(), field));
        }
        if !columns
            .iter()
            .any(|(_, f)| *f == Some(FacilityField::Name))
        {
            return Err(LoadError::MissingNameColumn(origin.to_string()));
        }

        let mut table = Self::new();
        for record in reader.records() {
            let record = record.map_err(csv_err)?;
            let line = record.position().map_or(0, |p| p.line());
            let mut input = FacilityInput::default();
            let mut has_name = false;

            for ((column, field), cell) in columns.iter().zip(record.iter()) {
                let Some(field) = field else { continue };
                if cell.is_empty() {
                    continue;
                }
                if *field == FacilityField::Name {
                    input.name = parse_name_cell(cell);
                    has_name = true;
                    continue;
                }
                let value = cell
                    .parse::<f64>()
                    .ok()
                    .filter(|v| v.is_finite())
                    .ok_or_else(|| LoadError::InvalidNumber {
                        line,
                        column: column.clone(),
                        value: cell.to_string(),
                    })?;
                if let Some(slot) = field.slot_mut(&mut input) {
                    *slot = Some(value);
                }
            }

            if !has_name {
                return Err(LoadError::MissingName(line));
            }
            table.insert(input)?;
        }

        debug!("Loaded {} facilities from '{}'.", table.len(), origin);
        Ok(table)
    }

    /// Parses a TOML table made of `[[facility]]` entries.
    pub fn parse_toml(content: &str, origin: &str) -> Result<Self, LoadError> {
        let parsed: TomlTable = toml::from_str(content).map_err(|e| LoadError::Toml {
            path: origin.to_string(),
            source: e,
        })?;
        let mut table = Self::new();
        for input in parsed.facility {
            table.insert(input)?;
        }
        debug!("Loaded {} facilities from '{}'.", table.len(), origin);
        Ok(table)
    }

    pub fn names(&self) -> Vec<String> {
        self.entries.iter().map(FacilityInput::display_name).collect()
    }
}

impl<'a> IntoIterator for &'a FacilityTable {
    type Item = &'a FacilityInput;
    type IntoIter = std::slice::Iter<'a, FacilityInput>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// A name cell made only of digits, with at most one decimal point, is read as a number.
fn parse_name_cell(cell: &str) -> NameValue {
    let digits_only = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    if digits_only(cell) {
        if let Ok(i) = cell.parse::<i64>() {
            return NameValue::Integer(i);
        }
    }
    if cell.matches('.').count() == 1 && digits_only(&cell.replacen('.', "", 1)) {
        if let Ok(x) = cell.parse::<f64>() {
            return NameValue::Float(x);
        }
    }
    NameValue::Text(cell.to_string())
}
