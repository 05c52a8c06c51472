// This file is part of tafel-locaties.
//
// tafel-locaties is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// tafel-locaties is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Builds the location index from the municipality dataset.
//!
//! The dataset has one row per (postal code, place) with the columns
//! `Provincie, Postcode, Naam, Type, Hoofdgemeente`. It is tab separated when
//! exported from a spreadsheet and comma separated otherwise.

use std::{
    fmt, fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use chrono::{DateTime, Local};
use csv::{ReaderBuilder, StringRecord, Trim};
use log::{debug, warn};
use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::{
    location::{Location, LocationIndex, LocationKind},
    province::Province,
    slug::{slugify, title_case},
};

/// How many bytes are looked at to decide between tabs and commas.
const SNIFF_LEN: usize = 1_024;

pub const COLUMN_FORMAT: &str = "Provincie, Postcode, Naam, Type, Hoofdgemeente";

#[derive(Error, Debug)]
pub enum ImportError {
    #[error("import: the csv file {0} doesn't exist")]
    MissingCsv(PathBuf),
    #[error("import: {0}")]
    Csv(#[from] csv::Error),
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Column {
    Province,
    PostalCode,
    Name,
    Type,
    ParentGroup,
}

impl Column {
    const ALL: [Column; 5] = [
        Self::Province,
        Self::PostalCode,
        Self::Name,
        Self::Type,
        Self::ParentGroup,
    ];

    fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::Province => &["Provincie", "provincie", "Province"],
            Self::PostalCode => &["Postcode", "postcode", "PostalCode"],
            Self::Name => &["Naam", "naam", "Name", "plaats", "Plaats"],
            Self::Type => &["Type", "type"],
            Self::ParentGroup => &["Hoofdgemeente", "hoofdgemeente", "MainMunicipality"],
        }
    }

    /// The column's place in a headerless file.
    fn position(self) -> usize {
        match self {
            Self::Province => 0,
            Self::PostalCode => 1,
            Self::Name => 2,
            Self::Type => 3,
            Self::ParentGroup => 4,
        }
    }
}

/// Where each column's value may come from, in order of preference.
#[derive(Clone, Debug, Default)]
struct Layout(Vec<Vec<usize>>);

impl Layout {
    fn from_headers(headers: &StringRecord) -> Self {
        Layout(
            Column::ALL
                .iter()
                .map(|column| {
                    column
                        .aliases()
                        .iter()
                        .filter_map(|alias| headers.iter().position(|header| header == *alias))
                        .collect()
                })
                .collect(),
        )
    }

    fn positional() -> Self {
        Layout(
            Column::ALL
                .iter()
                .map(|column| vec![column.position()])
                .collect(),
        )
    }

    fn value<'a>(&self, record: &'a StringRecord, column: Column) -> Option<&'a str> {
        self.0
            .get(column.position())?
            .iter()
            .filter_map(|i| record.get(*i))
            .find(|value| !value.is_empty())
    }

    fn row(&self, record: &StringRecord) -> Option<Row> {
        Some(Row {
            province: self.value(record, Column::Province)?.to_string(),
            postal_code: self.value(record, Column::PostalCode)?.to_string(),
            name: self.value(record, Column::Name)?.to_string(),
            kind: LocationKind::from(self.value(record, Column::Type)?),
            parent_group: self.value(record, Column::ParentGroup)?.to_string(),
        })
    }
}

/// One complete line of the dataset.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Row {
    pub province: String,
    pub postal_code: String,
    pub name: String,
    pub kind: LocationKind,
    pub parent_group: String,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ImportOptions {
    pub has_headers: bool,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self { has_headers: true }
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ImportReport {
    pub rows: usize,
    pub skipped: usize,
    pub west_vlaanderen: usize,
    pub oost_vlaanderen: usize,
}

impl ImportReport {
    #[must_use]
    pub fn total(&self) -> usize {
        self.west_vlaanderen + self.oost_vlaanderen
    }
}

impl fmt::Display for ImportReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "   West-Vlaanderen: {} locations", self.west_vlaanderen)?;
        writeln!(f, "   Oost-Vlaanderen: {} locations", self.oost_vlaanderen)?;
        write!(f, "   Total: {} locations", self.total())?;

        if self.skipped > 0 {
            write!(f, "\n   Skipped: {} of {} rows", self.skipped, self.rows)?;
        }

        Ok(())
    }
}

#[must_use]
pub fn sniff_delimiter(data: &str) -> u8 {
    if data.bytes().take(SNIFF_LEN).any(|byte| byte == b'\t') {
        b'\t'
    } else {
        b','
    }
}

/// Reads the complete rows of the dataset. Incomplete rows are logged and
/// counted in the second value.
///
/// # Errors
///
/// If the data isn't valid CSV.
pub fn read_rows(data: &str, options: ImportOptions) -> Result<(Vec<Row>, usize), ImportError> {
    let mut rdr = ReaderBuilder::new()
        .delimiter(sniff_delimiter(data))
        .has_headers(options.has_headers)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(data.as_bytes());

    let layout = if options.has_headers {
        Layout::from_headers(rdr.headers()?)
    } else {
        Layout::positional()
    };

    let mut rows = Vec::new();
    let mut skipped = 0;

    for (i, result) in rdr.records().enumerate() {
        let record = result?;

        if let Some(row) = layout.row(&record) {
            rows.push(row);
        } else {
            warn!("skipping incomplete row {}: {:?}", i + 1, record.iter().collect::<Vec<_>>());
            skipped += 1;
        }
    }

    Ok((rows, skipped))
}

/// The slug a parent group resolves to when no Hoofdgemeente row has named
/// it yet: the first segment of the group's own name, so
/// `BEVEREN-KRUIBEKE-ZWIJNDRECHT` becomes `beveren`.
fn fallback_slug(parent_group: &str) -> String {
    slugify(parent_group.split('-').next().unwrap_or_default())
}

/// Groups rows into locations keyed by (province, slug, name), merging their
/// postal codes.
///
/// Rows are read in file order. Every Hoofdgemeente row registers its slug for
/// its parent group, replacing an earlier one. A Deelgemeente row takes the
/// slug registered for its group so far, or registers the fallback slug.
#[must_use]
pub fn build_index(rows: &[Row]) -> LocationIndex {
    let mut slugs: FxHashMap<&str, String> = FxHashMap::default();
    let mut keys: FxHashMap<(String, String, String), usize> = FxHashMap::default();
    let mut locations: Vec<(Province, Location)> = Vec::new();

    for row in rows {
        let (slug, parent) = match row.kind {
            LocationKind::Main => {
                let slug = slugify(&row.name);
                slugs.insert(row.parent_group.as_str(), slug.clone());
                (slug, None)
            }
            LocationKind::Sub => (
                slugs
                    .entry(row.parent_group.as_str())
                    .or_insert_with(|| fallback_slug(&row.parent_group))
                    .clone(),
                Some(title_case(&row.parent_group)),
            ),
        };

        let key = (row.province.clone(), slug.clone(), row.name.clone());
        let i = *keys.entry(key).or_insert_with(|| {
            debug!("{} {}: {slug} in {}", row.kind, row.name, row.province);

            locations.push((
                Province::of(&row.province),
                Location {
                    name: row.name.clone(),
                    slug,
                    postal_codes: Vec::new(),
                    parent,
                },
            ));
            locations.len() - 1
        });

        if let Some((_, location)) = locations.get_mut(i)
            && !location.postal_codes.contains(&row.postal_code)
        {
            location.postal_codes.push(row.postal_code.clone());
        }
    }

    let mut index = LocationIndex::default();
    for (province, mut location) in locations {
        location.postal_codes.sort();
        index.province_mut(province).push(location);
    }

    index.west_vlaanderen.sort_by(|a, b| a.name.cmp(&b.name));
    index.oost_vlaanderen.sort_by(|a, b| a.name.cmp(&b.name));
    index
}

/// Parses the dataset and builds the location index from it.
///
/// # Errors
///
/// If the data isn't valid CSV.
pub fn import(data: &str, options: ImportOptions) -> Result<(LocationIndex, ImportReport), ImportError> {
    let (rows, skipped) = read_rows(data, options)?;
    let index = build_index(&rows);

    let report = ImportReport {
        rows: rows.len() + skipped,
        skipped,
        west_vlaanderen: index.west_vlaanderen.len(),
        oost_vlaanderen: index.oost_vlaanderen.len(),
    };

    Ok((index, report))
}

/// # Errors
///
/// If the dataset doesn't exist.
pub fn check_csv(path: &Path) -> Result<(), ImportError> {
    if path.exists() {
        Ok(())
    } else {
        Err(ImportError::MissingCsv(path.to_path_buf()))
    }
}

/// # Errors
///
/// If the file doesn't exist, can't be read, or isn't valid CSV.
pub fn import_file(
    path: &Path,
    options: ImportOptions,
) -> anyhow::Result<(LocationIndex, ImportReport)> {
    check_csv(path)?;

    let data = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    Ok(import(&data, options)?)
}

#[must_use]
pub fn backup_path(output: &Path, now: &DateTime<Local>) -> PathBuf {
    let mut path = output.as_os_str().to_owned();
    path.push(format!(".backup.{}", now.format("%Y%m%d_%H%M%S")));
    PathBuf::from(path)
}

/// Copies an existing index next to itself before it gets overwritten.
///
/// # Errors
///
/// If the copy fails.
pub fn backup(output: &Path, now: &DateTime<Local>) -> anyhow::Result<Option<PathBuf>> {
    if !output.exists() {
        return Ok(None);
    }

    let backup = backup_path(output, now);
    fs::copy(output, &backup)
        .with_context(|| format!("backing up {} to {}", output.display(), backup.display()))?;

    Ok(Some(backup))
}
