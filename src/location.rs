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

use std::{collections::BTreeMap, fmt, fs, path::Path};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::province::Province;

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum LocationKind {
    /// Hoofdgemeente
    Main,
    /// Deelgemeente
    #[default]
    Sub,
}

impl fmt::Display for LocationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Main => write!(f, "Hoofdgemeente"),
            Self::Sub => write!(f, "Deelgemeente"),
        }
    }
}

/// Anything but `Hoofdgemeente` is a Deelgemeente.
impl From<&str> for LocationKind {
    fn from(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("hoofdgemeente") {
            Self::Main
        } else {
            Self::Sub
        }
    }
}

/// One entry of the location index.
///
/// A main municipality has no `parent`. A sub-municipality shares the slug of
/// its main municipality and names it in `parent`.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct Location {
    pub name: String,
    pub slug: String,
    pub postal_codes: Vec<String>,
    pub parent: Option<String>,
}

impl Location {
    #[must_use]
    pub fn is_main(&self) -> bool {
        self.parent.is_none()
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.postal_codes.join(", "))?;

        if let Some(parent) = &self.parent {
            write!(f, " -> {parent}")?;
        }

        Ok(())
    }
}

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct LocationIndex {
    #[serde(rename = "west-vlaanderen")]
    pub west_vlaanderen: Vec<Location>,
    #[serde(rename = "oost-vlaanderen")]
    pub oost_vlaanderen: Vec<Location>,
}

impl LocationIndex {
    /// # Errors
    ///
    /// If the file can't be read or isn't a location index.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("reading the location index {}", path.display()))?;

        Self::from_json(&json).with_context(|| format!("parsing {}", path.display()))
    }

    /// # Errors
    ///
    /// If the JSON isn't a location index.
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// # Errors
    ///
    /// If serialization fails.
    pub fn to_json(&self) -> anyhow::Result<String> {
        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');
        Ok(json)
    }

    /// # Errors
    ///
    /// If the file can't be written.
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        fs::write(path, self.to_json()?)
            .with_context(|| format!("writing the location index {}", path.display()))
    }

    #[must_use]
    pub fn province(&self, province: Province) -> &[Location] {
        match province {
            Province::WestVlaanderen => &self.west_vlaanderen,
            Province::OostVlaanderen => &self.oost_vlaanderen,
        }
    }

    pub fn province_mut(&mut self, province: Province) -> &mut Vec<Location> {
        match province {
            Province::WestVlaanderen => &mut self.west_vlaanderen,
            Province::OostVlaanderen => &mut self.oost_vlaanderen,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Location> {
        self.west_vlaanderen.iter().chain(self.oost_vlaanderen.iter())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.west_vlaanderen.len() + self.oost_vlaanderen.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Slug to name of every main municipality, ordered by slug.
    #[must_use]
    pub fn main_municipalities(&self) -> BTreeMap<String, String> {
        self.iter()
            .filter(|location| location.is_main())
            .map(|location| (location.slug.clone(), location.name.clone()))
            .collect()
    }

    /// The main municipality with this slug and the province it is listed in.
    #[must_use]
    pub fn find_main(&self, slug: &str) -> Option<(&Location, Province)> {
        [Province::WestVlaanderen, Province::OostVlaanderen]
            .into_iter()
            .find_map(|province| {
                self.province(province)
                    .iter()
                    .find(|location| location.is_main() && location.slug == slug)
                    .map(|location| (location, province))
            })
    }

    pub fn sub_municipalities<'a>(&'a self, slug: &'a str) -> impl Iterator<Item = &'a Location> {
        self.iter()
            .filter(move |location| location.slug == slug && !location.is_main())
    }
}
