//! Maintenance tools for the Tafel Totaal location pages.
//!
//! The library holds the shared pieces; every task is a small binary:
//!
//! * `import-locations` - build `all-locations.json` from the municipality dataset
//! * `fix-heroes` - rewrite the split-screen hero section of each location page
//! * `remove-prices` - replace the hero price block with the checkout note
//! * `add-submunicipalities` - add the "Deelgemeenten" section to main municipality pages
//! * `fix-location-headers` - swap the page module script for the inline component loader
//! * `add-cta` - put the shared CTA container on each page and load it
//! * `open-shop` - drop the CTA, point the hero at the products and use the site header
//!
//! ## Location Index
//!
//! The JSON written by the importer and read by the website has two keys,
//! `west-vlaanderen` and `oost-vlaanderen`, each a list of [`location::Location`]s.

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

#![deny(clippy::panic)]

pub mod cities;
pub mod cta;
pub mod hero;
pub mod import;
pub mod location;
pub mod page;
pub mod prices;
pub mod province;
pub mod scripts;
pub mod shop;
pub mod slug;
pub mod submunicipalities;
pub mod utils;

pub const LOCATION_PAGES_DIR: &str = "public/locaties";
pub const LOCATIONS_JSON: &str = "public/data/all-locations.json";
pub const LOCATIONS_CSV: &str = "import-data/locations.csv";

pub const COPYRIGHT: &str = r".SH COPYRIGHT
Copyright (C) 2025-2026 Developers of the tafel-locaties project

This program is free software: you can redistribute it and/or modify
it under the terms of the GNU Affero General Public License as published by
the Free Software Foundation, either version 3 of the License, or
(at your option) any later version.

This program is distributed in the hope that it will be useful,
but WITHOUT ANY WARRANTY; without even the implied warranty of
MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
GNU Affero General Public License for more details.

You should have received a copy of the GNU Affero General Public License
along with this program.  If not, see <https://www.gnu.org/licenses/>.
";

pub const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "
Copyright (c) 2025 Developers of the tafel-locaties project
Licensed under the AGPLv3"
);
