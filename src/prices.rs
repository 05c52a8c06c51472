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

use regex::{NoExpand, Regex};

use crate::page::{Edit, LocationPage};

pub const PRICE_INFO: &str = include_str!("templates/price_info.html");

const INFO_PATTERN: &str = r#"(?s)<div class="location-hero__info">.*?</div>\s*</div>"#;

/// Replaces the hero's price items with a single pointer to the checkout.
#[derive(Clone, Debug)]
pub struct PriceFix {
    pattern: Regex,
}

impl PriceFix {
    /// # Errors
    ///
    /// If the info pattern doesn't compile.
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: Regex::new(INFO_PATTERN)?,
        })
    }

    #[must_use]
    pub fn edit(&self, _page: &LocationPage, html: &str) -> Edit {
        if self.pattern.is_match(html) {
            Edit::Rewrite(
                self.pattern
                    .replace_all(html, NoExpand(PRICE_INFO))
                    .into_owned(),
            )
        } else {
            Edit::Skip("no hero info block".to_string())
        }
    }
}
