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

use regex::Regex;

use crate::page::{Edit, LocationPage};

/// Fetches the header, footer and CTA components inline instead of importing
/// their modules.
pub const LOCATION_SCRIPT: &str = include_str!("templates/location_script.html");

const MODULE_SCRIPT_PATTERN: &str = r#"(?s)<script type="module">.*?</script>"#;

const INLINE_GRID: &str = r#"<div id="submunicipalities-list" style="display: grid; grid-template-columns: repeat(auto-fill, minmax(200px, 1fr)); gap: var(--space-sm); margin-top: var(--space-md);">"#;
const CLASS_GRID: &str = r#"<div id="submunicipalities-list" class="sub-municipalities-grid">"#;

#[derive(Clone, Debug)]
pub struct HeaderFix {
    pattern: Regex,
}

impl HeaderFix {
    /// # Errors
    ///
    /// If the script pattern doesn't compile.
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: Regex::new(MODULE_SCRIPT_PATTERN)?,
        })
    }

    #[must_use]
    pub fn edit(&self, _page: &LocationPage, html: &str) -> Edit {
        let Some(old_script) = self.pattern.find(html) else {
            return Edit::Skip("no module script".to_string());
        };

        let html = html
            .replace(INLINE_GRID, CLASS_GRID)
            .replace(old_script.as_str(), LOCATION_SCRIPT);

        Edit::Rewrite(html)
    }
}
