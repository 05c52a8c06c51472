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

use log::debug;
use regex::Regex;

use crate::page::{Edit, LocationPage};

const CTA_PATTERN: &str = r#"\s*<!-- CTA Section -->\s*<div id="cta-container"></div>"#;

const QUOTE_BUTTON: &str = r#"<a href="/Tafel-Totaal/contact.html" class="btn btn--secondary btn--lg">Offerte Aanvragen</a>"#;
pub const PRODUCTS_BUTTON: &str = r#"<a href="/Tafel-Totaal/producten.html" class="btn btn--secondary btn--lg">Bekijk Losse Producten</a>"#;

const LOCATION_HEADER_FETCH: &str =
    "const headerResponse = await fetch(`${basePath}/components/header-location.html`);";
pub const HEADER_FETCH: &str =
    "const headerResponse = await fetch(`${basePath}/components/header.html`);";

/// Points a location page at the shop: the CTA block goes, the hero's quote
/// button links to the products and the page loads the site's own header.
#[derive(Clone, Debug)]
pub struct ShopFix {
    cta: Regex,
}

impl ShopFix {
    /// # Errors
    ///
    /// If the CTA pattern doesn't compile.
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            cta: Regex::new(CTA_PATTERN)?,
        })
    }

    #[must_use]
    pub fn edit(&self, page: &LocationPage, html: &str) -> Edit {
        let mut html = html.to_string();
        let mut changes = Vec::new();

        if html.contains("<!-- CTA Section -->") {
            html = self.cta.replace_all(&html, "").into_owned();
            changes.push("removed the CTA section");
        }

        if html.contains(QUOTE_BUTTON) {
            html = html.replace(QUOTE_BUTTON, PRODUCTS_BUTTON);
            changes.push("hero button to the products");
        }

        if html.contains(LOCATION_HEADER_FETCH) {
            html = html.replace(LOCATION_HEADER_FETCH, HEADER_FETCH);
            changes.push("site header");
        }

        if changes.is_empty() {
            return Edit::Skip("no changes needed".to_string());
        }

        debug!("{}: {}", page.file_name(), changes.join(", "));
        Edit::Rewrite(html)
    }
}
