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

//! The "Deelgemeenten" section of a main municipality's page.
//!
//! The section ships hidden. Its loader fetches the location index in the
//! browser and only shows the section when the page's slug has
//! sub-municipalities.

use std::collections::BTreeMap;

use crate::{
    location::LocationIndex,
    page::{Edit, LocationPage},
};

const SECTION: &str = include_str!("templates/submunicipalities_section.html");
const LOADER: &str = include_str!("templates/submunicipalities_loader.js");

pub const SECTION_ID: &str = r#"id="submunicipalities-section""#;
pub const PRODUCTS_MARKER: &str = "    <!-- Products Showcase (Dynamic) -->";
pub const INITIALIZE_MARKER: &str = "    // Initialize\n    loadProducts();";

#[must_use]
pub fn render_loader(slug: &str) -> String {
    LOADER.replace("{{city_slug}}", slug)
}

#[derive(Clone, Debug, Default)]
pub struct SubmunicipalitiesFix {
    main_municipalities: BTreeMap<String, String>,
}

impl SubmunicipalitiesFix {
    #[must_use]
    pub fn new(index: &LocationIndex) -> Self {
        Self {
            main_municipalities: index.main_municipalities(),
        }
    }

    /// The name of the main municipality with this slug.
    #[must_use]
    pub fn main_municipality(&self, slug: &str) -> Option<&str> {
        self.main_municipalities.get(slug).map(String::as_str)
    }

    #[must_use]
    pub fn edit(&self, page: &LocationPage, html: &str) -> Edit {
        if self.main_municipality(&page.slug).is_none() {
            return Edit::Skip("not a main municipality".to_string());
        }

        if html.contains(SECTION_ID) {
            return Edit::Skip("the section already exists".to_string());
        }

        if !html.contains(PRODUCTS_MARKER) {
            return Edit::Skip("no products showcase".to_string());
        }

        let html = html.replace(PRODUCTS_MARKER, &format!("{SECTION}{PRODUCTS_MARKER}"));
        let html = html.replace(
            INITIALIZE_MARKER,
            &format!("{INITIALIZE_MARKER}{}", render_loader(&page.slug)),
        );

        Edit::Rewrite(html)
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::{SECTION_ID, SubmunicipalitiesFix, render_loader};
    use crate::{
        location::{Location, LocationIndex},
        page::{Edit, LocationPage},
    };

    const PAGE: &str = "  <main>
    <!-- Products Showcase (Dynamic) -->
    <section id=\"products\"></section>
  </main>
  <script type=\"module\">
    // Initialize
    loadProducts();
  </script>
";

    fn index() -> LocationIndex {
        let location = |name: &str, slug: &str, parent: Option<&str>| Location {
            name: name.to_string(),
            slug: slug.to_string(),
            postal_codes: Vec::new(),
            parent: parent.map(str::to_string),
        };

        LocationIndex {
            west_vlaanderen: Vec::new(),
            oost_vlaanderen: vec![
                location("Gent", "gent", None),
                location("Drongen", "gent", Some("Gent")),
                location("Kallo", "beveren", Some("Beveren-Kruibeke-Zwijndrecht")),
            ],
        }
    }

    fn page(slug: &str) -> LocationPage {
        LocationPage {
            slug: slug.to_string(),
            path: PathBuf::from(format!("{slug}.html")),
        }
    }

    #[test]
    fn loader_filters_on_the_slug() {
        let loader = render_loader("gent");

        assert!(loader.contains("loc.slug === 'gent' && loc.parent !== null"));
        assert!(loader.contains("`${BASE_PATH}/data/all-locations.json`"));
        assert!(loader.ends_with("loadSubMunicipalities();"));
    }

    #[test]
    fn adds_section_and_loader() -> anyhow::Result<()> {
        let fix = SubmunicipalitiesFix::new(&index());
        assert_eq!(fix.main_municipality("gent"), Some("Gent"));

        let Edit::Rewrite(html) = fix.edit(&page("gent"), PAGE) else {
            anyhow::bail!("gent is a main municipality");
        };

        let section = html.find(SECTION_ID).expect("the section was added");
        let products = html.find("<!-- Products Showcase (Dynamic) -->").expect("still there");
        assert!(section < products);
        assert!(html.contains("<h2>Deelgemeenten</h2>"));
        assert!(html.contains("    loadProducts();\n    \n    // Load sub-municipalities"));
        assert!(html.ends_with("    loadSubMunicipalities();\n  </script>\n"));

        assert_eq!(
            fix.edit(&page("gent"), &html),
            Edit::Skip("the section already exists".to_string())
        );

        Ok(())
    }

    #[test]
    fn skips() {
        let fix = SubmunicipalitiesFix::new(&index());

        assert_eq!(
            fix.edit(&page("beveren"), PAGE),
            Edit::Skip("not a main municipality".to_string())
        );
        assert_eq!(
            fix.edit(&page("gent"), "<main></main>"),
            Edit::Skip("no products showcase".to_string())
        );
    }
}
