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

use crate::{
    cities::{self, City},
    location::LocationIndex,
    page::{Edit, LocationPage},
};

const HERO: &str = include_str!("templates/hero.html");

/// From the hero comment up to the first closing section tag.
const HERO_PATTERN: &str = r"(?s)    <!-- New Split-Screen Hero -->.*?</section>";

/// The hero the location pages had before the split-screen one.
const ARCHITECTURAL_PATTERN: &str = r"(?s)    <!-- Architectural Hero Grid -->.*?</section>";

pub const DETAIL_CSS: &str =
    r#"  <link rel="stylesheet" href="/Tafel-Totaal/css/pages/location-detail.css">"#;
pub const HERO_CSS: &str =
    r#"  <link rel="stylesheet" href="/Tafel-Totaal/css/pages/location-hero-new.css">"#;

#[must_use]
pub fn render_hero(city: &City) -> String {
    HERO.replace("{{city_name}}", city.name)
        .replace("{{province}}", &city.province.to_string())
}

/// Rewrites the split-screen hero with the call to action buttons and
/// balanced closing tags.
///
/// A page still on the architectural hero grid gets the split-screen hero in
/// its place, along with the stylesheet it needs.
#[derive(Clone, Debug)]
pub struct HeroFix<'a> {
    pattern: Regex,
    architectural: Regex,
    index: Option<&'a LocationIndex>,
}

impl<'a> HeroFix<'a> {
    /// Pages missing from the built-in city list are looked up among the main
    /// municipalities of `index`.
    ///
    /// # Errors
    ///
    /// If a hero pattern doesn't compile.
    pub fn new(index: Option<&'a LocationIndex>) -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: Regex::new(HERO_PATTERN)?,
            architectural: Regex::new(ARCHITECTURAL_PATTERN)?,
            index,
        })
    }

    #[must_use]
    pub fn edit(&self, page: &LocationPage, html: &str) -> Edit {
        let Some(city) = cities::lookup_in(&page.slug, self.index) else {
            return Edit::Skip(format!("unknown city: {}", page.slug));
        };

        let hero = render_hero(&city);

        if self.pattern.is_match(html) {
            return Edit::Rewrite(self.pattern.replace_all(html, NoExpand(&hero)).into_owned());
        }

        if !self.architectural.is_match(html) {
            return Edit::Skip("no hero".to_string());
        }

        let html = if html.contains("location-hero-new.css") {
            html.to_string()
        } else {
            html.replace(DETAIL_CSS, &format!("{DETAIL_CSS}\n{HERO_CSS}"))
        };

        Edit::Rewrite(
            self.architectural
                .replace_all(&html, NoExpand(&hero))
                .into_owned(),
        )
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::{DETAIL_CSS, HERO_CSS, HeroFix, render_hero};
    use crate::{
        cities,
        page::{Edit, LocationPage},
    };

    const PAGE: &str = "<main>
    <!-- New Split-Screen Hero -->
    <section class=\"location-hero\">
      <div class=\"location-hero__content\">
        <h1>Tafelverhuur $1 Gent</h1>
      </div>
    </section>

    <section class=\"content-row\"></section>
</main>
";

    fn page(slug: &str) -> LocationPage {
        LocationPage {
            slug: slug.to_string(),
            path: PathBuf::from(format!("{slug}.html")),
        }
    }

    #[test]
    fn rendered_hero() {
        let hero = render_hero(&cities::lookup("sint-niklaas").expect("a built-in city"));

        assert!(hero.starts_with("    <!-- New Split-Screen Hero -->\n"));
        assert!(hero.ends_with("</section>"));
        assert!(hero.contains("<span class=\"active\">Sint-Niklaas</span>"));
        assert!(hero.contains("          Oost-Vlaanderen\n"));
        assert!(hero.contains("Offerte Aanvragen"));
        assert!(hero.contains("Bereken uw prijs in de checkout"));
        assert!(!hero.contains("{{"));
        assert_eq!(hero.matches("<section").count(), hero.matches("</section>").count());
    }

    #[test]
    fn replaces_the_hero_only() -> anyhow::Result<()> {
        let fix = HeroFix::new(None)?;

        let Edit::Rewrite(html) = fix.edit(&page("gent"), PAGE) else {
            anyhow::bail!("gent has a hero");
        };

        assert!(html.starts_with("<main>\n    <!-- New Split-Screen Hero -->\n"));
        assert!(!html.contains("{{city_name}}"));
        assert!(html.contains("alt=\"Tafelverhuur Gent\""));
        assert!(!html.contains("$1"));
        assert!(html.ends_with("    <section class=\"content-row\"></section>\n</main>\n"));

        // A second run is a no-op.
        assert_eq!(fix.edit(&page("gent"), &html), Edit::Rewrite(html.clone()));

        Ok(())
    }

    #[test]
    fn skips() -> anyhow::Result<()> {
        let fix = HeroFix::new(None)?;

        assert_eq!(
            fix.edit(&page("nergens"), PAGE),
            Edit::Skip("unknown city: nergens".to_string())
        );
        assert_eq!(
            fix.edit(&page("gent"), "<main></main>"),
            Edit::Skip("no hero".to_string())
        );

        Ok(())
    }

    #[test]
    fn replaces_the_architectural_hero() -> anyhow::Result<()> {
        let old = format!(
            "<head>
{DETAIL_CSS}
</head>
<main>
    <!-- Architectural Hero Grid -->
    <section class=\"hero-grid\">
      <h1>Tafelverhuur Brugge</h1>
    </section>

    <section class=\"content-row\"></section>
</main>
"
        );
        let fix = HeroFix::new(None)?;

        let Edit::Rewrite(html) = fix.edit(&page("brugge"), &old) else {
            anyhow::bail!("brugge has a hero");
        };

        assert!(html.starts_with(&format!("<head>\n{DETAIL_CSS}\n{HERO_CSS}\n</head>\n")));
        assert!(!html.contains("Architectural Hero Grid"));
        assert!(!html.contains("hero-grid"));
        assert!(html.contains("<main>\n    <!-- New Split-Screen Hero -->\n"));
        assert!(html.contains("          West-Vlaanderen\n"));
        assert!(html.ends_with("</section>\n\n    <section class=\"content-row\"></section>\n</main>\n"));

        // From here on the page is on the split-screen hero.
        assert_eq!(fix.edit(&page("brugge"), &html), Edit::Rewrite(html.clone()));

        Ok(())
    }
}
