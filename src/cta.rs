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

//! The shared call to action block.
//!
//! Pages used to carry their own statement section. The shared block is an
//! empty container that `loadCTA` from the CTA component fills in.

use regex::{NoExpand, Regex};

use crate::page::{Edit, LocationPage};

pub const CTA_CONTAINER: &str = r#"<div id="cta-container"></div>"#;
pub const CTA_SECTION: &str = "<!-- CTA Section -->\n    <div id=\"cta-container\"></div>";

const HEADER_CONTAINER: &str = r#"<div id="header-container"></div>"#;
const FOOTER_CONTAINER: &str = r#"<div id="footer-container"></div>"#;

const STATEMENT_PATTERN: &str =
    r#"(?s)<!-- Statement CTA -->.*?<section class="statement-section".*?</section>"#;
const MODULE_SCRIPT_PATTERN: &str = r#"(?s)<script type="module">.*?</script>"#;

const FOOTER_IMPORT: &str = "import { loadFooter } from '/Tafel-Totaal/js/components/footer.js';";
const CTA_IMPORT: &str = "import { loadCTA } from '/Tafel-Totaal/js/components/cta.js';";

/// Puts the CTA container on a page, loads it from the module script and
/// makes sure the header and footer containers exist.
#[derive(Clone, Debug)]
pub struct CtaFix {
    statement: Regex,
    script: Regex,
}

impl CtaFix {
    /// # Errors
    ///
    /// If a pattern doesn't compile.
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            statement: Regex::new(STATEMENT_PATTERN)?,
            script: Regex::new(MODULE_SCRIPT_PATTERN)?,
        })
    }

    /// The statement section becomes the CTA container. Without one, the
    /// container goes at the end of `<main>`.
    fn add_container(&self, html: String) -> String {
        if html.contains(r#"<div id="cta-container">"#) {
            html
        } else if html.contains("statement-section") {
            self.statement
                .replace_all(&html, NoExpand(CTA_SECTION))
                .into_owned()
        } else {
            html.replace("</main>", &format!("  {CTA_SECTION}\n  </main>"))
        }
    }

    fn load_cta(&self, html: String) -> String {
        let Some(old_script) = self.script.find(&html) else {
            return html;
        };

        let mut script = old_script.as_str().to_string();

        if !script.contains("import { loadCTA }") {
            script = script.replace(FOOTER_IMPORT, &format!("{FOOTER_IMPORT}\n    {CTA_IMPORT}"));
        }

        if !script.contains("loadCTA();") {
            script = script.replace("loadFooter();", "loadFooter();\n    loadCTA();");
        }

        html.replace(old_script.as_str(), &script)
    }

    #[must_use]
    pub fn edit(&self, _page: &LocationPage, html: &str) -> Edit {
        let mut html = self.add_container(html.to_string());
        html = self.load_cta(html);

        if !html.contains(HEADER_CONTAINER) {
            html = html.replace(
                "<body>",
                &format!("<body>\n  <!-- Header -->\n  {HEADER_CONTAINER}"),
            );
        }

        if !html.contains(FOOTER_CONTAINER) {
            html = html.replace(
                "</main>",
                &format!("</main>\n\n  <!-- Footer -->\n  {FOOTER_CONTAINER}"),
            );
        }

        Edit::Rewrite(html)
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::{CTA_CONTAINER, CtaFix};
    use crate::page::{Edit, LocationPage};

    const STATEMENT_PAGE: &str = r#"<body>
  <main>
    <!-- Statement CTA -->
    <section class="statement-section">
      <h2>Klaar voor uw feest?</h2>
    </section>
  </main>
  <script type="module">
    import { loadFooter } from '/Tafel-Totaal/js/components/footer.js';
    loadFooter();
  </script>
</body>
"#;

    fn page() -> LocationPage {
        LocationPage {
            slug: "eeklo".to_string(),
            path: PathBuf::from("eeklo.html"),
        }
    }

    fn edit(fix: &CtaFix, html: &str) -> anyhow::Result<String> {
        let Edit::Rewrite(html) = fix.edit(&page(), html) else {
            anyhow::bail!("the CTA fix always rewrites");
        };

        Ok(html)
    }

    #[test]
    fn statement_section_becomes_the_container() -> anyhow::Result<()> {
        let fix = CtaFix::new()?;
        let html = edit(&fix, STATEMENT_PAGE)?;

        assert!(!html.contains("statement-section"));
        assert!(html.contains("  <main>\n    <!-- CTA Section -->\n    <div id=\"cta-container\"></div>\n  </main>"));
        assert!(html.contains(
            "footer.js';\n    import { loadCTA } from '/Tafel-Totaal/js/components/cta.js';\n"
        ));
        assert!(html.contains("    loadFooter();\n    loadCTA();\n"));
        assert!(html.starts_with("<body>\n  <!-- Header -->\n  <div id=\"header-container\"></div>\n"));
        assert!(html.contains("</main>\n\n  <!-- Footer -->\n  <div id=\"footer-container\"></div>"));

        assert_eq!(edit(&fix, &html)?, html);

        Ok(())
    }

    #[test]
    fn container_goes_at_the_end_of_main() -> anyhow::Result<()> {
        let fix = CtaFix::new()?;
        let html = edit(&fix, "<body>\n  <main>\n    <p>Eeklo</p>\n  </main>\n</body>\n")?;

        assert_eq!(html.matches(CTA_CONTAINER).count(), 1);
        assert!(html.contains("    <p>Eeklo</p>\n    <!-- CTA Section -->\n    <div id=\"cta-container\"></div>\n  </main>"));

        Ok(())
    }
}
