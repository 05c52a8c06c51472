use std::{fs, path::Path};

use tafel_locaties::{
    cta::CtaFix,
    hero::HeroFix,
    import::{self, ImportOptions},
    location::LocationIndex,
    page::{self, Summary},
    prices::PriceFix,
    scripts::HeaderFix,
    shop::{HEADER_FETCH, PRODUCTS_BUTTON, ShopFix},
    submunicipalities::SubmunicipalitiesFix,
};

const GENT: &str = include_str!("pages/gent.html");
const WACHTEBEKE: &str = include_str!("pages/wachtebeke.html");
const LOCATIONS: &str = include_str!("locations.tsv");

fn setup() -> anyhow::Result<(tempfile::TempDir, LocationIndex)> {
    let dir = tempfile::tempdir()?;
    fs::write(dir.path().join("gent.html"), GENT)?;
    fs::write(dir.path().join("wachtebeke.html"), WACHTEBEKE)?;

    let (index, _) = import::import(LOCATIONS, ImportOptions::default())?;
    Ok((dir, index))
}

/// Runs every fix in the order the site went through them.
fn fix_all(pages: &Path, index: &LocationIndex, dry_run: bool) -> anyhow::Result<Vec<Summary>> {
    let hero = HeroFix::new(Some(index))?;
    let prices = PriceFix::new()?;
    let submunicipalities = SubmunicipalitiesFix::new(index);
    let headers = HeaderFix::new()?;

    Ok(vec![
        page::rewrite_all(pages, dry_run, |page, html| hero.edit(page, html))?,
        page::rewrite_all(pages, dry_run, |page, html| prices.edit(page, html))?,
        page::rewrite_all(pages, dry_run, |page, html| submunicipalities.edit(page, html))?,
        page::rewrite_all(pages, dry_run, |page, html| headers.edit(page, html))?,
    ])
}

#[test]
fn gent_gets_every_fix() -> anyhow::Result<()> {
    let (dir, index) = setup()?;
    fix_all(dir.path(), &index, false)?;

    let html = fs::read_to_string(dir.path().join("gent.html"))?;

    assert!(html.contains("<span class=\"active\">Gent</span>"));
    assert!(html.contains("Offerte Aanvragen"));
    assert!(!html.contains("Vanaf"));
    assert_eq!(html.matches("Bereken uw prijs in de checkout").count(), 1);

    assert_eq!(html.matches("id=\"submunicipalities-section\"").count(), 1);
    assert!(html.contains("<div id=\"submunicipalities-list\" class=\"sub-municipalities-grid\">"));

    assert!(!html.contains("loadHeader"));
    assert!(html.contains("async function loadLocationComponents()"));
    assert!(html.contains("const pageSlug = window.location.pathname"));
    assert_eq!(html.matches("<script type=\"module\">").count(), 1);

    assert!(html.starts_with("<!DOCTYPE html>\n"));
    assert!(html.ends_with("</body>\n</html>\n"));

    Ok(())
}

#[test]
fn sub_municipality_pages_are_left_alone() -> anyhow::Result<()> {
    let (dir, index) = setup()?;
    let summaries = fix_all(dir.path(), &index, false)?;

    // Wachtebeke has no hero or section of its own, it is part of Lochristi.
    assert_eq!(summaries[0].skipped, 1);
    assert_eq!(summaries[2].skipped, 1);

    let html = fs::read_to_string(dir.path().join("wachtebeke.html"))?;
    assert!(html.contains("Tafelverhuur\n          <span class=\"location-hero__title-highlight\">Wachtebeke</span>"));
    assert!(!html.contains("Vanaf"));
    assert!(!html.contains(r#"<section id="submunicipalities-section""#));
    assert!(html.contains("async function loadLocationComponents()"));

    Ok(())
}

#[test]
fn second_run_changes_nothing() -> anyhow::Result<()> {
    let (dir, index) = setup()?;
    fix_all(dir.path(), &index, false)?;
    let first = fs::read_to_string(dir.path().join("gent.html"))?;

    for summary in fix_all(dir.path(), &index, false)? {
        assert_eq!(summary.updated, 0);
    }

    assert_eq!(fs::read_to_string(dir.path().join("gent.html"))?, first);

    Ok(())
}

#[test]
fn dry_run_writes_nothing() -> anyhow::Result<()> {
    let (dir, index) = setup()?;
    let summaries = fix_all(dir.path(), &index, true)?;

    assert_eq!(summaries[0].updated, 1);
    assert_eq!(summaries[1].updated, 2);
    assert_eq!(fs::read_to_string(dir.path().join("gent.html"))?, GENT);
    assert_eq!(fs::read_to_string(dir.path().join("wachtebeke.html"))?, WACHTEBEKE);

    Ok(())
}

#[test]
fn call_to_action_comes_and_goes() -> anyhow::Result<()> {
    let (dir, index) = setup()?;
    let gent = dir.path().join("gent.html");

    let cta = CtaFix::new()?;
    let summary = page::rewrite_all(dir.path(), false, |page, html| cta.edit(page, html))?;
    assert_eq!(summary.updated, 2);

    let html = fs::read_to_string(&gent)?;
    assert!(html.contains("    <!-- CTA Section -->\n    <div id=\"cta-container\"></div>\n  </main>"));
    assert!(html.contains("import { loadCTA } from '/Tafel-Totaal/js/components/cta.js';"));
    assert!(html.contains("    await loadFooter();\n    loadCTA();\n"));
    assert_eq!(html.matches("<div id=\"header-container\"></div>").count(), 1);
    assert_eq!(html.matches("<div id=\"footer-container\"></div>").count(), 1);

    let summary = page::rewrite_all(dir.path(), false, |page, html| cta.edit(page, html))?;
    assert_eq!(summary.unchanged, 2);

    fix_all(dir.path(), &index, false)?;

    let shop = ShopFix::new()?;
    let summary = page::rewrite_all(dir.path(), false, |page, html| shop.edit(page, html))?;
    assert_eq!(summary.updated, 2);

    let html = fs::read_to_string(&gent)?;
    assert!(!html.contains("<!-- CTA Section -->"));
    assert!(!html.contains("<div id=\"cta-container\">"));
    assert!(html.contains(PRODUCTS_BUTTON));
    assert!(html.contains(HEADER_FETCH));

    let summary = page::rewrite_all(dir.path(), false, |page, html| shop.edit(page, html))?;
    assert_eq!(summary.skipped, 2);

    Ok(())
}
