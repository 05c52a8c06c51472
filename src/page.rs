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

//! Walking and rewriting the location pages, `<dir>/<slug>.html`.

use std::{
    fmt, fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use log::{debug, info, warn};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PageError {
    #[error("pages: the directory {0} doesn't exist")]
    MissingDir(PathBuf),
}

#[derive(Clone, Debug, Eq, Ord, PartialEq, PartialOrd)]
pub struct LocationPage {
    pub slug: String,
    pub path: PathBuf,
}

impl LocationPage {
    #[must_use]
    pub fn file_name(&self) -> String {
        format!("{}.html", self.slug)
    }
}

/// What an edit wants done with a page.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Edit {
    Rewrite(String),
    Skip(String),
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Outcome {
    Updated,
    Unchanged,
    Skipped(String),
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Updated => write!(f, "updated"),
            Self::Unchanged => write!(f, "unchanged"),
            Self::Skipped(reason) => write!(f, "skipped, {reason}"),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Summary {
    pub updated: usize,
    pub unchanged: usize,
    pub skipped: usize,
}

impl Summary {
    pub fn add(&mut self, outcome: &Outcome) {
        match outcome {
            Outcome::Updated => self.updated += 1,
            Outcome::Unchanged => self.unchanged += 1,
            Outcome::Skipped(_) => self.skipped += 1,
        }
    }

    #[must_use]
    pub fn pages(&self) -> usize {
        self.updated + self.unchanged + self.skipped
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Summary: {} of {} pages updated ({} unchanged, {} skipped)",
            self.updated,
            self.pages(),
            self.unchanged,
            self.skipped
        )
    }
}

/// Every `.html` file directly in `dir`, sorted by file name.
///
/// # Errors
///
/// If the directory doesn't exist or can't be read.
pub fn location_pages(dir: &Path) -> anyhow::Result<Vec<LocationPage>> {
    if !dir.is_dir() {
        return Err(PageError::MissingDir(dir.to_path_buf()).into());
    }

    let mut pages = Vec::new();
    for entry in fs::read_dir(dir).with_context(|| format!("reading {}", dir.display()))? {
        let path = entry?.path();

        if !path.is_file() || path.extension().is_none_or(|extension| extension != "html") {
            continue;
        }

        if let Some(slug) = path.file_stem().and_then(|stem| stem.to_str()) {
            pages.push(LocationPage {
                slug: slug.to_string(),
                path: path.clone(),
            });
        } else {
            warn!("{} doesn't have a UTF-8 name", path.display());
        }
    }

    pages.sort();
    Ok(pages)
}

/// Applies `edit` to the page and writes the result back when it differs.
///
/// # Errors
///
/// If the page can't be read or written.
pub fn rewrite<F>(page: &LocationPage, dry_run: bool, edit: F) -> anyhow::Result<Outcome>
where
    F: FnOnce(&LocationPage, &str) -> Edit,
{
    let content = fs::read_to_string(&page.path)
        .with_context(|| format!("reading {}", page.path.display()))?;

    match edit(page, &content) {
        Edit::Skip(reason) => Ok(Outcome::Skipped(reason)),
        Edit::Rewrite(new_content) if new_content == content => Ok(Outcome::Unchanged),
        Edit::Rewrite(new_content) => {
            if dry_run {
                debug!("dry run, not writing {}", page.path.display());
            } else {
                fs::write(&page.path, new_content)
                    .with_context(|| format!("writing {}", page.path.display()))?;
            }

            Ok(Outcome::Updated)
        }
    }
}

/// Runs `edit` over every location page in `dir`.
///
/// # Errors
///
/// If the directory or one of its pages can't be read or written.
pub fn rewrite_all<F>(dir: &Path, dry_run: bool, mut edit: F) -> anyhow::Result<Summary>
where
    F: FnMut(&LocationPage, &str) -> Edit,
{
    let pages = location_pages(dir)?;
    info!("found {} location pages in {}", pages.len(), dir.display());

    let mut summary = Summary::default();
    for page in &pages {
        let outcome = rewrite(page, dry_run, &mut edit)?;

        match &outcome {
            Outcome::Skipped(_) | Outcome::Updated => info!("{}: {outcome}", page.file_name()),
            Outcome::Unchanged => debug!("{}: {outcome}", page.file_name()),
        }

        summary.add(&outcome);
    }

    Ok(summary)
}
