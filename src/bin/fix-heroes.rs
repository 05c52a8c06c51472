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

use std::path::PathBuf;

use clap::{CommandFactory, Parser};

use tafel_locaties::{
    LOCATION_PAGES_DIR, LONG_VERSION, hero::HeroFix, location::LocationIndex, page, utils,
};

/// Fix the Location Heroes
///
/// Rewrites the split-screen hero of every location page: breadcrumbs,
/// province badge, the checkout price note, both call to action buttons and
/// the stats visual. Pages still on the architectural hero grid get the
/// split-screen hero and its stylesheet.
#[derive(Parser, Debug)]
#[command(long_version = LONG_VERSION, about = "Fix the Location Heroes")]
struct Args {
    /// The directory with the location pages
    #[arg(default_value = LOCATION_PAGES_DIR, long)]
    pages: PathBuf,

    /// Also accept the main municipalities of this location index
    #[arg(long)]
    locations: Option<PathBuf>,

    /// Report what would change without writing anything
    #[arg(long)]
    dry_run: bool,

    /// Whether to log on the debug level
    #[arg(long)]
    debug: bool,

    /// Log without timestamps
    #[arg(long)]
    plain_log: bool,

    /// Build the manpage
    #[arg(long)]
    man: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    utils::init_logger(args.plain_log, args.debug);

    if args.man {
        return utils::generate_man_page(Args::command(), "fix-heroes");
    }

    let index = args
        .locations
        .as_deref()
        .map(LocationIndex::load)
        .transpose()?;

    let fix = HeroFix::new(index.as_ref())?;
    let summary = page::rewrite_all(&args.pages, args.dry_run, |page, html| {
        fix.edit(page, html)
    })?;

    println!("{summary}");
    Ok(())
}
