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

use tafel_locaties::{LOCATION_PAGES_DIR, LONG_VERSION, page, scripts::HeaderFix, utils};

/// Fix the Location Headers
///
/// Replaces the module script of every location page with the inline loader
/// for the header, footer, CTA, products and sub-municipalities.
#[derive(Parser, Debug)]
#[command(long_version = LONG_VERSION, about = "Fix the Location Headers")]
struct Args {
    /// The directory with the location pages
    #[arg(default_value = LOCATION_PAGES_DIR, long)]
    pages: PathBuf,

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
        return utils::generate_man_page(Args::command(), "fix-location-headers");
    }

    let fix = HeaderFix::new()?;
    let summary = page::rewrite_all(&args.pages, args.dry_run, |page, html| {
        fix.edit(page, html)
    })?;

    println!("{summary}");
    Ok(())
}
