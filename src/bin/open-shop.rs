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

use tafel_locaties::{LOCATION_PAGES_DIR, LONG_VERSION, page, shop::ShopFix, utils};

/// Open the Shop from the Location Pages
///
/// Removes the CTA section of every location page, points the hero's quote
/// button at the products and loads the site header instead of the location
/// header. Pages needing none of this are left alone.
#[derive(Parser, Debug)]
#[command(long_version = LONG_VERSION, about = "Open the Shop from the Location Pages")]
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
        return utils::generate_man_page(Args::command(), "open-shop");
    }

    let fix = ShopFix::new()?;
    let summary = page::rewrite_all(&args.pages, args.dry_run, |page, html| {
        fix.edit(page, html)
    })?;

    println!("{summary}");
    Ok(())
}
