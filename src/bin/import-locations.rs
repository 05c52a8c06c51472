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

use chrono::Local;
use clap::{CommandFactory, Parser};
use log::{error, info};

use tafel_locaties::{
    LOCATIONS_CSV, LOCATIONS_JSON, LONG_VERSION,
    import::{self, COLUMN_FORMAT, ImportOptions},
    utils,
};

/// Tafel Totaal Location Importer
///
/// Reads the municipality dataset (one row per postal code and place) and
/// writes the location index the location pages load.
#[allow(clippy::struct_excessive_bools)]
#[derive(Parser, Debug)]
#[command(long_version = LONG_VERSION, about = "Tafel Totaal Location Importer")]
struct Args {
    /// The dataset, tab or comma separated
    #[arg(default_value = LOCATIONS_CSV, long)]
    csv: PathBuf,

    /// Where to write the location index
    #[arg(default_value = LOCATIONS_JSON, long)]
    output: PathBuf,

    /// The dataset has no header line, the columns are in the default order
    #[arg(long)]
    no_headers: bool,

    /// Don't back up the existing location index
    #[arg(long)]
    no_backup: bool,

    /// Parse and report without writing anything
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
        return utils::generate_man_page(Args::command(), "import-locations");
    }

    if let Err(err) = import::check_csv(&args.csv) {
        error!("CSV file not found: {}", args.csv.display());
        info!("create it with the columns: {COLUMN_FORMAT}");
        return Err(err.into());
    }

    info!("reading {}", args.csv.display());
    let options = ImportOptions {
        has_headers: !args.no_headers,
    };
    let (index, report) = import::import_file(&args.csv, options)?;

    if args.dry_run {
        println!("Dry run, {} is untouched:", args.output.display());
        println!("{report}");
        return Ok(());
    }

    if !args.no_backup
        && let Some(backup) = import::backup(&args.output, &Local::now())?
    {
        info!("created backup {}", backup.display());
    }

    info!("writing {}", args.output.display());
    index.save(&args.output)?;

    println!("Import complete!");
    println!("{report}");
    println!();
    println!("Next steps:");
    println!("   1. Review the generated JSON: {}", args.output.display());
    println!("   2. Run: rsync -av --delete public/ docs/");
    println!("   3. Commit and push");

    Ok(())
}
