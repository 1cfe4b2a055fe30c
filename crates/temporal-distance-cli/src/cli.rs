use std::path::PathBuf;

use clap::Parser;
use temporal_distance::{MonthBoundary, MonthOverflow, Unit};

/// Calendar distance between two dates.
#[derive(Parser, Debug)]
#[command(
    name = "tdist",
    version,
    about = "Whole days, weeks, calendar months and years between two dates"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Earlier date: RFC 3339 (2023-02-16T08:00:00Z) or ISO date (2023-02-16).
    pub from: String,

    /// Later date, same formats as FROM. Defaults to now.
    pub to: Option<String>,

    /// Print a single count instead of the full JSON record.
    #[arg(short, long)]
    pub unit: Option<Unit>,

    /// IANA timezone used to read dates without an offset.
    #[arg(short = 'z', long, default_value = "UTC")]
    pub timezone: String,

    /// How a month step treats a day the target month lacks (clamp, rollover).
    #[arg(long = "month-overflow")]
    pub month_overflow: Option<MonthOverflow>,

    /// Final month adjustment (day-of-month, exact-anchor).
    #[arg(long = "month-boundary")]
    pub month_boundary: Option<MonthBoundary>,

    /// JSON file with distance options; flags override it.
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}
