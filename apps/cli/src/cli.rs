use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "fuel-tracker")]
#[command(version, about = "Track fill-ups and fuel consumption", long_about = None)]
pub struct Cli {
    /// Owner whose records are read or changed
    #[arg(short, long, global = true, env = "FUEL_TRACKER_OWNER")]
    pub owner: Option<String>,

    /// Directory holding the database (overrides the config file)
    #[arg(long, global = true, env = "FUEL_TRACKER_DATA_DIR")]
    pub data_dir: Option<String>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Record a new fill-up
    Add(FuelingArgs),
    /// Replace the fields of an existing fill-up
    Edit {
        id: String,
        #[command(flatten)]
        fields: FuelingArgs,
    },
    /// Remove a fill-up
    Delete { id: String },
    /// List fill-ups, most recent first
    List,
    /// Show consumption statistics
    Stats,
    /// Show spend per calendar month
    Monthly,
    /// Show consumption per fill-up in odometer order
    Series,
    /// List owners with stored records
    Owners,
    /// Show or set the default owner
    DefaultOwner {
        #[arg(value_name = "OWNER")]
        value: Option<String>,
    },
    /// Rewrite every stored consumption of the owner
    Recalc,
    /// Remove every fill-up of the owner
    Clear {
        /// Confirm the removal
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Debug, Clone, Args)]
pub struct FuelingArgs {
    /// Fill-up date (YYYY-MM-DD)
    #[arg(long)]
    pub date: String,

    /// Odometer reading at the fill-up
    #[arg(long)]
    pub odometer: f64,

    /// Price per unit of fuel volume
    #[arg(long)]
    pub price: f64,

    /// Total amount paid
    #[arg(long)]
    pub cost: f64,

    /// Station name
    #[arg(long)]
    pub station: Option<String>,
}
