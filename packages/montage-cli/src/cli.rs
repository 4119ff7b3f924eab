use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "montage",
    version,
    about = "Bipolar montage construction for intracranial recordings",
    long_about = "Select macro contacts from a channel list and pair adjacent contacts \
                  on each lead into a bipolar montage.\n\
                  Labels come from the command line, a label file, or stdin ('-')."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Command {
    /// Build a bipolar montage from channel labels
    Bipolar(BipolarArgs),
    /// Split channel labels into macro contacts and excluded channels
    Classify(ClassifyArgs),
    /// Show the reference tables used for classification
    Tables(TablesArgs),
    /// Build montages for many label files
    Batch(BatchArgs),
}

#[derive(Args, Debug, Clone, Default)]
pub struct LabelInput {
    /// Channel labels (e.g. LTP1 LTP2 LTP3)
    pub labels: Vec<String>,

    /// Read labels from a file: one per line, or a JSON array for .json files ('-' for stdin)
    #[arg(short, long, conflicts_with = "labels")]
    pub file: Option<String>,
}

#[derive(Args)]
pub struct BipolarArgs {
    #[command(flatten)]
    pub input: LabelInput,

    /// Drop scalp EEG, micro, misc and DC channels before pairing
    #[arg(long, default_value_t = false)]
    pub classify: bool,

    /// Reference tables JSON file (defaults to the built-in BCI2000 tables)
    #[arg(long, env = "MONTAGE_TABLES")]
    pub tables: Option<String>,

    /// Output as JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Compact JSON output (no indentation)
    #[arg(long, default_value_t = false)]
    pub compact: bool,

    /// Output file (default: stdout)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Suppress progress messages on stderr
    #[arg(long, default_value_t = false)]
    pub quiet: bool,
}

#[derive(Args)]
pub struct ClassifyArgs {
    #[command(flatten)]
    pub input: LabelInput,

    /// Reference tables JSON file (defaults to the built-in BCI2000 tables)
    #[arg(long, env = "MONTAGE_TABLES")]
    pub tables: Option<String>,

    /// Output as JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

#[derive(Args)]
pub struct TablesArgs {
    /// Reference tables JSON file (defaults to the built-in BCI2000 tables)
    #[arg(long, env = "MONTAGE_TABLES")]
    pub tables: Option<String>,

    /// Output as JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

#[derive(Args)]
pub struct BatchArgs {
    /// Glob pattern for label files (e.g. "sessions/*.txt")
    #[arg(long, conflicts_with = "files")]
    pub glob: Option<String>,

    /// Explicit list of label files
    #[arg(long, num_args = 1..)]
    pub files: Option<Vec<String>>,

    /// Drop scalp EEG, micro, misc and DC channels before pairing
    #[arg(long, default_value_t = false)]
    pub classify: bool,

    /// Reference tables JSON file (defaults to the built-in BCI2000 tables)
    #[arg(long, env = "MONTAGE_TABLES")]
    pub tables: Option<String>,

    /// Write one <stem>_montage.json per input file into this directory
    #[arg(long)]
    pub output_dir: Option<String>,

    /// Keep going after a file fails
    #[arg(long, default_value_t = false)]
    pub continue_on_error: bool,

    /// List matching files without processing them
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,

    /// Compact JSON in per-file output files
    #[arg(long, default_value_t = false)]
    pub compact: bool,

    /// Suppress progress messages on stderr
    #[arg(long, default_value_t = false)]
    pub quiet: bool,
}
