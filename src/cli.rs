use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "refdata-fixtures",
    about = "Decode and check reference-data test fixtures",
    version,
    author
)]
pub struct Args {
    /// Overrides FIXTURES_DIR.
    #[arg(long, global = true)]
    pub fixtures_dir: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Decode a fixture file and print its records as normalized JSON
    Decode {
        #[arg(value_enum)]
        kind: RecordKind,
        path: PathBuf,
    },
    /// Load the fixture set and report references that resolve to nothing
    Check,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecordKind {
    Country,
    OrgType,
    StateProv,
}
