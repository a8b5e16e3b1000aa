use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// YAML file holding the table source options and physical schema.
    #[arg(short, long, default_value = "source.yaml")]
    pub config: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate the options and print the resulting source descriptor.
    Validate,

    /// Resolve the captured table's schema from the source database.
    Schema {
        /// Give up on the introspection query after this many seconds.
        #[arg(long)]
        timeout_secs: Option<u64>,
    },
}
