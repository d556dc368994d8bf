use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "codecmap")]
#[command(about = "Resolve legacy transcoding labels to canonical pipeline tokens", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Print one JSON object per label instead of bare tokens
    #[arg(long, global = true)]
    pub json: bool,

    /// Fail on unrecognized labels instead of substituting the default
    #[arg(long, global = true)]
    pub strict: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve legacy audio encoder labels (e.g. "AAC (faac)", "MP3 (lame)")
    Audio {
        #[arg(value_name = "LABEL", required = true)]
        labels: Vec<String>,
    },

    /// Resolve legacy mixdown labels (e.g. "Dolby Pro Logic II", "5.1 Channels")
    Mixdown {
        #[arg(value_name = "LABEL", required = true)]
        labels: Vec<String>,
    },

    /// Resolve legacy container labels (e.g. "m4v", "MKV")
    Container {
        #[arg(value_name = "LABEL", required = true)]
        labels: Vec<String>,
    },
}

pub fn parse() -> Cli {
    Cli::parse()
}
