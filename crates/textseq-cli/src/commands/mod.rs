mod encode;
mod tokenize;

/// Subcommands for textseq
#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Encode a corpus as (padded) id rows.
    Encode(encode::EncodeArgs),

    /// Print the tokens of each corpus line.
    Tokenize(tokenize::TokenizeArgs),
}

impl Commands {
    /// Run the subcommand.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        match self {
            Commands::Encode(cmd) => cmd.run(),
            Commands::Tokenize(cmd) => cmd.run(),
        }
    }
}
