use std::io::BufRead;

use textseq::Tokenizer;

use crate::{
    input_output::{InputArgs, OutputArgs, write_rows},
    logging::LogArgs,
    tokenizer_args::TokenizerArgs,
};

/// Args for the tokenize command.
#[derive(clap::Args, Debug)]
pub struct TokenizeArgs {
    #[clap(flatten)]
    pub logging: LogArgs,

    #[command(flatten)]
    tokenizer: TokenizerArgs,

    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,
}

impl TokenizeArgs {
    /// Run the tokenize command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(2)?;

        let tokenizer = self.tokenizer.build_tokenizer()?;

        let reader = self.input.open_reader()?;
        let mut writer = self.output.open_writer()?;

        for line in reader.lines() {
            let tokens = tokenizer.try_tokenize(&line?)?;
            write_rows(&mut writer, [tokens])?;
        }

        Ok(())
    }
}
