use textseq::{PadSide, Pipeline, PipelineOptions};

use crate::{
    input_output::{InputArgs, OutputArgs, write_rows},
    logging::LogArgs,
    tokenizer_args::TokenizerArgs,
};

/// Padding side.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum PadSideArg {
    /// Pad before the ids.
    Left,

    /// Pad after the ids.
    Right,
}

impl From<PadSideArg> for PadSide {
    fn from(side: PadSideArg) -> Self {
        match side {
            PadSideArg::Left => PadSide::Left,
            PadSideArg::Right => PadSide::Right,
        }
    }
}

/// Args for the encode command.
#[derive(clap::Args, Debug)]
pub struct EncodeArgs {
    #[clap(flatten)]
    pub logging: LogArgs,

    #[command(flatten)]
    tokenizer: TokenizerArgs,

    /// Emit rows at their sentence lengths.
    #[arg(long)]
    no_padding: bool,

    /// Pad every row to this length; defaults to the longest row.
    #[arg(long)]
    max_len: Option<usize>,

    /// The padding id.
    #[arg(long, default_value = "0")]
    pad_val: u32,

    /// Which end of a row receives padding.
    #[arg(long, value_enum, default_value = "left")]
    pad_side: PadSideArg,

    /// Vectorize sentences in parallel.
    #[arg(long)]
    parallel: bool,

    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,
}

impl EncodeArgs {
    /// Run the encode command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(2)?;

        let options = PipelineOptions::<u32>::default()
            .with_padding(!self.no_padding)
            .with_target_len(self.max_len)
            .with_pad_val(self.pad_val)
            .with_pad_side(self.pad_side.into())
            .with_parallel(self.parallel);

        let pipeline = Pipeline::new(self.tokenizer.build_tokenizer()?, options);

        let reader = self.input.open_reader()?;
        let output = pipeline.process_reader(reader)?;

        log::info!("vocabulary size: {}", output.index.len());

        let mut writer = self.output.open_writer()?;
        write_rows(&mut writer, output.sequences.rows())?;

        Ok(())
    }
}
