use anyhow::Result;
use tracing::info_span;

use trialrepo_cli::pipeline::{ConvertOptions, run_convert};
use trialrepo_cli::types::ConvertResult;

use crate::cli::ConvertArgs;

pub fn run_convert_command(args: &ConvertArgs) -> Result<ConvertResult> {
    let span = info_span!("convert", input_dir = %args.in_dir.display());
    let _guard = span.enter();
    let options = ConvertOptions::resolve(&args.in_dir, args.out_file.as_deref(), args.dry_run)?;
    run_convert(&options)
}
