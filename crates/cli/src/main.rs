use anyhow::Result;
use clap::{Parser, ValueEnum};
use seqrename_core::{
    rename, resolve_directory, ConsoleReporter, JsonLinesReporter, RenameOptions,
    DEFAULT_NUM_DIGITS, DEFAULT_PREFIX, DEFAULT_START_NUM,
};
use std::io;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "seqrename-cli")]
#[command(about = "Renames the images in a folder to <prefix>_<number> in file-name order")]
struct Cli {
    /// Folder to scan (not recursive). Defaults to the current directory.
    directory: Option<PathBuf>,
    #[arg(long, default_value = DEFAULT_PREFIX)]
    prefix: String,
    #[arg(long, default_value_t = DEFAULT_START_NUM, allow_negative_numbers = true)]
    start_num: i64,
    #[arg(long, default_value_t = DEFAULT_NUM_DIGITS)]
    num_digits: usize,
    /// Print the planned renames without touching any file.
    #[arg(long, default_value_t = false)]
    preview: bool,
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    output: OutputFormat,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let options = RenameOptions {
        directory: resolve_directory(cli.directory)?,
        prefix: cli.prefix,
        start_num: cli.start_num,
        num_digits: cli.num_digits,
        preview: cli.preview,
    };

    let summary = match cli.output {
        OutputFormat::Table => rename(&options, &mut ConsoleReporter::stdout()),
        OutputFormat::Json => rename(&options, &mut JsonLinesReporter::new(io::stdout())),
    };

    if options.preview && summary.previewed > 0 {
        eprintln!("preview mode: no files were changed. Run again without --preview to apply.");
    }

    Ok(())
}
