use clap::{Parser, Subcommand};
use std::path::PathBuf;
use zhconv::converter::DEFAULT_WINDOW;

#[derive(Parser)]
#[command(author, version, about, long_about)]
pub struct Cli {
    /// The project directory, the data files are looked up under assets/data.
    #[arg(
        short = 'C',
        long,
        env = "ZHDATA_PROJECT_DIR",
        default_value = ".",
        global = true
    )]
    pub project_dir: PathBuf,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Adds traditional variants to the grammar patterns file.
    Traditional {
        /// The path to the CEDICT JSON file. Defaults to assets/data/cedict.json.
        #[arg(short, long)]
        dictionary: Option<PathBuf>,
        /// The path to the grammar patterns file. Defaults to assets/data/grammar_patterns.json.
        #[arg(short, long)]
        patterns: Option<PathBuf>,
        /// The path to the output file. Defaults to overwriting the grammar patterns file.
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// The maximum length in characters of a word looked up in the dictionary.
        #[arg(short, long, default_value_t = DEFAULT_WINDOW)]
        window: usize,
        /// Only adds a traditional title if the title contains Chinese characters.
        #[arg(long)]
        uniform_title: bool,
        /// Processes the patterns without creating a backup or writing any output.
        #[arg(long)]
        dry_run: bool,
    },
    /// Converts the given texts and prints the results, one per line.
    Convert {
        /// The path to the CEDICT JSON file. Defaults to assets/data/cedict.json.
        #[arg(short, long)]
        dictionary: Option<PathBuf>,
        /// The maximum length in characters of a word looked up in the dictionary.
        #[arg(short, long, default_value_t = DEFAULT_WINDOW)]
        window: usize,
        /// The simplified Chinese texts to convert.
        #[arg(required = true)]
        texts: Vec<String>,
    },
}
