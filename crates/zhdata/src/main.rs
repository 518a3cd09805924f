//! Adds traditional Chinese variants to the grammar patterns file.

mod cli;

use clap::Parser;
use cli::{Cli, Command};
use std::path::Path;
use zhdata::{
    grammar_patterns::TitleRule,
    pipeline::{self, EnrichOptions, DICTIONARY_PATH},
};

fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt::init();
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    match cli.command {
        Command::Traditional {
            dictionary,
            patterns,
            output,
            window,
            uniform_title,
            dry_run,
        } => {
            let mut options = EnrichOptions::for_project(&cli.project_dir);
            if let Some(dictionary) = dictionary {
                options.dictionary = dictionary;
            }
            if let Some(patterns) = patterns {
                options.output = patterns.clone();
                options.patterns = patterns;
            }
            if let Some(output) = output {
                options.output = output;
            }
            options.window = window;
            options.title_rule = if uniform_title {
                TitleRule::WhenHanzi
            } else {
                TitleRule::Always
            };
            options.dry_run = dry_run;
            pipeline::add_traditional_variants(&options)?;
            tracing::info!("done");
        }
        Command::Convert {
            dictionary,
            window,
            texts,
        } => {
            let dictionary = dictionary.unwrap_or_else(|| cli.project_dir.join(DICTIONARY_PATH));
            convert(&dictionary, window, &texts)?;
        }
    }

    Ok(())
}

fn convert(dictionary: &Path, window: usize, texts: &[String]) -> eyre::Result<()> {
    for converted in pipeline::convert_texts(dictionary, window, texts)? {
        println!("{converted}");
    }
    Ok(())
}
