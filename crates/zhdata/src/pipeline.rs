//! Ties the steps of adding traditional variants to the grammar patterns together.

use crate::{
    backup, cedict,
    grammar_patterns::{Enricher, EnrichmentReport, GrammarPatterns, TitleRule},
};
use eyre::WrapErr;
use std::{
    fs::{self, File},
    io::{BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};
use zhconv::{Converter, Mapping};

/// The location of the dictionary, relative to the project directory.
pub const DICTIONARY_PATH: &str = "assets/data/cedict.json";
/// The location of the grammar patterns, relative to the project directory.
pub const GRAMMAR_PATTERNS_PATH: &str = "assets/data/grammar_patterns.json";

#[derive(Debug, Clone)]
pub struct EnrichOptions {
    pub dictionary: PathBuf,
    pub patterns: PathBuf,
    /// Usually the same as `patterns`.
    pub output: PathBuf,
    pub window: usize,
    pub title_rule: TitleRule,
    /// Skips the backup and the write.
    pub dry_run: bool,
}

impl EnrichOptions {
    /// Options for the default file layout under the project directory.
    pub fn for_project(project_dir: &Path) -> Self {
        let patterns = project_dir.join(GRAMMAR_PATTERNS_PATH);
        Self {
            dictionary: project_dir.join(DICTIONARY_PATH),
            output: patterns.clone(),
            patterns,
            window: zhconv::converter::DEFAULT_WINDOW,
            title_rule: TitleRule::default(),
            dry_run: false,
        }
    }
}

/// Loads the dictionary mapping, failing if no mappings could be loaded.
pub fn load_mapping(dictionary: &Path) -> eyre::Result<Mapping> {
    let mapping = cedict::load_or_empty(dictionary);
    if mapping.is_empty() {
        eyre::bail!(
            "Failed to load any mappings from the dictionary at '{}'",
            dictionary.display()
        );
    }
    Ok(mapping)
}

pub fn add_traditional_variants(options: &EnrichOptions) -> eyre::Result<EnrichmentReport> {
    eyre::ensure!(options.window > 0, "The match window must be at least 1");
    let mapping = load_mapping(&options.dictionary)?;

    if options.dry_run {
        tracing::info!("dry run, skipping backup");
    } else if options.output.exists() {
        backup::create_or_warn(&options.output);
    }

    tracing::info!(
        "processing grammar patterns from {}",
        options.patterns.display()
    );
    let mut patterns = read_patterns(&options.patterns)?;
    let converter = Converter::with_window(&mapping, options.window);
    let report = Enricher::new(converter, options.title_rule)
        .enrich(&mut patterns)
        .wrap_err("Failed to process grammar patterns")?;

    if options.dry_run {
        tracing::info!("dry run, not writing {}", options.output.display());
    } else {
        write_patterns(&options.output, &patterns)?;
        tracing::info!(
            "successfully saved updated patterns to {}",
            options.output.display()
        );
    }
    tracing::info!(
        "wrote {} traditional variants for {} patterns",
        report.fields_written,
        report.patterns
    );
    Ok(report)
}

pub fn read_patterns(path: &Path) -> eyre::Result<GrammarPatterns> {
    let file = File::open(path)
        .wrap_err_with(|| format!("Failed to open file at '{}'", path.display()))?;
    serde_json::from_reader(BufReader::new(file)).wrap_err_with(|| {
        format!(
            "Failed to deserialize grammar patterns at '{}'",
            path.display()
        )
    })
}

/// Converts each text with the dictionary, warning about hanzi the dictionary has no entry for.
pub fn convert_texts(
    dictionary: &Path,
    window: usize,
    texts: &[String],
) -> eyre::Result<Vec<String>> {
    eyre::ensure!(window > 0, "The match window must be at least 1");
    let mapping = load_mapping(dictionary)?;
    let converter = Converter::with_window(&mapping, window);
    let converted = texts
        .iter()
        .map(|text| {
            let unmapped = converter.unmapped(text);
            if !unmapped.is_empty() {
                tracing::warn!("no mapping for {} in {text}", unmapped.join(""));
            }
            converter.convert(text)
        })
        .collect();
    Ok(converted)
}

/// Writes the patterns to a temporary file next to the destination and then moves it in place,
/// so the destination is never left half-written.
/// An existing destination keeps its permissions, and if it's a symlink the link target is written.
pub fn write_patterns(path: &Path, patterns: &GrammarPatterns) -> eyre::Result<()> {
    let existing = match fs::canonicalize(path) {
        Ok(target) => Some(target),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => None,
        Err(err) => {
            return Err(err).wrap_err_with(|| format!("Failed to resolve '{}'", path.display()))
        }
    };
    let path = existing.as_deref().unwrap_or(path);
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut temp = tempfile::NamedTempFile::new_in(dir)
        .wrap_err_with(|| format!("Failed to create a temporary file in '{}'", dir.display()))?;

    let mut writer = BufWriter::new(temp.as_file_mut());
    serde_json::to_writer_pretty(&mut writer, patterns)?;
    writer.flush()?;
    drop(writer);

    if existing.is_some() {
        let permissions = fs::metadata(path)
            .wrap_err_with(|| format!("Failed to read metadata of '{}'", path.display()))?
            .permissions();
        temp.as_file()
            .set_permissions(permissions)
            .wrap_err("Failed to set the permissions of the temporary file")?;
    }

    temp.persist(path)
        .wrap_err_with(|| format!("Failed to write '{}'", path.display()))?;
    Ok(())
}
