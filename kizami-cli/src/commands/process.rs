//! Process command implementation

use anyhow::Context;
use clap::Args;
use kizami_core::{
    Document, IdHashKey, Language, Preprocessor, PreprocessorConfig, SplitBy,
};
use serde_json::json;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use crate::error::{CliError, CliResult};
use crate::input::{resolve_patterns, FileReader};
use crate::output::{JsonFormatter, OutputFormatter, TextFormatter};

/// Arguments for the process command
#[derive(Debug, Args)]
pub struct ProcessArgs {
    /// Input files or patterns (supports glob, "-" for stdin)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Unit of splitting
    #[arg(long, value_enum, default_value = "word")]
    pub split_by: SplitByArg,

    /// Maximum units per chunk
    #[arg(long, value_name = "N", default_value_t = 200)]
    pub split_length: usize,

    /// Units repeated at chunk boundaries
    #[arg(long, value_name = "N", default_value_t = 0)]
    pub split_overlap: usize,

    /// Never close a word chunk mid-sentence
    #[arg(long, value_name = "BOOL", default_value_t = true, action = clap::ArgAction::Set)]
    pub respect_sentence_boundary: bool,

    /// Strip recurring page headers and footers
    #[arg(long)]
    pub clean_header_footer: bool,

    /// Keep leading/trailing whitespace on lines
    #[arg(long)]
    pub no_clean_whitespace: bool,

    /// Keep runs of empty lines
    #[arg(long)]
    pub no_clean_empty_lines: bool,

    /// Literal substring to remove (repeatable)
    #[arg(long = "remove-substring", value_name = "STRING")]
    pub remove_substrings: Vec<String>,

    /// Tokenizer language
    #[arg(short, long, value_enum, default_value = "english")]
    pub language: LanguageArg,

    /// Document field for identity hashing (repeatable)
    #[arg(long = "id-hash-key", value_enum, value_name = "FIELD")]
    pub id_hash_keys: Vec<IdHashKeyArg>,

    /// Record a 1-based page number on each chunk
    #[arg(long)]
    pub add_page_number: bool,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// Chunks as blank-line-separated text blocks
    Text,
    /// JSON array of documents with metadata and ids
    Json,
}

/// Unit of splitting
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum SplitByArg {
    Word,
    Sentence,
    Passage,
    None,
}

impl From<SplitByArg> for SplitBy {
    fn from(arg: SplitByArg) -> Self {
        match arg {
            SplitByArg::Word => SplitBy::Word,
            SplitByArg::Sentence => SplitBy::Sentence,
            SplitByArg::Passage => SplitBy::Passage,
            SplitByArg::None => SplitBy::None,
        }
    }
}

/// Supported tokenizer languages
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum LanguageArg {
    English,
    German,
    French,
}

impl From<LanguageArg> for Language {
    fn from(arg: LanguageArg) -> Self {
        match arg {
            LanguageArg::English => Language::English,
            LanguageArg::German => Language::German,
            LanguageArg::French => Language::French,
        }
    }
}

/// Document fields available for identity hashing
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum IdHashKeyArg {
    Content,
    Meta,
}

impl From<IdHashKeyArg> for IdHashKey {
    fn from(arg: IdHashKeyArg) -> Self {
        match arg {
            IdHashKeyArg::Content => IdHashKey::Content,
            IdHashKeyArg::Meta => IdHashKey::Meta,
        }
    }
}

impl ProcessArgs {
    /// Execute the process command
    pub fn execute(&self) -> CliResult<()> {
        self.init_logging();

        log::info!("Starting document preprocessing");
        log::debug!("Arguments: {:?}", self);

        let config = self.build_config()?;
        let preprocessor = Preprocessor::with_config(config)
            .context("Invalid preprocessing configuration")?;

        let documents = self.read_documents()?;
        log::info!("Read {} input document(s)", documents.len());

        let chunks = preprocessor.process_batch(&documents);
        log::info!("Produced {} chunk(s)", chunks.len());

        self.write_output(&chunks)
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }
    }

    /// Translate CLI flags into a validated core configuration
    fn build_config(&self) -> CliResult<PreprocessorConfig> {
        let id_hash_keys: Vec<IdHashKey> = if self.id_hash_keys.is_empty() {
            vec![IdHashKey::Content]
        } else {
            self.id_hash_keys.iter().map(|&k| k.into()).collect()
        };

        let config = PreprocessorConfig::builder()
            .split_by(self.split_by.into())
            .split_length(self.split_length)
            .split_overlap(self.split_overlap)
            .split_respect_sentence_boundary(self.respect_sentence_boundary)
            .clean_whitespace(!self.no_clean_whitespace)
            .clean_empty_lines(!self.no_clean_empty_lines)
            .clean_header_footer(self.clean_header_footer)
            .remove_substrings(self.remove_substrings.clone())
            .language(self.language.into())
            .id_hash_keys(id_hash_keys)
            .add_page_number(self.add_page_number)
            .build()
            .map_err(CliError::from)?;

        Ok(config)
    }

    /// Read each input file (or stdin) into a document with a `name` meta field
    fn read_documents(&self) -> CliResult<Vec<Document>> {
        if self.input.len() == 1 && self.input[0] == "-" {
            let content = FileReader::read_stdin()?;
            let mut meta = std::collections::BTreeMap::new();
            meta.insert("name".to_string(), json!("stdin"));
            return Ok(vec![Document::with_meta(content, meta)]);
        }

        let files = resolve_patterns(&self.input)?;
        let mut documents = Vec::with_capacity(files.len());
        for path in files {
            let content = FileReader::read_text(&path)?;
            let mut meta = std::collections::BTreeMap::new();
            meta.insert("name".to_string(), json!(path.display().to_string()));
            documents.push(Document::with_meta(content, meta));
        }
        Ok(documents)
    }

    /// Write chunks through the selected formatter
    fn write_output(&self, chunks: &[Document]) -> CliResult<()> {
        let mut formatter: Box<dyn OutputFormatter> = match (&self.output, self.format) {
            (Some(path), OutputFormat::Text) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create: {}", path.display()))?;
                Box::new(TextFormatter::new(BufWriter::new(file)))
            }
            (Some(path), OutputFormat::Json) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create: {}", path.display()))?;
                Box::new(JsonFormatter::new(BufWriter::new(file)))
            }
            (None, OutputFormat::Text) => Box::new(TextFormatter::stdout()),
            (None, OutputFormat::Json) => Box::new(JsonFormatter::new(std::io::stdout())),
        };

        for chunk in chunks {
            formatter.format_document(chunk)?;
        }
        formatter.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arg_enums_map_to_core() {
        assert_eq!(SplitBy::from(SplitByArg::Sentence), SplitBy::Sentence);
        assert_eq!(SplitBy::from(SplitByArg::None), SplitBy::None);
        assert_eq!(Language::from(LanguageArg::German), Language::German);
        assert_eq!(IdHashKey::from(IdHashKeyArg::Meta), IdHashKey::Meta);
    }

    fn args(split_length: usize, split_overlap: usize) -> ProcessArgs {
        ProcessArgs {
            input: vec!["-".to_string()],
            output: None,
            format: OutputFormat::Text,
            split_by: SplitByArg::Word,
            split_length,
            split_overlap,
            respect_sentence_boundary: true,
            clean_header_footer: false,
            no_clean_whitespace: false,
            no_clean_empty_lines: false,
            remove_substrings: Vec::new(),
            language: LanguageArg::English,
            id_hash_keys: Vec::new(),
            add_page_number: false,
            quiet: true,
            verbose: 0,
        }
    }

    #[test]
    fn test_invalid_overlap_surfaces_as_config_error() {
        let err = args(5, 5).build_config().unwrap_err();
        assert!(err.is::<CliError>());
        assert!(err.to_string().starts_with("Configuration error:"));
    }

    #[test]
    fn test_valid_flags_build_a_config() {
        assert!(args(5, 2).build_config().is_ok());
    }
}
