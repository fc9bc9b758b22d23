// src/config.rs
use crate::constants::{DEFAULT_NODE_TYPE_LABEL, DEFAULT_NOTION_VERSION, MAX_FETCH_DEPTH};
use crate::error::AppError;
use crate::types::{ApiKey, DatabaseId};
use clap::Parser;
use std::path::PathBuf;

/// Parsed command-line input.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CommandLineInput {
    /// Notion database URL or ID whose records are converted
    pub database: String,

    /// Directory the generated documents are written to
    #[arg(short, long, default_value = "content/notion")]
    pub out_dir: PathBuf,

    /// Value sent in the Notion-Version request header
    #[arg(long, default_value = DEFAULT_NOTION_VERSION)]
    pub api_version: String,

    /// Do not prepend serialized properties as YAML front matter
    #[arg(long, default_value_t = false)]
    pub no_frontmatter: bool,

    /// Keep heading levels as authored instead of demoting them by one
    /// to leave level 1 for the page title
    #[arg(long, default_value_t = false)]
    pub keep_heading_levels: bool,

    /// Label namespacing document identifiers and naming the collection
    #[arg(long, default_value = DEFAULT_NODE_TYPE_LABEL)]
    pub label: String,

    /// Maximum nesting depth fetched per record's block tree
    #[arg(long, default_value_t = MAX_FETCH_DEPTH)]
    pub depth: u8,

    /// Fail the build when a record's content tree is incomplete
    /// instead of emitting best-effort documents
    #[arg(long, default_value_t = false)]
    pub fail_on_incomplete: bool,

    /// Enable verbose logging (debug level)
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

/// Resolved configuration — validated and ready to drive the pipeline.
#[derive(Debug, Clone)]
pub struct SourceConfig {
    pub api_key: ApiKey,
    pub api_version: String,
    pub database_id: DatabaseId,
    pub props_to_frontmatter: bool,
    pub lower_title_level: bool,
    pub node_type_label: String,
    pub max_depth: u8,
    pub fail_on_incomplete: bool,
    pub out_dir: PathBuf,
    pub verbose: bool,
}

impl SourceConfig {
    /// Resolves a complete configuration from CLI input and environment.
    pub fn resolve(cli: CommandLineInput) -> Result<Self, AppError> {
        let api_key_str = std::env::var("NOTION_API_KEY").map_err(|_| {
            AppError::MissingConfiguration(
                "NOTION_API_KEY environment variable not set".to_string(),
            )
        })?;
        let api_key = ApiKey::new(api_key_str)?;
        let database_id = DatabaseId::parse(&cli.database)?;

        Ok(SourceConfig {
            api_key,
            api_version: cli.api_version,
            database_id,
            props_to_frontmatter: !cli.no_frontmatter,
            lower_title_level: !cli.keep_heading_levels,
            node_type_label: cli.label,
            max_depth: cli.depth,
            fail_on_incomplete: cli.fail_on_incomplete,
            out_dir: cli.out_dir,
            verbose: cli.verbose,
        })
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            api_key: ApiKey::new("secret_default_key_for_testing_only")
                .expect("default API key is valid"),
            api_version: DEFAULT_NOTION_VERSION.to_string(),
            database_id: DatabaseId::parse("12345678123456781234567812345678")
                .expect("example database id is valid"),
            props_to_frontmatter: true,
            lower_title_level: true,
            node_type_label: DEFAULT_NODE_TYPE_LABEL.to_string(),
            max_depth: MAX_FETCH_DEPTH,
            fail_on_incomplete: false,
            out_dir: PathBuf::from("content/notion"),
            verbose: false,
        }
    }
}
