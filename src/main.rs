// src/main.rs
use anyhow::Context;
use clap::Parser;
use log::LevelFilter;
use log4rs::{
    append::console::ConsoleAppender,
    append::file::FileAppender,
    config::{Appender, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
    Config,
};
use notion2site::{
    write_documents, CommandLineInput, NotionHttpClient, SourceConfig, SourcePipeline,
};

/// Sets up console + file logging.
fn setup_logging(verbose: bool) -> anyhow::Result<()> {
    let log_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let log_file_path = std::env::temp_dir().join("notion2site.log");

    let pattern = if verbose {
        "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}"
    } else {
        "{m}{n}"
    };

    let stdout_appender = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new(pattern)))
        .build();

    let file_appender = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(
            "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}",
        )))
        .build(&log_file_path)?;

    let config = Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout_appender)))
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(LevelFilter::Debug)))
                .build("file", Box::new(file_appender)),
        )
        .build(
            Root::builder()
                .appender("stdout")
                .appender("file")
                .build(log_level),
        )?;

    log4rs::init_config(config)?;
    log::debug!("Logging initialized. Log file: {}", log_file_path.display());
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CommandLineInput::parse();
    setup_logging(cli.verbose)?;

    let config = SourceConfig::resolve(cli).context("failed to resolve configuration")?;
    let client = NotionHttpClient::new(&config.api_key, &config.api_version)
        .context("failed to build HTTP client")?;

    let out_dir = config.out_dir.clone();
    let pipeline = SourcePipeline::new(client, config);
    let documents = pipeline
        .build_documents()
        .await
        .context("failed to build documents")?;

    let report = write_documents(&documents, &out_dir).context("failed to write documents")?;
    println!(
        "Converted {} records into {} ({} written, {} failed)",
        documents.len(),
        out_dir.display(),
        report.written.len(),
        report.failed
    );

    if report.failed > 0 {
        anyhow::bail!("{} documents failed to write", report.failed);
    }
    Ok(())
}
