// src/main.rs

use anyhow::Context;
use clap::Parser;
use log::LevelFilter;
use log4rs::{
    append::console::{ConsoleAppender, Target},
    append::file::FileAppender,
    config::{Appender, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
    Config,
};
use spacetraveling::{
    detail::resolve_post,
    execute_pipeline,
    output::{deliver_all, DeliveryTarget, OutputPlan, OutputReport},
    BuildSettings, CommandLineInput, ContentRepository, ListQuery, ListingAccumulator,
    PageRenderer, PrismicHttpClient, SiteCommand, SiteConfig, SiteContent, StaticSite,
};
use std::fs;
use std::sync::Arc;

/// Sets up logging configuration.
fn setup_logging(verbose: bool) -> anyhow::Result<()> {
    let log_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let log_file_path = std::env::temp_dir().join("spacetraveling.log");
    if let Some(parent) = log_file_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let pattern = if verbose {
        "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}"
    } else {
        "{m}{n}"
    };

    // stdout carries command output (JSON, HTML), so logs go to stderr.
    let console_appender = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(pattern)))
        .build();

    let file_appender = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(
            "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}",
        )))
        .build(&log_file_path)?;

    let config = Config::builder()
        .appender(Appender::builder().build("console", Box::new(console_appender)))
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(LevelFilter::Debug)))
                .build("file", Box::new(file_appender)),
        )
        .build(
            Root::builder()
                .appender("console")
                .appender("file")
                .build(log_level),
        )?;

    log4rs::init_config(config)?;
    log::info!("Logging initialized. Log file: {}", log_file_path.display());
    Ok(())
}

fn repository(config: &SiteConfig) -> anyhow::Result<Arc<dyn ContentRepository>> {
    let client = PrismicHttpClient::new(config.endpoint.clone(), config.access_token.clone())?;
    Ok(Arc::new(client))
}

fn renderer(config: &SiteConfig) -> anyhow::Result<PageRenderer> {
    Ok(PageRenderer::new(config.template_dir.as_deref())?)
}

/// `build`: fetch → compose → deliver into the output directory.
async fn run_build(config: &SiteConfig, settings: &BuildSettings) -> anyhow::Result<()> {
    let site = StaticSite::new(
        repository(config)?,
        config.document_type.clone(),
        config.page_size,
        settings.clone(),
        renderer(config)?,
    );

    let (content, report) = execute_pipeline(&site)
        .await
        .context("static build failed")?;
    report_build(settings, &content, &report);
    Ok(())
}

fn report_build(settings: &BuildSettings, content: &SiteContent, report: &OutputReport) {
    for uid in &content.missing {
        eprintln!("⚠️  Post '{}' not found; no page generated.", uid);
    }

    let pages = report
        .completed
        .iter()
        .filter(|c| matches!(c.operation, DeliveryTarget::WriteFile { .. }))
        .count();
    println!(
        "✓ Wrote {} pages ({} listed posts, {} post pages) to {}",
        pages,
        content.listing.len(),
        content.posts.len(),
        settings.out_dir.display()
    );
}

/// `list`: the listing after `more` extra pages, as JSON.
async fn run_list(config: &SiteConfig, more: u32) -> anyhow::Result<()> {
    let query = ListQuery::latest_first(config.document_type.clone(), config.page_size);
    let accumulator = ListingAccumulator::load_initial(repository(config)?, &query).await?;
    accumulator.load_pages(more).await?;

    let state = accumulator.into_state();
    print(serde_json::to_string_pretty(&state)?)
}

/// `post`: one resolved post, as JSON or as its rendered page.
async fn run_post(config: &SiteConfig, uid: &spacetraveling::PostUid, html: bool) -> anyhow::Result<()> {
    let repository = repository(config)?;
    let post = resolve_post(repository.as_ref(), &config.document_type, uid).await?;

    let content = if html {
        renderer(config)?.render_post(&post)?.into_string()
    } else {
        serde_json::to_string_pretty(&post)?
    };
    print(content)
}

fn print(content: String) -> anyhow::Result<()> {
    deliver_all(OutputPlan::new().with_operation(DeliveryTarget::PrintToStdout { content }))?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CommandLineInput::parse();

    setup_logging(cli.verbose).context("failed to initialize logging")?;

    let config = SiteConfig::resolve(cli)?;
    log::debug!(
        "Endpoint {}, document type '{}', page size {}, token {}",
        config.endpoint,
        config.document_type,
        config.page_size,
        config
            .access_token
            .as_ref()
            .map(|t| t.to_string())
            .unwrap_or_else(|| "none".to_string())
    );

    match &config.command {
        SiteCommand::Build(settings) => run_build(&config, settings).await,
        SiteCommand::List { more } => run_list(&config, *more).await,
        SiteCommand::Post { uid, html } => run_post(&config, uid, *html).await,
    }
}
