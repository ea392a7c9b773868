//! CLI entrypoint for Relo Council
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Result, bail};
use clap::Parser;
use council_application::{
    DebateStrategy, DelegationMode, DelegationStrategy, HandleRequestUseCase, ReportSink,
    SequentialStrategy, SpecialistProvider,
};
use council_domain::RequestDraft;
use council_infrastructure::{
    BasicRequestNormalizer, CityDatabase, CityMatcher, ConfigLoader, FileConfig, JsonlAuditLog,
    MarkdownReportRenderer,
};
use council_presentation::{Cli, ConsoleFormatter, OutputFormat, ProgressReporter};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    info!("Starting Relo Council");

    // Load configuration
    let file_config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).map_err(|e| anyhow::anyhow!("{}", e))?
    };
    for issue in file_config.validate() {
        warn!("Config: {}", issue);
    }

    // Orchestration parameters: file config with CLI overrides
    let mut params = file_config.orchestration.to_params();
    if let Some(mode) = &cli.mode {
        let mode: DelegationMode = mode.parse().map_err(|e: String| anyhow::anyhow!(e))?;
        params = params.with_mode(mode);
    }
    if let Some(rounds) = cli.rounds {
        params = params.with_debate_rounds(rounds);
    }
    if let Some(secs) = cli.timeout_secs {
        params = params.with_request_timeout(Duration::from_secs(secs));
    }
    if let Err(e) = params.validate() {
        bail!("Invalid orchestration parameters: {}", e);
    }

    let (Some(from), Some(to)) = (cli.from.clone(), cli.to.clone()) else {
        bail!("--from and --to are required");
    };

    // === Dependency Injection ===
    let database = match &file_config.specialists.city_database {
        Some(path) => CityDatabase::load(path).unwrap_or_else(|e| {
            warn!("{}; continuing without the city database", e);
            CityDatabase::empty()
        }),
        None => CityDatabase::empty(),
    };
    let matcher = Arc::new(CityMatcher::new(database));

    let specialists = build_specialists(&file_config, Arc::clone(&matcher))?;
    if specialists.is_empty() {
        warn!("No specialists available; the verdict will be insufficient-data");
    }

    let normalizer = BasicRequestNormalizer::new().with_matcher(Arc::clone(&matcher));

    let strategy: Box<dyn DelegationStrategy> = match params.mode {
        DelegationMode::Sequential => Box::new(SequentialStrategy),
        DelegationMode::Debate => Box::new(DebateStrategy::new(params.debate_rounds)),
    };

    let mut use_case =
        HandleRequestUseCase::new(normalizer, strategy, specialists, params.clone());
    if let Some(path) = &file_config.reports.audit_log {
        if let Some(log) = JsonlAuditLog::open(path) {
            use_case = use_case.with_audit_log(Arc::new(log));
        }
    }

    let draft = RequestDraft {
        origin: Some(from.clone()),
        destination: Some(to.clone()),
        annual_income: cli.income,
        monthly_expenses: cli.expenses,
        preferences: cli.preferences.clone(),
        current_city_likes: cli.likes.clone(),
        current_city_dislikes: cli.dislikes.clone(),
        priority_factor: cli.priority.clone(),
    };

    // Print header
    if !cli.quiet {
        println!();
        println!("+============================================================+");
        println!("|          Relo Council - Should You Move?                   |");
        println!("+============================================================+");
        println!();
        println!("From: {}", from);
        println!("To:   {}", to);
        println!("Mode: {}", params.mode);
        println!();
    }

    // Execute with or without progress reporting
    let handled = if cli.quiet {
        use_case.handle(draft).await
    } else {
        let progress = ProgressReporter::new();
        use_case.handle_with_progress(draft, &progress).await
    };

    let handled = match handled {
        Ok(handled) => handled,
        Err(failure) => bail!("Request rejected: {}", failure),
    };

    // Output results
    let output = match cli.output {
        OutputFormat::Full => ConsoleFormatter::format(&handled.request, &handled.record),
        OutputFormat::Summary => {
            ConsoleFormatter::format_summary(&handled.request, &handled.record)
        }
        OutputFormat::Json => ConsoleFormatter::format_json(&handled.record),
    };
    println!("{}", output);

    // Persist the markdown report
    let reports_dir = cli
        .reports_dir
        .clone()
        .unwrap_or_else(|| file_config.reports.dir.clone());
    let renderer = MarkdownReportRenderer::new(reports_dir);
    match renderer.deliver(&handled.request, &handled.record).await {
        Ok(delivered) => {
            if !cli.quiet {
                println!("Report saved to {}", delivered.location);
            }
        }
        Err(e) => warn!("Could not save report: {}", e),
    }

    Ok(())
}

/// Construct the council from the configured data sources
#[cfg(feature = "web-tools")]
fn build_specialists(
    config: &FileConfig,
    matcher: Arc<CityMatcher>,
) -> Result<Vec<Arc<dyn SpecialistProvider>>> {
    use council_infrastructure::{
        BraveSearchClient, CitySentimentProvider, CostOfLivingProvider, MigrationStoriesProvider,
        SearchClient,
    };

    let timeout = Duration::from_secs(config.specialists.http_timeout_secs);
    let mut specialists: Vec<Arc<dyn SpecialistProvider>> = vec![Arc::new(
        CostOfLivingProvider::new(matcher, timeout)
            .map_err(|e| anyhow::anyhow!("cost specialist init failed: {}", e))?,
    )];

    match config.specialists.resolve_api_key() {
        Some(key) => {
            let search: Arc<dyn SearchClient> = Arc::new(
                BraveSearchClient::new(key, timeout)
                    .map_err(|e| anyhow::anyhow!("search client init failed: {}", e))?,
            );
            specialists.push(Arc::new(CitySentimentProvider::new(Arc::clone(&search))));
            specialists.push(Arc::new(MigrationStoriesProvider::new(search)));
        }
        None => {
            warn!(
                "No search API key configured (specialists.brave_api_key or BRAVE_API_KEY); \
                 sentiment and migration specialists are disabled"
            );
        }
    }

    Ok(specialists)
}

#[cfg(not(feature = "web-tools"))]
fn build_specialists(
    _config: &FileConfig,
    _matcher: Arc<CityMatcher>,
) -> Result<Vec<Arc<dyn SpecialistProvider>>> {
    warn!("Built without the web-tools feature; no specialists are available");
    Ok(Vec::new())
}
