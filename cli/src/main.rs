//! CLI entrypoint for outreach-scout
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

mod results_file;

use anyhow::{Context, Result, anyhow, bail};
use clap::{CommandFactory, Parser};
use outreach_application::{
    DispatchMailUseCase, NoDispatchNotifier, NoProgress, OutreachContext, RunOutreachInput,
    RunOutreachUseCase, job_for_result,
};
use outreach_infrastructure::{
    ConfigLoader, FetchOptions, FileConfig, HttpPageFetcher, OpenAiTextGenerator,
    SmtpMailTransport,
};
use outreach_presentation::{
    Cli, Command, ConsoleFormatter, DispatchReporter, OutputFormat, ProgressReporter, ScrapeArgs,
    SendArgs, SimpleProgress,
};
use std::io::IsTerminal;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::AsyncReadExt;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let _log_guard = init_logging(cli.verbose, cli.log_file.as_deref())?;

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(());
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };

    let issues = config.validate();
    if !issues.is_empty() {
        for issue in &issues {
            error!("{}", issue);
        }
        bail!("Invalid configuration ({} issue(s))", issues.len());
    }

    info!("Starting outreach-scout");

    match cli.command {
        Some(Command::Scrape(args)) => run_scrape(args, &config, cli.quiet).await,
        Some(Command::Send(args)) => run_send(args, &config, cli.quiet).await,
        Some(Command::CheckTransports) => run_check(&config, cli.quiet).await,
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    }
}

/// Initialize logging based on verbosity level.
///
/// `RUST_LOG` wins over `-v` when set. The returned guard must live until
/// exit so the log file is flushed.
fn init_logging(verbose: u8, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    });

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    let Some(path) = log_file else {
        tracing_subscriber::registry()
            .with(filter)
            .with(stderr_layer)
            .init();
        return Ok(None);
    };

    let file_name = path
        .file_name()
        .with_context(|| format!("Invalid log file path: {}", path.display()))?;
    let directory = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let (writer, guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::never(directory, file_name));

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(writer),
        )
        .init();

    Ok(Some(guard))
}

async fn run_scrape(args: ScrapeArgs, config: &FileConfig, quiet: bool) -> Result<()> {
    let text = read_input(args.input_path().map(|p| p.as_path())).await?;

    let api_key = config.generation.resolve_api_key().with_context(|| {
        format!(
            "No API key found; set {} or generation.api_key",
            config.generation.api_key_env
        )
    })?;

    // === Dependency Injection ===
    let fetcher = Arc::new(HttpPageFetcher::new(FetchOptions {
        timeout: Duration::from_secs(config.pipeline.fetch_timeout_seconds),
        user_agent: config.pipeline.user_agent.clone(),
        max_body_bytes: config.pipeline.max_body_bytes,
    })?);
    let generator = Arc::new(OpenAiTextGenerator::new(
        api_key,
        config.generation.base_url.clone(),
        Duration::from_secs(config.generation.timeout_seconds),
    )?);

    let mut context = OutreachContext::new(config.sender.clone(), config.generation.to_settings());
    if let Some(model) = args.model {
        context = context.with_model(model);
    }
    if context.sender.is_empty() {
        warn!("No [sender] profile configured; drafts will have an empty signature");
    }

    let mut pipeline = config.pipeline.to_pipeline_config();
    if let Some(concurrency) = args.concurrency {
        pipeline = pipeline.with_concurrency(concurrency);
    }

    let input = RunOutreachInput::from_text(&text, context).with_config(pipeline);

    let cancel = CancellationToken::new();
    let on_interrupt = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupted, cancelling unfinished domains");
            on_interrupt.cancel();
        }
    });

    let use_case = RunOutreachUseCase::new(fetcher, generator);

    // Execute with or without progress reporting
    let outcome = if quiet {
        use_case
            .execute_with_progress(input, &NoProgress, cancel)
            .await
    } else if std::io::stderr().is_terminal() {
        let progress = ProgressReporter::new();
        use_case.execute_with_progress(input, &progress, cancel).await
    } else {
        use_case
            .execute_with_progress(input, &SimpleProgress, cancel)
            .await
    };

    if let Some(path) = &args.export {
        results_file::write_results(path, &outcome.results).await?;
        info!(
            "Exported {} result(s) to {}",
            outcome.results.len(),
            path.display()
        );
    }

    let output = match args.output {
        OutputFormat::Full => ConsoleFormatter::format(&outcome),
        OutputFormat::Summary => ConsoleFormatter::format_summary(&outcome),
        OutputFormat::Json => ConsoleFormatter::format_json(&outcome.results),
    };
    println!("{}", output);

    if outcome.succeeded() == 0 && outcome.failed() > 0 {
        bail!("No domain produced a result");
    }

    Ok(())
}

async fn run_send(args: SendArgs, config: &FileConfig, quiet: bool) -> Result<()> {
    let transports = config.transport_configs()?;
    let results = results_file::read_results(&args.results).await?;

    let mut selected = results_file::select_hosts(results, &args.hosts);
    for host in &args.hosts {
        if !selected.iter().any(|r| r.host.eq_ignore_ascii_case(host)) {
            warn!("{}: not found in {}", host, args.results.display());
        }
    }

    if let Some(to) = &args.to {
        if selected.len() != 1 {
            bail!(
                "--to needs exactly one matching --host ({} matched)",
                selected.len()
            );
        }
        selected = selected.into_iter().map(|r| r.with_recipient(to)).collect();
    }

    let jobs: Vec<_> = selected
        .iter()
        .filter_map(|result| {
            let job = job_for_result(result, &args.subject);
            if job.is_none() {
                warn!("{}: no recipient, skipping", result.host);
            }
            job
        })
        .collect();

    if jobs.is_empty() {
        bail!("Nothing to send");
    }

    if args.dry_run {
        for job in &jobs {
            println!("To: {}", job.recipient);
            println!("Subject: {}", job.subject);
            println!();
            println!("{}", job.body);
            println!("{}", "-".repeat(60));
        }
        return Ok(());
    }

    let use_case = DispatchMailUseCase::new(Arc::new(SmtpMailTransport::default()));
    let mut delivered = 0;

    for job in &jobs {
        let report = if quiet {
            use_case.execute(job, &transports).await?
        } else {
            use_case
                .execute_with_notifier(job, &transports, &DispatchReporter)
                .await?
        };
        if report.any_succeeded() {
            delivered += 1;
        }
    }

    println!("{} of {} message(s) delivered", delivered, jobs.len());

    if delivered == 0 {
        bail!("No message was delivered");
    }

    Ok(())
}

async fn run_check(config: &FileConfig, quiet: bool) -> Result<()> {
    let transports = config.transport_configs()?;
    if transports.is_empty() {
        bail!("No mail transports configured");
    }

    let use_case = DispatchMailUseCase::new(Arc::new(SmtpMailTransport::default()));
    let attempts = if quiet {
        use_case.check(&transports, &NoDispatchNotifier).await
    } else {
        use_case.check(&transports, &DispatchReporter).await
    };

    println!("{}", ConsoleFormatter::format_check(&attempts));

    let failed = attempts.iter().filter(|a| !a.outcome.is_success()).count();
    if failed > 0 {
        bail!("{} of {} transport(s) failed", failed, attempts.len());
    }

    Ok(())
}

/// Read the domain list from a file, or stdin when `path` is `None`
async fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut text = String::new();
            tokio::io::stdin()
                .read_to_string(&mut text)
                .await
                .context("Failed to read domains from stdin")?;
            Ok(text)
        }
    }
}
