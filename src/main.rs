use owo_colors::OwoColorize;
use pkg_history::adapters::outbound::console::StderrProgressReporter;
use pkg_history::adapters::outbound::filesystem::FileSystemHistoryStore;
use pkg_history::application::dto::{BrowseRequest, MergeRequest};
use pkg_history::application::factories::{
    DocumentSourceFactory, FormatterFactory, PresenterFactory, PresenterType,
};
use pkg_history::application::use_cases::{BrowseHistoryUseCase, MergeHistoryUseCase};
use pkg_history::cli::{BrowseArgs, Cli, Commands, MergeArgs};
use pkg_history::config::{
    discover_config, load_config_from_path, SourceConfig, SourceOverrides,
};
use pkg_history::shared::error::ExitCode;
use pkg_history::shared::Result;
use std::path::Path;
use std::process;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    let cli = Cli::parse_args();
    init_tracing(cli.verbose);

    let exit_code = match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("\n{}\n", "❌ An error occurred:".red().bold());
            eprintln!("{}", e);

            // Display error chain
            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\n{} {}", "Caused by:".yellow(), err);
                source = err.source();
            }

            eprintln!();
            ExitCode::ApplicationError
        }
    };

    process::exit(exit_code.as_i32());
}

/// Diagnostic logging goes to stderr; `RUST_LOG` overrides the default level.
fn init_tracing(verbose: bool) {
    let log_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}

async fn run(cli: Cli) -> Result<ExitCode> {
    match cli.command {
        Commands::Browse(args) => browse(args).await,
        Commands::Merge(args) => merge(args).await,
    }
}

async fn browse(args: BrowseArgs) -> Result<ExitCode> {
    // Load config: explicit path or auto-discovery in the working directory
    let config_file = match args.config.as_deref() {
        Some(path) => Some(load_config_from_path(path)?),
        None => discover_config(Path::new("."))?,
    };

    let config = SourceConfig::resolve(
        config_file.as_ref(),
        SourceOverrides {
            remote_base_url: args.remote_base_url,
            local_dir: args.local_dir,
            format: args.format,
            expand_all: args.expand_all,
        },
    )?;
    let dev_mode = config.dev_mode(args.dev, args.page_url.as_deref());

    let request = BrowseRequest::builder()
        .catalog_path(config.catalog_file.clone())
        .history_path(config.history_file.clone())
        .package(args.package)
        .search(args.search)
        .expand_all(config.expand_all)
        .build()?;

    // Create adapters (Dependency Injection)
    let document_source = DocumentSourceFactory::create(&config, dev_mode)?;
    let progress_reporter = StderrProgressReporter::new();

    let use_case = BrowseHistoryUseCase::new(document_source, progress_reporter);
    let response = use_case.execute(request, dev_mode).await;

    eprintln!("{}", FormatterFactory::progress_message(config.format));
    let formatter = FormatterFactory::create(config.format);
    let output = formatter.format(&response.read_model)?;

    let presenter = PresenterFactory::create(PresenterType::from_output(args.output));
    presenter.present(&output)?;

    if response.degraded {
        Ok(ExitCode::PartialRender)
    } else {
        Ok(ExitCode::Success)
    }
}

async fn merge(args: MergeArgs) -> Result<ExitCode> {
    let request = MergeRequest {
        packagesite_path: args.packagesite,
        history_path: args.history,
        build: args.build,
        release_date: args.release_date,
        freebsd_version: args.freebsd_version,
        packages_count: args.packages_count,
        catalog_out: args.catalog_out,
        readme_path: args.readme,
    };

    let use_case = MergeHistoryUseCase::new(FileSystemHistoryStore::new(), StderrProgressReporter::new());
    use_case
        .execute(request, chrono::Local::now().date_naive())
        .await?;

    Ok(ExitCode::Success)
}
