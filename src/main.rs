use clap::Parser;
use schema_report::{Report, ReportError, SortOrder, rules};
use std::process::ExitCode;

mod args;
use args::Args;

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging
    env_logger::init();

    let args = Args::parse();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            ::log::error!("Report failed: {}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Apply command-line overrides on top of the config file, then build and export
async fn run(args: Args) -> Result<(), ReportError> {
    if args.list_types {
        print!("{}", rules::rules_listing());
        return Ok(());
    }

    let mut report = Report::new();

    if let Some(config_file) = &args.config {
        ::log::info!("Loading configuration from file: {}", config_file);
        report = report.with_config_file(config_file)?;
    }

    if let Some(input) = args.input {
        report = report.with_input(input);
    }
    if !args.urls.is_empty() {
        eprintln!("Note: fetching URLs requires a WebDriver server (e.g., ChromeDriver).");
        report = report.with_urls(args.urls);
    }
    if let Some(concurrency) = args.concurrency {
        report = report.with_max_concurrency(concurrency);
    }
    if let Some(scanner) = args.scanner {
        report = report.with_scanner(scanner.into());
    }

    let mut view = report.config().view.clone();
    if let Some(status) = args.status {
        view.status = status.into();
    }
    if let Some(search) = args.search {
        view.search = Some(search);
    }
    if let Some(sort) = args.sort {
        view.sort = Some(sort.into());
    }
    if args.desc {
        view.order = SortOrder::Desc;
    }
    report = report.with_view(view);

    if let Some(format) = args.format {
        report = report.with_format(format.into());
    }
    if let Some(out_dir) = args.out_dir {
        report = report.with_output_dir(out_dir);
    }

    let start_time = std::time::Instant::now();
    let output = report.generate().await?;
    ::log::info!(
        "Report built in {:.2} seconds",
        start_time.elapsed().as_secs_f64()
    );

    eprint!("{}", output.summary);

    let format = report.config().format;
    match &report.config().output_dir {
        Some(dir) => {
            let path = output.write_to(format, dir)?;
            eprintln!("Wrote {}", path.display());
        }
        None => print!("{}", output.render(format)?),
    }

    Ok(())
}
