use clap::Parser;
use schema_report::{ExportFormat, Report, SortKey, SortOrder, StatusFilter, ViewConfig};
use std::error::Error;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON file with crawled pages
    #[arg(short, long)]
    input: String,

    /// Only list entries that have warnings
    #[arg(short, long)]
    warnings_only: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Initialize logger
    env_logger::init();

    let args = Args::parse();
    println!("Building report for: {}", args.input);

    let view = ViewConfig {
        status: if args.warnings_only {
            StatusFilter::Warnings
        } else {
            StatusFilter::All
        },
        sort: Some(SortKey::Warnings),
        order: SortOrder::Desc,
        ..ViewConfig::default()
    };

    let output = Report::new()
        .with_input(args.input)
        .with_view(view)
        .generate()
        .await?;

    print!("{}", output.summary);
    for entry in &output.visible {
        println!("{} [{}]", entry.url, entry.type_label);
        for warning in &entry.warnings {
            println!("  - {}", warning);
        }
    }

    println!();
    print!("{}", output.render(ExportFormat::Markdown)?);
    Ok(())
}
