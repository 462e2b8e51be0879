use anyhow::Result;
use askama::Template;
use clap::Parser;
use potd_fetch::algorithms::Algorithm;
use potd_fetch::display::{ProblemReport, SolveGuide};
use potd_fetch::potd::{log_failure, HTML_URL, USER_AGENT};
use potd_fetch::{telemetry, ProblemFetcherBuilder, Source, SourceKind};

/// Fetch today's Problem of the Day and print a solving scaffold.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Retrieval strategy: `html` scrapes the public page, `api` calls the JSON endpoint.
    #[arg(short, long, default_value_t = SourceKind::HtmlScrape)]
    source: SourceKind,

    /// Override the URL of the selected strategy.
    #[arg(long)]
    url: Option<String>,

    #[arg(long, default_value = USER_AGENT)]
    user_agent: String,

    /// Run the bundled algorithm snippets on sample inputs.
    #[arg(long)]
    demo_algorithms: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    telemetry::init_tracing();
    let args = Args::parse();

    let fetcher = ProblemFetcherBuilder::default()
        .user_agent(args.user_agent)
        .build()?;
    let source = match args.url {
        Some(url) => Source::new(args.source, url),
        None => Source::from(args.source),
    };

    println!("Fetching today's Problem of the Day from {}...", source.url);
    match fetcher.fetch(&source).await {
        Ok(record) => {
            println!("{}", ProblemReport::from(&record).render()?);
            println!("{}", SolveGuide::default().render()?);
        }
        Err(e) => {
            log_failure(&source, &e);
            println!("Error fetching problem: {}", e);
            println!(
                "Failed to fetch the problem. Please check manually at: {}",
                HTML_URL
            );
        }
    }

    if args.demo_algorithms {
        println!();
        for algorithm in Algorithm::all() {
            println!("{}", algorithm.demo());
        }
    }

    println!("\nNote: Customize the solution based on the specific problem requirements.");
    Ok(())
}
