use std::time::Duration;

use clap::Parser;
use tracing::debug;

use leccap_downloader::browser::webdriver::WebDriverSession;
use leccap_downloader::cli::Cli;
use leccap_downloader::common::prompt::{Prompter, StdinPrompter};
use leccap_downloader::downloader::AssetDownloader;
use leccap_downloader::metadata::MetadataFetcher;
use leccap_downloader::output::OutputLayout;
use leccap_downloader::resolver::CourseResolver;
use leccap_downloader::resolver::lectures::LectureEnumerator;
use leccap_downloader::selection::parse_selection;
use leccap_downloader::text::CourseQuery;
use leccap_downloader::{Result, log_error, log_info, log_success, log_warning};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args = Cli::parse();
    let mut prompter = StdinPrompter;

    let course_input = match &args.course {
        Some(name) => name.clone(),
        None => prompter.ask("Enter course name (e.g. EECS 281)")?,
    };
    let query = CourseQuery::new(&course_input);
    if query.as_str().is_empty() {
        log_error!("Course name is empty.");
        return Ok(());
    }
    log_info!("Course files will be saved under '{}'", query.as_str());

    let browser = WebDriverSession::connect(&args.webdriver, &args.profile_dir).await?;
    let outcome = run(&args, &browser, &mut prompter, &query).await;
    if let Err(e) = browser.quit().await {
        debug!("webdriver quit failed: {}", e);
    }
    outcome
}

/// The whole pipeline, separated from `main` so the browser session is quit
/// on every exit path.
async fn run(
    args: &Cli,
    browser: &WebDriverSession,
    prompter: &mut StdinPrompter,
    query: &CourseQuery,
) -> Result<()> {
    log_info!("Searching for course...");
    let mut resolver = CourseResolver::new(
        browser,
        prompter,
        &args.portal,
        Duration::from_secs(args.login_timeout),
    );
    let Some(course) = resolver.resolve(query).await? else {
        log_error!("Could not find course! Check your search term.");
        return Ok(());
    };
    log_success!("Found course: {}", course.title.trim());

    let handles = LectureEnumerator::new(browser).enumerate(&course).await?;
    if handles.is_empty() {
        log_warning!("This course has no published recordings.");
        return Ok(());
    }
    log_info!("{} recordings available.", handles.len());

    let range_input = match &args.parts {
        Some(range) => range.clone(),
        None => prompter.ask("Select lectures (e.g. 1-3,5; empty selects all)")?,
    };
    let selection = parse_selection(&range_input, handles.len());
    if selection.is_empty() {
        log_warning!("No lectures selected, nothing to do.");
        return Ok(());
    }

    let fetcher = MetadataFetcher::new(browser);
    let records = fetcher.fetch_selected(&handles, &selection).await?;

    let layout = OutputLayout::new(&args.output_dir, query.as_str());
    fetcher.save_records(&records, &layout).await?;
    log_success!("Saved {} metadata records.", records.len());

    log_info!("Downloading media. This may take a very long time...");
    let summary = AssetDownloader::new(browser, &layout)
        .download_all(&records)
        .await?;
    if summary.failed > 0 {
        log_warning!(
            "Downloaded {} lectures, {} failed.",
            summary.completed,
            summary.failed
        );
    } else {
        log_success!("Downloaded {} lectures.", summary.completed);
    }
    Ok(())
}
