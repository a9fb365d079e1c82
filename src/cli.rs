use clap::Parser;
use std::path::PathBuf;

/// Lecture capture batch downloader
#[derive(Parser, Debug)]
#[command(name = "leccapdl")]
#[command(version = "1.0")]
#[command(about = "Batch downloader for the leccap lecture capture portal", long_about = None)]
pub struct Cli {
    /// Course name to search for (prompted when omitted)
    #[arg(long, value_name = "NAME")]
    #[arg(help = "Course name, e.g. \"EECS 281\"")]
    pub course: Option<String>,

    /// Lecture range (prompted when omitted)
    #[arg(long, value_name = "RANGE")]
    #[arg(help = "Lectures to download, e.g.: 1-3,5,7-9; empty selects all")]
    pub parts: Option<String>,

    /// Download directory
    #[arg(long, value_name = "DIR")]
    #[arg(default_value = "downloads")]
    #[arg(value_hint = clap::ValueHint::DirPath)]
    pub output_dir: PathBuf,

    /// WebDriver server to connect to
    #[arg(long, value_name = "URL")]
    #[arg(default_value = "http://localhost:9515")]
    #[arg(value_hint = clap::ValueHint::Url)]
    pub webdriver: String,

    /// Portal root
    #[arg(long, value_name = "URL")]
    #[arg(default_value = "https://leccap.engin.umich.edu/leccap/")]
    #[arg(value_hint = clap::ValueHint::Url)]
    pub portal: String,

    /// Browser profile directory (keeps the portal login between runs)
    #[arg(long, value_name = "DIR")]
    #[arg(default_value = "chrome-data")]
    #[arg(value_hint = clap::ValueHint::DirPath)]
    pub profile_dir: PathBuf,

    /// Seconds to wait for the portal to come back after sign-in
    #[arg(long, value_name = "SECS", default_value_t = 300)]
    pub login_timeout: u64,
}
