use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "seolens")]
#[command(about = "A CLI single-page SEO analyzer", long_about = None)]
pub struct Cli {
    /// The URL of the page to analyze
    #[arg(value_name = "URL")]
    pub url: String,

    /// Output format: text or json
    #[arg(short, long, default_value = "text")]
    pub output: String,

    /// Save the JSON report to file
    #[arg(short, long)]
    pub save: Option<String>,

    /// Maximum number of links to status-check (default: 50)
    #[arg(short, long, default_value_t = 50)]
    pub link_limit: usize,

    /// Page fetch timeout in seconds (default: 20)
    #[arg(short, long, default_value_t = 20)]
    pub timeout: u64,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Classify link domains by host name only, skipping the public
    /// suffix list
    #[arg(long)]
    pub naive_tld: bool,

    /// Path to configuration file (JSON, TOML, or YAML)
    #[arg(long)]
    pub config: Option<String>,
}
