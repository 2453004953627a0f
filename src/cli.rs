use clap::Parser;

/// Collect the LICENSE text of every yarn.lock dependency into one report
#[derive(Parser, Debug)]
#[command(name = "license-gatherer")]
#[command(version)]
#[command(
    about = "Collect LICENSE texts for every yarn.lock dependency into a single report",
    long_about = None
)]
pub struct Args {
    /// Path to your project (the directory containing yarn.lock and node_modules)
    pub project_path: String,

    /// Report file path [default: LICENSEALL.md in the current directory]
    #[arg(short, long)]
    pub output: Option<String>,

    /// Exclude packages matching patterns (supports wildcards: *)
    /// Can be specified multiple times: -e "@types/*" -e "*-dev"
    #[arg(short, long = "exclude", value_name = "PATTERN")]
    pub exclude: Vec<String>,

    /// Path to a config file [default: license-gatherer.config.yml in the project directory]
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<String>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
