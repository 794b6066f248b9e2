use clap::Parser;


/// Uploads the screenshots captured by the test suite to a server so that they
/// can be investigated later. The upload key comes from secure CI environment
/// variables to prevent unauthorized uploads.
///
/// You should not run this locally.
#[derive(Parser, Debug)]
#[command(name = "upload-results", about = "Upload CI test screenshots for inspection")]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Directory containing the `test-result` manifest and the screenshots
    /// (default: test-results/ under the crate root)
    #[arg(long)]
    pub results_dir: Option<String>,

    /// TOML file overriding the upload endpoint and file names
    #[arg(long)]
    pub config: Option<String>,

    /// Upload endpoint (overrides the config file)
    #[arg(long)]
    pub target_url: Option<String>,

    /// Assemble the upload and print it without sending anything
    #[arg(long)]
    pub dry_run: bool,

    /// Output dry-run plan as JSON (requires --dry-run)
    #[arg(long, requires = "dry_run")]
    pub json: bool,

    /// Exit with code 5 when the server answers with a non-2xx status
    #[arg(long)]
    pub fail_on_error_status: bool,
}
