use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use unibin::commands::fetch;

/// unibin - fetch a file and install it if it runs here
///
/// Downloads a file from a URL. Text files are saved as-is. Binaries are
/// inspected (ELF, Mach-O, PE) and installed with executable permissions only
/// when they target this operating system and CPU architecture.
///
/// Examples:
///   unibin -u https://example.com/tool-linux-amd64 -d ~/.local/bin -f tool
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// URL of the file to download
    #[arg(short = 'u', long = "url", value_name = "URL")]
    url: String,

    /// Directory to save the downloaded file
    #[arg(short = 'd', long = "dir", value_name = "DIR")]
    save_dir: PathBuf,

    /// Custom filename for the downloaded file (defaults to the last URL path segment)
    #[arg(short = 'f', long = "filename", value_name = "NAME")]
    filename: Option<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let runtime = unibin::runtime::RealRuntime;

    match fetch(runtime, &cli.url, cli.save_dir, cli.filename).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            println!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
