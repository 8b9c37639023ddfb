use anyhow::{Context, Result};
use log::debug;
use std::path::PathBuf;

use crate::{
    binary::{CompatibilityGate, Verdict, classify},
    cleanup::TempFile,
    download::download_file,
    install::{Installer, Outcome},
    runtime::Runtime,
};

use super::config::{Config, FetchOptions};

#[tracing::instrument(skip(runtime, save_dir, file_name))]
pub async fn fetch<R: Runtime>(
    runtime: R,
    url: &str,
    save_dir: PathBuf,
    file_name: Option<String>,
) -> Result<Outcome> {
    let options = FetchOptions::new(url, save_dir, file_name)?;
    let config = Config::new(runtime, options)?;
    run(config).await
}

/// Download, classify and install a single file.
///
/// The temporary download is removed on every return path, including
/// errors and rejected binaries.
#[tracing::instrument(skip(config))]
pub async fn run<R: Runtime>(config: Config<R>) -> Result<Outcome> {
    let runtime = &config.runtime;
    let options = &config.options;

    let host = runtime.host_platform();
    debug!("Host platform: {}", host);
    let gate = CompatibilityGate::new(host);

    let temp = TempFile::create(runtime).context("Error creating temporary file")?;

    println!("Downloading file...");
    download_file(runtime, &options.url, temp.path(), &config.http_client)
        .await
        .context("Error downloading file")?;
    println!("File downloaded to temporary location.");

    let verdict = classify(runtime, temp.path(), &gate);
    match verdict {
        Verdict::PlainFile => println!("The downloaded file is a text file."),
        _ => println!("The downloaded file is a binary."),
    }

    let installer = Installer::new(runtime, &options.save_dir, &options.file_name);
    installer.install(temp.path(), &verdict)
}
