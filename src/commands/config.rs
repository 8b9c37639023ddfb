use anyhow::{Context, Result, anyhow};
use reqwest::{Client, Url};
use std::path::PathBuf;

use crate::{http::HttpClient, runtime::Runtime};

/// What to fetch and where to put it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchOptions {
    pub url: String,
    pub save_dir: PathBuf,
    pub file_name: String,
}

impl FetchOptions {
    /// Resolve options from CLI arguments. Without an explicit `file_name`
    /// the last non-empty path segment of the URL is used.
    pub fn new(url: &str, save_dir: PathBuf, file_name: Option<String>) -> Result<Self> {
        let parsed = Url::parse(url).with_context(|| format!("Invalid URL: {}", url))?;

        let file_name = match file_name {
            Some(name) if !name.is_empty() => name,
            _ => file_name_from_url(&parsed).ok_or_else(|| {
                anyhow!("Cannot derive a file name from {}; pass -f <filename>", url)
            })?,
        };

        Ok(Self {
            url: url.to_string(),
            save_dir,
            file_name,
        })
    }
}

fn file_name_from_url(url: &Url) -> Option<String> {
    url.path_segments()?
        .filter(|segment| !segment.is_empty())
        .last()
        .map(str::to_string)
}

pub struct Config<R: Runtime> {
    pub runtime: R,
    pub http_client: HttpClient,
    pub options: FetchOptions,
}

impl<R: Runtime> Config<R> {
    pub fn new(runtime: R, options: FetchOptions) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("unibin/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            runtime,
            http_client: HttpClient::new(client),
            options,
        })
    }
}
