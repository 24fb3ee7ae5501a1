use crate::error::GalleryError;
use clap::Parser;
use serde::Deserialize;
use std::{fs, path::Path};

#[derive(Debug, Clone, Parser)]
pub struct StartArgs {
    #[arg(short, long, default_value = "config.json")]
    pub config_path: String,

    #[arg(short, long, default_value = "127.0.0.1")]
    pub address: String,

    #[arg(short, long, default_value = "3030")]
    pub port: u16,

    #[arg(short, long, default_value = "INFO")]
    pub log_level: tracing::Level,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// The document title for the front end
    pub title: Option<String>,

    /// Where the gallery images and `folder_structure.json` live.
    /// A scheme is prepended and a trailing slash ensured on read.
    pub host: String,

    /// Include plain files in the sidebar, not just folders.
    #[serde(default)]
    pub show_files: bool,

    /// Folder path to preselect when the page is opened without one.
    pub initial_folder: Option<String>,
}

impl Config {
    pub fn read(path: impl AsRef<Path>) -> Result<Self, GalleryError> {
        let config = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&config)?)
    }

    pub fn base_url(&self) -> UrlBase {
        UrlBase::new(&self.host)
    }
}

/// Normalized base URL all image and structure addresses are joined onto.
#[derive(Debug, Clone)]
pub struct UrlBase(String);

impl UrlBase {
    pub fn new(host: &str) -> Self {
        let mut base = host.to_string();
        if !base.starts_with("https://") && !base.starts_with("http://") {
            base = format!("https://{base}");
        }
        if !base.ends_with('/') {
            base.push('/');
        }
        Self(base)
    }

    /// Base joined with `/`-separated path segments.
    pub fn join(&self, segments: &[&str]) -> String {
        format!("{}{}", self.0, segments.join("/"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
