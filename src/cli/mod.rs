pub mod doctor;
pub mod goals;
pub mod import;
pub mod log;
pub mod meals;
pub mod progress;
pub mod reset;
pub mod search;
pub mod stats;

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use tokio::io::AsyncWriteExt;

/// Download the bulk food database dump to the data directory.
pub async fn db_download(config: &crate::config::FoodConfig) -> Result<()> {
    let data_dir = crate::config::expand_tilde(&config.data_dir);
    std::fs::create_dir_all(&data_dir)
        .with_context(|| format!("failed to create data dir: {}", data_dir.display()))?;

    let filename = config
        .source_url
        .rsplit('/')
        .next()
        .filter(|name| !name.is_empty())
        .unwrap_or("food_data.json");
    let dest = data_dir.join(filename);

    if dest.exists() {
        println!("Food data already exists at {}", dest.display());
    } else {
        println!("Downloading {filename}...");
        download_file(&config.source_url, &dest).await?;
        println!("Food data saved to {}", dest.display());
    }

    if filename.ends_with(".zip") {
        println!("Extract the JSON file, then run `nosh db import <file>` to load it.");
    } else {
        println!("Run `nosh db import {}` to load it.", dest.display());
    }
    Ok(())
}

/// Download a file from a URL with progress bar. Uses atomic write (tmp + rename).
async fn download_file(url: &str, dest: &PathBuf) -> Result<()> {
    let response = reqwest::get(url)
        .await
        .with_context(|| format!("HTTP request failed for {url}"))?;

    anyhow::ensure!(
        response.status().is_success(),
        "download failed with HTTP {}",
        response.status()
    );

    let total_size = response.content_length();
    let pb = if let Some(size) = total_size {
        let pb = ProgressBar::new(size);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("  {bar:40.cyan/blue} {bytes}/{total_bytes} ({eta})")
                .expect("valid template")
                .progress_chars("##-"),
        );
        pb
    } else {
        ProgressBar::new_spinner()
    };

    let tmp_path = dest.with_extension("tmp");
    let mut file = tokio::fs::File::create(&tmp_path)
        .await
        .with_context(|| format!("failed to create temp file: {}", tmp_path.display()))?;

    let bytes = response.bytes().await.context("error reading response")?;
    pb.inc(bytes.len() as u64);
    file.write_all(&bytes)
        .await
        .context("error writing to file")?;

    file.flush().await?;
    drop(file);

    tokio::fs::rename(&tmp_path, dest)
        .await
        .context("failed to rename temp file")?;

    pb.finish_and_clear();
    Ok(())
}
