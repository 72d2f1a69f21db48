/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

extern crate lychee;

use anyhow::Result;
use dotenvy::dotenv;
use lychee::{LycheeClient, ServerConfig, ServerVersion};
use std::fs::File;
use std::io::BufReader;
use std::str::FromStr;
use std::time::Duration;

// Wire conventions come from a JSON file when LYCHEE_CONFIG is set,
// otherwise from the LYCHEE_SERVER_VERSION preset.
fn load_server_config() -> Result<ServerConfig> {
    if let Ok(path) = std::env::var("LYCHEE_CONFIG") {
        let reader = BufReader::new(File::open(path)?);
        return Ok(serde_json::from_reader(reader)?);
    }
    let version = std::env::var("LYCHEE_SERVER_VERSION").unwrap_or_else(|_| "Legacy".into());
    Ok(ServerConfig::for_version(ServerVersion::from_str(&version)?))
}

// Writes a ZIP for every top level album into the current directory
async fn backup_albums(client: &mut LycheeClient) -> Result<()> {
    let albums = client.get_albums().await?;
    let Some(albums) = albums["albums"].as_array() else {
        println!("No albums found");
        return Ok(());
    };

    for album in albums {
        let (Some(id), Some(title)) = (album["id"].as_str(), album["title"].as_str()) else {
            continue;
        };
        println!("Downloading album: {} ({})", title, id);
        let archive = client.get_albums_archive(&[id]).await?;
        let file_name = format!("{}.zip", title.replace(['/', '\\'], "_"));
        std::fs::write(&file_name, &archive)?;
        println!("Wrote {} bytes to {}", archive.len(), file_name);
    }
    Ok(())
}

// main
#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    env_logger::init();

    let url = std::env::var("LYCHEE_URL")?;
    let username = std::env::var("LYCHEE_USERNAME")?;
    let password = std::env::var("LYCHEE_PASSWORD")?;

    // The library sets no timeout of its own
    let http = reqwest::Client::builder().timeout(Duration::from_secs(300));
    let mut client = LycheeClient::with_http_builder(&url, load_server_config()?, http).await?;

    if !client.login(&username, &password).await? {
        anyhow::bail!("login rejected for {}", username);
    }
    backup_albums(&mut client).await?;
    client.logout().await?;
    Ok(())
}
