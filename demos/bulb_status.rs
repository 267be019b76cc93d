//! Demo: connect to a single bulb and print its state.
//!
//! Credentials come from TAPO_USERNAME / TAPO_PASSWORD; the bulb host is the
//! first argument (default: the bogenlampe bulb).

use bulbctl::{Bulb, Credentials};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let username = std::env::var("TAPO_USERNAME")?;
    let password = std::env::var("TAPO_PASSWORD")?;
    let host = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "192.168.0.143".to_string());

    let credentials = Credentials::new(username, password);

    println!("Connecting to {host}...");
    let bulb = Bulb::connect(&credentials, &host).await?;

    println!("--- {} ---", bulb.host());
    println!("  Nickname: {}", bulb.nickname());
    println!("  On:       {}", bulb.is_on());

    Ok(())
}
