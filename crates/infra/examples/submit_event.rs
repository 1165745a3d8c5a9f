//! Example: Submitting a security event and listing blocked domains
//!
//! Loads the client configuration (environment first, then config files),
//! submits one event and prints the domains currently on the block list.
//!
//! # Setup
//!
//! 1. Export the customer key: ```bash export
//!    ENFORCEMENT_CUSTOMER_KEY=1111-2222-3333-4444 ```
//!
//! 2. Optionally point the client at a local mock: ```bash export
//!    ENFORCEMENT_BASE_URL=http://localhost:9000/1.0 ```
//!
//! 3. Run this example: ```bash cargo run --example submit_event ```

use chrono::Utc;
use enforcement_infra::domain::Event;
use enforcement_infra::{config, ApiClient};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = config::load()?;
    let client = ApiClient::from_config(&config)?;
    println!("Enforcement API: {}", client.base_url());

    let event = Event::new()
        .with_device_id("ba6a59f4-e692-4724-ba36-c28132c761de")
        .with_device_version("13.7a")
        .with_event_time(Utc::now())
        .with_alert_time(Utc::now())
        .with_dst_domain("internetbadguys.com")
        .with_dst_url("http://internetbadguys.com/a-bad-url")
        .with_dst_ip("8.8.8.8")
        .with_event_type("malware")
        .with_event_severity("severe");

    match client.add_event(&event).await? {
        Some(id) => println!("Event accepted (batch {id})"),
        None => println!("Event accepted"),
    }

    let domains = client.list_domains(1, true).await?;
    println!("{} domains on the block list", domains.len());
    for (name, id) in &domains {
        println!("  {id:>10}  {name}");
    }

    Ok(())
}
