use std::io::{self, Read};

use farmsms::{AlertRequest, Notifier, RawPhoneNumber, TwilioClient, TwilioConfig};

/// Reads a `{ "type": ..., "data": { ... } }` payload from stdin and sends it.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let to = std::env::var("FARMSMS_TO").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "FARMSMS_TO environment variable is required",
        )
    })?;

    let mut payload = String::new();
    io::stdin().read_to_string(&mut payload)?;
    let request: AlertRequest = serde_json::from_str(&payload)?;
    let alert = request.into_alert();

    let notifier = Notifier::new(TwilioClient::new(TwilioConfig::from_env()?));
    let sid = notifier
        .send_alert(&RawPhoneNumber::new(to)?, &alert)
        .await?;
    println!("{} alert sent with SID: {sid}", alert.kind());

    Ok(())
}
