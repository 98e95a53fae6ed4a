use std::io;

use farmsms::{Alert, AlertKind, Notifier, RawPhoneNumber, TwilioClient, TwilioConfig};

fn env_var(name: &str) -> Result<String, io::Error> {
    std::env::var(name).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{name} environment variable is required"),
        )
    })
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_target(false)
        .init();

    let config = TwilioConfig::from_env()?;
    let to = RawPhoneNumber::new(env_var("FARMSMS_TO")?)?;
    let kind: AlertKind = std::env::var("FARMSMS_KIND")
        .unwrap_or_else(|_| "irrigation".to_owned())
        .parse()?;
    let farm = std::env::var("FARMSMS_FARM").unwrap_or_else(|_| "Green Acres".to_owned());

    let alert = match kind {
        AlertKind::Irrigation => Alert::irrigation(farm, "North Plot"),
        AlertKind::Pest => Alert::pest(farm, "Aphids", "High"),
        AlertKind::Weather => Alert::weather(farm, "Hailstorm"),
        AlertKind::Task => Alert::task_reminder("Check irrigation pumps", "tomorrow"),
    };

    let notifier = Notifier::new(TwilioClient::new(config));
    let sid = notifier.send_alert(&to, &alert).await?;
    println!("Message sent with SID: {sid}");

    Ok(())
}
