use std::io;

use notify_africa::NotifyAfricaClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let api_token = std::env::var("NOTIFY_AFRICA_TOKEN").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "NOTIFY_AFRICA_TOKEN environment variable is required",
        )
    })?;
    let phones = std::env::var("NOTIFY_AFRICA_PHONES").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "NOTIFY_AFRICA_PHONES environment variable is required (comma-separated)",
        )
    })?;
    let sender_id = std::env::var("NOTIFY_AFRICA_SENDER").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "NOTIFY_AFRICA_SENDER environment variable is required",
        )
    })?;
    let message = std::env::var("NOTIFY_AFRICA_MESSAGE")
        .unwrap_or_else(|_| "Hello from the notify-africa example.".to_owned());

    let recipients = phones
        .split(',')
        .map(str::trim)
        .filter(|phone| !phone.is_empty())
        .map(str::to_owned)
        .collect::<Vec<_>>();

    let client = NotifyAfricaClient::new(api_token);
    let receipt = client
        .send_batch_messages(recipients, message, sender_id)
        .await?;
    println!(
        "sent: {}, credits deducted: {}, remaining balance: {}",
        receipt.message_count, receipt.credits_deducted, receipt.remaining_balance
    );

    Ok(())
}
