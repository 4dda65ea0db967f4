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
    let phone = std::env::var("NOTIFY_AFRICA_PHONE").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "NOTIFY_AFRICA_PHONE environment variable is required",
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

    let client = NotifyAfricaClient::new(api_token);
    let receipt = client
        .send_single_message(phone, message, sender_id)
        .await?;
    println!(
        "message_id: {}, status: {}",
        receipt.message_id, receipt.status
    );

    Ok(())
}
