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
    let message_id = std::env::var("NOTIFY_AFRICA_MESSAGE_ID").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "NOTIFY_AFRICA_MESSAGE_ID environment variable is required",
        )
    })?;

    let client = NotifyAfricaClient::new(api_token);
    let status = client.check_message_status(message_id).await?;
    println!(
        "message_id: {}, status: {}, sent_at: {:?}, delivered_at: {:?}",
        status.message_id, status.status, status.sent_at, status.delivered_at
    );

    Ok(())
}
