use crate::notify::sign;

pub fn handle_sign(secret: &str, timestamp: Option<i64>) -> anyhow::Result<()> {
    let timestamp = timestamp.unwrap_or_else(|| chrono::Utc::now().timestamp());
    let signature = sign(secret, timestamp)?;
    println!("timestamp: {timestamp}");
    println!("sign: {signature}");
    Ok(())
}
