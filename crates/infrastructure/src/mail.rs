// Outbound mail collaborator: send(address, code). Delivery itself is
// external to this service.

#[::async_trait::async_trait]
pub trait Mailer: Send + Sync {
    async fn send_otp(&self, address: &str, code: &str) -> anyhow::Result<()>;
}

/// Mailer that only records the dispatch in the log. Stands in for a real
/// provider in development and tests.
#[derive(Default)]
pub struct LogMailer;

#[::async_trait::async_trait]
impl Mailer for LogMailer {
    async fn send_otp(&self, address: &str, code: &str) -> anyhow::Result<()> {
        tracing::info!(address = %address, "dispatching password-reset OTP: {}", code);
        Ok(())
    }
}
