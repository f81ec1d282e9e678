use super::{Delivery, INotificationChannel};
use remindly_domain::{Channel, ReminderNotification};
use tracing::info;

/// Logs a simulated delivery instead of contacting a provider
pub struct ConsoleNotificationChannel {
    channel: Channel,
    delivery: Delivery,
}

impl ConsoleNotificationChannel {
    pub fn new(channel: Channel, delivery: Delivery) -> Self {
        Self { channel, delivery }
    }
}

#[async_trait::async_trait]
impl INotificationChannel for ConsoleNotificationChannel {
    fn channel(&self) -> Channel {
        self.channel
    }

    fn delivery(&self) -> Delivery {
        self.delivery
    }

    async fn send(
        &self,
        recipients: &[String],
        notification: &ReminderNotification,
    ) -> anyhow::Result<()> {
        info!(
            channel = %self.channel,
            reminder_id = %notification.reminder_id,
            "Simulated delivery of '{}' to {:?}",
            notification.subject(),
            recipients
        );
        Ok(())
    }
}
