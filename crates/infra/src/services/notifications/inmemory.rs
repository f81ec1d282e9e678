use super::{Delivery, INotificationChannel};
use remindly_domain::{Channel, ReminderNotification};
use std::sync::Mutex;

#[derive(Debug, Clone, PartialEq)]
pub struct SentNotification {
    pub recipients: Vec<String>,
    pub notification: ReminderNotification,
}

/// Keeps every delivered notification around so that they can be inspected.
/// Sends to any of the `failing_recipients` return an error.
pub struct InMemoryNotificationChannel {
    channel: Channel,
    delivery: Delivery,
    failing_recipients: Vec<String>,
    sent: Mutex<Vec<SentNotification>>,
}

impl InMemoryNotificationChannel {
    pub fn new(channel: Channel, delivery: Delivery) -> Self {
        Self {
            channel,
            delivery,
            failing_recipients: Vec::new(),
            sent: Mutex::new(Vec::new()),
        }
    }

    pub fn failing_for(mut self, recipient: &str) -> Self {
        self.failing_recipients.push(recipient.to_string());
        self
    }

    pub fn sent(&self) -> Vec<SentNotification> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl INotificationChannel for InMemoryNotificationChannel {
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
        if let Some(failing) = recipients
            .iter()
            .find(|r| self.failing_recipients.contains(r))
        {
            return Err(anyhow::Error::msg(format!(
                "Unable to deliver {} notification to {}",
                self.channel, failing
            )));
        }
        self.sent.lock().unwrap().push(SentNotification {
            recipients: recipients.to_vec(),
            notification: notification.clone(),
        });
        Ok(())
    }
}
