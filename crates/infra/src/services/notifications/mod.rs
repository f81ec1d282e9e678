mod console;
mod inmemory;
mod smtp;

use crate::config::Config;
pub use console::ConsoleNotificationChannel;
pub use inmemory::{InMemoryNotificationChannel, SentNotification};
use remindly_domain::{Channel, ReminderNotification};
pub use smtp::SmtpEmailChannel;
use std::sync::Arc;
use tracing::info;

/// How a channel wants to receive the recipients of a single `Reminder`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    /// One send call with every recipient
    Batch,
    /// One send call per recipient
    PerRecipient,
}

/// A mechanism that is able to deliver a `ReminderNotification`
#[async_trait::async_trait]
pub trait INotificationChannel: Send + Sync {
    fn channel(&self) -> Channel;
    fn delivery(&self) -> Delivery;
    async fn send(
        &self,
        recipients: &[String],
        notification: &ReminderNotification,
    ) -> anyhow::Result<()>;
}

/// The configured `INotificationChannel`s, looked up by `Channel`
#[derive(Clone)]
pub struct NotificationChannels {
    channels: Vec<Arc<dyn INotificationChannel>>,
}

impl NotificationChannels {
    pub fn new(channels: Vec<Arc<dyn INotificationChannel>>) -> Self {
        Self { channels }
    }

    /// Email goes through smtp if it is configured, push is not integrated
    /// with a provider yet and is only logged.
    pub fn create(config: &Config) -> anyhow::Result<Self> {
        let email: Arc<dyn INotificationChannel> = match &config.smtp {
            Some(settings) => {
                info!("Reminder emails will be sent through {}", settings.host);
                Arc::new(SmtpEmailChannel::new(settings, &config.email_from)?)
            }
            None => Arc::new(ConsoleNotificationChannel::new(
                Channel::Email,
                Delivery::Batch,
            )),
        };
        let push = Arc::new(ConsoleNotificationChannel::new(
            Channel::Push,
            Delivery::PerRecipient,
        ));

        Ok(Self::new(vec![email, push]))
    }

    pub fn create_console() -> Self {
        Self::new(vec![
            Arc::new(ConsoleNotificationChannel::new(
                Channel::Email,
                Delivery::Batch,
            )),
            Arc::new(ConsoleNotificationChannel::new(
                Channel::Push,
                Delivery::PerRecipient,
            )),
        ])
    }

    pub fn get(&self, channel: Channel) -> Option<Arc<dyn INotificationChannel>> {
        self.channels
            .iter()
            .find(|c| c.channel() == channel)
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn looks_up_channels_by_tag() {
        let channels = NotificationChannels::create_console();
        let email = channels.get(Channel::Email).unwrap();
        assert_eq!(email.delivery(), Delivery::Batch);
        let push = channels.get(Channel::Push).unwrap();
        assert_eq!(push.delivery(), Delivery::PerRecipient);

        let only_email = NotificationChannels::new(vec![email]);
        assert!(only_email.get(Channel::Push).is_none());
    }
}
