use super::{Delivery, INotificationChannel};
use crate::config::SmtpSettings;
use lettre::{
    message::{header::ContentType, Mailbox},
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use remindly_domain::{Channel, ReminderNotification};
use tracing::error;

/// Sends one email per `Reminder` with every recipient on the `To` line
pub struct SmtpEmailChannel {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl SmtpEmailChannel {
    pub fn new(settings: &SmtpSettings, from: &str) -> anyhow::Result<Self> {
        let from = from.parse::<Mailbox>()?;

        let mut builder = if settings.tls {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&settings.host)?
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&settings.host)
        };
        if let Some(port) = settings.port {
            builder = builder.port(port);
        }
        if let (Some(username), Some(password)) = (&settings.username, &settings.password) {
            builder = builder.credentials(Credentials::new(username.clone(), password.clone()));
        }

        Ok(Self {
            transport: builder.build(),
            from,
        })
    }

    fn build_message(
        &self,
        recipients: &[String],
        notification: &ReminderNotification,
    ) -> anyhow::Result<Message> {
        let mut builder = Message::builder()
            .from(self.from.clone())
            .subject(notification.subject())
            .header(ContentType::TEXT_PLAIN);
        for recipient in recipients {
            builder = builder.to(recipient.parse::<Mailbox>()?);
        }
        Ok(builder.body(notification.message.clone())?)
    }
}

#[async_trait::async_trait]
impl INotificationChannel for SmtpEmailChannel {
    fn channel(&self) -> Channel {
        Channel::Email
    }

    fn delivery(&self) -> Delivery {
        Delivery::Batch
    }

    async fn send(
        &self,
        recipients: &[String],
        notification: &ReminderNotification,
    ) -> anyhow::Result<()> {
        let message = self.build_message(recipients, notification)?;
        self.transport.send(message).await.map_err(|e| {
            error!(
                "Smtp relay rejected reminder email to {:?}. Error: {:?}",
                recipients, e
            );
            e
        })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use remindly_domain::ID;

    fn channel() -> SmtpEmailChannel {
        let settings = SmtpSettings {
            host: "localhost".into(),
            port: Some(1025),
            username: None,
            password: None,
            tls: false,
        };
        SmtpEmailChannel::new(&settings, "noreply@example.com").unwrap()
    }

    fn notification() -> ReminderNotification {
        ReminderNotification {
            reminder_id: ID::new(),
            title: "Dentist".into(),
            message: "Tomorrow at 10".into(),
        }
    }

    #[tokio::test]
    async fn builds_one_message_for_all_recipients() {
        let channel = channel();
        let message = channel
            .build_message(&["a@x.com".into(), "b@x.com".into()], &notification())
            .unwrap();
        let to = message.envelope().to();
        assert_eq!(to.len(), 2);
        assert_eq!(to[0].to_string(), "a@x.com");
        assert_eq!(to[1].to_string(), "b@x.com");

        let raw = String::from_utf8(message.formatted()).unwrap();
        assert!(raw.contains("Subject: Reminder: Dentist"));
        assert!(raw.contains("Tomorrow at 10"));
    }

    #[tokio::test]
    async fn rejects_malformed_addresses() {
        let channel = channel();
        assert!(channel
            .build_message(&["not an address".into()], &notification())
            .is_err());
    }
}
