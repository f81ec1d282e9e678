use crate::shared::usecase::{execute, UseCase};
use remindly_domain::{
    group_recipients, should_send_reminder, Channel, Customer, GroupMembership, Reminder,
    ReminderNotification, ReminderType, ID,
};
use remindly_infra::{Delivery, INotificationChannel, RemindlyContext};
use tracing::{error, info, warn};

/// A single call made to a notification channel
#[derive(Debug, Clone, PartialEq)]
pub struct DeliveryAttempt {
    pub channel: Channel,
    pub recipients: Vec<String>,
    pub success: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SkipReason {
    NotDue,
    NoRecipients,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ReminderOutcome {
    Sent(Vec<DeliveryAttempt>),
    Skipped(SkipReason),
}

/// What happened to every selected reminder during one dispatch pass
#[derive(Debug, Default)]
pub struct SendRemindersReport {
    pub outcomes: Vec<(ID, ReminderOutcome)>,
}

impl SendRemindersReport {
    pub fn outcome(&self, reminder_id: &ID) -> Option<&ReminderOutcome> {
        self.outcomes
            .iter()
            .find(|(id, _)| id == reminder_id)
            .map(|(_, outcome)| outcome)
    }

    pub fn sent_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|(_, o)| matches!(o, ReminderOutcome::Sent(_)))
            .count()
    }
}

/// Runs one pass of the reminder dispatch and logs the result.
/// Failing to load the reminders is logged and results in an empty report.
pub async fn send_reminders(ctx: &RemindlyContext) -> SendRemindersReport {
    execute(SendRemindersUseCase {}, ctx)
        .await
        .unwrap_or_default()
}

#[derive(Debug)]
pub struct SendRemindersUseCase {}

#[derive(Debug)]
pub enum UseCaseError {
    StorageError,
}

impl SendRemindersUseCase {
    async fn resolve_recipients(&self, reminder: &Reminder, ctx: &RemindlyContext) -> Vec<String> {
        match reminder.reminder_type {
            ReminderType::Personal => {
                let customer = match reminder.customer_id {
                    Some(customer_id) => ctx.repos.customers.find(&customer_id).await,
                    None => None,
                };
                reminder
                    .personal_recipient(customer.as_ref())
                    .into_iter()
                    .collect()
            }
            ReminderType::Group => {
                let group_id = match reminder.group_id {
                    Some(group_id) => group_id,
                    None => return Vec::new(),
                };
                let memberships = match ctx.repos.memberships.find_by_group(&group_id).await {
                    Ok(memberships) => memberships,
                    Err(e) => {
                        error!("Unable to load members of group {}: {:?}", group_id, e);
                        return Vec::new();
                    }
                };
                let customer_ids = memberships.iter().map(|m| m.customer_id).collect::<Vec<_>>();
                let customers = match ctx.repos.customers.find_many(&customer_ids).await {
                    Ok(customers) => customers,
                    Err(e) => {
                        error!("Unable to load customers of group {}: {:?}", group_id, e);
                        Vec::new()
                    }
                };

                let members = memberships
                    .into_iter()
                    .map(|membership| {
                        let customer = customers
                            .iter()
                            .find(|c| c.id == membership.customer_id)
                            .cloned();
                        (membership, customer)
                    })
                    .collect::<Vec<(GroupMembership, Option<Customer>)>>();
                group_recipients(&members)
            }
        }
    }

    async fn dispatch(
        &self,
        reminder: &Reminder,
        recipients: &[String],
        ctx: &RemindlyContext,
    ) -> Vec<DeliveryAttempt> {
        let notification = reminder.notification();
        let mut attempts = Vec::new();

        for channel_tag in &reminder.channels {
            let channel = match ctx.notifications.get(*channel_tag) {
                Some(channel) => channel,
                None => {
                    warn!("No {} channel is configured, skipping it", channel_tag);
                    continue;
                }
            };

            match channel.delivery() {
                Delivery::Batch => {
                    let success =
                        Self::send_to(channel.as_ref(), recipients, &notification).await;
                    attempts.push(DeliveryAttempt {
                        channel: *channel_tag,
                        recipients: recipients.to_vec(),
                        success,
                    });
                }
                Delivery::PerRecipient => {
                    for recipient in recipients {
                        let recipients = vec![recipient.clone()];
                        let success =
                            Self::send_to(channel.as_ref(), &recipients, &notification).await;
                        attempts.push(DeliveryAttempt {
                            channel: *channel_tag,
                            recipients,
                            success,
                        });
                    }
                }
            }
        }

        attempts
    }

    async fn send_to(
        channel: &dyn INotificationChannel,
        recipients: &[String],
        notification: &ReminderNotification,
    ) -> bool {
        match channel.send(recipients, notification).await {
            Ok(()) => {
                info!("{} sent to {:?}", channel.channel(), recipients);
                true
            }
            Err(e) => {
                error!(
                    "Unable to send {} to {:?}: {:?}",
                    channel.channel(),
                    recipients,
                    e
                );
                false
            }
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for SendRemindersUseCase {
    type Response = SendRemindersReport;

    type Error = UseCaseError;

    const NAME: &'static str = "SendReminders";

    async fn execute(&mut self, ctx: &RemindlyContext) -> Result<Self::Response, Self::Error> {
        let now = ctx.sys.now();
        let reminders = ctx
            .repos
            .reminders
            .find_active_from(now)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        let today = now.with_timezone(&ctx.config.timezone);
        let mut report = SendRemindersReport::default();

        if reminders.is_empty() {
            warn!("No reminders to send");
        }

        for reminder in &reminders {
            let recipients = self.resolve_recipients(reminder, ctx).await;
            info!(
                "Reminder '{}' at {} repeating {} for {:?}",
                reminder.title,
                reminder.datetime,
                reminder.repeat.as_str(),
                recipients
            );

            let outcome = if !should_send_reminder(reminder, &today) {
                info!("Skipping reminder '{}', it is not due today", reminder.title);
                ReminderOutcome::Skipped(SkipReason::NotDue)
            } else if recipients.is_empty() {
                info!("Skipping reminder '{}', it has no recipients", reminder.title);
                ReminderOutcome::Skipped(SkipReason::NoRecipients)
            } else {
                ReminderOutcome::Sent(self.dispatch(reminder, &recipients, ctx).await)
            };
            report.outcomes.push((reminder.id, outcome));
        }

        info!(
            "Finished sending reminders: {} of {} sent",
            report.sent_count(),
            reminders.len()
        );

        Ok(report)
    }
}
