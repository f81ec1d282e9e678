use super::IReminderRepo;
use chrono::{DateTime, Utc};
use remindly_domain::{Channel, Reminder, ReminderType, Repeat, ID};
use sqlx::{types::Uuid, FromRow, PgPool};
use tracing::{error, warn};

pub struct PostgresReminderRepo {
    pool: PgPool,
}

impl PostgresReminderRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ReminderRaw {
    reminder_uid: Uuid,
    title: String,
    reminder_type: String,
    message: String,
    datetime: DateTime<Utc>,
    repeat: Option<String>,
    channels: Vec<String>,
    is_active: bool,
    customer_uid: Option<Uuid>,
    group_uid: Option<Uuid>,
    contact_name: Option<String>,
    contact_phone: Option<String>,
    contact_email: Option<String>,
    created: DateTime<Utc>,
}

impl From<ReminderRaw> for Reminder {
    fn from(e: ReminderRaw) -> Self {
        // reminder_type is guarded by a check constraint
        let reminder_type = e.reminder_type.parse().unwrap_or_else(|err| {
            warn!("{}, treating reminder as personal", err);
            ReminderType::Personal
        });
        let channels = e
            .channels
            .iter()
            .filter_map(|c| match c.parse::<Channel>() {
                Ok(channel) => Some(channel),
                Err(err) => {
                    warn!("Ignoring stored channel of reminder {}: {}", e.reminder_uid, err);
                    None
                }
            })
            .collect();

        Self {
            id: e.reminder_uid.into(),
            title: e.title,
            reminder_type,
            message: e.message,
            datetime: e.datetime,
            repeat: Repeat::from_stored(e.repeat.as_deref()),
            channels,
            is_active: e.is_active,
            customer_id: e.customer_uid.map(|id| id.into()),
            group_id: e.group_uid.map(|id| id.into()),
            contact_name: e.contact_name,
            contact_phone: e.contact_phone,
            contact_email: e.contact_email,
            created: e.created,
        }
    }
}

fn channels_to_raw(reminder: &Reminder) -> Vec<String> {
    reminder
        .channels
        .iter()
        .map(|c| c.as_str().to_string())
        .collect()
}

#[async_trait::async_trait]
impl IReminderRepo for PostgresReminderRepo {
    async fn insert(&self, reminder: &Reminder) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO reminders
                (reminder_uid, title, reminder_type, message, datetime, repeat, channels,
                is_active, customer_uid, group_uid, contact_name, contact_phone, contact_email, created)
            VALUES($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            "#,
        )
        .bind(reminder.id.inner_ref())
        .bind(&reminder.title)
        .bind(reminder.reminder_type.to_string())
        .bind(&reminder.message)
        .bind(reminder.datetime)
        .bind(reminder.repeat.as_str())
        .bind(channels_to_raw(reminder))
        .bind(reminder.is_active)
        .bind(reminder.customer_id.map(|id| id.inner()))
        .bind(reminder.group_id.map(|id| id.inner()))
        .bind(&reminder.contact_name)
        .bind(&reminder.contact_phone)
        .bind(&reminder.contact_email)
        .bind(reminder.created)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Unable to insert reminder: {:?}. DB returned error: {:?}",
                reminder, e
            );
            e
        })?;
        Ok(())
    }

    async fn save(&self, reminder: &Reminder) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            UPDATE reminders
            SET title = $2,
            reminder_type = $3,
            message = $4,
            datetime = $5,
            repeat = $6,
            channels = $7,
            is_active = $8,
            customer_uid = $9,
            group_uid = $10,
            contact_name = $11,
            contact_phone = $12,
            contact_email = $13
            WHERE reminder_uid = $1
            "#,
        )
        .bind(reminder.id.inner_ref())
        .bind(&reminder.title)
        .bind(reminder.reminder_type.to_string())
        .bind(&reminder.message)
        .bind(reminder.datetime)
        .bind(reminder.repeat.as_str())
        .bind(channels_to_raw(reminder))
        .bind(reminder.is_active)
        .bind(reminder.customer_id.map(|id| id.inner()))
        .bind(reminder.group_id.map(|id| id.inner()))
        .bind(&reminder.contact_name)
        .bind(&reminder.contact_phone)
        .bind(&reminder.contact_email)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Unable to save reminder: {:?}. DB returned error: {:?}",
                reminder, e
            );
            e
        })?;
        Ok(())
    }

    async fn find(&self, reminder_id: &ID) -> Option<Reminder> {
        let res: Option<ReminderRaw> = sqlx::query_as(
            r#"
            SELECT * FROM reminders
            WHERE reminder_uid = $1
            "#,
        )
        .bind(reminder_id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Find reminder with id: {:?} failed. DB returned error: {:?}",
                reminder_id, e
            );
            e
        })
        .ok()?;
        res.map(|r| r.into())
    }

    async fn find_all(&self) -> anyhow::Result<Vec<Reminder>> {
        let reminders: Vec<ReminderRaw> = sqlx::query_as(
            r#"
            SELECT * FROM reminders
            ORDER BY created DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!("Find all reminders failed. DB returned error: {:?}", e);
            e
        })?;
        Ok(reminders.into_iter().map(|r| r.into()).collect())
    }

    async fn find_active_from(&self, from: DateTime<Utc>) -> anyhow::Result<Vec<Reminder>> {
        let reminders: Vec<ReminderRaw> = sqlx::query_as(
            r#"
            SELECT * FROM reminders
            WHERE is_active AND datetime >= $1
            ORDER BY datetime ASC
            "#,
        )
        .bind(from)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Find active reminders from: {:?} failed. DB returned error: {:?}",
                from, e
            );
            e
        })?;
        Ok(reminders.into_iter().map(|r| r.into()).collect())
    }

    async fn delete(&self, reminder_id: &ID) -> Option<Reminder> {
        let res: Option<ReminderRaw> = sqlx::query_as(
            r#"
            DELETE FROM reminders
            WHERE reminder_uid = $1
            RETURNING *
            "#,
        )
        .bind(reminder_id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Delete reminder with id: {:?} failed. DB returned error: {:?}",
                reminder_id, e
            );
            e
        })
        .ok()?;
        res.map(|r| r.into())
    }

    async fn detach_group(&self, group_id: &ID) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            UPDATE reminders
            SET group_uid = NULL
            WHERE group_uid = $1
            "#,
        )
        .bind(group_id.inner_ref())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Detaching group: {:?} from reminders failed. DB returned error: {:?}",
                group_id, e
            );
            e
        })?;
        Ok(())
    }

    async fn detach_customer(&self, customer_id: &ID) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            UPDATE reminders
            SET customer_uid = NULL
            WHERE customer_uid = $1
            "#,
        )
        .bind(customer_id.inner_ref())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Detaching customer: {:?} from reminders failed. DB returned error: {:?}",
                customer_id, e
            );
            e
        })?;
        Ok(())
    }
}
