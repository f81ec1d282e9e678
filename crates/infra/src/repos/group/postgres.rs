use super::IGroupRepo;
use chrono::{DateTime, Utc};
use remindly_domain::{ReminderGroup, ID};
use sqlx::{types::Uuid, FromRow, PgPool};
use tracing::error;

pub struct PostgresGroupRepo {
    pool: PgPool,
}

impl PostgresGroupRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct GroupRaw {
    group_uid: Uuid,
    name: String,
    description: String,
    join_code: String,
    created: DateTime<Utc>,
}

impl From<GroupRaw> for ReminderGroup {
    fn from(e: GroupRaw) -> Self {
        Self {
            id: e.group_uid.into(),
            name: e.name,
            description: e.description,
            join_code: e.join_code,
            created: e.created,
        }
    }
}

#[async_trait::async_trait]
impl IGroupRepo for PostgresGroupRepo {
    async fn insert(&self, group: &ReminderGroup) -> anyhow::Result<bool> {
        let res = sqlx::query(
            r#"
            INSERT INTO reminder_groups(group_uid, name, description, join_code, created)
            VALUES($1, $2, $3, $4, $5)
            ON CONFLICT (join_code) DO NOTHING
            "#,
        )
        .bind(group.id.inner_ref())
        .bind(&group.name)
        .bind(&group.description)
        .bind(&group.join_code)
        .bind(group.created)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Unable to insert reminder group: {:?}. DB returned error: {:?}",
                group, e
            );
            e
        })?;
        Ok(res.rows_affected() == 1)
    }

    async fn find(&self, group_id: &ID) -> Option<ReminderGroup> {
        let res: Option<GroupRaw> = sqlx::query_as(
            r#"
            SELECT * FROM reminder_groups
            WHERE group_uid = $1
            "#,
        )
        .bind(group_id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Find reminder group with id: {:?} failed. DB returned error: {:?}",
                group_id, e
            );
            e
        })
        .ok()?;
        res.map(|group| group.into())
    }

    async fn find_by_join_code(&self, join_code: &str) -> Option<ReminderGroup> {
        let res: Option<GroupRaw> = sqlx::query_as(
            r#"
            SELECT * FROM reminder_groups
            WHERE join_code = $1
            "#,
        )
        .bind(join_code)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Find reminder group with join code: {:?} failed. DB returned error: {:?}",
                join_code, e
            );
            e
        })
        .ok()?;
        res.map(|group| group.into())
    }

    async fn find_all(&self) -> anyhow::Result<Vec<ReminderGroup>> {
        let groups: Vec<GroupRaw> = sqlx::query_as(
            r#"
            SELECT * FROM reminder_groups
            ORDER BY created DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!("Find all reminder groups failed. DB returned error: {:?}", e);
            e
        })?;
        Ok(groups.into_iter().map(|g| g.into()).collect())
    }

    async fn delete(&self, group_id: &ID) -> Option<ReminderGroup> {
        let res: Option<GroupRaw> = sqlx::query_as(
            r#"
            DELETE FROM reminder_groups
            WHERE group_uid = $1
            RETURNING *
            "#,
        )
        .bind(group_id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Delete reminder group with id: {:?} failed. DB returned error: {:?}",
                group_id, e
            );
            e
        })
        .ok()?;
        res.map(|group| group.into())
    }
}
