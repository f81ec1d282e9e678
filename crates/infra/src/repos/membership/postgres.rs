use super::IMembershipRepo;
use crate::repos::shared::repo::DeleteResult;
use chrono::{DateTime, Utc};
use remindly_domain::{GroupMembership, ID};
use sqlx::{types::Uuid, FromRow, PgPool};
use tracing::{error, warn};

pub struct PostgresMembershipRepo {
    pool: PgPool,
}

impl PostgresMembershipRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct MembershipRaw {
    membership_uid: Uuid,
    customer_uid: Uuid,
    group_uid: Uuid,
    role: String,
    status: String,
    is_active: bool,
    joined: DateTime<Utc>,
}

#[derive(Debug, FromRow)]
struct CountRaw {
    count: i64,
}

impl From<MembershipRaw> for GroupMembership {
    fn from(e: MembershipRaw) -> Self {
        // role and status are guarded by check constraints
        let role = e.role.parse().unwrap_or_else(|err| {
            warn!("{}, falling back to the default role", err);
            Default::default()
        });
        let status = e.status.parse().unwrap_or_else(|err| {
            warn!("{}, falling back to the default status", err);
            Default::default()
        });
        Self {
            id: e.membership_uid.into(),
            customer_id: e.customer_uid.into(),
            group_id: e.group_uid.into(),
            role,
            status,
            is_active: e.is_active,
            joined: e.joined,
        }
    }
}

#[async_trait::async_trait]
impl IMembershipRepo for PostgresMembershipRepo {
    async fn insert_if_absent(&self, membership: &GroupMembership) -> anyhow::Result<bool> {
        let res = sqlx::query(
            r#"
            INSERT INTO group_memberships
                (membership_uid, customer_uid, group_uid, role, status, is_active, joined)
            VALUES($1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT (customer_uid, group_uid) DO NOTHING
            "#,
        )
        .bind(membership.id.inner_ref())
        .bind(membership.customer_id.inner_ref())
        .bind(membership.group_id.inner_ref())
        .bind(membership.role.to_string())
        .bind(membership.status.to_string())
        .bind(membership.is_active)
        .bind(membership.joined)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Unable to insert group membership: {:?}. DB returned error: {:?}",
                membership, e
            );
            e
        })?;
        Ok(res.rows_affected() == 1)
    }

    async fn save(&self, membership: &GroupMembership) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            UPDATE group_memberships
            SET role = $2,
            status = $3,
            is_active = $4
            WHERE membership_uid = $1
            "#,
        )
        .bind(membership.id.inner_ref())
        .bind(membership.role.to_string())
        .bind(membership.status.to_string())
        .bind(membership.is_active)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Unable to save group membership: {:?}. DB returned error: {:?}",
                membership, e
            );
            e
        })?;
        Ok(())
    }

    async fn find(&self, membership_id: &ID) -> Option<GroupMembership> {
        let res: Option<MembershipRaw> = sqlx::query_as(
            r#"
            SELECT * FROM group_memberships
            WHERE membership_uid = $1
            "#,
        )
        .bind(membership_id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Find group membership with id: {:?} failed. DB returned error: {:?}",
                membership_id, e
            );
            e
        })
        .ok()?;
        res.map(|m| m.into())
    }

    async fn find_by_customer_and_group(
        &self,
        customer_id: &ID,
        group_id: &ID,
    ) -> Option<GroupMembership> {
        let res: Option<MembershipRaw> = sqlx::query_as(
            r#"
            SELECT * FROM group_memberships
            WHERE customer_uid = $1 AND group_uid = $2
            "#,
        )
        .bind(customer_id.inner_ref())
        .bind(group_id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Find group membership for customer: {:?} in group: {:?} failed. DB returned error: {:?}",
                customer_id, group_id, e
            );
            e
        })
        .ok()?;
        res.map(|m| m.into())
    }

    async fn find_by_group(&self, group_id: &ID) -> anyhow::Result<Vec<GroupMembership>> {
        let memberships: Vec<MembershipRaw> = sqlx::query_as(
            r#"
            SELECT * FROM group_memberships
            WHERE group_uid = $1
            ORDER BY joined ASC
            "#,
        )
        .bind(group_id.inner_ref())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Find group memberships for group: {:?} failed. DB returned error: {:?}",
                group_id, e
            );
            e
        })?;
        Ok(memberships.into_iter().map(|m| m.into()).collect())
    }

    async fn count_by_group(&self, group_id: &ID) -> anyhow::Result<i64> {
        let res: CountRaw = sqlx::query_as(
            r#"
            SELECT COUNT(*) AS count FROM group_memberships
            WHERE group_uid = $1
            "#,
        )
        .bind(group_id.inner_ref())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Count group memberships for group: {:?} failed. DB returned error: {:?}",
                group_id, e
            );
            e
        })?;
        Ok(res.count)
    }

    async fn delete(&self, membership_id: &ID) -> Option<GroupMembership> {
        let res: Option<MembershipRaw> = sqlx::query_as(
            r#"
            DELETE FROM group_memberships
            WHERE membership_uid = $1
            RETURNING *
            "#,
        )
        .bind(membership_id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Delete group membership with id: {:?} failed. DB returned error: {:?}",
                membership_id, e
            );
            e
        })
        .ok()?;
        res.map(|m| m.into())
    }

    async fn delete_by_group(&self, group_id: &ID) -> anyhow::Result<DeleteResult> {
        let res = sqlx::query(
            r#"
            DELETE FROM group_memberships
            WHERE group_uid = $1
            "#,
        )
        .bind(group_id.inner_ref())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Delete group memberships for group: {:?} failed. DB returned error: {:?}",
                group_id, e
            );
            e
        })?;
        Ok(DeleteResult {
            deleted_count: res.rows_affected() as i64,
        })
    }

    async fn delete_by_customer(&self, customer_id: &ID) -> anyhow::Result<DeleteResult> {
        let res = sqlx::query(
            r#"
            DELETE FROM group_memberships
            WHERE customer_uid = $1
            "#,
        )
        .bind(customer_id.inner_ref())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Delete group memberships for customer: {:?} failed. DB returned error: {:?}",
                customer_id, e
            );
            e
        })?;
        Ok(DeleteResult {
            deleted_count: res.rows_affected() as i64,
        })
    }
}
