mod customer;
mod group;
mod membership;
mod reminder;
mod shared;

pub use customer::ICustomerRepo;
use customer::{InMemoryCustomerRepo, PostgresCustomerRepo};
pub use group::IGroupRepo;
use group::{InMemoryGroupRepo, PostgresGroupRepo};
pub use membership::IMembershipRepo;
use membership::{InMemoryMembershipRepo, PostgresMembershipRepo};
pub use reminder::IReminderRepo;
use reminder::{InMemoryReminderRepo, PostgresReminderRepo};
pub use shared::repo::DeleteResult;
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub struct Repos {
    pub customers: Arc<dyn ICustomerRepo>,
    pub groups: Arc<dyn IGroupRepo>,
    pub memberships: Arc<dyn IMembershipRepo>,
    pub reminders: Arc<dyn IReminderRepo>,
}

impl Repos {
    pub async fn create_postgres(connection_string: &str) -> anyhow::Result<Self> {
        info!("DB CHECKING CONNECTION ...");
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(connection_string)
            .await?;
        info!("DB CHECKING CONNECTION ... [done]");

        info!("DB RUNNING MIGRATIONS ...");
        sqlx::migrate!().run(&pool).await?;
        info!("DB RUNNING MIGRATIONS ... [done]");

        Ok(Self {
            customers: Arc::new(PostgresCustomerRepo::new(pool.clone())),
            groups: Arc::new(PostgresGroupRepo::new(pool.clone())),
            memberships: Arc::new(PostgresMembershipRepo::new(pool.clone())),
            reminders: Arc::new(PostgresReminderRepo::new(pool)),
        })
    }

    pub fn create_inmemory() -> Self {
        Self {
            customers: Arc::new(InMemoryCustomerRepo::new()),
            groups: Arc::new(InMemoryGroupRepo::new()),
            memberships: Arc::new(InMemoryMembershipRepo::new()),
            reminders: Arc::new(InMemoryReminderRepo::new()),
        }
    }
}
