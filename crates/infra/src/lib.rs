mod config;
mod repos;
mod services;
mod system;

pub use config::{Config, SmtpSettings};
pub use repos::{
    DeleteResult, ICustomerRepo, IGroupRepo, IMembershipRepo, IReminderRepo, Repos,
};
pub use services::notifications::*;
use std::sync::Arc;
pub use system::{ISys, RealSys, StaticTimeSys};
use tracing::warn;

#[derive(Clone)]
pub struct RemindlyContext {
    pub repos: Repos,
    pub config: Config,
    pub sys: Arc<dyn ISys>,
    pub notifications: NotificationChannels,
}

struct ContextParams {
    pub postgres_connection_string: Option<String>,
}

impl RemindlyContext {
    async fn create(params: ContextParams) -> anyhow::Result<Self> {
        let config = Config::new();
        let repos = match params.postgres_connection_string {
            Some(connection_string) => Repos::create_postgres(&connection_string).await?,
            None => {
                warn!("DATABASE_URL is not set, everything will be stored in memory and lost on shutdown.");
                Repos::create_inmemory()
            }
        };
        let notifications = NotificationChannels::create(&config)?;
        Ok(Self {
            repos,
            config,
            sys: Arc::new(RealSys {}),
            notifications,
        })
    }

    /// Context backed by inmemory repositories that only logs notifications
    pub fn create_inmemory() -> Self {
        Self {
            repos: Repos::create_inmemory(),
            config: Config::new(),
            sys: Arc::new(RealSys {}),
            notifications: NotificationChannels::create_console(),
        }
    }
}

/// Will setup the infrastructure context given the environment
pub async fn setup_context() -> anyhow::Result<RemindlyContext> {
    RemindlyContext::create(ContextParams {
        postgres_connection_string: get_psql_connection_string(),
    })
    .await
}

fn get_psql_connection_string() -> Option<String> {
    const PSQL_CONNECTION_STRING: &str = "DATABASE_URL";

    std::env::var(PSQL_CONNECTION_STRING).ok()
}
