use chrono_tz::Tz;
use remindly_utils::create_random_secret;
use std::{fmt::Display, str::FromStr};
use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct SmtpSettings {
    pub host: String,
    /// Defaults to the submission port of the transport when not set
    pub port: Option<u16>,
    pub username: Option<String>,
    pub password: Option<String>,
    /// Use STARTTLS. Turning this off is only meant for local mail catchers.
    pub tls: bool,
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Key that must be provided in the `x-api-key` header to use the admin routes
    pub admin_api_key: String,
    /// Port for the application to run on
    pub port: usize,
    /// Timezone used to decide which calendar day it is when checking if a
    /// `Reminder` is due
    pub timezone: Tz,
    /// Whether the server should run the reminder dispatch job itself.
    /// When disabled the `send_reminders` binary is expected to be triggered
    /// by an external scheduler.
    pub send_reminders_job_enabled: bool,
    /// Seconds between two runs of the in process reminder dispatch job
    pub send_reminders_interval_secs: u64,
    /// Sender address of reminder emails
    pub email_from: String,
    /// Emails are only logged when no smtp relay is configured
    pub smtp: Option<SmtpSettings>,
}

fn parse_env_or<T>(key: &str, default: T) -> T
where
    T: FromStr + Display,
{
    match std::env::var(key) {
        Ok(value) => match value.parse::<T>() {
            Ok(parsed) => parsed,
            Err(_) => {
                warn!(
                    "The given {}: {} is not valid, falling back to the default: {}.",
                    key, value, default
                );
                default
            }
        },
        Err(_) => default,
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

impl Config {
    pub fn new() -> Self {
        let admin_api_key = match optional_env("ADMIN_API_KEY") {
            Some(key) => key,
            None => {
                info!("Did not find ADMIN_API_KEY environment variable. Going to create one.");
                let key = create_random_secret(32);
                info!("Api key for the admin routes was generated and set to: {}", key);
                key
            }
        };

        let smtp = optional_env("SMTP_HOST").map(|host| SmtpSettings {
            host,
            port: optional_env("SMTP_PORT").and_then(|port| match port.parse() {
                Ok(port) => Some(port),
                Err(_) => {
                    warn!("The given SMTP_PORT: {} is not valid, ignoring it.", port);
                    None
                }
            }),
            username: optional_env("SMTP_USERNAME"),
            password: optional_env("SMTP_PASSWORD"),
            tls: parse_env_or("SMTP_TLS", true),
        });
        if smtp.is_none() {
            info!("Did not find SMTP_HOST environment variable. Reminder emails will only be logged.");
        }

        Self {
            admin_api_key,
            port: parse_env_or("PORT", 5000),
            timezone: parse_env_or("REMINDER_TIMEZONE", Tz::UTC),
            send_reminders_job_enabled: parse_env_or("SEND_REMINDERS_JOB_ENABLED", false),
            send_reminders_interval_secs: parse_env_or("SEND_REMINDERS_INTERVAL_SECS", 5 * 60),
            email_from: optional_env("EMAIL_FROM").unwrap_or_else(|| "noreply@example.com".into()),
            smtp,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
