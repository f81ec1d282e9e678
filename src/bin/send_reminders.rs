//! Runs a single reminder dispatch pass and exits, meant to be
//! triggered by an external scheduler such as cron.
use remindly::telemetry::{get_subscriber, init_subscriber};
use remindly_api::send_reminders;
use remindly_infra::setup_context;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    openssl_probe::init_ssl_cert_env_vars();

    let subscriber = get_subscriber("remindly_send_reminders".into(), "info".into());
    init_subscriber(subscriber);

    let context = setup_context().await?;
    send_reminders(&context).await;

    Ok(())
}
