use remindly_api::Application;
use remindly_infra::{Config, RemindlyContext};
use remindly_sdk::RemindlySDK;

pub struct TestApp {
    pub config: Config,
    pub address: String,
}

impl TestApp {
    /// Sdk that authenticates as admin
    pub fn admin_sdk(&self) -> RemindlySDK {
        RemindlySDK::new(self.address.clone(), self.config.admin_api_key.clone())
    }
}

// Launch the application as a background task
pub async fn spawn_app() -> (TestApp, RemindlySDK) {
    let mut ctx = RemindlyContext::create_inmemory();
    ctx.config.port = 0; // Random port
    ctx.config.send_reminders_job_enabled = false;
    ctx.config.admin_api_key = "test-admin-key".into();

    let config = ctx.config.clone();
    let application = Application::new(ctx)
        .await
        .expect("Failed to build application.");

    let address = format!("http://localhost:{}", application.port());
    let _ = actix_web::rt::spawn(async move {
        application
            .start()
            .await
            .expect("Expected application to start");
    });

    let sdk = RemindlySDK::new(address.clone(), "");
    (TestApp { config, address }, sdk)
}
