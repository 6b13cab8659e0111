use campus_api::Application;
use campus_infra::{CampusContext, Config};
use campus_sdk::CampusSDK;

pub struct TestApp {
    /// Shares its repositories with the running server
    pub ctx: CampusContext,
}

fn test_config() -> Config {
    Config::from_lookup(|key| match key {
        "MONGO_URI" => Some("mongodb://localhost:27017".into()),
        _ => None,
    })
    .expect("Test config to be valid")
}

// Launch the application as a background task
pub async fn spawn_app() -> (TestApp, CampusSDK, String) {
    spawn_app_with(|_| {}).await
}

pub async fn spawn_app_with(customize: impl FnOnce(&mut Config)) -> (TestApp, CampusSDK, String) {
    let mut config = test_config();
    config.port = 0; // Random port
    customize(&mut config);

    let ctx = CampusContext::create_inmemory(config);
    let application = Application::new(ctx.clone())
        .await
        .expect("Failed to build application.");

    let address = format!("http://localhost:{}", application.port());
    let _ = actix_web::rt::spawn(async move {
        application
            .start()
            .await
            .expect("Expected application to start");
    });

    let app = TestApp { ctx };
    let sdk = CampusSDK::new(address.clone());
    (app, sdk, address)
}
