mod telemetry;

use campus_api::Application;
use campus_infra::{setup_context, Config};
use telemetry::{get_subscriber, init_subscriber};
use tracing::error;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // A missing .env file is fine, the environment may be set by other means
    let _ = dotenvy::dotenv();

    let subscriber = get_subscriber("campus_server".into(), "info".into());
    if let Err(e) = init_subscriber(subscriber) {
        eprintln!("Unable to initialize logging: {}", e);
        std::process::exit(1);
    }

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };
    config.log_summary();

    let context = match setup_context(config).await {
        Ok(context) => context,
        Err(e) => {
            error!("Unable to connect to MongoDB: {}", e);
            std::process::exit(1);
        }
    };

    let app = Application::new(context).await?;
    app.start().await
}
