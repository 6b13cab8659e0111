use campus_infra::{CampusContext, Config, RunMode};
use std::path::PathBuf;

pub fn config(mode: RunMode) -> Config {
    Config {
        port: 0,
        mongo_uri: "mongodb://localhost:27017".into(),
        mongo_db_name: None,
        cloudinary_url: None,
        cloudinary_upload_preset: None,
        mode,
        frontend_dir: PathBuf::from("frontend/build"),
    }
}

pub fn context(mode: RunMode) -> CampusContext {
    CampusContext::create_inmemory(config(mode))
}

/// Initializes the full application the way the server builds it, minus the network
macro_rules! init_app {
    ($ctx:expr) => {{
        let ctx: campus_infra::CampusContext = $ctx;
        let mode = ctx.config.mode;
        actix_web::test::init_service(
            actix_web::App::new()
                .wrap($crate::error::error_formatter(mode))
                .configure(|cfg| $crate::configure_server_app(cfg, actix_web::web::Data::new(ctx))),
        )
        .await
    }};
}

pub(crate) use init_app;
