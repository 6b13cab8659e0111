mod admin;
mod dashboard;
mod error;
mod frontend;
mod media_config;
mod shared;
mod staff;
mod status;
mod student;
mod teacher;

use actix_cors::Cors;
use actix_web::{dev::Server, middleware, web, App, HttpServer};
use admin::LoginRoutes;
use campus_infra::{CampusContext, Config};
pub use error::CampusError;
use error::error_formatter;
pub use shared::route_group::RouteGroup;
use shared::route_group::mount_route_groups;
use staff::StaffRoutes;
use std::net::TcpListener;
use student::StudentRoutes;
use teacher::TeacherRoutes;
use tracing::info;
use tracing_actix_web::TracingLogger;

/// The mounted route groups, in matching order
pub fn route_groups() -> Vec<Box<dyn RouteGroup>> {
    vec![
        Box::new(StudentRoutes),
        Box::new(LoginRoutes),
        Box::new(TeacherRoutes),
        Box::new(StaffRoutes),
    ]
}

pub fn configure_server_api(cfg: &mut web::ServiceConfig, config: &Config) {
    dashboard::configure_routes(cfg);
    mount_route_groups(cfg, &route_groups());
    media_config::configure_routes(cfg);
    frontend::configure_routes(cfg, config);
}

/// Everything an `App` needs besides middleware: shared state, extractor
/// error handling, the routes and the default service.
pub fn configure_server_app(cfg: &mut web::ServiceConfig, ctx: web::Data<CampusContext>) {
    let config = ctx.config.clone();

    cfg.app_data(ctx)
        .app_data(web::PathConfig::default().error_handler(|err, _| {
            CampusError::BadClientData(err.to_string()).into()
        }))
        .app_data(web::JsonConfig::default().error_handler(|err, _| {
            CampusError::BadClientData(err.to_string()).into()
        }));
    configure_server_api(cfg, &config);
    cfg.default_service(web::to(frontend::fallback));
}

pub struct Application {
    server: Server,
    port: u16,
}

impl Application {
    pub async fn new(context: CampusContext) -> Result<Self, std::io::Error> {
        let (server, port) = Application::configure_server(context).await?;

        Ok(Self { server, port })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    async fn configure_server(context: CampusContext) -> Result<(Server, u16), std::io::Error> {
        let mode = context.config.mode;
        let address = format!("0.0.0.0:{}", context.config.port);
        let listener = TcpListener::bind(&address)?;
        let port = listener.local_addr()?.port();
        let ctx = web::Data::new(context);

        let server = HttpServer::new(move || {
            let ctx = ctx.clone();

            App::new()
                .wrap(error_formatter(mode))
                .wrap(Cors::permissive())
                .wrap(middleware::Compress::default())
                .wrap(TracingLogger::default())
                .configure(|cfg| configure_server_app(cfg, ctx))
        })
        .listen(listener)?
        .workers(4)
        .run();

        Ok((server, port))
    }

    pub async fn start(self) -> Result<(), std::io::Error> {
        info!("Server running on port {}", self.port);
        self.server.await
    }
}
