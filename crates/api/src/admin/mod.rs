mod login;

use crate::shared::route_group::RouteGroup;
use actix_web::web;
use login::login_admin_controller;

pub struct LoginRoutes;

impl RouteGroup for LoginRoutes {
    fn prefix(&self) -> &'static str {
        "/api/login"
    }

    fn configure(&self, cfg: &mut web::ServiceConfig) {
        cfg.route("", web::post().to(login_admin_controller));
    }
}
