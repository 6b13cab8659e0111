use actix_web::web;

/// A set of routes mounted under one path prefix.
pub trait RouteGroup {
    fn prefix(&self) -> &'static str;
    fn configure(&self, cfg: &mut web::ServiceConfig);
}

/// Mounts every group, in order, each in its own scope
pub fn mount_route_groups(cfg: &mut web::ServiceConfig, groups: &[Box<dyn RouteGroup>]) {
    for group in groups {
        cfg.service(web::scope(group.prefix()).configure(|cfg| group.configure(cfg)));
    }
}
