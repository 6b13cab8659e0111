//! Hands the frontend the media host settings it uploads pictures with.

use actix_web::{http::header::ContentType, web, HttpResponse};
use campus_infra::CampusContext;

fn plaintext(value: &str) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::plaintext())
        .body(value.to_string())
}

async fn get_cloudinary_url_controller(ctx: web::Data<CampusContext>) -> HttpResponse {
    plaintext(ctx.config.cloudinary_url())
}

async fn get_cloudinary_preset_controller(ctx: web::Data<CampusContext>) -> HttpResponse {
    plaintext(ctx.config.cloudinary_upload_preset())
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/api/config/cloudinary",
        web::get().to(get_cloudinary_url_controller),
    );
    cfg.route(
        "/api/config/cloudinarypreset",
        web::get().to(get_cloudinary_preset_controller),
    );
}
