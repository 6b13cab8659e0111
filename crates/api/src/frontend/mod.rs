//! Production serves the built single page app, development only
//! answers the liveness route.

use crate::{error::CampusError, status};
use actix_files::{Files, NamedFile};
use actix_web::{guard, http::Method, web, HttpRequest, HttpResponse};
use campus_infra::{CampusContext, Config};
use tracing::warn;

pub fn configure_routes(cfg: &mut web::ServiceConfig, config: &Config) {
    if config.mode.is_production() {
        cfg.service(
            Files::new("/", &config.frontend_dir)
                .index_file("index.html")
                .guard(guard::Any(guard::Get()).or(guard::Head()))
                .default_handler(web::to(fallback)),
        );
    } else {
        status::configure_routes(cfg);
    }
}

/// Default service of the whole app. In production unmatched reads get the
/// app's `index.html` so client side routes survive a reload.
pub async fn fallback(
    req: HttpRequest,
    ctx: web::Data<CampusContext>,
) -> Result<HttpResponse, CampusError> {
    let is_read = req.method() == Method::GET || req.method() == Method::HEAD;
    if ctx.config.mode.is_production() && is_read {
        let index = ctx.config.frontend_index();
        match NamedFile::open_async(&index).await {
            Ok(file) => return Ok(file.into_response(&req)),
            Err(e) => warn!("Unable to open frontend index {}: {}", index.display(), e),
        }
    }

    Err(CampusError::NotFound(req.uri().to_string()))
}

#[cfg(test)]
mod tests {
    use crate::shared::testing::{self, init_app};
    use actix_web::{http::StatusCode, test};
    use campus_infra::RunMode;
    use serde_json::Value;
    use std::fs;

    fn frontend_build() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("index.html"), "<html>campus</html>").unwrap();
        fs::create_dir(dir.path().join("static")).unwrap();
        fs::write(dir.path().join("static").join("app.js"), "console.log(1)").unwrap();
        dir
    }

    #[actix_web::main]
    #[test]
    async fn development_answers_the_root_only() {
        let app = init_app!(testing::context(RunMode::Development));

        let req = test::TestRequest::get().uri("/").to_request();
        let body = test::call_and_read_body(&app, req).await;
        assert_eq!(body, "API is running...");

        let req = test::TestRequest::get().uri("/students/list").to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["message"], "Not found - /students/list");
    }

    #[actix_web::main]
    #[test]
    async fn production_serves_assets_and_index_fallback() {
        let dir = frontend_build();
        let mut ctx = testing::context(RunMode::Production);
        ctx.config.frontend_dir = dir.path().to_path_buf();
        let app = init_app!(ctx);

        let req = test::TestRequest::get().uri("/static/app.js").to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::OK);
        let content_type = res.headers().get("content-type").unwrap().to_str().unwrap();
        assert!(content_type.contains("javascript"));

        for uri in ["/", "/teachers/42", "/api/students/a/b"] {
            let req = test::TestRequest::get().uri(uri).to_request();
            let res = test::call_service(&app, req).await;
            assert_eq!(res.status(), StatusCode::OK, "{}", uri);
            assert_eq!(test::read_body(res).await, "<html>campus</html>");
        }
    }

    #[actix_web::main]
    #[test]
    async fn production_only_falls_back_for_reads() {
        let dir = frontend_build();
        let mut ctx = testing::context(RunMode::Production);
        ctx.config.frontend_dir = dir.path().to_path_buf();
        let app = init_app!(ctx);

        let req = test::TestRequest::post().uri("/teachers/42").to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["message"], "Not found - /teachers/42");
        assert!(body["stack"].is_null());
    }
}
