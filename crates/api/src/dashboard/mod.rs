use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use campus_api_structs::{get_dashboard::APIResponse, MessageResponse};
use campus_infra::CampusContext;

const FETCH_FAILED: &str = "Failed to fetch dashboard items";

/// Storage failures are answered here and never reach the error formatter.
async fn get_dashboard_controller(ctx: web::Data<CampusContext>) -> HttpResponse {
    match execute(GetDashboardUseCase {}, &ctx).await {
        Ok(items) => HttpResponse::Ok().json(items),
        Err(_) => HttpResponse::InternalServerError().json(MessageResponse::new(FETCH_FAILED)),
    }
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/dashboard", web::get().to(get_dashboard_controller));
}

#[derive(Debug)]
struct GetDashboardUseCase {}

#[async_trait::async_trait(?Send)]
impl UseCase for GetDashboardUseCase {
    type Response = APIResponse;

    type Error = anyhow::Error;

    const NAME: &'static str = "GetDashboard";

    async fn execute(&mut self, ctx: &CampusContext) -> Result<Self::Response, Self::Error> {
        ctx.repos.dashboard.find_all().await
    }
}

#[cfg(test)]
mod tests {
    use crate::shared::testing::{self, init_app};
    use actix_web::{http::StatusCode, test};
    use campus_domain::DashboardItem;
    use campus_infra::{IDashboardRepo, InMemoryDashboardRepo, RunMode};
    use serde_json::{json, Value};
    use std::sync::Arc;

    struct FailingDashboardRepo;

    #[async_trait::async_trait]
    impl IDashboardRepo for FailingDashboardRepo {
        async fn find_all(&self) -> anyhow::Result<Vec<DashboardItem>> {
            Err(anyhow::anyhow!("connection reset"))
        }
    }

    #[actix_web::main]
    #[test]
    async fn empty_store_gives_empty_array() {
        let app = init_app!(testing::context(RunMode::Development));
        let req = test::TestRequest::get().uri("/dashboard").to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::OK);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body, json!([]));
    }

    #[actix_web::main]
    #[test]
    async fn repeated_reads_return_identical_items() {
        let mut ctx = testing::context(RunMode::Development);
        ctx.repos.dashboard = Arc::new(InMemoryDashboardRepo::with_items(vec![
            DashboardItem::new(json!({ "_id": "65a1f0c2e4b0a1b2c3d4e5f6", "title": "Enrolment", "count": 412 })),
            DashboardItem::new(json!({ "title": "Open positions", "count": 3 })),
        ]));
        let app = init_app!(ctx);

        let mut bodies = vec![];
        for _ in 0..2 {
            let req = test::TestRequest::get().uri("/dashboard").to_request();
            let body: Value = test::call_and_read_body_json(&app, req).await;
            bodies.push(body);
        }
        assert_eq!(bodies[0], bodies[1]);
        assert_eq!(bodies[0][0]["title"], "Enrolment");
        assert_eq!(bodies[0][1]["count"], 3);
    }

    #[actix_web::main]
    #[test]
    async fn storage_failure_gives_bare_message() {
        let mut ctx = testing::context(RunMode::Development);
        ctx.repos.dashboard = Arc::new(FailingDashboardRepo);
        let app = init_app!(ctx);

        let req = test::TestRequest::get().uri("/dashboard").to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body, json!({ "message": "Failed to fetch dashboard items" }));
    }
}
