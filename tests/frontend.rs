mod helpers;

use campus_infra::RunMode;
use helpers::setup::spawn_app_with;
use reqwest::StatusCode;
use serde_json::Value;
use std::fs;

#[actix_web::main]
#[test]
async fn test_production_serves_the_frontend() {
    let build = tempfile::tempdir().unwrap();
    fs::write(build.path().join("index.html"), "<div id=\"root\"></div>").unwrap();
    fs::write(build.path().join("favicon.ico"), [0u8, 0, 1, 0]).unwrap();
    let frontend_dir = build.path().to_path_buf();

    let (_, sdk, address) = spawn_app_with(move |config| {
        config.mode = RunMode::Production;
        config.frontend_dir = frontend_dir;
    })
    .await;

    let res = reqwest::get(format!("{}/favicon.ico", address)).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.bytes().await.unwrap().as_ref(), &[0u8, 0, 1, 0]);

    let res = reqwest::get(format!("{}/students/42/edit", address))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.text().await.unwrap(), "<div id=\"root\"></div>");

    // The api still wins over the frontend
    assert!(sdk.dashboard.get().await.unwrap().is_empty());

    let res = reqwest::Client::new()
        .delete(format!("{}/students/42/edit", address))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: Value = res.json().await.unwrap();
    assert!(body["stack"].is_null());
}
