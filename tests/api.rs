mod helpers;

use campus_domain::Admin;
use campus_sdk::{APIErrorVariant, ProfileInput, StaffInput, StudentInput, TeacherInput, ID};
use helpers::setup::{spawn_app, spawn_app_with};
use serde_json::Value;

fn profile(name: &str) -> ProfileInput {
    ProfileInput {
        name: Some(name.into()),
        ..Default::default()
    }
}

#[actix_web::main]
#[test]
async fn test_status_ok() {
    let (_, sdk, _) = spawn_app().await;
    let status = sdk.status.check_health().await.expect("Expected status");
    assert_eq!(status, "API is running...");
}

#[actix_web::main]
#[test]
async fn test_unmatched_route_is_json_not_found() {
    let (_, _, address) = spawn_app().await;
    let res = reqwest::get(format!("{}/nowhere/to/be/found", address))
        .await
        .expect("Expected response");
    assert_eq!(res.status(), reqwest::StatusCode::NOT_FOUND);
    let body: Value = res.json().await.expect("Expected JSON body");
    assert_eq!(body["message"], "Not found - /nowhere/to/be/found");
    assert!(body["stack"].is_string());
}

#[actix_web::main]
#[test]
async fn test_empty_dashboard() {
    let (_, sdk, _) = spawn_app().await;
    let items = sdk.dashboard.get().await.expect("Expected dashboard");
    assert!(items.is_empty());
}

#[actix_web::main]
#[test]
async fn test_media_config() {
    let (_, sdk, _) = spawn_app().await;
    assert_eq!(
        sdk.config.cloudinary_url().await.unwrap(),
        "Cloudinary URL not configured"
    );

    let (_, sdk, _) = spawn_app_with(|config| {
        config.cloudinary_upload_preset = Some("campus_unsigned".into());
    })
    .await;
    assert_eq!(
        sdk.config.cloudinary_upload_preset().await.unwrap(),
        "campus_unsigned"
    );
}

#[actix_web::main]
#[test]
async fn test_student_lifecycle() {
    let (_, sdk, _) = spawn_app().await;

    let student = sdk
        .students
        .create(StudentInput {
            profile: profile("Grace Hopper"),
            class_name: Some("7B".into()),
            ..Default::default()
        })
        .await
        .expect("Expected to create student");
    assert_eq!(student.profile.name, "Grace Hopper");

    let fetched = sdk.students.get(&student.id).await.unwrap();
    assert_eq!(fetched.id, student.id);
    assert_eq!(fetched.class_name.as_deref(), Some("7B"));

    let updated = sdk
        .students
        .update(
            &student.id,
            StudentInput {
                date_of_birth: Some("2012-12-09".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.profile.name, "Grace Hopper");
    assert_eq!(updated.class_name.as_deref(), Some("7B"));
    assert_eq!(updated.date_of_birth.as_deref(), Some("2012-12-09"));

    assert_eq!(sdk.students.list().await.unwrap().len(), 1);
    assert!(sdk.students.delete(&student.id).await.is_ok());

    let err = sdk.students.get(&student.id).await.unwrap_err();
    assert_eq!(err.variant, APIErrorVariant::NotFound);
    assert!(sdk.students.list().await.unwrap().is_empty());
}

#[actix_web::main]
#[test]
async fn test_teacher_and_staff_groups_are_separate() {
    let (_, sdk, _) = spawn_app().await;

    let teacher = sdk
        .teachers
        .create(TeacherInput {
            profile: profile("Alan Turing"),
            subject: Some("Mathematics".into()),
        })
        .await
        .unwrap();
    let staff = sdk
        .staffs
        .create(StaffInput {
            profile: profile("Margaret Hamilton"),
            position: Some("Registrar".into()),
        })
        .await
        .unwrap();

    assert_eq!(teacher.subject.as_deref(), Some("Mathematics"));
    assert_eq!(staff.position.as_deref(), Some("Registrar"));
    assert_eq!(
        sdk.teachers.get(&staff.id).await.unwrap_err().variant,
        APIErrorVariant::NotFound
    );
    assert_eq!(sdk.staffs.list().await.unwrap().len(), 1);
}

#[actix_web::main]
#[test]
async fn test_rejects_bad_member_input() {
    let (_, sdk, address) = spawn_app().await;

    let err = sdk
        .teachers
        .create(TeacherInput::default())
        .await
        .unwrap_err();
    assert_eq!(err.variant, APIErrorVariant::BadClientData);

    let err = sdk
        .staffs
        .delete(&ID::default())
        .await
        .unwrap_err();
    assert_eq!(err.variant, APIErrorVariant::NotFound);

    let res = reqwest::get(format!("{}/api/students/12345", address))
        .await
        .unwrap();
    assert_eq!(res.status(), reqwest::StatusCode::BAD_REQUEST);
}

#[actix_web::main]
#[test]
async fn test_admin_login() {
    let (app, sdk, _) = spawn_app().await;
    let admin = Admin::new("principal", "correct horse").unwrap();
    app.ctx.repos.admins.insert(&admin).await.unwrap();

    let res = sdk
        .login
        .login("principal", "correct horse")
        .await
        .expect("Expected to log in");
    assert_eq!(res.message, "Login successful");
    assert_eq!(res.admin.username, "principal");
    assert_eq!(res.admin.id, admin.id);

    for (username, password) in [("principal", "battery staple"), ("nobody", "correct horse")] {
        let err = sdk.login.login(username, password).await.unwrap_err();
        assert_eq!(err.variant, APIErrorVariant::Unauthorized);
        assert!(err.message.contains("Invalid username or password"));
    }
}
