use crate::{
    error::CampusError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use campus_api_structs::login_admin::*;
use campus_domain::Admin;
use campus_infra::CampusContext;
use std::fmt;

const INVALID_CREDENTIALS: &str = "Invalid username or password";

fn handle_error(e: UseCaseError) -> CampusError {
    match e {
        UseCaseError::StorageError(_) => CampusError::InternalError,
        UseCaseError::InvalidCredentials => CampusError::Unauthorized(INVALID_CREDENTIALS.into()),
    }
}

pub async fn login_admin_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<CampusContext>,
) -> Result<HttpResponse, CampusError> {
    let body = body.into_inner();
    let usecase = LoginAdminUseCase {
        username: body.username,
        password: body.password,
    };

    execute(usecase, &ctx)
        .await
        .map(|admin| HttpResponse::Ok().json(APIResponse::new(admin)))
        .map_err(handle_error)
}

struct LoginAdminUseCase {
    username: String,
    password: String,
}

impl fmt::Debug for LoginAdminUseCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginAdminUseCase")
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

#[derive(Debug)]
enum UseCaseError {
    StorageError(anyhow::Error),
    /// Unknown username and wrong password are not told apart
    InvalidCredentials,
}

#[async_trait::async_trait(?Send)]
impl UseCase for LoginAdminUseCase {
    type Response = Admin;

    type Error = UseCaseError;

    const NAME: &'static str = "LoginAdmin";

    async fn execute(&mut self, ctx: &CampusContext) -> Result<Self::Response, Self::Error> {
        let admin = ctx
            .repos
            .admins
            .find_by_username(&self.username)
            .await
            .map_err(UseCaseError::StorageError)?
            .ok_or(UseCaseError::InvalidCredentials)?;

        if admin.verify_password(&self.password) {
            Ok(admin)
        } else {
            Err(UseCaseError::InvalidCredentials)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::testing;
    use campus_infra::RunMode;

    async fn setup() -> CampusContext {
        let ctx = testing::context(RunMode::Development);
        let admin = Admin::new("principal", "s3cret").unwrap();
        ctx.repos.admins.insert(&admin).await.unwrap();
        ctx
    }

    fn usecase(username: &str, password: &str) -> LoginAdminUseCase {
        LoginAdminUseCase {
            username: username.into(),
            password: password.into(),
        }
    }

    #[actix_web::main]
    #[test]
    async fn it_logs_in_with_valid_credentials() {
        let ctx = setup().await;
        let admin = usecase("principal", "s3cret").execute(&ctx).await.unwrap();
        assert_eq!(admin.username, "principal");
    }

    #[actix_web::main]
    #[test]
    async fn it_rejects_wrong_password_and_unknown_user_alike() {
        let ctx = setup().await;
        for (username, password) in [("principal", "guess"), ("janitor", "s3cret")] {
            let res = usecase(username, password).execute(&ctx).await;
            assert!(matches!(res, Err(UseCaseError::InvalidCredentials)));
        }
    }

    #[test]
    fn debug_output_hides_the_password() {
        let debug = format!("{:?}", usecase("principal", "s3cret"));
        assert!(debug.contains("principal"));
        assert!(!debug.contains("s3cret"));
    }
}
