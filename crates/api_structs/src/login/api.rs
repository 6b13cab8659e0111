pub mod login_admin {
    use crate::dtos::AdminDTO;
    use campus_domain::Admin;
    use serde::{Deserialize, Serialize};
    use std::fmt;

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub username: String,
        pub password: String,
    }

    impl fmt::Debug for RequestBody {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.debug_struct("RequestBody")
                .field("username", &self.username)
                .field("password", &"<redacted>")
                .finish()
        }
    }

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub message: String,
        pub admin: AdminDTO,
    }

    impl APIResponse {
        pub fn new(admin: Admin) -> Self {
            Self {
                message: "Login successful".into(),
                admin: AdminDTO::new(admin),
            }
        }
    }
}
