use campus_domain::{Admin, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminDTO {
    pub id: ID,
    pub username: String,
}

impl AdminDTO {
    pub fn new(admin: Admin) -> Self {
        Self {
            id: admin.id,
            username: admin.username,
        }
    }
}
