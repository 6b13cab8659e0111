mod base;
mod dashboard;
mod login;
mod media_config;
mod roster;
mod status;

pub(crate) use base::BaseClient;
pub use base::{APIError, APIErrorVariant, APIResponse};
use dashboard::DashboardClient;
use login::LoginClient;
use media_config::MediaConfigClient;
pub use roster::RosterClient;
use status::StatusClient;
use std::sync::Arc;

pub use campus_api_structs::{
    dtos::{AdminDTO as Admin, StaffDTO as Staff, StudentDTO as Student, TeacherDTO as Teacher},
    ProfileInput, StaffInput, StudentInput, TeacherInput,
};
pub use campus_domain::{DashboardItem, ID};

pub type StudentClient = RosterClient<StudentInput, Student>;
pub type TeacherClient = RosterClient<TeacherInput, Teacher>;
pub type StaffClient = RosterClient<StaffInput, Staff>;

/// Campus Server SDK
///
/// Typed access to every route the campus server exposes.
#[derive(Clone)]
pub struct CampusSDK {
    pub status: StatusClient,
    pub dashboard: DashboardClient,
    pub config: MediaConfigClient,
    pub students: StudentClient,
    pub teachers: TeacherClient,
    pub staffs: StaffClient,
    pub login: LoginClient,
}

impl CampusSDK {
    pub fn new(address: String) -> Self {
        let base = Arc::new(BaseClient::new(address));

        Self {
            status: StatusClient::new(base.clone()),
            dashboard: DashboardClient::new(base.clone()),
            config: MediaConfigClient::new(base.clone()),
            students: RosterClient::new(base.clone(), "api/students"),
            teachers: RosterClient::new(base.clone(), "api/teachers"),
            staffs: RosterClient::new(base.clone(), "api/staffs"),
            login: LoginClient::new(base),
        }
    }
}
