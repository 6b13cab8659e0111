mod admin;
mod dashboard;
mod member;
mod shared;
mod staff;
mod student;
mod teacher;

pub use admin::{Admin, PasswordError};
pub use dashboard::DashboardItem;
pub use member::{Member, Profile};
pub use shared::entity::{Entity, InvalidIDError, ID};
pub use staff::Staff;
pub use student::Student;
pub use teacher::Teacher;
