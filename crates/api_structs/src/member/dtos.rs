use campus_domain::{Profile, Staff, Student, Teacher, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ProfileDTO {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub gender: Option<String>,
    pub avatar: Option<String>,
}

impl ProfileDTO {
    pub fn new(profile: Profile) -> Self {
        Self {
            name: profile.name,
            email: profile.email,
            phone: profile.phone,
            address: profile.address,
            gender: profile.gender,
            avatar: profile.avatar,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentDTO {
    pub id: ID,
    #[serde(flatten)]
    pub profile: ProfileDTO,
    pub date_of_birth: Option<String>,
    pub class_name: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl StudentDTO {
    pub fn new(student: Student) -> Self {
        Self {
            id: student.id,
            profile: ProfileDTO::new(student.profile),
            date_of_birth: student.date_of_birth,
            class_name: student.class_name,
            created_at: student.created_at,
            updated_at: student.updated_at,
        }
    }
}

impl From<Student> for StudentDTO {
    fn from(student: Student) -> Self {
        Self::new(student)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeacherDTO {
    pub id: ID,
    #[serde(flatten)]
    pub profile: ProfileDTO,
    pub subject: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl TeacherDTO {
    pub fn new(teacher: Teacher) -> Self {
        Self {
            id: teacher.id,
            profile: ProfileDTO::new(teacher.profile),
            subject: teacher.subject,
            created_at: teacher.created_at,
            updated_at: teacher.updated_at,
        }
    }
}

impl From<Teacher> for TeacherDTO {
    fn from(teacher: Teacher) -> Self {
        Self::new(teacher)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffDTO {
    pub id: ID,
    #[serde(flatten)]
    pub profile: ProfileDTO,
    pub position: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl StaffDTO {
    pub fn new(staff: Staff) -> Self {
        Self {
            id: staff.id,
            profile: ProfileDTO::new(staff.profile),
            position: staff.position,
            created_at: staff.created_at,
            updated_at: staff.updated_at,
        }
    }
}

impl From<Staff> for StaffDTO {
    fn from(staff: Staff) -> Self {
        Self::new(staff)
    }
}
