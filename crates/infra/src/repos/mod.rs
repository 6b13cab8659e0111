mod admin;
mod dashboard;
mod roster;
mod shared;

pub use admin::{IAdminRepo, InMemoryAdminRepo, MongoAdminRepo};
pub use dashboard::{IDashboardRepo, InMemoryDashboardRepo, MongoDashboardRepo};
pub use roster::{IRosterRepo, InMemoryRosterRepo, MongoRosterRepo};

use campus_domain::{Staff, Student, Teacher};
use mongodb::{bson::doc, options::ClientOptions, Client};
use roster::{StaffMongo, StudentMongo, TeacherMongo};
use std::sync::Arc;
use tracing::info;

const DEFAULT_DB_NAME: &str = "campus";

#[derive(Clone)]
pub struct Repos {
    pub dashboard: Arc<dyn IDashboardRepo>,
    pub students: Arc<dyn IRosterRepo<Student>>,
    pub teachers: Arc<dyn IRosterRepo<Teacher>>,
    pub staffs: Arc<dyn IRosterRepo<Staff>>,
    pub admins: Arc<dyn IAdminRepo>,
}

impl Repos {
    /// Connects to MongoDB and pings the deployment so that the server never
    /// starts accepting requests with a broken database link.
    pub async fn create_mongodb(connection_string: &str, db_name: Option<&str>) -> anyhow::Result<Self> {
        let client_options = ClientOptions::parse(connection_string).await?;
        let client = Client::with_options(client_options)?;
        let db = match db_name {
            Some(name) => client.database(name),
            None => client
                .default_database()
                .unwrap_or_else(|| client.database(DEFAULT_DB_NAME)),
        };

        info!("DB CHECKING CONNECTION ...");
        db.run_command(doc! { "ping": 1 }, None).await?;
        info!(database = db.name(), "DB CHECKING CONNECTION ... [done]");

        Ok(Self {
            dashboard: Arc::new(MongoDashboardRepo::new(&db)),
            students: Arc::new(MongoRosterRepo::<Student, StudentMongo>::new(&db, "students")),
            teachers: Arc::new(MongoRosterRepo::<Teacher, TeacherMongo>::new(&db, "teachers")),
            staffs: Arc::new(MongoRosterRepo::<Staff, StaffMongo>::new(&db, "staffs")),
            admins: Arc::new(MongoAdminRepo::new(&db)),
        })
    }

    pub fn create_inmemory() -> Self {
        Self {
            dashboard: Arc::new(InMemoryDashboardRepo::new()),
            students: Arc::new(InMemoryRosterRepo::new()),
            teachers: Arc::new(InMemoryRosterRepo::new()),
            staffs: Arc::new(InMemoryRosterRepo::new()),
            admins: Arc::new(InMemoryAdminRepo::new()),
        }
    }
}
