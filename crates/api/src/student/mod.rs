use crate::shared::{
    roster::{configure_roster_routes, RosterMember},
    route_group::RouteGroup,
};
use actix_web::web;
use campus_api_structs::{dtos::StudentDTO, StudentInput};
use campus_domain::{Profile, Student};
use campus_infra::{IRosterRepo, Repos};
use std::sync::Arc;

impl RosterMember for Student {
    const KIND: &'static str = "student";
    type Input = StudentInput;
    type DTO = StudentDTO;

    fn repo(repos: &Repos) -> &Arc<dyn IRosterRepo<Self>> {
        &repos.students
    }

    fn create(input: StudentInput, now: i64) -> Self {
        let mut student = Student::new(Profile::default(), now);
        student.apply(input);
        student
    }

    fn apply(&mut self, input: StudentInput) {
        input.profile.apply(&mut self.profile);
        if input.date_of_birth.is_some() {
            self.date_of_birth = input.date_of_birth;
        }
        if input.class_name.is_some() {
            self.class_name = input.class_name;
        }
    }
}

pub struct StudentRoutes;

impl RouteGroup for StudentRoutes {
    fn prefix(&self) -> &'static str {
        "/api/students"
    }

    fn configure(&self, cfg: &mut web::ServiceConfig) {
        configure_roster_routes::<Student>(cfg);
    }
}
