use crate::shared::{
    roster::{configure_roster_routes, RosterMember},
    route_group::RouteGroup,
};
use actix_web::web;
use campus_api_structs::{dtos::TeacherDTO, TeacherInput};
use campus_domain::{Profile, Teacher};
use campus_infra::{IRosterRepo, Repos};
use std::sync::Arc;

impl RosterMember for Teacher {
    const KIND: &'static str = "teacher";
    type Input = TeacherInput;
    type DTO = TeacherDTO;

    fn repo(repos: &Repos) -> &Arc<dyn IRosterRepo<Self>> {
        &repos.teachers
    }

    fn create(input: TeacherInput, now: i64) -> Self {
        let mut teacher = Teacher::new(Profile::default(), now);
        teacher.apply(input);
        teacher
    }

    fn apply(&mut self, input: TeacherInput) {
        input.profile.apply(&mut self.profile);
        if input.subject.is_some() {
            self.subject = input.subject;
        }
    }
}

pub struct TeacherRoutes;

impl RouteGroup for TeacherRoutes {
    fn prefix(&self) -> &'static str {
        "/api/teachers"
    }

    fn configure(&self, cfg: &mut web::ServiceConfig) {
        configure_roster_routes::<Teacher>(cfg);
    }
}
