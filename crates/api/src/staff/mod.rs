use crate::shared::{
    roster::{configure_roster_routes, RosterMember},
    route_group::RouteGroup,
};
use actix_web::web;
use campus_api_structs::{dtos::StaffDTO, StaffInput};
use campus_domain::{Profile, Staff};
use campus_infra::{IRosterRepo, Repos};
use std::sync::Arc;

impl RosterMember for Staff {
    const KIND: &'static str = "staff member";
    type Input = StaffInput;
    type DTO = StaffDTO;

    fn repo(repos: &Repos) -> &Arc<dyn IRosterRepo<Self>> {
        &repos.staffs
    }

    fn create(input: StaffInput, now: i64) -> Self {
        let mut staff = Staff::new(Profile::default(), now);
        staff.apply(input);
        staff
    }

    fn apply(&mut self, input: StaffInput) {
        input.profile.apply(&mut self.profile);
        if input.position.is_some() {
            self.position = input.position;
        }
    }
}

pub struct StaffRoutes;

impl RouteGroup for StaffRoutes {
    fn prefix(&self) -> &'static str {
        "/api/staffs"
    }

    fn configure(&self, cfg: &mut web::ServiceConfig) {
        configure_roster_routes::<Staff>(cfg);
    }
}
