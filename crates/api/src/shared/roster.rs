//! Create, read, update and delete of roster members, written once and
//! mounted by the student, teacher and staff route groups.

use crate::{
    error::CampusError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use campus_api_structs::MemberPathParams;
use campus_domain::{Member, ID};
use campus_infra::{CampusContext, IRosterRepo, Repos};
use serde::{de::DeserializeOwned, Serialize};
use std::{fmt::Debug, marker::PhantomData, sync::Arc};

/// A kind of roster member served by the generic controllers below
pub trait RosterMember: Member + Clone + Debug + Send + Sync + 'static {
    /// Lowercase name used in error messages, e.g. "student"
    const KIND: &'static str;
    /// Body of both create and update requests
    type Input: DeserializeOwned + Clone + Debug + 'static;
    type DTO: Serialize + From<Self>;

    fn repo(repos: &Repos) -> &Arc<dyn IRosterRepo<Self>>;
    fn create(input: Self::Input, now: i64) -> Self;
    /// Overwrites the fields present in `input`
    fn apply(&mut self, input: Self::Input);
}

pub fn configure_roster_routes<M: RosterMember>(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::get().to(get_members_controller::<M>));
    cfg.route("", web::post().to(create_member_controller::<M>));
    cfg.route("/{id}", web::get().to(get_member_controller::<M>));
    cfg.route("/{id}", web::put().to(update_member_controller::<M>));
    cfg.route("/{id}", web::delete().to(delete_member_controller::<M>));
}

async fn get_members_controller<M: RosterMember>(
    ctx: web::Data<CampusContext>,
) -> Result<HttpResponse, CampusError> {
    let usecase = GetMembersUseCase::<M> {
        _member: PhantomData,
    };
    execute(usecase, &ctx)
        .await
        .map(|members| {
            let members = members.into_iter().map(M::DTO::from).collect::<Vec<_>>();
            HttpResponse::Ok().json(members)
        })
        .map_err(CampusError::from)
}

async fn get_member_controller<M: RosterMember>(
    path_params: web::Path<MemberPathParams>,
    ctx: web::Data<CampusContext>,
) -> Result<HttpResponse, CampusError> {
    let usecase = GetMemberUseCase::<M> {
        id: path_params.into_inner().id,
        _member: PhantomData,
    };
    execute(usecase, &ctx)
        .await
        .map(|member| HttpResponse::Ok().json(M::DTO::from(member)))
        .map_err(CampusError::from)
}

async fn create_member_controller<M: RosterMember>(
    body: web::Json<M::Input>,
    ctx: web::Data<CampusContext>,
) -> Result<HttpResponse, CampusError> {
    let usecase = CreateMemberUseCase::<M> {
        input: body.into_inner(),
    };
    execute(usecase, &ctx)
        .await
        .map(|member| HttpResponse::Created().json(M::DTO::from(member)))
        .map_err(CampusError::from)
}

async fn update_member_controller<M: RosterMember>(
    path_params: web::Path<MemberPathParams>,
    body: web::Json<M::Input>,
    ctx: web::Data<CampusContext>,
) -> Result<HttpResponse, CampusError> {
    let usecase = UpdateMemberUseCase::<M> {
        id: path_params.into_inner().id,
        input: body.into_inner(),
    };
    execute(usecase, &ctx)
        .await
        .map(|member| HttpResponse::Ok().json(M::DTO::from(member)))
        .map_err(CampusError::from)
}

async fn delete_member_controller<M: RosterMember>(
    path_params: web::Path<MemberPathParams>,
    ctx: web::Data<CampusContext>,
) -> Result<HttpResponse, CampusError> {
    let usecase = DeleteMemberUseCase::<M> {
        id: path_params.into_inner().id,
        _member: PhantomData,
    };
    execute(usecase, &ctx)
        .await
        .map(|member| HttpResponse::Ok().json(M::DTO::from(member)))
        .map_err(CampusError::from)
}

#[derive(Debug)]
pub enum RosterError {
    StorageError(anyhow::Error),
    NotFound { kind: &'static str, id: ID },
    MissingName,
}

impl From<RosterError> for CampusError {
    fn from(e: RosterError) -> Self {
        match e {
            RosterError::StorageError(_) => Self::InternalError,
            RosterError::NotFound { kind, id } => Self::RecordNotFound { kind, id },
            RosterError::MissingName => Self::BadClientData("A name must be provided".into()),
        }
    }
}

fn not_found<M: RosterMember>(id: &ID) -> RosterError {
    RosterError::NotFound {
        kind: M::KIND,
        id: id.clone(),
    }
}

#[derive(Debug)]
struct GetMembersUseCase<M> {
    _member: PhantomData<M>,
}

#[async_trait::async_trait(?Send)]
impl<M: RosterMember> UseCase for GetMembersUseCase<M> {
    type Response = Vec<M>;

    type Error = RosterError;

    const NAME: &'static str = "GetMembers";

    async fn execute(&mut self, ctx: &CampusContext) -> Result<Self::Response, Self::Error> {
        M::repo(&ctx.repos)
            .find_all()
            .await
            .map_err(RosterError::StorageError)
    }
}

#[derive(Debug)]
struct GetMemberUseCase<M> {
    id: ID,
    _member: PhantomData<M>,
}

#[async_trait::async_trait(?Send)]
impl<M: RosterMember> UseCase for GetMemberUseCase<M> {
    type Response = M;

    type Error = RosterError;

    const NAME: &'static str = "GetMember";

    async fn execute(&mut self, ctx: &CampusContext) -> Result<Self::Response, Self::Error> {
        match M::repo(&ctx.repos).find(&self.id).await {
            Ok(Some(member)) => Ok(member),
            Ok(None) => Err(not_found::<M>(&self.id)),
            Err(e) => Err(RosterError::StorageError(e)),
        }
    }
}

#[derive(Debug)]
struct CreateMemberUseCase<M: RosterMember> {
    input: M::Input,
}

#[async_trait::async_trait(?Send)]
impl<M: RosterMember> UseCase for CreateMemberUseCase<M> {
    type Response = M;

    type Error = RosterError;

    const NAME: &'static str = "CreateMember";

    async fn execute(&mut self, ctx: &CampusContext) -> Result<Self::Response, Self::Error> {
        let member = M::create(self.input.clone(), ctx.sys.get_timestamp_millis());
        if !member.profile().has_name() {
            return Err(RosterError::MissingName);
        }

        M::repo(&ctx.repos)
            .insert(&member)
            .await
            .map(|_| member)
            .map_err(RosterError::StorageError)
    }
}

#[derive(Debug)]
struct UpdateMemberUseCase<M: RosterMember> {
    id: ID,
    input: M::Input,
}

#[async_trait::async_trait(?Send)]
impl<M: RosterMember> UseCase for UpdateMemberUseCase<M> {
    type Response = M;

    type Error = RosterError;

    const NAME: &'static str = "UpdateMember";

    async fn execute(&mut self, ctx: &CampusContext) -> Result<Self::Response, Self::Error> {
        let repo = M::repo(&ctx.repos);
        let mut member = match repo.find(&self.id).await {
            Ok(Some(member)) => member,
            Ok(None) => return Err(not_found::<M>(&self.id)),
            Err(e) => return Err(RosterError::StorageError(e)),
        };

        member.apply(self.input.clone());
        if !member.profile().has_name() {
            return Err(RosterError::MissingName);
        }
        member.touch(ctx.sys.get_timestamp_millis());

        match repo.save(&member).await {
            Ok(true) => Ok(member),
            // Deleted since it was read
            Ok(false) => Err(not_found::<M>(&self.id)),
            Err(e) => Err(RosterError::StorageError(e)),
        }
    }
}

#[derive(Debug)]
struct DeleteMemberUseCase<M> {
    id: ID,
    _member: PhantomData<M>,
}

#[async_trait::async_trait(?Send)]
impl<M: RosterMember> UseCase for DeleteMemberUseCase<M> {
    type Response = M;

    type Error = RosterError;

    const NAME: &'static str = "DeleteMember";

    async fn execute(&mut self, ctx: &CampusContext) -> Result<Self::Response, Self::Error> {
        match M::repo(&ctx.repos).delete(&self.id).await {
            Ok(Some(member)) => Ok(member),
            Ok(None) => Err(not_found::<M>(&self.id)),
            Err(e) => Err(RosterError::StorageError(e)),
        }
    }
}
