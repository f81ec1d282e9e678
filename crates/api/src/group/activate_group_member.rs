use super::{find_group_member, MemberLookupError};
use crate::error::RemindlyError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use remindly_api_structs::activate_group_member::*;
use remindly_domain::{Customer, GroupMembership, ID};
use remindly_infra::RemindlyContext;

pub async fn activate_group_member_controller(
    path_params: web::Path<PathParams>,
    ctx: web::Data<RemindlyContext>,
) -> Result<HttpResponse, RemindlyError> {
    let path_params = path_params.into_inner();
    let usecase = ActivateGroupMemberUseCase {
        join_code: path_params.join_code,
        membership_id: path_params.membership_id,
    };

    execute(usecase, &ctx)
        .await
        .map(|(membership, customer)| {
            HttpResponse::Ok().json(APIResponse::new(
                "The membership was activated.",
                membership,
                customer,
            ))
        })
        .map_err(RemindlyError::from)
}

#[derive(Debug)]
struct ActivateGroupMemberUseCase {
    join_code: String,
    membership_id: ID,
}

#[derive(Debug)]
enum UseCaseError {
    Lookup(MemberLookupError),
    AlreadyActive,
    StorageError,
}

impl From<UseCaseError> for RemindlyError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::Lookup(MemberLookupError::GroupNotFound) => {
                Self::NotFound("Invalid join code.".into())
            }
            UseCaseError::Lookup(MemberLookupError::MembershipNotFound) => {
                Self::NotFound("The membership was not found in this group.".into())
            }
            UseCaseError::AlreadyActive => {
                Self::BadClientData("The membership is already active.".into())
            }
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for ActivateGroupMemberUseCase {
    type Response = (GroupMembership, Customer);

    type Error = UseCaseError;

    const NAME: &'static str = "ActivateGroupMember";

    async fn execute(&mut self, ctx: &RemindlyContext) -> Result<Self::Response, Self::Error> {
        let mut membership = find_group_member(ctx, &self.join_code, &self.membership_id)
            .await
            .map_err(UseCaseError::Lookup)?;
        let customer = ctx
            .repos
            .customers
            .find(&membership.customer_id)
            .await
            .ok_or(UseCaseError::Lookup(MemberLookupError::MembershipNotFound))?;

        if !membership.activate() {
            return Err(UseCaseError::AlreadyActive);
        }
        ctx.repos
            .memberships
            .save(&membership)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok((membership, customer))
    }
}
