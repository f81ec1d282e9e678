use crate::error::RemindlyError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use remindly_api_structs::get_groups::*;
use remindly_domain::ReminderGroup;
use remindly_infra::RemindlyContext;

pub async fn get_groups_controller(
    ctx: web::Data<RemindlyContext>,
) -> Result<HttpResponse, RemindlyError> {
    execute(GetGroupsUseCase {}, &ctx)
        .await
        .map(|groups| HttpResponse::Ok().json(APIResponse::new(groups)))
        .map_err(|_| RemindlyError::InternalError)
}

#[derive(Debug)]
struct GetGroupsUseCase {}

#[derive(Debug)]
enum UseCaseError {
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetGroupsUseCase {
    /// Groups, newest first, with their member counts
    type Response = Vec<(ReminderGroup, i64)>;

    type Error = UseCaseError;

    const NAME: &'static str = "GetGroups";

    async fn execute(&mut self, ctx: &RemindlyContext) -> Result<Self::Response, Self::Error> {
        let groups = ctx
            .repos
            .groups
            .find_all()
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        let mut res = Vec::with_capacity(groups.len());
        for group in groups {
            let members = ctx
                .repos
                .memberships
                .count_by_group(&group.id)
                .await
                .map_err(|_| UseCaseError::StorageError)?;
            res.push((group, members));
        }
        Ok(res)
    }
}
