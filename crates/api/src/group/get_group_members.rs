use crate::error::RemindlyError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use remindly_api_structs::get_group_members::*;
use remindly_domain::{Customer, GroupMembership};
use remindly_infra::RemindlyContext;

pub async fn get_group_members_controller(
    path_params: web::Path<PathParams>,
    ctx: web::Data<RemindlyContext>,
) -> Result<HttpResponse, RemindlyError> {
    let usecase = GetGroupMembersUseCase {
        join_code: path_params.join_code.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|members| HttpResponse::Ok().json(APIResponse::new(members)))
        .map_err(RemindlyError::from)
}

#[derive(Debug)]
struct GetGroupMembersUseCase {
    join_code: String,
}

#[derive(Debug)]
enum UseCaseError {
    InvalidJoinCode,
    StorageError,
}

impl From<UseCaseError> for RemindlyError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::InvalidJoinCode => Self::NotFound("Invalid join code.".into()),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetGroupMembersUseCase {
    type Response = Vec<(GroupMembership, Customer)>;

    type Error = UseCaseError;

    const NAME: &'static str = "GetGroupMembers";

    async fn execute(&mut self, ctx: &RemindlyContext) -> Result<Self::Response, Self::Error> {
        let group = ctx
            .repos
            .groups
            .find_by_join_code(&self.join_code)
            .await
            .ok_or(UseCaseError::InvalidJoinCode)?;

        let memberships: Vec<_> = ctx
            .repos
            .memberships
            .find_by_group(&group.id)
            .await
            .map_err(|_| UseCaseError::StorageError)?
            .into_iter()
            .filter(|m| m.is_active)
            .collect();

        let customer_ids = memberships.iter().map(|m| m.customer_id).collect::<Vec<_>>();
        let customers = ctx
            .repos
            .customers
            .find_many(&customer_ids)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(memberships
            .into_iter()
            .filter_map(|membership| {
                customers
                    .iter()
                    .find(|c| c.id == membership.customer_id)
                    .cloned()
                    .map(|customer| (membership, customer))
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use remindly_domain::ReminderGroup;

    #[actix_web::main]
    #[test]
    async fn lists_only_active_memberships_in_join_order() {
        let ctx = RemindlyContext::create_inmemory();
        let group = ReminderGroup::new("Team".into(), "".into(), Utc::now());
        ctx.repos.groups.insert(&group).await.unwrap();

        let now = Utc::now();
        for (i, name) in ["Ada", "Grace", "Linus"].iter().enumerate() {
            let customer = Customer::new(name.to_string(), "X".into(), format!("555000000{}", i), None);
            ctx.repos.customers.insert(&customer).await.unwrap();
            let mut membership =
                GroupMembership::new(customer.id, group.id, now + Duration::seconds(i as i64));
            membership.is_active = *name != "Grace";
            ctx.repos
                .memberships
                .insert_if_absent(&membership)
                .await
                .unwrap();
        }

        let usecase = GetGroupMembersUseCase {
            join_code: group.join_code.clone(),
        };
        let members = execute(usecase, &ctx).await.unwrap();
        let listed = members
            .iter()
            .map(|(_, c)| c.name.as_str())
            .collect::<Vec<_>>();
        assert_eq!(listed, vec!["Ada", "Linus"]);
    }

    #[actix_web::main]
    #[test]
    async fn unknown_join_code() {
        let ctx = RemindlyContext::create_inmemory();
        let usecase = GetGroupMembersUseCase {
            join_code: "missing1".into(),
        };
        assert!(matches!(
            execute(usecase, &ctx).await,
            Err(UseCaseError::InvalidJoinCode)
        ));
    }
}
