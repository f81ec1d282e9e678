use super::{find_group_member, MemberLookupError};
use crate::error::RemindlyError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use remindly_api_structs::remove_group_member::*;
use remindly_domain::{Customer, GroupMembership, ID};
use remindly_infra::RemindlyContext;

pub async fn remove_group_member_controller(
    path_params: web::Path<PathParams>,
    ctx: web::Data<RemindlyContext>,
) -> Result<HttpResponse, RemindlyError> {
    let path_params = path_params.into_inner();
    let usecase = RemoveGroupMemberUseCase {
        join_code: path_params.join_code,
        membership_id: path_params.membership_id,
    };

    execute(usecase, &ctx)
        .await
        .map(|(membership, customer)| {
            HttpResponse::Ok().json(APIResponse::new(
                "The member was removed from the group.",
                membership,
                customer,
            ))
        })
        .map_err(RemindlyError::from)
}

#[derive(Debug)]
struct RemoveGroupMemberUseCase {
    join_code: String,
    membership_id: ID,
}

#[derive(Debug)]
enum UseCaseError {
    Lookup(MemberLookupError),
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
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for RemoveGroupMemberUseCase {
    type Response = (GroupMembership, Customer);

    type Error = UseCaseError;

    const NAME: &'static str = "RemoveGroupMember";

    async fn execute(&mut self, ctx: &RemindlyContext) -> Result<Self::Response, Self::Error> {
        let membership = find_group_member(ctx, &self.join_code, &self.membership_id)
            .await
            .map_err(UseCaseError::Lookup)?;
        let customer = ctx
            .repos
            .customers
            .find(&membership.customer_id)
            .await
            .ok_or(UseCaseError::Lookup(MemberLookupError::MembershipNotFound))?;

        ctx.repos
            .memberships
            .delete(&membership.id)
            .await
            .map(|membership| (membership, customer))
            .ok_or(UseCaseError::Lookup(MemberLookupError::MembershipNotFound))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use remindly_domain::ReminderGroup;

    #[actix_web::main]
    #[test]
    async fn removes_member() {
        let ctx = RemindlyContext::create_inmemory();
        let group = ReminderGroup::new("Team".into(), "".into(), Utc::now());
        ctx.repos.groups.insert(&group).await.unwrap();
        let customer = Customer::new("Ada".into(), "L".into(), "5550000000".into(), None);
        ctx.repos.customers.insert(&customer).await.unwrap();
        let membership = GroupMembership::new(customer.id, group.id, Utc::now());
        ctx.repos
            .memberships
            .insert_if_absent(&membership)
            .await
            .unwrap();

        let usecase = RemoveGroupMemberUseCase {
            join_code: group.join_code.clone(),
            membership_id: membership.id,
        };
        let (removed, _) = execute(usecase, &ctx).await.unwrap();
        assert_eq!(removed, membership);
        assert!(ctx.repos.memberships.find(&membership.id).await.is_none());

        let usecase = RemoveGroupMemberUseCase {
            join_code: group.join_code.clone(),
            membership_id: membership.id,
        };
        assert!(matches!(
            execute(usecase, &ctx).await,
            Err(UseCaseError::Lookup(MemberLookupError::MembershipNotFound))
        ));
    }
}
