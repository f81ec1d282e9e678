use crate::error::RemindlyError;
use crate::shared::{
    auth::protect_admin_route,
    usecase::{execute, UseCase},
};
use actix_web::{web, HttpRequest, HttpResponse};
use remindly_api_structs::admin_add_group_member::*;
use remindly_domain::{Customer, GroupMembership, ID};
use remindly_infra::RemindlyContext;

pub async fn admin_add_group_member_controller(
    http_req: HttpRequest,
    body: web::Json<RequestBody>,
    ctx: web::Data<RemindlyContext>,
) -> Result<HttpResponse, RemindlyError> {
    protect_admin_route(&http_req, &ctx)?;

    let usecase = AdminAddGroupMemberUseCase {
        customer_id: body.customer_id,
        group_id: body.group_id,
    };

    execute(usecase, &ctx)
        .await
        .map(|res| {
            let mut response = if res.created {
                HttpResponse::Created()
            } else {
                HttpResponse::Ok()
            };
            response.json(APIResponse::new(res.created, res.membership, res.customer))
        })
        .map_err(RemindlyError::from)
}

#[derive(Debug)]
struct AdminAddGroupMemberUseCase {
    customer_id: Option<ID>,
    group_id: Option<ID>,
}

#[derive(Debug)]
struct UseCaseResponse {
    created: bool,
    membership: GroupMembership,
    customer: Customer,
}

#[derive(Debug)]
enum UseCaseError {
    MissingIds,
    CustomerNotFound(ID),
    GroupNotFound(ID),
    StorageError,
}

impl From<UseCaseError> for RemindlyError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::MissingIds => Self::BadClientData(
                "Both `customerId` and `groupId` are required.".into(),
            ),
            UseCaseError::CustomerNotFound(id) => {
                Self::NotFound(format!("The customer with id: {}, was not found.", id))
            }
            UseCaseError::GroupNotFound(id) => {
                Self::NotFound(format!("The group with id: {}, was not found.", id))
            }
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for AdminAddGroupMemberUseCase {
    type Response = UseCaseResponse;

    type Error = UseCaseError;

    const NAME: &'static str = "AdminAddGroupMember";

    async fn execute(&mut self, ctx: &RemindlyContext) -> Result<Self::Response, Self::Error> {
        let (customer_id, group_id) = match (self.customer_id, self.group_id) {
            (Some(customer_id), Some(group_id)) => (customer_id, group_id),
            _ => return Err(UseCaseError::MissingIds),
        };

        let customer = ctx
            .repos
            .customers
            .find(&customer_id)
            .await
            .ok_or(UseCaseError::CustomerNotFound(customer_id))?;
        let group = ctx
            .repos
            .groups
            .find(&group_id)
            .await
            .ok_or(UseCaseError::GroupNotFound(group_id))?;

        let membership = GroupMembership::new(customer.id, group.id, ctx.sys.now());
        let created = ctx
            .repos
            .memberships
            .insert_if_absent(&membership)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        let membership = if created {
            membership
        } else {
            ctx.repos
                .memberships
                .find_by_customer_and_group(&customer.id, &group.id)
                .await
                .ok_or(UseCaseError::StorageError)?
        };

        Ok(UseCaseResponse {
            created,
            membership,
            customer,
        })
    }
}
