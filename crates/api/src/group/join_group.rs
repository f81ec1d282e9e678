use crate::error::RemindlyError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use remindly_api_structs::join_group::*;
use remindly_domain::{Customer, GroupMembership};
use remindly_infra::RemindlyContext;

pub async fn join_group_controller(
    path_params: web::Path<PathParams>,
    body: web::Json<RequestBody>,
    ctx: web::Data<RemindlyContext>,
) -> Result<HttpResponse, RemindlyError> {
    let body = body.0;
    let usecase = JoinGroupUseCase {
        join_code: path_params.join_code.clone(),
        name: body.name,
        surname: body.surname,
        phone_number: body.phone_number,
        email: body.email,
    };

    execute(usecase, &ctx)
        .await
        .map(|(membership, customer)| {
            HttpResponse::Created().json(APIResponse::new(
                "Joined the group. The membership is pending approval.",
                membership,
                customer,
            ))
        })
        .map_err(RemindlyError::from)
}

#[derive(Debug)]
pub struct JoinGroupUseCase {
    pub join_code: String,
    pub name: String,
    pub surname: String,
    pub phone_number: String,
    pub email: Option<String>,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    MissingField(&'static str),
    InvalidJoinCode,
    AlreadyRegistered,
    StorageError,
}

impl From<UseCaseError> for RemindlyError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::MissingField(field) => {
                Self::BadClientData(format!("The field `{}` is required.", field))
            }
            UseCaseError::InvalidJoinCode => Self::NotFound("Invalid join code.".into()),
            UseCaseError::AlreadyRegistered => {
                Self::BadClientData("Already registered in this group.".into())
            }
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

impl JoinGroupUseCase {
    fn validate(&self) -> Result<(), UseCaseError> {
        for (field, value) in [
            ("name", &self.name),
            ("surname", &self.surname),
            ("phoneNumber", &self.phone_number),
        ] {
            if value.trim().is_empty() {
                return Err(UseCaseError::MissingField(field));
            }
        }
        Ok(())
    }

    async fn get_or_create_customer(&self, ctx: &RemindlyContext) -> Result<Customer, UseCaseError> {
        let phone_number = self.phone_number.trim();
        if let Some(customer) = ctx.repos.customers.find_by_phone(phone_number).await {
            return Ok(customer);
        }

        let customer = Customer::new(
            self.name.trim().to_string(),
            self.surname.trim().to_string(),
            phone_number.to_string(),
            self.email.as_ref().map(|e| e.trim().to_string()),
        );
        ctx.repos
            .customers
            .insert(&customer)
            .await
            .map(|_| customer)
            .map_err(|_| UseCaseError::StorageError)
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for JoinGroupUseCase {
    type Response = (GroupMembership, Customer);

    type Error = UseCaseError;

    const NAME: &'static str = "JoinGroup";

    async fn execute(&mut self, ctx: &RemindlyContext) -> Result<Self::Response, Self::Error> {
        self.validate()?;

        let group = ctx
            .repos
            .groups
            .find_by_join_code(self.join_code.trim())
            .await
            .ok_or(UseCaseError::InvalidJoinCode)?;

        let customer = self.get_or_create_customer(ctx).await?;

        let membership = GroupMembership::new(customer.id, group.id, ctx.sys.now());
        let inserted = ctx
            .repos
            .memberships
            .insert_if_absent(&membership)
            .await
            .map_err(|_| UseCaseError::StorageError)?;
        if !inserted {
            return Err(UseCaseError::AlreadyRegistered);
        }

        Ok((membership, customer))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use remindly_domain::{MembershipRole, MembershipStatus, ReminderGroup};

    fn join(join_code: &str, phone: &str) -> JoinGroupUseCase {
        JoinGroupUseCase {
            join_code: join_code.into(),
            name: "Ada".into(),
            surname: "Lovelace".into(),
            phone_number: phone.into(),
            email: Some("ada@x.com".into()),
        }
    }

    async fn setup() -> (RemindlyContext, ReminderGroup) {
        let ctx = RemindlyContext::create_inmemory();
        let group = ReminderGroup::new("Team".into(), "".into(), Utc::now());
        ctx.repos.groups.insert(&group).await.unwrap();
        (ctx, group)
    }

    #[actix_web::main]
    #[test]
    async fn joins_as_pending_member() {
        let (ctx, group) = setup().await;

        let (membership, customer) = execute(join(&group.join_code, "5551234567"), &ctx)
            .await
            .unwrap();
        assert_eq!(membership.group_id, group.id);
        assert_eq!(membership.customer_id, customer.id);
        assert_eq!(membership.role, MembershipRole::Member);
        assert_eq!(membership.status, MembershipStatus::Pending);
        assert!(membership.is_active);
        assert_eq!(ctx.repos.customers.find(&customer.id).await, Some(customer));
    }

    #[actix_web::main]
    #[test]
    async fn second_join_with_same_phone_is_rejected() {
        let (ctx, group) = setup().await;

        let (_, customer) = execute(join(&group.join_code, "5551234567"), &ctx)
            .await
            .unwrap();
        let res = execute(join(&group.join_code, "5551234567"), &ctx).await;
        assert_eq!(res.unwrap_err(), UseCaseError::AlreadyRegistered);

        assert_eq!(ctx.repos.memberships.count_by_group(&group.id).await.unwrap(), 1);
        assert_eq!(ctx.repos.customers.find_all().await.unwrap(), vec![customer]);
    }

    #[actix_web::main]
    #[test]
    async fn existing_customer_is_reused_across_groups() {
        let (ctx, group) = setup().await;
        let other = ReminderGroup::new("Other".into(), "".into(), Utc::now());
        ctx.repos.groups.insert(&other).await.unwrap();

        let (_, first) = execute(join(&group.join_code, "5551234567"), &ctx)
            .await
            .unwrap();
        let (_, second) = execute(join(&other.join_code, "5551234567"), &ctx)
            .await
            .unwrap();
        assert_eq!(first.id, second.id);
    }

    #[actix_web::main]
    #[test]
    async fn unknown_join_code_and_missing_fields() {
        let (ctx, _) = setup().await;

        let res = execute(join("nope1234", "5551234567"), &ctx).await;
        assert_eq!(res.unwrap_err(), UseCaseError::InvalidJoinCode);

        let res = execute(join("nope1234", " "), &ctx).await;
        assert_eq!(res.unwrap_err(), UseCaseError::MissingField("phoneNumber"));
    }
}
