use crate::error::RemindlyError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use remindly_api_structs::delete_customer::*;
use remindly_domain::{Customer, ID};
use remindly_infra::RemindlyContext;
use tracing::warn;

pub async fn delete_customer_controller(
    path_params: web::Path<PathParams>,
    ctx: web::Data<RemindlyContext>,
) -> Result<HttpResponse, RemindlyError> {
    let usecase = DeleteCustomerUseCase {
        customer_id: path_params.customer_id,
    };

    execute(usecase, &ctx)
        .await
        .map(|customer| HttpResponse::Ok().json(APIResponse::new(customer)))
        .map_err(RemindlyError::from)
}

#[derive(Debug)]
struct DeleteCustomerUseCase {
    customer_id: ID,
}

#[derive(Debug)]
enum UseCaseError {
    NotFound(ID),
}

impl From<UseCaseError> for RemindlyError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(customer_id) => Self::NotFound(format!(
                "The customer with id: {}, was not found.",
                customer_id
            )),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for DeleteCustomerUseCase {
    type Response = Customer;

    type Error = UseCaseError;

    const NAME: &'static str = "DeleteCustomer";

    async fn execute(&mut self, ctx: &RemindlyContext) -> Result<Self::Response, Self::Error> {
        let customer = ctx
            .repos
            .customers
            .delete(&self.customer_id)
            .await
            .ok_or(UseCaseError::NotFound(self.customer_id))?;

        // Memberships go with the customer, reminders stay but lose the link
        if let Err(e) = ctx.repos.memberships.delete_by_customer(&customer.id).await {
            warn!("Unable to remove memberships of deleted customer: {:?}", e);
        }
        if let Err(e) = ctx.repos.reminders.detach_customer(&customer.id).await {
            warn!("Unable to detach reminders of deleted customer: {:?}", e);
        }

        Ok(customer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use remindly_domain::{GroupMembership, Reminder, ReminderType};

    #[actix_web::main]
    #[test]
    async fn deletes_customer_with_memberships_and_detaches_reminders() {
        let ctx = RemindlyContext::create_inmemory();
        let customer = Customer::new("Ada".into(), "L".into(), "5550000000".into(), None);
        ctx.repos.customers.insert(&customer).await.unwrap();
        let membership = GroupMembership::new(customer.id, ID::new(), Utc::now());
        ctx.repos
            .memberships
            .insert_if_absent(&membership)
            .await
            .unwrap();
        let mut reminder = Reminder::new("Call".into(), ReminderType::Personal, Utc::now(), Utc::now());
        reminder.customer_id = Some(customer.id);
        ctx.repos.reminders.insert(&reminder).await.unwrap();

        let usecase = DeleteCustomerUseCase {
            customer_id: customer.id,
        };
        assert_eq!(execute(usecase, &ctx).await.unwrap(), customer);

        assert!(ctx.repos.customers.find(&customer.id).await.is_none());
        assert!(ctx.repos.memberships.find(&membership.id).await.is_none());
        let reminder = ctx.repos.reminders.find(&reminder.id).await.unwrap();
        assert_eq!(reminder.customer_id, None);
    }

    #[actix_web::main]
    #[test]
    async fn missing_customer_is_not_found() {
        let ctx = RemindlyContext::create_inmemory();
        let usecase = DeleteCustomerUseCase {
            customer_id: ID::new(),
        };
        assert!(matches!(
            execute(usecase, &ctx).await,
            Err(UseCaseError::NotFound(_))
        ));
    }
}
