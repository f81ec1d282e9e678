use crate::error::RemindlyError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use remindly_api_structs::get_customer::*;
use remindly_domain::{Customer, ID};
use remindly_infra::RemindlyContext;

pub async fn get_customer_controller(
    path_params: web::Path<PathParams>,
    ctx: web::Data<RemindlyContext>,
) -> Result<HttpResponse, RemindlyError> {
    let usecase = GetCustomerUseCase {
        customer_id: path_params.customer_id,
    };

    execute(usecase, &ctx)
        .await
        .map(|customer| HttpResponse::Ok().json(APIResponse::new(customer)))
        .map_err(RemindlyError::from)
}

#[derive(Debug)]
struct GetCustomerUseCase {
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
impl UseCase for GetCustomerUseCase {
    type Response = Customer;

    type Error = UseCaseError;

    const NAME: &'static str = "GetCustomer";

    async fn execute(&mut self, ctx: &RemindlyContext) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .customers
            .find(&self.customer_id)
            .await
            .ok_or(UseCaseError::NotFound(self.customer_id))
    }
}
