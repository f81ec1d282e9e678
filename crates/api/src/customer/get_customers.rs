use crate::error::RemindlyError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use remindly_api_structs::get_customers::*;
use remindly_domain::Customer;
use remindly_infra::RemindlyContext;

pub async fn get_customers_controller(
    ctx: web::Data<RemindlyContext>,
) -> Result<HttpResponse, RemindlyError> {
    execute(GetCustomersUseCase {}, &ctx)
        .await
        .map(|customers| HttpResponse::Ok().json(APIResponse::new(customers)))
        .map_err(|_| RemindlyError::InternalError)
}

#[derive(Debug)]
struct GetCustomersUseCase {}

#[derive(Debug)]
enum UseCaseError {
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetCustomersUseCase {
    type Response = Vec<Customer>;

    type Error = UseCaseError;

    const NAME: &'static str = "GetCustomers";

    async fn execute(&mut self, ctx: &RemindlyContext) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .customers
            .find_all()
            .await
            .map_err(|_| UseCaseError::StorageError)
    }
}
