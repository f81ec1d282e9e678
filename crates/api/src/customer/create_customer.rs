use crate::error::RemindlyError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use remindly_api_structs::create_customer::*;
use remindly_domain::Customer;
use remindly_infra::RemindlyContext;

pub async fn create_customer_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<RemindlyContext>,
) -> Result<HttpResponse, RemindlyError> {
    let body = body.0;
    let usecase = CreateCustomerUseCase {
        name: body.name,
        surname: body.surname,
        phone_number: body.phone_number,
        email: body.email,
    };

    execute(usecase, &ctx)
        .await
        .map(|customer| HttpResponse::Created().json(APIResponse::new(customer)))
        .map_err(RemindlyError::from)
}

#[derive(Debug)]
pub struct CreateCustomerUseCase {
    pub name: String,
    pub surname: String,
    pub phone_number: String,
    pub email: Option<String>,
}

#[derive(Debug)]
pub enum UseCaseError {
    MissingField(&'static str),
    StorageError,
}

impl From<UseCaseError> for RemindlyError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::MissingField(field) => {
                Self::BadClientData(format!("The field `{}` is required.", field))
            }
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

impl CreateCustomerUseCase {
    pub fn validate(&self) -> Result<(), UseCaseError> {
        if self.name.trim().is_empty() {
            return Err(UseCaseError::MissingField("name"));
        }
        if self.surname.trim().is_empty() {
            return Err(UseCaseError::MissingField("surname"));
        }
        if self.phone_number.trim().is_empty() {
            return Err(UseCaseError::MissingField("phoneNumber"));
        }
        Ok(())
    }

    pub fn to_customer(&self) -> Customer {
        Customer::new(
            self.name.trim().to_string(),
            self.surname.trim().to_string(),
            self.phone_number.trim().to_string(),
            self.email.as_ref().map(|e| e.trim().to_string()),
        )
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateCustomerUseCase {
    type Response = Customer;

    type Error = UseCaseError;

    const NAME: &'static str = "CreateCustomer";

    async fn execute(&mut self, ctx: &RemindlyContext) -> Result<Self::Response, Self::Error> {
        self.validate()?;

        let customer = self.to_customer();
        ctx.repos
            .customers
            .insert(&customer)
            .await
            .map(|_| customer)
            .map_err(|_| UseCaseError::StorageError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn usecase(name: &str, surname: &str, phone: &str) -> CreateCustomerUseCase {
        CreateCustomerUseCase {
            name: name.into(),
            surname: surname.into(),
            phone_number: phone.into(),
            email: Some(" ada@x.com ".into()),
        }
    }

    #[actix_web::main]
    #[test]
    async fn creates_customer() {
        let ctx = RemindlyContext::create_inmemory();
        let customer = execute(usecase("Ada", "Lovelace", "5551112233"), &ctx)
            .await
            .unwrap();
        assert_eq!(customer.email.as_deref(), Some("ada@x.com"));
        assert_eq!(ctx.repos.customers.find(&customer.id).await, Some(customer));
    }

    #[actix_web::main]
    #[test]
    async fn rejects_missing_fields() {
        let ctx = RemindlyContext::create_inmemory();
        for (name, surname, phone) in [("", "L", "1"), ("A", " ", "1"), ("A", "L", "")] {
            let res = execute(usecase(name, surname, phone), &ctx).await;
            assert!(matches!(res, Err(UseCaseError::MissingField(_))));
        }
        assert!(ctx.repos.customers.find_all().await.unwrap().is_empty());
    }
}
