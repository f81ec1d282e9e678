use crate::{APIResponse, BaseClient, ID};
use remindly_api_structs::*;
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct CustomerClient {
    base: Arc<BaseClient>,
}

pub struct CreateCustomerInput {
    pub name: String,
    pub surname: String,
    pub phone_number: String,
    pub email: Option<String>,
}

impl CustomerClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn create(
        &self,
        input: CreateCustomerInput,
    ) -> APIResponse<create_customer::APIResponse> {
        let body = create_customer::RequestBody {
            name: input.name,
            surname: input.surname,
            phone_number: input.phone_number,
            email: input.email,
        };
        self.base
            .post(body, "customers".into(), StatusCode::CREATED)
            .await
    }

    pub async fn get(&self, customer_id: ID) -> APIResponse<get_customer::APIResponse> {
        self.base
            .get(format!("customers/{}", customer_id), StatusCode::OK)
            .await
    }

    pub async fn list(&self) -> APIResponse<get_customers::APIResponse> {
        self.base.get("customers".into(), StatusCode::OK).await
    }

    pub async fn delete(&self, customer_id: ID) -> APIResponse<delete_customer::APIResponse> {
        self.base
            .delete(format!("customers/{}", customer_id), StatusCode::OK)
            .await
    }
}
