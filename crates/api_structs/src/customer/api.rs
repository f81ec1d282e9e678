use crate::dtos::CustomerDTO;
use remindly_domain::{Customer, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerResponse {
    pub customer: CustomerDTO,
}

impl CustomerResponse {
    pub fn new(customer: Customer) -> Self {
        Self {
            customer: CustomerDTO::new(customer),
        }
    }
}

pub mod create_customer {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub name: String,
        pub surname: String,
        pub phone_number: String,
        #[serde(default)]
        pub email: Option<String>,
    }

    pub type APIResponse = CustomerResponse;
}

pub mod get_customer {
    use super::*;

    #[derive(Debug, Deserialize)]
    pub struct PathParams {
        pub customer_id: ID,
    }

    pub type APIResponse = CustomerResponse;
}

pub mod delete_customer {
    use super::*;

    #[derive(Debug, Deserialize)]
    pub struct PathParams {
        pub customer_id: ID,
    }

    pub type APIResponse = CustomerResponse;
}

pub mod get_customers {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub customers: Vec<CustomerDTO>,
    }

    impl APIResponse {
        pub fn new(customers: Vec<Customer>) -> Self {
            Self {
                customers: customers.into_iter().map(CustomerDTO::new).collect(),
            }
        }
    }
}
