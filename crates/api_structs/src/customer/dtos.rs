use remindly_domain::{Customer, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDTO {
    pub id: ID,
    pub name: String,
    pub surname: String,
    pub phone_number: String,
    pub email: Option<String>,
}

impl CustomerDTO {
    pub fn new(customer: Customer) -> Self {
        Self {
            id: customer.id,
            name: customer.name,
            surname: customer.surname,
            phone_number: customer.phone_number,
            email: customer.email,
        }
    }
}
