mod helpers;

use helpers::setup::spawn_app;
use remindly_sdk::{APIError, CreateCustomerInput, ID};

#[actix_web::main]
#[test]
async fn test_status_ok() {
    let (_, sdk) = spawn_app().await;
    let res = sdk.status.check_health().await.expect("Expected status");
    assert!(!res.version.is_empty());
}

#[actix_web::main]
#[test]
async fn test_customer_lifecycle() {
    let (_, sdk) = spawn_app().await;

    let customer = sdk
        .customer
        .create(CreateCustomerInput {
            name: "Ada".into(),
            surname: "Lovelace".into(),
            phone_number: "5551234567".into(),
            email: Some("ada@x.com".into()),
        })
        .await
        .expect("Expected to create customer")
        .customer;
    assert_eq!(customer.email.as_deref(), Some("ada@x.com"));

    let fetched = sdk.customer.get(customer.id).await.unwrap().customer;
    assert_eq!(fetched, customer);
    assert_eq!(sdk.customer.list().await.unwrap().customers, vec![customer.clone()]);

    assert!(sdk.customer.delete(customer.id).await.is_ok());
    assert!(matches!(
        sdk.customer.get(customer.id).await,
        Err(APIError::NotFound(_))
    ));
}

#[actix_web::main]
#[test]
async fn test_create_customer_requires_fields() {
    let (_, sdk) = spawn_app().await;

    let res = sdk
        .customer
        .create(CreateCustomerInput {
            name: "Ada".into(),
            surname: "".into(),
            phone_number: "5551234567".into(),
            email: None,
        })
        .await;
    assert!(matches!(res, Err(APIError::BadClientData(_))));
}

#[actix_web::main]
#[test]
async fn test_unknown_customer_is_not_found() {
    let (_, sdk) = spawn_app().await;
    assert!(matches!(
        sdk.customer.delete(ID::new()).await,
        Err(APIError::NotFound(_))
    ));
}
