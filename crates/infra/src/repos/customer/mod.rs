mod inmemory;
mod postgres;

pub use inmemory::InMemoryCustomerRepo;
pub use postgres::PostgresCustomerRepo;
use remindly_domain::{Customer, ID};

#[async_trait::async_trait]
pub trait ICustomerRepo: Send + Sync {
    async fn insert(&self, customer: &Customer) -> anyhow::Result<()>;
    async fn find(&self, customer_id: &ID) -> Option<Customer>;
    async fn find_many(&self, customer_ids: &[ID]) -> anyhow::Result<Vec<Customer>>;
    async fn find_all(&self) -> anyhow::Result<Vec<Customer>>;
    /// First customer registered with the given phone number
    async fn find_by_phone(&self, phone_number: &str) -> Option<Customer>;
    /// First customer registered with the given email
    async fn find_by_email(&self, email: &str) -> Option<Customer>;
    async fn delete(&self, customer_id: &ID) -> Option<Customer>;
}

#[cfg(test)]
mod tests {
    use crate::RemindlyContext;
    use remindly_domain::{Customer, ID};

    fn customer(phone: &str, email: Option<&str>) -> Customer {
        Customer::new(
            "Ada".into(),
            "Lovelace".into(),
            phone.into(),
            email.map(|e| e.to_string()),
        )
    }

    #[tokio::test]
    async fn create_find_and_delete() {
        let ctx = RemindlyContext::create_inmemory();
        let c = customer("5550000001", Some("ada@x.com"));

        assert!(ctx.repos.customers.insert(&c).await.is_ok());

        assert_eq!(ctx.repos.customers.find(&c.id).await, Some(c.clone()));
        assert_eq!(
            ctx.repos.customers.find_by_phone("5550000001").await,
            Some(c.clone())
        );
        assert_eq!(
            ctx.repos.customers.find_by_email("ada@x.com").await,
            Some(c.clone())
        );
        assert!(ctx.repos.customers.find_by_phone("5550000002").await.is_none());
        assert_eq!(
            ctx.repos.customers.find_many(&[c.id, ID::new()]).await.unwrap(),
            vec![c.clone()]
        );

        assert_eq!(ctx.repos.customers.delete(&c.id).await, Some(c.clone()));
        assert!(ctx.repos.customers.find(&c.id).await.is_none());
        assert!(ctx.repos.customers.delete(&c.id).await.is_none());
    }

    #[tokio::test]
    async fn phone_numbers_are_not_unique() {
        let ctx = RemindlyContext::create_inmemory();
        let first = customer("5550000001", None);
        let second = customer("5550000001", None);
        ctx.repos.customers.insert(&first).await.unwrap();
        ctx.repos.customers.insert(&second).await.unwrap();

        assert_eq!(ctx.repos.customers.find_all().await.unwrap().len(), 2);
        assert_eq!(
            ctx.repos.customers.find_by_phone("5550000001").await,
            Some(first)
        );
    }
}
