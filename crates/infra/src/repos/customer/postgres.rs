use super::ICustomerRepo;
use remindly_domain::{Customer, ID};
use sqlx::{types::Uuid, FromRow, PgPool};
use tracing::error;

pub struct PostgresCustomerRepo {
    pool: PgPool,
}

impl PostgresCustomerRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CustomerRaw {
    customer_uid: Uuid,
    name: String,
    surname: String,
    phone_number: String,
    email: Option<String>,
}

impl From<CustomerRaw> for Customer {
    fn from(e: CustomerRaw) -> Self {
        Self {
            id: e.customer_uid.into(),
            name: e.name,
            surname: e.surname,
            phone_number: e.phone_number,
            email: e.email,
        }
    }
}

#[async_trait::async_trait]
impl ICustomerRepo for PostgresCustomerRepo {
    async fn insert(&self, customer: &Customer) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO customers(customer_uid, name, surname, phone_number, email)
            VALUES($1, $2, $3, $4, $5)
            "#,
        )
        .bind(customer.id.inner_ref())
        .bind(&customer.name)
        .bind(&customer.surname)
        .bind(&customer.phone_number)
        .bind(&customer.email)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Unable to insert customer: {:?}. DB returned error: {:?}",
                customer, e
            );
            e
        })?;
        Ok(())
    }

    async fn find(&self, customer_id: &ID) -> Option<Customer> {
        let res: Option<CustomerRaw> = sqlx::query_as(
            r#"
            SELECT * FROM customers
            WHERE customer_uid = $1
            "#,
        )
        .bind(customer_id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Find customer with id: {:?} failed. DB returned error: {:?}",
                customer_id, e
            );
            e
        })
        .ok()?;
        res.map(|customer| customer.into())
    }

    async fn find_many(&self, customer_ids: &[ID]) -> anyhow::Result<Vec<Customer>> {
        let ids = customer_ids
            .iter()
            .map(|id| *id.inner_ref())
            .collect::<Vec<_>>();
        let customers: Vec<CustomerRaw> = sqlx::query_as(
            r#"
            SELECT * FROM customers
            WHERE customer_uid = ANY($1)
            "#,
        )
        .bind(&ids[..])
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Find customers with ids: {:?} failed. DB returned error: {:?}",
                customer_ids, e
            );
            e
        })?;
        Ok(customers.into_iter().map(|c| c.into()).collect())
    }

    async fn find_all(&self) -> anyhow::Result<Vec<Customer>> {
        let customers: Vec<CustomerRaw> = sqlx::query_as(
            r#"
            SELECT * FROM customers
            ORDER BY name, surname
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!("Find all customers failed. DB returned error: {:?}", e);
            e
        })?;
        Ok(customers.into_iter().map(|c| c.into()).collect())
    }

    async fn find_by_phone(&self, phone_number: &str) -> Option<Customer> {
        let res: Option<CustomerRaw> = sqlx::query_as(
            r#"
            SELECT * FROM customers
            WHERE phone_number = $1
            ORDER BY created ASC
            LIMIT 1
            "#,
        )
        .bind(phone_number)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Find customer with phone number: {:?} failed. DB returned error: {:?}",
                phone_number, e
            );
            e
        })
        .ok()?;
        res.map(|customer| customer.into())
    }

    async fn find_by_email(&self, email: &str) -> Option<Customer> {
        let res: Option<CustomerRaw> = sqlx::query_as(
            r#"
            SELECT * FROM customers
            WHERE email = $1
            ORDER BY created ASC
            LIMIT 1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Find customer with email: {:?} failed. DB returned error: {:?}",
                email, e
            );
            e
        })
        .ok()?;
        res.map(|customer| customer.into())
    }

    async fn delete(&self, customer_id: &ID) -> Option<Customer> {
        let res: Option<CustomerRaw> = sqlx::query_as(
            r#"
            DELETE FROM customers
            WHERE customer_uid = $1
            RETURNING *
            "#,
        )
        .bind(customer_id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Delete customer with id: {:?} failed. DB returned error: {:?}",
                customer_id, e
            );
            e
        })
        .ok()?;
        res.map(|customer| customer.into())
    }
}
