//! Customer repository implementation

use sqlx::{FromRow, PgPool};

use core_kernel::CustomerId;
use domain_rental::Customer;

use crate::error::DatabaseError;

/// Customer record from the database
#[derive(Debug, Clone, FromRow)]
pub struct CustomerRow {
    pub customer_id: i32,
    pub customer_name: String,
}

impl TryFrom<CustomerRow> for Customer {
    type Error = DatabaseError;

    fn try_from(row: CustomerRow) -> Result<Self, Self::Error> {
        let id = CustomerId::new(row.customer_id)
            .map_err(|e| DatabaseError::SerializationError(e.to_string()))?;
        Customer::new(id, row.customer_name)
            .map_err(|e| DatabaseError::SerializationError(e.to_string()))
    }
}

/// Repository for managing customers
#[derive(Debug, Clone)]
pub struct CustomerRepository {
    pool: PgPool,
}

impl CustomerRepository {
    /// Creates a new CustomerRepository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Inserts a new customer
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::DuplicateEntry` if a customer with the same
    /// id already exists.
    pub async fn insert(&self, customer: &Customer) -> Result<(), DatabaseError> {
        sqlx::query("INSERT INTO customers (customer_id, customer_name) VALUES ($1, $2)")
            .bind(customer.id.get())
            .bind(&customer.name)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// Retrieves a customer by id
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` if no such customer exists.
    pub async fn get_by_id(&self, customer_id: CustomerId) -> Result<Customer, DatabaseError> {
        let row = sqlx::query_as::<_, CustomerRow>(
            "SELECT customer_id, customer_name FROM customers WHERE customer_id = $1",
        )
        .bind(customer_id.get())
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| DatabaseError::not_found("Customer", customer_id))?;

        row.try_into()
    }

    /// Deletes a customer along with their reservations and reviews
    /// (cascaded by the schema).
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` if no such customer exists.
    pub async fn delete(&self, customer_id: CustomerId) -> Result<(), DatabaseError> {
        let result = sqlx::query("DELETE FROM customers WHERE customer_id = $1")
            .bind(customer_id.get())
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DatabaseError::not_found("Customer", customer_id));
        }
        Ok(())
    }
}
