use chrono::Local;
use std::sync::Arc;
use tracing::{info, warn};

use crate::domain::commands::customers::{
    RegisterCustomerCommand, RegisterCustomerResult, UpdateCustomerCommand, UpdateCustomerResult,
};
use crate::domain::models::Customer;
use crate::domain::rules;
use crate::error::DomainError;
use crate::storage::traits::CustomerStorage;

/// Service for managing customers of the rental business.
#[derive(Clone)]
pub struct CustomerService {
    customer_repository: Arc<dyn CustomerStorage>,
}

impl CustomerService {
    pub fn new(customer_repository: Arc<dyn CustomerStorage>) -> Self {
        Self {
            customer_repository,
        }
    }

    /// Register a new customer.
    ///
    /// Rejected when a customer with the same national-ID already exists, or
    /// when the customer is not old enough to rent (including an unset birth
    /// date).
    pub async fn register_customer(
        &self,
        command: RegisterCustomerCommand,
    ) -> Result<RegisterCustomerResult, DomainError> {
        let national_id = command.national_id.trim().to_string();
        info!("registering customer with DNI {national_id}");

        if national_id.is_empty() {
            return Err(DomainError::validation_failed(
                "national-ID cannot be empty",
            ));
        }

        if self
            .customer_repository
            .find_by_national_id(&national_id)
            .await?
            .is_some()
        {
            warn!("customer with DNI {national_id} already exists");
            return Err(DomainError::duplicate_key(format!(
                "a customer with DNI {national_id} already exists"
            )));
        }

        let mut customer = Customer::new(
            command.first_name.trim(),
            command.last_name.trim(),
            national_id,
            command.birth_date,
        );

        let today = Local::now().date_naive();
        if !rules::is_eligible_on(&customer, today) {
            warn!(
                "customer with DNI {} rejected: age {} below minimum",
                customer.national_id,
                rules::age_on(&customer, today)
            );
            return Err(DomainError::validation_failed(format!(
                "customers must be at least {} years old",
                rules::MIN_CUSTOMER_AGE
            )));
        }

        let id = self.customer_repository.insert_customer(&customer).await?;
        customer.id = Some(id);

        info!("registered customer {} with id {id}", customer.display_name());

        Ok(RegisterCustomerResult { customer })
    }

    /// Update an existing customer. Fields left as `None` are unchanged.
    pub async fn update_customer(
        &self,
        command: UpdateCustomerCommand,
    ) -> Result<UpdateCustomerResult, DomainError> {
        info!("updating customer {}", command.customer_id);

        let mut customer = self
            .customer_repository
            .get_customer(command.customer_id)
            .await?
            .ok_or_else(|| {
                DomainError::not_found(format!("no customer with id {}", command.customer_id))
            })?;

        if let Some(first_name) = command.first_name {
            customer.first_name = first_name.trim().to_string();
        }
        if let Some(last_name) = command.last_name {
            customer.last_name = last_name.trim().to_string();
        }
        if let Some(birth_date) = command.birth_date {
            customer.birth_date = Some(birth_date);
        }
        if let Some(active) = command.active {
            customer.active = active;
        }

        self.customer_repository.update_customer(&customer).await?;

        Ok(UpdateCustomerResult { customer })
    }

    /// Soft-delete a customer.
    pub async fn deactivate_customer(&self, customer_id: i64) -> Result<(), DomainError> {
        info!("deactivating customer {customer_id}");

        let mut customer = self
            .customer_repository
            .get_customer(customer_id)
            .await?
            .ok_or_else(|| {
                DomainError::not_found(format!("no customer with id {customer_id}"))
            })?;

        customer.active = false;
        self.customer_repository.update_customer(&customer).await?;

        Ok(())
    }

    /// Look up a customer by national-ID.
    pub async fn find_by_national_id(
        &self,
        national_id: &str,
    ) -> Result<Option<Customer>, DomainError> {
        Ok(self
            .customer_repository
            .find_by_national_id(national_id.trim())
            .await?)
    }

    /// Active customers, ordered by name.
    pub async fn list_active_customers(&self) -> Result<Vec<Customer>, DomainError> {
        Ok(self.customer_repository.list_active_customers().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::sqlite::{CustomerRepository, DbConnection};
    use chrono::{Datelike, NaiveDate};

    async fn setup_test() -> CustomerService {
        let db = DbConnection::init_test()
            .await
            .expect("Failed to create test database");
        CustomerService::new(Arc::new(CustomerRepository::new(db)))
    }

    fn birth_date_years_ago(n: i32) -> NaiveDate {
        let today = Local::now().date_naive();
        today
            .with_year(today.year() - n)
            .unwrap_or_else(|| NaiveDate::from_ymd_opt(today.year() - n, 2, 28).unwrap())
    }

    fn register_command(dni: &str, birth_date: Option<NaiveDate>) -> RegisterCustomerCommand {
        RegisterCustomerCommand {
            first_name: "  Ana ".to_string(),
            last_name: " Pérez ".to_string(),
            national_id: dni.to_string(),
            birth_date,
        }
    }

    #[tokio::test]
    async fn register_assigns_id_and_trims_fields() {
        let service = setup_test().await;

        let result = service
            .register_customer(register_command("11111111A", Some(birth_date_years_ago(30))))
            .await
            .unwrap();

        assert!(result.customer.id.is_some());
        assert_eq!(result.customer.first_name, "Ana");
        assert_eq!(result.customer.last_name, "Pérez");
        assert!(result.customer.active);
    }

    #[tokio::test]
    async fn register_rejects_duplicate_national_id() {
        let service = setup_test().await;
        let birth = Some(birth_date_years_ago(30));

        service
            .register_customer(register_command("11111111A", birth))
            .await
            .unwrap();

        let err = service
            .register_customer(register_command("11111111A", birth))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::DuplicateKey(_)));
    }

    #[tokio::test]
    async fn register_rejects_underage_customers() {
        let service = setup_test().await;

        let err = service
            .register_customer(register_command("11111111A", Some(birth_date_years_ago(24))))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::ValidationFailed(_)));

        // The 25th birthday itself is eligible.
        service
            .register_customer(register_command("22222222B", Some(birth_date_years_ago(25))))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn register_rejects_missing_birth_date() {
        let service = setup_test().await;

        let err = service
            .register_customer(register_command("11111111A", None))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::ValidationFailed(_)));
    }

    #[tokio::test]
    async fn update_changes_only_provided_fields() {
        let service = setup_test().await;
        let registered = service
            .register_customer(register_command("11111111A", Some(birth_date_years_ago(30))))
            .await
            .unwrap();

        let updated = service
            .update_customer(UpdateCustomerCommand {
                customer_id: registered.customer.id.unwrap(),
                last_name: Some("García".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(updated.customer.first_name, "Ana");
        assert_eq!(updated.customer.last_name, "García");
        assert_eq!(updated.customer.birth_date, registered.customer.birth_date);
    }

    #[tokio::test]
    async fn update_unknown_customer_is_not_found() {
        let service = setup_test().await;

        let err = service
            .update_customer(UpdateCustomerCommand {
                customer_id: 42,
                first_name: Some("Nadie".to_string()),
                ..Default::default()
            })
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound(_)));
    }

    #[tokio::test]
    async fn deactivated_customers_leave_the_active_listing() {
        let service = setup_test().await;
        let registered = service
            .register_customer(register_command("11111111A", Some(birth_date_years_ago(30))))
            .await
            .unwrap();

        service
            .deactivate_customer(registered.customer.id.unwrap())
            .await
            .unwrap();

        assert!(service.list_active_customers().await.unwrap().is_empty());
        // Soft delete: the record still answers uniqueness lookups.
        assert!(service
            .find_by_national_id("11111111A")
            .await
            .unwrap()
            .is_some());
    }
}
