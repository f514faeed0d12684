//! PostgreSQL account repository implementation

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::account::{Account, AccountId, AccountRepository, EmailAddress, Role};
use crate::domain::profile::Profile;
use crate::domain::DomainError;

/// PostgreSQL implementation of AccountRepository
///
/// Email uniqueness is enforced by a unique index on the normalized email
/// column; duplicate-key failures map to Conflict, so the check-and-insert
/// is atomic at the database.
#[derive(Debug, Clone)]
pub struct PostgresAccountRepository {
    pool: PgPool,
}

impl PostgresAccountRepository {
    /// Create a new repository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AccountRepository for PostgresAccountRepository {
    async fn get(&self, id: &AccountId) -> Result<Option<Account>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, email, password_hash, role, profile, created_at
            FROM accounts
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to get account: {}", e)))?;

        match row {
            Some(row) => Ok(Some(row_to_account(&row)?)),
            None => Ok(None),
        }
    }

    async fn get_by_email(&self, email: &EmailAddress) -> Result<Option<Account>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, email, password_hash, role, profile, created_at
            FROM accounts
            WHERE email = $1
            "#,
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to get account by email: {}", e)))?;

        match row {
            Some(row) => Ok(Some(row_to_account(&row)?)),
            None => Ok(None),
        }
    }

    async fn create(&self, account: Account) -> Result<Account, DomainError> {
        let profile = serde_json::to_value(account.profile())
            .map_err(|e| DomainError::storage(format!("Failed to serialize profile: {}", e)))?;

        sqlx::query(
            r#"
            INSERT INTO accounts (id, email, password_hash, role, profile, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(account.id().as_uuid())
        .bind(account.email().as_str())
        .bind(account.password_hash())
        .bind(role_to_str(account.role()))
        .bind(profile)
        .bind(account.created_at())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            let msg = e.to_string();

            if msg.contains("duplicate key") || msg.contains("unique constraint") {
                DomainError::conflict("User already exists")
            } else {
                DomainError::storage(format!("Failed to create account: {}", e))
            }
        })?;

        Ok(account)
    }

    async fn update(&self, account: &Account) -> Result<Account, DomainError> {
        let profile = serde_json::to_value(account.profile())
            .map_err(|e| DomainError::storage(format!("Failed to serialize profile: {}", e)))?;

        let result = sqlx::query(
            r#"
            UPDATE accounts
            SET password_hash = $2, role = $3, profile = $4
            WHERE id = $1
            "#,
        )
        .bind(account.id().as_uuid())
        .bind(account.password_hash())
        .bind(role_to_str(account.role()))
        .bind(profile)
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to update account: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found(format!(
                "Account '{}' not found",
                account.id()
            )));
        }

        Ok(account.clone())
    }
}

fn row_to_account(row: &sqlx::postgres::PgRow) -> Result<Account, DomainError> {
    let id: uuid::Uuid = row.get("id");
    let email: String = row.get("email");
    let password_hash: String = row.get("password_hash");
    let role: String = row.get("role");
    let profile: serde_json::Value = row.get("profile");
    let created_at: chrono::DateTime<chrono::Utc> = row.get("created_at");

    let email = EmailAddress::new(&email)
        .map_err(|e| DomainError::storage(format!("Invalid email in database: {}", e)))?;
    let profile: Profile = serde_json::from_value(profile)
        .map_err(|e| DomainError::storage(format!("Invalid profile in database: {}", e)))?;

    Ok(Account::restore(
        AccountId::parse(&id.to_string())
            .map_err(|e| DomainError::storage(format!("Invalid account ID in database: {}", e)))?,
        email,
        password_hash,
        str_to_role(&role),
        profile,
        created_at,
    ))
}

fn role_to_str(role: Role) -> &'static str {
    match role {
        Role::Candidate => "candidate",
        Role::Recruiter => "recruiter",
        Role::Employer => "employer",
        Role::HiringManager => "hiring_manager",
        Role::Interviewer => "interviewer",
    }
}

fn str_to_role(s: &str) -> Role {
    match s {
        "recruiter" => Role::Recruiter,
        "employer" => Role::Employer,
        "hiring_manager" => Role::HiringManager,
        "interviewer" => Role::Interviewer,
        _ => Role::Candidate,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_conversion() {
        assert_eq!(role_to_str(Role::Candidate), "candidate");
        assert_eq!(role_to_str(Role::Employer), "employer");
        assert_eq!(role_to_str(Role::HiringManager), "hiring_manager");

        assert_eq!(str_to_role("candidate"), Role::Candidate);
        assert_eq!(str_to_role("employer"), Role::Employer);
        assert_eq!(str_to_role("hiring_manager"), Role::HiringManager);
        assert_eq!(str_to_role("unknown"), Role::Candidate);
    }
}
