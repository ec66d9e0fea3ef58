//! Accounts service.

use async_trait::async_trait;
use mockall::automock;
use sqlx::{Postgres, Transaction};

use crate::{
    auth::{ApiTokenSecret, IssuedApiToken, PgAuthRepository},
    database::Db,
    domain::{
        accounts::{
            data::{NewCustomer, NewVendor},
            errors::AccountsServiceError,
            identity::{Caller, Vendor},
            records::{Registration, UserRecord, UserUuid, VendorRegistration},
            repository::PgAccountsRepository,
        },
        stores::repository::PgStoresRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgAccountsService {
    db: Db,
    repository: PgAccountsRepository,
    stores: PgStoresRepository,
    tokens: PgAuthRepository,
}

impl PgAccountsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgAccountsRepository::new(),
            stores: PgStoresRepository::new(),
            tokens: PgAuthRepository::new(),
        }
    }

    async fn issue_first_token(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: UserUuid,
    ) -> Result<IssuedApiToken, AccountsServiceError> {
        let secret = ApiTokenSecret::generate();

        let metadata = self.tokens.create_api_token(tx, user, &secret.hash()).await?;

        Ok(IssuedApiToken {
            token: secret.expose().to_string(),
            metadata,
        })
    }
}

#[async_trait]
impl AccountsService for PgAccountsService {
    async fn register_customer(
        &self,
        customer: NewCustomer,
    ) -> Result<Registration, AccountsServiceError> {
        let mut tx = self.db.begin().await?;

        let user = self.repository.create_user(&mut tx, &customer, false).await?;
        let token = self.issue_first_token(&mut tx, user.uuid).await?;

        tx.commit().await?;

        tracing::info!(user = %user.uuid, "customer registered");

        Ok(Registration { user, token })
    }

    async fn register_vendor(
        &self,
        vendor: NewVendor,
    ) -> Result<VendorRegistration, AccountsServiceError> {
        let mut tx = self.db.begin().await?;

        let user = self.repository.create_user(&mut tx, &vendor.user, true).await?;

        self.repository.create_shop_owner(&mut tx, user.uuid).await?;

        let store = self
            .stores
            .create_store(&mut tx, user.uuid, &vendor.store)
            .await?;

        let token = self.issue_first_token(&mut tx, user.uuid).await?;

        tx.commit().await?;

        tracing::info!(user = %user.uuid, store = %store.uuid, "vendor registered");

        Ok(VendorRegistration { user, store, token })
    }

    async fn resolve_vendor(&self, caller: Caller) -> Result<Vendor, AccountsServiceError> {
        if !caller.is_vendor {
            return Err(AccountsServiceError::NotVendor);
        }

        let mut tx = self.db.begin().await?;

        let store = self.stores.find_store_by_owner(&mut tx, caller.user).await?;

        tx.commit().await?;

        Ok(Vendor {
            user: caller.user,
            store: store.uuid,
        })
    }

    async fn get_user(&self, user: UserUuid) -> Result<UserRecord, AccountsServiceError> {
        let mut tx = self.db.begin().await?;

        let user = self.repository.get_user(&mut tx, user).await?;

        tx.commit().await?;

        Ok(user)
    }
}

#[automock]
#[async_trait]
pub trait AccountsService: Send + Sync {
    /// Register a customer and issue their first bearer token.
    async fn register_customer(
        &self,
        customer: NewCustomer,
    ) -> Result<Registration, AccountsServiceError>;

    /// Register a vendor with their store profile and issue their first bearer token.
    async fn register_vendor(
        &self,
        vendor: NewVendor,
    ) -> Result<VendorRegistration, AccountsServiceError>;

    /// Resolve a caller to the vendor identity and store they own.
    async fn resolve_vendor(&self, caller: Caller) -> Result<Vendor, AccountsServiceError>;

    /// Retrieve a single user.
    async fn get_user(&self, user: UserUuid) -> Result<UserRecord, AccountsServiceError>;
}
