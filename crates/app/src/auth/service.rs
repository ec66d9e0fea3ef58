//! Auth service.

use async_trait::async_trait;
use mockall::automock;
use uuid::Uuid;

use crate::{
    auth::{ApiTokenSecret, AuthServiceError, IssuedApiToken, repository::PgAuthRepository},
    database::Db,
    domain::accounts::{identity::Caller, records::UserUuid},
};

#[derive(Debug, Clone)]
pub struct PgAuthService {
    db: Db,
    repository: PgAuthRepository,
}

impl PgAuthService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgAuthRepository::new(),
        }
    }
}

#[async_trait]
impl AuthService for PgAuthService {
    async fn authenticate_bearer(&self, bearer_token: &str) -> Result<Caller, AuthServiceError> {
        let Ok(secret) = ApiTokenSecret::parse(bearer_token) else {
            return Err(AuthServiceError::NotFound);
        };

        let mut tx = self.db.begin().await?;

        let caller = self
            .repository
            .find_caller_by_token_hash(&mut tx, &secret.hash())
            .await?;

        tx.commit().await?;

        Ok(caller)
    }

    async fn issue_token(&self, user: UserUuid) -> Result<IssuedApiToken, AuthServiceError> {
        let secret = ApiTokenSecret::generate();

        let mut tx = self.db.begin().await?;

        let metadata = self
            .repository
            .create_api_token(&mut tx, user, &secret.hash())
            .await?;

        tx.commit().await?;

        Ok(IssuedApiToken {
            token: secret.expose().to_string(),
            metadata,
        })
    }

    async fn revoke_token(&self, token: Uuid) -> Result<bool, AuthServiceError> {
        let mut tx = self.db.begin().await?;

        let rows_affected = self.repository.revoke_api_token(&mut tx, token).await?;

        tx.commit().await?;

        Ok(rows_affected > 0)
    }
}

#[automock]
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Resolve a raw bearer token to the caller it was issued to.
    async fn authenticate_bearer(&self, bearer_token: &str) -> Result<Caller, AuthServiceError>;

    /// Issue a new bearer token for a user. The raw token is only returned here.
    async fn issue_token(&self, user: UserUuid) -> Result<IssuedApiToken, AuthServiceError>;

    /// Revoke a token by UUID. Returns `true` if the token was active.
    async fn revoke_token(&self, token: Uuid) -> Result<bool, AuthServiceError>;
}
