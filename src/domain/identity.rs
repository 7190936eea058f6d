//! Identity collaborator.
//!
//! Session management is out of scope; the core consumes a resolved
//! current-user identity from whatever authentication layer fronts it.

use async_trait::async_trait;
use mockall::automock;
use thiserror::Error;

use crate::ids::UserUuid;

/// The authenticated customer on whose behalf requests run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUser {
    pub uuid: UserUuid,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Error)]
pub enum IdentityError {
    #[error("no authenticated user")]
    Unauthenticated,
}

#[automock]
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn current_user(&self) -> Result<CurrentUser, IdentityError>;
}

/// Identity provider pinned to a single resolved user.
#[derive(Debug, Clone)]
pub struct FixedIdentityProvider {
    user: CurrentUser,
}

impl FixedIdentityProvider {
    #[must_use]
    pub fn new(user: CurrentUser) -> Self {
        Self { user }
    }
}

#[async_trait]
impl IdentityProvider for FixedIdentityProvider {
    async fn current_user(&self) -> Result<CurrentUser, IdentityError> {
        Ok(self.user.clone())
    }
}
