//! Deadline wrapper for migrations that may hang

use super::traits::ContentMigration;
use crate::content::{Content, ContentType};
use crate::error::{Error, Result};
use async_trait::async_trait;
use std::time::Duration;

/// Fails the wrapped migration with [`Error::Timeout`] when `migrate` does not
/// complete within `limit`
pub struct WithTimeout<M> {
    inner: M,
    limit: Duration,
}

impl<M: ContentMigration> WithTimeout<M> {
    pub fn new(inner: M, limit: Duration) -> Self {
        Self { inner, limit }
    }

    pub fn limit(&self) -> Duration {
        self.limit
    }

    pub fn into_inner(self) -> M {
        self.inner
    }
}

#[async_trait]
impl<M: ContentMigration> ContentMigration for WithTimeout<M> {
    fn from_type(&self) -> &ContentType {
        self.inner.from_type()
    }

    fn to_type(&self) -> &ContentType {
        self.inner.to_type()
    }

    async fn migrate(&self, content: Content) -> Result<Content> {
        match tokio::time::timeout(self.limit, self.inner.migrate(content)).await {
            Ok(result) => result,
            Err(_) => Err(Error::Timeout {
                from: self.from_type().to_string(),
                to: self.to_type().to_string(),
                after: self.limit,
            }),
        }
    }
}
