use crate::utils::error::Result;
use std::time::Duration;

pub trait Storage: Send + Sync {
    fn ensure_root(&self) -> impl std::future::Future<Output = Result<()>> + Send;
    fn write_file(
        &self,
        name: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait FetchPlan: Send + Sync {
    fn candidate_urls(&self) -> &[String];
    fn file_name(&self) -> &str;
    fn attempt_timeout(&self) -> Duration;
}

pub trait ServePolicy: Send + Sync {
    fn content_type_for(&self, path: &str) -> Option<&'static str>;
    fn should_log(&self, path: &str) -> bool;
}
