//! 等待能力
//!
//! 重试退避和任务间隔都通过这里等待，调度方式可以整体替换。

use std::time::Duration;

use async_trait::async_trait;

#[async_trait]
pub trait Waiter: Send + Sync {
    async fn wait(&self, duration: Duration);
}

/// 基于 `tokio::time::sleep` 的实现
#[derive(Debug, Default, Clone, Copy)]
pub struct TokioWaiter;

#[async_trait]
impl Waiter for TokioWaiter {
    async fn wait(&self, duration: Duration) {
        if !duration.is_zero() {
            tokio::time::sleep(duration).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_tokio_waiter_sleeps() {
        let start = tokio::time::Instant::now();
        TokioWaiter.wait(Duration::from_millis(20)).await;
        assert!(start.elapsed() >= Duration::from_millis(20));
    }

    #[test]
    fn test_zero_wait_returns_immediately() {
        tokio_test::block_on(TokioWaiter.wait(Duration::ZERO));
    }
}
