// src/presentation/http/middleware/rate_limit.rs
use ::governor::middleware::NoOpMiddleware;
use axum::body::Body;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor,
};

pub const REQUESTS_PER_SECOND: u64 = 10;
pub const BURST_SIZE: u32 = 20;

pub type RateLimitLayer = GovernorLayer<SmartIpKeyExtractor, NoOpMiddleware, Body>;

/// Per-client-IP limiter. Each router gets its own quota state.
///
/// `None` only if the quota above is rejected by `governor`.
pub fn rate_limit_layer() -> Option<RateLimitLayer> {
    let mut builder = GovernorConfigBuilder::default();
    builder.per_second(REQUESTS_PER_SECOND);
    builder.burst_size(BURST_SIZE);
    let Some(config) = builder.key_extractor(SmartIpKeyExtractor).finish() else {
        tracing::error!("invalid rate limit quota, requests will not be limited");
        return None;
    };
    Some(GovernorLayer::new(config))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quota_is_accepted() {
        assert!(rate_limit_layer().is_some());
    }
}
