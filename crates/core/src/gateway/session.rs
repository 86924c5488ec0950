use std::time::{Duration, Instant};

use crate::interfaces::SessionToken;

/// An authenticated session with the remote service
#[derive(Debug, Clone)]
pub struct Session {
    token: SessionToken,
    last_used: Instant,
    ttl: Duration,
}

impl Session {
    pub fn new(token: SessionToken, ttl: Duration) -> Self {
        Self {
            token,
            last_used: Instant::now(),
            ttl,
        }
    }

    pub fn token(&self) -> &SessionToken {
        &self.token
    }

    /// Sessions expire after `ttl` without use, like the server side does.
    pub fn is_expired(&self) -> bool {
        self.last_used.elapsed() >= self.ttl
    }

    /// Records a successful call made with this session.
    pub fn touch(&mut self) {
        self.last_used = Instant::now();
    }
}
