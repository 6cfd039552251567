//! Key selection strategies.

use std::sync::atomic::{AtomicUsize, Ordering};

use rand::Rng;

use crate::config::schema::SelectionStrategy;
use crate::error::GatewayError;
use crate::keys::CredentialPool;

/// Picks one index out of `len` candidates.
///
/// `len` is always non-zero when called through [`KeySelector::select`].
pub trait KeySelector: Send + Sync + std::fmt::Debug {
    fn pick(&self, len: usize) -> usize;

    /// Select one credential from the pool.
    fn select<'a>(&self, pool: &'a CredentialPool) -> Result<&'a str, GatewayError> {
        if pool.is_empty() {
            return Err(GatewayError::KeyPoolEmpty);
        }
        let index = self.pick(pool.len()) % pool.len();
        pool.get(index).ok_or(GatewayError::KeyPoolEmpty)
    }
}

/// Uniform random choice. Every call is independent.
#[derive(Debug, Default)]
pub struct RandomSelector;

impl KeySelector for RandomSelector {
    fn pick(&self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// Rotates through the pool in order.
#[derive(Debug, Default)]
pub struct RoundRobinSelector {
    counter: AtomicUsize,
}

impl RoundRobinSelector {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeySelector for RoundRobinSelector {
    fn pick(&self, len: usize) -> usize {
        self.counter.fetch_add(1, Ordering::Relaxed) % len
    }
}

/// Build the selector for the configured strategy.
pub fn from_strategy(strategy: SelectionStrategy) -> Box<dyn KeySelector> {
    match strategy {
        SelectionStrategy::Random => Box::new(RandomSelector),
        SelectionStrategy::RoundRobin => Box::new(RoundRobinSelector::new()),
    }
}
