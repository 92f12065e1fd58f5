//! Failure policies deciding whether a simulated fetch fails.
//!
//! The simulated source asks its policy once per invocation. Policies must be
//! safe to query from overlapping calls: the random policy serializes access
//! to its generator behind a mutex, and every sample is independent.

use std::collections::HashSet;

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::source::{FetchError, FetchTarget};

/// Decides whether one fetch invocation fails.
pub trait FailurePolicy: Send + Sync {
    /// Return `true` if the fetch for `target` should fail.
    fn should_fail(&self, target: FetchTarget) -> bool;
}

/// Policy under which every fetch succeeds.
#[derive(Debug, Default, Clone, Copy)]
pub struct NeverFail;

impl FailurePolicy for NeverFail {
    fn should_fail(&self, _target: FetchTarget) -> bool {
        false
    }
}

/// Fails each comments fetch independently with a fixed probability.
///
/// Profile and posts fetches never fail under this policy.
pub struct RandomCommentFailure {
    rate: f64,
    rng: Mutex<StdRng>,
}

impl RandomCommentFailure {
    /// Create a policy seeded from OS entropy.
    pub fn new(rate: f64) -> Result<Self, FetchError> {
        Self::with_rng(rate, StdRng::from_entropy())
    }

    /// Create a reproducible policy from a fixed seed.
    pub fn seeded(rate: f64, seed: u64) -> Result<Self, FetchError> {
        Self::with_rng(rate, StdRng::seed_from_u64(seed))
    }

    fn with_rng(rate: f64, rng: StdRng) -> Result<Self, FetchError> {
        if !(0.0..=1.0).contains(&rate) {
            return Err(FetchError::Config(format!(
                "failure rate {rate} is outside [0, 1]"
            )));
        }
        Ok(Self {
            rate,
            rng: Mutex::new(rng),
        })
    }
}

impl FailurePolicy for RandomCommentFailure {
    fn should_fail(&self, target: FetchTarget) -> bool {
        match target {
            FetchTarget::Comments(_) => self.rng.lock().gen::<f64>() < self.rate,
            FetchTarget::Profile(_) | FetchTarget::Posts(_) => false,
        }
    }
}

/// Fails exactly the listed targets, every time.
#[derive(Debug, Default, Clone)]
pub struct ScriptedFailure {
    targets: HashSet<FetchTarget>,
}

impl ScriptedFailure {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a target that must fail.
    #[must_use]
    pub fn fail(mut self, target: FetchTarget) -> Self {
        self.targets.insert(target);
        self
    }

    /// Fail the comments fetch of every listed post.
    #[must_use]
    pub fn comments_of(posts: impl IntoIterator<Item = u64>) -> Self {
        posts
            .into_iter()
            .fold(Self::new(), |policy, id| policy.fail(FetchTarget::Comments(id)))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

impl FailurePolicy for ScriptedFailure {
    fn should_fail(&self, target: FetchTarget) -> bool {
        self.targets.contains(&target)
    }
}

/// A fetch fails if any of the contained policies says so.
impl FailurePolicy for Vec<Box<dyn FailurePolicy>> {
    fn should_fail(&self, target: FetchTarget) -> bool {
        self.iter().any(|policy| policy.should_fail(target))
    }
}
