pub mod accounts;
pub mod clock;
pub mod error;
pub mod feed;
pub mod posts;

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use chrono::{DateTime, Duration, Utc};
use ephemera_types::models::{Post, User};
use tracing::info;

pub use clock::{Clock, ManualClock, SystemClock};
pub use error::{ErrorKind, Result, StoreError};

/// Default time a post stays in the feed.
pub const DEFAULT_POST_LIFETIME_MINUTES: i64 = 30;

/// In-memory account directory and post feed.
///
/// Everything lives behind one mutex so that each operation, including id
/// allocation and the remove-then-add of a reaction, is atomic.
pub struct Store {
    state: Mutex<State>,
    clock: Arc<dyn Clock>,
    post_lifetime: Duration,
}

struct State {
    users: HashMap<String, User>,
    posts: Vec<Post>,
    next_post_id: u64,
}

impl Store {
    pub fn new(clock: Arc<dyn Clock>, post_lifetime: Duration) -> Self {
        info!(
            "Store ready, posts live for {} minutes",
            post_lifetime.num_minutes()
        );
        Self {
            state: Mutex::new(State {
                users: HashMap::new(),
                posts: Vec::new(),
                next_post_id: 1,
            }),
            clock,
            post_lifetime,
        }
    }

    /// Store on the wall clock with the default post lifetime.
    pub fn with_defaults() -> Self {
        Self::new(
            Arc::new(SystemClock),
            Duration::minutes(DEFAULT_POST_LIFETIME_MINUTES),
        )
    }

    pub fn post_lifetime(&self) -> Duration {
        self.post_lifetime
    }

    fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    fn with_state<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&mut State) -> T,
    {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut state)
    }
}
