use std::sync::{Arc, Mutex};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Random source for quiz selection, shared by every request.
#[derive(Clone)]
pub struct QuizRng(Arc<Mutex<StdRng>>);

impl QuizRng {
    pub fn from_entropy() -> Self {
        Self(Arc::new(Mutex::new(StdRng::from_entropy())))
    }

    pub fn seeded(seed: u64) -> Self {
        Self(Arc::new(Mutex::new(StdRng::seed_from_u64(seed))))
    }

    /// Picks one item uniformly at random; `None` when there is nothing left.
    pub fn pick<T>(&self, mut items: Vec<T>) -> Option<T> {
        if items.is_empty() {
            return None;
        }
        let index = {
            let mut rng = self.0.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
            rng.gen_range(0..items.len())
        };
        Some(items.swap_remove(index))
    }
}
