//! Eviction Listener Module
//!
//! Hook invoked by the cache for every entry it evicts.

// == Eviction Listener ==
/// Receives entries evicted from a [`Cache`](crate::Cache).
///
/// Called synchronously inside `add` or `remove_oldest`, after the entry is
/// gone from the cache. The listener gets ownership of the key and value.
/// The cache is mutably borrowed for the whole call, so the listener cannot
/// reach back into it; checks against the cache happen after the call returns.
///
/// Any `FnMut(String, String)` closure is a listener.
pub trait EvictionListener {
    fn on_evicted(&mut self, key: String, value: String);
}

impl<F> EvictionListener for F
where
    F: FnMut(String, String),
{
    fn on_evicted(&mut self, key: String, value: String) {
        self(key, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Counter {
        freed: usize,
    }

    impl EvictionListener for Counter {
        fn on_evicted(&mut self, key: String, value: String) {
            self.freed += key.len() + value.len();
        }
    }

    #[test]
    fn test_closure_listener() {
        let mut seen = Vec::new();
        {
            let mut listener = |key: String, value: String| seen.push((key, value));
            listener.on_evicted("k".to_string(), "v".to_string());
        }
        assert_eq!(seen, vec![("k".to_string(), "v".to_string())]);
    }

    #[test]
    fn test_struct_listener() {
        let mut counter = Counter { freed: 0 };
        counter.on_evicted("key".to_string(), "value".to_string());
        assert_eq!(counter.freed, 8);
    }
}
