//! Rayon pool sizing shared by corpus reads and extraction.

/// Run `op` on a pool with `threads` workers.
///
/// `0` means the current pool. A new pool is built only when the current one
/// has a different size, so nested calls with the same count share one pool.
pub fn with_thread_pool<R, F>(threads: usize, op: F) -> R
where
    F: FnOnce() -> R + Send,
    R: Send,
{
    if threads == 0 || rayon::current_num_threads() == threads {
        return op();
    }
    match rayon::ThreadPoolBuilder::new().num_threads(threads).build() {
        Ok(pool) => pool.install(op),
        Err(e) => {
            tracing::warn!(threads, error = %e, "could not build thread pool, using current pool");
            op()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_runs_on_requested_pool_size() {
        assert_eq!(with_thread_pool(3, rayon::current_num_threads), 3);
    }

    #[test]
    fn test_nested_calls_reuse_pool() {
        let inner = with_thread_pool(2, || {
            let index = rayon::current_thread_index();
            with_thread_pool(2, move || (rayon::current_num_threads(), index == rayon::current_thread_index()))
        });
        assert_eq!(inner, (2, true));
    }

    #[test]
    fn test_zero_uses_current_pool() {
        let global = rayon::current_num_threads();
        assert_eq!(with_thread_pool(0, rayon::current_num_threads), global);
    }
}
