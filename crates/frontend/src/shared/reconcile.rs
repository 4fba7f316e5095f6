//! Write-then-refetch: the server's list is the only truth after a mutation.

use std::future::Future;

use gloo_timers::future::TimeoutFuture;

/// Pause between a successful valuation write and the grid refetch, giving
/// the backend time to recompute derived columns.
pub const RECONCILE_DELAY_MS: u32 = 400;

#[derive(Debug, PartialEq)]
pub struct Reconciled<W> {
    pub write: Result<W, String>,
    pub refreshed: Result<(), String>,
}

/// Runs `write`, then `settle` if it succeeded, then `refetch` no matter how
/// the write ended.
pub async fn write_then_reconcile<W, Wf, S, Sf, R, Rf>(
    write: Wf,
    settle: S,
    refetch: R,
) -> Reconciled<W>
where
    Wf: Future<Output = Result<W, String>>,
    S: FnOnce() -> Sf,
    Sf: Future<Output = ()>,
    R: FnOnce() -> Rf,
    Rf: Future<Output = Result<(), String>>,
{
    let write = write.await;
    if write.is_ok() {
        settle().await;
    }
    let refreshed = refetch().await;
    Reconciled { write, refreshed }
}

/// Settle step used by the views.
pub fn reconcile_delay() -> TimeoutFuture {
    TimeoutFuture::new(RECONCILE_DELAY_MS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::RefCell;

    #[test]
    fn refetch_runs_after_successful_write() {
        let calls = RefCell::new(Vec::new());
        let out = block_on(write_then_reconcile(
            async {
                calls.borrow_mut().push("write");
                Ok::<_, String>(1234.0)
            },
            || async { calls.borrow_mut().push("settle") },
            || async {
                calls.borrow_mut().push("refetch");
                Ok(())
            },
        ));
        assert_eq!(out.write, Ok(1234.0));
        assert_eq!(out.refreshed, Ok(()));
        assert_eq!(*calls.borrow(), vec!["write", "settle", "refetch"]);
    }

    #[test]
    fn refetch_still_runs_after_failed_write() {
        let calls = RefCell::new(Vec::new());
        let out = block_on(write_then_reconcile(
            async {
                calls.borrow_mut().push("write");
                Err::<(), _>("HTTP error: 500".to_string())
            },
            || async { calls.borrow_mut().push("settle") },
            || async {
                calls.borrow_mut().push("refetch");
                Err("HTTP error: 502".to_string())
            },
        ));
        assert_eq!(out.write, Err("HTTP error: 500".to_string()));
        assert_eq!(out.refreshed, Err("HTTP error: 502".to_string()));
        assert_eq!(*calls.borrow(), vec!["write", "refetch"]);
    }
}
