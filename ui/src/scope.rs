use std::{
    cell::{Cell, RefCell},
    future::Future,
    rc::Rc,
};

use futures::future::{AbortHandle, Abortable};

/// Owns the pending work a view starts.
///
/// Discarding the scope aborts everything still running inside it, and
/// anything started afterwards never runs. Clones share the same scope.
#[derive(Clone, Default)]
pub struct ViewScope {
    inner: Rc<ScopeState>,
}

#[derive(Default)]
struct ScopeState {
    discarded: Cell<bool>,
    next_id: Cell<u64>,
    pending: RefCell<Vec<(u64, AbortHandle)>>,
}

impl ViewScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drive `future` to completion unless the scope is discarded first.
    pub async fn run<F: Future>(&self, future: F) -> Option<F::Output> {
        if self.is_discarded() {
            return None;
        }

        let (handle, registration) = AbortHandle::new_pair();
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id + 1);
        self.inner.pending.borrow_mut().push((id, handle));

        let output = Abortable::new(future, registration).await.ok();

        self.inner
            .pending
            .borrow_mut()
            .retain(|(pending_id, _)| *pending_id != id);
        output
    }

    pub fn discard(&self) {
        self.inner.discarded.set(true);
        for (_, handle) in self.inner.pending.borrow_mut().drain(..) {
            handle.abort();
        }
    }

    pub fn is_discarded(&self) -> bool {
        self.inner.discarded.get()
    }

    #[cfg(test)]
    pub(crate) fn pending(&self) -> usize {
        self.inner.pending.borrow().len()
    }
}
