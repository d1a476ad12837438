//! In-memory call catalog.

use common::CallId;

use crate::call::CallRecord;

/// Immutable catalog of call records served by the API.
///
/// The demo data set is fixed at startup, so lookups borrow directly from
/// the backing vector with no synchronization.
#[derive(Debug, Clone, Default)]
pub struct CallDirectory {
    calls: Vec<CallRecord>,
}

impl CallDirectory {
    /// Creates a directory over the given records.
    pub fn new(calls: Vec<CallRecord>) -> Self {
        Self { calls }
    }

    /// Looks up a call by id.
    pub fn get(&self, call_id: &CallId) -> Option<&CallRecord> {
        self.calls.iter().find(|call| &call.call_id == call_id)
    }

    /// All calls, in catalog order.
    pub fn all(&self) -> &[CallRecord] {
        &self.calls
    }

    /// Number of calls in the catalog.
    pub fn len(&self) -> usize {
        self.calls.len()
    }

    /// True if the catalog holds no calls.
    pub fn is_empty(&self) -> bool {
        self.calls.is_empty()
    }
}
