//! Type aliases for shared layout state.
//!
//! The layout session is a single-writer object. Hosts that drive it from
//! a single UI thread wrap it in [`Shared`]; hosts with worker threads wrap
//! it in [`ThreadSafe`], which serialises every mutation behind a
//! `parking_lot::Mutex`.
//!
//! ```rust,ignore
//! use kitchenplan_core::types::*;
//!
//! let session: ThreadSafe<LayoutSession> = thread_safe(LayoutSession::default());
//! session.lock().place_from_catalog("oven");
//! ```

use parking_lot::Mutex;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

/// A reference-counted, interior-mutable wrapper for single-threaded sharing.
pub type Shared<T> = Rc<RefCell<T>>;

/// A thread-safe, mutex-protected wrapper for cross-thread sharing.
///
/// Uses `parking_lot::Mutex` for better performance than `std::sync::Mutex`.
pub type ThreadSafe<T> = Arc<Mutex<T>>;

/// Create a new `Shared<T>` from a value.
#[inline]
pub fn shared<T>(value: T) -> Shared<T> {
    Rc::new(RefCell::new(value))
}

/// Create a new `ThreadSafe<T>` from a value.
#[inline]
pub fn thread_safe<T>(value: T) -> ThreadSafe<T> {
    Arc::new(Mutex::new(value))
}
