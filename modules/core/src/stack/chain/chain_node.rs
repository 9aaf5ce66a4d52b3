use alloc::{alloc::alloc, boxed::Box};
use core::alloc::Layout;

use crate::stack::StackError;

/// Owned link to the next entry of a chain, `None` at the tail.
pub(crate) type Link<T> = Option<Box<ChainNode<T>>>;

/// One stack entry: a value plus exclusive ownership of the rest of the
/// chain. Nodes hold no shared or backward references.
pub(crate) struct ChainNode<T> {
  pub(crate) value: T,
  pub(crate) next:  Link<T>,
}

impl<T> ChainNode<T> {
  /// Allocates a detached node holding `value`, reporting allocator failure
  /// instead of aborting.
  pub(crate) fn try_boxed(value: T) -> Result<Box<Self>, StackError> {
    let layout = Layout::new::<Self>();
    // SAFETY: `Self` always carries an owned link, so the layout is never
    // zero-sized.
    let raw = unsafe { alloc(layout) }.cast::<Self>();
    if raw.is_null() {
      return Err(StackError::AllocationFailed);
    }
    // SAFETY: `raw` is non-null and was allocated with the layout of `Self`;
    // writing before `Box::from_raw` hands ownership to the box.
    unsafe {
      raw.write(Self { value, next: None });
      Ok(Box::from_raw(raw))
    }
  }
}
