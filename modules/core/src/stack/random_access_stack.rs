use core::{fmt, mem::size_of};

use super::{
  chain::{ChainNode, LinkedChain},
  index_slot::IndexSlot,
  stack_error::StackError,
  stack_size::StackSize,
  staged_index::StagedIndex,
};

/// Generic, singly linked, random access stack.
///
/// Behaves as a classic last-in-first-out stack with O(1) front operations
/// and additionally supports indexed insertion, removal, retrieval and
/// swapping plus whole-stack inversion, each costing one chain traversal.
/// Index 0 is the front of the stack. A [`StackSize`] policy selects between
/// limitless growth and a hard element-count limit, replaceable at runtime
/// through [`RandomAccessStack::set_capacity`].
///
/// The container is single-threaded: it holds no locks and no interior
/// mutability, so sharing one instance across execution contexts requires
/// external synchronization, which the borrow rules already enforce.
#[derive(Clone)]
pub struct RandomAccessStack<T> {
  chain:    LinkedChain<T>,
  capacity: StackSize,
}

impl<T> RandomAccessStack<T> {
  /// Creates an empty stack with limitless growth.
  #[must_use]
  pub const fn new() -> Self {
    Self { chain: LinkedChain::new(), capacity: StackSize::Limitless }
  }

  /// Creates an empty stack limited to `limit` elements.
  #[must_use]
  pub const fn with_capacity(limit: usize) -> Self {
    Self { chain: LinkedChain::new(), capacity: StackSize::Limited(limit) }
  }

  /// Returns the number of stored elements.
  #[must_use]
  pub const fn len(&self) -> usize {
    self.chain.len()
  }

  /// Indicates whether the stack is empty.
  #[must_use]
  pub const fn is_empty(&self) -> bool {
    self.chain.is_empty()
  }

  /// Returns the active size policy.
  #[must_use]
  pub const fn capacity(&self) -> StackSize {
    self.capacity
  }

  /// Approximate heap footprint of the stored chain in bytes.
  ///
  /// Counts the node size once per element; allocator overhead and heap
  /// payloads owned by the elements themselves are not included.
  #[must_use]
  pub const fn approximate_byte_size(&self) -> usize {
    self.chain.len() * size_of::<ChainNode<T>>()
  }

  /// Replaces the size policy at runtime.
  ///
  /// `None` selects limitless growth; `Some(limit)` caps the element count.
  /// Shrinking below the current length truncates the stack, discarding
  /// entries from the top until it fits. The truncation is lossy: callers
  /// that need the discarded values must read them out first.
  pub fn set_capacity(&mut self, capacity: Option<usize>) {
    self.capacity = match capacity {
      | Some(limit) => StackSize::Limited(limit),
      | None => StackSize::Limitless,
    };
    if let StackSize::Limited(limit) = self.capacity {
      while self.chain.len() > limit {
        let _ = self.chain.remove(0);
      }
    }
  }

  /// Pushes `value` onto the front of the stack.
  ///
  /// # Errors
  ///
  /// Returns [`StackError::CapacityExceeded`] when a limited stack is full,
  /// or [`StackError::AllocationFailed`] when node storage cannot be
  /// obtained.
  pub fn push(&mut self, value: T) -> Result<(), StackError> {
    self.ensure_can_grow()?;
    self.chain.insert(0, value)
  }

  /// Inserts `value` after the current tail, walking the whole chain.
  ///
  /// # Errors
  ///
  /// Returns [`StackError::CapacityExceeded`] when a limited stack is full,
  /// or [`StackError::AllocationFailed`] when node storage cannot be
  /// obtained.
  pub fn push_last(&mut self, value: T) -> Result<(), StackError> {
    self.ensure_can_grow()?;
    let last = self.chain.len();
    self.chain.insert(last, value)
  }

  /// Inserts `value` immediately before the element at `index`.
  ///
  /// The valid range is strictly the existing positions (`index < len`);
  /// appending past the tail goes through [`RandomAccessStack::push_last`].
  ///
  /// # Errors
  ///
  /// Returns [`StackError::IndexOutOfRange`] when `index >= len`, then the
  /// same capacity and allocation errors as [`RandomAccessStack::push`].
  pub fn insert_at(&mut self, index: usize, value: T) -> Result<(), StackError> {
    if index >= self.chain.len() {
      return Err(StackError::IndexOutOfRange(IndexSlot::First));
    }
    self.ensure_can_grow()?;
    self.chain.insert(index, value)
  }

  /// Removes and returns the front element; `None` on an empty stack.
  pub fn pop(&mut self) -> Option<T> {
    self.chain.remove(0)
  }

  /// Removes and returns the tail element; `None` on an empty stack.
  ///
  /// The cursor is relocated to the link before the tail and the front
  /// removal primitive runs there.
  pub fn pop_last(&mut self) -> Option<T> {
    let last = self.chain.len().checked_sub(1)?;
    self.chain.remove(last)
  }

  /// Removes and returns the element at `index`.
  ///
  /// # Errors
  ///
  /// Returns [`StackError::IndexOutOfRange`] when `index >= len`; the stack
  /// is left untouched.
  pub fn pop_at(&mut self, index: usize) -> Result<T, StackError> {
    if index >= self.chain.len() {
      return Err(StackError::IndexOutOfRange(IndexSlot::First));
    }
    self.chain.remove(index).ok_or(StackError::IndexOutOfRange(IndexSlot::First))
  }

  /// References the front element.
  #[must_use]
  pub fn peek(&self) -> Option<&T> {
    self.chain.get(0)
  }

  /// References the tail element.
  #[must_use]
  pub fn peek_last(&self) -> Option<&T> {
    self.chain.get(self.chain.len().checked_sub(1)?)
  }

  /// References the element at `index`.
  #[must_use]
  pub fn get(&self, index: usize) -> Option<&T> {
    self.chain.get(index)
  }

  /// Mutably references the element at `index` for in-place mutation.
  pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
    self.chain.get_mut(index)
  }

  /// Exchanges the values at `first` and `second` in place.
  ///
  /// Both positions are located in a single forward pass after normalizing
  /// the argument order; the chain links themselves never move.
  ///
  /// # Errors
  ///
  /// Returns [`StackError::IndexOutOfRange`] naming the offending argument
  /// when either index reaches past the current length, and
  /// [`StackError::IdenticalIndices`] when `first == second`. The stack is
  /// unchanged in every failure case.
  pub fn swap(&mut self, first: usize, second: usize) -> Result<(), StackError> {
    let len = self.chain.len();
    if first >= len {
      return Err(StackError::IndexOutOfRange(IndexSlot::First));
    }
    if second >= len {
      return Err(StackError::IndexOutOfRange(IndexSlot::Second));
    }
    if first == second {
      return Err(StackError::IdenticalIndices);
    }
    let (lo, hi) = if first < second { (first, second) } else { (second, first) };
    self.chain.swap_values(lo, hi);
    Ok(())
  }

  /// Exchanges the front element with the element at `index`.
  ///
  /// # Errors
  ///
  /// Same taxonomy as [`RandomAccessStack::swap`]; `index` is the second
  /// argument of the underlying swap.
  pub fn swap_with_first(&mut self, index: usize) -> Result<(), StackError> {
    self.swap(0, index)
  }

  /// Exchanges the tail element with the element at `index`.
  ///
  /// # Errors
  ///
  /// Same taxonomy as [`RandomAccessStack::swap`]; a one-element stack
  /// reports [`StackError::IdenticalIndices`] and an empty stack reports
  /// [`StackError::IndexOutOfRange`].
  pub fn swap_with_last(&mut self, index: usize) -> Result<(), StackError> {
    self.swap(index, self.chain.len().saturating_sub(1))
  }

  /// Exchanges the front and tail elements.
  ///
  /// # Errors
  ///
  /// Same taxonomy as [`RandomAccessStack::swap_with_last`].
  pub fn swap_ends(&mut self) -> Result<(), StackError> {
    self.swap(0, self.chain.len().saturating_sub(1))
  }

  /// Reverses the element order in place, walking the chain once.
  pub fn invert(&mut self) {
    self.chain.invert();
  }

  /// Removes every element.
  pub fn clear(&mut self) {
    self.chain.clear();
  }

  /// Exchanges the values at the two staged positions.
  ///
  /// Both tokens are consumed whether or not the operation succeeds.
  ///
  /// # Errors
  ///
  /// Same taxonomy as [`RandomAccessStack::swap`].
  pub fn swap_staged(&mut self, first: StagedIndex, second: StagedIndex) -> Result<(), StackError> {
    self.swap(first.index(), second.index())
  }

  /// Removes and returns the value at the staged position.
  ///
  /// The token is consumed whether or not the operation succeeds.
  ///
  /// # Errors
  ///
  /// Returns [`StackError::IndexOutOfRange`] when the staged position
  /// reaches past the current length.
  pub fn remove_staged(&mut self, target: StagedIndex) -> Result<T, StackError> {
    self.pop_at(target.index())
  }

  const fn ensure_can_grow(&self) -> Result<(), StackError> {
    if self.capacity.can_grow(self.chain.len()) {
      Ok(())
    } else {
      Err(StackError::CapacityExceeded)
    }
  }

  const fn checked_slot(&self, token: &StagedIndex, slot: IndexSlot) -> Result<usize, StackError> {
    if token.index() >= self.chain.len() {
      return Err(StackError::IndexOutOfRange(slot));
    }
    Ok(token.index())
  }

  fn staged_value(&self, token: &StagedIndex, slot: IndexSlot) -> Result<&T, StackError> {
    self.chain.get(token.index()).ok_or(StackError::IndexOutOfRange(slot))
  }
}

impl<T> RandomAccessStack<T>
where
  T: Clone,
{
  /// Copies out the value at `index`, or `T::default()` when `index` is out
  /// of range.
  ///
  /// This is a deliberately permissive read: an out-of-range index is not an
  /// error here, unlike every other indexed operation. Callers that need to
  /// distinguish a missing position from a default value use
  /// [`RandomAccessStack::get`] or [`RandomAccessStack::read_staged`].
  #[must_use]
  pub fn value_at_or_default(&self, index: usize) -> T
  where
    T: Default, {
    self.chain.get(index).cloned().unwrap_or_default()
  }

  /// Inserts a copy of the value at `source` immediately before `target`.
  ///
  /// The source entry is retained: despite the move-like shape, this is a
  /// copy. Both tokens are consumed whether or not the operation succeeds.
  ///
  /// # Errors
  ///
  /// Returns [`StackError::IndexOutOfRange`] naming the token that reached
  /// past the current length (`source` is validated first), then the same
  /// capacity and allocation errors as [`RandomAccessStack::insert_at`].
  pub fn insert_staged(&mut self, source: StagedIndex, target: StagedIndex) -> Result<(), StackError> {
    let value = self.staged_value(&source, IndexSlot::First)?.clone();
    let target = self.checked_slot(&target, IndexSlot::Second)?;
    self.ensure_can_grow()?;
    self.chain.insert(target, value)
  }

  /// Copies out the value at the staged position.
  ///
  /// Unlike [`RandomAccessStack::value_at_or_default`], the staged read
  /// fails closed. The token is consumed whether or not the operation
  /// succeeds.
  ///
  /// # Errors
  ///
  /// Returns [`StackError::IndexOutOfRange`] when the staged position
  /// reaches past the current length.
  pub fn read_staged(&self, source: StagedIndex) -> Result<T, StackError> {
    self.staged_value(&source, IndexSlot::First).cloned()
  }

  /// Overwrites the value at `target` with a copy of the value at `source`.
  ///
  /// Neither entry is removed and the chain links stay untouched. Both
  /// tokens are consumed whether or not the operation succeeds.
  ///
  /// # Errors
  ///
  /// Returns [`StackError::IndexOutOfRange`] naming the token that reached
  /// past the current length (`source` is validated first).
  pub fn copy_staged(&mut self, source: StagedIndex, target: StagedIndex) -> Result<(), StackError> {
    let value = self.staged_value(&source, IndexSlot::First)?.clone();
    let target = self.checked_slot(&target, IndexSlot::Second)?;
    if let Some(slot) = self.chain.get_mut(target) {
      *slot = value;
    }
    Ok(())
  }
}

impl<T> RandomAccessStack<T>
where
  T: PartialEq,
{
  /// Compares the values at the two staged positions for equality.
  ///
  /// Returns `false`, not an error, when either position is out of range.
  /// Both tokens are consumed regardless of outcome.
  #[must_use]
  pub fn eq_staged(&self, first: StagedIndex, second: StagedIndex) -> bool {
    match (self.chain.get(first.index()), self.chain.get(second.index())) {
      | (Some(lhs), Some(rhs)) => lhs == rhs,
      | _ => false,
    }
  }
}

impl<T> Default for RandomAccessStack<T> {
  fn default() -> Self {
    Self::new()
  }
}

impl<T> fmt::Debug for RandomAccessStack<T>
where
  T: fmt::Debug,
{
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut list = f.debug_list();
    self.chain.for_each(|value| {
      list.entry(value);
    });
    list.finish()
  }
}
