use core::fmt;

use super::index_slot::IndexSlot;

/// Errors that may arise while operating on a random access stack.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StackError {
  /// A limited stack already holds its maximum number of elements.
  CapacityExceeded,
  /// Storage for a new element could not be obtained from the allocator.
  AllocationFailed,
  /// An index argument reached past the current number of elements; the
  /// payload names which argument.
  IndexOutOfRange(IndexSlot),
  /// A swap was requested between an index and itself; nothing was mutated.
  IdenticalIndices,
}

impl fmt::Display for StackError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      | StackError::CapacityExceeded => write!(f, "stack is at its capacity limit"),
      | StackError::AllocationFailed => write!(f, "element allocation failed"),
      | StackError::IndexOutOfRange(IndexSlot::First) => write!(f, "first index is out of range"),
      | StackError::IndexOutOfRange(IndexSlot::Second) => write!(f, "second index is out of range"),
      | StackError::IdenticalIndices => write!(f, "indices are identical"),
    }
  }
}

impl core::error::Error for StackError {}

#[cfg(test)]
mod tests {
  use alloc::format;

  use super::{IndexSlot, StackError};

  #[test]
  fn display_names_the_offending_slot() {
    let first = format!("{}", StackError::IndexOutOfRange(IndexSlot::First));
    let second = format!("{}", StackError::IndexOutOfRange(IndexSlot::Second));
    assert_eq!(first, "first index is out of range");
    assert_eq!(second, "second index is out of range");
  }

  #[test]
  fn display_capacity_and_allocation() {
    assert_eq!(format!("{}", StackError::CapacityExceeded), "stack is at its capacity limit");
    assert_eq!(format!("{}", StackError::AllocationFailed), "element allocation failed");
    assert_eq!(format!("{}", StackError::IdenticalIndices), "indices are identical");
  }

  #[test]
  fn errors_compare_by_kind_and_slot() {
    assert_eq!(StackError::CapacityExceeded, StackError::CapacityExceeded);
    assert_ne!(
      StackError::IndexOutOfRange(IndexSlot::First),
      StackError::IndexOutOfRange(IndexSlot::Second)
    );
  }
}
