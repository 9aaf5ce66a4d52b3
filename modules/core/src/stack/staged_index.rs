/// Single-use token naming one stack position for a staged operation.
///
/// Tokens are consumed by value: every combining operation clears its staged
/// indices simply by taking ownership, so a token cannot be reused without
/// staging a new one, and a two-slot operation cannot run with only one
/// token staged. The named position is validated against the stack's current
/// size when the combining operation executes, not when the token is
/// created.
///
/// ```compile_fail
/// use rastack_core_rs::{RandomAccessStack, StagedIndex};
///
/// let mut stack = RandomAccessStack::new();
/// stack.push(1).unwrap();
/// let token = StagedIndex::at(0);
/// let _ = stack.read_staged(token);
/// let _ = stack.read_staged(token); // the token was already consumed
/// ```
#[derive(Debug, PartialEq, Eq)]
pub struct StagedIndex {
  index: usize,
}

impl StagedIndex {
  /// Stages the position `index` for a later combining operation.
  #[must_use]
  pub const fn at(index: usize) -> Self {
    Self { index }
  }

  /// The staged position.
  #[must_use]
  pub const fn index(&self) -> usize {
    self.index
  }
}

#[cfg(test)]
mod tests {
  use super::StagedIndex;

  #[test]
  fn token_records_the_staged_position() {
    assert_eq!(StagedIndex::at(7).index(), 7);
  }
}
