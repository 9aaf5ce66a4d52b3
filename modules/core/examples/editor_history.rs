//! Bounded command history driven by the random access stack.
//!
//! Run with `cargo run --example editor_history`.

use rastack_core_rs::{RandomAccessStack, StackError, StagedIndex};

#[allow(clippy::print_stdout)]
fn main() -> Result<(), StackError> {
  let mut history: RandomAccessStack<&str> = RandomAccessStack::new();
  history.set_capacity(Some(4));

  // Newest action sits at the front; a full history forgets its oldest entry.
  for action in ["create note", "edit title", "edit body", "attach file", "rename file"] {
    if let Err(StackError::CapacityExceeded) = history.push(action) {
      let _ = history.pop_last();
      history.push(action)?;
    }
  }
  println!("history: {history:?}");

  // Replay the third-most-recent action by copying it back onto the front.
  history.set_capacity(None);
  history.insert_staged(StagedIndex::at(2), StagedIndex::at(0))?;
  println!("after replay: {history:?}");

  while let Some(action) = history.pop() {
    println!("undo: {action}");
  }
  Ok(())
}
