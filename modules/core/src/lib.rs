#![deny(missing_docs)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::redundant_clone))]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
#![deny(clippy::missing_safety_doc)]
#![cfg_attr(not(test), deny(clippy::redundant_clone))]
#![deny(clippy::redundant_field_names)]
#![deny(clippy::redundant_pattern)]
#![deny(clippy::redundant_static_lifetimes)]
#![deny(clippy::unnecessary_to_owned)]
#![deny(clippy::unnecessary_struct_initialization)]
#![deny(clippy::needless_borrow)]
#![deny(clippy::manual_ok_or)]
#![deny(clippy::manual_map)]
#![deny(clippy::manual_let_else)]
#![deny(clippy::manual_strip)]
#![deny(clippy::unused_self)]
#![deny(clippy::unnecessary_wraps)]
#![deny(clippy::unreachable)]
#![deny(clippy::empty_enum)]
#![deny(clippy::no_effect)]
#![deny(dropping_copy_types)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
#![deny(clippy::print_stdout)]
#![deny(clippy::dbg_macro)]
#![deny(clippy::missing_const_for_fn)]
#![deny(clippy::must_use_candidate)]
#![deny(clippy::clone_on_copy)]
#![deny(clippy::len_without_is_empty)]
#![deny(clippy::wrong_self_convention)]
#![deny(clippy::from_over_into)]
#![deny(clippy::eq_op)]
#![deny(clippy::bool_comparison)]
#![deny(clippy::needless_bool)]
#![deny(clippy::match_like_matches_macro)]
#![deny(clippy::manual_assert)]
#![deny(clippy::if_same_then_else)]
#![no_std]

//! Generic, singly linked, random access stack.
//!
//! A last-in-first-out container with O(1) front operations that also
//! exposes indexed insertion, removal, retrieval and swapping, whole-stack
//! inversion, and a size limit selectable and replaceable at runtime. The
//! indexed operations walk the chain, so they cost one traversal each; the
//! container deliberately keeps the linked representation instead of
//! trading it for an array-backed one.
//!
//! ```
//! use rastack_core_rs::RandomAccessStack;
//!
//! let mut stack = RandomAccessStack::new();
//! stack.push(2)?;
//! stack.push(1)?;
//! stack.insert_at(1, 9)?;
//! assert_eq!(stack.pop(), Some(1));
//! assert_eq!(stack.pop(), Some(9));
//! assert_eq!(stack.pop(), Some(2));
//! # Ok::<(), rastack_core_rs::StackError>(())
//! ```

extern crate alloc;

#[cfg(test)]
extern crate std;

pub mod stack;

pub use stack::{IndexSlot, RandomAccessStack, StackError, StackSize, StagedIndex};
