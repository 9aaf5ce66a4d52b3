use super::StackSize;

#[test]
fn limitless_always_grows() {
  let size = StackSize::limitless();
  assert!(size.is_limitless());
  assert!(size.can_grow(0));
  assert!(size.can_grow(usize::MAX - 1));
  assert_eq!(size.to_usize(), usize::MAX);
}

#[test]
fn limited_grows_strictly_below_the_limit() {
  let size = StackSize::limited(2);
  assert!(!size.is_limitless());
  assert!(size.can_grow(0));
  assert!(size.can_grow(1));
  assert!(!size.can_grow(2));
  assert!(!size.can_grow(3));
  assert_eq!(size.to_usize(), 2);
}

#[test]
fn zero_limit_never_grows() {
  assert!(!StackSize::limited(0).can_grow(0));
}
