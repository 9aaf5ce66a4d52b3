/// Names which index argument of an indexed operation failed validation.
///
/// Two-index operations validate their arguments in order and report the one
/// that reached past the current length; single-index operations report
/// [`IndexSlot::First`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IndexSlot {
  /// The first (or only) index argument.
  First,
  /// The second index argument.
  Second,
}
