/// Identifier for a flower in a [`crate::garden::Garden`].
///
/// This is an index into the garden's append-only flower list, and is
/// only meaningful within the lifetime of a given `Garden` instance.
pub type FlowerId = usize;
