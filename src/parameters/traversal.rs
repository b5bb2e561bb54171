/// Defines how experiment directories are discovered below the root.
///
/// Is used in [`Cleaner::traversal`](crate::Cleaner::traversal) and
/// [`Collector::traversal`](crate::Collector::traversal).
///
/// The historical per-site maintenance scripts differed exactly in this
/// point: one site kept all experiments as immediate children of the
/// simulation root, the other grouped them in nested subdirectories.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Traversal {
    /// Only the immediate subdirectories of the root are visited.
    TopLevel,

    /// Every directory below the root is visited, arbitrarily deep,
    /// parents before children.
    Recursive,
}
