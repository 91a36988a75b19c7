/// Supplies target coordinates to the round loop.
///
/// A source only proposes coordinates; legality is decided by the board, and
/// the loop simply asks again after a rejected move.
pub trait MoveSource: Send {
    /// Draw `(x, y)`, each axis independently uniform over `0..span`.
    fn next_coord(&mut self, span: usize) -> (usize, usize);

    /// Return the source's display name.
    fn name(&self) -> &str;
}
