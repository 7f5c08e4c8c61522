/// The error type for [`Bot::choose()`](crate::Bot::choose), returned when asked
/// to move on a board without unmarked cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NoLegalMove;

impl std::error::Error for NoLegalMove {}

impl std::fmt::Display for NoLegalMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "A move was requested, but every cell is already marked")
    }
}
