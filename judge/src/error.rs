use ttt::IllegalMark;
use ttt_bots::NoLegalMove;

#[derive(Debug)]
/// Error type for one turn.
pub enum IllegalMove {
    /// The bot did not come up with a move.
    NoMoveChosen(NoLegalMove),
    /// The board did not accept the bot's move.
    RejectedMark { number: usize, err: IllegalMark },
}

impl std::error::Error for IllegalMove {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            IllegalMove::NoMoveChosen(err) => Some(err),
            IllegalMove::RejectedMark { err, .. } => Some(err),
        }
    }
}

impl std::fmt::Display for IllegalMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IllegalMove::NoMoveChosen(_) => write!(f, "The bot did not choose a move"),
            IllegalMove::RejectedMark { number, err: _ } => {
                write!(f, "The bot chose cell {}, which could not be marked", number)
            }
        }
    }
}
