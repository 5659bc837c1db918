/// Game configuration constants.
/// 
/// Dimensions of the noughts-and-crosses board.
pub const BOARD_SIZE: usize = 3; // Rows and columns.

/// Number of aligned marks needed to win.
pub const WIN_LENGTH: usize = 3;
