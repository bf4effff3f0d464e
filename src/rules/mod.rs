//! Game rules for five-in-a-row.

mod win;

pub use win::{check_winner, WIN_LEN};
