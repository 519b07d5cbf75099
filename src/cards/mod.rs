pub mod card;
pub mod deal;
pub mod deck;
pub mod draws;
pub mod hand;
pub mod rank;
pub mod suit;

pub use card::*;
pub use deal::*;
pub use deck::*;
pub use draws::*;
pub use hand::*;
pub use rank::*;
pub use suit::*;
