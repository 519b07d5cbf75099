use crate::cards::rank::Rank;

/// The paying categories of the draw game, weakest first.
///
/// Unlike a showdown ranking, kickers are irrelevant here. A hand is worth
/// exactly what its category pays, so the only payload we carry is the rank
/// of a four of a kind, which bonus tables split into separate tiers.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord)]
pub enum Ranking {
    Nothing,
    HighPair,      // Jacks or better, the minimum paying pair
    TwoPair,       // any two ranks qualify
    ThreeOAK,
    Straight,
    Flush,
    FullHouse,
    FourOAK(Rank), // rank decides the payout tier
    StraightFlush,
    RoyalFlush,
}

impl Ranking {
    /// The payout-table key for this category.
    pub fn name(&self) -> &'static str {
        match self {
            Ranking::Nothing => "nothing",
            Ranking::HighPair => "pair_jqka",
            Ranking::TwoPair => "two_pair",
            Ranking::ThreeOAK => "three_kind",
            Ranking::Straight => "straight",
            Ranking::Flush => "flush",
            Ranking::FullHouse => "full_house",
            Ranking::FourOAK(_) => "four_kind",
            Ranking::StraightFlush => "straight_flush",
            Ranking::RoyalFlush => "royal_flush",
        }
    }
}

impl std::fmt::Display for Ranking {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Ranking::Nothing => write!(f, "Nothing         "),
            Ranking::HighPair => write!(f, "HighPair        "),
            Ranking::TwoPair => write!(f, "TwoPair         "),
            Ranking::ThreeOAK => write!(f, "ThreeOfAKind    "),
            Ranking::Straight => write!(f, "Straight        "),
            Ranking::Flush => write!(f, "Flush           "),
            Ranking::FullHouse => write!(f, "FullHouse       "),
            Ranking::FourOAK(r) => write!(f, "FourOfAKind   {} ", r),
            Ranking::StraightFlush => write!(f, "StraightFlush   "),
            Ranking::RoyalFlush => write!(f, "RoyalFlush      "),
        }
    }
}
