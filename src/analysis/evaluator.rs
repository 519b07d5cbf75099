use super::ranking::Ranking;
use crate::cards::deal::Deal;
use crate::cards::hand::Hand;
use crate::cards::rank::Rank;
use crate::cards::suit::Suit;

const WHEEL: u16 = 0b_1000000001111;
const ROYAL: u16 = 0b_1111100000000;

/// Classifies a fully-formed five-card hand into its paying category.
///
/// Works on the compact Hand representation with bitwise rank and suit
/// projections. Categories are probed in descending strength order, so the
/// first match is the hand's one category. Scores the stand-pat option and
/// doubles as the oracle for brute-force verification of the counting engine.
pub struct Evaluator(Hand);

impl From<Hand> for Evaluator {
    fn from(h: Hand) -> Self {
        Self(h)
    }
}
impl From<&Deal> for Evaluator {
    fn from(deal: &Deal) -> Self {
        Self(Hand::from(deal))
    }
}

impl Evaluator {
    pub fn classify(&self) -> Ranking {
        None.or_else(|| self.find_royal_flush())
            .or_else(|| self.find_straight_flush())
            .or_else(|| self.find_four_kind())
            .or_else(|| self.find_full_house())
            .or_else(|| self.find_flush())
            .or_else(|| self.find_straight())
            .or_else(|| self.find_three_kind())
            .or_else(|| self.find_two_pair())
            .or_else(|| self.find_high_pair())
            .unwrap_or(Ranking::Nothing)
    }

    fn find_royal_flush(&self) -> Option<Ranking> {
        self.find_suit_of_flush()
            .filter(|suit| u16::from(self.0.of_suit(suit)) == ROYAL)
            .map(|_| Ranking::RoyalFlush)
    }
    fn find_straight_flush(&self) -> Option<Ranking> {
        self.find_suit_of_flush()
            .and_then(|suit| self.find_rank_of_straight(self.0.of_suit(&suit)))
            .map(|_| Ranking::StraightFlush)
    }
    fn find_four_kind(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(4, None).map(Ranking::FourOAK)
    }
    fn find_full_house(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(3, None)
            .and_then(|trips| self.find_rank_of_n_oak(2, Some(trips)))
            .map(|_| Ranking::FullHouse)
    }
    fn find_flush(&self) -> Option<Ranking> {
        self.find_suit_of_flush().map(|_| Ranking::Flush)
    }
    fn find_straight(&self) -> Option<Ranking> {
        self.find_rank_of_straight(self.0).map(|_| Ranking::Straight)
    }
    fn find_three_kind(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(3, None).map(|_| Ranking::ThreeOAK)
    }
    fn find_two_pair(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(2, None)
            .and_then(|hi| self.find_rank_of_n_oak(2, Some(hi)))
            .map(|_| Ranking::TwoPair)
    }
    fn find_high_pair(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(2, None)
            .filter(|rank| *rank >= Rank::Jack)
            .map(|_| Ranking::HighPair)
    }

    /// contiguous-run detection by shift-and-mask, with the ace-low wheel
    /// special-cased
    fn find_rank_of_straight(&self, hand: Hand) -> Option<Rank> {
        let ranks = u16::from(hand);
        let mut bits = ranks;
        bits &= bits << 1;
        bits &= bits << 1;
        bits &= bits << 1;
        bits &= bits << 1;
        if bits > 0 {
            Some(Rank::from(bits))
        } else if WHEEL == WHEEL & ranks {
            Some(Rank::Five)
        } else {
            None
        }
    }
    fn find_suit_of_flush(&self) -> Option<Suit> {
        Suit::all()
            .iter()
            .find(|suit| self.0.of_suit(suit).size() >= 5)
            .copied()
    }
    fn find_rank_of_n_oak(&self, n: usize, skip: Option<Rank>) -> Option<Rank> {
        Rank::all()
            .iter()
            .rev()
            .filter(|rank| Some(**rank) != skip)
            .find(|rank| self.0.of_rank(rank).size() >= n)
            .copied()
    }
}
