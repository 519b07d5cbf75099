use super::card::Card;
use super::deal::Deal;
use super::draws::DrawIterator;
use super::hand::Hand;
use super::rank::Rank;
use super::suit::Suit;
use crate::Count;

/// The undealt remainder of the pack.
///
/// Replacement draws come from the cards the machine did NOT deal, whether
/// held or discarded. So the deck is always the 47-card complement of the
/// Deal, and every availability question reduces to a projection of one
/// bitset.
#[derive(Debug, Clone, Copy)]
pub struct Deck(Hand);

impl From<&Deal> for Deck {
    fn from(deal: &Deal) -> Self {
        Self(Hand::from(deal).complement())
    }
}
impl From<Deck> for Hand {
    fn from(deck: Deck) -> Self {
        deck.0
    }
}

impl Deck {
    /// how many cards remain undealt. always 47 off a five-card deal.
    pub fn n(&self) -> Count {
        self.0.size() as Count
    }

    pub fn contains(&self, card: &Card) -> bool {
        self.0.contains(card)
    }

    /// how many cards of this rank remain available to draw
    pub fn of_rank(&self, rank: &Rank) -> Count {
        self.0.of_rank(rank).size() as Count
    }

    /// how many cards of this suit remain available to draw
    pub fn of_suit(&self, suit: &Suit) -> Count {
        self.0.of_suit(suit).size() as Count
    }

    /// every distinct k-card draw from the undealt cards.
    /// exhaustive and deterministic, so it doubles as a brute-force oracle.
    pub fn draws(&self, k: usize) -> DrawIterator {
        DrawIterator::from((k, self.0.complement()))
    }
}
