use super::card::Card;
use super::rank::Rank;
use super::suit::Suit;
use crate::Arbitrary;

/// Hand represents an unordered set of Cards. stored as a u64, but only needs LSB bitstring of 52 bits. Each bit represents a unique card in the (unordered) set. this avoids heap allocation and makes set algebra (union, complement, suit and rank projections) single-instruction cheap, which is what the draw counting leans on.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Hand(u64);

impl Hand {
    pub fn empty() -> Self {
        Self(0)
    }

    pub fn add(lhs: Self, rhs: Self) -> Self {
        assert!(u64::from(lhs) & u64::from(rhs) == 0);
        Self(lhs.0 | rhs.0)
    }

    pub fn complement(&self) -> Self {
        Self(self.0 ^ Self::mask())
    }
    pub fn size(&self) -> usize {
        self.0.count_ones() as usize
    }
    pub fn contains(&self, card: &Card) -> bool {
        self.0 & u64::from(*card) != 0
    }
    pub fn of_suit(&self, suit: &Suit) -> Self {
        Self(self.0 & u64::from(*suit))
    }
    pub fn of_rank(&self, rank: &Rank) -> Self {
        Self(self.0 & u64::from(*rank))
    }

    pub fn remove(&mut self, card: Card) {
        let card = u8::from(card);
        let mask = !(1 << card);
        self.0 &= mask;
    }

    const fn mask() -> u64 {
        0x000FFFFFFFFFFFFF
    }
}

/// we can empty a hand from low to high
/// by removing the lowest card until the hand is empty
impl Iterator for Hand {
    type Item = Card;
    fn next(&mut self) -> Option<Self::Item> {
        if self.size() == 0 {
            None
        } else {
            let card = self.0.trailing_zeros() as u8;
            let card = Card::from(card);
            self.remove(card);
            Some(card)
        }
    }
}

/// u64 isomorphism
/// we SUM/OR the cards to get the bitstring
/// [2c, Ts, Jc, Js]
/// xxxxxxxxxxxx 0000000010011000000000000000000000000000000000000001
impl From<u64> for Hand {
    fn from(n: u64) -> Self {
        Self(n & Self::mask())
    }
}
impl From<Hand> for u64 {
    fn from(h: Hand) -> Self {
        h.0
    }
}

impl From<Card> for Hand {
    fn from(card: Card) -> Self {
        Self(u64::from(card))
    }
}

/// Vec<Card> isomorphism (up to Vec permutation, this always comes out sorted)
impl From<Hand> for Vec<Card> {
    fn from(h: Hand) -> Self {
        h.into_iter().collect()
    }
}
impl From<Vec<Card>> for Hand {
    fn from(cards: Vec<Card>) -> Self {
        Self(
            cards
                .into_iter()
                .map(|c| u64::from(c))
                .fold(0u64, |a, b| a | b),
        )
    }
}

/// one-way projection onto u16 Rank masks
/// collapses the four suit bits of each rank nibble into a single presence bit
impl From<Hand> for u16 {
    fn from(h: Hand) -> Self {
        let mut x = u64::from(h);
        x |= x >> 1;
        x |= x >> 2;
        x &= 0x1111111111111;
        (0..13).fold(0u16, |y, r| y | (((x >> (r * 3)) as u16) & (1 << r)))
    }
}

/// str isomorphism
/// this follows from Vec<Card> isomorphism
impl TryFrom<&str> for Hand {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Ok(Self::from(Card::parse(s)?))
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for card in Vec::<Card>::from(*self) {
            write!(f, "{}", card)?;
        }
        Ok(())
    }
}

impl Arbitrary for Hand {
    fn random() -> Self {
        use rand::Rng;
        let ref mut rng = rand::rng();
        Self(rng.random::<u64>() & Self::mask())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_u64() {
        let hand = Hand::random();
        assert_eq!(hand, Hand::from(u64::from(hand)));
    }

    #[test]
    fn card_iteration() {
        let mut iter = Hand::try_from("Jc Ts 2c Js").unwrap().into_iter();
        assert_eq!(iter.next(), Card::try_from("2c").ok());
        assert_eq!(iter.next(), Card::try_from("Ts").ok());
        assert_eq!(iter.next(), Card::try_from("Jc").ok());
        assert_eq!(iter.next(), Card::try_from("Js").ok());
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn ranks_in_suit() {
        let hand = Hand::try_from("2c 3d 4h 5s 6c 7d 8h 9s Tc Jd Qh Ks Ac").unwrap();
        assert_eq!(u16::from(hand.of_suit(&Suit::Club)), 0b_1000100010001);
        assert_eq!(u16::from(hand.of_suit(&Suit::Diamond)), 0b_0001000100010);
        assert_eq!(u16::from(hand.of_suit(&Suit::Heart)), 0b_0010001000100);
        assert_eq!(u16::from(hand.of_suit(&Suit::Spade)), 0b_0100010001000);
    }

    #[test]
    fn cards_in_rank() {
        let hand = Hand::try_from("7c 7s 2c Ah").unwrap();
        assert_eq!(hand.of_rank(&Rank::Seven).size(), 2);
        assert_eq!(hand.of_rank(&Rank::Ace).size(), 1);
        assert_eq!(hand.of_rank(&Rank::King).size(), 0);
    }

    #[test]
    fn complement_partition() {
        let hand = Hand::random();
        let rest = hand.complement();
        assert_eq!(hand.size() + rest.size(), 52);
        assert_eq!(u64::from(hand) & u64::from(rest), 0);
    }
}
