use super::error::Error;
use super::held::Held;
use super::hold::Hold;
use crate::cards::card::Card;
use crate::cards::deal::Deal;
use crate::cards::deck::Deck;
use crate::cards::rank::Rank;
use crate::cards::suit::Suit;
use crate::Count;

/// the ten five-rank runs, ace-low wheel first, royal last
const RUNS: [u16; 10] = [
    0b_1000000001111, // A2345
    0b_0000000011111, // 23456
    0b_0000000111110, // 34567
    0b_0000001111100, // 45678
    0b_0000011111000, // 56789
    0b_0000111110000, // 6789T
    0b_0001111100000, // 789TJ
    0b_0011111000000, // 89TJQ
    0b_0111110000000, // 9TJQK
    0b_1111100000000, // TJQKA
];
const ROYAL: u16 = 0b_1111100000000;

/// exact binomial coefficient
/// the fold stays in integers because every prefix product is divisible
pub fn choose(n: Count, k: Count) -> Count {
    match k <= n {
        true => (0..k).fold(1, |x, i| x * (n - i) / (i + 1)),
        false => 0,
    }
}

/// Exact winning-draw counts for one hold pattern.
///
/// Every category is a closed-form count over the deck's rank and suit
/// availabilities. No draw is ever enumerated. Four of a kind is kept per
/// rank so payout tables can split bonus ranks into their own tiers without
/// recounting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Counts {
    pub total: Count,
    pub royal_flush: Count,
    pub straight_flush: Count,
    pub four_kind: [Count; 13],
    pub full_house: Count,
    pub flush: Count,
    pub straight: Count,
    pub three_kind: Count,
    pub two_pair: Count,
    pub pair_jqka: Count,
    pub nothing: Count,
}

impl Counts {
    /// four-of-a-kind draws across all ranks
    pub fn quads(&self) -> Count {
        self.four_kind.iter().sum()
    }
    /// every paying draw
    pub fn winners(&self) -> Count {
        self.royal_flush
            + self.straight_flush
            + self.quads()
            + self.full_house
            + self.flush
            + self.straight
            + self.three_kind
            + self.two_pair
            + self.pair_jqka
    }
}

/// The counting engine for one hold pattern of one deal.
///
/// Categories whose identity is a rank multiset (quads, boats, trips, pairs)
/// are counted exactly and are mutually exclusive by construction, since each
/// formula fixes the complete shape of the final hand. The sequence and suit
/// family (royal, straight flush, flush, straight) is counted raw and
/// resolved by subtraction in [`Counter::counts`], the single place where
/// category precedence is applied.
pub struct Counter {
    held: Held,
    deck: Deck,
    draws: usize,
}

impl TryFrom<(&Deal, &Hold)> for Counter {
    type Error = Error;
    fn try_from((deal, hold): (&Deal, &Hold)) -> Result<Self, Self::Error> {
        Ok(Self {
            held: Held::try_from(hold.apply(deal))?,
            deck: Deck::from(deal),
            draws: hold.discards(),
        })
    }
}

impl Counter {
    /// count every category and resolve the overlapping family, high to low
    pub fn counts(&self) -> Counts {
        let total = choose(self.deck.n(), self.draws as Count);
        let royals = self.royals();
        let suited = self.suited_runs();
        let royal_flush = royals;
        let straight_flush = suited - royals;
        let flush = self.flushes() - suited;
        let straight = self.straights() - suited;
        let four_kind = self.quads();
        let full_house = self.full_houses();
        let three_kind = self.trips();
        let two_pair = self.two_pairs();
        let pair_jqka = self.high_pairs();
        let counts = Counts {
            total,
            royal_flush,
            straight_flush,
            four_kind,
            full_house,
            flush,
            straight,
            three_kind,
            two_pair,
            pair_jqka,
            nothing: 0,
        };
        Counts {
            nothing: total - counts.winners(),
            ..counts
        }
    }

    /// raw count of draws completing the royal run in some suit
    fn royals(&self) -> Count {
        Suit::all()
            .iter()
            .filter(|suit| self.completes(suit, ROYAL))
            .count() as Count
    }

    /// raw count of draws completing any run in one suit, royals included
    fn suited_runs(&self) -> Count {
        RUNS.iter()
            .map(|run| {
                Suit::all()
                    .iter()
                    .filter(|suit| self.completes(suit, *run))
                    .count() as Count
            })
            .sum()
    }

    /// a run in a suit completes iff every held card belongs to it and every
    /// missing card of it is still in the deck. at most one draw can do so.
    fn completes(&self, suit: &Suit, run: u16) -> bool {
        self.held.in_suit(suit) == self.held.n()
            && self.held.mask() & !run == 0
            && Rank::all()
                .iter()
                .filter(|rank| u16::from(**rank) & run != 0)
                .map(|rank| Card::from((*rank, *suit)))
                .all(|card| self.held.contains(&card) || self.deck.contains(&card))
    }

    /// raw count of draws completing five cards of one suit, runs included
    fn flushes(&self) -> Count {
        Suit::all()
            .iter()
            .filter(|suit| self.held.in_suit(suit) == self.held.n())
            .map(|suit| choose(self.deck.of_suit(suit), self.draws as Count))
            .sum()
    }

    /// raw count of draws completing five sequential ranks, suits free
    fn straights(&self) -> Count {
        match self.held.pairless() {
            false => 0,
            true => RUNS
                .iter()
                .filter(|run| self.held.mask() & !*run == 0)
                .map(|run| {
                    Rank::all()
                        .iter()
                        .filter(|rank| u16::from(**rank) & *run != 0)
                        .filter(|rank| self.held.count(rank) == 0)
                        .map(|rank| self.deck.of_rank(rank))
                        .product::<Count>()
                })
                .sum(),
        }
    }

    /// exact per-rank count of draws completing four of that rank plus one
    /// side card of any other rank
    fn quads(&self) -> [Count; 13] {
        let mut quads = [0; 13];
        for rank in Rank::all() {
            let held = self.held.count(&rank);
            let side = self.held.n() as Count - held;
            let avail = self.deck.of_rank(&rank);
            quads[u8::from(rank) as usize] = match side {
                0 => choose(avail, 4 - held) * (self.deck.n() - avail),
                1 => choose(avail, 4 - held),
                _ => 0,
            };
        }
        quads
    }

    /// exact count of draws completing three of one rank and a pair of another
    fn full_houses(&self) -> Count {
        let ranks = Rank::all();
        ranks
            .iter()
            .flat_map(|x| ranks.iter().filter(move |y| y != &x).map(move |y| (x, y)))
            .filter(|(x, y)| self.held.n() as Count == self.held.count(x) + self.held.count(y))
            .filter(|(x, y)| self.held.count(x) <= 3 && self.held.count(y) <= 2)
            .map(|(x, y)| {
                choose(self.deck.of_rank(x), 3 - self.held.count(x))
                    * choose(self.deck.of_rank(y), 2 - self.held.count(y))
            })
            .sum()
    }

    /// exact count of draws completing three of a rank and two distinct side
    /// singles
    fn trips(&self) -> Count {
        Rank::all()
            .iter()
            .filter(|x| self.held.count(x) <= 3)
            .filter(|x| self.held.ranks().all(|(r, suits)| r == *x || suits.len() == 1))
            .filter_map(|x| {
                let held = self.held.count(x);
                let singles = self.held.n() as Count - held;
                match singles <= 2 {
                    true => Some(
                        choose(self.deck.of_rank(x), 3 - held)
                            * self.kickers(self.held.mask() | u16::from(*x), 2 - singles as usize),
                    ),
                    false => None,
                }
            })
            .sum()
    }

    /// exact count of draws completing two distinct pairs and one odd card
    fn two_pairs(&self) -> Count {
        let ranks = Rank::all();
        ranks
            .iter()
            .enumerate()
            .flat_map(|(i, x)| ranks.iter().skip(i + 1).map(move |y| (x, y)))
            .filter(|(x, y)| self.held.count(x) <= 2 && self.held.count(y) <= 2)
            .filter_map(|(x, y)| {
                let spare = self
                    .held
                    .ranks()
                    .filter(|(r, _)| r != &x && r != &y)
                    .collect::<Vec<_>>();
                let kicker = match spare.as_slice() {
                    [] => self.kickers(self.held.mask() | u16::from(*x) | u16::from(*y), 1),
                    [(_, suits)] if suits.len() == 1 => 1,
                    _ => return None,
                };
                Some(
                    choose(self.deck.of_rank(x), 2 - self.held.count(x))
                        * choose(self.deck.of_rank(y), 2 - self.held.count(y))
                        * kicker,
                )
            })
            .sum()
    }

    /// exact count of draws completing one pair of Jacks or better and three
    /// distinct side singles
    fn high_pairs(&self) -> Count {
        [Rank::Jack, Rank::Queen, Rank::King, Rank::Ace]
            .iter()
            .filter(|p| self.held.count(p) <= 2)
            .filter(|p| self.held.ranks().all(|(r, suits)| r == *p || suits.len() == 1))
            .filter_map(|p| {
                let held = self.held.count(p);
                let singles = self.held.n() as Count - held;
                match singles <= 3 {
                    true => Some(
                        choose(self.deck.of_rank(p), 2 - held)
                            * self.kickers(self.held.mask() | u16::from(*p), 3 - singles as usize),
                    ),
                    false => None,
                }
            })
            .sum()
    }

    /// ways to draw k side cards of k distinct non-excluded ranks, one card
    /// each. elementary symmetric sum over per-rank availabilities.
    fn kickers(&self, excluded: u16, k: usize) -> Count {
        let mut ways = vec![0 as Count; k + 1];
        ways[0] = 1;
        Rank::all()
            .iter()
            .filter(|rank| u16::from(**rank) & excluded == 0)
            .map(|rank| self.deck.of_rank(rank))
            .for_each(|avail| {
                for j in (1..=k).rev() {
                    ways[j] += ways[j - 1] * avail;
                }
            });
        ways[k]
    }
}
