#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Suit {
    #[default]
    Club = 0,
    Diamond = 1,
    Heart = 2,
    Spade = 3,
}

impl Suit {
    pub fn all() -> [Suit; 4] {
        [Suit::Club, Suit::Diamond, Suit::Heart, Suit::Spade]
    }
}

/// u8 isomorphism
impl From<u8> for Suit {
    fn from(n: u8) -> Suit {
        match n {
            0 => Suit::Club,
            1 => Suit::Diamond,
            2 => Suit::Heart,
            3 => Suit::Spade,
            _ => panic!("Invalid suit u8: {}", n),
        }
    }
}
impl From<Suit> for u8 {
    fn from(s: Suit) -> u8 {
        s as u8
    }
}

/// u64 injection
///
/// one bit per rank in the 52-bit card layout, selecting this suit's column
impl From<Suit> for u64 {
    fn from(s: Suit) -> u64 {
        0x1111111111111 << u8::from(s)
    }
}

/// str isomorphism, case-insensitive
impl TryFrom<&str> for Suit {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "c" => Ok(Suit::Club),
            "d" => Ok(Suit::Diamond),
            "h" => Ok(Suit::Heart),
            "s" => Ok(Suit::Spade),
            _ => Err(format!("invalid suit: {}", s)),
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Suit::Club => "c",
                Suit::Diamond => "d",
                Suit::Heart => "h",
                Suit::Spade => "s",
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_u8() {
        let suit = Suit::Heart;
        assert!(suit == Suit::from(u8::from(suit)));
    }

    #[test]
    fn parse_case_insensitive() {
        assert_eq!(Suit::try_from("D"), Ok(Suit::Diamond));
        assert_eq!(Suit::try_from("d"), Ok(Suit::Diamond));
        assert!(Suit::try_from("x").is_err());
    }

    #[test]
    fn column_masks_partition_the_deck() {
        let union = Suit::all()
            .iter()
            .map(|s| u64::from(*s))
            .fold(0u64, |a, b| a | b);
        assert_eq!(union, (1u64 << 52) - 1);
    }
}
