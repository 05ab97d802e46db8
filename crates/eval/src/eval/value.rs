// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand value evaluation and ordering.
use ahash::AHashMap;
use std::{cmp::Ordering, fmt};

use showdown_cards::{Card, Rank};

use super::HandRank;

/// The value of a hand.
///
/// A value holds the hand category and the cards that make the category, the
/// tie-break cards are never empty and keep the order they have in the hand.
#[derive(Debug, Clone)]
pub struct HandValue {
    rank: HandRank,
    tie_break: Vec<Card>,
}

impl HandValue {
    /// Evaluates all the given cards as a single hand.
    ///
    /// Panics if `cards` is empty.
    pub fn eval(cards: &[Card]) -> HandValue {
        assert!(!cards.is_empty(), "evaluate an empty hand");

        let groups = RankGroups::new(cards);
        let distinct = groups.distinct_ranks();
        let (lowest, highest) = (distinct[0], distinct[distinct.len() - 1]);

        let flush = cards.iter().all(|c| c.suit() == cards[0].suit());

        // Five consecutive ranks with no repeated rank anywhere in the hand.
        let straight = distinct.len() == 5
            && cards.len() == 5
            && highest.value() - lowest.value() == 4;

        let royal = straight && flush && lowest == Rank::Ten;

        let of_rank = |rank: Rank| {
            cards
                .iter()
                .copied()
                .filter(|c| c.rank() == rank)
                .collect::<Vec<_>>()
        };

        let (rank, tie_break) = if royal {
            (HandRank::RoyalFlush, of_rank(Rank::Ace))
        } else if straight && flush {
            (HandRank::StraightFlush, of_rank(highest))
        } else if groups.size(0) == 4 {
            (HandRank::FourOfAKind, of_rank(groups.rank(0)))
        } else if groups.size(0) == 3 && groups.size(1) == 2 {
            let mut made = of_rank(groups.rank(0));
            made.extend(of_rank(groups.rank(1)));
            (HandRank::FullHouse, made)
        } else if flush {
            (HandRank::Flush, vec![highest_card(cards)])
        } else if straight {
            (HandRank::Straight, of_rank(highest))
        } else if groups.size(0) == 3 {
            (HandRank::ThreeOfAKind, of_rank(groups.rank(0)))
        } else if groups.size(0) == 2 && groups.size(1) == 2 {
            let mut made = of_rank(groups.rank(0));
            made.extend(of_rank(groups.rank(1)));
            (HandRank::TwoPair, made)
        } else if groups.size(0) == 2 {
            (HandRank::OnePair, of_rank(groups.rank(0)))
        } else {
            (HandRank::HighCard, vec![highest_card(cards)])
        };

        HandValue { rank, tie_break }
    }

    /// The hand category.
    pub fn rank(&self) -> HandRank {
        self.rank
    }

    /// The hand strength, see [HandRank::strength].
    pub fn strength(&self) -> u8 {
        self.rank.strength()
    }

    /// The hand category name.
    pub fn label(&self) -> &'static str {
        self.rank.label()
    }

    /// The cards that make the hand category.
    pub fn tie_break(&self) -> &[Card] {
        &self.tie_break
    }

    /// The rank of the first tie-break card.
    pub fn leading_rank(&self) -> Rank {
        self.tie_break[0].rank()
    }
}

impl Ord for HandValue {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank
            .cmp(&other.rank)
            .then_with(|| self.leading_rank().cmp(&other.leading_rank()))
    }
}

impl PartialOrd for HandValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for HandValue {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HandValue {}

impl fmt::Display for HandValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [", self.rank)?;
        for (idx, card) in self.tie_break.iter().enumerate() {
            if idx > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{card}")?;
        }
        f.write_str("]")
    }
}

/// Cards count for each rank in a hand.
///
/// Groups are sorted by descending size, groups with the same size are sorted
/// by descending rank.
struct RankGroups {
    groups: Vec<(Rank, usize)>,
}

impl RankGroups {
    fn new(cards: &[Card]) -> Self {
        let mut counts = AHashMap::<Rank, usize>::with_capacity(cards.len());
        for card in cards {
            *counts.entry(card.rank()).or_default() += 1;
        }

        let mut groups = counts.into_iter().collect::<Vec<_>>();
        groups.sort_by(|(r1, n1), (r2, n2)| n2.cmp(n1).then(r2.cmp(r1)));
        Self { groups }
    }

    /// Size of the i-th group or zero if there is no such group.
    fn size(&self, idx: usize) -> usize {
        self.groups.get(idx).map_or(0, |(_, n)| *n)
    }

    /// Rank of the i-th group, only called after checking its size.
    fn rank(&self, idx: usize) -> Rank {
        self.groups[idx].0
    }

    /// The distinct ranks in ascending order.
    fn distinct_ranks(&self) -> Vec<Rank> {
        let mut ranks = self.groups.iter().map(|(r, _)| *r).collect::<Vec<_>>();
        ranks.sort();
        ranks
    }
}

/// The first card with the highest rank.
fn highest_card(cards: &[Card]) -> Card {
    cards[1..]
        .iter()
        .fold(cards[0], |best, &c| if c.rank() > best.rank() { c } else { best })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::prelude::*;
    use showdown_cards::{Deck, Suit, parse_cards};

    fn eval(s: &str) -> HandValue {
        HandValue::eval(&parse_cards(s).unwrap())
    }

    fn cards(s: &str) -> Vec<Card> {
        parse_cards(s).unwrap()
    }

    #[test]
    fn royal_flush() {
        for suit in Suit::suits() {
            let hand = [Rank::Ten, Rank::Jack, Rank::Queen, Rank::King, Rank::Ace]
                .into_iter()
                .map(|r| Card::new(r, suit))
                .collect::<Vec<_>>();

            let v = HandValue::eval(&hand);
            assert_eq!(v.rank(), HandRank::RoyalFlush);
            assert_eq!(v.strength(), 10);
            assert_eq!(v.label(), "Royal Flush");
            assert_eq!(v.tie_break(), &[Card::new(Rank::Ace, suit)]);
        }

        // Order of the cards does not matter.
        assert_eq!(eval("AD QD TD KD JD").rank(), HandRank::RoyalFlush);
    }

    #[test]
    fn straight_flush() {
        let v = eval("5H 6H 7H 8H 9H");
        assert_eq!(v.rank(), HandRank::StraightFlush);
        assert_eq!(v.strength(), 9);
        assert_eq!(v.tie_break(), cards("9H"));

        let v = eval("9C KC QC TC JC");
        assert_eq!(v.rank(), HandRank::StraightFlush);
        assert_eq!(v.leading_rank(), Rank::King);
    }

    #[test]
    fn four_of_a_kind() {
        let v = eval("AS AH AD AC KS 2H 3D");
        assert_eq!(v.rank(), HandRank::FourOfAKind);
        assert_eq!(v.strength(), 8);
        assert_eq!(v.tie_break(), cards("AS AH AD AC"));
    }

    #[test]
    fn full_house() {
        let v = eval("KH KD AD AC KS 2H 3D");
        assert_eq!(v.rank(), HandRank::FullHouse);
        assert_eq!(v.strength(), 7);
        assert_eq!(v.tie_break(), cards("KH KD KS AD AC"));

        // With two pairs the highest pair completes the full house.
        let v = eval("3S 3H 3D 9C 9S QH QD");
        assert_eq!(v.rank(), HandRank::FullHouse);
        assert_eq!(v.tie_break(), cards("3S 3H 3D QH QD"));
    }

    #[test]
    fn two_trips_are_three_of_a_kind() {
        // The second group is not a pair so this is not a full house.
        let v = eval("KH KD KS AH AD AC 2C");
        assert_eq!(v.rank(), HandRank::ThreeOfAKind);
        assert_eq!(v.tie_break(), cards("AH AD AC"));
    }

    #[test]
    fn flush() {
        let v = eval("2S 7S 9S JS 4S");
        assert_eq!(v.rank(), HandRank::Flush);
        assert_eq!(v.strength(), 6);
        assert_eq!(v.tie_break(), cards("JS"));

        // The whole hand must share the suit.
        let v = eval("2S 7S 9S JS 4S KS 3H");
        assert_eq!(v.rank(), HandRank::HighCard);
        assert_eq!(v.tie_break(), cards("KS"));
    }

    #[test]
    fn whole_hand_is_evaluated() {
        // A royal flush plus a suited nine is six distinct ranks, a flush.
        let v = eval("TS JS QS KS AS 9S");
        assert_eq!(v.rank(), HandRank::Flush);
        assert_eq!(v.tie_break(), cards("AS"));

        // Seven cards can not make a straight.
        let v = eval("5H 6D 7C 8S 9H 2C JD");
        assert_eq!(v.rank(), HandRank::HighCard);
    }

    #[test]
    fn straight() {
        let v = eval("5H 6D 7C 8S 9H");
        assert_eq!(v.rank(), HandRank::Straight);
        assert_eq!(v.strength(), 5);
        assert_eq!(v.tie_break(), cards("9H"));

        let v = eval("AH KD QC JS TH");
        assert_eq!(v.rank(), HandRank::Straight);
        assert_eq!(v.leading_rank(), Rank::Ace);
    }

    #[test]
    fn ace_is_always_high() {
        let v = eval("AH 2D 3C 4S 5H");
        assert_eq!(v.rank(), HandRank::HighCard);
        assert_eq!(v.tie_break(), cards("AH"));
    }

    #[test]
    fn duplicate_rank_disables_straight() {
        let v = eval("TS TH JD QC KS AH");
        assert_ne!(v.rank(), HandRank::Straight);
        assert_eq!(v.rank(), HandRank::OnePair);
        assert_eq!(v.tie_break(), cards("TS TH"));

        let v = eval("5H 6D 7C 8S 9H 9D 9S");
        assert_eq!(v.rank(), HandRank::ThreeOfAKind);
        assert_eq!(v.tie_break(), cards("9H 9D 9S"));
    }

    #[test]
    fn three_of_a_kind() {
        let v = eval("7S 7H 7D 2C KS");
        assert_eq!(v.rank(), HandRank::ThreeOfAKind);
        assert_eq!(v.strength(), 4);
        assert_eq!(v.tie_break(), cards("7S 7H 7D"));
    }

    #[test]
    fn two_pair() {
        let v = eval("4S 4H JD JC 9S");
        assert_eq!(v.rank(), HandRank::TwoPair);
        assert_eq!(v.strength(), 3);
        assert_eq!(v.tie_break(), cards("JD JC 4S 4H"));

        // Three pairs use the two highest.
        let v = eval("2S 2H KS KH QS QH 9C");
        assert_eq!(v.rank(), HandRank::TwoPair);
        assert_eq!(v.tie_break(), cards("KS KH QS QH"));
    }

    #[test]
    fn one_pair() {
        let v = eval("8C 3D 8H QS 2C 6D 9H");
        assert_eq!(v.rank(), HandRank::OnePair);
        assert_eq!(v.strength(), 2);
        assert_eq!(v.tie_break(), cards("8C 8H"));
    }

    #[test]
    fn high_card() {
        let v = eval("8C 3D TH QS 2C 6D 9H");
        assert_eq!(v.rank(), HandRank::HighCard);
        assert_eq!(v.strength(), 1);
        assert_eq!(v.tie_break(), cards("QS"));

        // A single card is trivially suited.
        let v = eval("4D");
        assert_eq!(v.rank(), HandRank::Flush);
        assert_eq!(v.tie_break(), cards("4D"));
    }

    #[test]
    fn quads_beat_full_house_beat_flush() {
        let suits = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs];
        let low_flush = eval("2C 3C 4C 5C 7C");
        let high_flush = eval("AC KC QC JC 9C");
        assert_eq!(low_flush.rank(), HandRank::Flush);
        assert_eq!(high_flush.rank(), HandRank::Flush);

        for r1 in Rank::ranks() {
            for r2 in Rank::ranks().filter(|&r| r != r1) {
                let quads = suits
                    .iter()
                    .map(|&s| Card::new(r1, s))
                    .chain([Card::new(r2, Suit::Spades)])
                    .collect::<Vec<_>>();

                let boat = suits[..3]
                    .iter()
                    .map(|&s| Card::new(r2, s))
                    .chain(suits[..2].iter().map(|&s| Card::new(r1, s)))
                    .collect::<Vec<_>>();

                let quads = HandValue::eval(&quads);
                let boat = HandValue::eval(&boat);
                assert_eq!(quads.rank(), HandRank::FourOfAKind);
                assert_eq!(boat.rank(), HandRank::FullHouse);
                assert!(quads > boat, "{quads} > {boat}");
                assert!(boat > low_flush && boat > high_flush, "{boat}");
            }
        }
    }

    #[test]
    fn tie_break_uses_leading_card_only() {
        let v1 = eval("KS KH 2C 5D 9H");
        let v2 = eval("KD KC AS QH JD");
        assert_eq!(v1.rank(), HandRank::OnePair);
        assert_eq!(v2.rank(), HandRank::OnePair);
        assert_eq!(v1.cmp(&v2), Ordering::Equal);
        assert_eq!(v1, v2);

        // Two pair only compares the first pair.
        let v1 = eval("AS AH 2C 2D 9H");
        let v2 = eval("AD AC KS KH 3D");
        assert_eq!(v1, v2);
    }

    #[test]
    fn same_category_leading_rank() {
        assert!(eval("AS AH 2C 5D 9H") > eval("KD KC AS QH JD"));
        assert!(eval("2S 7S 9S JS 4S") < eval("2H 7H 9H QH 4H"));
        assert!(eval("5H 6D 7C 8S 9H") < eval("6H 7D 8C 9S TH"));
        assert!(eval("8C 3D TH QS 2C") < eval("8D 3C TS KH 2D"));
    }

    #[test]
    fn display() {
        assert_eq!(
            eval("AS AH AD AC KS 2H 3D").to_string(),
            "Four of a Kind [AS AH AD AC]"
        );
        assert_eq!(eval("8C 3D TH QS 2C").to_string(), "High Card [QS]");
    }

    #[test]
    fn random_hands() {
        let mut rng = StdRng::seed_from_u64(101);

        for _ in 0..2_000 {
            let mut deck = Deck::new_and_shuffled(&mut rng);
            let board = deck.deal_shared_cards();

            let mut h1 = deck.deal_private_hand().to_vec();
            h1.extend(board);
            let mut h2 = deck.deal_private_hand().to_vec();
            h2.extend(board);

            let (v1, v2) = (HandValue::eval(&h1), HandValue::eval(&h2));
            assert!(!v1.tie_break().is_empty());
            assert!(v1.tie_break().iter().all(|c| h1.contains(c)));
            assert_eq!(v1.cmp(&v2), v2.cmp(&v1).reverse());

            // Straights need exactly five cards.
            assert!(!matches!(
                v1.rank(),
                HandRank::Straight | HandRank::StraightFlush | HandRank::RoyalFlush
            ));
        }
    }

    #[test]
    #[should_panic(expected = "empty hand")]
    fn empty_hand() {
        HandValue::eval(&[]);
    }
}
