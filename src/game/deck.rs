//! Deck dealing and card views.
//!
//! A deck for `k` pairs holds `2k` cards at positions `0..2k`. Each chosen
//! vocabulary item is dealt exactly twice under the same `PairId`, then the
//! whole deck is uniformly shuffled.
//!
//! The deck is backed by `im::Vector`, so handing a copy to a renderer or a
//! test is O(1).

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::GameRng;
use crate::vocab::VocabularyItem;

/// Identifies which chosen item a card was dealt from.
///
/// Pair ids are indices into the chosen subset of the pool, so two pool
/// entries with equal terms still get distinct ids.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PairId(pub usize);

impl PairId {
    /// Create a new pair ID.
    #[must_use]
    pub const fn new(id: usize) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for PairId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Pair({})", self.0)
    }
}

/// One dealt card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardRef {
    /// Slot in the grid.
    pub position: usize,

    /// Which chosen item this card was dealt from.
    pub pair: PairId,

    /// The word on the card's face.
    pub item: VocabularyItem,
}

/// What the presentation layer may show for a slot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SlotState {
    /// Hidden. The only state exposed when a game starts.
    FaceDown,
    /// Revealed and waiting for its pair to resolve.
    FaceUp(VocabularyItem),
    /// Permanently matched.
    Matched(VocabularyItem),
}

/// A renderable grid slot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardSlot {
    pub position: usize,
    pub state: SlotState,
}

impl CardSlot {
    /// A hidden slot.
    #[must_use]
    pub fn face_down(position: usize) -> Self {
        Self {
            position,
            state: SlotState::FaceDown,
        }
    }

    /// Check if the slot is hidden.
    #[must_use]
    pub fn is_face_down(&self) -> bool {
        self.state == SlotState::FaceDown
    }
}

/// Shuffled sequence of paired cards for one play-through.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vector<CardRef>,
    pair_count: usize,
}

impl Deck {
    /// A deck with no cards (the degenerate, already completed game).
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Deal every item twice and shuffle.
    pub fn deal(items: &[VocabularyItem], rng: &mut GameRng) -> Self {
        let mut dealt: Vec<(PairId, &VocabularyItem)> = items
            .iter()
            .enumerate()
            .flat_map(|(index, item)| {
                let pair = PairId::new(index);
                [(pair, item), (pair, item)]
            })
            .collect();

        rng.shuffle(&mut dealt);

        let cards = dealt
            .into_iter()
            .enumerate()
            .map(|(position, (pair, item))| CardRef {
                position,
                pair,
                item: item.clone(),
            })
            .collect();

        Self {
            cards,
            pair_count: items.len(),
        }
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the deck has no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of pairs dealt.
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.pair_count
    }

    /// Get the card at a position.
    #[must_use]
    pub fn get(&self, position: usize) -> Option<&CardRef> {
        self.cards.get(position)
    }

    /// Iterate over cards in position order.
    pub fn iter(&self) -> impl Iterator<Item = &CardRef> {
        self.cards.iter()
    }

    /// Position of the other card dealt from the same item.
    #[must_use]
    pub fn partner(&self, position: usize) -> Option<usize> {
        let pair = self.get(position)?.pair;
        self.cards
            .iter()
            .find(|card| card.pair == pair && card.position != position)
            .map(|card| card.position)
    }

    /// All slots face-down, for the initial grid.
    #[must_use]
    pub fn face_down_slots(&self) -> Vec<CardSlot> {
        (0..self.len()).map(CardSlot::face_down).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(terms: &[&str]) -> Vec<VocabularyItem> {
        terms
            .iter()
            .map(|t| VocabularyItem::new(*t, format!("{t}-es")))
            .collect()
    }

    #[test]
    fn test_deal_shape() {
        let mut rng = GameRng::new(42);
        let deck = Deck::deal(&items(&["A", "B", "C"]), &mut rng);

        assert_eq!(deck.len(), 6);
        assert_eq!(deck.pair_count(), 3);

        for (expected, card) in deck.iter().enumerate() {
            assert_eq!(card.position, expected);
        }

        for pair in 0..3 {
            let count = deck.iter().filter(|c| c.pair == PairId::new(pair)).count();
            assert_eq!(count, 2);
        }
    }

    #[test]
    fn test_deal_is_seeded() {
        let pool = items(&["A", "B", "C", "D"]);
        let a = Deck::deal(&pool, &mut GameRng::new(7));
        let b = Deck::deal(&pool, &mut GameRng::new(7));
        assert_eq!(a, b);
    }

    #[test]
    fn test_partner() {
        let deck = Deck::deal(&items(&["A", "B"]), &mut GameRng::new(3));

        for card in deck.iter() {
            let partner = deck.partner(card.position).unwrap();
            assert_ne!(partner, card.position);
            assert_eq!(deck.get(partner).unwrap().pair, card.pair);
        }

        assert_eq!(deck.partner(99), None);
    }

    #[test]
    fn test_equal_terms_keep_distinct_pairs() {
        let pool = vec![
            VocabularyItem::new("Papa", "Papa/Patata"),
            VocabularyItem::new("Papa", "Padre"),
        ];
        let deck = Deck::deal(&pool, &mut GameRng::new(1));

        let mut pairs: Vec<_> = deck.iter().map(|c| c.pair).collect();
        pairs.sort();
        assert_eq!(
            pairs,
            [PairId::new(0), PairId::new(0), PairId::new(1), PairId::new(1)]
        );
    }

    #[test]
    fn test_empty_deck() {
        let deck = Deck::empty();
        assert!(deck.is_empty());
        assert_eq!(deck.pair_count(), 0);
        assert!(deck.face_down_slots().is_empty());
    }

    #[test]
    fn test_face_down_slots() {
        let deck = Deck::deal(&items(&["A", "B"]), &mut GameRng::new(5));
        let slots = deck.face_down_slots();

        assert_eq!(slots.len(), 4);
        assert!(slots.iter().all(CardSlot::is_face_down));
        assert_eq!(slots[3].position, 3);
    }

    #[test]
    fn test_slot_json() {
        let hidden = serde_json::to_value(CardSlot::face_down(2)).unwrap();
        assert_eq!(hidden["position"], 2);
        assert_eq!(hidden["state"]["state"], "face_down");

        let shown = CardSlot {
            position: 0,
            state: SlotState::FaceUp(VocabularyItem::new("Inti", "Sol")),
        };
        let value = serde_json::to_value(&shown).unwrap();
        assert_eq!(value["state"]["state"], "face_up");
        assert_eq!(value["state"]["term"], "Inti");
    }
}
