//! Property tests for board construction, agent guessing and turn flow.

use proptest::prelude::*;
use rustc_hash::FxHashMap;

use memory_match::agents::Agent;
use memory_match::board::Board;
use memory_match::cards::{CardFace, CardId, Symbol};
use memory_match::core::{GameRng, PlayerId};
use memory_match::game::GameBuilder;

fn face(id: u32, card_count: u32) -> CardFace {
    CardFace {
        id: CardId(id),
        symbol: Symbol((id % (card_count / 2)) as u16),
    }
}

/// Agent over `card_count` ids that has seen `seen` and watched `matched` pairs go.
///
/// Symbols follow `id % (card_count / 2)`, so id `i` pairs with `i + card_count / 2`.
fn agent_with_history(card_count: u32, seen: &[u32], matched: &[u32]) -> Agent {
    let mut agent = Agent::new(PlayerId::new(0), "red", (0..card_count).map(CardId));
    let faces: Vec<_> = seen.iter().map(|&id| face(id % card_count, card_count)).collect();
    agent.update_known_cards(&faces);

    let half = card_count / 2;
    for &id in matched {
        let low = id % half;
        agent.handle_matched_cards(&[face(low, card_count), face(low + half, card_count)]);
    }
    agent
}

proptest! {
    #[test]
    fn prop_board_has_each_symbol_twice(n in prop::sample::select(vec![4usize, 16, 20, 24]), seed in any::<u64>()) {
        let board = Board::random(n, &mut GameRng::new(seed)).unwrap();

        let mut counts: FxHashMap<Symbol, usize> = FxHashMap::default();
        for card in board.cards() {
            *counts.entry(card.symbol()).or_default() += 1;
        }
        prop_assert_eq!(counts.len(), n / 2);
        prop_assert!(counts.values().all(|&count| count == 2));
        prop_assert_eq!(board.rows() * board.cols(), n);
    }

    #[test]
    fn prop_first_guess_is_available(
        seen in prop::collection::vec(0u32..16, 0..12),
        matched in prop::collection::vec(0u32..8, 0..7),
        seed in any::<u64>(),
    ) {
        let agent = agent_with_history(16, &seen, &matched);
        let mut rng = GameRng::new(seed);

        let guess = agent.first_guess(&mut rng).unwrap();
        prop_assert!(agent.memory().is_available(guess));
    }

    #[test]
    fn prop_second_guess_differs_from_first(
        seen in prop::collection::vec(0u32..16, 0..12),
        matched in prop::collection::vec(0u32..8, 0..7),
        seed in any::<u64>(),
    ) {
        let agent = agent_with_history(16, &seen, &matched);
        let mut rng = GameRng::new(seed);

        let first_id = agent.first_guess(&mut rng).unwrap();
        let first = face(first_id.raw(), 16);
        let second = agent.second_guess(first, &mut rng).unwrap();
        prop_assert_ne!(second, first_id);
        prop_assert!(agent.memory().is_available(second));
    }

    #[test]
    fn prop_matched_broadcast_clears_every_agent(seed in any::<u64>(), players in 2usize..=4) {
        let mut game = GameBuilder::new().card_count(16).player_count(players).build(seed).unwrap();

        while !game.is_game_over() {
            let outcome = game.make_move().unwrap();
            if !outcome.is_match() {
                continue;
            }
            for (_, agent) in game.agents().iter() {
                let memory = agent.memory();
                for card in [outcome.first, outcome.second] {
                    prop_assert!(!memory.knows(card.id));
                    prop_assert!(!memory.is_available(card.id));
                    prop_assert!(!memory.has_pair(card.symbol));
                }
            }
        }
    }

    #[test]
    fn prop_cover_all_visible_is_idempotent(seed in any::<u64>(), turns in 1u32..10) {
        let mut game = GameBuilder::new().card_count(20).player_count(3).build(seed).unwrap();
        game.play_to_end(turns).unwrap();

        game.cover_all_visible_cards();
        let once = game.snapshot();
        game.cover_all_visible_cards();
        prop_assert_eq!(game.snapshot(), once);
    }

    #[test]
    fn prop_memory_invariants_hold(seed in any::<u64>()) {
        let mut game = GameBuilder::new().card_count(24).player_count(4).build(seed).unwrap();

        while !game.is_game_over() {
            game.make_move().unwrap();
            for (_, agent) in game.agents().iter() {
                let memory = agent.memory();
                for known in memory.known_cards().iter() {
                    prop_assert!(memory.is_available(known.id));
                    prop_assert!(!game.board().card(known.id).unwrap().is_matched());
                }
                for symbol in memory.pair_symbols().iter() {
                    let holders = memory.known_cards().iter().filter(|f| f.symbol == *symbol).count();
                    prop_assert_eq!(holders, 2);
                }
            }
        }
    }
}
