//! Property tests over random rosters and seeds.
//!
//! - Every character is in exactly one location after any command
//! - Shuffling is a permutation
//! - Decisive rounds move exactly one card
//! - Reset is idempotent

use proptest::prelude::*;

use hero_duel::cards::{Character, CharacterId, PowerStats};
use hero_duel::core::{GameMode, GameRng, MatchConfig, Participant, Side};
use hero_duel::rules::Verdict;
use hero_duel::session::BattleSession;

fn roster_strategy() -> impl Strategy<Value = Vec<[u32; 6]>> {
    prop::collection::vec(prop::array::uniform6(0u32..=100), 2..16)
}

fn build(stats: &[[u32; 6]]) -> Vec<Character> {
    stats
        .iter()
        .enumerate()
        .map(|(i, s)| {
            Character::new(CharacterId::new(i as u32 + 1), format!("Hero {}", i + 1), PowerStats::from_array(*s))
        })
        .collect()
}

fn assert_conserved(session: &BattleSession, n: usize) {
    let census = session.census();
    assert_eq!(census.len(), n);
    assert!(census.values().all(|&count| count == 1));
    assert_eq!(session.table().total_cards(), n);
}

fn started_session(stats: &[[u32; 6]], split: usize, mode: GameMode, seed: u64) -> BattleSession {
    let n = stats.len();
    let split = split.clamp(1, n - 1);
    let mut session = BattleSession::new(MatchConfig::new().with_mode(mode).with_seed(seed));
    session.load_roster(build(stats));

    for id in 1..=n as u32 {
        let who = if (id as usize) <= split {
            Participant::Player1
        } else {
            mode.participant(Side::Opponent)
        };
        session.assign_to_roster(CharacterId::new(id), who).unwrap();
    }
    session.start_match().unwrap();
    session
}

proptest! {
    #[test]
    fn prop_conservation_through_match(
        stats in roster_strategy(),
        split in 1usize..15,
        seed in any::<u64>(),
        pvc in any::<bool>(),
        surrender_at in 0usize..60,
    ) {
        let n = stats.len();
        let mode = if pvc { GameMode::Pvc } else { GameMode::Pvp };
        let mut session = started_session(&stats, split, mode, seed);
        assert_conserved(&session, n);

        for round in 0..60 {
            if session.is_over() {
                break;
            }
            if round == surrender_at {
                session.surrender(Participant::Player1);
                assert_conserved(&session, n);
                break;
            }

            prop_assert!(session.draw_phase().unwrap());
            assert_conserved(&session, n);

            let p1 = session.player1_score();
            let p2 = session.player2_score();
            let result = session.resolve_battle().unwrap();
            assert_conserved(&session, n);

            // Draws counted the cards in hand; sizes below are after the draw.
            match result.winner {
                Verdict::Winner(Participant::Player1) => {
                    prop_assert_eq!(session.player1_score(), p1 + 2);
                    prop_assert_eq!(session.player2_score(), p2);
                }
                Verdict::Winner(_) => {
                    prop_assert_eq!(session.player1_score(), p1);
                    prop_assert_eq!(session.player2_score(), p2 + 2);
                }
                Verdict::Draw => {
                    prop_assert_eq!(session.player1_score(), p1 + 1);
                    prop_assert_eq!(session.player2_score(), p2 + 1);
                }
            }
        }

        session.reset_match();
        assert_conserved(&session, n);
        prop_assert_eq!(session.total_cards(), n);
    }

    #[test]
    fn prop_transfer_relative_to_round_start(
        stats in roster_strategy(),
        split in 1usize..15,
        seed in any::<u64>(),
    ) {
        let mut session = started_session(&stats, split, GameMode::Pvp, seed);
        let p1 = session.player1_score() as i64;
        let p2 = session.player2_score() as i64;

        session.draw_phase().unwrap();
        let result = session.resolve_battle().unwrap();

        let d1 = session.player1_score() as i64 - p1;
        let d2 = session.player2_score() as i64 - p2;
        match result.winner {
            Verdict::Winner(Participant::Player1) => prop_assert_eq!((d1, d2), (1, -1)),
            Verdict::Winner(_) => prop_assert_eq!((d1, d2), (-1, 1)),
            Verdict::Draw => prop_assert_eq!((d1, d2), (0, 0)),
        }
    }

    #[test]
    fn prop_shuffle_is_permutation(len in 0usize..64, seed in any::<u64>()) {
        let mut items: Vec<usize> = (0..len).collect();
        let mut rng = GameRng::new(seed);
        rng.shuffle(&mut items);

        let mut sorted = items.clone();
        sorted.sort_unstable();
        prop_assert_eq!(sorted, (0..len).collect::<Vec<_>>());
    }

    #[test]
    fn prop_reset_is_idempotent(
        stats in roster_strategy(),
        split in 1usize..15,
        seed in any::<u64>(),
        rounds in 0usize..10,
    ) {
        let mut session = started_session(&stats, split, GameMode::Pvp, seed);
        for _ in 0..rounds {
            if session.is_over() {
                break;
            }
            session.draw_phase().unwrap();
            session.resolve_battle().unwrap();
        }

        session.reset_match();
        let pool: Vec<_> = session.available().iter().map(|c| c.id).collect();
        let snapshot = session.export_snapshot();

        session.reset_match();
        let pool_again: Vec<_> = session.available().iter().map(|c| c.id).collect();
        prop_assert_eq!(pool, pool_again);
        prop_assert_eq!(session.export_snapshot(), snapshot);
    }

    #[test]
    fn prop_one_card_each_terminates(a in prop::array::uniform6(0u32..=100), b in prop::array::uniform6(0u32..=100)) {
        let mut session = started_session(&[a, b], 1, GameMode::Pvp, 0);
        session.draw_phase().unwrap();
        let result = session.resolve_battle().unwrap();

        match result.winner {
            Verdict::Draw => prop_assert!(!session.is_over()),
            Verdict::Winner(w) => {
                prop_assert!(session.is_over());
                prop_assert_eq!(session.winner(), Some(w));
            }
        }
    }
}
