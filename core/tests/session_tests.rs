mod common;

use atlasly::game::bonus::{BonusAnswers, BonusKind, bonus_challenges, neighbor_challenge};
use atlasly::game::{MAX_GUESSES, daily_seed, pick_daily, pick_daily_seeded, pick_random, share_text};
use atlasly::{GameSession, GameStatus, GuessOutcome};
use chrono::NaiveDate;
use rand::SeedableRng;
use rand::rngs::StdRng;

#[test]
fn test_six_misses_lose_and_seventh_is_rejected() {
    let mut session = GameSession::new(common::catalog(), "France").unwrap();

    let misses = ["Spain", "Portugal", "Belgium", "Germany", "Czechia", "Canada"];
    for (i, name) in misses.iter().enumerate() {
        let result = session.submit_guess(name);
        assert_eq!(result.guess().unwrap().resolved_name, *name);
        if i + 1 < misses.len() {
            assert_eq!(result.status, GameStatus::Playing);
        } else {
            assert_eq!(result.status, GameStatus::Lost);
        }
    }

    let result = session.submit_guess("Mexico");
    assert_eq!(result.outcome, GuessOutcome::Rejected);
    assert_eq!(session.guesses().len(), MAX_GUESSES);
    assert_eq!(session.status(), GameStatus::Lost);
}

#[test]
fn test_feedback_points_towards_target() {
    let mut session = GameSession::new(common::catalog(), "France").unwrap();

    let belgium = session.submit_guess("Belgium").guess().cloned().unwrap();
    let spain = session.submit_guess("Spain").guess().cloned().unwrap();

    // France lies south-west of Belgium and north-east of Spain
    assert!(belgium.bearing_degrees > 180.0 && belgium.bearing_degrees < 270.0);
    assert!(spain.bearing_degrees > 0.0 && spain.bearing_degrees < 90.0);
    assert!(belgium.distance_km < spain.distance_km);
    assert!(belgium.proximity_percent >= spain.proximity_percent);
}

#[test]
fn test_win_is_case_and_diacritic_insensitive() {
    let mut session = GameSession::new(common::catalog(), "Côte d'Ivoire").unwrap();

    assert_eq!(session.submit_guess("Spain").status, GameStatus::Playing);
    let result = session.submit_guess("cote d ivoire");
    assert_eq!(result.status, GameStatus::Won);
    assert_eq!(result.guess().unwrap().proximity_percent, 100);

    assert_eq!(session.submit_guess("France").outcome, GuessOutcome::Rejected);
    assert_eq!(session.guesses().len(), 2);

    let text = share_text(20240615, session.status(), session.guesses());
    assert!(text.starts_with("Atlasly 🌍  #20240615\nSolved in 2\n\n"));
    assert!(text.ends_with("🟩 ↑ 0km"));
}

#[test]
fn test_unrecognized_and_duplicate_are_free() {
    let mut session = GameSession::new(common::catalog(), "Germany").unwrap();

    assert_eq!(session.submit_guess("Narnia").outcome, GuessOutcome::Unrecognized);
    session.submit_guess("Czech Republic");
    let result = session.submit_guess("czechia");
    assert_eq!(
        result.outcome,
        GuessOutcome::Duplicate {
            resolved_name: "Czechia".to_string()
        }
    );
    assert_eq!(session.remaining_guesses(), MAX_GUESSES - 1);
}

#[test]
fn test_daily_pick_is_deterministic() {
    let catalog = common::catalog();

    let first = pick_daily_seeded(&catalog, 20240615).map(str::to_string);
    let second = pick_daily_seeded(&catalog, 20240615).map(str::to_string);
    assert!(first.is_some());
    assert_eq!(first, second);

    let date = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
    assert_eq!(daily_seed(date), 20240615);
    assert_eq!(pick_daily(&catalog, date).map(str::to_string), first);

    // a fresh catalog from the same data agrees
    let rebuilt = common::catalog();
    assert_eq!(pick_daily_seeded(&rebuilt, 20240615).map(str::to_string), first);
}

#[test]
fn test_daily_target_starts_a_session() {
    let catalog = common::catalog();
    let date = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
    let target = pick_daily(&catalog, date).unwrap().to_string();

    let mut session = GameSession::new(catalog, &target).unwrap();
    assert_eq!(session.submit_guess(&target).status, GameStatus::Won);
}

#[test]
fn test_random_pick_is_reproducible_with_seeded_rng() {
    let catalog = common::catalog();
    let a = pick_random(&catalog, &mut StdRng::seed_from_u64(11)).map(str::to_string);
    let b = pick_random(&catalog, &mut StdRng::seed_from_u64(11)).map(str::to_string);
    assert_eq!(a, b);
    assert!(catalog.entry(&a.unwrap()).is_some());
}

#[test]
fn test_bonus_round_after_win() {
    let catalog = common::catalog();
    let mut rng = StdRng::seed_from_u64(3);

    let spain = catalog.entry("Spain").unwrap();
    let challenges = bonus_challenges(&catalog, spain, &mut rng);
    let kinds: Vec<BonusKind> = challenges.iter().map(|c| c.kind()).collect();
    assert_eq!(kinds, vec![BonusKind::Flag, BonusKind::Capital, BonusKind::Neighbor]);

    let mut answers = BonusAnswers::default();
    for challenge in &challenges {
        assert_eq!(challenge.options().len(), 4);
        assert_eq!(answers.answer(challenge, challenge.correct()), Some(true));
    }
    assert_eq!(answers.score(), 3);

    // no facts, no bonus
    let atlantis = catalog.entry("Atlantis").unwrap();
    assert!(bonus_challenges(&catalog, atlantis, &mut rng).is_empty());
}

#[test]
fn test_neighbor_options_skip_neighbors_named_differently() {
    let catalog = common::catalog();
    let canada = catalog.entry("Canada").unwrap();

    for seed in 0..200 {
        let mut rng = StdRng::seed_from_u64(seed);
        let challenge = neighbor_challenge(&catalog, canada, &mut rng).unwrap();

        // the facts name of the only neighbor differs from its display name
        assert_eq!(challenge.correct(), "United States");
        assert!(
            !challenge.options().iter().any(|o| o == "United States of America"),
            "seed {seed}: {:?}",
            challenge.options()
        );
        assert!(!challenge.options().iter().any(|o| o == "Canada"));
        assert_eq!(challenge.options().len(), 4);
    }
}
