use super::*;
use crate::card::{Rank, Suit};

fn card(rank: Rank) -> Card {
    Card::new(rank, Suit::Hearts)
}

/// Shoe dealt in order: dealer, player, dealer, player, then any extra cards
fn stacked(dealer: [Rank; 2], player: [Rank; 2], extra: &[Rank]) -> Shoe {
    let mut cards = vec![
        card(dealer[0]),
        card(player[0]),
        card(dealer[1]),
        card(player[1]),
    ];
    cards.extend(extra.iter().map(|r| card(*r)));
    Shoe::from_cards(cards)
}

fn session(shoe: Shoe) -> GameSession {
    GameSession::with_shoe(GameRules::single_deck(), shoe)
}

#[test]
fn test_new_session_is_idle() {
    let game = session(stacked([Rank::Two, Rank::Three], [Rank::Four, Rank::Five], &[]));
    assert_eq!(game.phase(), GamePhase::Idle);
    assert_eq!(game.outcome(), None);
    assert_eq!(game.scoreboard(), Scoreboard::default());
    assert_eq!(game.player().name, PLAYER_NAME);
    assert_eq!(game.dealer().name, DEALER_NAME);
}

#[test]
fn test_deal_order_alternates_dealer_first() {
    let mut game = session(stacked([Rank::Two, Rank::Three], [Rank::Four, Rank::Five], &[]));
    game.deal_hand().unwrap();

    assert_eq!(game.phase(), GamePhase::PlayerTurn);
    assert_eq!(game.last_status(), "Cards dealt");
    assert_eq!(game.dealer().hand.cards, vec![card(Rank::Two), card(Rank::Three)]);
    assert_eq!(game.player().hand.cards, vec![card(Rank::Four), card(Rank::Five)]);
    assert_eq!(game.shoe_remaining(), 0);
}

#[test]
fn test_non_busting_hit_stays_in_player_turn() {
    let mut game = session(stacked(
        [Rank::Ten, Rank::Seven],
        [Rank::Two, Rank::Three],
        &[Rank::Four],
    ));
    game.deal_hand().unwrap();

    let phase = game.apply_decision(Decision::Hit).unwrap();
    assert_eq!(phase, GamePhase::PlayerTurn);
    assert_eq!(game.last_status(), "Player Hit");
    assert_eq!(game.player().hand.value(), 9);
    assert_eq!(game.outcome(), None);
}

#[test]
fn test_stand_moves_to_dealer_turn() {
    let mut game = session(stacked([Rank::Ten, Rank::Seven], [Rank::Two, Rank::Three], &[]));
    game.deal_hand().unwrap();

    assert_eq!(game.apply_decision(Decision::Stand).unwrap(), GamePhase::DealerTurn);
    assert_eq!(game.last_status(), "Standing");
}

#[test]
fn test_scenario_a_tied_21_is_a_draw() {
    // Dealer {10, 6}, player {A, 10}; dealer must hit 16 and draws a 5
    let mut game = session(stacked([Rank::Ten, Rank::Six], [Rank::Ace, Rank::Ten], &[Rank::Five]));
    game.deal_hand().unwrap();
    assert!(game.player().hand.is_natural());

    game.apply_decision(Decision::Stand).unwrap();
    assert_eq!(game.dealer_step().unwrap(), DealerStep::Hit(card(Rank::Five)));
    assert_eq!(game.last_status(), "Dealer Hit");
    assert_eq!(game.dealer().hand.value(), 21);
    assert_eq!(game.dealer_step().unwrap(), DealerStep::Stood);
    assert_eq!(game.last_status(), "Dealer Stand");

    let summary = game.settle().unwrap();
    assert_eq!(summary.outcome, Outcome::Draw);
    assert_eq!(summary.player_value, 21);
    assert_eq!(summary.dealer_value, 21);
    assert_eq!(summary.scoreboard.draws, 1);
    assert_eq!(summary.scoreboard.player_wins, 0);
    assert_eq!(summary.scoreboard.dealer_wins, 0);
}

#[test]
fn test_scenario_b_player_bust_skips_dealer() {
    let mut game = session(stacked(
        [Rank::Six, Rank::Five],
        [Rank::Ten, Rank::Five],
        &[Rank::King, Rank::Two, Rank::Three],
    ));
    game.deal_hand().unwrap();

    assert_eq!(game.apply_decision(Decision::Hit).unwrap(), GamePhase::DealerTurn);
    assert_eq!(game.player().hand.value(), 25);
    assert!(game.player().hand.is_busted());
    assert_eq!(game.last_status(), "Player Busted");
    assert_eq!(game.outcome(), Some(Outcome::DealerWin));

    let remaining = game.shoe_remaining();
    assert_eq!(game.play_dealer_turn().unwrap(), vec![DealerStep::Skipped]);
    assert_eq!(game.shoe_remaining(), remaining);
    assert_eq!(game.dealer().hand.len(), 2);
    assert_eq!(game.last_status(), "Player Busted");

    let summary = game.settle().unwrap();
    assert_eq!(summary.outcome, Outcome::DealerWin);
    assert_eq!(game.dealer().wins, 1);
    assert_eq!(game.player().wins, 0);
}

#[test]
fn test_player_bust_against_dealer_natural_skips_dealer() {
    let mut game = session(stacked([Rank::Ace, Rank::King], [Rank::Ten, Rank::Six], &[Rank::Nine]));
    game.deal_hand().unwrap();
    game.apply_decision(Decision::Hit).unwrap();

    assert!(game.dealer().hand.is_natural());
    assert_eq!(game.dealer_step().unwrap(), DealerStep::Skipped);
    assert_eq!(game.settle().unwrap().outcome, Outcome::DealerWin);
}

#[test]
fn test_scenario_c_player_outscores_dealer() {
    let mut game = session(stacked(
        [Rank::Seven, Rank::Seven],
        [Rank::Nine, Rank::Nine],
        &[Rank::Three],
    ));
    game.deal_hand().unwrap();
    game.apply_decision(Decision::Stand).unwrap();

    let steps = game.play_dealer_turn().unwrap();
    assert_eq!(steps, vec![DealerStep::Hit(card(Rank::Three)), DealerStep::Stood]);
    assert_eq!(game.dealer().hand.value(), 17);

    let summary = game.settle().unwrap();
    assert_eq!(summary.outcome, Outcome::PlayerWin);
    assert_eq!(summary.player_value, 18);
    assert_eq!(game.player().wins, 1);
    assert_eq!(game.dealer().wins, 0);
}

#[test]
fn test_dealer_bust_player_wins() {
    let mut game = session(stacked([Rank::Ten, Rank::Six], [Rank::Ten, Rank::Two], &[Rank::Queen]));
    game.deal_hand().unwrap();
    game.apply_decision(Decision::Stand).unwrap();

    assert_eq!(game.dealer_step().unwrap(), DealerStep::Busted(card(Rank::Queen)));
    assert_eq!(game.last_status(), "Dealer Busted");
    assert_eq!(game.phase(), GamePhase::Settlement);
    assert_eq!(game.settle().unwrap().outcome, Outcome::PlayerWin);
}

#[test]
fn test_dealer_stands_on_soft_17() {
    let mut game = session(stacked([Rank::Ace, Rank::Six], [Rank::Ten, Rank::Eight], &[Rank::Two]));
    game.deal_hand().unwrap();
    game.apply_decision(Decision::Stand).unwrap();

    assert!(game.dealer().hand.is_soft());
    assert_eq!(game.play_dealer_turn().unwrap(), vec![DealerStep::Stood]);
    assert_eq!(game.settle().unwrap().outcome, Outcome::PlayerWin);
}

#[test]
fn test_dealer_higher_value_wins() {
    let mut game = session(stacked([Rank::Ten, Rank::Nine], [Rank::Ten, Rank::Seven], &[]));
    game.deal_hand().unwrap();
    game.apply_decision(Decision::Stand).unwrap();
    game.play_dealer_turn().unwrap();
    assert_eq!(game.settle().unwrap().outcome, Outcome::DealerWin);
}

#[test]
fn test_settlement_resets_hands_and_counts_cards() {
    let mut game = session(stacked(
        [Rank::Seven, Rank::Seven],
        [Rank::Nine, Rank::Nine],
        &[Rank::Three, Rank::Two, Rank::Two],
    ));
    let before = game.shoe_remaining();
    game.deal_hand().unwrap();
    game.apply_decision(Decision::Stand).unwrap();
    game.play_dealer_turn().unwrap();

    let summary = game.settle().unwrap();
    assert_eq!(summary.cards_drawn, 5);
    assert_eq!(game.shoe_remaining(), before - 5);
    assert!(game.player().hand.is_empty());
    assert!(game.dealer().hand.is_empty());
    assert_eq!(summary.player_hand.len(), 2);
    assert_eq!(summary.dealer_hand.len(), 3);
    assert_eq!(game.phase(), GamePhase::Idle);
    assert_eq!(game.scoreboard().hands_played, 1);
}

#[test]
fn test_quit_bypasses_settlement() {
    let mut game = session(stacked([Rank::Ten, Rank::Seven], [Rank::Two, Rank::Three], &[]));
    game.deal_hand().unwrap();

    assert_eq!(game.apply_decision(Decision::Quit).unwrap(), GamePhase::Quit);
    assert_eq!(game.last_status(), "Player Quit");
    assert!(game.is_over());
    assert_eq!(game.scoreboard(), Scoreboard::default());
    assert_eq!(game.dealer_step(), Err(Error::SessionOver));
    assert_eq!(game.settle(), Err(Error::SessionOver));
    assert_eq!(game.deal_hand(), Err(Error::SessionOver));
}

#[test]
fn test_operations_out_of_phase() {
    let mut game = session(stacked([Rank::Ten, Rank::Seven], [Rank::Two, Rank::Three], &[]));

    assert_eq!(
        game.apply_decision(Decision::Hit),
        Err(Error::InvalidPhase {
            expected: GamePhase::PlayerTurn,
            actual: GamePhase::Idle,
        })
    );
    assert!(matches!(game.dealer_step(), Err(Error::InvalidPhase { .. })));
    assert!(matches!(game.settle(), Err(Error::InvalidPhase { .. })));

    game.deal_hand().unwrap();
    assert_eq!(
        game.deal_hand(),
        Err(Error::InvalidPhase {
            expected: GamePhase::Idle,
            actual: GamePhase::PlayerTurn,
        })
    );
}

#[test]
fn test_deal_from_short_shoe_fails() {
    let mut game = session(Shoe::from_cards(vec![
        card(Rank::Two),
        card(Rank::Three),
        card(Rank::Four),
    ]));
    assert_eq!(game.deal_hand(), Err(Error::ShoeEmpty));
}

#[test]
fn test_hit_on_empty_shoe_fails() {
    let mut game = session(stacked([Rank::Two, Rank::Three], [Rank::Four, Rank::Five], &[]));
    game.deal_hand().unwrap();
    assert_eq!(game.apply_decision(Decision::Hit), Err(Error::ShoeEmpty));
    assert_eq!(game.player().hand.len(), 2);
}

#[test]
fn test_needs_new_shoe_threshold() {
    let rules = GameRules {
        min_cards_to_continue: 5,
        ..GameRules::single_deck()
    };
    let game = GameSession::with_shoe(
        rules,
        stacked([Rank::Two, Rank::Three], [Rank::Four, Rank::Five], &[]),
    );
    assert!(game.needs_new_shoe());

    let game = GameSession::with_shoe(
        rules,
        stacked([Rank::Two, Rank::Three], [Rank::Four, Rank::Five], &[Rank::Six]),
    );
    assert!(!game.needs_new_shoe());
}

#[test]
fn test_play_round_with_decisions() {
    let mut game = session(stacked(
        [Rank::Seven, Rank::Ten],
        [Rank::Two, Rank::Three],
        &[Rank::Ten, Rank::Four],
    ));
    let mut decisions = vec![Decision::Hit, Decision::Stand].into_iter();

    let summary = game
        .play_round_with(|_| decisions.next().unwrap_or(Decision::Stand))
        .unwrap()
        .unwrap();
    assert_eq!(summary.player_value, 15);
    assert_eq!(summary.dealer_value, 17);
    assert_eq!(summary.outcome, Outcome::DealerWin);
}

#[test]
fn test_play_round_with_quit() {
    let mut game = session(stacked([Rank::Seven, Rank::Ten], [Rank::Two, Rank::Three], &[]));
    assert_eq!(game.play_round_with(|_| Decision::Quit).unwrap(), None);
    assert!(game.is_over());
}
