//! Table and pacing tests.

use core::time::Duration;

use bjround::{
    AdvanceError, Card, CardId, Event, EventError, GameOptions, PacingOptions, Phase, Rank,
    Shoe, Suit, Table,
};

fn stack(table: &Table, ranks: &[Rank]) {
    let mut state = table.snapshot();
    state.shoe = Shoe::from_cards(
        ranks
            .iter()
            .enumerate()
            .map(|(index, &rank)| Card::new(CardId(index as u16), Suit::Spades, rank))
            .collect(),
    );
    table.install(state);
}

fn deal(table: &Table, bet: isize) {
    table.dispatch(Event::PlaceBet(bet)).unwrap();
    table.dispatch(Event::StartDeal).unwrap();
}

#[test]
fn seeded_tables_replay_identically() {
    let events = [
        Event::PlaceBet(50),
        Event::StartDeal,
        Event::PlayerStand,
    ];

    let first = Table::new(GameOptions::default(), 7);
    let second = Table::new(GameOptions::default(), 7);
    assert_eq!(first.snapshot(), second.snapshot());

    for event in events {
        let _ = first.dispatch(event);
        let _ = second.dispatch(event);
    }
    first.run_advances().unwrap();
    second.run_advances().unwrap();
    let _ = first.dispatch(Event::Payout);
    let _ = second.dispatch(Event::Payout);

    assert_eq!(first.snapshot(), second.snapshot());
}

#[test]
fn rejected_dispatch_keeps_the_installed_state() {
    let table = Table::new(GameOptions::default(), 1);
    let before = table.snapshot();
    let epoch = table.epoch();

    assert_eq!(
        table.dispatch(Event::PlayerHit).unwrap_err(),
        EventError::InvalidPhase(Phase::Betting)
    );
    assert_eq!(table.snapshot(), before);
    assert_eq!(table.epoch(), epoch);

    table.dispatch(Event::PlaceBet(10)).unwrap();
    assert_eq!(table.epoch(), epoch + 1);
}

#[test]
fn schedule_reports_the_awaited_advance_and_its_delay() {
    let table = Table::new(GameOptions::default(), 3);
    stack(&table, &[Rank::Ten, Rank::Nine, Rank::Ten, Rank::Five, Rank::Two]);
    assert_eq!(table.schedule(), None);

    deal(&table, 100);
    assert_eq!(table.phase(), Phase::PlayerTurn);
    assert_eq!(table.schedule(), None);

    table.dispatch(Event::PlayerStand).unwrap();
    let advance = table.schedule().unwrap();
    assert_eq!(advance.event, Event::AdvanceDealer);
    assert_eq!(advance.delay, Duration::from_millis(800));
    assert_eq!(advance.epoch, table.epoch());

    let state = table.fire(advance).unwrap();
    assert_eq!(state.dealer_value(), 17);
    assert_eq!(state.phase, Phase::DealerTurn);

    let advance = table.schedule().unwrap();
    assert_eq!(advance.event, Event::AdvanceDealer);
    table.fire(advance).unwrap();

    let advance = table.schedule().unwrap();
    assert_eq!(advance.event, Event::EndDealerEvaluation);
    let state = table.fire(advance).unwrap();
    assert_eq!(state.phase, Phase::Result);
    assert_eq!(state.message.as_deref(), Some("You win! Dealer 17 vs your 19."));
    assert_eq!(table.schedule(), None);
}

#[test]
fn stale_or_repeated_advances_are_dropped() {
    let table = Table::new(GameOptions::default(), 4);
    stack(&table, &[Rank::Ten, Rank::Nine, Rank::Ten, Rank::Four, Rank::Two, Rank::Two]);
    deal(&table, 100);
    table.dispatch(Event::PlayerStand).unwrap();

    let advance = table.schedule().unwrap();
    let state = table.fire(advance).unwrap();
    assert_eq!(state.dealer.len(), 3);

    assert_eq!(table.fire(advance).unwrap_err(), AdvanceError::Stale);
    assert_eq!(table.snapshot().dealer.len(), 3);
}

#[test]
fn blackjack_reveal_is_paced_in_two_steps() {
    let pacing = PacingOptions::default()
        .with_reveal(Duration::from_millis(100))
        .with_blackjack(Duration::from_millis(200));
    let table = Table::new(GameOptions::default().with_pacing(pacing), 5);
    stack(&table, &[Rank::Ace, Rank::King, Rank::Nine, Rank::Eight]);
    deal(&table, 100);

    let reveal = table.schedule().unwrap();
    assert_eq!(reveal.event, Event::RevealDealer);
    assert_eq!(reveal.delay, Duration::from_millis(100));
    assert!(!table.fire(reveal).unwrap().dealer_hidden);

    let finish = table.schedule().unwrap();
    assert_eq!(finish.event, Event::FinalizeBlackjack);
    assert_eq!(finish.delay, Duration::from_millis(200));
    assert_eq!(table.fire(finish).unwrap().phase, Phase::Result);

    let paid = table.dispatch(Event::Payout).unwrap();
    assert_eq!(paid.player_money, 1150);
}

#[test]
fn run_advances_finishes_a_bust_without_delay() {
    let table = Table::new(
        GameOptions::default().with_pacing(PacingOptions::immediate()),
        6,
    );
    stack(&table, &[Rank::Ten, Rank::Six, Rank::Nine, Rank::Nine, Rank::Queen]);
    deal(&table, 40);

    let bust = table.dispatch(Event::PlayerHit).unwrap();
    assert_eq!(bust.phase, Phase::BustDelay);
    assert_eq!(table.schedule().unwrap().delay, Duration::ZERO);

    let state = table.run_advances().unwrap();
    assert_eq!(state.phase, Phase::Result);
    assert_eq!(state.message, bust.message);
    assert_eq!(table.dispatch(Event::Payout).unwrap().player_money, 960);
}

#[test]
fn new_game_restores_the_configured_stake() {
    let table = Table::new(
        GameOptions::default().with_decks(1).with_starting_money(300),
        8,
    );
    assert_eq!(table.snapshot().shoe.len(), 52);

    deal(&table, 300);
    assert_eq!(table.snapshot().player_money, 0);

    let fresh = table.dispatch(Event::NewGame(None)).unwrap();
    assert_eq!(fresh.player_money, 300);
    assert_eq!(fresh.decks, 1);
    assert_eq!(table.options().starting_money, 300);
}

#[test]
fn entropy_seeded_table_starts_in_betting() {
    let table = Table::from_entropy(GameOptions::default());
    assert_eq!(table.phase(), Phase::Betting);
    assert_eq!(table.snapshot().shoe.len(), 208);
}
