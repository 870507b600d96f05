//! CLI blackjack example.
//!
//! Acts as the pacing driver: after every state change it asks the table
//! which advance is pending and sleeps for the scheduled delay before firing
//! it, the way an animated table view would.
//!
//! Run with `RUST_LOG=debug` to watch the engine's transitions.

use std::io::{self, Write};
use std::thread;
use std::time::{SystemTime, UNIX_EPOCH};

use bjround::{AdvanceError, Card, Event, GameOptions, Phase, RoundState, Suit, Table};

const CHIPS: [usize; 4] = [5, 25, 100, 500];

fn main() {
    env_logger::init();

    println!("Blackjack CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let table = Table::new(GameOptions::default(), seed);

    loop {
        let state = table.snapshot();
        if state.player_money == 0 {
            println!("You are out of money.");
            match prompt_line("Start a new game? (y/n): ").as_str() {
                "y" | "yes" => {
                    if let Err(err) = table.dispatch(Event::NewGame(None)) {
                        println!("New game error: {err}");
                        return;
                    }
                    continue;
                }
                _ => break,
            }
        }

        if !place_bet(&table) {
            println!("Goodbye.");
            break;
        }

        if let Err(err) = table.dispatch(Event::StartDeal) {
            println!("Deal error: {err}");
            continue;
        }

        loop {
            let state = table.snapshot();
            print_table(&state);

            match state.phase {
                Phase::PlayerTurn => {
                    let event = match prompt_line("[h]it [s]tand: ").as_str() {
                        "h" | "hit" => Event::PlayerHit,
                        "s" | "stand" => Event::PlayerStand,
                        "q" | "quit" => return,
                        _ => {
                            println!("Unknown action.");
                            continue;
                        }
                    };
                    if let Err(err) = table.dispatch(event) {
                        println!("Action error: {err}");
                    }
                }
                Phase::Result => break,
                _ => {
                    if !pace(&table) {
                        return;
                    }
                }
            }
        }

        let state = table.snapshot();
        println!("{}", state.message.as_deref().unwrap_or_default());
        if let Some(settlement) = state.settlement() {
            println!("Payout: {} (net {})", settlement.payout, settlement.net);
        }

        if let Err(err) = table.dispatch(Event::Payout) {
            println!("Payout error: {err}");
            return;
        }
    }
}

/// Sleeps for the pending advance's delay and fires it.
fn pace(table: &Table) -> bool {
    let Some(advance) = table.schedule() else {
        return true;
    };

    thread::sleep(advance.delay);

    match table.fire(advance) {
        Ok(_) | Err(AdvanceError::Stale) => true,
        Err(AdvanceError::Rejected(err)) => {
            println!("Engine error: {err}");
            false
        }
    }
}

/// Collects chips until the player deals. Returns false to quit.
fn place_bet(table: &Table) -> bool {
    loop {
        let state = table.snapshot();
        println!(
            "\nMoney: {} | Bet: {}",
            state.player_money - state.current_bet,
            state.current_bet
        );
        let chips = CHIPS
            .iter()
            .map(|&chip| format_action(&chip.to_string(), state.can_bet(chip)))
            .collect::<Vec<_>>()
            .join(" ");
        println!("Chips: {chips}  [c]lear  [d]eal");

        let input = prompt_line("Bet: ");
        let event = match input.as_str() {
            "q" | "quit" => return false,
            "d" | "deal" if state.current_bet > 0 => return true,
            "d" | "deal" => {
                println!("Place a bet first.");
                continue;
            }
            "c" | "clear" => Event::PlaceBet(-(state.current_bet as isize)),
            other => match other.parse::<isize>() {
                Ok(amount) => Event::PlaceBet(amount),
                Err(_) => {
                    println!("Please enter a chip value.");
                    continue;
                }
            },
        };

        if let Err(err) = table.dispatch(event) {
            println!("Bet error: {err}");
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::from("q");
    }
    input.trim().to_lowercase()
}

fn print_table(state: &RoundState) {
    println!("\nShoe: {} cards remaining", state.shoe.len());
    println!(
        "Dealer: {} (value {})",
        format_dealer(state),
        state.dealer_visible_value()
    );
    println!(
        "You:    {} (value {}{})",
        format_cards(state.player.cards()),
        state.player_value(),
        if state.player.is_soft() { ", soft" } else { "" }
    );
    println!("-- {} --", state.status_text());
}

fn format_dealer(state: &RoundState) -> String {
    if state.dealer.is_empty() {
        return "(no cards)".to_string();
    }

    if state.dealer_hidden {
        let mut parts = vec!["??".to_string()];
        parts.extend(state.dealer.up_card().map(format_card));
        parts.join(" ")
    } else {
        format_cards(state.dealer.cards())
    }
}

fn format_cards(cards: &[Card]) -> String {
    if cards.is_empty() {
        return "(empty)".to_string();
    }
    cards.iter().map(format_card).collect::<Vec<_>>().join(" ")
}

fn format_card(card: &Card) -> String {
    let (suit, color_code) = match card.suit {
        Suit::Hearts => ("H", "31"),
        Suit::Diamonds => ("D", "31"),
        Suit::Clubs => ("C", "32"),
        Suit::Spades => ("S", "34"),
    };
    colorize(&format!("{}{suit}", card.rank.label()), color_code)
}

fn format_action(label: &str, allowed: bool) -> String {
    let text = format!("[{label}]");
    if allowed {
        colorize(&text, "32")
    } else {
        colorize(&text, "90")
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
