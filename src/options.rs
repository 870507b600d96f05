//! Engine configuration options.

use core::time::Duration;

/// Delays a presentation layer waits before dispatching each advance event.
///
/// The engine itself never waits; these values only feed
/// [`crate::Table::schedule`]. The defaults leave time for the card
/// animations of a typical table view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PacingOptions {
    /// Delay before each dealer draw step.
    pub dealer_step: Duration,
    /// Delay between the dealer standing and the result evaluation.
    pub dealer_end: Duration,
    /// Delay between a player bust and the result.
    pub bust: Duration,
    /// Delay before the dealer's hole card is revealed after a natural.
    pub reveal: Duration,
    /// Delay between the reveal and the result after a natural.
    pub blackjack: Duration,
}

impl Default for PacingOptions {
    fn default() -> Self {
        Self {
            dealer_step: Duration::from_millis(800),
            dealer_end: Duration::from_millis(800),
            bust: Duration::from_millis(800),
            reveal: Duration::from_millis(800),
            blackjack: Duration::from_millis(1400),
        }
    }
}

impl PacingOptions {
    /// Pacing with every delay set to zero, for headless drivers.
    ///
    /// ```
    /// use bjround::PacingOptions;
    ///
    /// let pacing = PacingOptions::immediate();
    /// assert!(pacing.blackjack.is_zero());
    /// ```
    #[must_use]
    pub const fn immediate() -> Self {
        Self {
            dealer_step: Duration::ZERO,
            dealer_end: Duration::ZERO,
            bust: Duration::ZERO,
            reveal: Duration::ZERO,
            blackjack: Duration::ZERO,
        }
    }

    /// Sets the delay before each dealer draw step.
    ///
    /// # Example
    ///
    /// ```
    /// use core::time::Duration;
    /// use bjround::PacingOptions;
    ///
    /// let pacing = PacingOptions::default().with_dealer_step(Duration::from_millis(300));
    /// assert_eq!(pacing.dealer_step, Duration::from_millis(300));
    /// ```
    #[must_use]
    pub const fn with_dealer_step(mut self, delay: Duration) -> Self {
        self.dealer_step = delay;
        self
    }

    /// Sets the delay before the dealer's result is evaluated.
    #[must_use]
    pub const fn with_dealer_end(mut self, delay: Duration) -> Self {
        self.dealer_end = delay;
        self
    }

    /// Sets the delay between a player bust and the result.
    #[must_use]
    pub const fn with_bust(mut self, delay: Duration) -> Self {
        self.bust = delay;
        self
    }

    /// Sets the delay before the hole card is revealed after a natural.
    #[must_use]
    pub const fn with_reveal(mut self, delay: Duration) -> Self {
        self.reveal = delay;
        self
    }

    /// Sets the delay between the reveal and the result after a natural.
    #[must_use]
    pub const fn with_blackjack(mut self, delay: Duration) -> Self {
        self.blackjack = delay;
        self
    }
}

/// Configuration options for a blackjack session.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjround::GameOptions;
///
/// let options = GameOptions::default()
///     .with_decks(6)
///     .with_starting_money(500);
/// assert_eq!(options.decks, 6);
/// assert_eq!(options.starting_money, 500);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameOptions {
    /// Number of decks in each shoe.
    pub decks: u8,
    /// Money the player starts with, restored by every new game.
    pub starting_money: usize,
    /// Advance delays handed to the presentation layer.
    pub pacing: PacingOptions,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            decks: 4,
            starting_money: 1000,
            pacing: PacingOptions::default(),
        }
    }
}

impl GameOptions {
    /// Sets the number of decks. Zero is raised to one.
    ///
    /// # Example
    ///
    /// ```
    /// use bjround::GameOptions;
    ///
    /// assert_eq!(GameOptions::default().with_decks(2).decks, 2);
    /// assert_eq!(GameOptions::default().with_decks(0).decks, 1);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = if decks == 0 { 1 } else { decks };
        self
    }

    /// Sets the starting money.
    ///
    /// # Example
    ///
    /// ```
    /// use bjround::GameOptions;
    ///
    /// let options = GameOptions::default().with_starting_money(250);
    /// assert_eq!(options.starting_money, 250);
    /// ```
    #[must_use]
    pub const fn with_starting_money(mut self, money: usize) -> Self {
        self.starting_money = money;
        self
    }

    /// Sets the advance pacing.
    #[must_use]
    pub const fn with_pacing(mut self, pacing: PacingOptions) -> Self {
        self.pacing = pacing;
        self
    }
}
