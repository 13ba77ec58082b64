//! Core game model for Catch Red.
//!
//! All mutable game state lives in [`GameState`] and changes only through
//! [`GameAction`]s fed to its [`Reducible`] impl.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::rc::Rc;
use yew::Reducible;

use crate::config::GameConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CircleColor {
    Red,
    Blue,
    Green,
    Yellow,
    Orange,
    Purple,
}

/// Fill used for a red circle once it has been caught.
pub const SPENT_CSS: &str = "#6e7681";

impl CircleColor {
    pub fn css(self) -> &'static str {
        match self {
            CircleColor::Red => "#f85149",
            CircleColor::Blue => "#388bfd",
            CircleColor::Green => "#3fb950",
            CircleColor::Yellow => "#e3b341",
            CircleColor::Orange => "#f0883e",
            CircleColor::Purple => "#a371f7",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CircleColor::Red => "red",
            CircleColor::Blue => "blue",
            CircleColor::Green => "green",
            CircleColor::Yellow => "yellow",
            CircleColor::Orange => "orange",
            CircleColor::Purple => "purple",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Circle {
    /// Unique within a round; also the display key.
    pub id: usize,
    pub color: CircleColor,
    pub is_clicked: bool,
}

impl Circle {
    pub fn is_red(&self) -> bool {
        self.color == CircleColor::Red
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Waiting,
    Playing,
    Won,
    Lost,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LossReason {
    WrongColor { color: CircleColor },
    TimeUp,
}

impl LossReason {
    pub fn message(self) -> String {
        match self {
            LossReason::WrongColor { color } => {
                format!("Wrong color! You clicked a {} circle!", color.label())
            }
            LossReason::TimeUp => "Time's up! Try again!".to_string(),
        }
    }
}

/// Builds one round's circles: `red_count` reds followed by `other_count`
/// palette draws (duplicates allowed), then shuffled. Ids are `0..total`.
/// Expects a validated config.
pub fn generate_circles<R: Rng + ?Sized>(config: &GameConfig, rng: &mut R) -> Vec<Circle> {
    let total = config.total_circles().unwrap_or(config.red_count);
    let mut circles = Vec::with_capacity(total);
    for id in 0..config.red_count {
        circles.push(Circle {
            id,
            color: CircleColor::Red,
            is_clicked: false,
        });
    }
    if !config.palette.is_empty() {
        for id in config.red_count..total {
            let color = config.palette[rng.gen_range(0..config.palette.len())];
            circles.push(Circle {
                id,
                color,
                is_clicked: false,
            });
        }
    }
    circles.shuffle(rng);
    circles
}

#[derive(Clone, Debug)]
pub struct GameState {
    pub config: Rc<GameConfig>,
    pub phase: Phase,
    /// Index into the round schedule.
    pub round: usize,
    pub time_left: u32,
    pub circles: Vec<Circle>,
    /// Set when `phase` is `Lost`.
    pub loss: Option<LossReason>,
    /// Bumped every time a round begins; keys the countdown lifecycle.
    pub round_serial: u64,
    rng: ChaCha8Rng,
}

impl GameState {
    pub fn new(config: GameConfig, seed: u64) -> Self {
        let time_left = config.round_schedule.first().copied().unwrap_or(0);
        Self {
            config: Rc::new(config),
            phase: Phase::Waiting,
            round: 0,
            time_left,
            circles: Vec::new(),
            loss: None,
            round_serial: 0,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    pub fn rounds_total(&self) -> usize {
        self.config.round_schedule.len()
    }

    pub fn round_budget(&self) -> u32 {
        self.config
            .round_schedule
            .get(self.round)
            .copied()
            .unwrap_or(0)
    }

    pub fn reds_remaining(&self) -> usize {
        self.circles
            .iter()
            .filter(|c| c.is_red() && !c.is_clicked)
            .count()
    }

    /// Start from any phase; also serves as restart.
    pub fn start(&mut self) {
        self.phase = Phase::Playing;
        self.round = 0;
        self.loss = None;
        self.begin_round();
        tracing::info!(budget = self.time_left, "game started");
    }

    /// Resolves a click on circle `id`. Returns whether anything changed.
    pub fn click(&mut self, id: usize) -> bool {
        if self.phase != Phase::Playing {
            return false;
        }
        let Some(circle) = self.circles.iter_mut().find(|c| c.id == id) else {
            return false;
        };
        if circle.is_clicked {
            return false;
        }
        if circle.is_red() {
            circle.is_clicked = true;
            tracing::debug!(id, remaining = self.reds_remaining(), "red caught");
            if self.reds_remaining() == 0 {
                self.advance_round();
            }
        } else {
            let color = circle.color;
            self.lose(LossReason::WrongColor { color });
        }
        true
    }

    /// One countdown period elapsed.
    pub fn tick(&mut self) -> bool {
        if self.phase != Phase::Playing || self.time_left == 0 {
            return false;
        }
        self.time_left -= 1;
        true
    }

    /// Expiry signal. Only loses if the round is still unfinished at zero;
    /// a click that cleared the round before this arrives has already reset
    /// `time_left`, so the click wins the tie.
    pub fn time_up(&mut self) -> bool {
        if self.phase != Phase::Playing || self.time_left > 0 || self.reds_remaining() == 0 {
            return false;
        }
        self.lose(LossReason::TimeUp);
        true
    }

    fn advance_round(&mut self) {
        let next = self.round + 1;
        if next >= self.rounds_total() {
            self.phase = Phase::Won;
            tracing::info!(rounds = self.rounds_total(), "game won");
            return;
        }
        self.round = next;
        self.begin_round();
        tracing::info!(round = self.round + 1, budget = self.time_left, "next round");
    }

    fn begin_round(&mut self) {
        self.circles = generate_circles(&self.config, &mut self.rng);
        self.time_left = self.round_budget();
        self.round_serial += 1;
    }

    fn lose(&mut self, reason: LossReason) {
        self.phase = Phase::Lost;
        self.loss = Some(reason);
        tracing::info!(round = self.round + 1, ?reason, "game lost");
    }

    /// Banner text under the title.
    pub fn status_line(&self) -> String {
        match self.phase {
            Phase::Waiting => "Click all red circles before time runs out!".to_string(),
            Phase::Playing => format!("Round {} of {}", self.round + 1, self.rounds_total()),
            Phase::Won => "You conquered all rounds!".to_string(),
            Phase::Lost => "Game Over".to_string(),
        }
    }

    /// Summary shown on the game-over overlay.
    pub fn outcome_detail(&self) -> String {
        match self.phase {
            Phase::Won => format!("You completed all {} rounds!", self.rounds_total()),
            _ => format!(
                "You reached round {} of {}",
                self.round + 1,
                self.rounds_total()
            ),
        }
    }
}

// ---------------- Reducer & Actions -----------------
#[derive(Clone, Debug)]
pub enum GameAction {
    Start,
    Click { id: usize },
    Tick, // once per countdown period
    TimeUp,
}

impl Reducible for GameState {
    type Action = GameAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use GameAction::*;
        let mut new = (*self).clone();
        let changed = match action {
            Start => {
                new.start();
                true
            }
            Click { id } => new.click(id),
            Tick => new.tick(),
            TimeUp => new.time_up(),
        };
        if changed { Rc::new(new) } else { self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fresh(seed: u64) -> GameState {
        GameState::new(GameConfig::default(), seed)
    }

    fn red_ids(state: &GameState) -> Vec<usize> {
        state
            .circles
            .iter()
            .filter(|c| c.is_red())
            .map(|c| c.id)
            .collect()
    }

    fn first_non_red(state: &GameState) -> usize {
        state.circles.iter().find(|c| !c.is_red()).unwrap().id
    }

    fn clear_round(state: &mut GameState) {
        for id in red_ids(state) {
            assert!(state.click(id));
        }
    }

    #[test]
    fn generated_rounds_have_five_reds_and_palette_others() {
        let cfg = GameConfig::default();
        for seed in 0..200 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let circles = generate_circles(&cfg, &mut rng);
            assert_eq!(circles.len(), 12);
            assert_eq!(circles.iter().filter(|c| c.is_red()).count(), 5);
            assert!(
                circles
                    .iter()
                    .filter(|c| !c.is_red())
                    .all(|c| cfg.palette.contains(&c.color))
            );
            assert!(circles.iter().all(|c| !c.is_clicked));
            assert!(circles.iter().all(|c| c.is_red() == (c.id < 5)));
            let mut ids: Vec<usize> = circles.iter().map(|c| c.id).collect();
            ids.sort_unstable();
            assert_eq!(ids, (0..12).collect::<Vec<_>>());
        }
    }

    #[test]
    fn generated_order_is_shuffled() {
        let cfg = GameConfig::default();
        let reds_lead = (0..50).all(|seed| {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            generate_circles(&cfg, &mut rng)
                .iter()
                .take(5)
                .all(Circle::is_red)
        });
        assert!(!reds_lead);
    }

    #[test]
    fn starts_waiting_with_no_circles() {
        let state = fresh(1);
        assert_eq!(state.phase, Phase::Waiting);
        assert!(state.circles.is_empty());
        assert_eq!(state.status_line(), "Click all red circles before time runs out!");
    }

    #[test]
    fn clicks_ignored_outside_playing() {
        let mut state = fresh(1);
        assert!(!state.click(0));
        assert!(!state.tick());
        assert!(!state.time_up());
    }

    #[test]
    fn start_initializes_first_round() {
        let mut state = fresh(2);
        state.start();
        assert_eq!(state.phase, Phase::Playing);
        assert_eq!(state.round, 0);
        assert_eq!(state.time_left, 10);
        assert_eq!(state.reds_remaining(), 5);
        assert_eq!(state.round_serial, 1);
        assert_eq!(state.status_line(), "Round 1 of 7");
    }

    #[test]
    fn clearing_every_round_wins() {
        let mut state = fresh(3);
        state.start();
        let schedule = state.config.round_schedule.clone();
        for (round, budget) in schedule.iter().enumerate() {
            assert_eq!(state.phase, Phase::Playing);
            assert_eq!(state.round, round);
            assert_eq!(state.time_left, *budget);
            clear_round(&mut state);
        }
        assert_eq!(state.phase, Phase::Won);
        assert_eq!(state.round, 6);
        assert_eq!(state.outcome_detail(), "You completed all 7 rounds!");
        assert!(!state.click(first_non_red(&state)));
    }

    #[test]
    fn clearing_first_round_moves_to_second_budget() {
        let mut state = fresh(4);
        state.start();
        let mut ids = red_ids(&state);
        ids.reverse();
        for id in ids {
            state.click(id);
        }
        assert_eq!(state.phase, Phase::Playing);
        assert_eq!(state.round, 1);
        assert_eq!(state.time_left, 7);
        assert_eq!(state.reds_remaining(), 5);
        assert_eq!(state.round_serial, 2);
    }

    #[test]
    fn wrong_color_loses_immediately() {
        let mut state = fresh(5);
        state.start();
        let reds = red_ids(&state);
        state.click(reds[0]);
        let wrong = first_non_red(&state);
        let color = state.circles.iter().find(|c| c.id == wrong).unwrap().color;
        assert!(state.click(wrong));
        assert_eq!(state.phase, Phase::Lost);
        assert_eq!(state.round, 0);
        assert_eq!(state.loss, Some(LossReason::WrongColor { color }));
        assert_eq!(state.outcome_detail(), "You reached round 1 of 7");
        assert!(state.loss.unwrap().message().contains(color.label()));
        assert!(!state.click(reds[1]));
    }

    #[test]
    fn repeated_and_unknown_clicks_are_noops() {
        let mut state = fresh(6);
        state.start();
        let red = red_ids(&state)[0];
        assert!(state.click(red));
        assert!(!state.click(red));
        assert!(!state.click(999));
        assert_eq!(state.reds_remaining(), 4);
        assert_eq!(state.phase, Phase::Playing);
    }

    #[test]
    fn timeout_with_reds_left_loses() {
        let mut state = fresh(7);
        state.start();
        state.click(red_ids(&state)[0]);
        for _ in 0..10 {
            assert!(state.tick());
        }
        assert_eq!(state.time_left, 0);
        assert!(!state.tick());
        assert_eq!(state.phase, Phase::Playing);
        assert!(state.time_up());
        assert_eq!(state.phase, Phase::Lost);
        assert_eq!(state.loss, Some(LossReason::TimeUp));
        assert_eq!(LossReason::TimeUp.message(), "Time's up! Try again!");
        assert!(!state.time_up());
    }

    #[test]
    fn early_time_up_signal_is_ignored() {
        let mut state = fresh(8);
        state.start();
        state.tick();
        assert!(!state.time_up());
        assert_eq!(state.phase, Phase::Playing);
    }

    #[test]
    fn final_click_at_zero_beats_timeout() {
        let mut state = fresh(9);
        state.start();
        for _ in 0..10 {
            state.tick();
        }
        assert_eq!(state.time_left, 0);
        clear_round(&mut state);
        assert!(!state.time_up());
        assert_eq!(state.phase, Phase::Playing);
        assert_eq!(state.round, 1);
        assert_eq!(state.time_left, 7);
    }

    #[test]
    fn final_click_at_zero_on_last_round_wins() {
        let mut state = fresh(10);
        state.start();
        for _ in 0..6 {
            clear_round(&mut state);
        }
        assert_eq!(state.time_left, 1);
        state.tick();
        clear_round(&mut state);
        assert!(!state.time_up());
        assert_eq!(state.phase, Phase::Won);
    }

    #[test]
    fn restart_after_loss_resets_everything() {
        let mut state = fresh(11);
        state.start();
        clear_round(&mut state);
        let wrong = first_non_red(&state);
        state.click(wrong);
        assert_eq!(state.phase, Phase::Lost);
        assert_eq!(state.round, 1);
        state.start();
        assert_eq!(state.phase, Phase::Playing);
        assert_eq!(state.round, 0);
        assert_eq!(state.time_left, 10);
        assert_eq!(state.loss, None);
        assert_eq!(state.circles.len(), 12);
        assert_eq!(state.reds_remaining(), 5);
        assert_eq!(state.round_serial, 3);
    }

    #[test]
    fn restart_after_win_resets_everything() {
        let mut state = fresh(12);
        state.start();
        for _ in 0..7 {
            clear_round(&mut state);
        }
        assert_eq!(state.phase, Phase::Won);
        state.start();
        assert_eq!(state.phase, Phase::Playing);
        assert_eq!(state.round, 0);
        assert_eq!(state.time_left, 10);
        assert_eq!(state.reds_remaining(), 5);
    }

    #[test]
    fn reducer_returns_same_rc_for_noops() {
        let state = Rc::new(fresh(13));
        let after = state.clone().reduce(GameAction::Click { id: 0 });
        assert!(Rc::ptr_eq(&state, &after));
        let started = after.reduce(GameAction::Start);
        assert_eq!(started.phase, Phase::Playing);
        let ticked = started.clone().reduce(GameAction::Tick);
        assert_eq!(ticked.time_left, 9);
        let same = ticked.clone().reduce(GameAction::TimeUp);
        assert!(Rc::ptr_eq(&ticked, &same));
    }

    #[test]
    fn override_schedule_drives_budgets() {
        let cfg = GameConfig::from_json(r#"{"round_schedule":[6,6,5,5,3,2,2]}"#).unwrap();
        let mut state = GameState::new(cfg, 14);
        state.start();
        for budget in [6, 6, 5, 5, 3, 2, 2] {
            assert_eq!(state.time_left, budget);
            assert_eq!(state.circles.len(), 12);
            assert_eq!(state.reds_remaining(), 5);
            clear_round(&mut state);
        }
        assert_eq!(state.phase, Phase::Won);
    }
}
