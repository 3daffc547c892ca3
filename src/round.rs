use log::debug;
use rand::Rng;
use serde::Deserialize;

use crate::config::{Difficulty, FOOD_AWARD, SUCCESS_SCORE};
use crate::food;
use crate::game::GameEvent;
use crate::grid::{Cell, Grid};
use crate::input::Direction;
use crate::snake::{SnakeBody, Steering};

/// When the self-collision test runs relative to tail removal.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TailRule {
    /// The cell the tail is about to vacate still counts as occupied.
    #[default]
    Strict,
    /// The tail is removed before the head is tested.
    Lenient,
}

/// How a simulation step left the round.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum RoundOutcome {
    Running,
    Collision,
    Timeout,
    Won,
}

/// Everything that belongs to one round; replaced on every reset.
#[derive(Debug, Clone)]
pub struct RoundState {
    pub snake: SnakeBody,
    pub food: Cell,
    pub steering: Steering,
    pub score: u32,
    pub elapsed_ms: u64,
    pub time_limit_ms: u64,
    pub difficulty: Difficulty,
    grid: Grid,
    tail_rule: TailRule,
}

impl RoundState {
    /// Starts a fresh round with the standard five-cell snake heading right.
    #[must_use]
    pub fn new<R: Rng + ?Sized>(
        rng: &mut R,
        grid: Grid,
        difficulty: Difficulty,
        tail_rule: TailRule,
    ) -> Self {
        let snake = SnakeBody::starting(grid);
        let food = food::spawn(rng, grid, &snake);

        Self {
            snake,
            food,
            steering: Steering::new(Direction::Right),
            score: 0,
            elapsed_ms: 0,
            time_limit_ms: difficulty.time_limit_ms(),
            difficulty,
            grid,
            tail_rule,
        }
    }

    #[must_use]
    pub fn grid(&self) -> Grid {
        self.grid
    }

    #[must_use]
    pub fn tail_rule(&self) -> TailRule {
        self.tail_rule
    }

    /// Queues a direction change for the next movement step.
    pub fn steer(&mut self, direction: Direction) {
        self.steering.buffer(direction);
    }

    /// Whole seconds remaining, never negative.
    #[must_use]
    pub fn time_left_secs(&self) -> u64 {
        self.time_limit_ms.saturating_sub(self.elapsed_ms) / 1000
    }

    /// Advances the round by one movement step and `delta_ms` of play time.
    ///
    /// Play time accrues on every step. Collision ends the step; otherwise a
    /// timeout is reported before a win, and reaching the success score wins
    /// even on the tick the clock runs out.
    pub fn step<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        delta_ms: u64,
        events: &mut Vec<GameEvent>,
    ) -> RoundOutcome {
        let direction = self.steering.take();
        let new_head = self.snake.advance(self.grid, direction);
        let ate_food = new_head == self.food;

        let hit_before_shift = self.snake.will_collide(new_head);

        if ate_food {
            self.score += FOOD_AWARD;
            self.food = food::spawn(rng, self.grid, &self.snake);
            events.push(GameEvent::Eat);
            debug!("food eaten, score {} length {}", self.score, self.snake.len());
        }

        self.snake.grow_or_shift(ate_food);
        self.elapsed_ms = self.elapsed_ms.saturating_add(delta_ms);

        let collided = match self.tail_rule {
            TailRule::Strict => hit_before_shift,
            TailRule::Lenient => self.snake.will_collide(new_head),
        };
        if collided {
            events.push(GameEvent::Collision);
            return RoundOutcome::Collision;
        }

        let timed_out = self.elapsed_ms >= self.time_limit_ms;
        if timed_out {
            events.push(GameEvent::Timeout);
        }

        if self.score >= SUCCESS_SCORE {
            events.push(GameEvent::Win);
            return RoundOutcome::Won;
        }

        if timed_out {
            RoundOutcome::Timeout
        } else {
            RoundOutcome::Running
        }
    }
}
