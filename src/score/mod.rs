//! Score, level and speed progression for a single run.

use crate::game::{
    BASE_MOVE_INTERVAL, BASE_SPEED, FoodKind, MAX_SPEED, NORMAL_FOOD_GROWTH, NORMAL_FOOD_POINTS,
    POINTS_PER_LEVEL, SPECIAL_FOOD_GROWTH, SPECIAL_FOOD_POINTS,
};

/// What eating one piece of food is worth.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct FoodReward {
    pub points: u32,
    pub growth: u32,
    /// Set when this meal pushed the run into a new level.
    pub level_up: bool,
}

/// Points and growth granted for a food kind.
pub fn reward_for(kind: FoodKind) -> (u32, u32) {
    match kind {
        FoodKind::Normal => (NORMAL_FOOD_POINTS, NORMAL_FOOD_GROWTH),
        FoodKind::Special => (SPECIAL_FOOD_POINTS, SPECIAL_FOOD_GROWTH),
    }
}

/// Level reached with `score` points.
pub fn level_for(score: u32) -> u32 {
    score / POINTS_PER_LEVEL + 1
}

/// Speed granted on reaching `level`.
pub fn speed_for(level: u32) -> u32 {
    (BASE_SPEED + level).min(MAX_SPEED)
}

/// Ticks between two movement steps at `speed`.
pub fn move_interval(speed: u32) -> u32 {
    BASE_MOVE_INTERVAL.saturating_sub(speed).max(1)
}

/// Score tracker. Score, level and speed never decrease within a run.
#[derive(Clone, Debug)]
pub struct Progress {
    score: u32,
    level: u32,
    speed: u32,
}

impl Default for Progress {
    fn default() -> Self {
        Progress {
            score: 0,
            level: 1,
            speed: BASE_SPEED,
        }
    }
}

impl Progress {
    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn speed(&self) -> u32 {
        self.speed
    }

    /// Credits a meal. Speed is only recomputed when the level goes up.
    pub fn on_food_eaten(&mut self, kind: FoodKind) -> FoodReward {
        let (points, growth) = reward_for(kind);
        self.score += points;

        let new_level = level_for(self.score);
        let level_up = new_level > self.level;
        if level_up {
            self.level = new_level;
            self.speed = speed_for(new_level);
        }

        FoodReward {
            points,
            growth,
            level_up,
        }
    }
}

/// Fixed-step movement throttle decoupled from the tick rate.
///
/// Each call to [`MoveScheduler::tick`] accumulates one tick; a step is due
/// once the accumulator reaches the interval for the current speed.
#[derive(Clone, Debug, Default)]
pub struct MoveScheduler {
    accumulated: u32,
}

impl MoveScheduler {
    pub fn tick(&mut self, speed: u32) -> bool {
        self.accumulated += 1;
        if self.accumulated >= move_interval(speed) {
            self.accumulated = 0;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mixed_meals_add_up() {
        let mut progress = Progress::default();
        let meals = [
            FoodKind::Normal,
            FoodKind::Special,
            FoodKind::Normal,
            FoodKind::Normal,
            FoodKind::Special,
            FoodKind::Special,
            FoodKind::Normal,
        ];
        for kind in meals {
            progress.on_food_eaten(kind);
            assert_eq!(progress.level(), progress.score() / 100 + 1);
        }
        assert_eq!(progress.score(), 10 * 4 + 50 * 3);
        assert_eq!(progress.level(), 2);
        assert_eq!(progress.speed(), 10);
    }

    #[test]
    fn rewards_match_the_food_kind() {
        let mut progress = Progress::default();
        let normal = progress.on_food_eaten(FoodKind::Normal);
        assert_eq!((normal.points, normal.growth), (10, 1));
        let special = progress.on_food_eaten(FoodKind::Special);
        assert_eq!((special.points, special.growth), (50, 3));
    }

    #[test]
    fn reaching_one_hundred_points_levels_up() {
        let mut progress = Progress::default();
        for _ in 0..9 {
            assert!(!progress.on_food_eaten(FoodKind::Normal).level_up);
        }
        assert_eq!((progress.level(), progress.speed()), (1, 8));
        assert!(progress.on_food_eaten(FoodKind::Normal).level_up);
        assert_eq!(progress.score(), 100);
        assert_eq!((progress.level(), progress.speed()), (2, 10));
    }

    #[test]
    fn speed_is_capped() {
        assert_eq!(speed_for(2), 10);
        assert_eq!(speed_for(7), 15);
        assert_eq!(speed_for(40), 15);

        let mut progress = Progress::default();
        for _ in 0..40 {
            progress.on_food_eaten(FoodKind::Special);
        }
        assert_eq!(progress.score(), 2000);
        assert_eq!(progress.level(), 21);
        assert_eq!(progress.speed(), 15);
    }

    #[test]
    fn interval_never_drops_below_one_tick() {
        assert_eq!(move_interval(8), 4);
        assert_eq!(move_interval(10), 2);
        assert_eq!(move_interval(11), 1);
        assert_eq!(move_interval(15), 1);
    }

    #[test]
    fn scheduler_fires_once_per_interval() {
        let mut scheduler = MoveScheduler::default();
        let fired: Vec<bool> = (0..8).map(|_| scheduler.tick(8)).collect();
        assert_eq!(
            fired,
            [false, false, false, true, false, false, false, true]
        );

        let mut fast = MoveScheduler::default();
        assert!((0..5).all(|_| fast.tick(15)));
    }
}
