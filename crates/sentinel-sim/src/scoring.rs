//! Running score, combo, and level state tracked by the engine.

use sentinel_core::constants::*;

/// Score counters and the combo window.
#[derive(Debug, Clone)]
pub struct ScoreState {
    pub score: u64,
    pub neutralized: u32,
    pub level: u32,
    pub combo: f32,
    pub last_kill_secs: f64,
}

impl Default for ScoreState {
    fn default() -> Self {
        Self {
            score: 0,
            neutralized: 0,
            level: 1,
            combo: 1.0,
            last_kill_secs: f64::NEG_INFINITY,
        }
    }
}

impl ScoreState {
    /// Bank one neutralization. `base_award` already includes weapon
    /// effectiveness; the combo multiplier is applied here. Returns the
    /// awarded points and the new level when a boundary was crossed.
    pub fn register_kill(&mut self, base_award: f32, now_secs: f64) -> (u32, Option<u32>) {
        if now_secs - self.last_kill_secs < COMBO_WINDOW_SECS {
            self.combo = (self.combo + COMBO_STEP).min(COMBO_MAX);
        } else {
            self.combo = 1.0;
        }
        self.last_kill_secs = now_secs;

        let award = (base_award * self.combo).floor().max(0.0) as u32;
        self.score += award as u64;
        self.neutralized += 1;

        let new_level = self.neutralized / KILLS_PER_LEVEL + 1;
        let leveled = if new_level > self.level {
            self.level = new_level;
            Some(new_level)
        } else {
            None
        };
        (award, leveled)
    }
}
