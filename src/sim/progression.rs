//! Score-driven difficulty scaling
//!
//! Separate from exit-based level changes: once the score reaches the current
//! distance threshold, the level number goes up and the game speeds up. Both
//! mechanisms share `current_level`. Nothing in the simulation adds to the
//! score; the integrator feeds it through `Game::add_progress`.

use super::state::Session;

/// Distance thresholds: easy, medium, hard, expert, master
pub const DISTANCE_THRESHOLDS: [u64; 5] = [1000, 2500, 4000, 6000, 8500];

/// Highest level reachable through score thresholds
pub const MAX_PROGRESSION_LEVEL: u32 = 5;

/// (threshold, speed multiplier) taken on when reaching levels 2..=5
const LEVEL_STEPS: [(u64, f32); 4] = [
    (DISTANCE_THRESHOLDS[1], 2.5),
    (DISTANCE_THRESHOLDS[2], 4.0),
    (DISTANCE_THRESHOLDS[3], 5.5),
    (DISTANCE_THRESHOLDS[4], 7.0),
];

/// Result of a progression check
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Progression {
    /// Threshold not reached
    Unchanged,
    /// Level went up, with the new speed multiplier
    Escalated { level: u32, speed: f32 },
    /// Passed the final level
    Complete,
}

/// Apply at most one difficulty step if the score has reached the threshold
pub fn check_progression(session: &mut Session) -> Progression {
    if session.score < session.distance_threshold {
        return Progression::Unchanged;
    }

    session.current_level += 1;
    let level = session.current_level;
    if level > MAX_PROGRESSION_LEVEL {
        return Progression::Complete;
    }

    // Levels below 2 cannot be reached by incrementing from 1
    let step = level
        .checked_sub(2)
        .and_then(|i| LEVEL_STEPS.get(i as usize));
    if let Some(&(threshold, speed)) = step {
        session.distance_threshold = threshold;
        session.speed_multiplier = speed;
    }
    log::info!("Level {} reached! Speed: {}x", level, session.speed_multiplier);
    Progression::Escalated {
        level,
        speed: session.speed_multiplier,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_below_threshold_unchanged() {
        let mut session = Session::new();
        session.score = 999;
        assert_eq!(check_progression(&mut session), Progression::Unchanged);
        assert_eq!(session.current_level, 1);
        assert_eq!(session.speed_multiplier, 1.0);
    }

    #[test]
    fn test_full_ladder() {
        let mut session = Session::new();
        let expected = [(2, 2500, 2.5), (3, 4000, 4.0), (4, 6000, 5.5), (5, 8500, 7.0)];
        for (level, threshold, speed) in expected {
            session.score = session.distance_threshold;
            assert_eq!(
                check_progression(&mut session),
                Progression::Escalated { level, speed }
            );
            assert_eq!(session.distance_threshold, threshold);
        }

        session.score = 8500;
        assert_eq!(check_progression(&mut session), Progression::Complete);
        assert_eq!(session.current_level, 6);
    }

    #[test]
    fn test_one_step_per_check() {
        let mut session = Session::new();
        session.score = 100_000;
        check_progression(&mut session);
        assert_eq!(session.current_level, 2);
        assert_eq!(session.distance_threshold, 2500);
    }

    #[test]
    fn test_shares_level_counter_with_exits() {
        // Already on level 3 through exits: the first threshold jumps to step 4
        let mut session = Session::new();
        session.current_level = 3;
        session.score = 1000;
        assert_eq!(
            check_progression(&mut session),
            Progression::Escalated { level: 4, speed: 5.5 }
        );
        assert_eq!(session.distance_threshold, 6000);
    }
}
