//! XP reward schedule
//!
//! Flat XP amounts for named actions. Amounts are the same at every level;
//! the cost curve alone is what slows progression down.

use serde::{Deserialize, Serialize};

/// Actions that carry a fixed XP reward
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RewardKind {
    StudySession15Min,
    StudySession30Min,
    StudySession60Min,
    QuizEasy,
    QuizMedium,
    QuizHard,
    ChallengeEasy,
    ChallengeMedium,
    ChallengeHard,
    ChallengeExtreme,
    AchievementUnlocked,
    FirstChallengeCompleted,
    PerfectScore,
    Streak7Days,
    Streak30Days,
}

impl RewardKind {
    /// XP granted for this action
    pub fn xp(&self) -> u64 {
        match self {
            RewardKind::StudySession15Min => 10,
            RewardKind::StudySession30Min => 25,
            RewardKind::StudySession60Min => 50,
            RewardKind::QuizEasy => 15,
            RewardKind::QuizMedium => 30,
            RewardKind::QuizHard => 50,
            RewardKind::ChallengeEasy => 50,
            RewardKind::ChallengeMedium => 100,
            RewardKind::ChallengeHard => 200,
            RewardKind::ChallengeExtreme => 500,
            RewardKind::AchievementUnlocked => 100,
            RewardKind::FirstChallengeCompleted => 250,
            RewardKind::PerfectScore => 150,
            RewardKind::Streak7Days => 100,
            RewardKind::Streak30Days => 500,
        }
    }

    /// Stable key for logs and stored action records
    pub fn key(&self) -> &'static str {
        match self {
            RewardKind::StudySession15Min => "study_session_15min",
            RewardKind::StudySession30Min => "study_session_30min",
            RewardKind::StudySession60Min => "study_session_60min",
            RewardKind::QuizEasy => "quiz_easy",
            RewardKind::QuizMedium => "quiz_medium",
            RewardKind::QuizHard => "quiz_hard",
            RewardKind::ChallengeEasy => "challenge_easy",
            RewardKind::ChallengeMedium => "challenge_medium",
            RewardKind::ChallengeHard => "challenge_hard",
            RewardKind::ChallengeExtreme => "challenge_extreme",
            RewardKind::AchievementUnlocked => "achievement_unlocked",
            RewardKind::FirstChallengeCompleted => "first_challenge_completed",
            RewardKind::PerfectScore => "perfect_score",
            RewardKind::Streak7Days => "streak_7_days",
            RewardKind::Streak30Days => "streak_30_days",
        }
    }
}
