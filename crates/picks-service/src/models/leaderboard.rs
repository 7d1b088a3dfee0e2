use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Per-user standings aggregate, recomputed on demand and never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default, ToSchema)]
pub struct LeaderboardEntry {
    pub user_id: Uuid,
    pub username: String,
    /// Weighted win count; a triple play win contributes 3, a regular one 1.
    pub weighted_wins: i32,
    /// Weighted loss count.
    pub weighted_losses: i32,
    /// Weighted push count. Pushes never enter the win percentage.
    pub weighted_pushes: i32,
    /// `weighted_wins / (weighted_wins + weighted_losses)` as a percentage,
    /// one decimal place; 0 when the user has no decided picks.
    pub win_percentage: Decimal,
    /// 1-based competition rank: ties share the lower rank number and the
    /// following rank skips (1, 1, 3).
    pub rank: u32,
    /// Half-game increments behind the leader; 0 for every rank-1 entry.
    pub games_back: Decimal,
}
