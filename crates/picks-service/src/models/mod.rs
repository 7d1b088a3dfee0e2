pub mod games;
pub mod leaderboard;
pub mod picks;
pub mod users;
