pub mod champions;
pub mod leaderboard;
pub mod locks;
