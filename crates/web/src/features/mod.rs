pub mod champions;
pub mod events;
pub mod leaderboard;
pub mod participants;
pub mod registry;
pub mod scores;
