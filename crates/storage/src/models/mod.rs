pub mod champions;
pub mod declaration;
pub mod event;
pub mod group_event;
pub mod group_team;
pub mod judge;
pub mod lock;
pub mod participant;
pub mod points;
pub mod score;
pub mod section;

pub use champions::{ChampionEntry, FinalChampions};
pub use declaration::DeclaredResult;
pub use event::{Event, IndividualScoring};
pub use group_event::{GroupEvent, GroupScoring};
pub use group_team::{GroupTeam, TeamScore};
pub use judge::Judge;
pub use lock::{GroupEventLock, GroupLocker, JudgeLock};
pub use participant::{AgeCategory, Participant, UNCATEGORIZED_CHEST_PREFIX};
pub use points::{PointsConfig, PointsRow};
pub use score::{CRITERIA_PER_SCORE, CRITERION_MAX, CRITERION_MIN, Score};
pub use section::Section;
