use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PointsRow {
    pub first: u32,
    pub second: u32,
    pub third: u32,
}

impl PointsRow {
    /// Points for a 1-based rank. Ranks past third earn nothing.
    pub fn for_rank(&self, rank: usize) -> u32 {
        match rank {
            1 => self.first,
            2 => self.second,
            3 => self.third,
            _ => 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PointsConfig {
    pub individual: PointsRow,
    pub group: PointsRow,
}

impl Default for PointsConfig {
    fn default() -> Self {
        Self {
            individual: PointsRow {
                first: 5,
                second: 3,
                third: 1,
            },
            group: PointsRow {
                first: 10,
                second: 5,
                third: 3,
            },
        }
    }
}
