use serde::{Deserialize, Serialize};

/// A (day, slot) cell in the exam calendar.
///
/// `day` indexes into the ordered list of exam days produced by
/// [`crate::types::Config::exam_days`] (rest weekdays already excluded), not a day-of-week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Period {
    pub day: u32,
    pub slot: u32,
}

impl Period {
    pub fn new(day: u32, slot: u32) -> Self {
        Self { day, slot }
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "D{}S{}", self.day + 1, self.slot + 1)
    }
}
