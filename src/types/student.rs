use super::{FormationId, StudentId};
use serde::{Deserialize, Serialize};

/// A student assigned to one formation and one group within it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    pub id: StudentId,
    pub name: String,
    pub formation_id: FormationId,
    /// Administrative subdivision of the formation's students, starting at 1.
    pub group: u32,
}
