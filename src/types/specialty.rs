use super::{Cycle, DepartmentId, SpecialtyId};
use serde::{Deserialize, Serialize};

/// A field of study owned by a department; owns formations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Specialty {
    pub id: SpecialtyId,
    pub name: String,
    pub cycle: Cycle,
    pub dept_id: DepartmentId,
}
