use super::{Cycle, FormationId, SpecialtyId};
use serde::{Deserialize, Serialize};

/// A specific semester of a specialty: a cohort of students taking the same modules.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Formation {
    pub id: FormationId,
    pub specialty_id: SpecialtyId,
    pub cycle: Cycle,
    pub semester: u8,
}
