use super::{FormationId, ModuleId};
use serde::{Deserialize, Serialize};

/// A course that yields a single exam.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Module {
    pub id: ModuleId,
    pub name: String,
    pub formation_id: FormationId,
}
