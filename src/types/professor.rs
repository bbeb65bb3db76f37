use super::{DepartmentId, ProfessorId};
use serde::{Deserialize, Serialize};

/// A proctor professor attached to a department.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Professor {
    pub id: ProfessorId,
    pub name: String,
    pub dept_id: DepartmentId,
}
