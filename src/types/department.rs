use super::DepartmentId;
use serde::{Deserialize, Serialize};

/// A university department; owns specialties and professors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Department {
    pub id: DepartmentId,
    pub name: String,
}
