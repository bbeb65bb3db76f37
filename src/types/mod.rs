mod config;
mod department;
mod formation;
mod module;
mod period;
mod professor;
mod room;
mod schedule;
mod specialty;
mod student;

pub use config::*;
pub use department::*;
pub use formation::*;
pub use module::*;
pub use period::*;
pub use professor::*;
pub use room::*;
pub use schedule::*;
pub use specialty::*;
pub use student::*;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Newtype for department identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DepartmentId(pub i64);

/// Newtype for specialty identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SpecialtyId(pub i64);

/// Newtype for formation identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct FormationId(pub i64);

/// Newtype for module identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ModuleId(pub i64);

/// Newtype for student identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct StudentId(pub i64);

/// Newtype for professor identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ProfessorId(pub i64);

/// Newtype for room identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RoomId(pub i64);

macro_rules! impl_id_display {
    ($($t:ty),*) => {
        $(
            impl fmt::Display for $t {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    write!(f, "{}", self.0)
                }
            }
        )*
    };
}

impl_id_display!(
    DepartmentId,
    SpecialtyId,
    FormationId,
    ModuleId,
    StudentId,
    ProfessorId,
    RoomId
);

/// Academic cycle of a specialty/formation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cycle {
    Licence,
    Master,
}

impl fmt::Display for Cycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cycle::Licence => write!(f, "Licence"),
            Cycle::Master => write!(f, "Master"),
        }
    }
}
