use super::{
    Config, Department, Formation, FormationId, Module, ModuleId, Period, Professor,
    ProfessorId, Room, RoomId, RoomKind, Specialty, Student,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// All input data bundled together, as loaded by the Loader.
#[derive(Debug)]
pub struct ScheduleInput {
    pub departments: Vec<Department>,
    pub specialties: Vec<Specialty>,
    pub formations: Vec<Formation>,
    pub modules: Vec<Module>,
    pub students: Vec<Student>,
    pub professors: Vec<Professor>,
    pub rooms: Vec<Room>,
    pub config: Config,
}

impl ScheduleInput {
    /// Department that owns a module, through formation -> specialty -> department.
    pub fn module_department(&self, module_id: ModuleId) -> Option<super::DepartmentId> {
        let module = self.modules.iter().find(|m| m.id == module_id)?;
        let formation = self
            .formations
            .iter()
            .find(|f| f.id == module.formation_id)?;
        let specialty = self
            .specialties
            .iter()
            .find(|s| s.id == formation.specialty_id)?;
        Some(specialty.dept_id)
    }

    pub fn modules_by_formation(&self) -> HashMap<FormationId, Vec<ModuleId>> {
        let mut map: HashMap<FormationId, Vec<ModuleId>> = HashMap::new();
        for module in &self.modules {
            map.entry(module.formation_id).or_default().push(module.id);
        }
        map
    }
}

/// One room placement for one module: the unit the Writer turns into an `examens` row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExamRecord {
    pub module_id: ModuleId,
    pub period: Period,
    pub room_id: RoomId,
    pub room_kind: RoomKind,
    pub formation_id: FormationId,
    /// Comma-joined ascending list of group numbers sharing this room, e.g. "1" or "1,3".
    pub groups: String,
}

/// One proctor assignment: the unit the Writer turns into a `surveillances` row.
/// `room_index` indexes into the module's exam records (round-robin distributed).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProctoringAssignment {
    pub module_id: ModuleId,
    pub room_index: usize,
    pub professor_id: ProfessorId,
}

/// A module for which fewer proctors were found than required.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnderProctoredWarning {
    pub module_id: ModuleId,
    pub short_by: u32,
}

/// Metadata about the generated schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleMetadata {
    pub generated_at: String,
    pub algorithm_version: String,
    pub solve_time_ms: u64,
    pub chromatic_estimate: usize,
    pub num_days: usize,
    pub num_slots: usize,
}

/// The complete generated schedule, prior to being written to the database.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Schedule {
    pub exams: Vec<ExamRecord>,
    pub proctorings: Vec<ProctoringAssignment>,
    pub underproctored: Vec<UnderProctoredWarning>,
    pub student_violations: u32,
    pub metadata: ScheduleMetadata,
}

impl Schedule {
    pub fn exams_for_module(&self, module_id: ModuleId) -> Vec<&ExamRecord> {
        self.exams
            .iter()
            .filter(|e| e.module_id == module_id)
            .collect()
    }

    pub fn proctorings_for_module(&self, module_id: ModuleId) -> Vec<&ProctoringAssignment> {
        self.proctorings
            .iter()
            .filter(|p| p.module_id == module_id)
            .collect()
    }

    pub fn total_proctorings(&self) -> usize {
        self.proctorings.len()
    }
}
