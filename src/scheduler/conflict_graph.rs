use crate::types::{ModuleId, ScheduleInput};
use std::collections::{HashMap, HashSet};

/// Module-to-module conflict graph: an edge means two modules share at least one student and
/// so cannot be scheduled on the same day. Built from the implicit formation-membership
/// enrollment rule (every student takes every module of their formation), the same way
/// `original_source/scripts/optimize.py`'s PHASE 1 derives `student_modules` from
/// `modules_by_formation`.
pub struct ConflictGraph {
    edges: HashMap<ModuleId, HashSet<ModuleId>>,
}

impl ConflictGraph {
    pub fn build(input: &ScheduleInput) -> Self {
        let modules_by_formation = input.modules_by_formation();

        let mut student_modules: HashMap<crate::types::StudentId, HashSet<ModuleId>> =
            HashMap::new();
        for student in &input.students {
            let modules = modules_by_formation
                .get(&student.formation_id)
                .cloned()
                .unwrap_or_default();
            student_modules.insert(student.id, modules.into_iter().collect());
        }

        let mut edges: HashMap<ModuleId, HashSet<ModuleId>> = HashMap::new();
        for modules in student_modules.values() {
            let mods: Vec<&ModuleId> = modules.iter().collect();
            for i in 0..mods.len() {
                for j in (i + 1)..mods.len() {
                    edges.entry(*mods[i]).or_default().insert(*mods[j]);
                    edges.entry(*mods[j]).or_default().insert(*mods[i]);
                }
            }
        }

        Self { edges }
    }

    pub fn neighbors(&self, module_id: ModuleId) -> HashSet<ModuleId> {
        self.edges.get(&module_id).cloned().unwrap_or_default()
    }

    pub fn degree(&self, module_id: ModuleId) -> usize {
        self.edges.get(&module_id).map(HashSet::len).unwrap_or(0)
    }
}
