use crate::scheduler::ConflictGraph;
use crate::types::{ModuleId, Period, ScheduleInput};
use std::collections::HashMap;

/// Result of the day/slot assignment pass.
pub struct DaySlotPlan {
    pub periods: HashMap<ModuleId, Period>,
    /// Minimum number of days a perfect coloring of the conflict graph would need.
    pub chromatic_estimate: usize,
    /// Student-days on which a student ends up with more than one exam, counted once per
    /// exam beyond the first (mirrors the Python reference's `student_violations` counter).
    pub student_violations: u32,
}

/// Phase 2: assign every module a (day, slot) pair.
///
/// Two passes, both greedy and both grounded on
/// `original_source/scripts/optimize.py`'s PHASE 2:
/// 1. A chromatic-number probe: process modules by descending conflict-degree, give each the
///    lowest color not already used by an assigned neighbor. The number of colors used is a
///    lower bound on the days needed for a conflict-free calendar; it's reported, not acted on.
/// 2. The real assignment: same processing order, this time placing each module on the
///    least-loaded (day, slot) among days that don't conflict with an already-placed neighbor.
///    If every day conflicts (more modules than the calendar has room for), fall back to the
///    day with the fewest conflicting neighbors already on it, again picking the least-loaded
///    slot — this is where `student_violations` comes from.
pub fn assign_days_and_slots(input: &ScheduleInput, graph: &ConflictGraph) -> DaySlotPlan {
    let num_days = input.config.exam_days().len();
    let num_slots = input.config.slots_per_day() as usize;

    let mut module_ids: Vec<ModuleId> = input.modules.iter().map(|m| m.id).collect();
    module_ids.sort_by_key(|m| std::cmp::Reverse(graph.degree(*m)));

    let chromatic_estimate = estimate_chromatic_number(&module_ids, graph);

    let mut module_day: HashMap<ModuleId, usize> = HashMap::new();
    let mut module_slot: HashMap<ModuleId, usize> = HashMap::new();
    let mut day_slot_counts: Vec<Vec<u32>> = vec![vec![0; num_slots]; num_days];

    for &module_id in &module_ids {
        let neighbors = graph.neighbors(module_id);
        let used_days: std::collections::HashSet<usize> = neighbors
            .iter()
            .filter_map(|n| module_day.get(n).copied())
            .collect();

        let mut best: Option<(usize, usize, u32)> = None;
        for day in 0..num_days {
            if used_days.contains(&day) {
                continue;
            }
            for slot in 0..num_slots {
                let load = day_slot_counts[day][slot];
                if best.map(|(_, _, b)| load < b).unwrap_or(true) {
                    best = Some((day, slot, load));
                }
            }
        }

        let (day, slot) = match best {
            Some((day, slot, _)) => (day, slot),
            None => {
                let mut conflict_counts = vec![0u32; num_days];
                for day in 0..num_days {
                    for n in &neighbors {
                        if module_day.get(n) == Some(&day) {
                            conflict_counts[day] += 1;
                        }
                    }
                }
                let day = (0..num_days)
                    .min_by_key(|d| conflict_counts[*d])
                    .unwrap_or(0);
                let slot = (0..num_slots)
                    .min_by_key(|s| day_slot_counts[day][*s])
                    .unwrap_or(0);
                (day, slot)
            }
        };

        module_day.insert(module_id, day);
        module_slot.insert(module_id, slot);
        day_slot_counts[day][slot] += 1;
    }

    let periods = module_ids
        .iter()
        .map(|&m| {
            (
                m,
                Period::new(module_day[&m] as u32, module_slot[&m] as u32),
            )
        })
        .collect();

    let student_violations = count_student_violations(input, &module_day);

    DaySlotPlan {
        periods,
        chromatic_estimate,
        student_violations,
    }
}

fn estimate_chromatic_number(module_ids: &[ModuleId], graph: &ConflictGraph) -> usize {
    let mut colors: HashMap<ModuleId, usize> = HashMap::new();
    let mut max_color = 0usize;
    for &module_id in module_ids {
        let used: std::collections::HashSet<usize> = graph
            .neighbors(module_id)
            .iter()
            .filter_map(|n| colors.get(n).copied())
            .collect();
        let mut c = 0usize;
        while used.contains(&c) {
            c += 1;
        }
        colors.insert(module_id, c);
        max_color = max_color.max(c);
    }
    if colors.is_empty() {
        0
    } else {
        max_color + 1
    }
}

fn count_student_violations(
    input: &ScheduleInput,
    module_day: &HashMap<ModuleId, usize>,
) -> u32 {
    let modules_by_formation = input.modules_by_formation();
    let mut violations = 0u32;
    for student in &input.students {
        let Some(modules) = modules_by_formation.get(&student.formation_id) else {
            continue;
        };
        let mut day_counts: HashMap<usize, u32> = HashMap::new();
        for module_id in modules {
            if let Some(&day) = module_day.get(module_id) {
                *day_counts.entry(day).or_insert(0) += 1;
            }
        }
        for count in day_counts.values() {
            if *count > 1 {
                violations += count - 1;
            }
        }
    }
    violations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{
        Config, Cycle, Department, DepartmentId, Formation, FormationId, Module, Professor,
        ProfessorId, Room, RoomId, RoomKind, Specialty, SpecialtyId, Student, StudentId,
    };

    fn input_with_conflicting_modules() -> ScheduleInput {
        ScheduleInput {
            departments: vec![Department {
                id: DepartmentId(1),
                name: "Informatique".into(),
            }],
            specialties: vec![Specialty {
                id: SpecialtyId(1),
                name: "Genie Logiciel".into(),
                cycle: Cycle::Licence,
                dept_id: DepartmentId(1),
            }],
            formations: vec![Formation {
                id: FormationId(1),
                specialty_id: SpecialtyId(1),
                cycle: Cycle::Licence,
                semester: 1,
            }],
            modules: vec![
                Module {
                    id: ModuleId(1),
                    name: "Algo".into(),
                    formation_id: FormationId(1),
                },
                Module {
                    id: ModuleId(2),
                    name: "Reseaux".into(),
                    formation_id: FormationId(1),
                },
            ],
            students: vec![Student {
                id: StudentId(1),
                name: "A B".into(),
                formation_id: FormationId(1),
                group: 1,
            }],
            professors: vec![Professor {
                id: ProfessorId(1),
                name: "P".into(),
                dept_id: DepartmentId(1),
            }],
            rooms: vec![Room {
                id: RoomId(1),
                name: "R".into(),
                capacity: 60,
                kind: RoomKind::Amphi,
            }],
            config: Config::default(),
        }
    }

    #[test]
    fn conflicting_modules_land_on_different_days() {
        let input = input_with_conflicting_modules();
        let graph = ConflictGraph::build(&input);
        let plan = assign_days_and_slots(&input, &graph);

        let p1 = plan.periods[&ModuleId(1)];
        let p2 = plan.periods[&ModuleId(2)];
        assert_ne!(p1.day, p2.day);
        assert_eq!(plan.student_violations, 0);
        assert_eq!(plan.chromatic_estimate, 2);
    }
}
