use crate::types::{
    ExamRecord, ModuleId, Period, ProctoringAssignment, ProfessorId, RoomKind, ScheduleInput,
    UnderProctoredWarning,
};
use std::collections::{BTreeMap, HashMap};

/// Result of the proctor assignment pass.
pub struct ProctorPlan {
    pub proctorings: Vec<ProctoringAssignment>,
    pub underproctored: Vec<UnderProctoredWarning>,
}

/// Number of proctors a room type requires per the specification's capacity ratios.
fn proctors_for_kind(kind: RoomKind, input: &ScheduleInput) -> u32 {
    match kind {
        RoomKind::Amphi => input.config.proctors_per_amphi,
        RoomKind::SalleTd => input.config.proctors_per_small_room,
    }
}

/// Phases 4-5: pick proctors for every exam room, department-first and load-balanced.
///
/// Grounded on `original_source/scripts/optimize.py`'s PHASE 4-5: each professor has a global
/// session cap (`total_sessions` split evenly, remainder distributed one-per-professor), and
/// is skipped for a module once already at `max_proctorings_per_prof_per_day` sessions that
/// day. Same-department professors are tried first, least-loaded first; if that pool can't
/// fill the room, other-department professors are tried the same way. `BTreeMap`s (rather than
/// the teacher's ILP-era `HashMap`s) keep processing order deterministic across runs, the same
/// discipline the teacher applies around its solver's internal bookkeeping.
///
/// The even split's remainder is handed to the professors with the lowest ids, not to
/// whichever id happens to be numerically below the remainder count (that comparison only
/// worked by coincidence when ids were small and contiguous).
pub fn assign_proctors(
    input: &ScheduleInput,
    periods: &HashMap<ModuleId, Period>,
    exams: &[ExamRecord],
) -> ProctorPlan {
    let config = &input.config;

    let mut exams_by_module: BTreeMap<ModuleId, Vec<&ExamRecord>> = BTreeMap::new();
    for exam in exams {
        exams_by_module.entry(exam.module_id).or_default().push(exam);
    }

    let total_sessions: u32 = exams
        .iter()
        .map(|e| proctors_for_kind(e.room_kind, input))
        .sum();

    let mut prof_ids: Vec<ProfessorId> = input.professors.iter().map(|p| p.id).collect();
    prof_ids.sort();
    let num_profs = prof_ids.len().max(1) as u32;
    let sessions_per_prof = total_sessions / num_profs;
    let extra_sessions = total_sessions % num_profs;

    // Professors with the lowest ids absorb the remainder session, one each.
    let caps: HashMap<ProfessorId, u32> = prof_ids
        .iter()
        .enumerate()
        .map(|(i, &id)| {
            let cap = sessions_per_prof + if (i as u32) < extra_sessions { 1 } else { 0 };
            (id, cap)
        })
        .collect();

    let mut dept_profs: BTreeMap<crate::types::DepartmentId, Vec<ProfessorId>> = BTreeMap::new();
    for professor in &input.professors {
        dept_profs.entry(professor.dept_id).or_default().push(professor.id);
    }
    for profs in dept_profs.values_mut() {
        profs.sort();
    }

    let mut prof_sessions: HashMap<ProfessorId, u32> = HashMap::new();
    let mut prof_day_count: HashMap<(ProfessorId, u32), u32> = HashMap::new();

    let mut proctorings = Vec::new();
    let mut underproctored = Vec::new();

    for (&module_id, records) in &exams_by_module {
        let Some(&period) = periods.get(&module_id) else {
            continue;
        };
        let needed: u32 = records
            .iter()
            .map(|r| proctors_for_kind(r.room_kind, input))
            .sum();
        let dept_id = input.module_department(module_id);

        let is_eligible = |prof_id: ProfessorId,
                            assigned: &[ProfessorId],
                            prof_sessions: &HashMap<ProfessorId, u32>,
                            prof_day_count: &HashMap<(ProfessorId, u32), u32>| {
            let day_count = prof_day_count.get(&(prof_id, period.day)).copied().unwrap_or(0);
            let session_count = prof_sessions.get(&prof_id).copied().unwrap_or(0);
            let cap = caps.get(&prof_id).copied().unwrap_or(0);
            day_count < config.max_proctorings_per_prof_per_day
                && session_count < cap
                && !assigned.contains(&prof_id)
        };

        let mut assigned: Vec<ProfessorId> = Vec::new();

        if let Some(dept_id) = dept_id {
            let mut same_dept: Vec<ProfessorId> = dept_profs
                .get(&dept_id)
                .map(|v| v.as_slice())
                .unwrap_or(&[])
                .iter()
                .copied()
                .filter(|&p| is_eligible(p, &assigned, &prof_sessions, &prof_day_count))
                .collect();
            same_dept.sort_by_key(|p| (prof_sessions.get(p).copied().unwrap_or(0), *p));

            for prof_id in same_dept {
                if assigned.len() as u32 >= needed {
                    break;
                }
                assigned.push(prof_id);
                *prof_sessions.entry(prof_id).or_insert(0) += 1;
                *prof_day_count.entry((prof_id, period.day)).or_insert(0) += 1;
            }
        }

        if (assigned.len() as u32) < needed {
            let mut other: Vec<ProfessorId> = prof_ids
                .iter()
                .copied()
                .filter(|&p| {
                    dept_id.map(|d| dept_profs.get(&d).map(|v| !v.contains(&p)).unwrap_or(true))
                        .unwrap_or(true)
                        && is_eligible(p, &assigned, &prof_sessions, &prof_day_count)
                })
                .collect();
            other.sort_by_key(|p| (prof_sessions.get(p).copied().unwrap_or(0), *p));

            for prof_id in other {
                if assigned.len() as u32 >= needed {
                    break;
                }
                assigned.push(prof_id);
                *prof_sessions.entry(prof_id).or_insert(0) += 1;
                *prof_day_count.entry((prof_id, period.day)).or_insert(0) += 1;
            }
        }

        if (assigned.len() as u32) < needed {
            underproctored.push(UnderProctoredWarning {
                module_id,
                short_by: needed - assigned.len() as u32,
            });
        }

        let num_exams = records.len().max(1);
        for (i, prof_id) in assigned.into_iter().enumerate() {
            proctorings.push(ProctoringAssignment {
                module_id,
                room_index: i % num_exams,
                professor_id: prof_id,
            });
        }
    }

    ProctorPlan {
        proctorings,
        underproctored,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{
        Config, Cycle, Department, DepartmentId, Formation, FormationId, Module, Professor,
        Room, RoomId, Specialty, SpecialtyId, Student, StudentId,
    };

    fn sample_input(num_profs: i64) -> ScheduleInput {
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
            modules: vec![Module {
                id: ModuleId(1),
                name: "Algo".into(),
                formation_id: FormationId(1),
            }],
            students: vec![Student {
                id: StudentId(1),
                name: "A".into(),
                formation_id: FormationId(1),
                group: 1,
            }],
            professors: (1..=num_profs)
                .map(|i| Professor {
                    id: ProfessorId(i),
                    name: format!("P{i}"),
                    dept_id: DepartmentId(1),
                })
                .collect(),
            rooms: vec![Room {
                id: RoomId(1),
                name: "Salle 1".into(),
                capacity: 20,
                kind: RoomKind::SalleTd,
            }],
            config: Config::default(),
        }
    }

    #[test]
    fn fills_proctor_slots_from_same_department_first() {
        let input = sample_input(2);
        let mut periods = HashMap::new();
        periods.insert(ModuleId(1), Period::new(0, 0));
        let exams = vec![ExamRecord {
            module_id: ModuleId(1),
            period: Period::new(0, 0),
            room_id: RoomId(1),
            room_kind: RoomKind::SalleTd,
            formation_id: FormationId(1),
            groups: "1".into(),
        }];

        let plan = assign_proctors(&input, &periods, &exams);
        assert_eq!(plan.proctorings.len(), 1);
        assert!(plan.underproctored.is_empty());
    }

    #[test]
    fn reports_underproctored_when_no_professors_available() {
        let input = sample_input(0);
        let mut periods = HashMap::new();
        periods.insert(ModuleId(1), Period::new(0, 0));
        let exams = vec![ExamRecord {
            module_id: ModuleId(1),
            period: Period::new(0, 0),
            room_id: RoomId(1),
            room_kind: RoomKind::SalleTd,
            formation_id: FormationId(1),
            groups: "1".into(),
        }];

        let plan = assign_proctors(&input, &periods, &exams);
        assert_eq!(plan.proctorings.len(), 0);
        assert_eq!(plan.underproctored.len(), 1);
        assert_eq!(plan.underproctored[0].short_by, 1);
    }
}
