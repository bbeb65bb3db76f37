use crate::types::{Period, Schedule, ScheduleInput};
use crate::validator::{Severity, Violation};
use std::collections::{HashMap, HashSet};

/// P1 (I1): every module appears in at least one exam record, and all of a module's exam
/// records share the same (day, slot).
pub fn check_every_module_scheduled_once(schedule: &Schedule, input: &ScheduleInput) -> Vec<Violation> {
    let mut violations = Vec::new();

    for module in &input.modules {
        let records = schedule.exams_for_module(module.id);
        if records.is_empty() {
            violations.push(Violation {
                constraint: "EveryModuleScheduled".to_string(),
                message: format!("module '{}' has no exam record", module.id),
                severity: Severity::Error,
            });
            continue;
        }
        let periods: HashSet<Period> = records.iter().map(|r| r.period).collect();
        if periods.len() > 1 {
            violations.push(Violation {
                constraint: "EveryModuleScheduled".to_string(),
                message: format!(
                    "module '{}' spans {} distinct periods",
                    module.id,
                    periods.len()
                ),
                severity: Severity::Error,
            });
        }
    }

    violations
}

/// P2 (I2): for every student, for every day, at most one enrolled module has an exam that
/// day — unless the chromatic number exceeds the calendar, in which case overflow is expected
/// and reported via `student_violations` rather than flagged here.
pub fn check_student_daily_load(schedule: &Schedule, input: &ScheduleInput) -> Vec<Violation> {
    let mut violations = Vec::new();
    if schedule.student_violations > 0 {
        // The fallback path in the day/slot assigner already accepted these overflows.
        return violations;
    }

    let module_day: HashMap<_, _> = schedule
        .exams
        .iter()
        .map(|e| (e.module_id, e.period.day))
        .collect();
    let modules_by_formation = input.modules_by_formation();

    for student in &input.students {
        let Some(modules) = modules_by_formation.get(&student.formation_id) else {
            continue;
        };
        let mut day_counts: HashMap<u32, u32> = HashMap::new();
        for module_id in modules {
            if let Some(&day) = module_day.get(module_id) {
                *day_counts.entry(day).or_insert(0) += 1;
            }
        }
        for (day, count) in day_counts {
            if count > 1 {
                violations.push(Violation {
                    constraint: "StudentDailyLoad".to_string(),
                    message: format!(
                        "student '{}' has {} exams on day {}",
                        student.id, count, day
                    ),
                    severity: Severity::Error,
                });
            }
        }
    }

    violations
}

/// P3 (I3): for every professor, for every day, at most `max_proctorings_per_prof_per_day`
/// proctoring assignments.
pub fn check_professor_daily_load(schedule: &Schedule, input: &ScheduleInput) -> Vec<Violation> {
    let mut violations = Vec::new();
    let exam_day: HashMap<_, _> = schedule
        .exams
        .iter()
        .map(|e| (e.module_id, e.period.day))
        .collect();

    let mut counts: HashMap<(crate::types::ProfessorId, u32), u32> = HashMap::new();
    for proctoring in &schedule.proctorings {
        let Some(&day) = exam_day.get(&proctoring.module_id) else {
            continue;
        };
        *counts.entry((proctoring.professor_id, day)).or_insert(0) += 1;
    }

    for ((prof_id, day), count) in counts {
        if count > input.config.max_proctorings_per_prof_per_day {
            violations.push(Violation {
                constraint: "ProfessorDailyLoad".to_string(),
                message: format!(
                    "professor '{}' has {} proctorings on day {}",
                    prof_id, count, day
                ),
                severity: Severity::Error,
            });
        }
    }

    violations
}

/// P4 (I4): for every (day, slot, room), at most one exam record.
pub fn check_room_conflicts(schedule: &Schedule) -> Vec<Violation> {
    let mut violations = Vec::new();
    let mut seen: HashSet<(Period, crate::types::RoomId)> = HashSet::new();

    for exam in &schedule.exams {
        let key = (exam.period, exam.room_id);
        if !seen.insert(key) {
            violations.push(Violation {
                constraint: "NoRoomConflict".to_string(),
                message: format!("room '{}' double-booked at {}", exam.room_id, exam.period),
                severity: Severity::Error,
            });
        }
    }

    violations
}

/// P5 (I5): every exam record's room has enough capacity for the students it hosts, and
/// every (formation, group) of a module's students appears in exactly one exam record.
pub fn check_capacity_and_group_coverage(
    schedule: &Schedule,
    input: &ScheduleInput,
) -> Vec<Violation> {
    let mut violations = Vec::new();
    let room_capacity: HashMap<_, _> = input.rooms.iter().map(|r| (r.id, r.capacity)).collect();

    for module in &input.modules {
        let records = schedule.exams_for_module(module.id);
        let mut seen_groups: HashSet<u32> = HashSet::new();
        let enrollment = input
            .students
            .iter()
            .filter(|s| s.formation_id == module.formation_id)
            .count() as u32;
        let total_capacity: u32 = records
            .iter()
            .filter_map(|r| room_capacity.get(&r.room_id))
            .sum();
        if !records.is_empty() && total_capacity < enrollment {
            violations.push(Violation {
                constraint: "CapacityCoverage".to_string(),
                message: format!(
                    "module '{}' has {} enrolled students but only {} seats across its rooms",
                    module.id, enrollment, total_capacity
                ),
                severity: Severity::Error,
            });
        }

        for record in &records {
            let groups: Vec<u32> = record
                .groups
                .split(',')
                .filter_map(|g| g.parse().ok())
                .collect();
            for group in &groups {
                if !seen_groups.insert(*group) {
                    violations.push(Violation {
                        constraint: "GroupCoverage".to_string(),
                        message: format!(
                            "module '{}' group {} appears in more than one exam record",
                            module.id, group
                        ),
                        severity: Severity::Error,
                    });
                }
            }
        }
    }

    for student in &input.students {
        let modules = input.modules.iter().filter(|m| m.formation_id == student.formation_id);
        for module in modules {
            let covered = schedule.exams_for_module(module.id).iter().any(|r| {
                r.groups
                    .split(',')
                    .filter_map(|g| g.parse::<u32>().ok())
                    .any(|g| g == student.group)
            });
            if !covered {
                violations.push(Violation {
                    constraint: "GroupCoverage".to_string(),
                    message: format!(
                        "student '{}' (group {}) is not covered by any exam record of module '{}'",
                        student.id, student.group, module.id
                    ),
                    severity: Severity::Error,
                });
            }
        }
    }

    violations
}

/// P6 (I6): no exam falls on the configured rest weekday.
pub fn check_no_exam_on_rest_day(schedule: &Schedule, input: &ScheduleInput) -> Vec<Violation> {
    let exam_days = input.config.exam_days();
    let mut violations = Vec::new();

    for exam in &schedule.exams {
        let Some(date) = exam_days.get(exam.period.day as usize) else {
            continue;
        };
        if date.weekday() == input.config.rest_weekday {
            violations.push(Violation {
                constraint: "NoExamOnRestDay".to_string(),
                message: format!("exam for module '{}' falls on {:?}", exam.module_id, date),
                severity: Severity::Error,
            });
        }
    }

    violations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{
        Config, Cycle, Department, DepartmentId, ExamRecord, Formation, FormationId, Module,
        Professor, Room, RoomId, RoomKind, ScheduleMetadata, Specialty, SpecialtyId, Student,
        StudentId,
    };

    fn base_input() -> ScheduleInput {
        ScheduleInput {
            departments: vec![Department {
                id: DepartmentId(1),
                name: "Informatique".into(),
            }],
            specialties: vec![Specialty {
                id: SpecialtyId(1),
                name: "GL".into(),
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
            professors: vec![Professor {
                id: crate::types::ProfessorId(1),
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

    use crate::types::ModuleId;

    #[test]
    fn flags_module_with_no_exam_record() {
        let input = base_input();
        let schedule = Schedule {
            exams: vec![],
            proctorings: vec![],
            underproctored: vec![],
            student_violations: 0,
            metadata: ScheduleMetadata {
                generated_at: String::new(),
                algorithm_version: String::new(),
                solve_time_ms: 0,
                chromatic_estimate: 0,
                num_days: 1,
                num_slots: 1,
            },
        };
        let violations = check_every_module_scheduled_once(&schedule, &input);
        assert_eq!(violations.len(), 1);
    }

    #[test]
    fn detects_room_double_booking() {
        let input = base_input();
        let period = Period::new(0, 0);
        let schedule = Schedule {
            exams: vec![
                ExamRecord {
                    module_id: ModuleId(1),
                    period,
                    room_id: RoomId(1),
                    room_kind: RoomKind::Amphi,
                    formation_id: FormationId(1),
                    groups: "1".into(),
                },
                ExamRecord {
                    module_id: ModuleId(2),
                    period,
                    room_id: RoomId(1),
                    room_kind: RoomKind::Amphi,
                    formation_id: FormationId(1),
                    groups: "1".into(),
                },
            ],
            proctorings: vec![],
            underproctored: vec![],
            student_violations: 0,
            metadata: ScheduleMetadata {
                generated_at: String::new(),
                algorithm_version: String::new(),
                solve_time_ms: 0,
                chromatic_estimate: 0,
                num_days: 1,
                num_slots: 1,
            },
        };
        let violations = check_room_conflicts(&schedule);
        assert_eq!(violations.len(), 1);
    }
}
