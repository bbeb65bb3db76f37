//! Property tests for the quantified invariants over randomly generated small worlds.
use exam_scheduler::scheduler::{assign_days_and_slots, pack_rooms, ConflictGraph};
use exam_scheduler::types::{
    Config, Cycle, Department, DepartmentId, Formation, FormationId, Module, ModuleId,
    Professor, ProfessorId, Room, RoomId, RoomKind, ScheduleInput, Specialty, SpecialtyId,
    Student, StudentId,
};
use proptest::prelude::*;
use std::collections::HashSet;

/// Build a small but structurally valid world: 1-2 formations, each with 1-4 modules and
/// 1-12 students split across 1-3 groups, 0-6 professors across 1-2 departments, and a small
/// pool of amphitheatres/small rooms.
fn small_world() -> impl Strategy<Value = ScheduleInput> {
    (1..=2usize, 0..=6i64).prop_flat_map(|(num_formations, num_profs)| {
        let formations = 1..=(num_formations as i64);
        (
            Just(formations.collect::<Vec<_>>()),
            proptest::collection::vec(1..=4usize, num_formations),
            proptest::collection::vec(1..=12i64, num_formations),
            Just(num_profs),
        )
    })
    .prop_map(|(formation_ids, modules_per_formation, students_per_formation, num_profs)| {
        let departments = vec![Department {
            id: DepartmentId(1),
            name: "Informatique".into(),
        }];
        let specialties = vec![Specialty {
            id: SpecialtyId(1),
            name: "Genie Logiciel".into(),
            cycle: Cycle::Licence,
            dept_id: DepartmentId(1),
        }];

        let formations: Vec<Formation> = formation_ids
            .iter()
            .map(|&id| Formation {
                id: FormationId(id),
                specialty_id: SpecialtyId(1),
                cycle: Cycle::Licence,
                semester: 1,
            })
            .collect();

        let mut modules = Vec::new();
        let mut next_module_id = 1i64;
        for (i, &formation_id) in formation_ids.iter().enumerate() {
            for _ in 0..modules_per_formation[i] {
                modules.push(Module {
                    id: ModuleId(next_module_id),
                    name: format!("Module{next_module_id}"),
                    formation_id: FormationId(formation_id),
                });
                next_module_id += 1;
            }
        }

        let mut students = Vec::new();
        let mut next_student_id = 1i64;
        for (i, &formation_id) in formation_ids.iter().enumerate() {
            for s in 0..students_per_formation[i] {
                students.push(Student {
                    id: StudentId(next_student_id),
                    name: format!("Student{next_student_id}"),
                    formation_id: FormationId(formation_id),
                    group: (s % 3) as u32 + 1,
                });
                next_student_id += 1;
            }
        }

        let professors: Vec<Professor> = (1..=num_profs)
            .map(|i| Professor {
                id: ProfessorId(i),
                name: format!("Prof{i}"),
                dept_id: DepartmentId(1),
            })
            .collect();

        let rooms = vec![
            Room {
                id: RoomId(1),
                name: "Amphi A".into(),
                capacity: 60,
                kind: RoomKind::Amphi,
            },
            Room {
                id: RoomId(2),
                name: "Salle 1".into(),
                capacity: 20,
                kind: RoomKind::SalleTd,
            },
            Room {
                id: RoomId(3),
                name: "Salle 2".into(),
                capacity: 20,
                kind: RoomKind::SalleTd,
            },
        ];

        ScheduleInput {
            departments,
            specialties,
            formations,
            modules,
            students,
            professors,
            rooms,
            config: Config::default(),
        }
    })
}

proptest! {
    /// P1 (I1): every module appears in at least one exam record, and all of a module's
    /// exam records share the same (day, slot).
    #[test]
    fn every_module_gets_exactly_one_period(input in small_world()) {
        let graph = ConflictGraph::build(&input);
        let plan = assign_days_and_slots(&input, &graph);
        let exams = pack_rooms(&input, &plan.periods);

        for module in &input.modules {
            let periods: HashSet<_> = exams
                .iter()
                .filter(|e| e.module_id == module.id)
                .map(|e| e.period)
                .collect();
            prop_assert!(!periods.is_empty());
            prop_assert_eq!(periods.len(), 1);
        }
    }

    /// P4 (I4): for every (day, slot, room), at most one exam record.
    #[test]
    fn no_room_is_double_booked(input in small_world()) {
        let graph = ConflictGraph::build(&input);
        let plan = assign_days_and_slots(&input, &graph);
        let exams = pack_rooms(&input, &plan.periods);

        let mut seen = HashSet::new();
        for exam in &exams {
            prop_assert!(seen.insert((exam.period, exam.room_id)));
        }
    }

    /// P6 (I6): no exam's date falls on the configured rest weekday.
    #[test]
    fn no_exam_on_rest_day(input in small_world()) {
        use chrono::Datelike;
        let graph = ConflictGraph::build(&input);
        let plan = assign_days_and_slots(&input, &graph);
        let exams = pack_rooms(&input, &plan.periods);
        let exam_days = input.config.exam_days();

        for exam in &exams {
            let date = exam_days[exam.period.day as usize];
            prop_assert_ne!(date.weekday(), input.config.rest_weekday);
        }
    }

    /// P8: two runs on identical input produce identical outputs.
    #[test]
    fn identical_input_produces_identical_schedule(input in small_world()) {
        let graph_a = ConflictGraph::build(&input);
        let plan_a = assign_days_and_slots(&input, &graph_a);
        let mut exams_a = pack_rooms(&input, &plan_a.periods);

        let graph_b = ConflictGraph::build(&input);
        let plan_b = assign_days_and_slots(&input, &graph_b);
        let mut exams_b = pack_rooms(&input, &plan_b.periods);

        let key = |e: &exam_scheduler::types::ExamRecord| (e.module_id, e.period, e.room_id);
        exams_a.sort_by_key(key);
        exams_b.sort_by_key(key);

        prop_assert_eq!(exams_a.len(), exams_b.len());
        for (a, b) in exams_a.iter().zip(exams_b.iter()) {
            prop_assert_eq!(a.module_id, b.module_id);
            prop_assert_eq!(a.period, b.period);
            prop_assert_eq!(a.room_id, b.room_id);
            prop_assert_eq!(&a.groups, &b.groups);
        }
        prop_assert_eq!(plan_a.chromatic_estimate, plan_b.chromatic_estimate);
        prop_assert_eq!(plan_a.student_violations, plan_b.student_violations);
    }
}
