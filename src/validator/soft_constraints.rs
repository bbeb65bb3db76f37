use crate::types::{Schedule, ScheduleInput};
use crate::validator::SoftScore;
use std::collections::HashMap;

/// Compute all soft/observational scores for a schedule.
pub fn calculate_soft_scores(schedule: &Schedule, input: &ScheduleInput) -> Vec<SoftScore> {
    vec![score_proctor_balance(schedule, input)]
}

/// P7 (I7): proctor session counts should differ by at most 1 across all professors.
/// Scored rather than hard-failed: a module that ran out of eligible professors
/// (`UnderProctored`) can legitimately widen the spread without the run being wrong.
/// A professor who never proctors a session still counts, zero-seeded, since the spread
/// is defined across the whole pool, not just the professors who ended up assigned.
fn score_proctor_balance(schedule: &Schedule, input: &ScheduleInput) -> SoftScore {
    let mut counts: HashMap<crate::types::ProfessorId, u32> =
        input.professors.iter().map(|p| (p.id, 0)).collect();
    for proctoring in &schedule.proctorings {
        *counts.entry(proctoring.professor_id).or_insert(0) += 1;
    }

    let sessions: Vec<u32> = counts.values().copied().collect();
    let (min, max) = match (sessions.iter().min(), sessions.iter().max()) {
        (Some(&min), Some(&max)) => (min, max),
        _ => (0, 0),
    };
    let spread = max.saturating_sub(min);

    let score = if spread <= 1 { 100.0 } else { 0.0 };

    SoftScore {
        constraint: "ProctorBalance".to_string(),
        score,
        max_score: 100.0,
        details: format!(
            "proctor sessions range {}-{} ({} professors), spread {}",
            min,
            max,
            counts.len(),
            spread
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Config, DepartmentId, ModuleId, Professor, ProctoringAssignment, ProfessorId, ScheduleMetadata};

    fn empty_metadata() -> ScheduleMetadata {
        ScheduleMetadata {
            generated_at: String::new(),
            algorithm_version: String::new(),
            solve_time_ms: 0,
            chromatic_estimate: 0,
            num_days: 1,
            num_slots: 1,
        }
    }

    fn input_with_professors(ids: &[i64]) -> ScheduleInput {
        ScheduleInput {
            departments: vec![],
            specialties: vec![],
            formations: vec![],
            modules: vec![],
            students: vec![],
            professors: ids
                .iter()
                .map(|&id| Professor {
                    id: ProfessorId(id),
                    name: format!("Prof{id}"),
                    dept_id: DepartmentId(1),
                })
                .collect(),
            rooms: vec![],
            config: Config::default(),
        }
    }

    #[test]
    fn balanced_sessions_score_full_marks() {
        let schedule = Schedule {
            exams: vec![],
            proctorings: vec![
                ProctoringAssignment {
                    module_id: ModuleId(1),
                    room_index: 0,
                    professor_id: ProfessorId(1),
                },
                ProctoringAssignment {
                    module_id: ModuleId(1),
                    room_index: 0,
                    professor_id: ProfessorId(2),
                },
            ],
            underproctored: vec![],
            student_violations: 0,
            metadata: empty_metadata(),
        };
        let input = input_with_professors(&[1, 2]);
        let scores = calculate_soft_scores(&schedule, &input);
        assert_eq!(scores[0].score, 100.0);
    }

    #[test]
    fn professors_with_zero_sessions_widen_the_spread() {
        // Three professors share two sessions; the third never proctors at all. The true
        // spread across the whole pool is 2 (two sessions vs zero), not 0.
        let schedule = Schedule {
            exams: vec![],
            proctorings: vec![
                ProctoringAssignment {
                    module_id: ModuleId(1),
                    room_index: 0,
                    professor_id: ProfessorId(1),
                },
                ProctoringAssignment {
                    module_id: ModuleId(1),
                    room_index: 0,
                    professor_id: ProfessorId(1),
                },
            ],
            underproctored: vec![],
            student_violations: 0,
            metadata: empty_metadata(),
        };
        let input = input_with_professors(&[1, 2, 3]);
        let scores = calculate_soft_scores(&schedule, &input);
        assert_eq!(scores[0].score, 0.0);
        assert!(scores[0].details.contains("spread 2"));
    }
}
