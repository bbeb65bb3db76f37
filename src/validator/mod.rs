mod hard_constraints;
mod soft_constraints;

pub use hard_constraints::*;
pub use soft_constraints::*;

use crate::types::{Schedule, ScheduleInput};

/// Result of validating a generated schedule against P1-P7.
#[derive(Debug, Clone)]
pub struct ValidationReport {
    pub is_valid: bool,
    pub violations: Vec<Violation>,
    pub soft_scores: Vec<SoftScore>,
    pub statistics: ScheduleStatistics,
}

/// A P1-P6 invariant violation.
#[derive(Debug, Clone)]
pub struct Violation {
    pub constraint: String,
    pub message: String,
    pub severity: Severity,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Severity {
    Error,
    Warning,
}

/// Score for an observational (non-fatal) property such as P7 proctor balance.
#[derive(Debug, Clone)]
pub struct SoftScore {
    pub constraint: String,
    pub score: f64,
    pub max_score: f64,
    pub details: String,
}

/// Statistics about the schedule, independent of pass/fail.
#[derive(Debug, Clone)]
pub struct ScheduleStatistics {
    pub num_modules: usize,
    pub num_exams: usize,
    pub num_proctorings: usize,
    pub num_underproctored: usize,
    pub student_violations: u32,
}

/// Validate a generated schedule against the hard invariants (P1-P6) and score the
/// observational ones (P7).
pub fn validate_schedule(schedule: &Schedule, input: &ScheduleInput) -> ValidationReport {
    let mut violations = Vec::new();
    violations.extend(check_every_module_scheduled_once(schedule, input));
    violations.extend(check_student_daily_load(schedule, input));
    violations.extend(check_professor_daily_load(schedule, input));
    violations.extend(check_room_conflicts(schedule));
    violations.extend(check_capacity_and_group_coverage(schedule, input));
    violations.extend(check_no_exam_on_rest_day(schedule, input));

    let soft_scores = calculate_soft_scores(schedule, input);
    let statistics = calculate_statistics(schedule, input);

    ValidationReport {
        is_valid: violations.iter().all(|v| v.severity != Severity::Error),
        violations,
        soft_scores,
        statistics,
    }
}

fn calculate_statistics(schedule: &Schedule, input: &ScheduleInput) -> ScheduleStatistics {
    ScheduleStatistics {
        num_modules: input.modules.len(),
        num_exams: schedule.exams.len(),
        num_proctorings: schedule.total_proctorings(),
        num_underproctored: schedule.underproctored.len(),
        student_violations: schedule.student_violations,
    }
}
