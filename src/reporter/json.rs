use crate::error::Result;
use crate::types::Schedule;

/// Full JSON serialization of a generated schedule.
pub fn generate_json_report(schedule: &Schedule) -> Result<String> {
    Ok(serde_json::to_string_pretty(schedule)?)
}

/// The run-summary shape from the error handling design: printed on every successful run,
/// including when the day/slot fallback path was taken.
#[derive(serde::Serialize)]
pub struct RunSummary {
    pub elapsed_ms: u64,
    pub num_exams: usize,
    pub num_days: usize,
    pub num_slots: usize,
    pub num_surveillances: usize,
    pub student_violations: u32,
}

pub fn generate_json_summary(schedule: &Schedule) -> Result<String> {
    let summary = RunSummary {
        elapsed_ms: schedule.metadata.solve_time_ms,
        num_exams: schedule.exams.len(),
        num_days: schedule.metadata.num_days,
        num_slots: schedule.metadata.num_slots,
        num_surveillances: schedule.total_proctorings(),
        student_violations: schedule.student_violations,
    };

    Ok(serde_json::to_string_pretty(&summary)?)
}
