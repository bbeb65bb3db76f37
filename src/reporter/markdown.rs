use crate::types::{Schedule, ScheduleInput};
use crate::validator::ValidationReport;

/// Generate a markdown report of the run.
pub fn generate_markdown_report(
    schedule: &Schedule,
    input: &ScheduleInput,
    validation: &ValidationReport,
) -> String {
    let mut lines = vec![
        "# Exam Schedule Report".to_string(),
        String::new(),
        format!("Generated: {}", schedule.metadata.generated_at),
        format!("Algorithm: v{}", schedule.metadata.algorithm_version),
        format!("Solve time: {}ms", schedule.metadata.solve_time_ms),
        String::new(),
    ];

    lines.push("## Summary\n".to_string());
    lines.push("| Metric | Value |".to_string());
    lines.push("|--------|-------|".to_string());
    lines.push(format!("| Modules | {} |", validation.statistics.num_modules));
    lines.push(format!("| Exam records | {} |", validation.statistics.num_exams));
    lines.push(format!(
        "| Proctorings | {} |",
        validation.statistics.num_proctorings
    ));
    lines.push(format!(
        "| Under-proctored modules | {} |",
        validation.statistics.num_underproctored
    ));
    lines.push(format!(
        "| Student-day violations | {} |",
        validation.statistics.student_violations
    ));
    lines.push(format!(
        "| Chromatic estimate | {} |",
        schedule.metadata.chromatic_estimate
    ));
    lines.push(format!("| Calendar days | {} |", schedule.metadata.num_days));
    lines.push(String::new());

    if validation.is_valid {
        lines.push("## Validation: PASSED\n".to_string());
    } else {
        lines.push("## Validation: FAILED\n".to_string());
        for violation in &validation.violations {
            lines.push(format!("- **{}**: {}", violation.constraint, violation.message));
        }
        lines.push(String::new());
    }

    lines.push("## Observational Scores\n".to_string());
    for score in &validation.soft_scores {
        lines.push(format!(
            "- **{}**: {:.1}/{:.1} ({})",
            score.constraint, score.score, score.max_score, score.details
        ));
    }
    lines.push(String::new());

    lines.push("## Exams\n".to_string());
    lines.push("| Module | Period | Room | Type | Groups |".to_string());
    lines.push("|--------|--------|------|------|--------|".to_string());

    let mut modules: Vec<_> = input.modules.iter().collect();
    modules.sort_by_key(|m| m.id);

    for module in modules {
        for record in schedule.exams_for_module(module.id) {
            let room = input
                .rooms
                .iter()
                .find(|r| r.id == record.room_id)
                .map(|r| r.name.as_str())
                .unwrap_or("unknown");
            lines.push(format!(
                "| {} | {} | {} | {} | {} |",
                module.name,
                record.period,
                room,
                record.room_kind.as_db_str(),
                record.groups
            ));
        }
    }

    lines.join("\n")
}
