use crate::types::{Schedule, ScheduleInput};
use crate::validator::ValidationReport;
use colored::Colorize;
use std::collections::HashMap;

/// Generate a plain text report (with colors for terminal) of the run.
pub fn generate_text_report(
    schedule: &Schedule,
    input: &ScheduleInput,
    validation: &ValidationReport,
) -> String {
    let mut lines = Vec::new();

    lines.push("=".repeat(60));
    lines.push("               EXAM SCHEDULE REPORT".to_string());
    lines.push("=".repeat(60));
    lines.push(String::new());

    lines.push(format!("Generated: {}", schedule.metadata.generated_at));
    lines.push(format!("Solve time: {}ms", schedule.metadata.solve_time_ms));
    lines.push(String::new());

    lines.push("-".repeat(40));
    lines.push("STATISTICS".to_string());
    lines.push("-".repeat(40));
    lines.push(format!("  Modules:        {}", validation.statistics.num_modules));
    lines.push(format!("  Exam records:   {}", validation.statistics.num_exams));
    lines.push(format!(
        "  Proctorings:    {}",
        validation.statistics.num_proctorings
    ));
    lines.push(format!(
        "  Under-proctored modules: {}",
        validation.statistics.num_underproctored
    ));
    lines.push(format!(
        "  Student-day violations: {}",
        validation.statistics.student_violations
    ));
    lines.push(format!(
        "  Chromatic estimate: {} (calendar has {} days)",
        schedule.metadata.chromatic_estimate, schedule.metadata.num_days
    ));
    lines.push(String::new());

    lines.push("-".repeat(40));
    if validation.is_valid {
        lines.push("VALIDATION: PASSED".green().to_string());
    } else {
        lines.push("VALIDATION: FAILED".red().to_string());
        for v in &validation.violations {
            lines.push(format!("  ! {}: {}", v.constraint, v.message));
        }
    }
    lines.push("-".repeat(40));
    lines.push(String::new());

    for score in &validation.soft_scores {
        lines.push(format!("{}: {:.1} ({})", score.constraint, score.score, score.details));
    }
    lines.push(String::new());

    let by_department: HashMap<_, Vec<_>> = input
        .modules
        .iter()
        .fold(HashMap::new(), |mut acc, module| {
            acc.entry(input.module_department(module.id))
                .or_insert_with(Vec::new)
                .push(module);
            acc
        });

    lines.push("MODULES BY DEPARTMENT".to_string());
    lines.push("-".repeat(40));
    for (dept_id, modules) in by_department {
        let dept_name = dept_id
            .and_then(|id| input.departments.iter().find(|d| d.id == id))
            .map(|d| d.name.as_str())
            .unwrap_or("Unknown");
        lines.push(format!("\n{} ({} modules)", dept_name.bold(), modules.len()));
        for module in modules {
            let records = schedule.exams_for_module(module.id);
            let period = records
                .first()
                .map(|r| r.period.to_string())
                .unwrap_or_else(|| "unscheduled".to_string());
            lines.push(format!(
                "  {} | {} | {} rooms",
                module.name,
                period,
                records.len()
            ));
        }
    }

    lines.push(String::new());
    lines.push("=".repeat(60));

    lines.join("\n")
}

/// Print the short run-summary line to stdout.
pub fn print_summary(schedule: &Schedule, validation: &ValidationReport) {
    println!();
    if validation.is_valid {
        println!("{}", "Schedule generated successfully".green().bold());
    } else {
        println!("{}", "Schedule has validation errors".red().bold());
    }
    println!();
    println!("  Exams:        {}", validation.statistics.num_exams);
    println!("  Proctorings:  {}", validation.statistics.num_proctorings);
    println!(
        "  Student violations: {}",
        validation.statistics.student_violations
    );
    println!(
        "  Under-proctored:    {}",
        validation.statistics.num_underproctored
    );
    println!("  Time:         {}ms", schedule.metadata.solve_time_ms);
    println!();
}
