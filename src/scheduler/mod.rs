mod conflict_graph;
mod day_slot_assigner;
mod proctor_assigner;
mod room_packer;

pub use conflict_graph::*;
pub use day_slot_assigner::*;
pub use proctor_assigner::*;
pub use room_packer::*;

use crate::error::Result;
use crate::types::{Schedule, ScheduleInput, ScheduleMetadata};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Instant;
use tracing::info;

/// Main entry point for schedule generation: the six-phase pipeline.
pub fn generate_schedule(input: &ScheduleInput, quiet: bool) -> Result<Schedule> {
    let start_time = Instant::now();

    let progress = if quiet {
        ProgressBar::hidden()
    } else {
        let pb = ProgressBar::new(100);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}% {msg}")
                .unwrap()
                .progress_chars("#>-"),
        );
        pb
    };

    // Phase 2: conflict graph.
    progress.set_message("Building conflict graph...");
    progress.set_position(10);
    info!(modules = input.modules.len(), "building conflict graph");
    let graph = ConflictGraph::build(input);

    // Phase 3: day/slot assignment.
    progress.set_message("Assigning exam days and slots...");
    progress.set_position(30);
    let plan = assign_days_and_slots(input, &graph);
    info!(
        chromatic_estimate = plan.chromatic_estimate,
        student_violations = plan.student_violations,
        "assigned days and slots"
    );
    if plan.student_violations > 0 {
        tracing::warn!(
            student_violations = plan.student_violations,
            "chromatic number exceeds available days; some students have more than one exam on a day"
        );
    }

    // Phase 4: room packing.
    progress.set_message("Packing rooms...");
    progress.set_position(55);
    let exams = pack_rooms(input, &plan.periods);
    info!(exam_records = exams.len(), "packed rooms");

    // Phase 5: proctor assignment.
    progress.set_message("Assigning proctors...");
    progress.set_position(80);
    let proctor_plan = assign_proctors(input, &plan.periods, &exams);
    for warning in &proctor_plan.underproctored {
        tracing::warn!(
            module_id = %warning.module_id,
            short_by = warning.short_by,
            "module is under-proctored"
        );
    }
    info!(
        proctorings = proctor_plan.proctorings.len(),
        underproctored = proctor_plan.underproctored.len(),
        "assigned proctors"
    );

    progress.set_position(100);
    progress.finish_with_message("Schedule generated");

    let elapsed = start_time.elapsed();

    Ok(Schedule {
        exams,
        proctorings: proctor_plan.proctorings,
        underproctored: proctor_plan.underproctored,
        student_violations: plan.student_violations,
        metadata: ScheduleMetadata {
            generated_at: chrono::Utc::now().to_rfc3339(),
            algorithm_version: env!("CARGO_PKG_VERSION").to_string(),
            solve_time_ms: elapsed.as_millis() as u64,
            chromatic_estimate: plan.chromatic_estimate,
            num_days: input.config.exam_days().len(),
            num_slots: input.config.slots_per_day() as usize,
        },
    })
}
