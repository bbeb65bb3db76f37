use crate::error::OptimizerError;
use crate::types::{Config, ModuleId, Schedule};
use mysql::prelude::Queryable;
use mysql::{params, Conn, TxOpts};
use std::collections::HashMap;

/// Persist a generated schedule: clear the previous one, then insert the new `examens` and
/// `surveillances` rows inside a single transaction. Mirrors the write phase of
/// `original_source/scripts/optimize.py` (`DELETE FROM surveillances`, `DELETE FROM examens`,
/// then per-exam/per-proctoring inserts), wrapped in a transaction so a failed insert can't
/// leave the schedule half-cleared.
pub fn write_schedule(conn: &mut Conn, schedule: &Schedule, config: &Config) -> anyhow::Result<()> {
    let mut tx = conn
        .start_transaction(TxOpts::default())
        .map_err(OptimizerError::PersistenceFailure)?;

    tx.query_drop("DELETE FROM surveillances")
        .map_err(OptimizerError::PersistenceFailure)?;
    tx.query_drop("DELETE FROM examens")
        .map_err(OptimizerError::PersistenceFailure)?;

    // Maps each (module, room_index) pair to the auto-increment id of the examens row just
    // inserted for it, so proctorings can reference it without a re-read.
    let mut examen_ids: HashMap<(ModuleId, usize), u64> = HashMap::new();

    for (module_id, records) in group_by_module(schedule) {
        for (room_index, record) in records.iter().enumerate() {
            tx.exec_drop(
                "INSERT INTO examens (module_id, lieu_examen_id, date_heure, formation_id, groupes) \
                 VALUES (:module_id, :lieu_examen_id, :date_heure, :formation_id, :groupes)",
                params! {
                    "module_id" => module_id.0,
                    "lieu_examen_id" => record.room_id.0,
                    "date_heure" => config.timestamp_for(record.period.day, record.period.slot),
                    "formation_id" => record.formation_id.0,
                    "groupes" => &record.groups,
                },
            )
            .map_err(OptimizerError::PersistenceFailure)?;
            examen_ids.insert((module_id, room_index), tx.last_insert_id().unwrap_or(0));
        }
    }

    for proctoring in &schedule.proctorings {
        let Some(&examen_id) = examen_ids.get(&(proctoring.module_id, proctoring.room_index))
        else {
            continue;
        };
        tx.exec_drop(
            "INSERT INTO surveillances (examen_id, prof_id) VALUES (:examen_id, :prof_id)",
            params! {
                "examen_id" => examen_id,
                "prof_id" => proctoring.professor_id.0,
            },
        )
        .map_err(OptimizerError::PersistenceFailure)?;
    }

    tx.commit().map_err(OptimizerError::PersistenceFailure)?;
    Ok(())
}

fn group_by_module(
    schedule: &Schedule,
) -> Vec<(ModuleId, Vec<&crate::types::ExamRecord>)> {
    let mut order: Vec<ModuleId> = Vec::new();
    let mut map: HashMap<ModuleId, Vec<&crate::types::ExamRecord>> = HashMap::new();
    for exam in &schedule.exams {
        map.entry(exam.module_id).or_insert_with(|| {
            order.push(exam.module_id);
            Vec::new()
        });
        map.get_mut(&exam.module_id).unwrap().push(exam);
    }
    order.into_iter().map(|id| (id, map.remove(&id).unwrap())).collect()
}
