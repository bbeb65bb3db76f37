use crate::error::OptimizerError;
use crate::types::{
    Config, Cycle, Department, DepartmentId, Formation, FormationId, Module, ModuleId, Professor,
    ProfessorId, Room, RoomId, RoomKind, ScheduleInput, Specialty, SpecialtyId, Student, StudentId,
};
use mysql::prelude::Queryable;
use mysql::Conn;
use std::collections::HashSet;

/// Load the full input world from the database, in dependency order, and check referential
/// integrity as each table comes in. Mirrors the loading section of
/// `original_source/scripts/optimize.py`: one flat `SELECT` per table, no joins, with the
/// relational structure rebuilt in memory afterwards.
pub fn load_input(conn: &mut Conn, config: Config) -> anyhow::Result<ScheduleInput> {
    let departments = load_departments(conn)?;
    let dept_ids: HashSet<DepartmentId> = departments.iter().map(|d| d.id).collect();

    let specialties = load_specialties(conn)?;
    for s in &specialties {
        if !dept_ids.contains(&s.dept_id) {
            return Err(OptimizerError::IntegrityViolation {
                entity: "specialite",
                id: s.id.to_string(),
                reference: "dept_id",
            }
            .into());
        }
    }
    let specialty_ids: HashSet<SpecialtyId> = specialties.iter().map(|s| s.id).collect();

    let formations = load_formations(conn)?;
    for f in &formations {
        if !specialty_ids.contains(&f.specialty_id) {
            return Err(OptimizerError::IntegrityViolation {
                entity: "formation",
                id: f.id.to_string(),
                reference: "specialite_id",
            }
            .into());
        }
    }
    let formation_ids: HashSet<FormationId> = formations.iter().map(|f| f.id).collect();

    let modules = load_modules(conn)?;
    for m in &modules {
        if !formation_ids.contains(&m.formation_id) {
            return Err(OptimizerError::IntegrityViolation {
                entity: "module",
                id: m.id.to_string(),
                reference: "formation_id",
            }
            .into());
        }
    }
    let module_ids: HashSet<ModuleId> = modules.iter().map(|m| m.id).collect();

    let students = load_students(conn)?;
    for s in &students {
        if !formation_ids.contains(&s.formation_id) {
            return Err(OptimizerError::IntegrityViolation {
                entity: "etudiant",
                id: s.id.to_string(),
                reference: "formation_id",
            }
            .into());
        }
    }
    let student_ids: HashSet<StudentId> = students.iter().map(|s| s.id).collect();

    // `inscriptions` plays no role in conflict derivation (enrollment is implicit from
    // formation membership, see DESIGN.md) but any explicit rows present still need to point
    // at real students and modules.
    let inscriptions = load_inscriptions(conn)?;
    for (student_id, module_id) in &inscriptions {
        if !student_ids.contains(student_id) {
            return Err(OptimizerError::IntegrityViolation {
                entity: "inscription",
                id: format!("{}-{}", student_id.0, module_id.0),
                reference: "etudiant_id",
            }
            .into());
        }
        if !module_ids.contains(module_id) {
            return Err(OptimizerError::IntegrityViolation {
                entity: "inscription",
                id: format!("{}-{}", student_id.0, module_id.0),
                reference: "module_id",
            }
            .into());
        }
    }

    let professors = load_professors(conn)?;
    for p in &professors {
        if !dept_ids.contains(&p.dept_id) {
            return Err(OptimizerError::IntegrityViolation {
                entity: "professeur",
                id: p.id.to_string(),
                reference: "dept_id",
            }
            .into());
        }
    }

    let rooms = load_rooms(conn)?;

    Ok(ScheduleInput {
        departments,
        specialties,
        formations,
        modules,
        students,
        professors,
        rooms,
        config,
    })
}

fn load_departments(conn: &mut Conn) -> anyhow::Result<Vec<Department>> {
    conn.query_map("SELECT id, nom FROM departements", |(id, name): (i64, String)| {
        Department {
            id: DepartmentId(id),
            name,
        }
    })
    .map_err(OptimizerError::DataUnavailable)
    .map_err(Into::into)
}

fn load_specialties(conn: &mut Conn) -> anyhow::Result<Vec<Specialty>> {
    conn.query_map(
        "SELECT id, nom, cycle, dept_id FROM specialites",
        |(id, name, cycle, dept_id): (i64, String, String, i64)| Specialty {
            id: SpecialtyId(id),
            name,
            cycle: parse_cycle(&cycle),
            dept_id: DepartmentId(dept_id),
        },
    )
    .map_err(OptimizerError::DataUnavailable)
    .map_err(Into::into)
}

fn load_formations(conn: &mut Conn) -> anyhow::Result<Vec<Formation>> {
    conn.query_map(
        "SELECT id, specialite_id, cycle, semestre FROM formations",
        |(id, specialty_id, cycle, semester): (i64, i64, String, u8)| Formation {
            id: FormationId(id),
            specialty_id: SpecialtyId(specialty_id),
            cycle: parse_cycle(&cycle),
            semester,
        },
    )
    .map_err(OptimizerError::DataUnavailable)
    .map_err(Into::into)
}

fn load_modules(conn: &mut Conn) -> anyhow::Result<Vec<Module>> {
    conn.query_map(
        "SELECT id, nom, formation_id FROM modules",
        |(id, name, formation_id): (i64, String, i64)| Module {
            id: ModuleId(id),
            name,
            formation_id: FormationId(formation_id),
        },
    )
    .map_err(OptimizerError::DataUnavailable)
    .map_err(Into::into)
}

fn load_students(conn: &mut Conn) -> anyhow::Result<Vec<Student>> {
    conn.query_map(
        "SELECT id, nom, prenom, formation_id, groupe FROM etudiants",
        |(id, nom, prenom, formation_id, group): (i64, String, String, i64, u32)| Student {
            id: StudentId(id),
            name: format!("{prenom} {nom}"),
            formation_id: FormationId(formation_id),
            group,
        },
    )
    .map_err(OptimizerError::DataUnavailable)
    .map_err(Into::into)
}

fn load_professors(conn: &mut Conn) -> anyhow::Result<Vec<Professor>> {
    conn.query_map(
        "SELECT id, nom, dept_id FROM professeurs",
        |(id, name, dept_id): (i64, String, i64)| Professor {
            id: ProfessorId(id),
            name,
            dept_id: DepartmentId(dept_id),
        },
    )
    .map_err(OptimizerError::DataUnavailable)
    .map_err(Into::into)
}

fn load_inscriptions(conn: &mut Conn) -> anyhow::Result<Vec<(StudentId, ModuleId)>> {
    conn.query_map(
        "SELECT etudiant_id, module_id FROM inscriptions",
        |(student_id, module_id): (i64, i64)| (StudentId(student_id), ModuleId(module_id)),
    )
    .map_err(OptimizerError::DataUnavailable)
    .map_err(Into::into)
}

fn load_rooms(conn: &mut Conn) -> anyhow::Result<Vec<Room>> {
    conn.query_map(
        "SELECT id, nom, capacite, type FROM lieu_examens ORDER BY capacite DESC",
        |(id, name, capacity, kind): (i64, String, u32, String)| Room {
            id: RoomId(id),
            name,
            capacity,
            kind: parse_room_kind(&kind),
        },
    )
    .map_err(OptimizerError::DataUnavailable)
    .map_err(Into::into)
}

fn parse_cycle(raw: &str) -> Cycle {
    match raw {
        "Master" => Cycle::Master,
        _ => Cycle::Licence,
    }
}

fn parse_room_kind(raw: &str) -> RoomKind {
    match raw {
        "Salle_TD" => RoomKind::SalleTd,
        _ => RoomKind::Amphi,
    }
}
