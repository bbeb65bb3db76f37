use crate::types::{ExamRecord, FormationId, ModuleId, Period, Room, RoomKind, ScheduleInput};
use std::collections::{BTreeMap, HashMap};

/// Phase 3: pack each module's enrolled groups into rooms, one (day, slot) at a time.
///
/// Grounded on `original_source/scripts/optimize.py`'s PHASE 3: groups are sorted
/// largest-first, a large group (more than `small_room_capacity` students) claims an amphi,
/// a small group claims a `Salle_TD`; while capacity remains, groups from the *same formation*
/// are folded into the same room (the "fusion" rule) to avoid wasting seats. Both room pools
/// are fully replenished at the start of every (day, slot) — two exams at the same time never
/// compete for rooms, but one module's exam at 08:00 can reuse the same physical room used at
/// 10:30.
pub fn pack_rooms(
    input: &ScheduleInput,
    periods: &HashMap<ModuleId, Period>,
) -> Vec<ExamRecord> {
    let config = &input.config;
    // Largest-capacity-first within each pool; this does not rely on the Loader's own
    // `ORDER BY capacite DESC` (§4.4 assigns that ordering responsibility to this phase).
    let mut amphitheaters: Vec<&Room> = input
        .rooms
        .iter()
        .filter(|r| r.kind == RoomKind::Amphi)
        .collect();
    amphitheaters.sort_by_key(|r| (std::cmp::Reverse(r.capacity), r.id));
    let mut small_rooms: Vec<&Room> = input
        .rooms
        .iter()
        .filter(|r| r.kind == RoomKind::SalleTd)
        .collect();
    small_rooms.sort_by_key(|r| (std::cmp::Reverse(r.capacity), r.id));

    let mut modules_by_slot: HashMap<Period, Vec<ModuleId>> = HashMap::new();
    for (&module_id, &period) in periods {
        modules_by_slot.entry(period).or_default().push(module_id);
    }
    // Deterministic processing order within a slot.
    for modules in modules_by_slot.values_mut() {
        modules.sort();
    }

    let mut records = Vec::new();
    let mut slots: Vec<&Period> = modules_by_slot.keys().collect();
    slots.sort();

    for period in slots {
        let modules = &modules_by_slot[period];
        let mut available_amphis: Vec<&Room> = amphitheaters.clone();
        let mut available_salles: Vec<&Room> = small_rooms.clone();

        for &module_id in modules {
            let groups = module_groups(input, module_id);
            let mut pending: Vec<((FormationId, u32), u32)> = groups.into_iter().collect();
            // Largest group first; (formation_id, group_num) breaks size ties so the order is
            // fully determined by the data, independent of any container's iteration order.
            pending.sort_by_key(|&((formation_id, group_num), size)| {
                (std::cmp::Reverse(size), formation_id, group_num)
            });

            while !pending.is_empty() {
                let (group_key, size) = pending.remove(0);
                let (formation_id, group_num) = group_key;

                if size > config.small_room_capacity {
                    if let Some(room) = pop_first(&mut available_amphis) {
                        let (groups_in_room, remaining) = fuse(
                            &mut pending,
                            formation_id,
                            group_num,
                            room.capacity.saturating_sub(size),
                            config.same_formation_fusion_slack_amphi,
                        );
                        let _ = remaining;
                        records.push(exam_record(
                            module_id, *period, room, formation_id, groups_in_room,
                        ));
                    } else if let Some(room) = pop_first(&mut available_salles) {
                        // Fallback: one salle per remaining seat-block of the oversized group.
                        records.push(exam_record(
                            module_id,
                            *period,
                            room,
                            formation_id,
                            vec![group_num],
                        ));
                        let mut needed = size.saturating_sub(room.capacity);
                        while needed > 0 {
                            let Some(room) = pop_first(&mut available_salles) else {
                                break;
                            };
                            records.push(exam_record(
                                module_id,
                                *period,
                                room,
                                formation_id,
                                vec![group_num],
                            ));
                            needed = needed.saturating_sub(room.capacity);
                        }
                    }
                } else if let Some(room) = pop_first(&mut available_salles) {
                    let (groups_in_room, remaining) = fuse(
                        &mut pending,
                        formation_id,
                        group_num,
                        room.capacity.saturating_sub(size),
                        config.same_formation_fusion_slack_small_room,
                    );
                    let _ = remaining;
                    records.push(exam_record(
                        module_id, *period, room, formation_id, groups_in_room,
                    ));
                } else if let Some(room) = pop_first(&mut available_amphis) {
                    records.push(exam_record(
                        module_id,
                        *period,
                        room,
                        formation_id,
                        vec![group_num],
                    ));
                }
            }
        }
    }

    records
}

/// Per-(formation, group) headcount of students enrolled in a module, derived from the
/// implicit formation-membership enrollment rule.
fn module_groups(input: &ScheduleInput, module_id: ModuleId) -> BTreeMap<(FormationId, u32), u32> {
    let Some(module) = input.modules.iter().find(|m| m.id == module_id) else {
        return BTreeMap::new();
    };
    let mut groups: BTreeMap<(FormationId, u32), u32> = BTreeMap::new();
    for student in &input.students {
        if student.formation_id == module.formation_id {
            *groups
                .entry((student.formation_id, student.group))
                .or_insert(0) += 1;
        }
    }
    groups
}

fn pop_first<'a>(rooms: &mut Vec<&'a Room>) -> Option<&'a Room> {
    if rooms.is_empty() {
        None
    } else {
        Some(rooms.remove(0))
    }
}

/// Fold same-formation groups from `pending` into the room just claimed, while seats remain
/// above `slack`. Returns the ascending-sorted group numbers placed in the room and the
/// leftover capacity.
fn fuse(
    pending: &mut Vec<((FormationId, u32), u32)>,
    formation_id: FormationId,
    first_group: u32,
    mut remaining_cap: u32,
    slack: u32,
) -> (Vec<u32>, u32) {
    let mut groups_in_room = vec![first_group];
    let mut i = 0;
    while i < pending.len() && remaining_cap >= slack {
        let (key, size) = pending[i];
        if key.0 == formation_id && size <= remaining_cap {
            groups_in_room.push(key.1);
            remaining_cap -= size;
            pending.remove(i);
        } else {
            i += 1;
        }
    }
    groups_in_room.sort();
    (groups_in_room, remaining_cap)
}

fn exam_record(
    module_id: ModuleId,
    period: Period,
    room: &Room,
    formation_id: FormationId,
    groups: Vec<u32>,
) -> ExamRecord {
    ExamRecord {
        module_id,
        period,
        room_id: room.id,
        room_kind: room.kind,
        formation_id,
        groups: groups
            .iter()
            .map(u32::to_string)
            .collect::<Vec<_>>()
            .join(","),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{
        Config, Cycle, Department, DepartmentId, Formation, Module, Specialty, SpecialtyId,
    };

    fn sample_input() -> ScheduleInput {
        ScheduleInput {
            departments: vec![Department {
                id: DepartmentId(1),
                name: "Informatique".into(),
            }],
            specialties: vec![Specialty {
                id: SpecialtyId(1),
                name: "Genie Logiciel".into(),
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
            students: (0..25)
                .map(|i| crate::types::Student {
                    id: crate::types::StudentId(i),
                    name: format!("S{i}"),
                    formation_id: FormationId(1),
                    group: 1,
                })
                .collect(),
            professors: vec![],
            rooms: vec![
                Room {
                    id: crate::types::RoomId(1),
                    name: "Amphi A".into(),
                    capacity: 60,
                    kind: RoomKind::Amphi,
                },
                Room {
                    id: crate::types::RoomId(2),
                    name: "Salle 1".into(),
                    capacity: 20,
                    kind: RoomKind::SalleTd,
                },
            ],
            config: Config::default(),
        }
    }

    #[test]
    fn large_group_gets_an_amphi() {
        let input = sample_input();
        let mut periods = HashMap::new();
        periods.insert(ModuleId(1), Period::new(0, 0));

        let records = pack_rooms(&input, &periods);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].room_kind, RoomKind::Amphi);
        assert_eq!(records[0].groups, "1");
    }
}
