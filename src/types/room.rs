use super::RoomId;
use serde::{Deserialize, Serialize};

/// The two room kinds the optimizer packs exams into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoomKind {
    Amphi,
    #[serde(rename = "Salle_TD")]
    SalleTd,
}

impl RoomKind {
    pub fn as_db_str(&self) -> &'static str {
        match self {
            RoomKind::Amphi => "Amphi",
            RoomKind::SalleTd => "Salle_TD",
        }
    }
}

/// A physical exam location: an amphitheatre or a small room.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    pub id: RoomId,
    pub name: String,
    pub capacity: u32,
    pub kind: RoomKind,
}
