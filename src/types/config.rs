use chrono::{Duration, NaiveDate, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

/// Run configuration: calendar shape, room/proctor capacities, fusion slack.
///
/// Deserialized from an optional `config.toml`; every field has a spec-mandated default
/// (§6 of the specification) so a missing file, or a partially-specified one, still produces
/// a usable configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// First calendar day of the exam period (must be a Monday).
    pub base_date: NaiveDate,
    #[serde(default = "default_num_calendar_days")]
    pub num_calendar_days: u32,
    /// Day-of-week skipped when building the exam calendar (default Friday).
    #[serde(default = "default_rest_weekday", with = "weekday_serde")]
    pub rest_weekday: Weekday,
    #[serde(default = "default_slot_times")]
    pub slot_times: Vec<NaiveTime>,
    #[serde(default = "default_amphi_capacity")]
    pub amphi_capacity: u32,
    #[serde(default = "default_small_room_capacity")]
    pub small_room_capacity: u32,
    #[serde(default = "default_proctors_per_amphi")]
    pub proctors_per_amphi: u32,
    #[serde(default = "default_proctors_per_small_room")]
    pub proctors_per_small_room: u32,
    #[serde(default = "default_max_proctorings_per_prof_per_day")]
    pub max_proctorings_per_prof_per_day: u32,
    #[serde(default = "default_fusion_slack_amphi")]
    pub same_formation_fusion_slack_amphi: u32,
    #[serde(default = "default_fusion_slack_small_room")]
    pub same_formation_fusion_slack_small_room: u32,
}

fn default_num_calendar_days() -> u32 {
    21
}

fn default_rest_weekday() -> Weekday {
    Weekday::Fri
}

fn default_slot_times() -> Vec<NaiveTime> {
    ["08:00:00", "10:30:00", "13:00:00", "15:30:00"]
        .iter()
        .map(|s| NaiveTime::parse_from_str(s, "%H:%M:%S").expect("valid default slot time"))
        .collect()
}

fn default_amphi_capacity() -> u32 {
    60
}

fn default_small_room_capacity() -> u32 {
    20
}

fn default_proctors_per_amphi() -> u32 {
    3
}

fn default_proctors_per_small_room() -> u32 {
    1
}

fn default_max_proctorings_per_prof_per_day() -> u32 {
    3
}

fn default_fusion_slack_amphi() -> u32 {
    10
}

fn default_fusion_slack_small_room() -> u32 {
    5
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_date: NaiveDate::from_ymd_opt(2026, 1, 12).expect("valid default base date"),
            num_calendar_days: default_num_calendar_days(),
            rest_weekday: default_rest_weekday(),
            slot_times: default_slot_times(),
            amphi_capacity: default_amphi_capacity(),
            small_room_capacity: default_small_room_capacity(),
            proctors_per_amphi: default_proctors_per_amphi(),
            proctors_per_small_room: default_proctors_per_small_room(),
            max_proctorings_per_prof_per_day: default_max_proctorings_per_prof_per_day(),
            same_formation_fusion_slack_amphi: default_fusion_slack_amphi(),
            same_formation_fusion_slack_small_room: default_fusion_slack_small_room(),
        }
    }
}

impl Config {
    /// Number of slots per day, derived from `slot_times`.
    pub fn slots_per_day(&self) -> u32 {
        self.slot_times.len() as u32
    }

    /// Ordered list of exam calendar days: `base_date .. base_date + num_calendar_days`,
    /// with every `rest_weekday` removed.
    pub fn exam_days(&self) -> Vec<NaiveDate> {
        let mut days = Vec::new();
        let mut current = self.base_date;
        let end = self.base_date + Duration::days(self.num_calendar_days as i64);
        while current < end {
            if current.weekday() != self.rest_weekday {
                days.push(current);
            }
            current += Duration::days(1);
        }
        days
    }

    /// Combine a (day, slot) index pair into a naive local timestamp.
    pub fn timestamp_for(&self, day: u32, slot: u32) -> chrono::NaiveDateTime {
        let days = self.exam_days();
        let date = days[day as usize];
        let time = self.slot_times[slot as usize];
        date.and_time(time)
    }
}

mod weekday_serde {
    use chrono::Weekday;
    use serde::{self, Deserialize, Deserializer, Serialize, Serializer};
    use std::str::FromStr;

    pub fn serialize<S: Serializer>(value: &Weekday, s: S) -> Result<S::Ok, S::Error> {
        value.to_string().serialize(s)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Weekday, D::Error> {
        let s = String::deserialize(d)?;
        Weekday::from_str(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_calendar_has_eighteen_exam_days() {
        let config = Config::default();
        assert_eq!(config.exam_days().len(), 18);
    }

    #[test]
    fn no_exam_day_falls_on_rest_weekday() {
        let config = Config::default();
        for day in config.exam_days() {
            assert_ne!(day.weekday(), config.rest_weekday);
        }
    }
}
