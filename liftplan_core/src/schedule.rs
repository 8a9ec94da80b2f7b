//! Weekly schedule selection.
//!
//! Resolves a program and a weekly day-count to the ordered list of sessions
//! with their exercises. Only day-counts the program explicitly defines are
//! accepted; nothing is interpolated from neighbouring splits.

use crate::catalog::Catalog;
use crate::{Error, Exercise, Result};
use serde::Serialize;

/// One training day within a weekly schedule
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct ScheduledSession<'a> {
    /// 1-based position within the week
    pub day: u8,
    pub name: &'a str,
    pub exercises: &'a [Exercise],
}

/// A resolved weekly schedule, borrowing from its catalog
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct Schedule<'a> {
    pub program_id: &'a str,
    pub day_count: u8,
    pub sessions: Vec<ScheduledSession<'a>>,
}

impl Catalog {
    /// Resolve the weekly schedule for `program_id` trained `day_count` days per week
    pub fn get_schedule(&self, program_id: &str, day_count: u8) -> Result<Schedule<'_>> {
        let program = self.get_program(program_id)?;

        let in_bounds = (program.min_days..=program.max_days).contains(&day_count);
        let sequence = match program.splits.get(&day_count) {
            Some(sequence) if in_bounds => sequence,
            _ => {
                tracing::warn!(
                    "Program '{}' has no {}-day split",
                    program_id,
                    day_count
                );
                return Err(Error::UnsupportedDayCount {
                    program_id: program_id.to_string(),
                    day_count,
                    supported: program.supported_days(),
                });
            }
        };

        let sessions = sequence
            .iter()
            .enumerate()
            .map(|(i, name)| {
                let day = u8::try_from(i + 1).map_err(|_| {
                    Error::InconsistentCatalog(format!(
                        "Program '{}': {}-day split is too long",
                        program_id, day_count
                    ))
                })?;
                let exercises = program.sessions.get(name).ok_or_else(|| {
                    Error::InconsistentCatalog(format!(
                        "Program '{}': session '{}' has no exercise list",
                        program_id, name
                    ))
                })?;
                Ok(ScheduledSession {
                    day,
                    name: name.as_str(),
                    exercises: exercises.as_slice(),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!(
            "Resolved {}-day schedule for '{}': {} sessions",
            day_count,
            program_id,
            sessions.len()
        );

        Ok(Schedule {
            program_id: program.id.as_str(),
            day_count,
            sessions,
        })
    }
}

impl Schedule<'_> {
    /// Session names in weekly order
    pub fn session_names(&self) -> Vec<&str> {
        self.sessions.iter().map(|s| s.name).collect()
    }

    /// Total working sets across the week
    pub fn total_sets(&self) -> u32 {
        self.sessions
            .iter()
            .flat_map(|s| s.exercises.iter())
            .map(|e| e.sets)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{default_catalog, MuscleGroup, RepSpec};

    #[test]
    fn test_ppl_three_days() {
        let catalog = default_catalog().unwrap();
        let schedule = catalog.get_schedule("ppl", 3).unwrap();

        assert_eq!(schedule.program_id, "ppl");
        assert_eq!(schedule.day_count, 3);
        assert_eq!(schedule.session_names(), vec!["Push", "Pull", "Legs"]);
        assert_eq!(
            schedule.sessions.iter().map(|s| s.day).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );

        let first = &schedule.sessions[0].exercises[0];
        assert_eq!(first.sets, 4);
        assert_eq!(first.reps, RepSpec::range(8, 10));
        assert_eq!(first.reps.to_string(), "8-10");
        assert_eq!(first.muscle, MuscleGroup::Chest);
    }

    #[test]
    fn test_sessions_resolve_to_declared_lists() {
        let catalog = default_catalog().unwrap();
        let program = catalog.get_program("ppl").unwrap();
        let schedule = catalog.get_schedule("ppl", 6).unwrap();

        for session in &schedule.sessions {
            assert_eq!(session.exercises, program.sessions[session.name].as_slice());
        }
    }

    #[test]
    fn test_ppl_seven_days_unsupported() {
        let catalog = default_catalog().unwrap();
        let err = catalog.get_schedule("ppl", 7).unwrap_err();
        match err {
            Error::UnsupportedDayCount {
                program_id,
                day_count,
                supported,
            } => {
                assert_eq!(program_id, "ppl");
                assert_eq!(day_count, 7);
                assert_eq!(supported, vec![3, 4, 5, 6]);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_zero_days_unsupported() {
        let catalog = default_catalog().unwrap();
        assert!(matches!(
            catalog.get_schedule("full_body", 0),
            Err(Error::UnsupportedDayCount { .. })
        ));
    }

    #[test]
    fn test_unknown_program() {
        let catalog = default_catalog().unwrap();
        let err = catalog.get_schedule("does-not-exist", 3).unwrap_err();
        assert!(matches!(err, Error::UnknownProgram(ref id) if id == "does-not-exist"));
        assert!(err.is_user_error());
    }

    #[test]
    fn test_arnold_six_days() {
        let catalog = default_catalog().unwrap();
        let schedule = catalog.get_schedule("arnold", 6).unwrap();
        assert_eq!(
            schedule.session_names(),
            vec![
                "Chest/Back",
                "Shoulders/Arms",
                "Legs",
                "Chest/Back",
                "Shoulders/Arms",
                "Legs"
            ]
        );
    }

    #[test]
    fn test_arnold_four_days_unsupported() {
        let catalog = default_catalog().unwrap();
        assert!(matches!(
            catalog.get_schedule("arnold", 4),
            Err(Error::UnsupportedDayCount { .. })
        ));
    }

    #[test]
    fn test_gap_in_bounds_not_interpolated() {
        let catalog = default_catalog().unwrap();
        let program = catalog.get_program("upper_lower").unwrap();
        assert!((program.min_days..=program.max_days).contains(&3));

        let err = catalog.get_schedule("upper_lower", 3).unwrap_err();
        assert!(err.to_string().contains("[2, 4]"), "{}", err);
    }

    #[test]
    fn test_schedule_is_deterministic() {
        let catalog = default_catalog().unwrap();
        for summary in catalog.list_programs() {
            for days in summary.supported_days {
                let a = catalog.get_schedule(&summary.id, days).unwrap();
                let b = catalog.get_schedule(&summary.id, days).unwrap();
                assert_eq!(a, b);
                assert_eq!(a.sessions.len(), days as usize);
            }
        }
    }

    #[test]
    fn test_total_sets() {
        let catalog = default_catalog().unwrap();
        let three = catalog.get_schedule("ppl", 3).unwrap().total_sets();
        let six = catalog.get_schedule("ppl", 6).unwrap().total_sets();
        assert!(three > 0);
        assert_eq!(six, three * 2);
    }

    #[test]
    fn test_schedule_serializes() {
        let catalog = default_catalog().unwrap();
        let schedule = catalog.get_schedule("ppl", 3).unwrap();
        let value = serde_json::to_value(&schedule).unwrap();
        assert_eq!(value["sessions"][0]["name"], "Push");
        assert_eq!(value["sessions"][0]["exercises"][0]["muscle"], "chest");
    }
}
