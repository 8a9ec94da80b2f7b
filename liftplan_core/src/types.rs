//! Core domain types for the LiftPlan catalog.
//!
//! This module defines the fundamental types used throughout the system:
//! - Muscle group tags and rep prescriptions
//! - Exercise records within a session
//! - Training programs and their per-frequency splits
//! - Program summaries for listing

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;

// ============================================================================
// Exercise Types
// ============================================================================

/// Target muscle group of an exercise
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum MuscleGroup {
    Chest,
    Back,
    Shoulders,
    Biceps,
    Triceps,
    Quads,
    Hamstrings,
    Calves,
    Glutes,
    Traps,
    Abs,
    RearDelts,
    Various,
}

impl MuscleGroup {
    pub fn as_str(&self) -> &'static str {
        match self {
            MuscleGroup::Chest => "chest",
            MuscleGroup::Back => "back",
            MuscleGroup::Shoulders => "shoulders",
            MuscleGroup::Biceps => "biceps",
            MuscleGroup::Triceps => "triceps",
            MuscleGroup::Quads => "quads",
            MuscleGroup::Hamstrings => "hamstrings",
            MuscleGroup::Calves => "calves",
            MuscleGroup::Glutes => "glutes",
            MuscleGroup::Traps => "traps",
            MuscleGroup::Abs => "abs",
            MuscleGroup::RearDelts => "rear-delts",
            MuscleGroup::Various => "various",
        }
    }
}

impl fmt::Display for MuscleGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rep prescription for every set of an exercise
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RepSpec {
    /// Fixed rep range, e.g. 8-10 (min == max for a single target)
    Range { min: u32, max: u32 },
    /// As many reps as possible
    MaxEffort,
    /// Timed hold or carry
    Duration { seconds: u32 },
}

impl RepSpec {
    pub const fn range(min: u32, max: u32) -> Self {
        RepSpec::Range { min, max }
    }

    pub const fn exactly(reps: u32) -> Self {
        RepSpec::Range {
            min: reps,
            max: reps,
        }
    }

    pub const fn seconds(seconds: u32) -> Self {
        RepSpec::Duration { seconds }
    }

    /// Describe why this prescription is malformed, if it is
    pub fn defect(&self) -> Option<String> {
        match *self {
            RepSpec::Range { min, .. } if min == 0 => Some("rep range starts at 0".into()),
            RepSpec::Range { min, max } if min > max => {
                Some(format!("rep range {}-{} is inverted", min, max))
            }
            RepSpec::Duration { seconds: 0 } => Some("duration is 0 seconds".into()),
            _ => None,
        }
    }
}

impl fmt::Display for RepSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RepSpec::Range { min, max } if min == max => write!(f, "{}", min),
            RepSpec::Range { min, max } => write!(f, "{}-{}", min, max),
            RepSpec::MaxEffort => f.write_str("max"),
            RepSpec::Duration { seconds } => write!(f, "{}s", seconds),
        }
    }
}

/// One movement's prescription within a session
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Exercise {
    pub name: String,
    pub sets: u32,
    pub reps: RepSpec,
    pub muscle: MuscleGroup,
}

impl Exercise {
    pub fn new(name: impl Into<String>, sets: u32, reps: RepSpec, muscle: MuscleGroup) -> Self {
        Self {
            name: name.into(),
            sets,
            reps,
            muscle,
        }
    }
}

// ============================================================================
// Program Types
// ============================================================================

/// A named training methodology bundling several weekly splits
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Program {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub description: String,
    pub min_days: u8,
    pub max_days: u8,
    /// Ordered session names keyed by training days per week
    pub splits: BTreeMap<u8, Vec<String>>,
    /// Exercise lists keyed by session name
    pub sessions: HashMap<String, Vec<Exercise>>,
}

impl Program {
    /// Day-counts with an explicit split, ascending
    pub fn supported_days(&self) -> Vec<u8> {
        self.splits.keys().copied().collect()
    }

    pub fn summary(&self) -> ProgramSummary {
        ProgramSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            icon: self.icon.clone(),
            description: self.description.clone(),
            min_days: self.min_days,
            max_days: self.max_days,
            supported_days: self.supported_days(),
        }
    }
}

/// Listing view of a program
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProgramSummary {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub description: String,
    pub min_days: u8,
    pub max_days: u8,
    pub supported_days: Vec<u8>,
}
