//! Program catalog: the registry of training programs.
//!
//! A [`Catalog`] is validated when it is constructed, so every lookup made
//! against it can rely on its invariants. The built-in programs are cached
//! in a process-wide static on first access.

use crate::types::{Exercise, MuscleGroup as M, Program, ProgramSummary, RepSpec};
use crate::{Error, Result};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap, HashSet};
use std::path::Path;

/// Most training days a weekly split can name
pub const MAX_DAYS_PER_WEEK: u8 = 7;

/// Cached default catalog - built and validated once
static DEFAULT_CATALOG: Lazy<std::result::Result<Catalog, String>> =
    Lazy::new(|| build_default_catalog().map_err(|e| e.to_string()));

/// Get a reference to the cached built-in catalog
pub fn default_catalog() -> Result<&'static Catalog> {
    DEFAULT_CATALOG
        .as_ref()
        .map_err(|e| Error::InconsistentCatalog(e.clone()))
}

/// Immutable, validated set of programs indexed by id
#[derive(Clone, Debug)]
pub struct Catalog {
    programs: Vec<Program>,
    index: HashMap<String, usize>,
}

/// On-disk shape of a custom catalog file
#[derive(Debug, Serialize, Deserialize)]
struct CatalogFile {
    programs: Vec<Program>,
}

impl Catalog {
    /// Build a catalog, failing if any program violates catalog invariants
    pub fn new(programs: Vec<Program>) -> Result<Self> {
        let errors = validate_programs(&programs);
        if !errors.is_empty() {
            return Err(Error::InconsistentCatalog(errors.join("; ")));
        }

        let index = programs
            .iter()
            .enumerate()
            .map(|(i, p)| (p.id.clone(), i))
            .collect();

        tracing::debug!("Built catalog with {} programs", programs.len());
        Ok(Self { programs, index })
    }

    /// Load and validate a catalog from a JSON file
    pub fn load_from(path: &Path) -> Result<Self> {
        let catalog = Self::new(read_programs(path)?)?;
        tracing::info!(
            "Loaded catalog with {} programs from {:?}",
            catalog.len(),
            path
        );
        Ok(catalog)
    }

    /// Write the catalog to a JSON file in the format `load_from` reads
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = CatalogFile {
            programs: self.programs.clone(),
        };
        std::fs::write(path, serde_json::to_string_pretty(&file)?)?;
        Ok(())
    }

    /// Re-check catalog invariants
    ///
    /// Returns a list of validation errors, or empty Vec if valid.
    pub fn validate(&self) -> Vec<String> {
        validate_programs(&self.programs)
    }

    pub fn len(&self) -> usize {
        self.programs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.programs.is_empty()
    }

    /// Programs in registration order
    pub fn programs(&self) -> &[Program] {
        &self.programs
    }

    pub fn get_program(&self, id: &str) -> Result<&Program> {
        self.index
            .get(id)
            .map(|&i| &self.programs[i])
            .ok_or_else(|| Error::UnknownProgram(id.to_string()))
    }

    /// Day-counts the program defines a split for
    pub fn supported_days(&self, id: &str) -> Result<Vec<u8>> {
        Ok(self.get_program(id)?.supported_days())
    }

    /// Summaries of every registered program, in registration order
    pub fn list_programs(&self) -> Vec<ProgramSummary> {
        self.programs.iter().map(Program::summary).collect()
    }
}

/// Read the programs of a JSON catalog file without validating them
pub fn read_programs(path: &Path) -> Result<Vec<Program>> {
    let contents = std::fs::read_to_string(path)?;
    let file: CatalogFile = serde_json::from_str(&contents)?;
    Ok(file.programs)
}

/// Check programs for consistency and completeness
///
/// Returns a list of validation errors, or empty Vec if valid.
pub fn validate_programs(programs: &[Program]) -> Vec<String> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for program in programs {
        let id = &program.id;

        if id.is_empty() {
            errors.push("Program has empty ID".to_string());
        }
        if !seen.insert(id.as_str()) {
            errors.push(format!("Duplicate program ID '{}'", id));
        }
        if program.name.is_empty() {
            errors.push(format!("Program '{}' has empty name", id));
        }
        if program.min_days > program.max_days {
            errors.push(format!(
                "Program '{}': min_days {} > max_days {}",
                id, program.min_days, program.max_days
            ));
        }
        if program.splits.is_empty() {
            errors.push(format!("Program '{}' defines no splits", id));
        }

        if program.min_days == 0 || program.max_days > MAX_DAYS_PER_WEEK {
            errors.push(format!(
                "Program '{}': days {}..={} outside 1..={}",
                id, program.min_days, program.max_days, MAX_DAYS_PER_WEEK
            ));
        }

        for (&days, sequence) in &program.splits {
            if days == 0 || days > MAX_DAYS_PER_WEEK {
                errors.push(format!(
                    "Program '{}': {}-day split is not a weekly frequency",
                    id, days
                ));
            }
            if days < program.min_days || days > program.max_days {
                errors.push(format!(
                    "Program '{}': {}-day split outside {}..={}",
                    id, days, program.min_days, program.max_days
                ));
            }
            if sequence.len() != days as usize {
                errors.push(format!(
                    "Program '{}': {}-day split lists {} sessions",
                    id,
                    days,
                    sequence.len()
                ));
            }
            for session in sequence {
                if !program.sessions.contains_key(session) {
                    errors.push(format!(
                        "Program '{}': {}-day split references undefined session '{}'",
                        id, days, session
                    ));
                }
            }
        }

        for (session, exercises) in &program.sessions {
            if session.is_empty() {
                errors.push(format!("Program '{}' has a session with empty name", id));
            }
            if exercises.is_empty() {
                errors.push(format!("Program '{}': session '{}' is empty", id, session));
            }
            for exercise in exercises {
                if exercise.name.is_empty() {
                    errors.push(format!(
                        "Program '{}': session '{}' has an unnamed exercise",
                        id, session
                    ));
                }
                if exercise.sets == 0 {
                    errors.push(format!(
                        "Program '{}': '{}' in '{}' has 0 sets",
                        id, exercise.name, session
                    ));
                }
                if let Some(defect) = exercise.reps.defect() {
                    errors.push(format!(
                        "Program '{}': '{}' in '{}': {}",
                        id, exercise.name, session, defect
                    ));
                }
            }
        }
    }

    errors
}

// ============================================================================
// Built-in programs
// ============================================================================

fn ex(name: &str, sets: u32, reps: RepSpec, muscle: M) -> Exercise {
    Exercise::new(name, sets, reps, muscle)
}

fn splits(entries: Vec<(u8, Vec<&str>)>) -> BTreeMap<u8, Vec<String>> {
    entries
        .into_iter()
        .map(|(days, names)| (days, names.into_iter().map(String::from).collect()))
        .collect()
}

fn sessions(entries: Vec<(&str, Vec<Exercise>)>) -> HashMap<String, Vec<Exercise>> {
    entries
        .into_iter()
        .map(|(name, exercises)| (name.to_string(), exercises))
        .collect()
}

/// Builds and validates the catalog of built-in programs
///
/// **Note**: prefer [`default_catalog`], which caches the result.
pub fn build_default_catalog() -> Result<Catalog> {
    Catalog::new(builtin_programs())
}

/// The built-in programs, in registration order
pub fn builtin_programs() -> Vec<Program> {
    vec![
        push_pull_legs(),
        upper_lower(),
        full_body(),
        arnold_split(),
        bro_split(),
    ]
}

fn push_pull_legs() -> Program {
    Program {
        id: "ppl".into(),
        name: "Push/Pull/Legs".into(),
        icon: "🏋️".into(),
        description: "Trains pressing, pulling and leg muscles on separate days.".into(),
        min_days: 3,
        max_days: 6,
        splits: splits(vec![
            (3, vec!["Push", "Pull", "Legs"]),
            (4, vec!["Push", "Pull", "Legs", "Push"]),
            (5, vec!["Push", "Pull", "Legs", "Push", "Pull"]),
            (6, vec!["Push", "Pull", "Legs", "Push", "Pull", "Legs"]),
        ]),
        sessions: sessions(vec![
            (
                "Push",
                vec![
                    ex("Bench Press", 4, RepSpec::range(8, 10), M::Chest),
                    ex("Overhead Press", 3, RepSpec::range(8, 10), M::Shoulders),
                    ex("Incline Dumbbell Press", 3, RepSpec::range(10, 12), M::Chest),
                    ex("Lateral Raise", 3, RepSpec::range(12, 15), M::Shoulders),
                    ex("Tricep Pushdown", 3, RepSpec::range(10, 12), M::Triceps),
                    ex("Overhead Tricep Extension", 3, RepSpec::range(10, 12), M::Triceps),
                ],
            ),
            (
                "Pull",
                vec![
                    ex("Deadlift", 3, RepSpec::exactly(5), M::Back),
                    ex("Pull-ups", 4, RepSpec::MaxEffort, M::Back),
                    ex("Barbell Row", 4, RepSpec::range(8, 10), M::Back),
                    ex("Face Pull", 3, RepSpec::range(15, 20), M::RearDelts),
                    ex("Barbell Curl", 3, RepSpec::range(10, 12), M::Biceps),
                    ex("Hammer Curl", 3, RepSpec::range(10, 12), M::Biceps),
                ],
            ),
            (
                "Legs",
                vec![
                    ex("Back Squat", 4, RepSpec::range(6, 8), M::Quads),
                    ex("Romanian Deadlift", 3, RepSpec::range(8, 10), M::Hamstrings),
                    ex("Leg Press", 3, RepSpec::range(10, 12), M::Quads),
                    ex("Lying Leg Curl", 3, RepSpec::range(10, 12), M::Hamstrings),
                    ex("Standing Calf Raise", 4, RepSpec::range(12, 15), M::Calves),
                    ex("Plank", 3, RepSpec::seconds(60), M::Abs),
                ],
            ),
        ]),
    }
}

fn upper_lower() -> Program {
    Program {
        id: "upper_lower".into(),
        name: "Upper/Lower".into(),
        icon: "↕️".into(),
        description: "Alternates upper-body and lower-body sessions.".into(),
        min_days: 2,
        max_days: 4,
        splits: splits(vec![
            (2, vec!["Upper A", "Lower A"]),
            (4, vec!["Upper A", "Lower A", "Upper B", "Lower B"]),
        ]),
        sessions: sessions(vec![
            (
                "Upper A",
                vec![
                    ex("Bench Press", 4, RepSpec::range(6, 8), M::Chest),
                    ex("Barbell Row", 4, RepSpec::range(6, 8), M::Back),
                    ex("Overhead Press", 3, RepSpec::range(8, 10), M::Shoulders),
                    ex("Lat Pulldown", 3, RepSpec::range(10, 12), M::Back),
                    ex("Barbell Curl", 2, RepSpec::range(10, 12), M::Biceps),
                    ex("Skull Crusher", 2, RepSpec::range(10, 12), M::Triceps),
                ],
            ),
            (
                "Lower A",
                vec![
                    ex("Back Squat", 4, RepSpec::range(6, 8), M::Quads),
                    ex("Romanian Deadlift", 3, RepSpec::range(8, 10), M::Hamstrings),
                    ex("Walking Lunge", 3, RepSpec::range(10, 12), M::Quads),
                    ex("Seated Calf Raise", 4, RepSpec::range(12, 15), M::Calves),
                    ex("Hanging Leg Raise", 3, RepSpec::range(10, 15), M::Abs),
                ],
            ),
            (
                "Upper B",
                vec![
                    ex("Incline Bench Press", 4, RepSpec::range(8, 10), M::Chest),
                    ex("Pull-ups", 4, RepSpec::MaxEffort, M::Back),
                    ex("Seated Dumbbell Press", 3, RepSpec::range(10, 12), M::Shoulders),
                    ex("Cable Row", 3, RepSpec::range(10, 12), M::Back),
                    ex("Face Pull", 3, RepSpec::range(15, 20), M::RearDelts),
                    ex("Dips", 3, RepSpec::MaxEffort, M::Triceps),
                ],
            ),
            (
                "Lower B",
                vec![
                    ex("Deadlift", 3, RepSpec::exactly(5), M::Back),
                    ex("Front Squat", 3, RepSpec::range(8, 10), M::Quads),
                    ex("Hip Thrust", 3, RepSpec::range(8, 12), M::Glutes),
                    ex("Lying Leg Curl", 3, RepSpec::range(10, 12), M::Hamstrings),
                    ex("Standing Calf Raise", 4, RepSpec::range(12, 15), M::Calves),
                ],
            ),
        ]),
    }
}

fn full_body() -> Program {
    Program {
        id: "full_body".into(),
        name: "Full Body".into(),
        icon: "🧍".into(),
        description: "Hits every major muscle group in each session.".into(),
        min_days: 2,
        max_days: 3,
        splits: splits(vec![
            (2, vec!["Full Body A", "Full Body B"]),
            (3, vec!["Full Body A", "Full Body B", "Full Body C"]),
        ]),
        sessions: sessions(vec![
            (
                "Full Body A",
                vec![
                    ex("Back Squat", 3, RepSpec::range(6, 8), M::Quads),
                    ex("Bench Press", 3, RepSpec::range(6, 8), M::Chest),
                    ex("Barbell Row", 3, RepSpec::range(8, 10), M::Back),
                    ex("Lateral Raise", 2, RepSpec::range(12, 15), M::Shoulders),
                    ex("Plank", 3, RepSpec::seconds(45), M::Abs),
                ],
            ),
            (
                "Full Body B",
                vec![
                    ex("Deadlift", 3, RepSpec::exactly(5), M::Back),
                    ex("Overhead Press", 3, RepSpec::range(8, 10), M::Shoulders),
                    ex("Pull-ups", 3, RepSpec::MaxEffort, M::Back),
                    ex("Walking Lunge", 3, RepSpec::range(10, 12), M::Quads),
                    ex("Barbell Curl", 2, RepSpec::range(10, 12), M::Biceps),
                ],
            ),
            (
                "Full Body C",
                vec![
                    ex("Front Squat", 3, RepSpec::range(8, 10), M::Quads),
                    ex("Incline Dumbbell Press", 3, RepSpec::range(10, 12), M::Chest),
                    ex("Cable Row", 3, RepSpec::range(10, 12), M::Back),
                    ex("Hip Thrust", 3, RepSpec::range(8, 12), M::Glutes),
                    ex("Farmer's Carry", 3, RepSpec::seconds(40), M::Various),
                ],
            ),
        ]),
    }
}

fn arnold_split() -> Program {
    let chest_back = "Chest/Back";
    let shoulders_arms = "Shoulders/Arms";
    let legs = "Legs";

    Program {
        id: "arnold".into(),
        name: "Arnold Split".into(),
        icon: "💪".into(),
        description: "Classic high-volume six-day rotation of antagonist pairings.".into(),
        min_days: 6,
        max_days: 6,
        splits: splits(vec![(
            6,
            vec![chest_back, shoulders_arms, legs, chest_back, shoulders_arms, legs],
        )]),
        sessions: sessions(vec![
            (
                chest_back,
                vec![
                    ex("Bench Press", 4, RepSpec::range(8, 10), M::Chest),
                    ex("Incline Dumbbell Press", 3, RepSpec::range(10, 12), M::Chest),
                    ex("Pull-ups", 4, RepSpec::MaxEffort, M::Back),
                    ex("Barbell Row", 4, RepSpec::range(8, 10), M::Back),
                    ex("Dumbbell Pullover", 3, RepSpec::range(10, 12), M::Chest),
                ],
            ),
            (
                shoulders_arms,
                vec![
                    ex("Overhead Press", 4, RepSpec::range(8, 10), M::Shoulders),
                    ex("Lateral Raise", 3, RepSpec::range(12, 15), M::Shoulders),
                    ex("Rear Delt Fly", 3, RepSpec::range(12, 15), M::RearDelts),
                    ex("Barbell Curl", 3, RepSpec::range(8, 10), M::Biceps),
                    ex("Close-Grip Bench Press", 3, RepSpec::range(8, 10), M::Triceps),
                    ex("Barbell Shrug", 3, RepSpec::range(12, 15), M::Traps),
                ],
            ),
            (
                legs,
                vec![
                    ex("Back Squat", 4, RepSpec::range(8, 10), M::Quads),
                    ex("Leg Extension", 3, RepSpec::range(12, 15), M::Quads),
                    ex("Stiff-Leg Deadlift", 3, RepSpec::range(8, 10), M::Hamstrings),
                    ex("Standing Calf Raise", 5, RepSpec::range(12, 15), M::Calves),
                    ex("Crunch", 3, RepSpec::MaxEffort, M::Abs),
                ],
            ),
        ]),
    }
}

fn bro_split() -> Program {
    Program {
        id: "bro_split".into(),
        name: "Bro Split".into(),
        icon: "🔥".into(),
        description: "One muscle group per day, five days a week.".into(),
        min_days: 5,
        max_days: 5,
        splits: splits(vec![(5, vec!["Chest", "Back", "Shoulders", "Arms", "Legs"])]),
        sessions: sessions(vec![
            (
                "Chest",
                vec![
                    ex("Bench Press", 4, RepSpec::range(8, 10), M::Chest),
                    ex("Incline Dumbbell Press", 3, RepSpec::range(10, 12), M::Chest),
                    ex("Cable Fly", 3, RepSpec::range(12, 15), M::Chest),
                    ex("Push-ups", 2, RepSpec::MaxEffort, M::Chest),
                ],
            ),
            (
                "Back",
                vec![
                    ex("Deadlift", 3, RepSpec::exactly(5), M::Back),
                    ex("Lat Pulldown", 4, RepSpec::range(10, 12), M::Back),
                    ex("Cable Row", 3, RepSpec::range(10, 12), M::Back),
                    ex("Barbell Shrug", 3, RepSpec::range(12, 15), M::Traps),
                ],
            ),
            (
                "Shoulders",
                vec![
                    ex("Overhead Press", 4, RepSpec::range(8, 10), M::Shoulders),
                    ex("Lateral Raise", 4, RepSpec::range(12, 15), M::Shoulders),
                    ex("Face Pull", 3, RepSpec::range(15, 20), M::RearDelts),
                ],
            ),
            (
                "Arms",
                vec![
                    ex("Barbell Curl", 4, RepSpec::range(8, 10), M::Biceps),
                    ex("Tricep Pushdown", 4, RepSpec::range(10, 12), M::Triceps),
                    ex("Hammer Curl", 3, RepSpec::range(10, 12), M::Biceps),
                    ex("Dips", 3, RepSpec::MaxEffort, M::Triceps),
                ],
            ),
            (
                "Legs",
                vec![
                    ex("Back Squat", 4, RepSpec::range(6, 8), M::Quads),
                    ex("Lying Leg Curl", 3, RepSpec::range(10, 12), M::Hamstrings),
                    ex("Hip Thrust", 3, RepSpec::range(8, 12), M::Glutes),
                    ex("Standing Calf Raise", 4, RepSpec::range(12, 15), M::Calves),
                    ex("Wall Sit", 2, RepSpec::seconds(60), M::Quads),
                ],
            ),
        ]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiny_program() -> Program {
        Program {
            id: "tiny".into(),
            name: "Tiny".into(),
            icon: "*".into(),
            description: String::new(),
            min_days: 1,
            max_days: 2,
            splits: splits(vec![(1, vec!["Only"])]),
            sessions: sessions(vec![(
                "Only",
                vec![ex("Burpee", 3, RepSpec::MaxEffort, M::Various)],
            )]),
        }
    }

    #[test]
    fn test_catalog_loads() {
        crate::logging::init_test();
        let catalog = build_default_catalog().unwrap();
        assert_eq!(catalog.len(), 5);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_default_catalog_validates() {
        let catalog = default_catalog().unwrap();
        let errors = catalog.validate();
        assert!(
            errors.is_empty(),
            "Default catalog has validation errors: {:?}",
            errors
        );
    }

    #[test]
    fn test_split_keys_within_bounds() {
        let catalog = default_catalog().unwrap();
        for program in catalog.programs() {
            assert!(program.min_days <= program.max_days);
            for &days in program.splits.keys() {
                assert!(
                    (program.min_days..=program.max_days).contains(&days),
                    "{} has {}-day split outside bounds",
                    program.id,
                    days
                );
            }
        }
    }

    #[test]
    fn test_all_referenced_sessions_exist() {
        let catalog = default_catalog().unwrap();
        for program in catalog.programs() {
            for sequence in program.splits.values() {
                for session in sequence {
                    assert!(
                        program.sessions.contains_key(session),
                        "Session {} referenced by {} but not defined",
                        session,
                        program.id
                    );
                }
            }
        }
    }

    #[test]
    fn test_list_programs_unique_and_complete() {
        let catalog = default_catalog().unwrap();
        let summaries = catalog.list_programs();
        assert_eq!(summaries.len(), catalog.len());

        let ids: HashSet<_> = summaries.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids.len(), summaries.len());
        assert_eq!(summaries[0].id, "ppl");
    }

    #[test]
    fn test_supported_days_enumerated() {
        let catalog = default_catalog().unwrap();
        assert_eq!(catalog.supported_days("ppl").unwrap(), vec![3, 4, 5, 6]);
        assert_eq!(catalog.supported_days("upper_lower").unwrap(), vec![2, 4]);
        assert_eq!(catalog.supported_days("arnold").unwrap(), vec![6]);
        assert!(matches!(
            catalog.supported_days("nope"),
            Err(Error::UnknownProgram(_))
        ));
    }

    #[test]
    fn test_missing_session_fails_construction() {
        let mut program = tiny_program();
        program.splits = splits(vec![(2, vec!["Only", "Ghost"])]);

        let err = Catalog::new(vec![program]).unwrap_err();
        match err {
            Error::InconsistentCatalog(msg) => assert!(msg.contains("Ghost"), "{}", msg),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_split_outside_bounds_fails_construction() {
        let mut program = tiny_program();
        program.splits = splits(vec![(3, vec!["Only", "Only", "Only"])]);
        assert!(matches!(
            Catalog::new(vec![program]),
            Err(Error::InconsistentCatalog(_))
        ));
    }

    #[test]
    fn test_inverted_bounds_fail_construction() {
        let mut program = tiny_program();
        program.min_days = 3;
        assert!(matches!(
            Catalog::new(vec![program]),
            Err(Error::InconsistentCatalog(_))
        ));
    }

    #[test]
    fn test_zero_day_split_fails_construction() {
        let mut program = tiny_program();
        program.min_days = 0;
        program.splits = splits(vec![(0, vec![]), (1, vec!["Only"])]);

        let err = Catalog::new(vec![program]).unwrap_err();
        assert!(err.to_string().contains("0-day split"), "{}", err);
    }

    #[test]
    fn test_eight_day_split_fails_construction() {
        let mut program = tiny_program();
        program.max_days = 8;
        program.splits = splits(vec![(8, vec!["Only"; 8])]);

        let err = Catalog::new(vec![program]).unwrap_err();
        assert!(err.to_string().contains("8-day split"), "{}", err);
    }

    #[test]
    fn test_oversized_split_never_reaches_lookup() {
        let mut program = tiny_program();
        program.max_days = 255;
        program.splits = splits(vec![(255, vec!["Only"; 255])]);

        assert!(matches!(
            Catalog::new(vec![program]),
            Err(Error::InconsistentCatalog(_))
        ));
    }

    #[test]
    fn test_validate_programs_lists_every_defect() {
        let mut program = tiny_program();
        program.splits = splits(vec![(2, vec!["Only", "Ghost"]), (1, vec!["Phantom"])]);

        let errors = validate_programs(&[program]);
        assert_eq!(errors.len(), 2, "{:?}", errors);
        assert!(validate_programs(&builtin_programs()).is_empty());
    }

    #[test]
    fn test_duplicate_ids_fail_construction() {
        let err = Catalog::new(vec![tiny_program(), tiny_program()]).unwrap_err();
        assert!(err.to_string().contains("Duplicate program ID 'tiny'"));
    }

    #[test]
    fn test_zero_sets_fail_construction() {
        let mut program = tiny_program();
        program
            .sessions
            .insert("Only".into(), vec![ex("Burpee", 0, RepSpec::MaxEffort, M::Various)]);
        assert!(Catalog::new(vec![program]).is_err());
    }

    #[test]
    fn test_catalog_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalogs").join("custom.json");

        let catalog = Catalog::new(vec![tiny_program()]).unwrap();
        catalog.save_to(&path).unwrap();

        let loaded = Catalog::load_from(&path).unwrap();
        assert_eq!(loaded.programs(), catalog.programs());
    }

    #[test]
    fn test_invalid_catalog_file_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(
            &path,
            r#"{"programs":[{"id":"x","name":"X","icon":"","description":"",
                "min_days":2,"max_days":2,"splits":{"2":["A","B"]},
                "sessions":{"A":[{"name":"Squat","sets":3,
                "reps":{"type":"range","min":5,"max":5},"muscle":"quads"}]}}]}"#,
        )
        .unwrap();

        let err = Catalog::load_from(&path).unwrap_err();
        assert!(matches!(err, Error::InconsistentCatalog(ref m) if m.contains("'B'")));
    }
}
