use std::{env, fs, path::Path};

use crate::{errors::Error, Result};

/// Largest one-based index the parsers accept (fits a signed 32-bit int).
pub const DEFAULT_MAX_INDEX: u32 = i32::MAX as u32;

pub const DEFAULT_RESPONSE_RANGE: ScoreRange = ScoreRange { min: 0, max: 100 };

/// One attendance mark per tutorial week.
pub const DEFAULT_ATTENDANCE_RANGE: ScoreRange = ScoreRange { min: 0, max: 13 };

/// Closed integer range for numeric fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ScoreRange {
    pub min: u32,
    pub max: u32,
}

impl ScoreRange {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: u32) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// Bounds applied by the field parsers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FieldLimits {
    pub max_index: u32,
    pub response: ScoreRange,
    pub attendance: ScoreRange,
}

impl Default for FieldLimits {
    fn default() -> Self {
        Self {
            max_index: DEFAULT_MAX_INDEX,
            response: DEFAULT_RESPONSE_RANGE,
            attendance: DEFAULT_ATTENDANCE_RANGE,
        }
    }
}

impl FieldLimits {
    /// Reject limits no input could ever satisfy.
    pub fn validate(&self) -> Result<()> {
        if self.max_index == 0 {
            return Err(Error::Config(
                "CLASSBOOK_MAX_INDEX must be at least 1".to_string(),
            ));
        }
        if self.max_index > DEFAULT_MAX_INDEX {
            return Err(Error::Config(format!(
                "max index {} must not exceed {DEFAULT_MAX_INDEX}",
                self.max_index
            )));
        }
        check_range("response", self.response, DEFAULT_RESPONSE_RANGE)?;
        check_range("attendance", self.attendance, DEFAULT_ATTENDANCE_RANGE)?;
        Ok(())
    }
}

// Configured ranges may only narrow the built-in ones.
fn check_range(field: &str, range: ScoreRange, outer: ScoreRange) -> Result<()> {
    if range.min > range.max {
        return Err(Error::Config(format!(
            "{field} range is inverted ({} > {})",
            range.min, range.max
        )));
    }
    if !outer.contains(range.min) || !outer.contains(range.max) {
        return Err(Error::Config(format!(
            "{field} range {}..={} must lie within {}..={}",
            range.min, range.max, outer.min, outer.max
        )));
    }
    Ok(())
}

/// Typed configuration for classbook.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Config {
    pub limits: FieldLimits,
}

impl Config {
    /// Load from the process environment, reading `.env` first if present.
    pub fn load() -> Result<Self> {
        load_dotenv_if_present(Path::new(".env"));
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env_u32 = |key: &str| lookup(key).and_then(|s| s.trim().parse::<u32>().ok());

        // Index values must stay representable as i32.
        let max_index = env_u32("CLASSBOOK_MAX_INDEX")
            .unwrap_or(DEFAULT_MAX_INDEX)
            .min(DEFAULT_MAX_INDEX);

        let response = ScoreRange::new(
            env_u32("CLASSBOOK_RESPONSE_MIN").unwrap_or(DEFAULT_RESPONSE_RANGE.min),
            env_u32("CLASSBOOK_RESPONSE_MAX").unwrap_or(DEFAULT_RESPONSE_RANGE.max),
        );
        let attendance = ScoreRange::new(
            env_u32("CLASSBOOK_ATTENDANCE_MIN").unwrap_or(DEFAULT_ATTENDANCE_RANGE.min),
            env_u32("CLASSBOOK_ATTENDANCE_MAX").unwrap_or(DEFAULT_ATTENDANCE_RANGE.max),
        );

        let limits = FieldLimits {
            max_index,
            response,
            attendance,
        };
        limits.validate()?;

        Ok(Self { limits })
    }
}

/// Apply `KEY=value` pairs from `path` to the process env.
///
/// Variables already set win over the file. Returns how many were applied.
fn load_dotenv_if_present(path: &Path) -> usize {
    let Ok(contents) = fs::read_to_string(path) else {
        return 0;
    };

    let mut applied = 0;
    for (lineno, raw) in contents.lines().enumerate() {
        let entry = raw.trim();
        if entry.is_empty() || entry.starts_with('#') {
            continue;
        }

        let Some((key, value)) = parse_dotenv_entry(entry) else {
            tracing::warn!(
                file = %path.display(),
                line = lineno + 1,
                "skipping malformed .env line"
            );
            continue;
        };

        if env::var_os(key).is_some() {
            tracing::debug!(key, "env already set, ignoring .env value");
            continue;
        }

        env::set_var(key, value);
        applied += 1;
    }
    applied
}

/// Split `KEY=value`, dropping one layer of matching quotes around the value.
fn parse_dotenv_entry(entry: &str) -> Option<(&str, &str)> {
    let (key, value) = entry.split_once('=')?;
    let key = key.trim();
    if key.is_empty() {
        return None;
    }

    let value = value.trim();
    let unquoted = ['"', '\'']
        .into_iter()
        .find_map(|q| value.strip_prefix(q).and_then(|v| v.strip_suffix(q)))
        .unwrap_or(value);
    Some((key, unquoted))
}
