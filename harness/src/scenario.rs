//! Scenario files: optional TOML overrides for demo inputs.
//!
//! ```toml
//! [binary_search]
//! sequence = [1, 2, 3, 4, 5, 6]
//! targets = [3, 1, 6, 7]
//!
//! [selection_sort]
//! input = [4, 1, 10, 3, 2, 5, 0]
//! ```
//!
//! A missing section keeps that demo's built-in input. Unknown keys are
//! rejected so typos do not silently fall back to defaults.

use std::path::Path;

use serde::Deserialize;

use crate::contract::DemoV1;
use crate::demos::binary_search::BinarySearchDemo;
use crate::demos::selection_sort::SelectionSortDemo;

/// Inputs for [`BinarySearchDemo`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BinarySearchScenario {
    pub sequence: Vec<i64>,
    pub targets: Vec<i64>,
}

/// Inputs for [`SelectionSortDemo`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SelectionSortScenario {
    pub input: Vec<i64>,
}

/// A parsed scenario file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScenarioV1 {
    pub binary_search: Option<BinarySearchScenario>,
    pub selection_sort: Option<SelectionSortScenario>,
}

/// Error loading a scenario file.
#[derive(Debug)]
pub enum ScenarioError {
    /// The file could not be read.
    Read {
        path: String,
        source: std::io::Error,
    },
    /// The contents are not a valid scenario.
    Parse { detail: String },
}

impl std::fmt::Display for ScenarioError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Read { path, source } => write!(f, "cannot read scenario {path}: {source}"),
            Self::Parse { detail } => write!(f, "invalid scenario: {detail}"),
        }
    }
}

impl std::error::Error for ScenarioError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Read { source, .. } => Some(source),
            Self::Parse { .. } => None,
        }
    }
}

/// Parse scenario TOML text.
///
/// # Errors
///
/// Returns [`ScenarioError::Parse`] on malformed TOML, wrong types, or
/// unknown keys.
pub fn parse_scenario(text: &str) -> Result<ScenarioV1, ScenarioError> {
    toml::from_str(text).map_err(|e| ScenarioError::Parse {
        detail: e.to_string(),
    })
}

/// Read and parse a scenario file.
///
/// # Errors
///
/// Returns [`ScenarioError::Read`] if the file cannot be read, otherwise
/// whatever [`parse_scenario`] returns.
pub fn load_scenario(path: &Path) -> Result<ScenarioV1, ScenarioError> {
    let text = std::fs::read_to_string(path).map_err(|source| ScenarioError::Read {
        path: path.display().to_string(),
        source,
    })?;
    tracing::debug!(path = %path.display(), "loaded scenario file");
    parse_scenario(&text)
}

/// Which demos to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoSelection {
    All,
    BinarySearch,
    SelectionSort,
}

/// Build the selected demos in canonical order (search first, then sort),
/// taking inputs from `scenario` where present.
#[must_use]
pub fn builtin_demos(scenario: &ScenarioV1, selection: DemoSelection) -> Vec<Box<dyn DemoV1>> {
    let mut demos: Vec<Box<dyn DemoV1>> = Vec::new();

    if matches!(selection, DemoSelection::All | DemoSelection::BinarySearch) {
        let demo = match &scenario.binary_search {
            Some(s) => BinarySearchDemo {
                sequence: s.sequence.clone(),
                targets: s.targets.clone(),
            },
            None => BinarySearchDemo::default(),
        };
        demos.push(Box::new(demo));
    }

    if matches!(selection, DemoSelection::All | DemoSelection::SelectionSort) {
        let demo = match &scenario.selection_sort {
            Some(s) => SelectionSortDemo {
                input: s.input.clone(),
            },
            None => SelectionSortDemo::default(),
        };
        demos.push(Box::new(demo));
    }

    demos
}
