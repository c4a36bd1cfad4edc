//! Body regions and their static rule tables.
//!
//! Each region module exports one `SPEC`: adapter table, differential
//! registry, triage rules, weighted scoring rules, and default tests. The
//! medical content in those tables is hand-authored domain data; the engine
//! in `crate::engine` is the only behavior.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::engine::rules::RegionSpec;
use crate::error::{EngineError, Result};

pub mod ankle;
pub mod cervical;
pub mod elbow;
pub mod hip;
pub mod knee;
pub mod lumbar;
pub mod shoulder;
pub mod thoracic;
pub mod wrist;

/// Supported body regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Region {
    Ankle,
    Knee,
    Hip,
    Elbow,
    Shoulder,
    Wrist,
    CervicalSpine,
    ThoracicSpine,
    LumbarSpine,
}

/// All regions, in presentation order.
pub const ALL_REGIONS: [Region; 9] = [
    Region::Ankle,
    Region::Knee,
    Region::Hip,
    Region::Elbow,
    Region::Shoulder,
    Region::Wrist,
    Region::CervicalSpine,
    Region::ThoracicSpine,
    Region::LumbarSpine,
];

static BY_NAME: Lazy<HashMap<&'static str, Region>> = Lazy::new(|| {
    ALL_REGIONS.iter().map(|r| (r.name(), *r)).collect()
});

impl Region {
    /// Canonical identifier used in answer namespaces and persisted output.
    pub fn name(&self) -> &'static str {
        self.spec().name
    }

    /// Clinician-facing label.
    pub fn label(&self) -> &'static str {
        self.spec().label
    }

    /// Look up a region by its canonical identifier.
    pub fn from_name(name: &str) -> Result<Region> {
        BY_NAME
            .get(name)
            .copied()
            .ok_or_else(|| EngineError::UnknownRegion(name.to_string()))
    }

    /// The region's static rule tables.
    pub fn spec(&self) -> &'static RegionSpec {
        match self {
            Region::Ankle => &ankle::SPEC,
            Region::Knee => &knee::SPEC,
            Region::Hip => &hip::SPEC,
            Region::Elbow => &elbow::SPEC,
            Region::Shoulder => &shoulder::SPEC,
            Region::Wrist => &wrist::SPEC,
            Region::CervicalSpine => &cervical::SPEC,
            Region::ThoracicSpine => &thoracic::SPEC,
            Region::LumbarSpine => &lumbar::SPEC,
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
