//! JSON configuration for a [`WorkRegimen`].
//!
//! ```json
//! {
//!   "holidays": ["2015-01-01"],
//!   "work_hours": [{ "start": "09:00:00", "end": "17:00:00" }]
//! }
//! ```
//!
//! Both fields are optional: no holidays, and the 09:00-17:00 office day.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{DogdaysError, Result};
use crate::regimen::{BusinessDayRegimen, FixedHoursRegimen, WorkRegimen};
use crate::shift::ShiftSegment;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegimenConfig {
    #[serde(default)]
    pub holidays: BTreeSet<NaiveDate>,
    #[serde(default = "default_work_hours")]
    pub work_hours: Vec<ShiftSegment>,
}

fn default_work_hours() -> Vec<ShiftSegment> {
    vec![ShiftSegment::office_hours()]
}

impl Default for RegimenConfig {
    fn default() -> Self {
        Self {
            holidays: BTreeSet::new(),
            work_hours: default_work_hours(),
        }
    }
}

impl RegimenConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| DogdaysError::InvalidConfig(e.to_string()))
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| DogdaysError::InvalidConfig(e.to_string()))
    }

    pub fn into_regimen(self) -> WorkRegimen {
        WorkRegimen::from_parts(
            BusinessDayRegimen::with_holidays(self.holidays),
            FixedHoursRegimen::with_segments(self.work_hours),
        )
    }
}

impl From<RegimenConfig> for WorkRegimen {
    fn from(config: RegimenConfig) -> Self {
        config.into_regimen()
    }
}
