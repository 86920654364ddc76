//! NFP Status Tool
//!
//! Provides runtime status information about the NFP service.

use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;
use sysinfo::{Pid, ProcessesToUpdate, System};

use crate::build_info::BuildInfo;

/// Panel generation instructions for AI assistants
pub const PANEL_INSTRUCTIONS: &str = r#"
# NFP Panel Generation Instructions

This guide explains how to produce a dual-column Nutrition Facts panel
(per serving and per container) with the NFP tools.

## Overview

A panel needs:
1. **Product metadata** - name, serving size label (e.g. "2/3 cup (124g)") and servings per container
2. **Per-serving amounts** - one non-negative number for every nutrient id returned by `list_nutrients`

Per-container amounts are always derived as `serving amount × servings per container`.
Never pass per-container values yourself.

---

## Nutrient Ids and Units

Call `list_nutrients` to get the ids, units and Daily Values. Amounts use these units:

| Id | Unit |
|----|------|
| calories | (none) |
| total_fat, saturated_fat, trans_fat | g |
| cholesterol, sodium | mg |
| total_carbohydrate, dietary_fiber, total_sugars, added_sugars, protein | g |
| vitamin_d | mcg |
| calcium, iron, potassium | mg |

Unknown ids are rejected. A missing, negative or non-numeric amount fails the whole request.

---

## Rounding Rules Applied

Amounts are rounded before display and before %DV is computed:

- **Calories**: <5 → 0; ≤50 → nearest 5; above → nearest 10
- **Fats**: <0.5 → 0; <5 → nearest 0.5; otherwise nearest 1
- **Cholesterol**: <2 → 0; 2-5 → rounded up to whole mg; above → nearest 5, never below 10
- **Sodium / Potassium**: <5 → 0; ≤140 → nearest 5; above → nearest 10
- **Carbohydrates, sugars, fiber, protein**: <0.5 → 0; otherwise nearest 1
- **Vitamins and minerals**: nearest 1

%DV = round(rounded amount / Daily Value × 100). Trans Fat and Total Sugars never show %DV.

---

## Workflow

1. Call `list_nutrients` if unsure about ids
2. Call `generate_nutrition_panel` with `product_name`, `serving_size`, `servings_per_container` and `amounts`
3. Set `export` to `"png"` or `"pdf"` to write a file to the output directory
4. Use `round_nutrient` to check a single value without building a panel

## Example

```json
{
  "product_name": "My Product",
  "serving_size": "2/3 cup (124g)",
  "servings_per_container": 3,
  "amounts": {
    "calories": 170, "total_fat": 6, "saturated_fat": 3.5, "trans_fat": 0,
    "cholesterol": 15, "sodium": 110, "total_carbohydrate": 24,
    "dietary_fiber": 1, "total_sugars": 18, "added_sugars": 15, "protein": 6,
    "vitamin_d": 0, "calcium": 260, "iron": 0, "potassium": 240
  },
  "export": "png"
}
```
"#;

/// Status information returned by the status tool
#[derive(Debug, Clone, Serialize)]
pub struct NfpStatus {
    /// Build information
    pub build_number: u64,
    pub build_timestamp: &'static str,
    pub version: &'static str,

    /// Export information
    pub output_dir: String,
    pub output_dir_exists: bool,

    /// Process information
    pub uptime_seconds: u64,
    pub process_id: u32,
    pub memory_usage_bytes: u64,
}

/// Tracks service start time and export location
pub struct StatusTracker {
    start_time: Instant,
    output_dir: PathBuf,
}

impl StatusTracker {
    /// Create a new status tracker
    pub fn new(output_dir: PathBuf) -> Self {
        Self {
            start_time: Instant::now(),
            output_dir,
        }
    }

    pub fn output_dir(&self) -> &PathBuf {
        &self.output_dir
    }

    /// Get the current status
    pub fn get_status(&self) -> NfpStatus {
        let build_info = BuildInfo::current();

        let pid = std::process::id();
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::Some(&[Pid::from_u32(pid)]));

        let memory_usage_bytes = sys
            .process(Pid::from_u32(pid))
            .map(|p| p.memory())
            .unwrap_or(0);

        NfpStatus {
            build_number: build_info.build_number,
            build_timestamp: build_info.build_timestamp,
            version: build_info.version,
            output_dir: self.output_dir.display().to_string(),
            output_dir_exists: self.output_dir.is_dir(),
            uptime_seconds: self.start_time.elapsed().as_secs(),
            process_id: pid,
            memory_usage_bytes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_reports_process() {
        let tracker = StatusTracker::new(PathBuf::from("/nonexistent/nfp-output"));
        let status = tracker.get_status();

        assert_eq!(status.process_id, std::process::id());
        assert_eq!(status.version, crate::build_info::VERSION);
        assert_eq!(status.output_dir, "/nonexistent/nfp-output");
        assert!(!status.output_dir_exists);
    }

    #[test]
    fn test_instructions_cover_tools() {
        for tool in ["list_nutrients", "generate_nutrition_panel", "round_nutrient"] {
            assert!(PANEL_INSTRUCTIONS.contains(tool), "missing {}", tool);
        }
    }
}
