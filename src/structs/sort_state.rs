use std::cmp::Ordering;
use icu_collator::{Collator, CollatorOptions, Strength};
use crate::enums::sort_field::{SortDirection, SortField};
use crate::structs::analysis_result::AnalysisResult;

thread_local! {
    /// Root collation at secondary strength: accents count, case does not.
    static FILENAME_COLLATOR: Option<Collator> = {
        let mut options = CollatorOptions::new();
        options.strength = Some(Strength::Secondary);
        Collator::try_new(&Default::default(), options).ok()
    };
}

fn compare_filenames(a: &str, b: &str) -> Ordering {
    FILENAME_COLLATOR.with(|collator| match collator {
        Some(collator) => collator.compare(a, b),
        None => a.to_lowercase().cmp(&b.to_lowercase()),
    })
}

/// Column and direction of the results table; newest upload first by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    pub field: SortField,
    pub direction: SortDirection,
}

impl Default for SortState {
    fn default() -> Self {
        Self {
            field: SortField::UploadDate,
            direction: SortDirection::Descending,
        }
    }
}

impl SortState {
    pub const fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// Same column flips the direction, a new column starts descending.
    pub fn toggle(&mut self, field: SortField) {
        if field == self.field {
            self.direction = self.direction.flipped();
        } else {
            self.field = field;
            self.direction = SortDirection::Descending;
        }
    }

    pub fn compare(&self, a: &AnalysisResult, b: &AnalysisResult) -> Ordering {
        let ascending = match self.field {
            SortField::UploadDate => a.upload_date.cmp(&b.upload_date),
            SortField::RiskScore => a.risk_score.cmp(&b.risk_score),
            SortField::Filename => compare_filenames(&a.filename, &b.filename),
        };

        match self.direction {
            SortDirection::Ascending => ascending,
            SortDirection::Descending => ascending.reverse(),
        }
    }

    pub fn describe(&self) -> String {
        format!("{} {}", self.field.column_title(), self.direction.arrow())
    }
}
