//! # Declared Relationships
//!
//! Foreign-key declarations for the external tables, used by join-aware
//! queries. These mirror the constraints the store enforces; like the row
//! shapes, they are kept in sync by hand.
//!
//! Relationship graph:
//!
//! ```text
//! colleges 1──N college_branches N──1 branches
//!                      │
//!                      1
//!                      │
//!                      N
//!                   cutoffs
//! ```

use serde::{Deserialize, Serialize};

/// The six tables this system touches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Table {
    /// One row per user; mutated by the prediction workflow.
    Profiles,
    /// Append-only prediction records.
    UserPredictions,
    /// Reference data: institutions.
    Colleges,
    /// Reference data: degree branches.
    Branches,
    /// Reference data: per-institution branch offerings.
    CollegeBranches,
    /// Reference data: historical admission cutoffs.
    Cutoffs,
}

/// A declared foreign-key relationship between two tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForeignKey {
    /// Constraint name as declared in the store.
    pub constraint: &'static str,
    /// Referencing column on the owning table.
    pub column: &'static str,
    /// Referenced table.
    pub references: Table,
    /// Referenced column.
    pub referenced_column: &'static str,
}

impl Table {
    /// All tables in canonical order.
    pub fn all() -> &'static [Table] {
        &[
            Self::Profiles,
            Self::UserPredictions,
            Self::Colleges,
            Self::Branches,
            Self::CollegeBranches,
            Self::Cutoffs,
        ]
    }

    /// The table name as used in store operations.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Profiles => "profiles",
            Self::UserPredictions => "user_predictions",
            Self::Colleges => "colleges",
            Self::Branches => "branches",
            Self::CollegeBranches => "college_branches",
            Self::Cutoffs => "cutoffs",
        }
    }

    /// Whether this system ever writes to the table.
    ///
    /// Reference data is read-only from our side; `user_predictions` is
    /// append-only; `profiles` is update-only (rows are created at signup
    /// by the store itself).
    pub fn is_read_only(&self) -> bool {
        matches!(self, Self::Colleges | Self::Branches | Self::CollegeBranches | Self::Cutoffs)
    }

    /// Declared outbound foreign keys for this table.
    pub fn relationships(&self) -> &'static [ForeignKey] {
        match self {
            Self::CollegeBranches => &[
                ForeignKey {
                    constraint: "college_branches_college_id_fkey",
                    column: "college_id",
                    references: Table::Colleges,
                    referenced_column: "id",
                },
                ForeignKey {
                    constraint: "college_branches_branch_id_fkey",
                    column: "branch_id",
                    references: Table::Branches,
                    referenced_column: "id",
                },
            ],
            Self::Cutoffs => &[ForeignKey {
                constraint: "cutoffs_college_branch_id_fkey",
                column: "college_branch_id",
                references: Table::CollegeBranches,
                referenced_column: "id",
            }],
            _ => &[],
        }
    }
}

impl std::fmt::Display for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writable_tables() {
        assert!(!Table::Profiles.is_read_only());
        assert!(!Table::UserPredictions.is_read_only());
        assert!(Table::Cutoffs.is_read_only());
    }

    #[test]
    fn test_relationship_graph() {
        let fks = Table::CollegeBranches.relationships();
        assert_eq!(fks.len(), 2);
        assert_eq!(fks[0].references, Table::Colleges);
        assert_eq!(fks[1].references, Table::Branches);

        let fks = Table::Cutoffs.relationships();
        assert_eq!(fks.len(), 1);
        assert_eq!(fks[0].references, Table::CollegeBranches);

        assert!(Table::Profiles.relationships().is_empty());
        assert!(Table::UserPredictions.relationships().is_empty());
    }

    #[test]
    fn test_names_match_store() {
        assert_eq!(Table::UserPredictions.name(), "user_predictions");
        assert_eq!(Table::CollegeBranches.name(), "college_branches");
    }
}
