//! Employee text generator - a companion to the story that introduces the
//! player's role, drawn from the `employee` auxiliary table.

use rand::Rng;
use story_content::{AuxiliaryTable, ContentStore};

/// Name of the auxiliary table holding job titles and departments.
pub const EMPLOYEE_TABLE: &str = "employee";

/// Chance that a new day starts with a reorganisation.
pub const REORG_PROBABILITY: f64 = 0.1;

const JOB_TITLE_COLUMN: &str = "job_title";
const DEPARTMENT_COLUMN: &str = "department";

/// The player's current job.
#[derive(Debug, Clone, PartialEq)]
pub struct Employee<'a> {
    roster: &'a AuxiliaryTable,
    pub job_title: String,
    pub department: String,
}

impl<'a> Employee<'a> {
    /// Seed from the first row of the roster. `None` if either cell of that
    /// row is blank.
    pub fn from_roster(roster: &'a AuxiliaryTable) -> Option<Self> {
        Some(Self {
            roster,
            job_title: roster.cell(0, JOB_TITLE_COLUMN)?.to_string(),
            department: roster.cell(0, DEPARTMENT_COLUMN)?.to_string(),
        })
    }

    /// Seed from the store's `employee` table, if it has one.
    pub fn from_store(store: &'a ContentStore) -> Option<Self> {
        store.auxiliary(EMPLOYEE_TABLE).and_then(Self::from_roster)
    }

    /// Re-draw title and department independently.
    pub fn reorg<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if let Some(title) = self.roster.random_pick(JOB_TITLE_COLUMN, rng) {
            self.job_title = title.to_string();
        }
        if let Some(department) = self.roster.random_pick(DEPARTMENT_COLUMN, rng) {
            self.department = department.to_string();
        }
    }

    /// Reorganise with probability [`REORG_PROBABILITY`]. Returns whether it happened.
    pub fn maybe_reorg<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        let reorg_now = rng.random_bool(REORG_PROBABILITY);
        if reorg_now {
            tracing::debug!("reorg");
            self.reorg(rng);
        }
        reorg_now
    }

    pub fn introduction(&self) -> String {
        format!(
            "Your day begins as a {} in the {} department.",
            self.job_title, self.department
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use story_content::{Cell, EdgeRecord, EdgeSelector, NodeRecord, Row, Table, TextSnippet};

    fn roster() -> AuxiliaryTable {
        AuxiliaryTable::from_columns([
            (
                "job_title",
                vec![
                    "Data Scientist".to_string(),
                    "Analytics Engineer".to_string(),
                    "ML Engineer".to_string(),
                ],
            ),
            (
                "department",
                vec!["Marketing".to_string(), "Finance".to_string()],
            ),
        ])
    }

    #[test]
    fn test_seeded_from_first_row() {
        let roster = roster();
        let employee = Employee::from_roster(&roster).unwrap();

        assert_eq!(employee.job_title, "Data Scientist");
        assert_eq!(employee.department, "Marketing");
        assert_eq!(
            employee.introduction(),
            "Your day begins as a Data Scientist in the Marketing department."
        );
    }

    #[test]
    fn test_from_store() {
        let store = ContentStore::from_records(
            vec![NodeRecord::new("start_game", EdgeSelector::Start)],
            vec![EdgeRecord::new("start_game", "welcome")],
            vec![TextSnippet::new("pbn", "Press")],
        );
        assert!(Employee::from_store(&store).is_none());

        let store = store.with_auxiliary(EMPLOYEE_TABLE, roster());
        assert!(Employee::from_store(&store).is_some());
    }

    #[test]
    fn test_title_and_department_come_from_the_same_row() {
        let rows = [("Data Scientist", ""), ("ML Engineer", "Finance")]
            .iter()
            .map(|(title, dept)| {
                let mut row = Row::new();
                row.insert("job_title".into(), Cell::from(*title));
                row.insert("department".into(), Cell::from(*dept));
                row
            })
            .collect();
        let roster = AuxiliaryTable::from_table(&Table::from_rows(rows));

        assert!(Employee::from_roster(&roster).is_none());
    }

    #[test]
    fn test_missing_column_yields_none() {
        let roster = AuxiliaryTable::from_columns([("job_title", vec!["Analyst".to_string()])]);
        assert!(Employee::from_roster(&roster).is_none());
    }

    #[test]
    fn test_reorg_draws_from_roster() {
        let roster = roster();
        let mut employee = Employee::from_roster(&roster).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(3);

        for _ in 0..50 {
            employee.reorg(&mut rng);
            assert!(roster.column("job_title").contains(&employee.job_title));
            assert!(roster.column("department").contains(&employee.department));
        }
    }

    #[test]
    fn test_reorg_is_rare() {
        let roster = roster();
        let mut employee = Employee::from_roster(&roster).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(11);

        let trials = 1000;
        let reorgs = (0..trials).filter(|_| employee.maybe_reorg(&mut rng)).count();

        assert!(reorgs > 0);
        assert!(reorgs < trials / 5, "{reorgs} reorgs in {trials} days");
    }
}
