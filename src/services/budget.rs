//! Budget service
//!
//! Sets, updates and reads the monthly budget kept on the first line of the
//! record store.

use tracing::info;

use crate::audit::{AuditEntry, EntityType};
use crate::error::{TrackerError, TrackerResult};
use crate::storage::records::{decode_budget, encode_budget};
use crate::storage::Storage;

/// Service for budget management
pub struct BudgetService<'a> {
    storage: &'a Storage,
}

impl<'a> BudgetService<'a> {
    /// Create a new budget service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Start over with a new budget
    ///
    /// Overwrites the store with only the budget line; any recorded expenses
    /// are discarded.
    pub fn set_budget(&self, budget: f64) -> TrackerResult<()> {
        validate_budget(budget)?;

        self.storage.records().overwrite(&[encode_budget(budget)])?;
        info!(budget, "budget set");

        self.storage.log(&AuditEntry::set(EntityType::Budget, &budget))
    }

    /// Replace the budget while keeping every recorded expense in place
    pub fn update_budget(&self, budget: f64) -> TrackerResult<()> {
        validate_budget(budget)?;

        let records = self.storage.records();
        if !records.exists() {
            return Err(TrackerError::BudgetNotSet);
        }

        let mut lines = records.read_lines()?;
        let previous = lines.first().and_then(|line| decode_budget(line));

        match lines.first_mut() {
            Some(first) => *first = encode_budget(budget),
            None => lines.push(encode_budget(budget)),
        }

        records.overwrite(&lines)?;
        info!(budget, previous = ?previous, kept = lines.len() - 1, "budget updated");

        self.storage
            .log(&AuditEntry::update(EntityType::Budget, &previous, &Some(budget)))
    }

    /// Check if the store exists and starts with a readable budget line
    pub fn is_budget_set(&self) -> bool {
        self.budget().is_ok()
    }

    /// Get the current budget
    pub fn budget(&self) -> TrackerResult<f64> {
        let records = self.storage.records();
        if !records.exists() {
            return Err(TrackerError::BudgetNotSet);
        }

        records
            .read_lines()?
            .first()
            .and_then(|line| decode_budget(line))
            .ok_or(TrackerError::BudgetNotSet)
    }
}

fn validate_budget(budget: f64) -> TrackerResult<()> {
    if !budget.is_finite() || budget <= 0.0 {
        return Err(TrackerError::Validation(format!(
            "Budget must be a positive number (got {})",
            budget
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::{AuditLogger, Operation};
    use crate::storage::MemoryStore;
    use tempfile::TempDir;

    #[test]
    fn test_unset_budget() {
        let storage = Storage::in_memory();
        let service = BudgetService::new(&storage);

        assert!(!service.is_budget_set());
        assert!(matches!(service.budget(), Err(TrackerError::BudgetNotSet)));
    }

    #[test]
    fn test_set_budget_round_trip() {
        let storage = Storage::in_memory();
        let service = BudgetService::new(&storage);

        service.set_budget(512.75).unwrap();

        assert!(service.is_budget_set());
        assert_eq!(service.budget().unwrap(), 512.75);
    }

    #[test]
    fn test_set_budget_discards_expenses() {
        let storage = Storage::with_backend(MemoryStore::with_lines([
            "Budget, 100",
            "tea, 2, Food",
        ]));
        let service = BudgetService::new(&storage);

        service.set_budget(200.0).unwrap();

        assert_eq!(storage.records().read_lines().unwrap(), vec!["Budget, 200"]);
    }

    #[test]
    fn test_set_budget_rejects_invalid_values() {
        let storage = Storage::in_memory();
        let service = BudgetService::new(&storage);

        for value in [0.0, -10.0, f64::NAN, f64::INFINITY] {
            let err = service.set_budget(value).unwrap_err();
            assert!(err.is_validation());
        }
        // Nothing written on failure
        assert!(!storage.records().exists());
    }

    #[test]
    fn test_update_budget_keeps_expenses_in_order() {
        let storage = Storage::with_backend(MemoryStore::with_lines([
            "Budget, 100",
            "tea, 2, Food",
            "rent, 300, Home",
            "taxi, 15, Going-out",
        ]));
        let service = BudgetService::new(&storage);

        service.update_budget(750.0).unwrap();

        assert_eq!(
            storage.records().read_lines().unwrap(),
            vec!["Budget, 750", "tea, 2, Food", "rent, 300, Home", "taxi, 15, Going-out"]
        );
        assert_eq!(service.budget().unwrap(), 750.0);
    }

    #[test]
    fn test_update_budget_requires_store() {
        let storage = Storage::in_memory();
        let service = BudgetService::new(&storage);

        assert!(matches!(
            service.update_budget(10.0),
            Err(TrackerError::BudgetNotSet)
        ));
        assert!(!storage.records().exists());
    }

    #[test]
    fn test_mutations_are_audited() {
        let temp_dir = TempDir::new().unwrap();
        let logger = AuditLogger::new(temp_dir.path().join("audit.log"));
        let storage = Storage::in_memory().with_audit(logger.clone());
        let service = BudgetService::new(&storage);

        service.set_budget(100.0).unwrap();
        service.update_budget(150.0).unwrap();

        let entries = logger.read_all().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].operation, Operation::Set);
        assert_eq!(entries[1].operation, Operation::Update);
        assert_eq!(entries[1].before, Some(serde_json::json!(100.0)));
        assert_eq!(entries[1].after, Some(serde_json::json!(150.0)));
    }
}
