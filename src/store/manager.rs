use std::fmt;

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use uuid::Uuid;

use crate::error::{LumenError, Result};
use crate::models::{DrinkRecord, NewDrink};

/// Which drinks feed the analyzer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnalysisScope {
    /// Drinks whose timestamp falls on the current local calendar day.
    #[default]
    Today,
    /// Every logged drink.
    AllTime,
}

/// Mutation notification delivered to subscribers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    Added(String),
    Removed(String),
}

type Listener = Box<dyn FnMut(&StoreEvent, &[DrinkRecord]) -> Result<()>>;

/// In-memory drink log, kept in chronological order.
pub struct DrinkStore {
    drinks: Vec<DrinkRecord>,
    listeners: Vec<Listener>,
}

impl fmt::Debug for DrinkStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DrinkStore")
            .field("drinks", &self.drinks)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl DrinkStore {
    /// Create a store from previously loaded records.
    pub fn new(mut drinks: Vec<DrinkRecord>) -> Self {
        drinks.sort_by_key(|d| d.occurred_at);
        Self {
            drinks,
            listeners: Vec::new(),
        }
    }

    /// Register a listener called after every add or remove with the
    /// updated log. A listener error undoes the change and is returned to
    /// the caller.
    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: FnMut(&StoreEvent, &[DrinkRecord]) -> Result<()> + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    /// Log a drink under a freshly generated id.
    pub fn add(&mut self, drink: NewDrink) -> Result<&DrinkRecord> {
        let record = DrinkRecord::new(Uuid::new_v4().to_string(), drink)?;
        let id = record.id.clone();

        // Insert after any drink with the same timestamp.
        let pos = self
            .drinks
            .partition_point(|d| d.occurred_at <= record.occurred_at);
        tracing::debug!(
            id = %id,
            category = %record.drink_category,
            sugar_grams = record.sugar_grams,
            "drink added"
        );
        self.drinks.insert(pos, record);

        if let Err(e) = self.notify(&StoreEvent::Added(id)) {
            self.drinks.remove(pos);
            return Err(e);
        }
        Ok(&self.drinks[pos])
    }

    /// Delete a drink by id.
    pub fn remove(&mut self, id: &str) -> Result<DrinkRecord> {
        let pos = self
            .drinks
            .iter()
            .position(|d| d.id == id)
            .ok_or_else(|| LumenError::DrinkNotFound(id.to_string()))?;

        let removed = self.drinks.remove(pos);
        tracing::debug!(id = %id, "drink removed");

        if let Err(e) = self.notify(&StoreEvent::Removed(removed.id.clone())) {
            self.drinks.insert(pos, removed);
            return Err(e);
        }
        Ok(removed)
    }

    pub fn get(&self, id: &str) -> Option<&DrinkRecord> {
        self.drinks.iter().find(|d| d.id == id)
    }

    pub fn all(&self) -> &[DrinkRecord] {
        &self.drinks
    }

    /// Drinks whose timestamp falls on `day` in timezone `tz`.
    pub fn on_day<Tz: TimeZone>(&self, day: NaiveDate, tz: &Tz) -> Vec<DrinkRecord> {
        self.drinks
            .iter()
            .filter(|d| d.occurred_at.with_timezone(tz).date_naive() == day)
            .cloned()
            .collect()
    }

    /// Owned copy of the drinks selected by `scope` as of `now`.
    pub fn snapshot<Tz: TimeZone>(
        &self,
        scope: AnalysisScope,
        now: &DateTime<Tz>,
    ) -> Vec<DrinkRecord> {
        match scope {
            AnalysisScope::Today => self.on_day(now.date_naive(), &now.timezone()),
            AnalysisScope::AllTime => self.drinks.clone(),
        }
    }

    /// Timestamp of the most recent drink.
    pub fn last_logged_at(&self) -> Option<DateTime<Utc>> {
        self.drinks.iter().map(|d| d.occurred_at).max()
    }

    /// Consume the store, returning records for persistence.
    pub fn into_drinks(self) -> Vec<DrinkRecord> {
        self.drinks
    }

    pub fn len(&self) -> usize {
        self.drinks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drinks.is_empty()
    }

    fn notify(&mut self, event: &StoreEvent) -> Result<()> {
        for listener in self.listeners.iter_mut() {
            listener(event, &self.drinks)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DrinkCategory;
    use chrono::Datelike;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn at(day: u32, hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 5, day, hour, 0, 0).unwrap()
    }

    fn soda(when: DateTime<Utc>) -> NewDrink {
        NewDrink::from_preset(DrinkCategory::Soda, when).unwrap()
    }

    #[test]
    fn test_add_assigns_unique_ids() {
        let mut store = DrinkStore::new(Vec::new());
        let a = store.add(soda(at(1, 8))).unwrap().id.clone();
        let b = store.add(soda(at(1, 9))).unwrap().id.clone();
        assert_ne!(a, b);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_records_kept_chronological() {
        let mut store = DrinkStore::new(Vec::new());
        store.add(soda(at(3, 8))).unwrap();
        store.add(soda(at(1, 8))).unwrap();
        store.add(soda(at(2, 8))).unwrap();

        let days: Vec<u32> = store.all().iter().map(|d| d.occurred_at.day()).collect();
        assert_eq!(days, vec![1, 2, 3]);
    }

    #[test]
    fn test_remove_unknown_id() {
        let mut store = DrinkStore::new(Vec::new());
        assert!(matches!(
            store.remove("missing"),
            Err(LumenError::DrinkNotFound(_))
        ));
    }

    #[test]
    fn test_today_scope_excludes_other_days() {
        let mut store = DrinkStore::new(Vec::new());
        store.add(soda(at(1, 23))).unwrap();
        store.add(soda(at(2, 0))).unwrap();
        store.add(soda(at(2, 18))).unwrap();

        let now = at(2, 20);
        assert_eq!(store.snapshot(AnalysisScope::Today, &now).len(), 2);
        assert_eq!(store.snapshot(AnalysisScope::AllTime, &now).len(), 3);
    }

    #[test]
    fn test_subscribers_see_updated_log() {
        let seen: Rc<RefCell<Vec<(StoreEvent, usize)>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);

        let mut store = DrinkStore::new(Vec::new());
        store.subscribe(move |event, drinks| {
            sink.borrow_mut().push((event.clone(), drinks.len()));
            Ok(())
        });

        let id = store.add(soda(at(1, 8))).unwrap().id.clone();
        store.remove(&id).unwrap();

        let seen = seen.borrow();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0], (StoreEvent::Added(id.clone()), 1));
        assert_eq!(seen[1], (StoreEvent::Removed(id), 0));
    }

    #[test]
    fn test_last_logged_at() {
        let mut store = DrinkStore::new(Vec::new());
        assert!(store.last_logged_at().is_none());
        store.add(soda(at(4, 10))).unwrap();
        store.add(soda(at(2, 10))).unwrap();
        assert_eq!(store.last_logged_at(), Some(at(4, 10)));
    }

    #[test]
    fn test_failed_listener_undoes_change() {
        let mut store = DrinkStore::new(Vec::new());
        let kept = store.add(soda(at(1, 8))).unwrap().id.clone();

        store.subscribe(|_, _| Err(LumenError::InvalidInput("disk full".to_string())));

        assert!(store.add(soda(at(1, 9))).is_err());
        assert_eq!(store.len(), 1);

        assert!(store.remove(&kept).is_err());
        assert!(store.get(&kept).is_some());
    }
}
