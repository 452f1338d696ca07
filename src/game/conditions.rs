//! Condition registry — named boolean scenario flags.

use crate::error::ConsoleError;
use crate::game::catalog::ConditionDef;
use crate::game::console::Console;

impl Console {
    /// Set a condition flag. Read-modify-write of the whole record.
    pub fn set_condition(&mut self, name: &str, value: bool) {
        self.store.update(|s| {
            s.conditions.insert(name.to_string(), value);
        });
        tracing::debug!(name, value, "condition set");
    }

    /// Game-master toggle: only conditions declared in the catalog, and only
    /// once the game is running.
    pub fn set_declared_condition(&mut self, name: &str, value: bool) -> Result<(), ConsoleError> {
        self.require_started()?;
        if !self.catalogs.declares_condition(name) {
            return Err(ConsoleError::UnknownCondition(name.to_string()));
        }
        self.set_condition(name, value);
        Ok(())
    }

    /// Give every declared condition not yet in the state the value `false`.
    /// Existing values are kept.
    pub fn seed_conditions(&mut self) {
        let names: Vec<String> = self.catalogs.conditions.iter().map(|c| c.name.clone()).collect();
        if names.is_empty() {
            return;
        }
        let added = self.store.update(|s| {
            let mut added = 0usize;
            for name in names {
                s.conditions.entry(name).or_insert_with(|| {
                    added += 1;
                    false
                });
            }
            added
        });
        if added > 0 {
            tracing::debug!(added, "declared conditions seeded");
        }
    }

    /// Declared conditions with their current values, in catalog order.
    pub fn condition_rows(&self) -> Vec<(ConditionDef, bool)> {
        let state = self.store.load();
        self.catalogs
            .conditions
            .iter()
            .map(|c| (c.clone(), state.condition(&c.name).unwrap_or(false)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::error::ConsoleError;
    use crate::game::catalog::CatalogKind;
    use crate::game::console::Console;

    const CONDITIONS: &str = r#"[
        {"name":"murder_weapon_found","description":"The knife was found"},
        {"name":"door_open","description":"The cellar door is open"}
    ]"#;

    #[test]
    fn loading_catalog_seeds_false() {
        let mut c = Console::for_tests();
        c.load_catalog(CatalogKind::Conditions, CONDITIONS).unwrap();
        let state = c.state();
        assert_eq!(state.condition("murder_weapon_found"), Some(false));
        assert_eq!(state.condition("door_open"), Some(false));
    }

    #[test]
    fn seeding_keeps_existing_values() {
        let mut c = Console::for_tests();
        c.set_condition("door_open", true);
        c.load_catalog(CatalogKind::Conditions, CONDITIONS).unwrap();
        assert_eq!(c.state().condition("door_open"), Some(true));
        assert_eq!(c.state().condition("murder_weapon_found"), Some(false));
    }

    #[test]
    fn set_condition_survives_reload() {
        let mut c = Console::for_tests();
        c.load_catalog(CatalogKind::Conditions, CONDITIONS).unwrap();
        c.set_condition("murder_weapon_found", true);
        let reloaded = c.store().load();
        assert_eq!(reloaded.condition("murder_weapon_found"), Some(true));
    }

    #[test]
    fn declared_toggle_requires_started_game_and_known_name() {
        let mut c = Console::for_tests();
        c.load_catalog(CatalogKind::Conditions, CONDITIONS).unwrap();
        assert!(matches!(
            c.set_declared_condition("door_open", true),
            Err(ConsoleError::NotStarted)
        ));
        c.start_game();
        assert!(matches!(
            c.set_declared_condition("secret_passage", true),
            Err(ConsoleError::UnknownCondition(_))
        ));
        c.set_declared_condition("door_open", true).unwrap();
        let rows = c.condition_rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].0.name, "door_open");
        assert!(rows[1].1);
    }
}
