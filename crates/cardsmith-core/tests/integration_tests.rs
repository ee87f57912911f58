//! Integration tests for cardsmith-core.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use cardsmith_core::{
    application::{LibraryService, ports::KeyValueStore},
    domain::{
        CardConfig, CardInfo, LIBRARY_KEY, ProjectInfo, STATS_END, STATS_START, StatValues,
        Strategy, extract_stats, inject_stats, render_template,
    },
    error::CardsmithResult,
};

#[derive(Clone, Default)]
struct SharedStore(Arc<Mutex<HashMap<String, String>>>);

impl KeyValueStore for SharedStore {
    fn load(&self, key: &str) -> CardsmithResult<Option<String>> {
        Ok(self.0.lock().unwrap().get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> CardsmithResult<()> {
        self.0.lock().unwrap().insert(key.into(), value.into());
        Ok(())
    }

    fn remove(&self, key: &str) -> CardsmithResult<()> {
        self.0.lock().unwrap().remove(key);
        Ok(())
    }
}

fn vanilla_card() -> String {
    render_template(
        Strategy::Vanilla,
        None,
        ProjectInfo::new("Mod"),
        CardInfo::new()
            .name("Fireball")
            .rarity("Rare")
            .theme("DestructiveRed"),
    )
}

#[test]
fn test_injection_is_idempotent() {
    let values = StatValues::new()
        .with("damage", 1.5)
        .unwrap()
        .with("ammo", 2.0)
        .unwrap()
        .with("speed", 1.2)
        .unwrap();
    let config = CardConfig {
        allow_multiple: Some(false),
        ..CardConfig::default()
    };

    for strategy in Strategy::ALL {
        let code = render_template(strategy, None, ProjectInfo::new("M"), CardInfo::new());
        let once = inject_stats(&code, &values, &config);
        let twice = inject_stats(&once, &values, &config);
        assert_eq!(once, twice, "{strategy} not idempotent");
        assert_eq!(once.matches(STATS_START).count(), 1);
        assert_eq!(once.matches(STATS_END).count(), 1);
    }
}

#[test]
fn test_render_inject_extract_round_trip() {
    let values = StatValues::new().with("damage", 2.0).unwrap();
    let code = inject_stats(&vanilla_card(), &values, &CardConfig::default());

    let stats = extract_stats(&code);
    let damage = stats.iter().find(|s| s.label == "Damage").unwrap();
    assert_eq!(damage.value, 2.0);
    assert!(damage.is_multiplicative);
}

#[test]
fn test_neutral_values_are_omitted() {
    let values = StatValues::new()
        .with("damage", 1.0)
        .unwrap()
        .with("ammo", 0.0)
        .unwrap();
    let code = inject_stats(&vanilla_card(), &values, &CardConfig::default());

    let start = code.find(STATS_START).unwrap();
    let end = code.find(STATS_END).unwrap();
    let block = &code[start..end];
    assert!(!block.contains("gun.damage"));
    assert!(!block.contains("gun.ammo"));
}

#[test]
fn test_placeholder_substitution_is_total() {
    for strategy in Strategy::ALL {
        let code = render_template(strategy, None, ProjectInfo::new("X"), CardInfo::new());
        assert!(!code.contains("{{"), "{strategy} left a placeholder");
    }
}

#[test]
fn test_mod_name_is_sanitized() {
    let code = render_template(
        Strategy::Vanilla,
        None,
        ProjectInfo::new("My Mod! 2.0"),
        CardInfo::new(),
    );
    assert!(code.contains("namespace MyMod20.Cards"));
}

#[test]
fn test_override_replace_vs_insert() {
    let config = CardConfig {
        allow_multiple: Some(false),
        ..CardConfig::default()
    };

    let existing = "class A {\n    public override bool GetAllowMultiple() { return true; }\n}";
    let replaced = inject_stats(existing, &StatValues::new(), &config);
    assert_eq!(replaced.matches("GetAllowMultiple").count(), 1);
    assert!(replaced.contains("GetAllowMultiple() { return false; }"));

    let inserted = inject_stats("class A {\n}", &StatValues::new(), &config);
    assert_eq!(inserted.matches("GetAllowMultiple").count(), 1);
    assert!(inserted.contains("    public override bool GetAllowMultiple() { return false; }\n}"));
}

#[test]
fn test_extraction_follows_pattern_order() {
    let stats = extract_stats("block.cdMultiplier = 2f; gun.damage = 3f;");
    let labels: Vec<_> = stats.iter().map(|s| s.label).collect();
    assert_eq!(labels, ["Damage", "BlockCD"]);
}

#[test]
fn test_library_persists_through_service() {
    let store = SharedStore::default();
    let service = LibraryService::new(Box::new(store.clone()));

    let project_id = service
        .update(|lib| Ok(lib.create_project("Guns", Strategy::Vanilla)?.id.clone()))
        .unwrap();
    let index = service.update(|lib| lib.create_card(&project_id)).unwrap();
    let values = StatValues::new().with("damage", 2.0).unwrap();
    service
        .update(|lib| lib.apply_stats(&project_id, index, &values).map(|_| ()))
        .unwrap();

    assert!(store.load(LIBRARY_KEY).unwrap().is_some());

    let library = service.load().unwrap();
    let card = library.project(&project_id).unwrap().card(index).unwrap();
    assert_eq!(card.name, "New Card 1");
    assert!(card.code.contains("gun.damage = 2f;"));
    assert!(card.code.contains("class NewCard1"));
}

#[test]
fn test_backup_round_trip_between_stores() {
    let source = LibraryService::new(Box::new(SharedStore::default()));
    source
        .update(|lib| {
            lib.create_project("A", Strategy::ModsPlus)?;
            let folder = lib.create_snippet_folder(Strategy::ModsPlus, "Util").id.clone();
            lib.save_snippet(Strategy::ModsPlus, "Heal", "// heal", Some(&folder))?;
            Ok(())
        })
        .unwrap();
    let backup = source.export().unwrap();

    let target = LibraryService::new(Box::new(SharedStore::default()));
    let imported = target.import(&backup).unwrap();
    assert_eq!(imported, source.load().unwrap());
    assert_eq!(target.load().unwrap().snippets(Strategy::ModsPlus).len(), 1);
}
