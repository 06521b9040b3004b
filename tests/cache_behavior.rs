use std::sync::Arc;
use std::time::Duration;

use edudesk::cache::MemoizedCache;
use edudesk::clock::ManualClock;
use edudesk::entity::Student;
use edudesk::entity::generator::generate_students;
use edudesk::entity::student::StudentPatch;
use edudesk::manager::{ACTIVE_ITEMS_KEY, DataManager, ManagerConfig, SharedDataManager};

fn manager(clock: &ManualClock) -> DataManager<Student> {
    let config = ManagerConfig::default()
        .with_search_ttl(Duration::from_secs(60))
        .with_filter_ttl(Duration::from_secs(30));
    DataManager::with_clock(generate_students(), config, Arc::new(clock.clone())).unwrap()
}

#[test]
fn test_ttl_boundary() {
    let clock = ManualClock::new();
    let mut cache = MemoizedCache::with_clock(Duration::from_secs(10), clock.clone());
    cache.set("k", 1u32);

    clock.advance(Duration::from_millis(9_999));
    assert_eq!(cache.get("k"), Some(1));

    clock.advance(Duration::from_millis(1));
    assert_eq!(cache.get("k"), None);
    assert!(cache.is_empty());

    cache.set("k", 2);
    assert_eq!(cache.get("k"), Some(2));
    assert_eq!(cache.stats().misses, 1);
}

#[test]
fn test_search_and_filter_caches_expire_independently() {
    let clock = ManualClock::new();
    let mut manager = manager(&clock);

    manager.search("john", &["name"]);
    manager.filter(|s| s.gender == "Male", Some("male"));

    clock.advance(Duration::from_secs(45));
    manager.search("john", &["name"]);
    manager.filter(|s| s.gender == "Male", Some("male"));

    let (search, filter) = manager.cache_stats();
    assert_eq!((search.hits, search.misses), (1, 1));
    assert_eq!((filter.hits, filter.misses), (0, 2));
}

#[test]
fn test_cached_search_is_not_served_after_create() {
    let clock = ManualClock::new();
    let mut manager = manager(&clock);

    let before = manager.search("sarah", &["name"]);
    let mut newcomer = manager.get_by_id(2).unwrap();
    newcomer.name = "Sarah Connor".to_string();
    newcomer.email = "sarah.connor@email.com".to_string();
    let created = manager.create(newcomer);

    let after = manager.search("sarah", &["name"]);
    assert_eq!(after.len(), before.len() + 1);
    assert_eq!(after.last().map(|s| s.id), Some(created.id));
}

#[test]
fn test_cached_search_is_not_served_after_update_or_remove() {
    let clock = ManualClock::new();
    let mut manager = manager(&clock);

    let inactive = manager.search("inactive", &["status"]);
    assert_eq!(inactive.len(), 25);

    assert!(manager.update(
        2,
        StudentPatch {
            status: Some("Active".to_string()),
            ..Default::default()
        }
    ));
    assert_eq!(manager.search("inactive", &["status"]).len(), 24);

    assert!(manager.remove(4));
    assert_eq!(manager.search("inactive", &["status"]).len(), 23);
}

#[test]
fn test_unrelated_filter_entries_are_dropped_on_write() {
    let clock = ManualClock::new();
    let mut manager = manager(&clock);

    manager.stats();
    manager.filter(|s| s.age >= 25, Some("adults"));
    assert_eq!(manager.cache_stats().1.entries, 2);

    assert!(manager.update(
        1,
        StudentPatch {
            notes: Some("Scholarship renewed".to_string()),
            ..Default::default()
        }
    ));
    assert_eq!(manager.cache_stats().1.entries, 0);

    manager.filter(|s| s.status == "Active", Some(ACTIVE_ITEMS_KEY));
    assert_eq!(manager.cache_stats().1.entries, 1);
}

#[test]
fn test_shared_manager_serializes_writers() {
    let shared = SharedDataManager::new(DataManager::new(generate_students()));
    let template = shared.get_by_id(3).unwrap();

    std::thread::scope(|scope| {
        for worker in 0..3 {
            let shared = shared.clone();
            let template = template.clone();
            scope.spawn(move || {
                for n in 0..10 {
                    let mut student = template.clone();
                    student.name = format!("Worker {worker} Student {n}");
                    shared.create(student);
                    shared.search("worker", &["name"]);
                }
            });
        }
    });

    assert_eq!(shared.size(), 80);
    assert_eq!(shared.search("worker", &["name"]).len(), 30);
    shared
        .with_lock(|m| m.store().check_consistency())
        .unwrap();
}
