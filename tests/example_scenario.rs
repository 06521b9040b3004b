use edudesk::manager::DataManager;
use edudesk::query::SearchTier;
use edudesk::record::{FieldValue, Record, RecordId, base_field};
use edudesk::store::{DataStore, IndexConfig};

#[derive(Debug, Clone, PartialEq)]
struct Member {
    id: RecordId,
    name: String,
    email: String,
    status: String,
}

#[derive(Debug, Clone, Default)]
struct MemberPatch {
    status: Option<String>,
}

impl Record for Member {
    type Patch = MemberPatch;
    type Summary = ();

    fn id(&self) -> RecordId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn email(&self) -> &str {
        &self.email
    }

    fn status(&self) -> &str {
        &self.status
    }

    fn field(&self, name: &str) -> Option<FieldValue> {
        base_field(self, name)
    }

    fn apply_patch(&mut self, patch: MemberPatch) {
        if let Some(status) = patch.status {
            self.status = status;
        }
    }

    fn with_id(mut self, id: RecordId) -> Self {
        self.id = id;
        self
    }

    fn summarize(_records: &[Self]) {}
}

fn member(id: RecordId, name: &str, status: &str) -> Member {
    Member {
        id,
        name: name.to_string(),
        email: String::new(),
        status: status.to_string(),
    }
}

fn seed() -> Vec<Member> {
    vec![
        member(1, "John Smith", "Active"),
        member(2, "Jane Doe", "Inactive"),
    ]
}

fn ids(records: &[Member]) -> Vec<RecordId> {
    records.iter().map(|r| r.id).collect()
}

fn activate() -> MemberPatch {
    MemberPatch {
        status: Some("Active".to_string()),
    }
}

#[test]
fn test_store_walkthrough() {
    let mut store = DataStore::with_records(IndexConfig::default(), seed());

    let (hits, tier) = store.search_with_tier("john", &["name"]);
    assert_eq!(ids(&hits), vec![1]);
    assert_eq!(tier, SearchTier::Substring);

    assert!(store.update(2, activate()));
    assert_eq!(ids(&store.find_by_field("status", "active")), vec![1, 2]);

    assert!(store.delete(1));
    assert_eq!(store.get_by_id(1), None);
    assert_eq!(ids(&store.find_by_field("status", "active")), vec![2]);

    let page = store.paginate(&store.get_all(), 1, 25);
    assert_eq!(ids(&page.data), vec![2]);
    assert_eq!(
        (
            page.current_page,
            page.total_pages,
            page.total_items,
            page.start_index,
            page.end_index
        ),
        (1, 1, 1, 1, 1)
    );
    store.check_consistency().unwrap();
}

#[test]
fn test_manager_walkthrough() {
    let mut manager = DataManager::new(seed());

    assert_eq!(ids(&manager.search("john", &["name"])), vec![1]);
    assert_eq!(ids(&manager.search("john smith", &["name"])), vec![1]);

    assert!(manager.update(2, activate()));
    assert_eq!(ids(&manager.find_by_field("status", "active")), vec![1, 2]);
    assert_eq!(manager.stats().active, 2);

    assert!(manager.remove(1));
    assert_eq!(manager.get_by_id(1), None);
    assert_eq!(ids(&manager.find_by_field("status", "active")), vec![2]);

    let stats = manager.stats();
    assert_eq!((stats.total, stats.active, stats.inactive), (1, 1, 0));

    let page = manager.paginate(&manager.get_all(), 1, 25);
    assert_eq!(ids(&page.data), vec![2]);
    assert_eq!((page.start_index, page.end_index), (1, 1));
}

#[test]
fn test_exact_hit_skips_fallback() {
    let store = DataStore::with_records(IndexConfig::default(), seed());

    let (hits, tier) = store.search_with_tier("JANE DOE", &["name"]);
    assert_eq!(ids(&hits), vec![2]);
    assert_eq!(tier, SearchTier::Exact);

    let (hits, tier) = store.search_with_tier("nobody", &["name", "email"]);
    assert!(hits.is_empty());
    assert_eq!(tier, SearchTier::Substring);
}
