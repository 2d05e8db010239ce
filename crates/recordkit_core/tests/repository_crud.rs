use recordkit_core::{
    GroupIndex, IndexedRepository, Patient, Prescription, RepoError, Repository, StockItem,
    VecRepository,
};

fn stock(id: u32) -> StockItem {
    StockItem::new(id, format!("item-{id}"), 10, 100)
}

#[test]
fn indexed_get_returns_each_added_record() {
    let mut repo = IndexedRepository::new();
    for id in [5, 3, 8, 1] {
        let item = stock(id);
        repo.add(item.clone()).unwrap();
        assert_eq!(repo.get(id).unwrap(), &item);
    }
    assert_eq!(repo.len(), 4);
}

#[test]
fn indexed_duplicate_leaves_repository_unchanged() {
    let mut repo = IndexedRepository::new();
    repo.add(stock(1)).unwrap();
    repo.add(stock(2)).unwrap();

    let before: Vec<StockItem> = repo.iter().cloned().collect();
    let err = repo.add(StockItem::new(2, "other", 1, 1)).unwrap_err();
    assert_eq!(err, RepoError::DuplicateKey(2));

    let after: Vec<StockItem> = repo.iter().cloned().collect();
    assert_eq!(before, after);
}

#[test]
fn remove_absent_id_keeps_size_for_both_variants() {
    let mut indexed = IndexedRepository::new();
    indexed.add(stock(1)).unwrap();
    assert_eq!(indexed.remove(2).unwrap_err(), RepoError::NotFound(2));
    assert_eq!(indexed.len(), 1);

    let mut unindexed = VecRepository::new();
    unindexed.add(Patient::new(1, "Ann", 30)).unwrap();
    assert_eq!(unindexed.remove(2).unwrap_err(), RepoError::NotFound(2));
    assert_eq!(unindexed.len(), 1);
}

#[test]
fn get_absent_id_is_not_found() {
    let repo: IndexedRepository<StockItem> = IndexedRepository::new();
    assert_eq!(repo.get(7).unwrap_err(), RepoError::NotFound(7));
    assert!(repo.is_empty());
}

#[test]
fn invalid_record_is_rejected_by_both_variants() {
    let mut indexed = IndexedRepository::new();
    assert!(matches!(
        indexed.add(StockItem::new(1, "  ", 1, 1)),
        Err(RepoError::Validation(_))
    ));

    let mut unindexed = VecRepository::new();
    assert!(matches!(
        unindexed.add(Patient::new(1, "", 30)),
        Err(RepoError::Validation(_))
    ));
    assert!(indexed.is_empty());
    assert!(unindexed.is_empty());
}

#[test]
fn group_index_over_repository_snapshot() {
    let mut repo = VecRepository::new();
    for (id, patient_id) in [(0, 1), (1, 1), (2, 2), (3, 3), (4, 1)] {
        repo.add(Prescription::new(id, patient_id, "drug", "1x"))
            .unwrap();
    }

    let index = GroupIndex::build(repo.iter(), |rx| rx.patient_id);
    let keys: Vec<u32> = index.keys().copied().collect();
    assert_eq!(keys, vec![1, 2, 3]);

    let ids = |key: u32| -> Vec<u32> { index.get(&key).unwrap().iter().map(|rx| rx.id).collect() };
    assert_eq!(ids(1), vec![0, 1, 4]);
    assert_eq!(ids(2), vec![2]);
    assert_eq!(ids(3), vec![3]);

    assert!(index.get(&4).is_none());
    assert_eq!(index.group_len(&4), 0);
}

#[test]
fn group_index_must_be_rebuilt_after_changes() {
    let mut repo = VecRepository::new();
    repo.add(Prescription::new(1, 9, "drug", "1x")).unwrap();
    assert_eq!(GroupIndex::build(repo.iter(), |rx| rx.patient_id).group_len(&9), 1);

    repo.remove(1).unwrap();
    let rebuilt = GroupIndex::build(repo.iter(), |rx| rx.patient_id);
    assert!(rebuilt.get(&9).is_none());
    assert!(rebuilt.is_empty());
}
