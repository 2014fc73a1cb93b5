use stockwatch::services::alert_store::AlertStore;

#[test]
fn insert_assigns_monotonic_unique_ids() {
    let store = AlertStore::new();

    let a = store.insert("AAPL", 150.0, "a@b.com").unwrap();
    let b = store.insert("MSFT", 300.0, "a@b.com").unwrap();
    let c = store.insert("AAPL", 10.0, "c@d.com").unwrap();

    assert!(a < b && b < c);
}

#[test]
fn list_all_returns_records_in_insertion_order() {
    let store = AlertStore::new();

    store.insert("AAPL", 150.0, "a@b.com").unwrap();
    store.insert("MSFT", 300.0, "b@c.com").unwrap();

    let alerts = store.list_all().unwrap();
    assert_eq!(alerts.len(), 2);
    assert_eq!(alerts[0].symbol, "AAPL");
    assert_eq!(alerts[0].threshold, 150.0);
    assert_eq!(alerts[0].email, "a@b.com");
    assert_eq!(alerts[1].symbol, "MSFT");
}

#[test]
fn store_does_not_validate_symbol_or_threshold() {
    let store = AlertStore::new();

    store.insert("", -5.0, "").unwrap();

    let alerts = store.list_all().unwrap();
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].symbol, "");
    assert_eq!(alerts[0].threshold, -5.0);
}

#[test]
fn symbol_case_is_preserved() {
    let store = AlertStore::new();

    store.insert("aapl", 1.0, "a@b.com").unwrap();

    let alerts = store.list_all().unwrap();
    assert_eq!(alerts[0].symbol, "aapl");
}

#[tokio::test]
async fn concurrent_inserts_lose_nothing() {
    let store = AlertStore::new();

    let mut handles = Vec::new();
    for i in 0..16 {
        let store = store.clone();
        handles.push(tokio::spawn(async move {
            store.insert("AAPL", i as f64, "a@b.com").unwrap()
        }));
    }

    let mut ids = Vec::new();
    for h in handles {
        ids.push(h.await.unwrap());
    }

    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 16);

    let alerts = store.list_all().unwrap();
    assert_eq!(alerts.len(), 16);
}
