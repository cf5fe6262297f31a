//! Concurrent creates must leave exactly one winner per student id.

use std::sync::Arc;

use zkbar_ledger::store::{MemoryStore, SqliteStore, WorldState};
use zkbar_ledger::{ContractError, Ledger, LedgerConfig, StudentRecord};

async fn create_attempt<S: WorldState>(
    ledger: &Ledger<S>,
    student_id: &str,
    attempt: usize,
) -> Result<StudentRecord, ContractError> {
    ledger
        .create_transcript(
            student_id,
            &format!("did:zkbar:{}", attempt),
            "B.Sc",
            3.0,
            "2024",
            &format!("QmHash{}", attempt),
            "OxHash",
            "ISSUED",
        )
        .await
}

/// Race `contenders` creates of one id, spread round-robin over `ledgers`.
async fn race_same_id<S: WorldState + 'static>(
    ledgers: &[Arc<Ledger<S>>],
    student_id: &str,
    contenders: usize,
) {
    let mut handles = Vec::with_capacity(contenders);
    for attempt in 0..contenders {
        let ledger = Arc::clone(&ledgers[attempt % ledgers.len()]);
        let student_id = student_id.to_string();
        handles.push(tokio::spawn(async move {
            create_attempt(&ledger, &student_id, attempt).await
        }));
    }

    let mut winners = Vec::new();
    let mut rejected = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(record) => winners.push(record),
            Err(ContractError::AlreadyExists(_)) => rejected += 1,
            Err(other) => panic!("unexpected error: {}", other),
        }
    }

    assert_eq!(winners.len(), 1);
    assert_eq!(rejected, contenders - 1);

    // The stored value is the winner's, not a later overwrite.
    for ledger in ledgers {
        let stored = ledger.query_transcript(student_id).await.unwrap();
        assert_eq!(stored, winners[0]);
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_creates_memory_store() {
    let ledger = Arc::new(Ledger::new(MemoryStore::new(), LedgerConfig::default()));
    race_same_id(&[ledger], "STUDENT_RACE", 32).await;
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_creates_sqlite_store() {
    let store = SqliteStore::open_memory().unwrap();
    let ledger = Arc::new(Ledger::new(store, LedgerConfig::default()));
    race_same_id(&[ledger], "STUDENT_RACE", 16).await;
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn ledgers_sharing_sqlite_store_keep_one_winner() {
    let store = Arc::new(SqliteStore::open_memory().unwrap());
    let ledgers = [
        Arc::new(Ledger::from_arc(Arc::clone(&store), LedgerConfig::default())),
        Arc::new(Ledger::from_arc(Arc::clone(&store), LedgerConfig::default())),
    ];

    for round in 0..20 {
        race_same_id(&ledgers, &format!("STUDENT_RACE_{}", round), 32).await;
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn ledgers_sharing_memory_store_keep_one_winner() {
    let store = Arc::new(MemoryStore::new());
    let ledgers = [
        Arc::new(Ledger::from_arc(Arc::clone(&store), LedgerConfig::default())),
        Arc::new(Ledger::from_arc(Arc::clone(&store), LedgerConfig::default())),
    ];

    for round in 0..20 {
        race_same_id(&ledgers, &format!("STUDENT_RACE_{}", round), 32).await;
    }
    assert_eq!(store.len(), 20);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_creates_on_distinct_ids_all_succeed() {
    let ledger = Arc::new(Ledger::new(MemoryStore::new(), LedgerConfig::default()));

    let mut handles = Vec::new();
    for i in 0..20 {
        let ledger = Arc::clone(&ledger);
        handles.push(tokio::spawn(async move {
            let id = format!("STUDENT_{:03}", i);
            create_attempt(&ledger, &id, i).await
        }));
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    assert_eq!(ledger.store().len(), 20);
}
