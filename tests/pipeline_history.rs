//! End-to-end behaviour of submit → history → analyze

mod common;

use common::{memory_store, pipeline_on, FAIL_MARKER};
use std::sync::Arc;
use synopsis::{HistoryStore, KeywordRank, OpenStore, PipelineError, SqliteHistoryStore};

#[tokio::test]
async fn n_submissions_list_newest_first() {
    let pipeline = pipeline_on(memory_store());

    for i in 1..=6 {
        pipeline
            .submit(&format!("document number {i} about storage engines"))
            .await
            .unwrap();
    }

    let records = pipeline.history().unwrap();
    assert_eq!(records.len(), 6);
    assert_eq!(records[0].id.as_i64(), 6);
    for pair in records.windows(2) {
        assert!(pair[0].id > pair[1].id);
        assert!(pair[0].created_at >= pair[1].created_at);
    }
    assert_eq!(records[5].input_text, "document number 1 about storage engines");
    assert_eq!(records[5].summary_text, "document number 1 about storage");
}

#[tokio::test]
async fn failed_submissions_leave_store_unchanged() {
    let store = memory_store();
    let pipeline = pipeline_on(store.clone());
    pipeline.submit("first good text").await.unwrap();

    let err = pipeline
        .submit(&format!("this one will {FAIL_MARKER}"))
        .await
        .unwrap_err();
    assert!(matches!(err, PipelineError::SummarizationFailed(_)));

    for blank in ["", "   "] {
        let err = pipeline.submit(blank).await.unwrap_err();
        assert!(matches!(err, PipelineError::InvalidInput));
    }

    let records = store.list_all_reverse().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].input_text, "first good text");

    // The store is still usable and ids continue without a gap
    let next = pipeline.submit("second good text").await.unwrap();
    assert_eq!(next.id.as_i64(), 2);
}

#[tokio::test]
async fn analyze_matches_worked_example() {
    let pipeline = pipeline_on(memory_store());
    assert!(matches!(pipeline.analyze(), Err(PipelineError::NoData)));

    pipeline.submit("the cat sat on the mat").await.unwrap();
    pipeline.submit("  a cat and a hat  ").await.unwrap();

    let first = pipeline.analyze().unwrap();
    assert_eq!(first.total_records, 2);
    assert_eq!(first.avg_input_words, 5.5);
    assert_eq!(
        first.top_keywords,
        vec![
            KeywordRank::new("cat", 2),
            KeywordRank::new("sat", 1),
            KeywordRank::new("mat", 1),
            KeywordRank::new("hat", 1),
        ]
    );

    // No state carried between calls
    assert_eq!(pipeline.analyze().unwrap(), first);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn pipelines_sharing_a_store_get_distinct_ids() {
    let store = memory_store();
    let handles: Vec<_> = (0..5)
        .map(|t| {
            let pipeline = pipeline_on(store.clone());
            tokio::spawn(async move {
                let mut ids = Vec::new();
                for i in 0..4 {
                    let record = pipeline.submit(&format!("writer {t} text {i}")).await.unwrap();
                    ids.push(record.id.as_i64());
                }
                ids
            })
        })
        .collect();

    let mut ids = Vec::new();
    for handle in handles {
        ids.extend(handle.await.unwrap());
    }
    ids.sort_unstable();
    assert_eq!(ids, (1..=20).collect::<Vec<_>>());
}

#[tokio::test]
async fn history_persists_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("summaries.db");

    {
        let pipeline = pipeline_on(Arc::new(SqliteHistoryStore::open(&db_path).unwrap()));
        pipeline.submit("kept across restarts").await.unwrap();
    }

    let pipeline = pipeline_on(Arc::new(SqliteHistoryStore::open(&db_path).unwrap()));
    let records = pipeline.history().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].input_text, "kept across restarts");
    assert_eq!(records[0].summary_text, "kept across restarts");
}
