use couchrep::domain::{ActiveTask, Bookmark, BookmarkCollection, FilterFunction};

pub fn sample_bookmarks(count: usize) -> BookmarkCollection {
    (0..count)
        .map(|i| {
            Bookmark::new(
                format!("https://replica{}.example.com", i % 3),
                "admin",
                format!("db{:02}", i),
            )
        })
        .collect()
}

pub fn sample_filters() -> Vec<FilterFunction> {
    vec![
        FilterFunction {
            id: "app/by_type".to_string(),
            label: "by_type".to_string(),
        },
        FilterFunction {
            id: "app/recent".to_string(),
            label: "recent".to_string(),
        },
    ]
}

pub fn sample_tasks() -> Vec<ActiveTask> {
    vec![
        ActiveTask {
            task_type: "indexer".to_string(),
            ..Default::default()
        },
        ActiveTask {
            task_type: "replication".to_string(),
            source: "http://127.0.0.1:5984/orders/".to_string(),
            target: "https://backup.example.com/orders-copy/".to_string(),
            replication_id: "abc+continuous".to_string(),
            continuous: true,
            docs_read: 120,
            docs_written: 118,
            doc_write_failures: 2,
            started_on: 1_700_000_000,
            updated_on: 1_700_000_090,
        },
    ]
}
