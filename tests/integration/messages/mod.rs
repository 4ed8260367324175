//! Message facade integration tests

use chateai_common::Error;
use serde_json::json;

use crate::common::{is_display_timestamp, parse_display, TestApp};

mod test_create_message {
    use super::*;

    #[tokio::test]
    async fn test_create_message_shape() {
        let app = TestApp::new().await.unwrap();
        let conv = app.create_conversation("chat").await.unwrap();

        let value = app
            .core
            .create_message(conv, "user", "Hello")
            .await
            .unwrap()
            .to_value()
            .unwrap();
        assert_eq!(value["status"], "success");
        assert_eq!(value["data"], json!({}));
        assert!(value["id"].as_i64().unwrap() > 0);
    }

    #[tokio::test]
    async fn test_created_message_is_listed_with_parent_id() {
        let app = TestApp::new().await.unwrap();
        let conv = app.create_conversation("chat").await.unwrap();
        let ids = app.seed_messages(conv, 1).await.unwrap();

        let value = app
            .core
            .list_messages_by_conversation(conv)
            .await
            .unwrap()
            .to_value()
            .unwrap();
        let entry = &value["data"][0];
        assert_eq!(entry["id"], ids[0]);
        assert_eq!(entry["conversation_id"], conv);
        assert_eq!(entry["role"], "user");
        assert_eq!(entry["content"], "message 0");
        assert!(is_display_timestamp(entry["created_at"].as_str().unwrap()));
        assert_eq!(entry["updated_at"], "(NULL)");
    }

    #[tokio::test]
    async fn test_create_for_missing_conversation_is_database_error() {
        let app = TestApp::new().await.unwrap();

        let result = app.core.create_message(424242, "user", "lost").await;
        assert!(matches!(result, Err(Error::Database(_))));
        assert_eq!(app.count_all_messages().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_create_without_foreign_keys_accepts_orphan() {
        let app = TestApp::with_foreign_keys(false).await.unwrap();

        let envelope = app.core.create_message(424242, "user", "lost").await.unwrap();
        assert!(envelope.is_success());
        assert_eq!(app.count_messages(424242).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_content_is_stored_verbatim() {
        let app = TestApp::new().await.unwrap();
        let conv = app.create_conversation("chat").await.unwrap();
        let content = "line one\nline two\t\"quoted\" 'single' ünïcødé 🚀";

        app.core.create_message(conv, "assistant", content).await.unwrap();

        let listing = app
            .core
            .list_messages_by_conversation(conv)
            .await
            .unwrap()
            .into_payload()
            .unwrap();
        assert_eq!(listing.data[0].content, content);
        assert_eq!(listing.data[0].role, "assistant");
    }
}

mod test_list_messages {
    use super::*;

    #[tokio::test]
    async fn test_list_for_conversation_without_messages() {
        let app = TestApp::new().await.unwrap();
        let conv = app.create_conversation("quiet").await.unwrap();

        let json = app
            .core
            .list_messages_by_conversation(conv)
            .await
            .unwrap()
            .to_json()
            .unwrap();
        assert_eq!(json, r#"{"status":"success","data":[]}"#);
    }

    #[tokio::test]
    async fn test_list_for_unknown_conversation_is_empty_success() {
        let app = TestApp::new().await.unwrap();

        let envelope = app.core.list_messages_by_conversation(99999).await.unwrap();
        assert!(envelope.is_success());
        assert!(envelope.into_payload().unwrap().data.is_empty());
    }

    #[tokio::test]
    async fn test_list_by_conversation_orders_oldest_first() {
        let app = TestApp::new().await.unwrap();
        let conv = app.create_conversation("chat").await.unwrap();
        app.insert_raw_message(conv, "second", "2026-05-01T10:00:01.000Z")
            .await
            .unwrap();
        app.insert_raw_message(conv, "third", "2026-05-01T10:00:02.500Z")
            .await
            .unwrap();
        app.insert_raw_message(conv, "first", "2026-05-01T09:59:59.999Z")
            .await
            .unwrap();

        let listing = app
            .core
            .list_messages_by_conversation(conv)
            .await
            .unwrap()
            .into_payload()
            .unwrap();
        let contents: Vec<&str> = listing.data.iter().map(|m| m.content.as_str()).collect();
        assert_eq!(contents, vec!["first", "second", "third"]);

        let times: Vec<_> = listing
            .data
            .iter()
            .map(|m| parse_display(&m.created_at))
            .collect();
        assert!(times.windows(2).all(|w| w[0] <= w[1]));
    }

    #[tokio::test]
    async fn test_seeded_messages_keep_insertion_order() {
        let app = TestApp::new().await.unwrap();
        let conv = app.create_conversation("chat").await.unwrap();
        let ids = app.seed_messages(conv, 6).await.unwrap();

        let listing = app
            .core
            .list_messages_by_conversation(conv)
            .await
            .unwrap()
            .into_payload()
            .unwrap();
        let listed: Vec<i64> = listing.data.iter().map(|m| m.id).collect();
        assert_eq!(listed, ids);
    }

    #[tokio::test]
    async fn test_list_all_spans_conversations() {
        let app = TestApp::new().await.unwrap();
        let a = app.create_conversation("a").await.unwrap();
        let b = app.create_conversation("b").await.unwrap();
        app.insert_raw_message(b, "b-late", "2026-01-02T00:00:00.000Z")
            .await
            .unwrap();
        app.insert_raw_message(a, "a-early", "2026-01-01T00:00:00.000Z")
            .await
            .unwrap();

        let listing = app.core.list_messages().await.unwrap().into_payload().unwrap();
        assert_eq!(listing.data.len(), 2);
        assert_eq!(listing.data[0].content, "a-early");
        assert_eq!(listing.data[0].conversation_id, a);
        assert_eq!(listing.data[1].content, "b-late");
        assert_eq!(listing.data[1].conversation_id, b);
    }
}
