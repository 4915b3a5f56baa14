use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

/// One contact-form submission, as stored.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Message {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

/// Checks a submission before it touches the database. Blank fields
/// fail locally; no insert is attempted for them.
pub fn validate_submission(name: &str, email: &str, message: &str) -> Result<(), &'static str> {
    if name.trim().is_empty() || email.trim().is_empty() || message.trim().is_empty() {
        return Err("Please fill in all fields.");
    }
    Ok(())
}

#[derive(Clone)]
pub struct MessageStore {
    pool: PgPool,
}

impl MessageStore {
    pub async fn connect(url: &str) -> Result<MessageStore> {
        let pool = PgPool::connect(url).await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS messages (
                id SERIAL PRIMARY KEY,
                name TEXT NOT NULL,
                email TEXT NOT NULL,
                message TEXT NOT NULL,
                created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
            )
            "#,
        )
        .execute(&pool)
        .await?;

        Ok(MessageStore { pool })
    }

    pub async fn insert(&self, name: &str, email: &str, message: &str) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO messages (name, email, message)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(name)
        .bind(email)
        .bind(message)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn list(&self) -> Result<Vec<Message>> {
        let rows = sqlx::query_as::<_, Message>(
            r#"
            SELECT id, name, email, message, created_at
            FROM messages
            ORDER BY created_at ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_submission() {
        assert!(validate_submission("J", "j@x.com", "hi").is_ok());

        assert!(validate_submission("", "j@x.com", "hi").is_err());
        assert!(validate_submission("J", "", "hi").is_err());
        assert!(validate_submission("J", "j@x.com", "").is_err());
        assert!(validate_submission("   ", "j@x.com", "hi").is_err());

        let err = validate_submission("", "", "").unwrap_err();
        assert_eq!(err, "Please fill in all fields.");
    }

    // Needs a live database; set FOLIO_TEST_DATABASE_URL to run it.
    #[ntex::test]
    async fn test_insert_then_list_round_trip() {
        let Ok(url) = std::env::var("FOLIO_TEST_DATABASE_URL") else {
            return;
        };

        let store = MessageStore::connect(&url).await.unwrap();
        let marker = format!(
            "round-trip-{}",
            Utc::now().timestamp_nanos_opt().unwrap_or_default()
        );

        store
            .insert("J", &format!("{}-first@x.com", marker), "hi")
            .await
            .unwrap();
        store
            .insert("K", &format!("{}-second@x.com", marker), "hello again")
            .await
            .unwrap();

        let rows = store.list().await.unwrap();
        assert!(rows
            .windows(2)
            .all(|pair| pair[0].created_at <= pair[1].created_at));

        let ours: Vec<&Message> = rows
            .iter()
            .filter(|m| m.email.starts_with(&marker))
            .collect();
        assert_eq!(ours.len(), 2);
        assert_eq!(ours[0].name, "J");
        assert_eq!(ours[0].message, "hi");
        assert_eq!(ours[1].name, "K");
        assert!(ours[0].created_at <= ours[1].created_at);
        assert!(ours[0].id < ours[1].id);
    }
}
