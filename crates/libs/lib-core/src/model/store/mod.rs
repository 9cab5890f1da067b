//! # Database Store
//!
//! MongoDB connection handling.
//!
//! [`connect`] builds the client for the configured URI and hands back the
//! database named in it. Client construction performs no server round-trip:
//! the driver establishes connections lazily, on first operation. The
//! bootstrap relies on that to start serving while the database comes up,
//! and uses [`ping`] from a background task to surface the outcome in logs.

use mongodb::bson::doc;
use mongodb::Client;

/// Database the client falls back to when the URI names none.
const DEFAULT_DB_NAME: &str = "budget";

/// Type alias for the shared MongoDB database handle.
///
/// `mongodb::Database` is a cheap clone over a pooled client, so the handle
/// is cloned freely into the application state and background tasks.
pub type Db = mongodb::Database;

/// Create the database handle for the given connection URI.
///
/// Fails only on a malformed URI; an unreachable server is not an error
/// here.
pub async fn connect(uri: &str) -> anyhow::Result<Db> {
    let client = Client::with_uri_str(uri).await?;

    let db = client
        .default_database()
        .unwrap_or_else(|| client.database(DEFAULT_DB_NAME));

    Ok(db)
}

/// Round-trip to the server to check connectivity.
pub async fn ping(db: &Db) -> anyhow::Result<()> {
    db.run_command(doc! { "ping": 1 }).await?;
    Ok(())
}

// region:    --- Tests
#[cfg(test)]
mod tests {
    use super::*;

    // Client construction is lazy, so these run without a live server.

    #[tokio::test]
    async fn test_connect_uses_database_from_uri_path() {
        let db = connect("mongodb://localhost/budget").await.unwrap();
        assert_eq!(db.name(), "budget");
    }

    #[tokio::test]
    async fn test_connect_falls_back_to_budget_database() {
        let db = connect("mongodb://localhost:27017").await.unwrap();
        assert_eq!(db.name(), "budget");
    }

    #[tokio::test]
    async fn test_connect_respects_other_database_names() {
        let db = connect("mongodb://localhost/accounting").await.unwrap();
        assert_eq!(db.name(), "accounting");
    }

    #[tokio::test]
    async fn test_connect_rejects_malformed_uri() {
        assert!(connect("not a mongodb uri").await.is_err());
    }
}
// endregion: --- Tests
