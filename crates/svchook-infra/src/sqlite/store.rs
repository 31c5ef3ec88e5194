//! SQLite client store implementation.
//!
//! Implements `ClientStore` from `svchook-core` over one sqlx connection.
//! Every query binds its parameters; nothing is interpolated into SQL text.

use std::path::{Path, PathBuf};

use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection, SqliteRow};
use sqlx::{ConnectOptions, Connection, Row};
use tracing::debug;

use svchook_core::store::ClientStore;
use svchook_types::client::{Client, ClientId, DEFAULT_CLIENT_BALANCE, DEFAULT_CLIENT_NAME};
use svchook_types::error::{HarnessError, Operation};

// BALANCE may be stored as INTEGER under NUMERIC or no column affinity, so
// reads cast it to REAL before decoding into f64.
const SELECT_POSITIVE_BALANCE: &str = r#"
    SELECT CLIENTS.CLIENT_ID AS client_id, CAST(BALANCES.BALANCE AS REAL) AS balance
    FROM CLIENTS JOIN BALANCES ON CLIENTS.CLIENT_ID = BALANCES.CLIENTS_CLIENT_ID
    WHERE BALANCES.BALANCE > 0
    LIMIT 1"#;

const SELECT_BALANCE: &str =
    "SELECT CAST(BALANCE AS REAL) AS balance FROM BALANCES WHERE CLIENTS_CLIENT_ID = ?";

const SELECT_POSITIVE_BALANCE_FOR_CLIENT: &str = r#"
    SELECT CLIENTS.CLIENT_ID AS client_id, CAST(BALANCES.BALANCE AS REAL) AS balance
    FROM CLIENTS JOIN BALANCES ON CLIENTS.CLIENT_ID = BALANCES.CLIENTS_CLIENT_ID
    WHERE BALANCES.BALANCE > 0 AND CLIENTS.CLIENT_ID = ?
    LIMIT 1"#;

/// A connection to the clients database.
///
/// Opened by the caller, used for a short sequence of queries, then closed
/// with [`DataStore::close`].
pub struct DataStore {
    conn: SqliteConnection,
    path: PathBuf,
}

impl DataStore {
    /// Open the database at `path`.
    ///
    /// The file must already exist; it is never created.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, HarnessError> {
        let path = path.as_ref().to_path_buf();

        let conn = SqliteConnectOptions::new()
            .filename(&path)
            .create_if_missing(false)
            .connect()
            .await
            .map_err(|e| HarnessError::data_access(Operation::ConnectToDatabase, e))?;

        debug!(path = %path.display(), "Opened clients database");
        Ok(Self { conn, path })
    }

    /// Whether a database file exists at `path`.
    pub fn database_exists(path: impl AsRef<Path>) -> bool {
        path.as_ref().is_file()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Release the connection.
    pub async fn close(self) -> Result<(), HarnessError> {
        self.conn
            .close()
            .await
            .map_err(|e| HarnessError::data_access(Operation::CloseDatabase, e))?;

        debug!(path = %self.path.display(), "Closed clients database");
        Ok(())
    }
}

fn client_from_row(row: &SqliteRow) -> Result<Client, sqlx::Error> {
    let id: i64 = row.try_get("client_id")?;
    let balance: f64 = row.try_get("balance")?;
    Ok(Client::new(id, balance))
}

impl ClientStore for DataStore {
    async fn get_client_with_positive_balance(&mut self) -> Result<Option<Client>, HarnessError> {
        let op = Operation::SelectPositiveBalance;

        let row = sqlx::query(SELECT_POSITIVE_BALANCE)
            .fetch_optional(&mut self.conn)
            .await
            .map_err(|e| HarnessError::data_access(op, e))?;

        row.as_ref()
            .map(client_from_row)
            .transpose()
            .map_err(|e| HarnessError::data_access(op, e))
    }

    async fn insert_default_client(&mut self) -> Result<Client, HarnessError> {
        let op = Operation::InsertDefaultClient;

        let client_id = sqlx::query("INSERT INTO CLIENTS (CLIENT_NAME) VALUES (?)")
            .bind(DEFAULT_CLIENT_NAME)
            .execute(&mut self.conn)
            .await
            .map_err(|e| HarnessError::data_access(op, e))?
            .last_insert_rowid();

        sqlx::query("INSERT INTO BALANCES (BALANCE, CLIENTS_CLIENT_ID) VALUES (?, ?)")
            .bind(DEFAULT_CLIENT_BALANCE)
            .bind(client_id)
            .execute(&mut self.conn)
            .await
            .map_err(|e| HarnessError::data_access(op, e))?;

        let row = sqlx::query(SELECT_POSITIVE_BALANCE_FOR_CLIENT)
            .bind(client_id)
            .fetch_optional(&mut self.conn)
            .await
            .map_err(|e| HarnessError::data_access(op, e))?
            .ok_or_else(|| {
                HarnessError::empty(
                    op,
                    format!("got empty select response after insert of client {client_id}"),
                )
            })?;

        let client = client_from_row(&row).map_err(|e| HarnessError::data_access(op, e))?;
        debug!(client_id = %client.id, balance = client.balance, "Inserted default client");
        Ok(client)
    }

    async fn get_balance(&mut self, client_id: ClientId) -> Result<f64, HarnessError> {
        let op = Operation::GetBalance;

        let row = sqlx::query(SELECT_BALANCE)
            .bind(client_id.0)
            .fetch_optional(&mut self.conn)
            .await
            .map_err(|e| HarnessError::data_access(op, e))?
            .ok_or_else(|| HarnessError::empty(op, format!("client {client_id} does not exist")))?;

        row.try_get("balance")
            .map_err(|e| HarnessError::data_access(op, e))
    }
}
