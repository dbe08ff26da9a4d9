//! tmatch Storage Layer
//!
//! Implements the [`TemplateCatalog`] trait on SQLite plus the connection
//! pool that hands each worker its own catalog handle.
//!
//! # Architecture
//!
//! - SQLite for the persisted template catalog (command signature + body)
//! - Substring-AND filtering pushed into the query as `instr` clauses
//! - An explicit [`pool::CatalogPool`] instead of hidden thread-local
//!   connection caching
//!
//! # Thread Safety
//!
//! SQLite connections are not thread-safe. Each worker should hold its own
//! [`SqliteCatalog`], normally obtained through the pool.

#![warn(missing_docs)]

pub mod pool;

pub use pool::{CatalogPool, PooledCatalog};

use rusqlite::{params, Connection};
use std::collections::BTreeSet;
use std::path::Path;
use thiserror::Error;
use tmatch_domain::{Template, TemplateCatalog, TemplateId};

/// Errors that can occur during catalog operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// Database error
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Insert collided with an existing template id
    #[error("duplicate template id: {0}")]
    DuplicateId(String),
}

/// SQLite-backed implementation of [`TemplateCatalog`]
///
/// The engine only reads from this store; [`SqliteCatalog::insert_template`]
/// exists for the import tooling boundary and for tests.
pub struct SqliteCatalog {
    conn: Connection,
}

impl SqliteCatalog {
    /// Open (or create) a catalog at the given database path
    ///
    /// Use `:memory:` for an in-memory catalog (useful for testing). Fails
    /// if the backing database cannot be opened; nothing is cached on
    /// failure.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let conn = Connection::open(path)?;
        let catalog = Self { conn };
        catalog.initialize_schema()?;
        Ok(catalog)
    }

    /// Initialize the database schema
    fn initialize_schema(&self) -> Result<(), StoreError> {
        let schema = include_str!("schema.sql");
        self.conn.execute_batch(schema)?;
        Ok(())
    }

    /// Insert one template; import-tooling boundary only
    pub fn insert_template(&self, template: &Template) -> Result<(), StoreError> {
        let inserted = self.conn.execute(
            "INSERT OR IGNORE INTO templates (id, command, body) VALUES (?1, ?2, ?3)",
            params![template.id.as_str(), &template.command, &template.body],
        )?;
        if inserted == 0 {
            return Err(StoreError::DuplicateId(template.id.as_str().to_string()));
        }
        Ok(())
    }

    /// Number of templates currently stored
    pub fn template_count(&self) -> Result<usize, StoreError> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM templates", [], |row| row.get(0))?;
        Ok(count as usize)
    }
}

impl TemplateCatalog for SqliteCatalog {
    type Error = StoreError;

    /// Return every template whose command signature contains all of
    /// `terms`, case-insensitively
    ///
    /// Results come back `ORDER BY rowid` (insertion order), which is the
    /// stable iteration order the selector's first-seen tie-break relies
    /// on for a fixed catalog state.
    fn query(&self, terms: &BTreeSet<String>) -> Result<Vec<Template>, Self::Error> {
        let mut sql = String::from("SELECT id, command, body FROM templates");
        let mut params: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();

        if !terms.is_empty() {
            let clauses = vec!["instr(lower(command), ?) > 0"; terms.len()];
            sql.push_str(" WHERE ");
            sql.push_str(&clauses.join(" AND "));
            for term in terms {
                params.push(Box::new(term.to_lowercase()));
            }
        }

        sql.push_str(" ORDER BY rowid");

        let mut stmt = self.conn.prepare(&sql)?;
        let param_refs: Vec<&dyn rusqlite::ToSql> = params.iter().map(|p| p.as_ref()).collect();

        let templates = stmt
            .query_map(&param_refs[..], |row| {
                Ok(Template {
                    id: TemplateId::new(row.get::<_, String>(0)?),
                    command: row.get(1)?,
                    body: row.get(2)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(templates)
    }
}
