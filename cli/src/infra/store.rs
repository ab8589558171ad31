//! SQLite implementation of the `SiteStore` port.

use std::path::Path;

use anyhow::{Context, Result};
use rusqlite::{Connection, OpenFlags, OptionalExtension, params};

use crate::application::ports::{ContentRewrite, SiteStore, SiteStoreOpener, SiteUrlUpdate};
use crate::domain::BootstrapError;
use crate::domain::layout::TABLE_PREFIX;

/// Opens the WordPress SQLite database read-write, never creating it.
pub struct SqliteStoreOpener;

impl SiteStoreOpener for SqliteStoreOpener {
    type Store = SqliteSiteStore;

    fn open(&self, path: &Path) -> Result<SqliteSiteStore> {
        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .map_err(|e| BootstrapError::StoreUnavailable(format!("{}: {e}", path.display())))?;
        Ok(SqliteSiteStore { conn })
    }
}

/// An open WordPress database.
pub struct SqliteSiteStore {
    conn: Connection,
}

impl SqliteSiteStore {
    fn replace_in(
        tx: &rusqlite::Transaction<'_>,
        table: &str,
        column: &str,
        old: &str,
        new: &str,
    ) -> Result<usize> {
        let sql = format!(
            "UPDATE {TABLE_PREFIX}{table} SET {column} = replace({column}, ?1, ?2) \
             WHERE instr({column}, ?1) > 0"
        );
        tx.execute(&sql, params![old, new])
            .with_context(|| format!("rewriting {TABLE_PREFIX}{table}.{column}"))
    }
}

impl SiteStore for SqliteSiteStore {
    fn home_url(&self) -> Result<Option<String>> {
        let sql =
            format!("SELECT option_value FROM {TABLE_PREFIX}options WHERE option_name = 'home'");
        self.conn
            .query_row(&sql, [], |row| row.get::<_, String>(0))
            .optional()
            .map_err(|e| BootstrapError::StoreUnavailable(e.to_string()).into())
    }

    fn update_site_urls(
        &self,
        old_url: &str,
        new_url: &str,
        rewrite_content: bool,
    ) -> Result<SiteUrlUpdate> {
        let tx = self
            .conn
            .unchecked_transaction()
            .context("starting site URL transaction")?;

        let option_rows = tx
            .execute(
                &format!(
                    "UPDATE {TABLE_PREFIX}options SET option_value = ?1 \
                     WHERE option_name IN ('home', 'siteurl')"
                ),
                params![new_url],
            )
            .context("updating home and siteurl")?;

        let content = if rewrite_content {
            Some(ContentRewrite {
                guids: Self::replace_in(&tx, "posts", "guid", old_url, new_url)?,
                post_bodies: Self::replace_in(&tx, "posts", "post_content", old_url, new_url)?,
                meta_values: Self::replace_in(&tx, "postmeta", "meta_value", old_url, new_url)?,
            })
        } else {
            None
        };

        tx.commit().context("committing site URL update")?;
        Ok(SiteUrlUpdate {
            option_rows,
            content,
        })
    }
}
