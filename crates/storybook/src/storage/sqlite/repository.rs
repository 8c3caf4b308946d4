//! SQLite repository implementation.
//!
//! Implements the repository traits from `storybook_core::storage` using SQLite.

use async_trait::async_trait;
use tokio_rusqlite::Connection;

use storybook_core::storage::{CommentRepository, RepositoryError, Result, StoryRepository};
use storybook_core::story::{
    Comment, NewComment, NewStory, PartitionKey, Story, StoryKey, VoteDirection,
};

use super::conversions::{format_author, format_datetime, row_to_comment, row_to_story};
use super::error::{map_tokio_rusqlite_error, map_tokio_rusqlite_write_error};
use super::schema;

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

fn sql_limit(limit: usize) -> i64 {
    i64::try_from(limit).unwrap_or(i64::MAX)
}

/// SQLite-based repository implementation.
///
/// All statements run on the single connection owned by `tokio_rusqlite`, so
/// writes are serialized and each `call` closure executes atomically with
/// respect to other calls.
pub struct SqliteRepository {
    conn: Connection,
}

impl SqliteRepository {
    /// Creates a new repository with a file-based database.
    ///
    /// The database file will be created if it doesn't exist.
    /// Schema tables are created automatically.
    pub async fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Creates a new repository with an in-memory database.
    ///
    /// Useful for testing - data is lost when the connection is dropped.
    pub async fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    async fn init_schema(conn: &Connection) -> Result<()> {
        conn.call(|conn| {
            conn.execute_batch(schema::CREATE_TABLES)
                .map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))
    }
}

#[async_trait]
impl StoryRepository for SqliteRepository {
    async fn get_story(&self, key: &StoryKey) -> Result<Option<Story>> {
        let partition = key.partition.as_str().to_string();
        let id = key.id;

        self.conn
            .call(move |conn| {
                let mut stmt = conn.prepare(schema::SELECT_STORY_BY_KEY).map_err(wrap_err)?;
                match stmt.query_row(rusqlite::params![partition, id], row_to_story) {
                    Ok(story) => Ok(Some(story)),
                    Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                    Err(e) => Err(wrap_err(e)),
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Story", key.to_string()))
    }

    async fn get_stories_by_partition(
        &self,
        partition: &PartitionKey,
        limit: usize,
    ) -> Result<Vec<Story>> {
        let partition_str = partition.as_str().to_string();
        let limit = sql_limit(limit);

        self.conn
            .call(move |conn| {
                let mut stmt = conn
                    .prepare(schema::SELECT_STORIES_BY_PARTITION)
                    .map_err(wrap_err)?;
                let rows = stmt
                    .query_map(rusqlite::params![partition_str, limit], row_to_story)
                    .map_err(wrap_err)?;

                let mut stories = Vec::new();
                for row_result in rows {
                    stories.push(row_result.map_err(wrap_err)?);
                }
                Ok(stories)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Story", partition.to_string()))
    }

    async fn create_story(&self, story: &NewStory) -> Result<Story> {
        let partition = story.partition.as_str().to_string();
        let author = format_author(&story.author);
        let content = story.content.clone();
        let date = format_datetime(&story.date);

        let id = self
            .conn
            .call(move |conn| {
                conn.execute(
                    schema::INSERT_STORY,
                    rusqlite::params![partition, author, content, date],
                )
                .map_err(wrap_err)?;
                Ok(conn.last_insert_rowid())
            })
            .await
            .map_err(|e| map_tokio_rusqlite_write_error(e, "Story", story.partition.to_string()))?;

        Ok(story.clone().into_story(id))
    }

    async fn update_story(&self, story: &Story) -> Result<()> {
        let partition = story.key.partition.as_str().to_string();
        let id = story.key.id;
        let author = format_author(&story.author);
        let content = story.content.clone();
        let date = format_datetime(&story.date);
        let up_vote = story.up_vote;
        let down_vote = story.down_vote;

        self.conn
            .call(move |conn| {
                let rows = conn
                    .execute(
                        schema::UPDATE_STORY,
                        rusqlite::params![partition, id, author, content, date, up_vote, down_vote],
                    )
                    .map_err(wrap_err)?;
                if rows == 0 {
                    Err(wrap_err(rusqlite::Error::QueryReturnedNoRows))
                } else {
                    Ok(())
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_write_error(e, "Story", story.key.to_string()))
    }

    async fn increment_vote(
        &self,
        key: &StoryKey,
        direction: VoteDirection,
    ) -> Result<Option<Story>> {
        let partition = key.partition.as_str().to_string();
        let id = key.id;
        let statement = match direction {
            VoteDirection::Up => schema::INCREMENT_UP_VOTE,
            VoteDirection::Down => schema::INCREMENT_DOWN_VOTE,
        };

        self.conn
            .call(move |conn| {
                let tx = conn.transaction().map_err(wrap_err)?;
                let rows = tx
                    .execute(statement, rusqlite::params![partition, id])
                    .map_err(wrap_err)?;
                if rows == 0 {
                    return Ok(None);
                }

                let story = tx
                    .query_row(
                        schema::SELECT_STORY_BY_KEY,
                        rusqlite::params![partition, id],
                        row_to_story,
                    )
                    .map_err(wrap_err)?;
                tx.commit().map_err(wrap_err)?;
                Ok(Some(story))
            })
            .await
            .map_err(|e| map_tokio_rusqlite_write_error(e, "Story", key.to_string()))
    }
}

#[async_trait]
impl CommentRepository for SqliteRepository {
    async fn get_comments_by_story(&self, story: &StoryKey, limit: usize) -> Result<Vec<Comment>> {
        let partition = story.partition.as_str().to_string();
        let story_id = story.id;
        let limit = sql_limit(limit);

        self.conn
            .call(move |conn| {
                let mut stmt = conn
                    .prepare(schema::SELECT_COMMENTS_BY_STORY)
                    .map_err(wrap_err)?;
                let rows = stmt
                    .query_map(rusqlite::params![partition, story_id, limit], row_to_comment)
                    .map_err(wrap_err)?;

                let mut comments = Vec::new();
                for row_result in rows {
                    comments.push(row_result.map_err(wrap_err)?);
                }
                Ok(comments)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Comment", story.to_string()))
    }

    async fn create_comment(&self, comment: &NewComment) -> Result<Comment> {
        let story_id = comment.story.id;
        let partition = comment.story.partition.as_str().to_string();
        let author = format_author(&comment.author);
        let content = comment.content.clone();
        let date = format_datetime(&comment.date);

        let id = self
            .conn
            .call(move |conn| {
                conn.execute(
                    schema::INSERT_COMMENT,
                    rusqlite::params![story_id, partition, author, content, date],
                )
                .map_err(wrap_err)?;
                Ok(conn.last_insert_rowid())
            })
            .await
            .map_err(|e| {
                map_tokio_rusqlite_write_error(e, "Comment", comment.story.to_string())
            })?;

        Ok(comment.clone().into_comment(id))
    }
}
