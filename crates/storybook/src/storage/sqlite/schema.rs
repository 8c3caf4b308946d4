//! SQLite schema definitions and SQL query constants.
//!
//! Pure data, no I/O. Dates are stored as RFC 3339 strings with a fixed
//! nanosecond precision so that text ordering matches chronological ordering.

/// SQL statement to create all tables.
pub const CREATE_TABLES: &str = r#"
PRAGMA foreign_keys = ON;

-- Stories table, one row per entry, grouped by storybook partition
CREATE TABLE IF NOT EXISTS stories (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    partition TEXT NOT NULL,
    author TEXT,
    content TEXT NOT NULL,
    date TEXT NOT NULL,
    up_vote INTEGER NOT NULL DEFAULT 0,
    down_vote INTEGER NOT NULL DEFAULT 0
);

-- Comments table
CREATE TABLE IF NOT EXISTS comments (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    story_id INTEGER NOT NULL,
    partition TEXT NOT NULL,
    author TEXT,
    content TEXT NOT NULL,
    date TEXT NOT NULL,
    FOREIGN KEY (story_id) REFERENCES stories(id) ON DELETE CASCADE
);

-- Indexes for the feed and comment queries
CREATE INDEX IF NOT EXISTS idx_stories_partition_date ON stories(partition, date);
CREATE INDEX IF NOT EXISTS idx_comments_story_date ON comments(partition, story_id, date);
"#;

// Story queries
pub const INSERT_STORY: &str = r#"
INSERT INTO stories (partition, author, content, date, up_vote, down_vote)
VALUES (?1, ?2, ?3, ?4, 0, 0)
"#;

pub const SELECT_STORY_BY_KEY: &str = r#"
SELECT id, partition, author, content, date, up_vote, down_vote
FROM stories
WHERE partition = ?1 AND id = ?2
"#;

pub const SELECT_STORIES_BY_PARTITION: &str = r#"
SELECT id, partition, author, content, date, up_vote, down_vote
FROM stories
WHERE partition = ?1
ORDER BY date DESC, id DESC
LIMIT ?2
"#;

pub const UPDATE_STORY: &str = r#"
UPDATE stories
SET author = ?3, content = ?4, date = ?5, up_vote = ?6, down_vote = ?7
WHERE partition = ?1 AND id = ?2
"#;

pub const INCREMENT_UP_VOTE: &str = r#"
UPDATE stories
SET up_vote = up_vote + 1
WHERE partition = ?1 AND id = ?2
"#;

pub const INCREMENT_DOWN_VOTE: &str = r#"
UPDATE stories
SET down_vote = down_vote + 1
WHERE partition = ?1 AND id = ?2
"#;

// Comment queries
pub const INSERT_COMMENT: &str = r#"
INSERT INTO comments (story_id, partition, author, content, date)
VALUES (?1, ?2, ?3, ?4, ?5)
"#;

pub const SELECT_COMMENTS_BY_STORY: &str = r#"
SELECT id, story_id, partition, author, content, date
FROM comments
WHERE partition = ?1 AND story_id = ?2
ORDER BY date DESC, id DESC
LIMIT ?3
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_tables_is_valid_sql() {
        assert!(CREATE_TABLES.contains("CREATE TABLE IF NOT EXISTS stories"));
        assert!(CREATE_TABLES.contains("CREATE TABLE IF NOT EXISTS comments"));
    }

    #[test]
    fn test_lookups_are_scoped_by_partition() {
        for query in [
            SELECT_STORY_BY_KEY,
            SELECT_STORIES_BY_PARTITION,
            UPDATE_STORY,
            INCREMENT_UP_VOTE,
            INCREMENT_DOWN_VOTE,
            SELECT_COMMENTS_BY_STORY,
        ] {
            assert!(query.contains("partition = ?1"), "unscoped query: {query}");
        }
    }

    #[test]
    fn test_increments_happen_in_sql() {
        assert!(INCREMENT_UP_VOTE.contains("up_vote = up_vote + 1"));
        assert!(INCREMENT_DOWN_VOTE.contains("down_vote = down_vote + 1"));
    }
}
