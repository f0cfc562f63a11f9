use sqlx::MySqlPool;

pub async fn init_db(database_url: &str) -> MySqlPool {
    let pool = MySqlPool::connect(database_url)
        .await
        .expect("Failed to connect to database");

    ensure_schema(&pool)
        .await
        .expect("Failed to prepare attendance table");

    pool
}

/// Uniqueness of (student_name, date, subject) lives here; the mark handler
/// maps the key violation to its conflict response.
async fn ensure_schema(pool: &MySqlPool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS attendance (
            id BIGINT UNSIGNED NOT NULL AUTO_INCREMENT PRIMARY KEY,
            student_id VARCHAR(64) NOT NULL DEFAULT '',
            student_name VARCHAR(255) NOT NULL,
            subject VARCHAR(255) NOT NULL,
            date DATE NOT NULL,
            time VARCHAR(32) NOT NULL,
            status VARCHAR(32) NOT NULL DEFAULT 'present',
            UNIQUE KEY uq_attendance_day (student_name, date, subject)
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}
