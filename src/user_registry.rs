use crate::domain::NewUser;
use anyhow::Context;
use sqlx::PgPool;

#[tracing::instrument(skip(db_pool))]
pub async fn create_users_table(db_pool: &PgPool) -> Result<(), anyhow::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS usuarios (
            usuario_id TEXT PRIMARY KEY,
            nombre TEXT NOT NULL,
            email TEXT
        )
        "#,
    )
    .execute(db_pool)
    .await
    .context("Failed to create the users table")?;

    Ok(())
}

/// Inserts the user unless one with the same id exists; the first write wins.
///
/// Returns whether a row was created.
#[tracing::instrument(
    name = "Register user",
    skip(db_pool, new_user),
    fields(user_id = %new_user.user_id)
)]
pub async fn register_user(db_pool: &PgPool, new_user: &NewUser) -> Result<bool, anyhow::Error> {
    create_users_table(db_pool).await?;

    let result = sqlx::query(
        r#"
        INSERT INTO usuarios (usuario_id, nombre, email)
        VALUES ($1, $2, $3)
        ON CONFLICT (usuario_id) DO NOTHING
        "#,
    )
    .bind(&new_user.user_id)
    .bind(new_user.name.as_ref())
    .bind(new_user.email.as_deref())
    .execute(db_pool)
    .await
    .context("Failed to insert the user")?;

    Ok(result.rows_affected() == 1)
}
