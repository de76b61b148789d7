use sqlx::PgPool;

use crate::utils::password::hash_password;

/// Creates a super-admin account with every permission granted.
///
/// Unlike the HTTP setup endpoint this works even when admins already
/// exist, so an operator can always recover access from the shell.
pub async fn create_admin(
    db: &PgPool,
    username: &str,
    email: &str,
    password: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let hashed_password =
        hash_password(password).map_err(|e| format!("Failed to hash password: {}", e.error))?;

    let result = sqlx::query(
        r#"
        INSERT INTO admins (
            username, email, password, role,
            manage_users, manage_requests, handle_complaints, view_analytics, system_settings
        )
        VALUES ($1, $2, $3, 'super-admin', TRUE, TRUE, TRUE, TRUE, TRUE)
        ON CONFLICT (username) DO NOTHING
        "#,
    )
    .bind(username)
    .bind(email)
    .bind(hashed_password)
    .execute(db)
    .await?;

    if result.rows_affected() == 0 {
        return Err("Admin with this username already exists".into());
    }

    Ok(())
}
