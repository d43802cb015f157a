use sqlx::PgPool;

use crate::errors::AppError;
use crate::models::role::{NewRole, Role, RoleListing};

pub async fn list_roles(pool: &PgPool) -> Result<Vec<RoleListing>, AppError> {
    let roles = sqlx::query_as::<_, RoleListing>(
        r#"
        SELECT
            role.id,
            role.title,
            department.name AS department,
            role.salary::TEXT AS salary
        FROM role
        JOIN department ON role.department_id = department.id
        "#,
    )
    .fetch_all(pool)
    .await?;
    Ok(roles)
}

pub async fn role_choices(pool: &PgPool) -> Result<Vec<Role>, AppError> {
    let roles = sqlx::query_as::<_, Role>("SELECT id, title, department_id FROM role ORDER BY id")
        .fetch_all(pool)
        .await?;
    Ok(roles)
}

pub async fn insert_role(pool: &PgPool, new_role: &NewRole) -> Result<Role, AppError> {
    let role = sqlx::query_as::<_, Role>(
        r#"
        INSERT INTO role (title, salary, department_id)
        VALUES ($1, $2::TEXT::NUMERIC, $3)
        RETURNING id, title, department_id
        "#,
    )
    .bind(&new_role.title)
    .bind(new_role.salary.trim())
    .bind(new_role.department_id)
    .fetch_one(pool)
    .await?;
    Ok(role)
}
