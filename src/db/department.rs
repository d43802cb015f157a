use sqlx::PgPool;

use crate::errors::AppError;
use crate::models::department::{Department, NewDepartment};

pub async fn list_departments(pool: &PgPool) -> Result<Vec<Department>, AppError> {
    let departments = sqlx::query_as::<_, Department>("SELECT id, name FROM department")
        .fetch_all(pool)
        .await?;
    Ok(departments)
}

/// Departments in id order, for building selection lists.
pub async fn department_choices(pool: &PgPool) -> Result<Vec<Department>, AppError> {
    let departments = sqlx::query_as::<_, Department>("SELECT id, name FROM department ORDER BY id")
        .fetch_all(pool)
        .await?;
    Ok(departments)
}

pub async fn insert_department(pool: &PgPool, new_department: &NewDepartment) -> Result<Department, AppError> {
    let department = sqlx::query_as::<_, Department>(
        "INSERT INTO department (name) VALUES ($1) RETURNING id, name",
    )
    .bind(&new_department.name)
    .fetch_one(pool)
    .await?;
    Ok(department)
}
