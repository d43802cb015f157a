use sqlx::PgPool;

use crate::errors::AppError;
use crate::models::employee::{Employee, EmployeeListing, NewEmployee};

pub async fn list_employees(pool: &PgPool) -> Result<Vec<EmployeeListing>, AppError> {
    let employees = sqlx::query_as::<_, EmployeeListing>(
        r#"
        SELECT
            employee.id,
            employee.first_name,
            employee.last_name,
            role.title,
            department.name AS department,
            role.salary::TEXT AS salary,
            manager.first_name || ' ' || manager.last_name AS manager
        FROM employee
        LEFT JOIN role ON employee.role_id = role.id
        LEFT JOIN department ON role.department_id = department.id
        LEFT JOIN employee manager ON employee.manager_id = manager.id
        "#,
    )
    .fetch_all(pool)
    .await?;
    Ok(employees)
}

pub async fn employee_choices(pool: &PgPool) -> Result<Vec<Employee>, AppError> {
    let employees = sqlx::query_as::<_, Employee>(
        "SELECT id, first_name, last_name, role_id, manager_id FROM employee ORDER BY id",
    )
    .fetch_all(pool)
    .await?;
    Ok(employees)
}

pub async fn insert_employee(pool: &PgPool, new_employee: &NewEmployee) -> Result<Employee, AppError> {
    let employee = sqlx::query_as::<_, Employee>(
        r#"
        INSERT INTO employee (first_name, last_name, role_id, manager_id)
        VALUES ($1, $2, $3, $4)
        RETURNING id, first_name, last_name, role_id, manager_id
        "#,
    )
    .bind(&new_employee.first_name)
    .bind(&new_employee.last_name)
    .bind(new_employee.role_id)
    .bind(new_employee.manager_id)
    .fetch_one(pool)
    .await?;
    Ok(employee)
}

pub async fn update_employee_role(pool: &PgPool, employee_id: i32, role_id: i32) -> Result<(), AppError> {
    let result = sqlx::query("UPDATE employee SET role_id = $1 WHERE id = $2")
        .bind(role_id)
        .bind(employee_id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound(format!("Employee {} no longer exists", employee_id)));
    }
    Ok(())
}
