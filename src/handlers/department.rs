use log::{debug, info};
use sqlx::PgPool;

use crate::db;
use crate::errors::AppError;
use crate::models::department::NewDepartment;
use crate::prompt::Prompter;
use crate::utils::table::Table;

pub async fn view_departments<P: Prompter + ?Sized>(pool: &PgPool, prompter: &mut P) -> Result<(), AppError> {
    let departments = db::department::list_departments(pool).await?;
    debug!("Fetched {} departments", departments.len());
    prompter.show(&Table::from_rows(&departments).render())
}

pub async fn add_department<P: Prompter + ?Sized>(pool: &PgPool, prompter: &mut P) -> Result<(), AppError> {
    let new_department = NewDepartment {
        name: prompter.input("Enter the name of the department:")?,
    };

    let department = db::department::insert_department(pool, &new_department).await?;
    info!("Inserted department {} ({})", department.name, department.id);

    prompter.show(&format!("Department {} added!", department.name))
}
