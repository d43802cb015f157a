use log::{debug, info};
use sqlx::PgPool;

use crate::db;
use crate::errors::AppError;
use crate::handlers::role::role_choices;
use crate::models::employee::{Employee, NewEmployee};
use crate::prompt::{self, Choice, Prompter};
use crate::utils::table::Table;
use crate::utils::validation::validate_payload;

pub const NO_MANAGER: &str = "None";

pub async fn view_employees<P: Prompter + ?Sized>(pool: &PgPool, prompter: &mut P) -> Result<(), AppError> {
    let employees = db::employee::list_employees(pool).await?;
    debug!("Fetched {} employees", employees.len());
    prompter.show(&Table::from_rows(&employees).render())
}

/// Employee choices labelled "first last".
pub fn employee_choices(employees: &[Employee]) -> Vec<Choice<i32>> {
    prompt::labelled_by_id(employees.iter().map(|e| (e.id, e.full_name())))
}

/// Manager choices: "None" first, then every employee.
pub fn manager_choices(employees: &[Employee]) -> Vec<Choice<Option<i32>>> {
    std::iter::once(Choice::new(NO_MANAGER, None))
        .chain(
            employee_choices(employees)
                .into_iter()
                .map(|choice| Choice::new(choice.label, Some(choice.value))),
        )
        .collect()
}

pub async fn add_employee<P: Prompter + ?Sized>(pool: &PgPool, prompter: &mut P) -> Result<(), AppError> {
    let roles = db::role::role_choices(pool).await?;
    if roles.is_empty() {
        return Err(AppError::NotFound(
            "No roles yet; add a role before adding an employee".to_string(),
        ));
    }
    let employees = db::employee::employee_choices(pool).await?;

    let first_name = prompter.input("Enter the employee's first name:")?;
    let last_name = prompter.input("Enter the employee's last name:")?;
    let role_id = prompt::select(prompter, "Select the employee's role:", &role_choices(&roles))?;
    let manager_id = prompt::select(
        prompter,
        "Select the employee's manager:",
        &manager_choices(&employees),
    )?;

    let new_employee = NewEmployee {
        first_name,
        last_name,
        role_id,
        manager_id,
    };
    validate_payload(&new_employee)?;

    let employee = db::employee::insert_employee(pool, &new_employee).await?;
    info!(
        "Inserted employee {} ({}) with role {} and manager {:?}",
        employee.full_name(),
        employee.id,
        employee.role_id,
        employee.manager_id
    );

    prompter.show(&format!("Employee {} added!", employee.full_name()))
}

pub async fn update_employee_role<P: Prompter + ?Sized>(pool: &PgPool, prompter: &mut P) -> Result<(), AppError> {
    let employees = db::employee::employee_choices(pool).await?;
    if employees.is_empty() {
        return Err(AppError::NotFound("No employees to update".to_string()));
    }
    let roles = db::role::role_choices(pool).await?;
    if roles.is_empty() {
        return Err(AppError::NotFound("No roles to assign".to_string()));
    }

    let employee_id = prompt::select(
        prompter,
        "Select the employee to update:",
        &employee_choices(&employees),
    )?;
    let role_id = prompt::select(prompter, "Select the employee's new role:", &role_choices(&roles))?;

    db::employee::update_employee_role(pool, employee_id, role_id).await?;
    info!("Employee {} now has role {}", employee_id, role_id);

    prompter.show("Employee's role updated!")
}
