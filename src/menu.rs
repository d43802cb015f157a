use log::{debug, error, warn};
use sqlx::PgPool;

use crate::errors::AppError;
use crate::handlers;
use crate::prompt::{self, Choice, Prompter};

pub const MENU_MESSAGE: &str = "What would you like to do?";
pub const FAREWELL: &str = "Goodbye!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    ViewDepartments,
    ViewRoles,
    ViewEmployees,
    AddDepartment,
    AddRole,
    AddEmployee,
    UpdateEmployeeRole,
    Exit,
}

impl Action {
    pub const ALL: [Action; 8] = [
        Action::ViewDepartments,
        Action::ViewRoles,
        Action::ViewEmployees,
        Action::AddDepartment,
        Action::AddRole,
        Action::AddEmployee,
        Action::UpdateEmployeeRole,
        Action::Exit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Action::ViewDepartments => "View all departments",
            Action::ViewRoles => "View all roles",
            Action::ViewEmployees => "View all employees",
            Action::AddDepartment => "Add a department",
            Action::AddRole => "Add a role",
            Action::AddEmployee => "Add an employee",
            Action::UpdateEmployeeRole => "Update an employee role",
            Action::Exit => "Exit",
        }
    }

    pub fn choices() -> Vec<Choice<Action>> {
        Action::ALL
            .iter()
            .map(|action| Choice::new(action.label(), *action))
            .collect()
    }
}

pub async fn dispatch<P: Prompter + ?Sized>(pool: &PgPool, prompter: &mut P, action: Action) -> Result<(), AppError> {
    match action {
        Action::ViewDepartments => handlers::department::view_departments(pool, prompter).await,
        Action::ViewRoles => handlers::role::view_roles(pool, prompter).await,
        Action::ViewEmployees => handlers::employee::view_employees(pool, prompter).await,
        Action::AddDepartment => handlers::department::add_department(pool, prompter).await,
        Action::AddRole => handlers::role::add_role(pool, prompter).await,
        Action::AddEmployee => handlers::employee::add_employee(pool, prompter).await,
        Action::UpdateEmployeeRole => handlers::employee::update_employee_role(pool, prompter).await,
        Action::Exit => Ok(()),
    }
}

/// Shows the menu until the operator exits or closes input.
///
/// Invalid input and empty selection lists are reported and the menu comes
/// back; any other handler error ends the loop and is returned.
pub async fn run<P: Prompter + ?Sized>(pool: &PgPool, prompter: &mut P) -> Result<(), AppError> {
    let choices = Action::choices();

    loop {
        let action = match prompt::select(prompter, MENU_MESSAGE, &choices) {
            Ok(action) => action,
            Err(AppError::InputClosed) => Action::Exit,
            Err(err) => return Err(err),
        };

        if action == Action::Exit {
            prompter.show(FAREWELL)?;
            return Ok(());
        }

        debug!("Dispatching {:?}", action);
        match dispatch(pool, prompter, action).await {
            Ok(()) => {}
            Err(AppError::InputClosed) => {
                prompter.show(FAREWELL)?;
                return Ok(());
            }
            Err(err) if err.is_recoverable() => {
                warn!("{} did not complete: {}", action.label(), err);
                prompter.show(&err.to_string())?;
            }
            Err(err) => {
                error!("{} failed: {}", action.label(), err);
                return Err(err);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_lists_actions_in_order() {
        let labels: Vec<String> = Action::choices().into_iter().map(|c| c.label).collect();
        assert_eq!(
            labels,
            vec![
                "View all departments",
                "View all roles",
                "View all employees",
                "Add a department",
                "Add a role",
                "Add an employee",
                "Update an employee role",
                "Exit",
            ]
        );
    }

    #[test]
    fn exit_is_last() {
        assert_eq!(Action::ALL.last(), Some(&Action::Exit));
        assert_eq!(Action::choices()[7].value, Action::Exit);
    }
}
