use log::{debug, info};
use sqlx::PgPool;

use crate::db;
use crate::errors::AppError;
use crate::models::role::{NewRole, Role};
use crate::prompt::{self, Choice, Prompter};
use crate::utils::table::Table;
use crate::utils::validation::validate_payload;

pub async fn view_roles<P: Prompter + ?Sized>(pool: &PgPool, prompter: &mut P) -> Result<(), AppError> {
    let roles = db::role::list_roles(pool).await?;
    debug!("Fetched {} roles", roles.len());
    prompter.show(&Table::from_rows(&roles).render())
}

/// Role choices labelled by title.
pub fn role_choices(roles: &[Role]) -> Vec<Choice<i32>> {
    prompt::labelled_by_id(roles.iter().map(|role| (role.id, role.title.clone())))
}

pub async fn add_role<P: Prompter + ?Sized>(pool: &PgPool, prompter: &mut P) -> Result<(), AppError> {
    let departments = db::department::department_choices(pool).await?;
    if departments.is_empty() {
        return Err(AppError::NotFound(
            "No departments yet; add a department before adding a role".to_string(),
        ));
    }
    let choices = prompt::labelled_by_id(departments.iter().map(|d| (d.id, d.name.clone())));

    let title = prompter.input("Enter the title of the role:")?;
    let salary = prompter.input("Enter the salary for the role:")?;
    let department_id = prompt::select(prompter, "Which department is this role in?", &choices)?;

    let new_role = NewRole {
        title,
        salary,
        department_id,
    };
    validate_payload(&new_role)?;

    let role = db::role::insert_role(pool, &new_role).await?;
    info!("Inserted role {} ({}) in department {}", role.title, role.id, role.department_id);

    prompter.show(&format!("Role {} added!", role.title))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_choices_use_titles() {
        let roles = vec![
            Role {
                id: 1,
                title: "Clerk".to_string(),
                department_id: 1,
            },
            Role {
                id: 2,
                title: "Manager".to_string(),
                department_id: 1,
            },
        ];
        let choices = role_choices(&roles);
        assert_eq!(choices, vec![Choice::new("Clerk", 1), Choice::new("Manager", 2)]);
    }

    #[test]
    fn same_title_in_two_departments_stays_distinct() {
        let roles = vec![
            Role {
                id: 3,
                title: "Lead".to_string(),
                department_id: 1,
            },
            Role {
                id: 4,
                title: "Lead".to_string(),
                department_id: 2,
            },
        ];
        let labels: Vec<String> = role_choices(&roles).into_iter().map(|c| c.label).collect();
        assert_eq!(labels, vec!["Lead (#3)", "Lead (#4)"]);
    }
}
