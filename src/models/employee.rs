use validator::Validate;

use crate::utils::table::TableRow;

#[derive(sqlx::FromRow, Debug, Clone, PartialEq)]
pub struct Employee {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub role_id: i32,
    pub manager_id: Option<i32>,
}

impl Employee {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// An employee with role, department and manager resolved to display values.
#[derive(sqlx::FromRow, Debug, Clone, PartialEq)]
pub struct EmployeeListing {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub title: Option<String>,
    pub department: Option<String>,
    pub salary: Option<String>,
    pub manager: Option<String>,
}

#[derive(Debug, Validate)]
pub struct NewEmployee {
    #[validate(length(min = 1))]
    pub first_name: String,
    #[validate(length(min = 1))]
    pub last_name: String,
    pub role_id: i32,
    pub manager_id: Option<i32>,
}

impl TableRow for EmployeeListing {
    fn headers() -> &'static [&'static str] {
        &["id", "first_name", "last_name", "title", "department", "salary", "manager"]
    }

    fn cells(&self) -> Vec<Option<String>> {
        vec![
            Some(self.id.to_string()),
            Some(self.first_name.clone()),
            Some(self.last_name.clone()),
            self.title.clone(),
            self.department.clone(),
            self.salary.clone(),
            self.manager.clone(),
        ]
    }
}
