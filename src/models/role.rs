use validator::Validate;

use crate::utils::table::TableRow;

#[derive(sqlx::FromRow, Debug, Clone, PartialEq)]
pub struct Role {
    pub id: i32,
    pub title: String,
    pub department_id: i32,
}

/// A role joined with its department's name.
#[derive(sqlx::FromRow, Debug, Clone, PartialEq)]
pub struct RoleListing {
    pub id: i32,
    pub title: String,
    pub department: String,
    pub salary: String,
}

/// Salary stays as the operator typed it; the insert casts it to numeric.
#[derive(Debug, Validate)]
pub struct NewRole {
    #[validate(length(min = 1))]
    pub title: String,
    pub salary: String,
    pub department_id: i32,
}

impl TableRow for RoleListing {
    fn headers() -> &'static [&'static str] {
        &["id", "title", "department", "salary"]
    }

    fn cells(&self) -> Vec<Option<String>> {
        vec![
            Some(self.id.to_string()),
            Some(self.title.clone()),
            Some(self.department.clone()),
            Some(self.salary.clone()),
        ]
    }
}
