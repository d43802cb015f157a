use crate::utils::table::TableRow;

#[derive(sqlx::FromRow, Debug, Clone, PartialEq)]
pub struct Department {
    pub id: i32,
    pub name: String,
}

/// Inserted as typed; the schema decides what a valid name is.
#[derive(Debug)]
pub struct NewDepartment {
    pub name: String,
}

impl TableRow for Department {
    fn headers() -> &'static [&'static str] {
        &["id", "name"]
    }

    fn cells(&self) -> Vec<Option<String>> {
        vec![Some(self.id.to_string()), Some(self.name.clone())]
    }
}
