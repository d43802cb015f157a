use validator::Validate;

use crate::errors::AppError;

pub fn validate_payload<T: Validate>(payload: &T) -> Result<(), AppError> {
    payload.validate().map_err(AppError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::employee::NewEmployee;
    use crate::models::role::NewRole;

    #[test]
    fn accepts_present_values() {
        let role = NewRole {
            title: "Clerk".to_string(),
            salary: "40000".to_string(),
            department_id: 1,
        };
        assert!(validate_payload(&role).is_ok());
    }

    #[test]
    fn rejects_empty_role_title() {
        let role = NewRole {
            title: String::new(),
            salary: "40000".to_string(),
            department_id: 1,
        };
        match validate_payload(&role) {
            Err(AppError::ValidationError(msg)) => assert_eq!(msg, "missing value for title"),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn salary_text_is_left_to_the_database() {
        for salary in ["forty thousand", ""] {
            let role = NewRole {
                title: "Clerk".to_string(),
                salary: salary.to_string(),
                department_id: 1,
            };
            assert!(validate_payload(&role).is_ok(), "{:?}", salary);
        }
    }

    #[test]
    fn reports_every_missing_name_field() {
        let employee = NewEmployee {
            first_name: String::new(),
            last_name: String::new(),
            role_id: 1,
            manager_id: None,
        };
        match validate_payload(&employee) {
            Err(AppError::ValidationError(msg)) => {
                assert_eq!(msg, "missing value for first_name, last_name")
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }
}
