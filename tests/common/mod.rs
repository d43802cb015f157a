#![allow(dead_code)]

use std::collections::VecDeque;
use std::str::FromStr;
use std::time::Duration;

use employee_tracker::db;
use employee_tracker::errors::AppError;
use employee_tracker::prompt::Prompter;
use sqlx::postgres::PgConnectOptions;
use sqlx::{Executor, PgPool};

const SCHEMA_SQL: &str = include_str!("../../sql/schema.sql");

pub enum Answer {
    Text(String),
    Pick(String),
    Nth(usize),
}

pub fn text(value: &str) -> Answer {
    Answer::Text(value.to_string())
}

pub fn pick(label: &str) -> Answer {
    Answer::Pick(label.to_string())
}

pub fn nth(index: usize) -> Answer {
    Answer::Nth(index)
}

/// Replays canned answers and records everything the handlers print.
pub struct ScriptedPrompter {
    answers: VecDeque<Answer>,
    pub shown: Vec<String>,
    pub offered: Vec<Vec<String>>,
}

impl ScriptedPrompter {
    pub fn new(answers: Vec<Answer>) -> Self {
        ScriptedPrompter {
            answers: answers.into(),
            shown: Vec::new(),
            offered: Vec::new(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }

    pub fn output(&self) -> String {
        self.shown.join("\n")
    }
}

impl Prompter for ScriptedPrompter {
    fn input(&mut self, message: &str) -> Result<String, AppError> {
        match self.answers.pop_front() {
            Some(Answer::Text(value)) => Ok(value.trim().to_string()),
            Some(_) => panic!("expected a text answer for {:?}", message),
            None => Err(AppError::InputClosed),
        }
    }

    fn select_index(&mut self, message: &str, labels: &[String]) -> Result<usize, AppError> {
        self.offered.push(labels.to_vec());
        match self.answers.pop_front() {
            Some(Answer::Pick(label)) => Ok(labels
                .iter()
                .position(|l| *l == label)
                .unwrap_or_else(|| panic!("{:?} not offered for {:?}: {:?}", label, message, labels))),
            Some(Answer::Nth(index)) => {
                assert!(index < labels.len(), "only {} choices for {:?}", labels.len(), message);
                Ok(index)
            }
            Some(Answer::Text(_)) => panic!("expected a selection for {:?}", message),
            None => Err(AppError::InputClosed),
        }
    }

    fn show(&mut self, text: &str) -> Result<(), AppError> {
        self.shown.push(text.to_string());
        Ok(())
    }
}

/// A throwaway schema holding fresh tracker tables.
pub struct TestDb {
    pub pool: PgPool,
    admin: PgPool,
    schema: String,
}

/// Connects to `TEST_DATABASE_URL`; `None` when it is not set.
pub async fn test_db() -> Option<TestDb> {
    let url = match std::env::var("TEST_DATABASE_URL") {
        Ok(url) if !url.trim().is_empty() => url,
        _ => {
            eprintln!("TEST_DATABASE_URL not set; skipping database test");
            return None;
        }
    };

    let options = PgConnectOptions::from_str(&url).expect("TEST_DATABASE_URL is not a valid postgres URL");
    let timeout = Duration::from_secs(10);
    let admin = db::connect_with(options.clone(), timeout)
        .await
        .expect("connect to test database");

    let schema = format!("tracker_test_{}", rand::random::<u32>());
    sqlx::query(&format!("CREATE SCHEMA {}", schema))
        .execute(&admin)
        .await
        .expect("create test schema");

    let pool = db::connect_with(options.options([("search_path", schema.as_str())]), timeout)
        .await
        .expect("connect with test search_path");
    (&pool).execute(SCHEMA_SQL).await.expect("apply schema.sql");

    Some(TestDb { pool, admin, schema })
}

impl TestDb {
    pub async fn teardown(self) {
        self.pool.close().await;
        let _ = sqlx::query(&format!("DROP SCHEMA {} CASCADE", self.schema))
            .execute(&self.admin)
            .await;
        self.admin.close().await;
    }
}
