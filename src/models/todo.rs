use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::utils::errors::AppError;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Todo {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub resolved: bool,
    pub created_at: DateTime<Utc>,
}

/// Raw create/edit form body, exactly as the browser posts it.
#[derive(Deserialize, Debug)]
pub struct TodoForm {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub due_date: String,
}

/// Validated fields handed to the store on create and edit.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct TodoFields {
    pub title: String,
    pub description: String,
    pub due_date: Option<NaiveDate>,
}

impl TodoForm {
    pub fn parse(body: &str) -> Result<Self, AppError> {
        serde_urlencoded::from_str(body).map_err(|e| AppError::InvalidForm(e.to_string()))
    }

    /// A blank `due_date` means "no deadline"; anything else must be `YYYY-MM-DD`.
    pub fn into_fields(self) -> Result<TodoFields, AppError> {
        let due = self.due_date.trim();
        let due_date = if due.is_empty() {
            None
        } else {
            let date = NaiveDate::parse_from_str(due, "%Y-%m-%d")
                .map_err(|_| AppError::InvalidForm(format!("invalid due_date: {}", due)))?;
            Some(date)
        };
        Ok(TodoFields {
            title: self.title,
            description: self.description,
            due_date,
        })
    }
}

impl TodoFields {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            due_date: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(body: &str) -> Result<TodoFields, AppError> {
        TodoForm::parse(body)?.into_fields()
    }

    #[test]
    fn full_form_is_decoded() {
        let f = fields("title=Buy+milk&description=two%20litres&due_date=2026-11-02").unwrap();
        assert_eq!(f.title, "Buy milk");
        assert_eq!(f.description, "two litres");
        assert_eq!(f.due_date, NaiveDate::from_ymd_opt(2026, 11, 2));
    }

    #[test]
    fn optional_fields_default_to_empty() {
        let f = fields("title=Only+a+title").unwrap();
        assert_eq!(f, TodoFields::titled("Only a title"));
    }

    #[test]
    fn blank_due_date_means_none() {
        let f = fields("title=x&description=&due_date=++").unwrap();
        assert_eq!(f.due_date, None);
    }

    #[test]
    fn empty_title_is_accepted() {
        let f = fields("title=&description=d").unwrap();
        assert_eq!(f.title, "");
    }

    #[test]
    fn invalid_utf8_is_replaced_not_rejected() {
        let f = fields("title=%FFmilk").unwrap();
        assert_eq!(f.title, "\u{FFFD}milk");
    }

    #[test]
    fn missing_title_is_rejected() {
        assert!(matches!(fields("description=d"), Err(AppError::InvalidForm(_))));
    }

    #[test]
    fn malformed_due_date_is_rejected() {
        let err = fields("title=x&due_date=next+tuesday").unwrap_err();
        assert!(matches!(err, AppError::InvalidForm(msg) if msg.contains("next tuesday")));
    }

    #[test]
    fn todo_reads_postgrest_row() {
        let row = serde_json::json!({
            "id": 7,
            "title": "Water plants",
            "description": "",
            "due_date": null,
            "resolved": false,
            "created_at": "2026-10-18T09:30:00.123456+00:00"
        });
        let todo: Todo = serde_json::from_value(row).unwrap();
        assert_eq!(todo.id, 7);
        assert_eq!(todo.due_date, None);
        assert!(!todo.resolved);
    }
}
