use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::common::{format_timestamp, generate_timestamp};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Department {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDepartment {
    pub name: String,
    pub description: Option<String>,
}

impl Department {
    pub fn update(&mut self, name: Option<String>, description: Option<Option<String>>) {
        if let Some(name) = name {
            self.name = name;
        }
        if let Some(description) = description {
            self.description = description;
        }
        self.updated_at = generate_timestamp();
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DepartmentView {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub product_count: u64,
    pub created_at: String,
    pub updated_at: String,
}

impl DepartmentView {
    pub fn new(department: &Department, product_count: u64) -> Self {
        Self {
            id: department.id,
            name: department.name.clone(),
            description: department.description.clone(),
            product_count,
            created_at: format_timestamp(&department.created_at),
            updated_at: format_timestamp(&department.updated_at),
        }
    }
}

/// Short department header used next to a department's product listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DepartmentSummary {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
}

impl From<&Department> for DepartmentSummary {
    fn from(department: &Department) -> Self {
        Self {
            id: department.id,
            name: department.name.clone(),
            description: department.description.clone(),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::department;
    use super::*;

    #[test]
    fn test_update_keeps_omitted_fields() {
        let mut d = department(1, "Books");
        d.description = Some("Paper".to_string());

        d.update(Some("Novels".to_string()), None);
        assert_eq!(d.name, "Novels");
        assert_eq!(d.description.as_deref(), Some("Paper"));

        d.update(None, Some(None));
        assert_eq!(d.name, "Novels");
        assert_eq!(d.description, None);
    }

    #[test]
    fn test_view_carries_product_count() {
        let view = DepartmentView::new(&department(2, "Garden"), 12);
        assert_eq!(view.product_count, 12);
        assert_eq!(view.created_at, "2024-01-01T00:00:00Z");
    }
}
