use serde::{Deserialize, Serialize};

use super::pagination::Pagination;

/// Ответ списочных эндпоинтов. Единственная форма, которую принимает фронтенд.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    pub items: Vec<T>,
    pub total: usize,
    pub page: usize,
    pub page_size: usize,
}

impl<T> PaginatedResponse<T> {
    pub fn pagination(&self) -> Pagination {
        Pagination {
            page: self.page,
            page_size: self.page_size,
            total: self.total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_response() {
        let json = r#"{"items": ["a", "b"], "total": 45, "page": 3, "page_size": 20}"#;
        let resp: PaginatedResponse<String> = serde_json::from_str(json).unwrap();
        assert_eq!(resp.items.len(), 2);
        assert_eq!(resp.pagination().total_pages(), 3);
    }

    #[test]
    fn test_missing_total_is_an_error() {
        let json = r#"{"items": [], "page": 1, "page_size": 20}"#;
        assert!(serde_json::from_str::<PaginatedResponse<String>>(json).is_err());
    }
}
