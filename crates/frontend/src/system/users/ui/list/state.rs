use contracts::shared::pagination::{PageChange, Pagination};
use contracts::system::users::User;
use leptos::prelude::*;

/// Весь список грузится один раз, страница вырезается на клиенте.
#[derive(Clone, Debug)]
pub struct UsersListState {
    pub all: Vec<User>,
    pub search_query: String,
    pub pagination: Pagination,
    pub is_loaded: bool,
}

impl UsersListState {
    pub fn new(page_size: usize) -> Self {
        Self {
            all: Vec::new(),
            search_query: String::new(),
            pagination: Pagination::new(page_size),
            is_loaded: false,
        }
    }

    pub fn filtered(&self) -> Vec<&User> {
        self.all
            .iter()
            .filter(|u| u.matches(&self.search_query))
            .collect()
    }

    /// Rows of the current page, after search.
    pub fn page_items(&self) -> Vec<User> {
        let filtered = self.filtered();
        self.pagination
            .slice(&filtered)
            .iter()
            .map(|u| (*u).clone())
            .collect()
    }

    fn recalc(&mut self) {
        let total = self.filtered().len();
        self.pagination = self.pagination.with_total(total);
    }

    pub fn set_users(&mut self, mut users: Vec<User>) {
        users.sort_by(|a, b| a.username.to_lowercase().cmp(&b.username.to_lowercase()));
        self.all = users;
        self.is_loaded = true;
        self.recalc();
    }

    pub fn set_search(&mut self, query: String) {
        self.search_query = query;
        self.pagination.page = 1;
        self.recalc();
    }

    pub fn change_page(&mut self, change: PageChange) {
        self.pagination = self.pagination.apply(change);
    }
}

pub fn create_state(page_size: usize) -> RwSignal<UsersListState> {
    RwSignal::new(UsersListState::new(page_size))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn user(n: usize) -> User {
        User {
            id: format!("u{}", n),
            username: format!("user{:02}", n),
            email: Some(format!("user{}@acme.io", n)),
            full_name: None,
            is_active: true,
            is_admin: n == 0,
            created_at: Utc::now(),
            last_login_at: None,
        }
    }

    #[test]
    fn test_client_side_pages() {
        let mut state = UsersListState::new(20);
        state.set_users((0..45).map(user).collect());
        assert_eq!(state.pagination.total, 45);
        assert_eq!(state.page_items().len(), 20);

        state.change_page(PageChange::Page(3));
        let page = state.page_items();
        assert_eq!(page.len(), 5);
        assert_eq!(page[0].username, "user40");
    }

    #[test]
    fn test_search_resets_page_and_total() {
        let mut state = UsersListState::new(20);
        state.set_users((0..45).map(user).collect());
        state.change_page(PageChange::Page(2));

        state.set_search("user1".into());
        assert_eq!(state.pagination.page, 1);
        // user01, user10..user19
        assert_eq!(state.pagination.total, 11);
        assert_eq!(state.page_items().len(), 11);
    }

    #[test]
    fn test_reload_with_fewer_users_clamps_page() {
        let mut state = UsersListState::new(20);
        state.set_users((0..45).map(user).collect());
        state.change_page(PageChange::Page(3));
        state.set_users((0..10).map(user).collect());
        assert_eq!(state.pagination.page, 1);
        assert_eq!(state.page_items().len(), 10);
    }
}
