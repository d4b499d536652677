use contracts::domain::a002_product::{Product, ProductListQuery};
use contracts::shared::list::PaginatedResponse;
use contracts::shared::pagination::{PageChange, Pagination};
use contracts::shared::tree::SelectionSet;
use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct ProductsListState {
    pub items: Vec<Product>,
    pub pagination: Pagination,
    pub search: String,
    pub categories: SelectionSet,
    pub is_loaded: bool,
    /// Ошибки загрузки хранятся раздельно: новый запрос товаров не стирает
    /// ошибку загрузки категорий.
    pub products_error: Option<String>,
    pub categories_error: Option<String>,
}

impl ProductsListState {
    pub fn new(page_size: usize) -> Self {
        Self {
            items: Vec::new(),
            pagination: Pagination::new(page_size),
            search: String::new(),
            categories: SelectionSet::new(),
            is_loaded: false,
            products_error: None,
            categories_error: None,
        }
    }

    pub fn query(&self) -> ProductListQuery {
        ProductListQuery::new(
            self.pagination.page,
            self.pagination.page_size,
            &self.categories,
            &self.search,
        )
    }

    pub fn change_page(&mut self, change: PageChange) {
        self.pagination = self.pagination.apply(change);
    }

    /// Фильтр поменялся: снова с первой страницы.
    pub fn set_categories(&mut self, categories: SelectionSet) {
        self.categories = categories;
        self.pagination.page = 1;
    }

    pub fn set_search(&mut self, search: String) {
        self.search = search;
        self.pagination.page = 1;
    }

    pub fn has_filters(&self) -> bool {
        !self.categories.is_empty() || !self.search.trim().is_empty()
    }

    /// Both filters cleared in one step, so a single request covers them.
    pub fn reset_filters(&mut self) {
        self.categories.clear();
        self.search.clear();
        self.pagination.page = 1;
    }

    pub fn errors(&self) -> Vec<String> {
        self.categories_error
            .iter()
            .chain(self.products_error.iter())
            .cloned()
            .collect()
    }

    pub fn apply_response(&mut self, response: PaginatedResponse<Product>) {
        self.pagination = response.pagination().clamped();
        self.items = response.items;
        self.is_loaded = true;
        self.products_error = None;
    }
}

pub fn create_state(page_size: usize) -> RwSignal<ProductsListState> {
    RwSignal::new(ProductsListState::new(page_size))
}
