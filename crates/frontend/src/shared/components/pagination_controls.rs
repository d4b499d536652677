use crate::shared::icons::icon;
use contracts::shared::pagination::{PageChange, Pagination};
use leptos::prelude::*;

/// PaginationControls component - reusable pagination controls
///
/// Every button goes through [`Pagination::request_page`], so clicks on the
/// current page or past the last page never reach `on_page_change`.
#[component]
pub fn PaginationControls(
    /// Current pagination window (1-based page)
    #[prop(into)]
    pagination: Signal<Pagination>,

    /// Callback with the requested page
    on_page_change: Callback<usize>,

    /// Callback with the requested page size
    on_page_size_change: Callback<usize>,

    /// Available page size options (optional, defaults to [10, 20, 50, 100])
    #[prop(optional)]
    page_size_options: Option<Vec<usize>>,
) -> impl IntoView {
    let page_size_opts = page_size_options.unwrap_or_else(|| vec![10, 20, 50, 100]);

    let go_to = move |target: usize| {
        if let Some(PageChange::Page(page)) = pagination.get_untracked().request_page(target) {
            on_page_change.run(page);
        }
    };

    let last_page = move || pagination.get().total_pages();

    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| go_to(1)
                disabled=move || !pagination.get().has_prev()
                title="Первая страница"
            >
                {icon("chevrons-left")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| go_to(pagination.get_untracked().page.saturating_sub(1))
                disabled=move || !pagination.get().has_prev()
                title="Предыдущая страница"
            >
                {icon("chevron-left")}
            </button>
            <span class="pagination-info">
                {move || pagination.get().label()}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| go_to(pagination.get_untracked().page + 1)
                disabled=move || !pagination.get().has_next()
                title="Следующая страница"
            >
                {icon("chevron-right")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| go_to(pagination.get_untracked().total_pages())
                disabled=move || pagination.get().page >= last_page()
                title="Последняя страница"
            >
                {icon("chevrons-right")}
            </button>
            <select
                class="page-size-select"
                on:change=move |ev| {
                    let Ok(size) = event_target_value(&ev).parse::<usize>() else {
                        return;
                    };
                    if let Some(PageChange::PageSize(size)) =
                        pagination.get_untracked().request_page_size(size)
                    {
                        on_page_size_change.run(size);
                    }
                }
                prop:value=move || pagination.get().page_size.to_string()
            >
                {page_size_opts.into_iter().map(|size| {
                    view! {
                        <option
                            value=size.to_string()
                            selected=move || pagination.get().page_size == size
                        >
                            {size.to_string()}
                        </option>
                    }
                }).collect_view()}
            </select>
        </div>
    }
}
