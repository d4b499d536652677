mod state;

use contracts::domain::a002_product::Product;
use contracts::shared::pagination::PageChange;
use contracts::shared::tree::{CategoryTree, SelectionSet};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a001_category::api as category_api;
use crate::domain::a002_product::api;
use crate::shared::api_utils::use_api;
use crate::shared::components::data_table::{DataTable, TableColumn};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::tree_select::CategoryTreeSelect;
use crate::shared::config::use_config;
use crate::shared::format::{format_datetime, format_money, group_thousands};
use crate::shared::icons::icon;
use state::create_state;

const TABLE_ID: &str = "products-table";
const SEARCH_DEBOUNCE_MS: u32 = 300;

fn status_badge(product: &Product) -> AnyView {
    if !product.is_active {
        view! { <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Subtle>"Скрыт"</Badge> }
            .into_any()
    } else if product.in_stock() {
        view! { <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Success>"В наличии"</Badge> }
            .into_any()
    } else {
        view! { <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Warning>"Нет в наличии"</Badge> }
            .into_any()
    }
}

#[component]
pub fn ProductsList() -> impl IntoView {
    let config = use_config();
    let api = StoredValue::new(use_api());
    let state = create_state(config.table.default_page_size);
    let tree = RwSignal::new(CategoryTree::default());
    let (loading, set_loading) = signal(false);
    let search_input = RwSignal::new(String::new());

    // Номер последнего запроса: ответы на более ранние отбрасываются
    let request_seq = StoredValue::new(0u64);
    let search_version = StoredValue::new(0u64);

    let load_products = move || {
        let query = state.with_untracked(|s| s.query());
        let seq = request_seq.get_value() + 1;
        request_seq.set_value(seq);
        let client = api.get_value();
        set_loading.set(true);
        state.update(|s| s.products_error = None);
        spawn_local(async move {
            let result = api::fetch_products(&client, &query).await;
            if request_seq.get_value() != seq {
                log::debug!("products: dropping stale response #{}", seq);
                return;
            }
            match result {
                Ok(response) => state.update(|s| s.apply_response(response)),
                Err(e) => {
                    log::error!("products: {}", e);
                    state.update(|s| {
                        s.products_error = Some(format!("Не удалось загрузить товары: {}", e))
                    });
                }
            }
            set_loading.set(false);
        });
    };

    let load_categories = move || {
        let client = api.get_value();
        spawn_local(async move {
            match category_api::fetch_category_tree(&client).await {
                Ok(loaded) => {
                    let unknown = state.with_untracked(|s| loaded.unknown_selected(&s.categories));
                    if !unknown.is_empty() {
                        log::warn!("products: selected categories no longer exist: {:?}", unknown);
                    }
                    tree.set(loaded);
                    state.update(|s| s.categories_error = None);
                }
                Err(e) => {
                    log::error!("categories: {}", e);
                    state.update(|s| {
                        s.categories_error = Some(format!("Не удалось загрузить категории: {}", e))
                    });
                }
            }
        });
    };

    Effect::new(move |_| {
        if !state.with_untracked(|s| s.is_loaded) {
            load_categories();
            load_products();
        }
    });

    Effect::new(move |prev: Option<()>| {
        let text = search_input.get();
        if prev.is_none() {
            return;
        }
        let version = search_version.get_value() + 1;
        search_version.set_value(version);
        if state.with_untracked(|s| s.search.trim() == text.trim()) {
            return;
        }
        spawn_local(async move {
            TimeoutFuture::new(SEARCH_DEBOUNCE_MS).await;
            if search_version.get_value() != version {
                return;
            }
            state.update(|s| s.set_search(text));
            load_products();
        });
    });

    let on_page_change = Callback::new(move |page: usize| {
        state.update(|s| s.change_page(PageChange::Page(page)));
        load_products();
    });

    let on_page_size_change = Callback::new(move |size: usize| {
        state.update(|s| s.change_page(PageChange::PageSize(size)));
        load_products();
    });

    let on_categories_change = Callback::new(move |selection: SelectionSet| {
        state.update(|s| s.set_categories(selection));
        load_products();
    });

    // Один запрос на оба фильтра; отложенный поиск отменяется
    let reset_filters = move || {
        search_version.update_value(|v| *v += 1);
        state.update(|s| s.reset_filters());
        search_input.set(String::new());
        load_products();
    };

    let selected_count = move || state.with(|s| s.categories.len());

    let columns = vec![
        TableColumn::new("sku", "Артикул", |p: &Product| p.sku.clone()).width("140px"),
        TableColumn::new("name", "Наименование", |p: &Product| p.name.clone()),
        TableColumn::new("categories", "Категории", move |p: &Product| {
            tree.with(|t| {
                p.category_ids
                    .iter()
                    .map(|id| t.label(*id))
                    .collect::<Vec<_>>()
                    .join(", ")
            })
        })
        .header(move || {
            view! {
                <span>"Категории"</span>
                <Show when=move || { selected_count() > 0 }>
                    <span class="table__header-filter">
                        {icon("folder")}
                        {move || selected_count().to_string()}
                    </span>
                </Show>
            }
        }),
        TableColumn::new("price", "Цена", |p: &Product| format_money(p.price))
            .width("120px")
            .class("table__cell--right"),
        TableColumn::new("stock", "Остаток", |p: &Product| group_thousands(p.stock))
            .width("100px")
            .class("table__cell--right"),
        TableColumn::new("status", "Статус", status_badge).width("140px"),
        TableColumn::new("updated_at", "Изменён", |p: &Product| format_datetime(p.updated_at))
            .width("150px"),
    ];

    let rows = Signal::derive(move || state.with(|s| s.items.clone()));
    let pagination = Signal::derive(move || state.with(|s| s.pagination));
    let selected = Signal::derive(move || state.with(|s| s.categories.clone()));
    let has_filters = move || state.with(|s| s.has_filters());

    view! {
        <div class="page" id="products--list">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Товары"</h1>
                    <Badge>{move || pagination.get().total.to_string()}</Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| {
                            load_categories();
                            load_products();
                        }
                        disabled=Signal::derive(move || loading.get())
                    >
                        {icon("refresh")}
                        {move || if loading.get() { " Загрузка..." } else { " Обновить" }}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || {
                    state
                        .with(|s| s.errors())
                        .into_iter()
                        .map(|e| view! { <div class="alert alert--error">{e}</div> })
                        .collect_view()
                }}

                <div class="filter-panel">
                    <div class="filter-panel-content">
                        <Flex gap=FlexGap::Small align=FlexAlign::Center>
                            <CategoryTreeSelect
                                tree=tree
                                selected=selected
                                on_change=on_categories_change
                            />
                            <div style="flex: 1; max-width: 320px;">
                                <Input value=search_input placeholder="Артикул или наименование..." />
                            </div>
                            <Show when=has_filters>
                                <Button
                                    appearance=ButtonAppearance::Subtle
                                    on_click=move |_| reset_filters()
                                >
                                    {icon("x")}
                                    " Сбросить"
                                </Button>
                            </Show>
                        </Flex>
                        <PaginationControls
                            pagination=pagination
                            on_page_change=on_page_change
                            on_page_size_change=on_page_size_change
                            page_size_options=config.table.page_size_options.clone()
                        />
                    </div>
                </div>

                <DataTable
                    columns=columns
                    rows=rows
                    loading=loading
                    skeleton_rows=config.table.skeleton_rows
                    empty=move || {
                        if has_filters() {
                            view! {
                                <div class="table__empty-state">
                                    <span>"Нет товаров по выбранным фильтрам"</span>
                                    <Button
                                        appearance=ButtonAppearance::Secondary
                                        on_click=move |_| reset_filters()
                                    >
                                        "Сбросить фильтры"
                                    </Button>
                                </div>
                            }
                            .into_any()
                        } else {
                            view! { <span>"Товары не найдены"</span> }.into_any()
                        }
                    }
                    table_id=TABLE_ID
                />
            </div>
        </div>
    }
}
