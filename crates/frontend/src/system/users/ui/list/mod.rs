mod state;

use contracts::shared::pagination::PageChange;
use contracts::system::users::User;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::shared::api_utils::use_api;
use crate::shared::components::data_table::{DataTable, TableColumn};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::config::use_config;
use crate::shared::format::format_datetime;
use crate::shared::icons::icon;
use crate::system::auth::guard::RequireAdmin;
use crate::system::users::api;
use state::create_state;

const TABLE_ID: &str = "sys-users-table";

#[component]
pub fn UsersListPage() -> impl IntoView {
    view! {
        <RequireAdmin>
            <UsersList />
        </RequireAdmin>
    }
}

fn role_badge(user: &User) -> AnyView {
    if user.is_admin {
        view! { <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Brand>"Админ"</Badge> }.into_any()
    } else {
        view! { <Badge appearance=BadgeAppearance::Outline>"Пользователь"</Badge> }.into_any()
    }
}

fn status_badge(user: &User) -> AnyView {
    if user.is_active {
        view! { <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Success>"Активен"</Badge> }.into_any()
    } else {
        view! { <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Danger>"Заблокирован"</Badge> }.into_any()
    }
}

#[component]
fn UsersList() -> impl IntoView {
    let config = use_config();
    let api = StoredValue::new(use_api());
    let state = create_state(config.table.default_page_size);
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);
    let search_signal = RwSignal::new(String::new());

    let load_data = move || {
        let client = api.get_value();
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::fetch_users(&client).await {
                Ok(data) => {
                    log::debug!("users: loaded {}", data.len());
                    state.update(|s| s.set_users(data));
                }
                Err(e) => {
                    log::error!("users: {}", e);
                    set_error.set(Some(format!("Не удалось загрузить пользователей: {}", e)));
                }
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| {
        if !state.with_untracked(|s| s.is_loaded) {
            load_data();
        }
    });

    let apply_search = move || {
        state.update(|s| s.set_search(search_signal.get_untracked()));
    };

    let on_page_change = Callback::new(move |page: usize| {
        state.update(|s| s.change_page(PageChange::Page(page)));
    });

    let on_page_size_change = Callback::new(move |size: usize| {
        state.update(|s| s.change_page(PageChange::PageSize(size)));
    });

    let columns = vec![
        TableColumn::new("username", "Логин", |u: &User| {
            view! { <span style="font-weight: 500;">{u.username.clone()}</span> }
        })
        .width("160px"),
        TableColumn::new("full_name", "ФИО", |u: &User| u.full_name.clone().unwrap_or_default()),
        TableColumn::new("email", "Email", |u: &User| u.email.clone().unwrap_or_default()),
        TableColumn::new("role", "Роль", role_badge).width("130px"),
        TableColumn::new("status", "Статус", status_badge).width("130px"),
        TableColumn::new("created_at", "Создан", |u: &User| format_datetime(Some(u.created_at)))
            .width("150px"),
        TableColumn::new("last_login_at", "Последний вход", |u: &User| format_datetime(u.last_login_at))
            .width("150px"),
    ];

    let rows = Signal::derive(move || state.with(|s| s.page_items()));
    let pagination = Signal::derive(move || state.with(|s| s.pagination));

    view! {
        <div class="page" id="sys_users--list">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Пользователи"</h1>
                    <Badge>{move || pagination.get().total.to_string()}</Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load_data()
                        disabled=Signal::derive(move || loading.get())
                    >
                        {icon("refresh")}
                        {move || if loading.get() { " Загрузка..." } else { " Обновить" }}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <div class="filter-panel">
                    <div class="filter-panel-content">
                        <Flex gap=FlexGap::Small align=FlexAlign::End>
                            <div style="flex: 1; max-width: 320px;">
                                <Input value=search_signal placeholder="Логин, ФИО или Email..." />
                            </div>
                            <Button
                                appearance=ButtonAppearance::Primary
                                on_click=move |_| apply_search()
                                disabled=Signal::derive(move || loading.get())
                            >
                                "Найти"
                            </Button>
                            <Button
                                appearance=ButtonAppearance::Secondary
                                on_click=move |_| {
                                    search_signal.set(String::new());
                                    apply_search();
                                }
                            >
                                "Сбросить"
                            </Button>
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
                    empty_message="Пользователи не найдены"
                    table_id=TABLE_ID
                />
            </div>
        </div>
    }
}
