//! Multi-select over the category hierarchy.
//!
//! All selection changes go through [`CategoryTree::toggle`]; the component
//! owns only the dropdown, search text and expansion state and reports the
//! new selection through `on_change`.

use contracts::shared::tree::{is_selected, CategoryTree, ExpansionState, NodeId, SelectionSet, VisibleRow};
use leptos::prelude::*;

use crate::shared::icons::icon;

#[component]
pub fn CategoryTreeSelect(
    #[prop(into)] tree: Signal<CategoryTree>,
    #[prop(into)] selected: Signal<SelectionSet>,
    on_change: Callback<SelectionSet>,
    #[prop(optional, into)] disabled: Signal<bool>,
) -> impl IntoView {
    let (open, set_open) = signal(false);
    let (query, set_query) = signal(String::new());
    let expansion = RwSignal::new(ExpansionState::default());

    // Новое дерево: в открытом контроле раскрыто всё, в закрытом только корни
    Effect::new(move |_| {
        let is_open = open.get_untracked();
        tree.with(|t| expansion.set(ExpansionState::for_tree_open(t, is_open)));
    });

    let toggle_open = move |_| {
        if !open.get_untracked() {
            tree.with_untracked(|t| expansion.update(|e| e.expand_all(t.roots(), t.nodes())));
        } else {
            set_query.set(String::new());
        }
        set_open.update(|v| *v = !*v);
    };

    let toggle_node = move |id: NodeId| {
        let next = tree.with_untracked(|t| selected.with_untracked(|s| t.toggle(id, s)));
        on_change.run(next);
    };

    let rows = Memo::new(move |_| {
        let q = query.get();
        tree.with(|t| {
            let filter = t.matching_ids(&q);
            expansion.with(|e| t.visible_rows(e, filter.as_ref()))
        })
    });

    let select_visible = move |_| {
        let ids: Vec<NodeId> = rows.with_untracked(|r| r.iter().map(|row| row.id).collect());
        let next = tree.with_untracked(|t| selected.with_untracked(|s| t.select_many(&ids, s)));
        on_change.run(next);
    };

    let summary = move || tree.with(|t| selected.with(|s| t.selection_summary(s)));

    let render_row = move |row: VisibleRow| {
        let id = row.id;
        let indent = format!("padding-left: {}px;", row.depth * 16 + 4);
        let toggle: AnyView = if row.has_children {
            view! {
                <button
                    class="tree-toggle"
                    on:click=move |_| expansion.update(|e| e.toggle_expand(id))
                    disabled=move || !query.get().trim().is_empty()
                >
                    {if row.expanded { icon("chevron-down") } else { icon("chevron-right") }}
                </button>
            }
            .into_any()
        } else {
            view! { <span class="tree-toggle tree-toggle--leaf"></span> }.into_any()
        };

        view! {
            <div class="tree-select__row" style=indent>
                {toggle}
                <label class="tree-select__label">
                    <input
                        type="checkbox"
                        prop:checked=move || selected.with(|s| is_selected(id, s))
                        on:change=move |_| toggle_node(id)
                    />
                    <span>{row.label}</span>
                </label>
            </div>
        }
    };

    view! {
        <div class="tree-select" class:tree-select--open=move || open.get()>
            <button
                class="tree-select__trigger"
                on:click=toggle_open
                disabled=move || disabled.get()
            >
                {icon("folder")}
                <span>{summary}</span>
                {icon("chevron-down")}
            </button>

            <Show when=move || open.get()>
                <div class="tree-select__dropdown">
                    <div class="tree-select__search">
                        <input
                            type="text"
                            placeholder="Поиск категории..."
                            prop:value=move || query.get()
                            on:input=move |ev| set_query.set(event_target_value(&ev))
                        />
                        <Show when=move || !query.get().is_empty()>
                            <button class="tree-select__clear-search" on:click=move |_| set_query.set(String::new())>
                                {icon("x")}
                            </button>
                        </Show>
                    </div>

                    <div class="tree-select__list">
                        {move || {
                            let visible = rows.get();
                            if visible.is_empty() {
                                view! { <div class="tree-select__empty">"Ничего не найдено"</div> }.into_any()
                            } else {
                                visible.into_iter().map(render_row).collect_view().into_any()
                            }
                        }}
                    </div>

                    <div class="tree-select__footer">
                        <button class="button button--secondary" on:click=select_visible>
                            "Выбрать видимые"
                        </button>
                        <button
                            class="button button--secondary"
                            on:click=move |_| on_change.run(SelectionSet::new())
                            disabled=move || selected.with(|s| s.is_empty())
                        >
                            "Очистить"
                        </button>
                        <button class="button button--primary" on:click=toggle_open>
                            "Готово"
                        </button>
                    </div>
                </div>
            </Show>
        </div>
    }
}
