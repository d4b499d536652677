//! Generic data table: header from column descriptors, then skeleton rows,
//! an empty-state row or one row per item, as decided by
//! [`contracts::shared::table::plan_body`].

use contracts::shared::table::{layout_rows, plan_body, BodyPlan, ColumnSpec};
use leptos::prelude::*;
use std::sync::Arc;

type HeaderFn = Arc<dyn Fn() -> AnyView + Send + Sync>;
type CellFn<T> = Arc<dyn Fn(&T) -> AnyView + Send + Sync>;

pub struct TableColumn<T> {
    pub spec: ColumnSpec,
    title: &'static str,
    /// Replaces the plain `title` header when set.
    header: Option<HeaderFn>,
    cell: CellFn<T>,
}

impl<T> Clone for TableColumn<T> {
    fn clone(&self) -> Self {
        Self {
            spec: self.spec.clone(),
            title: self.title,
            header: self.header.clone(),
            cell: Arc::clone(&self.cell),
        }
    }
}

impl<T: 'static> TableColumn<T> {
    /// Column with a plain text header.
    pub fn new<F, V>(id: &str, title: &'static str, cell: F) -> Self
    where
        F: Fn(&T) -> V + Send + Sync + 'static,
        V: IntoView + 'static,
    {
        Self {
            spec: ColumnSpec::new(id),
            title,
            header: None,
            cell: Arc::new(move |item| cell(item).into_any()),
        }
    }

    /// Replaces the header renderer (checkbox headers, sort indicators...).
    pub fn header<F, V>(mut self, header: F) -> Self
    where
        F: Fn() -> V + Send + Sync + 'static,
        V: IntoView + 'static,
    {
        self.header = Some(Arc::new(move || header().into_any()));
        self
    }

    pub fn title(&self) -> &'static str {
        self.title
    }

    pub fn has_custom_header(&self) -> bool {
        self.header.is_some()
    }

    fn render_header(&self) -> AnyView {
        match &self.header {
            Some(header) => header(),
            None => {
                let title = self.title;
                view! { <span>{title}</span> }.into_any()
            }
        }
    }

    pub fn width(mut self, width: &str) -> Self {
        self.spec = self.spec.width(width);
        self
    }

    pub fn class(mut self, class: &str) -> Self {
        self.spec = self.spec.class(class);
        self
    }
}

#[component]
pub fn DataTable<T>(
    /// Column descriptors, rendered in order
    columns: Vec<TableColumn<T>>,
    /// Current page of rows
    #[prop(into)]
    rows: Signal<Vec<T>>,
    /// While true, placeholder rows replace the data
    #[prop(into)]
    loading: Signal<bool>,
    /// Number of placeholder rows while loading
    #[prop(optional)]
    skeleton_rows: Option<usize>,
    /// Custom empty-state content
    #[prop(optional, into)]
    empty: Option<ViewFn>,
    /// Message for the default empty state
    #[prop(optional, into)]
    empty_message: Option<String>,
    #[prop(optional, into)]
    table_id: Option<String>,
) -> impl IntoView
where
    T: Clone + Send + Sync + 'static,
{
    let skeleton_rows = skeleton_rows.unwrap_or(contracts::shared::table::DEFAULT_SKELETON_ROWS);
    let empty_message = empty_message.unwrap_or_else(|| "Нет данных".to_string());
    let specs: Vec<ColumnSpec> = columns.iter().map(|c| c.spec.clone()).collect();
    let columns = StoredValue::new(columns);

    let header = columns.with_value(|cols| {
        cols.iter()
            .map(|col| {
                view! {
                    <th
                        class=col.spec.cell_class("table__header-cell")
                        style=col.spec.style()
                    >
                        {col.render_header()}
                    </th>
                }
            })
            .collect_view()
    });

    let body = move || {
        let has_empty_slot = empty.is_some();
        rows.with(|items| match plan_body(&specs, items.len(), loading.get(), skeleton_rows, has_empty_slot) {
            BodyPlan::Skeleton { rows, shapes } => (0..rows)
                .map(|_| {
                    view! {
                        <tr class="table__row table__row--skeleton" aria-hidden="true">
                            {shapes
                                .iter()
                                .map(|shape| view! {
                                    <td class="table__cell"><span class=shape.css_class()></span></td>
                                })
                                .collect_view()}
                        </tr>
                    }
                })
                .collect_view()
                .into_any(),
            BodyPlan::Empty { colspan, custom } => {
                let content = match (&empty, custom) {
                    (Some(slot), true) => slot.run(),
                    _ => view! { <span>{empty_message.clone()}</span> }.into_any(),
                };
                view! {
                    <tr class="table__row">
                        <td class="table__cell table__cell--empty" colspan=colspan.to_string()>
                            {content}
                        </td>
                    </tr>
                }
                .into_any()
            }
            BodyPlan::Rows { .. } => columns.with_value(|cols| {
                layout_rows(cols, items, |col, item| {
                    view! {
                        <td class=col.spec.cell_class("table__cell") style=col.spec.style()>
                            {(col.cell)(item)}
                        </td>
                    }
                })
                .into_iter()
                .map(|cells| view! { <tr class="table__row">{cells}</tr> })
                .collect_view()
                .into_any()
            }),
        })
    };

    view! {
        <div class="table">
            <table id=table_id class="table__data table--striped">
                <thead class="table__head">
                    <tr>{header}</tr>
                </thead>
                <tbody>{body}</tbody>
            </table>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone)]
    struct Row {
        name: String,
    }

    #[test]
    fn test_column_header_defaults_to_title() {
        let col = TableColumn::new("name", "Наименование", |r: &Row| r.name.clone()).width("200px");
        assert_eq!(col.title(), "Наименование");
        assert!(!col.has_custom_header());
        assert_eq!(col.spec.style().as_deref(), Some("width: 200px;"));
    }

    #[test]
    fn test_custom_header_replaces_title() {
        let col = TableColumn::new("name", "Наименование", |r: &Row| r.name.clone())
            .header(|| "Наименование *");
        assert!(col.has_custom_header());
        assert!(col.clone().has_custom_header());
        assert_eq!(col.title(), "Наименование");
    }
}
