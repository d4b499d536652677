//! Layout planning for data tables: which body to draw (skeleton, empty
//! message or rows) and which placeholder shape each column gets.

pub const DEFAULT_SKELETON_ROWS: usize = 5;

/// Форма плейсхолдера в ячейке при загрузке.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkeletonShape {
    /// Generic bar, used for any column id not listed in [`skeleton_shape`].
    Text,
    ShortText,
    Checkbox,
    Avatar,
    Badge,
    Number,
    Actions,
}

impl SkeletonShape {
    pub fn css_class(self) -> &'static str {
        match self {
            SkeletonShape::Text => "skeleton skeleton--text",
            SkeletonShape::ShortText => "skeleton skeleton--short",
            SkeletonShape::Checkbox => "skeleton skeleton--checkbox",
            SkeletonShape::Avatar => "skeleton skeleton--avatar",
            SkeletonShape::Badge => "skeleton skeleton--badge",
            SkeletonShape::Number => "skeleton skeleton--number",
            SkeletonShape::Actions => "skeleton skeleton--actions",
        }
    }
}

/// Placeholder shape by column id.
pub fn skeleton_shape(column_id: &str) -> SkeletonShape {
    match column_id {
        "select" | "checkbox" => SkeletonShape::Checkbox,
        "avatar" | "image" | "photo" => SkeletonShape::Avatar,
        "status" | "role" | "is_active" | "is_admin" => SkeletonShape::Badge,
        "price" | "stock" | "quantity" | "amount" | "total" => SkeletonShape::Number,
        "actions" => SkeletonShape::Actions,
        "id" | "sku" | "code" | "created_at" | "updated_at" => SkeletonShape::ShortText,
        _ => SkeletonShape::Text,
    }
}

/// Column identity plus width/class hints; rendering closures live with the
/// view layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnSpec {
    pub id: String,
    pub width: Option<String>,
    pub class: Option<String>,
}

impl ColumnSpec {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            width: None,
            class: None,
        }
    }

    pub fn width(mut self, width: impl Into<String>) -> Self {
        self.width = Some(width.into());
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn style(&self) -> Option<String> {
        self.width.as_ref().map(|w| format!("width: {};", w))
    }

    pub fn cell_class(&self, base: &str) -> String {
        match &self.class {
            Some(extra) => format!("{} {}", base, extra),
            None => base.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BodyPlan {
    Skeleton {
        rows: usize,
        shapes: Vec<SkeletonShape>,
    },
    Empty {
        colspan: usize,
        /// The caller's empty-state slot replaces the default message.
        custom: bool,
    },
    Rows {
        count: usize,
    },
}

impl BodyPlan {
    pub fn placeholder_cells(&self) -> usize {
        match self {
            BodyPlan::Skeleton { rows, shapes } => rows * shapes.len(),
            _ => 0,
        }
    }
}

/// Loading wins over data: while a fetch is in flight the previous page is
/// replaced by `skeleton_rows` placeholder rows.
pub fn plan_body(
    columns: &[ColumnSpec],
    row_count: usize,
    loading: bool,
    skeleton_rows: usize,
    has_empty_slot: bool,
) -> BodyPlan {
    if loading {
        return BodyPlan::Skeleton {
            rows: skeleton_rows,
            shapes: columns.iter().map(|c| skeleton_shape(&c.id)).collect(),
        };
    }
    if row_count == 0 {
        return BodyPlan::Empty {
            colspan: columns.len().max(1),
            custom: has_empty_slot,
        };
    }
    BodyPlan::Rows { count: row_count }
}

/// One output row per item, cells in column order. Generic over the column
/// type so view layers can pass their own descriptors.
pub fn layout_rows<Col, T, C>(
    columns: &[Col],
    items: &[T],
    mut cell: impl FnMut(&Col, &T) -> C,
) -> Vec<Vec<C>> {
    items
        .iter()
        .map(|item| columns.iter().map(|col| cell(col, item)).collect())
        .collect()
}
