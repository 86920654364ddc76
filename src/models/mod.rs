//! Data models
//!
//! Input requests and the layout model handed to renderers.

mod panel;
mod product;

pub use panel::{
    CaloriesRow, ColumnHeadings, ColumnPositions, FontWeight, Footer, LayoutRow, PanelLayout, Rect,
    Rule, Separator, TextAlign, TextItem, TitleBlock, VerticalSeparator,
};
pub use product::{sample_request, PanelRequest, ProductMeta};
