//! Pure rendering of Javadoc blocks.
//!
//! Every comment variant is a [`CommentKind`]; [`render`] turns a kind plus a
//! [`CommentContext`] into the exact lines to attach, opening and closing
//! markers included. Nothing here touches an element or the clock.

use crate::metadata::{ColumnMetadata, TableMetadata};
use crate::options::CommentSettings;

/// Token a merge tool looks for to recognize generated elements.
pub const NEW_ELEMENT_TAG: &str = "@mbg.generated";

/// Suffix marking an element as exempt from deletion during merge.
pub const DO_NOT_DELETE_TAG: &str = "do_not_delete_during_merge";

pub const OPEN: &str = "/**";
pub const CLOSE: &str = " */";
pub const SPACER: &str = " *";

/// The comment variants the builder knows how to write.
#[derive(Debug, Clone, Copy)]
pub enum CommentKind<'a> {
    /// Field backed by a column.
    ColumnField {
        table: &'a TableMetadata,
        column: &'a ColumnMetadata,
    },
    /// Field describing the table itself.
    TableField { table: &'a TableMetadata },
    /// The model class generated for a table.
    ModelClass { table: &'a TableMetadata },
    /// Inner class, without a merge tag.
    InnerClass { table: &'a TableMetadata },
    /// Inner class with a merge tag.
    MarkedInnerClass {
        table: &'a TableMetadata,
        mark_as_do_not_delete: bool,
    },
    InnerEnum { table: &'a TableMetadata },
    Getter {
        table: &'a TableMetadata,
        column: &'a ColumnMetadata,
    },
    /// `parameter` is the name of the setter's first declared parameter.
    Setter {
        table: &'a TableMetadata,
        column: &'a ColumnMetadata,
        parameter: &'a str,
    },
    GeneralMethod { method_name: &'a str },
}

impl CommentKind<'_> {
    /// Short name used in log output.
    pub fn label(&self) -> &'static str {
        match self {
            CommentKind::ColumnField { .. } => "column field",
            CommentKind::TableField { .. } => "table field",
            CommentKind::ModelClass { .. } => "model class",
            CommentKind::InnerClass { .. } => "inner class",
            CommentKind::MarkedInnerClass { .. } => "marked inner class",
            CommentKind::InnerEnum { .. } => "inner enum",
            CommentKind::Getter { .. } => "getter",
            CommentKind::Setter { .. } => "setter",
            CommentKind::GeneralMethod { .. } => "general method",
        }
    }
}

/// Everything rendering depends on besides the element's own metadata.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommentContext<'a> {
    pub settings: CommentSettings,
    /// Date to print, already `None` when dates are suppressed.
    pub date: Option<&'a str>,
}

/// Renders the full comment block for `kind`.
///
/// Returns no lines when all comments are suppressed.
pub fn render(kind: &CommentKind<'_>, ctx: &CommentContext<'_>) -> Vec<String> {
    if ctx.settings.suppress_all_comments {
        return Vec::new();
    }

    let mut lines = vec![OPEN.to_string()];

    match *kind {
        CommentKind::ColumnField { column, .. } => {
            lines.push(content_line(column.remarks()));
            push_tag(&mut lines, false, ctx.date);
        }
        CommentKind::TableField { table } => {
            lines.push(content_line(&table.qualified_name()));
        }
        CommentKind::ModelClass { table } => {
            // Tokens are joined even when empty; a missing date leaves a trailing space.
            lines.push(content_line(&format!(
                "{} {} {}",
                table.remarks(),
                table.table_type,
                ctx.date.unwrap_or_default()
            )));
        }
        CommentKind::InnerClass { table } => {
            lines.push(content_line(&format!(
                "{} {}",
                table.qualified_name(),
                ctx.date.unwrap_or_default()
            )));
        }
        CommentKind::MarkedInnerClass {
            table,
            mark_as_do_not_delete,
        } => {
            lines.push(content_line(&table.qualified_name()));
            // No @author line here: generated inner classes never carried one.
            push_tag(&mut lines, mark_as_do_not_delete, ctx.date);
        }
        CommentKind::InnerEnum { table } => {
            push_tag(&mut lines, false, ctx.date);
            lines.push(content_line(&table.qualified_name()));
        }
        CommentKind::Getter { column, .. } => {
            lines.push(content_line(column.remarks()));
            lines.push(content_line(&format!(
                "@return {} {}",
                column.actual_column_name,
                column.remarks()
            )));
            push_tag(&mut lines, false, ctx.date);
        }
        CommentKind::Setter {
            column, parameter, ..
        } => {
            lines.push(content_line(column.remarks()));
            lines.push(content_line(&format!(
                "@param {} {}",
                parameter,
                column.remarks()
            )));
            push_tag(&mut lines, false, ctx.date);
        }
        CommentKind::GeneralMethod { method_name } => {
            // The merge tag block stays off for general methods.
            lines.push(content_line(&format!("{} {}", NEW_ELEMENT_TAG, method_name)));
        }
    }

    lines.push(CLOSE.to_string());
    lines
}

/// Builds the merge tag line, e.g. ` * @mbg.generated do_not_delete_during_merge 2024-01-01`.
pub fn merge_tag_line(mark_as_do_not_delete: bool, date: Option<&str>) -> String {
    let mut line = format!(" * {}", NEW_ELEMENT_TAG);
    if mark_as_do_not_delete {
        line.push(' ');
        line.push_str(DO_NOT_DELETE_TAG);
    }
    if let Some(date) = date {
        line.push(' ');
        line.push_str(date);
    }
    line
}

fn push_tag(lines: &mut Vec<String>, mark_as_do_not_delete: bool, date: Option<&str>) {
    lines.push(SPACER.to_string());
    lines.push(merge_tag_line(mark_as_do_not_delete, date));
}

fn content_line(text: &str) -> String {
    format!(" * {}", text)
}
