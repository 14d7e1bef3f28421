//! The comment builder invoked by the generator for each element.

use chrono::{Local, NaiveDate};

use crate::dom::{
    CompilationUnit, Field, InnerClass, InnerEnum, JavaElement, Method, TopLevelClass, XmlElement,
};
use crate::metadata::{ColumnMetadata, TableMetadata};
use crate::options::{CommentOptions, CommentSettings};
use crate::render::{render, CommentContext, CommentKind};

/// Format of the date written into comments.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Writes Javadoc comments onto generated elements.
///
/// The date is fixed when the builder is created and reused for every
/// comment. Options may be amended with [`configure`](Self::configure) at
/// any time; the change applies to comments written afterwards.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use mbgdoc::{ColumnMetadata, CommentBuilder, Method, QualifiedTable, TableMetadata};
///
/// let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let builder = CommentBuilder::with_date(date);
///
/// let table = TableMetadata::new(QualifiedTable::new("users"));
/// let column = ColumnMetadata::new("email").with_remarks("User email");
/// let mut getter = Method::new("getEmail");
///
/// builder.add_getter_comment(&mut getter, &table, &column);
/// assert_eq!(getter.javadoc_lines()[2], " * @return email User email");
/// ```
#[derive(Debug, Clone)]
pub struct CommentBuilder {
    options: CommentOptions,
    settings: CommentSettings,
    current_date: String,
}

impl CommentBuilder {
    /// Creates a builder dated with today's local date.
    pub fn new() -> Self {
        Self::with_date(Local::now().date_naive())
    }

    /// Creates a builder with an explicit date.
    pub fn with_date(date: NaiveDate) -> Self {
        Self {
            options: CommentOptions::new(),
            settings: CommentSettings::default(),
            current_date: date.format(DATE_FORMAT).to_string(),
        }
    }

    /// Merges `options` into the retained options and re-derives the flags.
    pub fn configure(&mut self, options: &CommentOptions) {
        self.options.merge(options);
        self.settings = CommentSettings::from_options(&self.options);
        tracing::debug!(
            suppress_date = self.settings.suppress_date,
            suppress_all_comments = self.settings.suppress_all_comments,
            "Configured comment builder with {} option(s)",
            self.options.len()
        );
    }

    pub fn options(&self) -> &CommentOptions {
        &self.options
    }

    pub fn settings(&self) -> CommentSettings {
        self.settings
    }

    /// The construction-time date, or `None` while dates are suppressed.
    pub fn date_string(&self) -> Option<&str> {
        if self.settings.suppress_date {
            None
        } else {
            Some(self.current_date.as_str())
        }
    }

    fn context(&self) -> CommentContext<'_> {
        CommentContext {
            settings: self.settings,
            date: self.date_string(),
        }
    }

    fn emit<E: JavaElement>(&self, element: &mut E, kind: CommentKind<'_>) {
        let lines = render(&kind, &self.context());
        if lines.is_empty() {
            return;
        }

        tracing::trace!("Adding {} comment ({} lines)", kind.label(), lines.len());
        for line in lines {
            element.add_javadoc_line(line);
        }
    }

    /// Comments a field generated for a column.
    pub fn add_field_comment(
        &self,
        field: &mut Field,
        table: &TableMetadata,
        column: &ColumnMetadata,
    ) {
        self.emit(field, CommentKind::ColumnField { table, column });
    }

    /// Comments a field that is not tied to a column.
    pub fn add_table_field_comment(&self, field: &mut Field, table: &TableMetadata) {
        self.emit(field, CommentKind::TableField { table });
    }

    pub fn add_model_class_comment(&self, class: &mut TopLevelClass, table: &TableMetadata) {
        self.emit(class, CommentKind::ModelClass { table });
    }

    pub fn add_class_comment(&self, class: &mut InnerClass, table: &TableMetadata) {
        self.emit(class, CommentKind::InnerClass { table });
    }

    /// Comments an inner class and tags it for the merge tool.
    pub fn add_class_comment_marked(
        &self,
        class: &mut InnerClass,
        table: &TableMetadata,
        mark_as_do_not_delete: bool,
    ) {
        self.emit(
            class,
            CommentKind::MarkedInnerClass {
                table,
                mark_as_do_not_delete,
            },
        );
    }

    pub fn add_enum_comment(&self, inner_enum: &mut InnerEnum, table: &TableMetadata) {
        self.emit(inner_enum, CommentKind::InnerEnum { table });
    }

    pub fn add_getter_comment(
        &self,
        method: &mut Method,
        table: &TableMetadata,
        column: &ColumnMetadata,
    ) {
        self.emit(method, CommentKind::Getter { table, column });
    }

    /// Comments a setter, naming its first parameter in the `@param` line.
    ///
    /// Setters are expected to declare exactly one parameter. A method with
    /// none is left uncommented and a warning is logged.
    pub fn add_setter_comment(
        &self,
        method: &mut Method,
        table: &TableMetadata,
        column: &ColumnMetadata,
    ) {
        if self.settings.suppress_all_comments {
            return;
        }

        let Some(parameter) = method.parameters().first().map(|p| p.name.clone()) else {
            tracing::warn!(
                "Setter '{}' for column '{}' declares no parameters; skipping comment",
                method.name(),
                column.actual_column_name
            );
            return;
        };

        self.emit(
            method,
            CommentKind::Setter {
                table,
                column,
                parameter: &parameter,
            },
        );
    }

    /// Comments any other generated method. Table metadata is unused.
    pub fn add_general_method_comment(&self, method: &mut Method, _table: &TableMetadata) {
        let method_name = method.name().to_string();
        self.emit(
            method,
            CommentKind::GeneralMethod {
                method_name: &method_name,
            },
        );
    }

    /// No file-level comment is written.
    pub fn add_java_file_comment(&self, _unit: &mut CompilationUnit) {}

    /// No comment is written on XML mapper elements.
    pub fn add_comment(&self, _element: &mut XmlElement) {}

    /// No comment is written on the XML mapper root.
    pub fn add_root_comment(&self, _root: &mut XmlElement) {}
}

impl Default for CommentBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{SUPPRESS_ALL_COMMENTS, SUPPRESS_DATE};

    fn builder() -> CommentBuilder {
        CommentBuilder::with_date(NaiveDate::from_ymd_opt(2024, 3, 9).expect("valid date"))
    }

    #[test]
    fn date_is_zero_padded() {
        assert_eq!(builder().date_string(), Some("2024-03-09"));
    }

    #[test]
    fn date_suppression_hides_date() {
        let mut builder = builder();
        builder.configure(&[(SUPPRESS_DATE, "true")].into_iter().collect());
        assert_eq!(builder.date_string(), None);
    }

    #[test]
    fn later_configure_amends_earlier_options() {
        let mut builder = builder();
        builder.configure(&[(SUPPRESS_DATE, "true")].into_iter().collect());
        builder.configure(&[(SUPPRESS_ALL_COMMENTS, "true")].into_iter().collect());

        let settings = builder.settings();
        assert!(settings.suppress_date);
        assert!(settings.suppress_all_comments);

        builder.configure(&[(SUPPRESS_DATE, "false")].into_iter().collect());
        assert!(!builder.settings().suppress_date);
        assert!(builder.settings().suppress_all_comments);
    }

    #[test]
    fn unrecognized_options_are_retained() {
        let mut builder = builder();
        builder.configure(&[("addRemarkComments", "true")].into_iter().collect());
        assert_eq!(builder.options().get("addRemarkComments"), Some("true"));
        assert_eq!(builder.settings(), CommentSettings::default());
    }

    #[test]
    fn no_op_hooks_leave_elements_untouched() {
        let builder = builder();
        let mut unit = CompilationUnit::default();
        let mut xml = XmlElement::default();

        builder.add_java_file_comment(&mut unit);
        builder.add_comment(&mut xml);
        builder.add_root_comment(&mut xml);

        assert!(unit.file_comment_lines.is_empty());
        assert!(xml.comment_lines.is_empty());
    }
}
