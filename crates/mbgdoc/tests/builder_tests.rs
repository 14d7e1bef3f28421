//! Comment layout for every element kind written by the builder

use std::io;
use std::sync::{Arc, Mutex};

use chrono::NaiveDate;
use mbgdoc::{
    ColumnMetadata, CommentBuilder, CommentOptions, Field, InnerClass, InnerEnum, Method,
    Parameter, QualifiedTable, TableMetadata, TopLevelClass, SUPPRESS_ALL_COMMENTS, SUPPRESS_DATE,
};
use tracing_subscriber::fmt::MakeWriter;

fn builder() -> CommentBuilder {
    CommentBuilder::with_date(NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date"))
}

fn undated_builder() -> CommentBuilder {
    let mut builder = builder();
    builder.configure(&[(SUPPRESS_DATE, "true")].into_iter().collect());
    builder
}

fn customer_table() -> TableMetadata {
    TableMetadata::new(QualifiedTable::new("customer").with_schema("shop"))
        .with_remarks("Customer table")
        .with_table_type("TABLE")
}

fn email_column() -> ColumnMetadata {
    ColumnMetadata::new("email").with_remarks("User email")
}

#[test]
fn test_column_field_comment() {
    let mut field = Field::new("email");
    builder().add_field_comment(&mut field, &customer_table(), &email_column());

    assert_eq!(
        field.javadoc_lines(),
        [
            "/**",
            " * User email",
            " *",
            " * @mbg.generated 2024-01-01",
            " */"
        ]
    );
}

#[test]
fn test_table_field_comment() {
    let mut field = Field::new("table");
    builder().add_table_field_comment(&mut field, &customer_table());

    assert_eq!(field.javadoc_lines(), ["/**", " * shop.customer", " */"]);
}

#[test]
fn test_model_class_comment_with_date() {
    let mut class = TopLevelClass::new("Customer");
    builder().add_model_class_comment(&mut class, &customer_table());

    assert_eq!(
        class.javadoc_lines(),
        ["/**", " * Customer table TABLE 2024-01-01", " */"]
    );
}

#[test]
fn test_model_class_comment_without_date_keeps_trailing_space() {
    let mut class = TopLevelClass::new("Customer");
    undated_builder().add_model_class_comment(&mut class, &customer_table());

    assert_eq!(class.javadoc_lines().len(), 3);
    assert_eq!(class.javadoc_lines()[1], " * Customer table TABLE ");
}

#[test]
fn test_inner_class_comment() {
    let mut class = InnerClass::new("Criteria");
    builder().add_class_comment(&mut class, &customer_table());
    assert_eq!(
        class.javadoc_lines(),
        ["/**", " * shop.customer 2024-01-01", " */"]
    );

    let mut class = InnerClass::new("Criteria");
    undated_builder().add_class_comment(&mut class, &customer_table());
    assert_eq!(class.javadoc_lines()[1], " * shop.customer ");
}

#[test]
fn test_marked_inner_class_comment() {
    let mut class = InnerClass::new("GeneratedCriteria");
    builder().add_class_comment_marked(&mut class, &customer_table(), true);

    assert_eq!(
        class.javadoc_lines(),
        [
            "/**",
            " * shop.customer",
            " *",
            " * @mbg.generated do_not_delete_during_merge 2024-01-01",
            " */"
        ]
    );
}

#[test]
fn test_marked_inner_class_without_mark() {
    let mut class = InnerClass::new("Criterion");
    undated_builder().add_class_comment_marked(&mut class, &customer_table(), false);

    assert_eq!(class.javadoc_lines()[3], " * @mbg.generated");
}

#[test]
fn test_marked_inner_class_has_no_author_line() {
    let mut class = InnerClass::new("GeneratedCriteria");
    builder().add_class_comment_marked(&mut class, &customer_table(), false);

    assert!(class.javadoc_lines().iter().all(|line| !line.contains("@author")));
}

#[test]
fn test_enum_comment_puts_tag_first() {
    let mut inner_enum = InnerEnum::new("Column");
    builder().add_enum_comment(&mut inner_enum, &customer_table());

    assert_eq!(
        inner_enum.javadoc_lines(),
        [
            "/**",
            " *",
            " * @mbg.generated 2024-01-01",
            " * shop.customer",
            " */"
        ]
    );
}

#[test]
fn test_getter_comment() {
    let mut method = Method::new("getEmail");
    builder().add_getter_comment(&mut method, &customer_table(), &email_column());

    assert_eq!(
        method.javadoc_lines(),
        [
            "/**",
            " * User email",
            " * @return email User email",
            " *",
            " * @mbg.generated 2024-01-01",
            " */"
        ]
    );
}

#[test]
fn test_setter_comment_uses_first_parameter() {
    let mut method = Method::new("setEmail").with_parameter(Parameter::new("String", "value"));
    builder().add_setter_comment(&mut method, &customer_table(), &email_column());

    assert_eq!(
        method.javadoc_lines(),
        [
            "/**",
            " * User email",
            " * @param value User email",
            " *",
            " * @mbg.generated 2024-01-01",
            " */"
        ]
    );
}

#[test]
fn test_setter_without_parameters_is_skipped() {
    let mut method = Method::new("setEmail");
    builder().add_setter_comment(&mut method, &customer_table(), &email_column());

    assert!(method.javadoc_lines().is_empty());
}

/// Collects formatted log output for inspection.
#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().expect("log buffer")).into_owned()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().expect("log buffer").extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

fn warnings_from(run: impl FnOnce()) -> String {
    let logs = CapturedLogs::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(logs.clone())
        .with_max_level(tracing::Level::WARN)
        .with_ansi(false)
        .finish();
    tracing::subscriber::with_default(subscriber, run);
    logs.contents()
}

#[test]
fn test_setter_without_parameters_logs_a_warning() {
    let logs = warnings_from(|| {
        let mut method = Method::new("setEmail");
        builder().add_setter_comment(&mut method, &customer_table(), &email_column());
    });

    assert!(logs.contains("WARN"));
    assert!(logs.contains("setEmail"));
}

#[test]
fn test_setter_without_parameters_is_silent_when_comments_suppressed() {
    let mut builder = builder();
    builder.configure(&[(SUPPRESS_ALL_COMMENTS, "true")].into_iter().collect());

    let mut method = Method::new("setEmail");
    let logs = warnings_from(|| {
        builder.add_setter_comment(&mut method, &customer_table(), &email_column());
    });

    assert!(method.javadoc_lines().is_empty());
    assert!(logs.is_empty(), "unexpected log output: {logs}");
}

#[test]
fn test_general_method_comment_has_no_tag_block() {
    let mut method = Method::new("selectByExample");
    builder().add_general_method_comment(&mut method, &customer_table());

    assert_eq!(
        method.javadoc_lines(),
        ["/**", " * @mbg.generated selectByExample", " */"]
    );
}

#[test]
fn test_missing_remarks_render_as_empty() {
    let table = TableMetadata::new(QualifiedTable::new("audit_log"));
    let column = ColumnMetadata::new("created_at");
    let mut method = Method::new("getCreatedAt");

    undated_builder().add_getter_comment(&mut method, &table, &column);

    assert_eq!(method.javadoc_lines()[1], " * ");
    assert_eq!(method.javadoc_lines()[2], " * @return created_at ");
    assert!(method.javadoc_lines().iter().all(|line| !line.contains("null")));
}

#[test]
fn test_comments_accumulate_on_the_same_element() {
    let builder = builder();
    let mut method = Method::new("getEmail");

    builder.add_getter_comment(&mut method, &customer_table(), &email_column());
    builder.add_getter_comment(&mut method, &customer_table(), &email_column());

    assert_eq!(method.javadoc_lines().len(), 12);
}

#[test]
fn test_configure_affects_only_later_comments() {
    let mut builder = builder();
    let mut before = Field::new("email");
    builder.add_field_comment(&mut before, &customer_table(), &email_column());

    let options: CommentOptions = [(SUPPRESS_DATE, "true")].into_iter().collect();
    builder.configure(&options);

    let mut after = Field::new("email");
    builder.add_field_comment(&mut after, &customer_table(), &email_column());

    assert_eq!(before.javadoc_lines()[3], " * @mbg.generated 2024-01-01");
    assert_eq!(after.javadoc_lines()[3], " * @mbg.generated");
}
