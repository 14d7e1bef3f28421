#![deny(clippy::all)]

//! Javadoc comment generation for table-driven Java code generators.
//!
//! A generator that maps database tables onto model classes, mappers and
//! example classes hands each element it creates to a [`CommentBuilder`],
//! which appends a Javadoc block built from the table and column remarks.
//!
//! This crate provides:
//! - [`CommentBuilder`], configured once from string options and then called per element.
//! - [`render`](render::render), the pure line-by-line formatting behind every comment variant.
//! - [`CommentOptions`] and [`CommentSettings`], with TOML/environment loading.
//! - Minimal metadata and code-model types to carry the inputs and collect the output.
//!
//! Generated blocks carry the `@mbg.generated` tag so a merge tool can find
//! them again on the next run. Setting `suppressDate` drops the date from
//! every block; `suppressAllComments` turns comment generation off.
//!
//! ```
//! use chrono::NaiveDate;
//! use mbgdoc::{CommentBuilder, CommentOptions, QualifiedTable, TableMetadata, TopLevelClass};
//!
//! let mut builder = CommentBuilder::with_date(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
//! builder.configure(&[("suppressDate", "true")].into_iter().collect::<CommentOptions>());
//!
//! let table = TableMetadata::new(QualifiedTable::new("customer"))
//!     .with_remarks("Customer table")
//!     .with_table_type("TABLE");
//! let mut class = TopLevelClass::new("Customer");
//! builder.add_model_class_comment(&mut class, &table);
//!
//! assert_eq!(class.javadoc_lines(), ["/**", " * Customer table TABLE ", " */"]);
//! ```

pub mod builder;
pub mod dom;
pub mod error;
pub mod metadata;
pub mod options;
pub mod render;

#[cfg(feature = "logging")]
pub mod logging;

pub use builder::{CommentBuilder, DATE_FORMAT};
pub use dom::{
    CompilationUnit, Field, InnerClass, InnerEnum, JavaElement, Method, Parameter, TopLevelClass,
    XmlElement,
};
pub use error::{ConfigError, Result};
pub use metadata::{ColumnMetadata, QualifiedTable, TableMetadata};
pub use options::{CommentOptions, CommentSettings, SUPPRESS_ALL_COMMENTS, SUPPRESS_DATE};
pub use render::{CommentContext, CommentKind, DO_NOT_DELETE_TAG, NEW_ELEMENT_TAG};
