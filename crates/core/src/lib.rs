//! Core library for textools
//!
//! This crate implements the **Functional Core** of the textools application,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! The textools project uses a two-crate architecture to enforce separation of concerns:
//!
//! - **`textools_core`** (this crate): Pure transformation functions with zero I/O
//! - **`textools`**: Input resolution, option parsing and rendering (the Imperative Shell)
//!
//! ## Functional Core Principles
//!
//! All functions in this crate adhere to these principles:
//!
//! - **Pure functions**: Same input always produces the same output
//! - **No side effects**: No I/O operations, no external state mutations
//! - **Deterministic**: Behavior is predictable and reproducible
//! - **Testable**: Can be tested with simple fixture data, no mocking required
//!
//! # Module Organization
//!
//! The core crate is organized by transform:
//!
//! - [`csv`]: Quote-aware delimited-text parsing
//! - [`records`]: Projection of parsed rows into typed JSON records
//! - [`markdown`]: Markdown subset to HTML conversion
//! - [`md5`]: MD5 message digest
//! - [`case`]: Text case conversion family
//! - [`slug`]: URL slug generation
//!
//! The transforms are independent of each other: none calls another, none
//! holds state, and each is safe to invoke concurrently from independent
//! call sites.
//!
//! # Example Usage
//!
//! ```rust,ignore
//! use textools_core::csv::parse_csv;
//! use textools_core::records::{project_records, records_to_json};
//!
//! let rows = parse_csv("a,b\n1,true\n", ',');
//! let records = project_records(&rows, true, true)?;
//! println!("{}", records_to_json(&records));
//! ```

pub mod case;
pub mod csv;
pub mod markdown;
pub mod md5;
pub mod records;
pub mod slug;
