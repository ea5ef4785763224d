//! Timetable combination engine.
//!
//! Given a catalog of classes, each offering several mutually exclusive
//! schedule options, finds every choice of one option per class that
//! forms a valid weekly timetable: no two classes meet at overlapping
//! times on a shared day, no two options imply the same exam at
//! overlapping times, and every class meets inside the caller's accepted
//! daily window.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `TimeRange`, `WeekdaySet`, `Exam`,
//!   `ScheduleOption`, `Class`, `Catalog`, `Combination`
//! - **`scheduler`**: Window check, combination validator, exhaustive
//!   enumerator (`Planner`)
//! - **`validation`**: Catalog integrity checks for ingestion code
//! - **`config`**: JSON-loadable planner settings
//! - **`pager`**: Navigation cursor for renderers paging through results
//!
//! # Example
//!
//! ```
//! use u_timetable::models::{Catalog, Class, ScheduleOption};
//! use u_timetable::scheduler::enumerate_valid_combinations;
//!
//! let option = |group: u32, days: &str, time: &str| {
//!     ScheduleOption::new(group, days.parse().unwrap(), time.parse().unwrap())
//! };
//! let catalog = Catalog::new()
//!     .with_class(
//!         Class::new("Calculus")
//!             .with_option(option(1, "lun-mie", "09:00-10:30"))
//!             .with_option(option(2, "mar-jue", "09:00-10:30")),
//!     )
//!     .with_class(Class::new("Physics").with_option(option(1, "mie", "10:30-12:00")));
//!
//! let window = "09:00-16:30".parse().unwrap();
//! let combinations = enumerate_valid_combinations(catalog.classes(), &window);
//! assert_eq!(combinations.len(), 2); // back-to-back on Wednesday is fine
//! ```

pub mod config;
pub mod error;
pub mod models;
pub mod pager;
pub mod scheduler;
pub mod validation;

pub use error::{Error, Result};
