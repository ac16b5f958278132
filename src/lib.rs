//! Salary disclosure explorer: loads yearly CSV disclosures, groups rows by
//! person, and serves name search and earnings-ranked browsing over the
//! aggregate.

pub mod fetch;
pub mod process;
pub mod query;
pub mod ui;
pub mod view;
