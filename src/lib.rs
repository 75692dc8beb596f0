//! sectionstamp: stamp section numbers and page breaks onto markdown book chapters.
//!
//! An outline maps each chapter file to a hierarchical section number and title. Running the
//! batch rewrites every chapter's first `# ` heading to `# {number} {title}` and makes sure a
//! page-break `<div>` opens the document, so the printed book starts each chapter on a new page.
#![allow(clippy::multiple_crate_versions)]

pub mod annotate;
pub mod batch;
pub mod check;
pub mod config;
pub mod error;
pub mod formats;
pub mod report;
pub mod section;
