//! Personal nutrition tracking for humans and AI agents — log meals, search
//! a local food database, and track progress against daily macro goals.
//!
//! nosh is a CLI and an [MCP](https://modelcontextprotocol.io/) server over
//! one local SQLite database. Meals go into an append-only ledger; goals
//! are configured per macro (calories, protein, carbs, fat) with a
//! direction and an optional tolerance band; the analytics engine derives
//! everything else on the fly:
//!
//! | Output | Meaning |
//! |--------|---------|
//! | **Zones** | Today's actual vs goal: `met`, `near` (inside the tolerance band), or missed |
//! | **Streaks** | Current and best runs of consecutive on-goal days, per macro and across all goals |
//! | **Weekly average** | Trailing 7-day averages over days that actually have data |
//!
//! # Architecture
//!
//! - **Storage**: SQLite with FTS5 for food search; daily totals are always
//!   re-derived from the meal ledger, never cached
//! - **Food data**: local import of a USDA FoodData Central JSON dump,
//!   searchable by keyword or barcode
//! - **Transport**: MCP over stdio (primary) or streamable HTTP
//!
//! # Modules
//!
//! - [`config`] — Configuration loading from TOML files and environment variables
//! - [`db`] — SQLite database initialization, schema, migrations, and health checks
//! - [`food`] — Food database import, keyword search, and barcode lookup
//! - [`tracker`] — Core engine: meal ledger, goals, zones, streaks, weekly averages

pub mod config;
pub mod db;
pub mod food;
pub mod tracker;
