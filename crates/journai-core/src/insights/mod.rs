//! Journal insights
//!
//! Turns a user's dated journal records into the metrics shown on the
//! insights page: entry totals, average length, mood distribution, a daily
//! word-count trend, weekday activity and journaling streaks.
//!
//! Records come from an injected [`RecordStore`]; every call recomputes from
//! the store's current contents and nothing is cached.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use journai_core::insights::{InsightsEngine, TimeRange};
//!
//! let engine = InsightsEngine::new(&db);
//! let insights = engine.compute(user_id, TimeRange::Month, Some("happy"))?;
//! ```

pub mod engine;
pub mod streaks;
pub mod types;

pub use engine::{InsightsEngine, RecordStore, TREND_DAYS, WEEKDAYS};
pub use streaks::{calculate_streaks, Streaks};
pub use types::{InsightResult, MoodCount, TimeRange, TrendPoint, WeekdayActivity};
