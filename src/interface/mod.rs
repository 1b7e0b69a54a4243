pub mod prompts;
pub mod render;

pub use prompts::{prompt_category, prompt_sugar, prompt_volume, prompt_yes_no, resolve_category};
pub use render::{
    display_analysis, display_drink_log, display_goal_progress, display_insight,
    display_long_term_summary, display_reminder, display_weekly_chart,
};
