pub mod books;
pub mod planner;
pub mod templates;

pub use books::{auto_pick_books, auto_pick_books_with_rng, BOOK_BANK};
pub use planner::{
    build_day_plan, build_day_plan_with_rng, build_week_plan, build_week_plan_with_rng, weekday_dates,
    GeneratedPlan, PlanContext, PlanError,
};
