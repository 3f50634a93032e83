pub mod check;
pub mod dispatch;
pub mod fragment;
pub mod grade;
pub mod schema;
