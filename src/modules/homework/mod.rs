pub mod model;
pub mod schema;

pub use model::HomeworkStatus;
pub use schema::ApiErrorCode;
