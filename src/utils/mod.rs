pub mod validate;

pub use validate::{
    parse_problem_ids, validate_attachment_name, validate_time_window, validate_title,
};
