pub mod forms;

pub use forms::{FormRequest, FormView};
