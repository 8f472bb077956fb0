// Route modules, one per resource
pub mod evals;
pub mod health;
