//! Trial execution and the sequential experiment loop.

mod experiment;
mod trial;


pub use experiment::run_experiment_loop;
pub use trial::run_trial;
