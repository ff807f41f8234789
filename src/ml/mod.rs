//! Machine-learning data utilities.

mod folds;

pub use folds::make_stratified_folds;
