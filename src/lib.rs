extern crate self as credence;

#[macro_use]
mod macros;
mod api;
mod engine;
mod lexicon;

pub use api::{
    Adjustment, Analysis, AnalysisDetails, AnalysisVerbose, ScoreBreakdown, SignalSet, Verdict, analyze,
    analyze_verbose, analyze_verbose_with, analyze_with,
};
pub use lexicon::Lexicons;
