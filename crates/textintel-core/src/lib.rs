//! textintel core library
//!
//! Request model, validation and the provider client for the text
//! intelligence service.

pub mod analysis;
pub mod error;
pub mod meta;
pub mod provider;

pub use analysis::model::{AnalysisBody, AnalysisInput, AnalysisRequest, AnalysisResult, Feature};
pub use analysis::options::{AnalysisOptions, AnalysisQuery, Summarize};
pub use error::{ErrorCode, TextIntelError, TextIntelResult};
pub use provider::{DeepgramClient, DeepgramConfig, TextIntelligenceProvider};
