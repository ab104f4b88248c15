pub mod assistant;
pub mod context_service;
pub mod context_service_impl;
pub mod credentials;
pub mod prompt;
pub mod resident_service;
pub mod resident_service_impl;
pub mod session;

pub use assistant::{Assistant, AssistantError};
pub use context_service::{ContextError, ContextService};
pub use context_service_impl::SeaOrmContextService;
pub use credentials::{CredentialProvider, FileCredentialProvider, StaticCredentialProvider};
pub use prompt::{PromptTemplate, PromptVars};
pub use resident_service::{CheckIn, ResidentError, ResidentService};
pub use resident_service_impl::SeaOrmResidentService;
pub use session::ChatSession;
