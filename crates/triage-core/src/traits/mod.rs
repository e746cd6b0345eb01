mod classifier;
mod session_store;

pub use classifier::IConditionClassifier;
pub use session_store::ISessionStore;
