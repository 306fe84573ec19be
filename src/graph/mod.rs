mod dependencies;
mod model;

pub use dependencies::DependencyResolver;
pub use model::FORM_NODE_TYPE;
