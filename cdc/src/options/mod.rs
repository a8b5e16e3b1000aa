pub mod declaration;
pub mod registry;
pub mod validated;
pub mod validator;

pub use declaration::{OptionDeclaration, OptionKind, OptionValue};
pub use registry::{ConnectorFamily, OptionRegistry};
pub use validated::ValidatedOptions;
pub use validator::validate;
