mod corpus;
pub(crate) mod utils;
