mod use_case_resolver;

pub use use_case_resolver::UseCaseResolver;
