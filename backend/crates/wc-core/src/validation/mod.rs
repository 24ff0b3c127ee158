pub mod content_validator;
