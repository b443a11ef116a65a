pub mod codegen_model_config;
pub mod default_config;
