use levelized::engine::industry::IndustryParameters;
use levelized::workflows::evaluate::FailurePolicy;
use std::path::PathBuf;

pub struct AppConfig {
    pub input_path: PathBuf,
    pub parameters: IndustryParameters,
    pub failure_policy: FailurePolicy,
}
