use thiserror::Error;

#[derive(Error, Debug)]
pub enum EnvError {
    #[error("unknown environment id: {0}")]
    UnknownEnv(String),

    #[error("environment id already registered: {0}")]
    DuplicateId(String),

    #[error("failed to construct environment: {0}")]
    Construction(String),

    #[error("missing dependency: {0}")]
    MissingDependency(String),

    #[error("unsupported action space: {0}")]
    UnsupportedSpace(String),

    #[error("illegal action: {0}")]
    IllegalAction(String),

    #[error("failed to sample action: {0}")]
    Sample(String),

    #[error("environment error: {0}")]
    EnvError(#[from] Box<dyn std::error::Error + Send + Sync>),
}

impl EnvError {
    /// Errors an environment raises when it simply cannot run here, as opposed
    /// to a defect in an environment that should work.
    pub fn is_unsupported(&self) -> bool {
        matches!(
            self,
            EnvError::UnknownEnv(_)
                | EnvError::Construction(_)
                | EnvError::MissingDependency(_)
                | EnvError::UnsupportedSpace(_)
        )
    }
}
