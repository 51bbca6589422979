use appliance_domain::error::DomainError;

#[non_exhaustive]
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("domain: {0}")]
    Domain(#[from] DomainError),

    #[error("slot out of range: slot={slot}, slots={slots}")]
    SlotOutOfRange { slot: usize, slots: usize },

    #[error("empty slot: {0}")]
    EmptySlot(usize),

    #[error("nothing to undo")]
    NothingToUndo,

    #[error("config: {0}")]
    Config(String),
}

pub type AppResult<T> = Result<T, AppError>;
