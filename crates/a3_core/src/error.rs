use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    #[error("Invalid member: {0}")]
    InvalidMember(String),

    #[error("Too many members: {count} requested, at most {max} allowed")]
    TooManyMembers { count: usize, max: usize },
}
