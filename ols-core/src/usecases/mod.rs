mod error;
mod geocode;
mod translate_answer;

#[cfg(test)]
pub mod tests;

pub use self::{
    error::{Error, TranslationError},
    geocode::*,
    translate_answer::*,
};

mod prelude {
    pub use super::error::{Error, TranslationError};
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{entities::*, response_code::ResponseCode};
}
