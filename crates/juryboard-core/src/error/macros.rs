//! Error macros for juryboard

/// Macro for creating invalid value errors
#[macro_export]
macro_rules! bail_invalid {
    ($context:expr, $value:expr) => {
        return Err($crate::error::JuryError::invalid_value($context, $value))
    };
}

/// Macro for creating usage errors
#[macro_export]
macro_rules! bail_usage {
    ($msg:expr) => {
        return Err($crate::error::JuryError::UsageError($msg.to_string()))
    };
}

/// Macro for creating not-found errors
#[macro_export]
macro_rules! bail_not_found {
    ($context:expr, $value:expr) => {
        return Err($crate::error::JuryError::not_found($context, $value))
    };
}
